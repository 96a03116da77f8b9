//! Application state for dependency injection.

use std::sync::Arc;

use auth_service_lib::{AuthService, Authenticator, StoreAuthRepository};
use storage::UserStore;
use user_service_lib::{StoreUserRepository, UserManager, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        store: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            store,
        }
    }

    /// Wire both services to one shared store.
    pub fn from_store(store: Arc<dyn UserStore>) -> Self {
        let auth_service = Arc::new(Authenticator::new(Arc::new(StoreAuthRepository::new(
            store.clone(),
        ))));
        let user_service = Arc::new(UserManager::new(Arc::new(StoreUserRepository::new(
            store.clone(),
        ))));

        Self::new(auth_service, user_service, store)
    }
}
