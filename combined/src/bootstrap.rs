//! Startup seeding of the store.

use uuid::Uuid;

use common::{AppResult, BaseAdminConfig};
use domain::NewUser;
use user_service_lib::UserService;

/// Create the configured administrator so the API is usable from an empty
/// store.
pub async fn create_base_admin(users: &dyn UserService, admin: &BaseAdminConfig) -> AppResult<Uuid> {
    let id = users
        .create_user(NewUser {
            email: admin.email.clone(),
            username: admin.username.clone(),
            password: admin.password.clone(),
            admin: true,
        })
        .await?;

    tracing::info!(%id, username = %admin.username, "Base administrator created");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use common::AppError;
    use domain::Password;
    use storage::{IndexedUserStore, UserStore};
    use user_service_lib::{StoreUserRepository, UserManager};

    fn users_over(store: Arc<IndexedUserStore>) -> UserManager {
        UserManager::new(Arc::new(StoreUserRepository::new(store)))
    }

    #[tokio::test]
    async fn test_base_admin_is_stored_hashed() {
        let store = Arc::new(IndexedUserStore::new());
        let users = users_over(store.clone());

        let id = create_base_admin(&users, &BaseAdminConfig::default())
            .await
            .unwrap();

        let record = store.get_user_by_username("admin").unwrap();
        assert_eq!(record.id, id);
        assert!(record.admin);
        assert!(Password::from_hash(record.password).verify("admin"));
    }

    #[tokio::test]
    async fn test_second_bootstrap_conflicts() {
        let store = Arc::new(IndexedUserStore::new());
        let users = users_over(store.clone());
        let admin = BaseAdminConfig::default();

        create_base_admin(&users, &admin).await.unwrap();
        let result = create_base_admin(&users, &admin).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(store.len(), 1);
    }
}
