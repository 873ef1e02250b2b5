//! Authentication service

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    config::AdminConfig,
    error::{AppError, AppResult},
    models::AdminInfo,
    repository::Repository,
    services::sessions::SessionStore,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    sessions: Arc<SessionStore>,
}

impl AuthService {
    pub fn new(repository: Repository, sessions: Arc<SessionStore>) -> Self {
        Self {
            repository,
            sessions,
        }
    }

    /// Verify credentials and open a session. Returns the session token
    /// and the authenticated admin.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<(String, AdminInfo)> {
        let admin = self
            .repository
            .admins
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid credentials".to_string()))?;

        if !verify_password(&admin.password_hash, password)? {
            return Err(AppError::Authentication("Invalid credentials".to_string()));
        }

        let info = AdminInfo::from(&admin);
        let token = self.sessions.create(info.clone());
        tracing::info!("Admin '{}' logged in", info.username);
        Ok((token, info))
    }

    /// Close the session for a token, if one exists
    pub fn logout(&self, token: &str) {
        self.sessions.revoke(token);
    }

    /// Resolve a token to the authenticated admin, if any
    pub fn authenticate(&self, token: &str) -> Option<AdminInfo> {
        self.sessions.resolve(token)
    }

    /// Seed the admin account when the admin table is empty. The password
    /// is stored as an argon2 hash; a warning is logged while the shipped
    /// default credentials are still in use.
    pub async fn seed_admin(&self, config: &AdminConfig) -> AppResult<()> {
        if self.repository.admins.count().await? > 0 {
            return Ok(());
        }

        if config.password == "admin123" {
            tracing::warn!(
                "Seeding admin account with the default password; set \
                 LIBRARIUM_ADMIN_PASSWORD before exposing this server"
            );
        }

        let hash = hash_password(&config.password)?;
        let id = self.repository.admins.create(&config.username, &hash).await?;
        tracing::info!("Seeded admin account '{}' (id={})", config.username, id);
        Ok(())
    }
}

fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AppError::Internal(format!("Invalid hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::testing;

    fn service(repository: Repository) -> AuthService {
        AuthService::new(repository, Arc::new(SessionStore::new(24)))
    }

    fn seed_config() -> AdminConfig {
        AdminConfig {
            username: "admin".to_string(),
            password: "s3cret".to_string(),
        }
    }

    #[tokio::test]
    async fn seed_then_login() {
        let auth = service(Repository::new(testing::pool().await));
        auth.seed_admin(&seed_config()).await.unwrap();

        let (token, admin) = auth.login("admin", "s3cret").await.unwrap();
        assert_eq!(admin.username, "admin");

        let resolved = auth.authenticate(&token).unwrap();
        assert_eq!(resolved.id, admin.id);
    }

    #[tokio::test]
    async fn seed_is_skipped_when_an_admin_exists() {
        let repository = Repository::new(testing::pool().await);
        let auth = service(repository.clone());
        auth.seed_admin(&seed_config()).await.unwrap();
        auth.seed_admin(&seed_config()).await.unwrap();
        assert_eq!(repository.admins.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let auth = service(Repository::new(testing::pool().await));
        auth.seed_admin(&seed_config()).await.unwrap();

        let err = auth.login("admin", "wrong").await.unwrap_err();
        assert!(matches!(err, AppError::Authentication(_)));
    }

    #[tokio::test]
    async fn unknown_user_is_rejected() {
        let auth = service(Repository::new(testing::pool().await));
        let err = auth.login("ghost", "s3cret").await.unwrap_err();
        assert!(matches!(err, AppError::Authentication(_)));
    }

    #[tokio::test]
    async fn logout_revokes_the_session() {
        let auth = service(Repository::new(testing::pool().await));
        auth.seed_admin(&seed_config()).await.unwrap();

        let (token, _) = auth.login("admin", "s3cret").await.unwrap();
        auth.logout(&token);
        assert!(auth.authenticate(&token).is_none());
    }
}
