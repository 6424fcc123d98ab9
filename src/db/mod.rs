use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::domain::{ClaimValue, LoginInfo, RoleId, UserId};
use crate::models::{ExternalLogin, Role, User};

pub mod migrator;
pub mod repositories;

/// Facade over the connection pool and the per-aggregate repositories.
///
/// Every mutating method is one commit against the backend; multi-statement
/// operations run inside a single transaction in their repository.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.starts_with(":memory:") && !db_url.contains("::memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn role_repo(&self) -> repositories::role::RoleRepository {
        repositories::role::RoleRepository::new(self.conn.clone())
    }

    fn login_repo(&self) -> repositories::login::LoginRepository {
        repositories::login::LoginRepository::new(self.conn.clone())
    }

    pub async fn add_user(&self, user: &User) -> Result<()> {
        self.user_repo().add(user).await
    }

    pub async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>> {
        self.user_repo().find_by_id(id).await
    }

    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.user_repo().find_by_username(username).await
    }

    pub async fn update_user(&self, user: &User) -> Result<bool> {
        self.user_repo().update(user).await
    }

    pub async fn remove_user(&self, id: UserId) -> Result<bool> {
        self.user_repo().remove(id).await
    }

    pub async fn add_claim(&self, user_id: UserId, claim: &ClaimValue) -> Result<()> {
        self.user_repo().add_claim(user_id, claim).await
    }

    pub async fn claims_for_user(&self, user_id: UserId) -> Result<Vec<ClaimValue>> {
        self.user_repo().claims(user_id).await
    }

    pub async fn remove_claim(&self, user_id: UserId, claim: &ClaimValue) -> Result<bool> {
        self.user_repo().remove_claim(user_id, claim).await
    }

    pub async fn add_login(&self, login: &ExternalLogin) -> Result<()> {
        self.login_repo().add(login).await
    }

    pub async fn find_login(&self, info: &LoginInfo) -> Result<Option<ExternalLogin>> {
        self.login_repo().get_by_provider_and_key(info).await
    }

    pub async fn logins_for_user(&self, user_id: UserId) -> Result<Vec<LoginInfo>> {
        self.login_repo().for_user(user_id).await
    }

    pub async fn remove_login(&self, user_id: UserId, info: &LoginInfo) -> Result<bool> {
        self.login_repo().remove(user_id, info).await
    }

    pub async fn add_role(&self, role: &Role) -> Result<()> {
        self.role_repo().add(role).await
    }

    pub async fn find_role_by_id(&self, id: RoleId) -> Result<Option<Role>> {
        self.role_repo().find_by_id(id).await
    }

    pub async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>> {
        self.role_repo().find_by_name(name).await
    }

    pub async fn list_roles(&self) -> Result<Vec<Role>> {
        self.role_repo().list().await
    }

    pub async fn update_role(&self, role: &Role) -> Result<bool> {
        self.role_repo().update(role).await
    }

    pub async fn remove_role(&self, id: RoleId) -> Result<bool> {
        self.role_repo().remove(id).await
    }

    pub async fn add_role_member(&self, user_id: UserId, role_id: RoleId) -> Result<()> {
        self.role_repo().add_member(user_id, role_id).await
    }

    pub async fn remove_role_member(&self, user_id: UserId, role_id: RoleId) -> Result<bool> {
        self.role_repo().remove_member(user_id, role_id).await
    }

    pub async fn roles_for_user(&self, user_id: UserId) -> Result<Vec<Role>> {
        self.role_repo().for_user(user_id).await
    }
}
