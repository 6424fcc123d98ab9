use userhub::db::Store;
use userhub::domain::{ClaimValue, LoginInfo, UserId};
use userhub::models::User;
use userhub::services::{
    RoleService, SeaOrmRoleService, SeaOrmUserService, UserError, UserService,
};
use uuid::Uuid;

async fn memory_services() -> (SeaOrmUserService, SeaOrmRoleService) {
    // Single-connection pool: every pooled connection to sqlite::memory:
    // would otherwise get its own private database.
    let store = Store::with_pool_options("sqlite::memory:", 1, 1)
        .await
        .expect("Failed to create in-memory store");

    (
        SeaOrmUserService::new(store.clone()),
        SeaOrmRoleService::new(store),
    )
}

fn unknown_user() -> UserId {
    UserId::new(Uuid::new_v4())
}

#[tokio::test]
async fn create_then_find_by_id_round_trips() {
    let (users, _) = memory_services().await;

    let created = users.create_user(User::new("alice")).await.unwrap();
    let found = users.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.username, "alice");
}

#[tokio::test]
async fn find_by_name_finds_created_user() {
    let (users, _) = memory_services().await;

    users.create_user(User::new("bob")).await.unwrap();

    let found = users.find_by_name("bob").await.unwrap().unwrap();
    assert_eq!(found.username, "bob");

    assert!(users.find_by_name("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn create_user_rejects_blank_username() {
    let (users, _) = memory_services().await;

    let err = users.create_user(User::new("   ")).await.unwrap_err();
    assert!(matches!(err, UserError::InvalidArgument(_)));
}

#[tokio::test]
async fn rename_persists_new_username() {
    let (users, _) = memory_services().await;

    let mut user = users.create_user(User::new("carol")).await.unwrap();
    user.username = "caroline".to_string();
    users.update_user(&user).await.unwrap();

    let found = users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(found.username, "caroline");
    assert!(users.find_by_name("carol").await.unwrap().is_none());
}

#[tokio::test]
async fn update_unknown_user_fails() {
    let (users, _) = memory_services().await;

    let ghost = User::new("ghost");
    let err = users.update_user(&ghost).await.unwrap_err();
    assert!(matches!(err, UserError::UserNotFound(_)));
}

#[tokio::test]
async fn delete_unknown_user_fails() {
    let (users, _) = memory_services().await;

    let ghost = User::new("ghost");
    let err = users.delete_user(&ghost).await.unwrap_err();
    assert!(matches!(err, UserError::UserNotFound(_)));
}

#[tokio::test]
async fn claims_round_trip() {
    let (users, _) = memory_services().await;

    let user = users.create_user(User::new("dave")).await.unwrap();
    let claim = ClaimValue::new("dept", "engineering");

    users.add_claim(user.id, &claim).await.unwrap();

    let claims = users.get_claims(user.id).await.unwrap();
    assert!(claims.contains(&claim));

    users.remove_claim(user.id, &claim).await.unwrap();

    let claims = users.get_claims(user.id).await.unwrap();
    assert!(!claims.contains(&claim));
}

#[tokio::test]
async fn removing_missing_claim_is_a_noop() {
    let (users, _) = memory_services().await;

    let user = users.create_user(User::new("erin")).await.unwrap();
    users
        .add_claim(user.id, &ClaimValue::new("dept", "sales"))
        .await
        .unwrap();

    let before = users.get_claims(user.id).await.unwrap();

    users
        .remove_claim(user.id, &ClaimValue::new("dept", "engineering"))
        .await
        .unwrap();

    let after = users.get_claims(user.id).await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn duplicate_claim_pairs_go_one_per_removal() {
    let (users, _) = memory_services().await;

    let user = users.create_user(User::new("frank")).await.unwrap();
    let claim = ClaimValue::new("scope", "read");

    users.add_claim(user.id, &claim).await.unwrap();
    users.add_claim(user.id, &claim).await.unwrap();
    assert_eq!(users.get_claims(user.id).await.unwrap().len(), 2);

    users.remove_claim(user.id, &claim).await.unwrap();
    assert_eq!(users.get_claims(user.id).await.unwrap().len(), 1);

    users.remove_claim(user.id, &claim).await.unwrap();
    assert!(users.get_claims(user.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn logins_round_trip() {
    let (users, _) = memory_services().await;

    let user = users.create_user(User::new("grace")).await.unwrap();
    let info = LoginInfo::new("github", "octocat-1");

    users.add_login(user.id, info.clone()).await.unwrap();

    let logins = users.get_logins(user.id).await.unwrap();
    assert!(logins.contains(&info));

    users.remove_login(user.id, &info).await.unwrap();

    let logins = users.get_logins(user.id).await.unwrap();
    assert!(!logins.contains(&info));
}

#[tokio::test]
async fn find_login_needs_no_user_context() {
    let (users, _) = memory_services().await;

    let user = users.create_user(User::new("heidi")).await.unwrap();
    let info = LoginInfo::new("gitlab", "u-42");

    users.add_login(user.id, info.clone()).await.unwrap();

    let found = users.find_login(&info).await.unwrap().unwrap();
    assert_eq!(found.user_id, user.id);
    assert_eq!(found.info(), info);

    users.remove_login(user.id, &info).await.unwrap();
    assert!(users.find_login(&info).await.unwrap().is_none());
}

#[tokio::test]
async fn removing_missing_login_is_a_noop() {
    let (users, _) = memory_services().await;

    let user = users.create_user(User::new("ivan")).await.unwrap();

    users
        .remove_login(user.id, &LoginInfo::new("github", "nope"))
        .await
        .unwrap();

    assert!(users.get_logins(user.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn role_membership_round_trips() {
    let (users, roles) = memory_services().await;

    roles.create_role("admin").await.unwrap();
    let user = users.create_user(User::new("judy")).await.unwrap();

    users.add_to_role(user.id, "admin").await.unwrap();
    assert!(users.is_in_role(user.id, "admin").await.unwrap());
    assert_eq!(users.get_roles(user.id).await.unwrap(), vec!["admin"]);

    users.remove_from_role(user.id, "admin").await.unwrap();
    assert!(!users.is_in_role(user.id, "admin").await.unwrap());
    assert!(users.get_roles(user.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn granting_a_role_twice_is_a_noop() {
    let (users, roles) = memory_services().await;

    roles.create_role("auditor").await.unwrap();
    let user = users.create_user(User::new("kate")).await.unwrap();

    users.add_to_role(user.id, "auditor").await.unwrap();
    users.add_to_role(user.id, "auditor").await.unwrap();

    assert_eq!(users.get_roles(user.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn add_to_unknown_role_fails() {
    let (users, _) = memory_services().await;

    let user = users.create_user(User::new("leo")).await.unwrap();

    let err = users.add_to_role(user.id, "missing").await.unwrap_err();
    assert!(matches!(err, UserError::RoleNotFound(name) if name == "missing"));
}

#[tokio::test]
async fn blank_role_name_is_rejected() {
    let (users, _) = memory_services().await;

    let user = users.create_user(User::new("mary")).await.unwrap();

    let err = users.add_to_role(user.id, "").await.unwrap_err();
    assert!(matches!(err, UserError::InvalidArgument(_)));

    let err = users.is_in_role(user.id, "   ").await.unwrap_err();
    assert!(matches!(err, UserError::InvalidArgument(_)));
}

#[tokio::test]
async fn mutations_with_unknown_user_fail_and_persist_nothing() {
    let (users, roles) = memory_services().await;

    roles.create_role("admin").await.unwrap();
    let ghost = unknown_user();

    let err = users
        .add_claim(ghost, &ClaimValue::new("dept", "qa"))
        .await
        .unwrap_err();
    assert!(matches!(err, UserError::UserNotFound(_)));

    let err = users.get_claims(ghost).await.unwrap_err();
    assert!(matches!(err, UserError::UserNotFound(_)));

    let err = users
        .add_login(ghost, LoginInfo::new("github", "x"))
        .await
        .unwrap_err();
    assert!(matches!(err, UserError::UserNotFound(_)));

    let err = users.add_to_role(ghost, "admin").await.unwrap_err();
    assert!(matches!(err, UserError::UserNotFound(_)));

    // Nothing leaked into the store: the login key is still free.
    assert!(
        users
            .find_login(&LoginInfo::new("github", "x"))
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn deleting_a_user_cascades_but_spares_roles() {
    let (users, roles) = memory_services().await;

    roles.create_role("admin").await.unwrap();
    let user = users.create_user(User::new("nina")).await.unwrap();
    let info = LoginInfo::new("github", "nina-gh");

    users
        .add_claim(user.id, &ClaimValue::new("dept", "ops"))
        .await
        .unwrap();
    users.add_login(user.id, info.clone()).await.unwrap();
    users.add_to_role(user.id, "admin").await.unwrap();

    users.delete_user(&user).await.unwrap();

    assert!(users.find_by_id(user.id).await.unwrap().is_none());
    assert!(users.find_login(&info).await.unwrap().is_none());

    // The shared role definition outlives its members.
    assert!(roles.find_by_name("admin").await.unwrap().is_some());
}
