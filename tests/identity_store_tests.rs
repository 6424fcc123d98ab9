use std::sync::Arc;

use userhub::db::Store;
use userhub::domain::{ClaimValue, LoginInfo};
use userhub::identity::{
    IdentityStoreError, IdentityUser, RoleStore, ServiceRoleStore, ServiceUserStore, UserStore,
};
use userhub::services::{SeaOrmRoleService, SeaOrmUserService, UserError};
use uuid::Uuid;

async fn stores() -> (ServiceUserStore, ServiceRoleStore) {
    // Single-connection pool: every pooled connection to sqlite::memory:
    // would otherwise get its own private database.
    let store = Store::with_pool_options("sqlite::memory:", 1, 1)
        .await
        .expect("Failed to create in-memory store");

    let users = Arc::new(SeaOrmUserService::new(store.clone()));
    let roles = Arc::new(SeaOrmRoleService::new(store));

    (ServiceUserStore::new(users), ServiceRoleStore::new(roles))
}

fn framework_user(username: &str) -> IdentityUser {
    IdentityUser {
        id: Uuid::new_v4(),
        username: username.to_string(),
    }
}

#[tokio::test]
async fn create_keeps_the_framework_supplied_id() {
    let (users, _) = stores().await;

    let wanted = framework_user("alice");
    let created = users.create(wanted.clone()).await.unwrap();
    assert_eq!(created, wanted);

    let by_id = users.find_by_id(wanted.id).await.unwrap().unwrap();
    assert_eq!(by_id.username, "alice");

    let by_name = users.find_by_name("alice").await.unwrap().unwrap();
    assert_eq!(by_name.id, wanted.id);
}

#[tokio::test]
async fn update_changes_the_username() {
    let (users, _) = stores().await;

    let mut user = users.create(framework_user("bob")).await.unwrap();
    user.username = "robert".to_string();
    users.update(&user).await.unwrap();

    let found = users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(found.username, "robert");
}

#[tokio::test]
async fn delete_removes_the_user() {
    let (users, _) = stores().await;

    let user = users.create(framework_user("carol")).await.unwrap();
    users.delete(&user).await.unwrap();

    assert!(users.find_by_id(user.id).await.unwrap().is_none());
}

#[tokio::test]
async fn claims_flow_through_the_store_contract() {
    let (users, _) = stores().await;

    let user = users.create(framework_user("dave")).await.unwrap();
    let claim = ClaimValue::new("dept", "engineering");

    users.add_claim(user.id, claim.clone()).await.unwrap();
    assert!(users.get_claims(user.id).await.unwrap().contains(&claim));

    users.remove_claim(user.id, &claim).await.unwrap();
    assert!(users.get_claims(user.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn find_by_login_resolves_the_owning_user() {
    let (users, _) = stores().await;

    let user = users.create(framework_user("erin")).await.unwrap();
    let info = LoginInfo::new("github", "erin-gh");

    users.add_login(user.id, info.clone()).await.unwrap();

    let owner = users.find_by_login(&info).await.unwrap().unwrap();
    assert_eq!(owner, user);

    users.remove_login(user.id, &info).await.unwrap();
    assert!(users.find_by_login(&info).await.unwrap().is_none());
}

#[tokio::test]
async fn role_membership_through_both_stores() {
    let (users, roles) = stores().await;

    roles.create("admin").await.unwrap();
    let user = users.create(framework_user("frank")).await.unwrap();

    users.add_to_role(user.id, "admin").await.unwrap();
    assert!(users.is_in_role(user.id, "admin").await.unwrap());
    assert_eq!(users.get_roles(user.id).await.unwrap(), vec!["admin"]);

    users.remove_from_role(user.id, "admin").await.unwrap();
    assert!(!users.is_in_role(user.id, "admin").await.unwrap());
}

#[tokio::test]
async fn role_store_crud_round_trips() {
    let (_, roles) = stores().await;

    let mut role = roles.create("auditor").await.unwrap();
    assert_eq!(role.name, "auditor");

    let found = roles.find_by_name("auditor").await.unwrap().unwrap();
    assert_eq!(found.id, role.id);

    role.name = "reviewer".to_string();
    roles.update(&role).await.unwrap();
    assert!(roles.find_by_name("auditor").await.unwrap().is_none());

    let renamed = roles.find_by_id(role.id).await.unwrap().unwrap();
    assert_eq!(renamed.name, "reviewer");

    roles.delete(&role).await.unwrap();
    assert!(roles.find_by_id(role.id).await.unwrap().is_none());
}

#[tokio::test]
async fn domain_errors_stay_matchable_across_the_boundary() {
    let (users, _) = stores().await;

    let user = users.create(framework_user("grace")).await.unwrap();

    let err = users.add_to_role(user.id, "missing").await.unwrap_err();
    assert!(matches!(
        err,
        IdentityStoreError::User(UserError::RoleNotFound(name)) if name == "missing"
    ));

    let err = users
        .add_claim(Uuid::new_v4(), ClaimValue::new("dept", "qa"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        IdentityStoreError::User(UserError::UserNotFound(_))
    ));
}
