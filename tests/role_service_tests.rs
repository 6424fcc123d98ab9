use userhub::db::Store;
use userhub::models::User;
use userhub::services::{
    RoleError, RoleService, SeaOrmRoleService, SeaOrmUserService, UserService,
};

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

#[tokio::test]
async fn create_find_and_list_roles() {
    let (_, roles) = memory_services().await;

    let admin = roles.create_role("admin").await.unwrap();
    roles.create_role("auditor").await.unwrap();

    let by_name = roles.find_by_name("admin").await.unwrap().unwrap();
    assert_eq!(by_name.id, admin.id);

    let by_id = roles.find_by_id(admin.id).await.unwrap().unwrap();
    assert_eq!(by_id.name, "admin");

    let mut names: Vec<String> = roles
        .list_roles()
        .await
        .unwrap()
        .into_iter()
        .map(|role| role.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["admin", "auditor"]);
}

#[tokio::test]
async fn duplicate_role_name_is_rejected() {
    let (_, roles) = memory_services().await;

    roles.create_role("admin").await.unwrap();

    let err = roles.create_role("admin").await.unwrap_err();
    assert!(matches!(err, RoleError::AlreadyExists(name) if name == "admin"));
}

#[tokio::test]
async fn blank_role_name_is_rejected() {
    let (_, roles) = memory_services().await;

    let err = roles.create_role("  ").await.unwrap_err();
    assert!(matches!(err, RoleError::InvalidArgument(_)));
}

#[tokio::test]
async fn rename_role_persists() {
    let (_, roles) = memory_services().await;

    let mut role = roles.create_role("admin").await.unwrap();
    role.name = "administrator".to_string();
    roles.update_role(&role).await.unwrap();

    assert!(roles.find_by_name("admin").await.unwrap().is_none());
    let renamed = roles.find_by_name("administrator").await.unwrap().unwrap();
    assert_eq!(renamed.id, role.id);
}

#[tokio::test]
async fn rename_to_taken_name_is_rejected() {
    let (_, roles) = memory_services().await;

    roles.create_role("admin").await.unwrap();
    let mut auditor = roles.create_role("auditor").await.unwrap();

    auditor.name = "admin".to_string();
    let err = roles.update_role(&auditor).await.unwrap_err();
    assert!(matches!(err, RoleError::AlreadyExists(_)));
}

#[tokio::test]
async fn deleting_a_role_drops_memberships_but_not_users() {
    let (users, roles) = memory_services().await;

    let role = roles.create_role("admin").await.unwrap();
    let user = users.create_user(User::new("alice")).await.unwrap();
    users.add_to_role(user.id, "admin").await.unwrap();

    roles.delete_role(&role).await.unwrap();

    assert!(roles.find_by_name("admin").await.unwrap().is_none());

    let survivor = users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(survivor.username, "alice");
    assert!(users.get_roles(user.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_an_unknown_role_fails() {
    let (_, roles) = memory_services().await;

    let ghost = userhub::models::Role::new("ghost");
    let err = roles.delete_role(&ghost).await.unwrap_err();
    assert!(matches!(err, RoleError::NotFound(_)));
}
