//! Escenarios de integración del núcleo: sesión, frontera de acceso por
//! capacidades y las colecciones en memoria.

use std::collections::HashSet;
use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use taller_pro::config::{DeletionPolicy, EnvironmentConfig};
use taller_pro::models::{
    CreatePartRequest, CreateUserRequest, NewServiceRecord, Role, ThemeSettings, User,
};
use taller_pro::router::{Dashboard, RoleRouter};
use taller_pro::seed::demo_data;
use taller_pro::services::DerivedPasswordVerifier;
use taller_pro::{AppError, AppState};

fn test_config(dir: &tempfile::TempDir, policy: DeletionPolicy) -> EnvironmentConfig {
    EnvironmentConfig {
        deletion_policy: policy,
        storage_dir: dir.path().to_path_buf(),
        ..EnvironmentConfig::default()
    }
}

fn demo_state(dir: &tempfile::TempDir, policy: DeletionPolicy) -> AppState {
    AppState::new(
        test_config(dir, policy),
        demo_data(),
        Arc::new(DerivedPasswordVerifier),
    )
}

async fn login_admin(state: &AppState) -> User {
    state
        .session
        .login("admin@taller.pro", "admin123")
        .await
        .expect("admin login")
}

#[tokio::test]
async fn test_seeded_client_login_and_dashboard_slice() {
    let dir = tempfile::tempdir().unwrap();
    let state = demo_state(&dir, DeletionPolicy::default());

    let client = state
        .session
        .login("cliente@taller.pro", "cliente123")
        .await
        .expect("client login");
    assert_eq!(client.role, Role::Client);
    assert_eq!(state.session.current_user().await.unwrap().id, client.id);

    match state.router.dashboard_for(&state.session).await {
        Dashboard::Client { vehicles } => {
            assert_eq!(vehicles.len(), 2);
            assert!(vehicles.iter().all(|v| v.owner_id == client.id));
        }
        other => panic!("panel inesperado: {:?}", other),
    }
}

#[tokio::test]
async fn test_login_failure_leaves_session_unauthenticated() {
    let dir = tempfile::tempdir().unwrap();
    let state = demo_state(&dir, DeletionPolicy::default());

    for (email, password) in [
        ("cliente@taller.pro", "cliente124"),
        ("cliente@taller.pro", ""),
        ("nadie@taller.pro", "nadie123"),
    ] {
        let result = state.session.login(email, password).await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
        assert!(state.session.current_user().await.is_none());
    }

    // Sin sesión, el router solo ofrece el login
    assert_eq!(
        state.router.dashboard_for(&state.session).await,
        Dashboard::Login
    );
}

#[tokio::test]
async fn test_created_user_ids_are_unique() {
    let dir = tempfile::tempdir().unwrap();
    let state = demo_state(&dir, DeletionPolicy::default());
    let admin = login_admin(&state).await;

    let mut seen: HashSet<Uuid> = state
        .users
        .list_users(&admin)
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();

    for i in 0..50 {
        let user = state
            .users
            .create_user(
                &admin,
                CreateUserRequest {
                    name: format!("Cliente {}", i),
                    email: format!("cliente{}@taller.pro", i),
                    role: Role::Client,
                },
            )
            .await
            .unwrap();
        assert!(seen.insert(user.id), "id repetido: {}", user.id);
    }
}

#[tokio::test]
async fn test_self_delete_is_blocked_and_collection_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let state = demo_state(&dir, DeletionPolicy::default());
    let admin = login_admin(&state).await;

    let before = state.users.list_users(&admin).await.unwrap();
    let result = state.users.delete_user(&admin, admin.id).await;
    assert!(matches!(result, Err(AppError::SelfDelete)));
    assert_eq!(state.users.list_users(&admin).await.unwrap(), before);
}

#[tokio::test]
async fn test_append_service_record_preserves_history() {
    let dir = tempfile::tempdir().unwrap();
    let state = demo_state(&dir, DeletionPolicy::default());

    let mechanic = state
        .session
        .login("mecanico@taller.pro", "mecanico123")
        .await
        .unwrap();

    let vehicles = state.vehicles.list_vehicles(&mechanic).await;
    let corolla = vehicles
        .iter()
        .find(|v| v.license_plate == "AB-123-CD")
        .unwrap();
    let prior = corolla.service_history.clone();
    assert_eq!(prior.len(), 2);

    let record = state
        .vehicles
        .append_service_record(
            &mechanic,
            corolla.id,
            NewServiceRecord {
                date: chrono::NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
                mileage: 45_000,
                notes: "Timing belt inspection.".to_string(),
                summary: None,
                cost: Decimal::new(8_000, 2),
            },
        )
        .await
        .unwrap();

    let updated = state.vehicles.get_vehicle(&mechanic, corolla.id).await.unwrap();
    assert_eq!(updated.service_history.len(), prior.len() + 1);
    assert_eq!(&updated.service_history[..prior.len()], &prior[..]);
    assert_eq!(updated.service_history.last().unwrap(), &record);
}

#[tokio::test]
async fn test_client_never_reads_foreign_vehicles() {
    let dir = tempfile::tempdir().unwrap();
    let state = demo_state(&dir, DeletionPolicy::default());
    let admin = login_admin(&state).await;

    // Otro cliente sin vehículos
    let stranger = state
        .users
        .create_user(
            &admin,
            CreateUserRequest {
                name: "Otro Cliente".to_string(),
                email: "otro@taller.pro".to_string(),
                role: Role::Client,
            },
        )
        .await
        .unwrap();
    state.session.logout().await;

    state.session.login("otro@taller.pro", "otro123").await.unwrap();
    assert!(state.vehicles.list_vehicles(&stranger).await.is_empty());

    // El detalle de un vehículo ajeno ni siquiera revela su existencia
    let foreign = state.vehicles.list_vehicles(&admin).await;
    let foreign_id = foreign.first().unwrap().id;
    assert!(matches!(
        state.vehicles.get_vehicle(&stranger, foreign_id).await,
        Err(AppError::NotFound(_))
    ));

    match state.router.dashboard_for_user(&stranger).await {
        Dashboard::Client { vehicles } => assert!(vehicles.is_empty()),
        other => panic!("panel inesperado: {:?}", other),
    }
}

#[tokio::test]
async fn test_create_part_then_list() {
    let dir = tempfile::tempdir().unwrap();
    let state = demo_state(&dir, DeletionPolicy::default());
    let admin = login_admin(&state).await;

    let before = state.parts.list_parts(&admin).await.unwrap().len();
    let part = state
        .parts
        .create_part(
            &admin,
            CreatePartRequest {
                name: "Filter".to_string(),
                part_number: "X1".to_string(),
                brand: "B".to_string(),
                stock: 5,
                description: "d".to_string(),
            },
        )
        .await
        .unwrap();

    let after = state.parts.list_parts(&admin).await.unwrap();
    assert_eq!(after.len(), before + 1);
    let stored = after.iter().find(|p| p.id == part.id).unwrap();
    assert_eq!(stored.name, "Filter");
    assert_eq!(stored.part_number, "X1");
    assert_eq!(stored.stock, 5);
}

#[tokio::test]
async fn test_delete_part_missing_id_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let state = demo_state(&dir, DeletionPolicy::default());
    let admin = login_admin(&state).await;

    let before = state.parts.list_parts(&admin).await.unwrap();
    let result = state.parts.delete_part(&admin, Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(state.parts.list_parts(&admin).await.unwrap(), before);
}

#[tokio::test]
async fn test_capability_boundary_rejects_wrong_roles() {
    let dir = tempfile::tempdir().unwrap();
    let state = demo_state(&dir, DeletionPolicy::default());

    let mechanic = state
        .session
        .login("mecanico@taller.pro", "mecanico123")
        .await
        .unwrap();
    state.session.logout().await;
    let client = state
        .session
        .login("cliente@taller.pro", "cliente123")
        .await
        .unwrap();

    // El mecánico no gestiona catálogo ni usuarios
    assert!(matches!(
        state.parts.list_parts(&mechanic).await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        state.users.list_users(&mechanic).await,
        Err(AppError::Forbidden(_))
    ));

    // El cliente no escribe historial
    let vehicle_id = state.vehicles.list_vehicles(&client).await[0].id;
    let result = state
        .vehicles
        .append_service_record(
            &client,
            vehicle_id,
            NewServiceRecord {
                date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                mileage: 1,
                notes: "x".to_string(),
                summary: None,
                cost: Decimal::ZERO,
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    // El mecánico tampoco reemplaza vehículos completos
    let vehicle = state.vehicles.get_vehicle(&mechanic, vehicle_id).await.unwrap();
    assert!(matches!(
        state.vehicles.update_vehicle(&mechanic, vehicle).await,
        Err(AppError::Forbidden(_))
    ));
}

#[tokio::test]
async fn test_deletion_policy_restrict() {
    let dir = tempfile::tempdir().unwrap();
    let state = demo_state(&dir, DeletionPolicy::Restrict);
    let admin = login_admin(&state).await;

    let client = state
        .users
        .list_users(&admin)
        .await
        .unwrap()
        .into_iter()
        .find(|u| u.role == Role::Client)
        .unwrap();

    let result = state.users.delete_user(&admin, client.id).await;
    assert!(matches!(
        result,
        Err(AppError::OwnedVehiclesExist { count: 2, .. })
    ));
    // El usuario sigue presente
    assert!(state
        .users
        .list_users(&admin)
        .await
        .unwrap()
        .iter()
        .any(|u| u.id == client.id));
}

#[tokio::test]
async fn test_deletion_policy_cascade() {
    let dir = tempfile::tempdir().unwrap();
    let state = demo_state(&dir, DeletionPolicy::Cascade);
    let admin = login_admin(&state).await;

    let client = state
        .users
        .list_users(&admin)
        .await
        .unwrap()
        .into_iter()
        .find(|u| u.role == Role::Client)
        .unwrap();

    state.users.delete_user(&admin, client.id).await.unwrap();
    assert!(state.vehicles.list_vehicles(&admin).await.is_empty());
}

#[tokio::test]
async fn test_deletion_policy_orphan_tolerant() {
    let dir = tempfile::tempdir().unwrap();
    let state = demo_state(&dir, DeletionPolicy::OrphanTolerant);
    let admin = login_admin(&state).await;

    let client = state
        .users
        .list_users(&admin)
        .await
        .unwrap()
        .into_iter()
        .find(|u| u.role == Role::Client)
        .unwrap();

    state.users.delete_user(&admin, client.id).await.unwrap();

    // Los vehículos quedan, con la referencia de dueño huérfana
    let vehicles = state.vehicles.list_vehicles(&admin).await;
    assert_eq!(vehicles.len(), 2);
    let users = state.users.list_users(&admin).await.unwrap();
    assert!(vehicles
        .iter()
        .all(|v| !users.iter().any(|u| u.id == v.owner_id)));
}

#[tokio::test]
async fn test_theme_persists_across_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let state = demo_state(&dir, DeletionPolicy::default());
        let admin = login_admin(&state).await;
        let mut theme = state.theme.current_theme().await;
        theme.app_name = "Taller Sur".to_string();
        state.theme.update_theme(&admin, theme).await.unwrap();
    }

    // Mismo directorio de almacenamiento, proceso "nuevo"
    let state = demo_state(&dir, DeletionPolicy::default());
    assert_eq!(state.theme.current_theme().await.app_name, "Taller Sur");
}

#[tokio::test]
async fn test_theme_change_requires_admin() {
    let dir = tempfile::tempdir().unwrap();
    let state = demo_state(&dir, DeletionPolicy::default());

    let client = state
        .session
        .login("cliente@taller.pro", "cliente123")
        .await
        .unwrap();
    let result = state
        .theme
        .update_theme(&client, ThemeSettings::default())
        .await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));
}

#[tokio::test]
async fn test_unrecognized_role_is_terminal() {
    let dir = tempfile::tempdir().unwrap();
    let state = demo_state(&dir, DeletionPolicy::default());

    // Un rol desconocido puede entrar por datos importados
    let ghost: User = serde_json::from_value(serde_json::json!({
        "id": Uuid::new_v4(),
        "name": "Ghost",
        "email": "ghost@taller.pro",
        "role": "superuser"
    }))
    .unwrap();
    assert_eq!(ghost.role, Role::Unknown);

    let router: &RoleRouter = &state.router;
    assert_eq!(router.dashboard_for_user(&ghost).await, Dashboard::Unrecognized);
    assert!(state.vehicles.list_vehicles(&ghost).await.is_empty());
    assert!(matches!(
        state.parts.list_parts(&ghost).await,
        Err(AppError::Forbidden(_))
    ));
}
