use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use dotenvy::dotenv;
use rust_decimal::Decimal;
use tracing::{error, info};

use taller_pro::config::EnvironmentConfig;
use taller_pro::models::{CreatePartRequest, NewServiceRecord};
use taller_pro::router::Dashboard;
use taller_pro::seed::{demo_data, SeedData};
use taller_pro::services::{
    summary_generator_from_config, DerivedPasswordVerifier, SUMMARY_UNAVAILABLE,
};
use taller_pro::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🔧 Taller Pro - Núcleo de back-office");
    info!("=====================================");

    let config = match EnvironmentConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuración inválida: {}", e);
            return Err(anyhow::anyhow!("Error de configuración: {}", e));
        }
    };
    info!("Política de borrado: {}", config.deletion_policy.as_str());

    let seed = if config.seed_demo_data {
        demo_data()
    } else {
        SeedData::default()
    };
    let summaries = summary_generator_from_config(&config);
    let state = AppState::new(config, seed, Arc::new(DerivedPasswordVerifier));

    info!("👥 Flujos disponibles:");
    info!("   admin@taller.pro    - gestión de usuarios, repuestos y tema");
    info!("   mecanico@taller.pro - historial de servicio de todos los vehículos");
    info!("   cliente@taller.pro  - lectura de sus propios vehículos");

    // ── Cliente: solo ve sus vehículos ──
    let client = state.session.login("cliente@taller.pro", "cliente123").await?;
    if let Dashboard::Client { vehicles } = state.router.dashboard_for(&state.session).await {
        info!("🚗 Panel de {}: {} vehículo(s)", client.name, vehicles.len());
        for v in &vehicles {
            info!(
                "   {} {} ({}) - {} servicios",
                v.make,
                v.model,
                v.license_plate,
                v.service_history.len()
            );
        }
    }
    state.session.logout().await;

    // ── Mecánico: registra un servicio con resumen para el cliente ──
    let mechanic = state.session.login("mecanico@taller.pro", "mecanico123").await?;
    if let Dashboard::Mechanic { vehicles } = state.router.dashboard_for(&state.session).await {
        if let Some(vehicle) = vehicles.first() {
            let notes = "Spark plug replacement and throttle body cleaning.";
            // El resumen es decoración: si falla, el registro se guarda igual
            let summary = match summaries.generate(notes).await {
                Ok(summary) => Some(summary),
                Err(e) => {
                    error!("Resumen no disponible: {}", e);
                    Some(SUMMARY_UNAVAILABLE.to_string())
                }
            };
            let record = state
                .vehicles
                .append_service_record(
                    &mechanic,
                    vehicle.id,
                    NewServiceRecord {
                        date: Utc::now().date_naive(),
                        mileage: vehicle.last_service_mileage() + 5_000,
                        notes: notes.to_string(),
                        summary,
                        cost: Decimal::new(18_000, 2),
                    },
                )
                .await?;
            info!(
                "🧾 Servicio registrado en {} {}: {} km",
                vehicle.make, vehicle.model, record.mileage
            );
        }
    }
    state.session.logout().await;

    // ── Admin: catálogo y tema ──
    let admin = state.session.login("admin@taller.pro", "admin123").await?;
    let part = state
        .parts
        .create_part(
            &admin,
            CreatePartRequest {
                name: "Filtro de Cabina HO-80292".to_string(),
                part_number: "HO-80292".to_string(),
                brand: "Honda OEM".to_string(),
                stock: 12,
                description: "Filtro de cabina para Honda Civic 2022+".to_string(),
            },
        )
        .await?;
    info!("📦 Repuesto agregado al catálogo: {}", part.name);

    let mut theme = state.theme.current_theme().await;
    theme.app_name = "Taller Pro".to_string();
    theme.color_primary = "#4f46e5".to_string();
    state.theme.update_theme(&admin, theme.clone()).await?;
    info!("🎨 Tema persistido: {}", theme.app_name);

    state.session.logout().await;
    info!("👋 Recorrido de demo terminado");
    Ok(())
}
