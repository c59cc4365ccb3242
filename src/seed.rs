//! Datos de demostración del taller
//!
//! El dataset inicial del entorno de demo: tres usuarios (uno por rol),
//! dos vehículos del cliente con historial y un catálogo corto de
//! repuestos. Las contraseñas de demo siguen el esquema derivado
//! (`<parte-local>123`) que verifica `DerivedPasswordVerifier`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{Part, Role, ServiceRecord, Transmission, User, Vehicle};

/// Colecciones iniciales para sembrar los repositorios
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub users: Vec<User>,
    pub vehicles: Vec<Vehicle>,
    pub parts: Vec<Part>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Dataset de demo del Taller Pro
pub fn demo_data() -> SeedData {
    let admin = User {
        id: Uuid::new_v4(),
        name: "Admin User".to_string(),
        email: "admin@taller.pro".to_string(),
        role: Role::Admin,
    };
    let mechanic = User {
        id: Uuid::new_v4(),
        name: "Mechanic User".to_string(),
        email: "mecanico@taller.pro".to_string(),
        role: Role::Mechanic,
    };
    let client = User {
        id: Uuid::new_v4(),
        name: "Client User".to_string(),
        email: "cliente@taller.pro".to_string(),
        role: Role::Client,
    };

    let corolla = Vehicle {
        id: Uuid::new_v4(),
        make: "Toyota".to_string(),
        model: "Corolla".to_string(),
        year: 2021,
        vin: "123ABC456DEF789".to_string(),
        license_plate: "AB-123-CD".to_string(),
        owner_id: client.id,
        engine_displacement: "1.8L".to_string(),
        transmission: Transmission::Automatic,
        oil_filter: "TY-90915".to_string(),
        air_filter: "TY-17801".to_string(),
        fuel_filter: "TY-23390".to_string(),
        cabin_filter: "TY-87139".to_string(),
        service_history: vec![
            ServiceRecord {
                id: Uuid::new_v4(),
                date: date(2023, 1, 15),
                mileage: 15_000,
                notes: "Oil change and tire rotation.".to_string(),
                summary: Some(
                    "Se realizó el cambio de aceite y la rotación de neumáticos para un \
                     desgaste uniforme."
                        .to_string(),
                ),
                cost: Decimal::new(12_050, 2),
            },
            ServiceRecord {
                id: Uuid::new_v4(),
                date: date(2023, 7, 20),
                mileage: 30_000,
                notes: "Brake pad replacement, front.".to_string(),
                summary: Some(
                    "Se reemplazaron las pastillas de freno delanteras para garantizar la \
                     seguridad de frenado."
                        .to_string(),
                ),
                cost: Decimal::new(25_000, 2),
            },
        ],
    };

    let civic = Vehicle {
        id: Uuid::new_v4(),
        make: "Honda".to_string(),
        model: "Civic".to_string(),
        year: 2022,
        vin: "987ZYX654WVU321".to_string(),
        license_plate: "EF-456-GH".to_string(),
        owner_id: client.id,
        engine_displacement: "1.5L Turbo".to_string(),
        transmission: Transmission::Automatic,
        oil_filter: "HO-15400".to_string(),
        air_filter: "HO-17220".to_string(),
        fuel_filter: "HO-16010".to_string(),
        cabin_filter: "HO-80292".to_string(),
        service_history: vec![ServiceRecord {
            id: Uuid::new_v4(),
            date: date(2023, 5, 10),
            mileage: 12_000,
            notes: "First service, oil and filter change.".to_string(),
            summary: Some(
                "Se realizó el primer servicio de mantenimiento con cambio de aceite y \
                 filtro."
                    .to_string(),
            ),
            cost: Decimal::new(9_500, 2),
        }],
    };

    let parts = vec![
        Part {
            id: Uuid::new_v4(),
            name: "Filtro de Aceite TY-90915".to_string(),
            part_number: "TY-90915".to_string(),
            brand: "Toyota OEM".to_string(),
            stock: 15,
            description: "Filtro de aceite para Toyota Corolla 2020+".to_string(),
        },
        Part {
            id: Uuid::new_v4(),
            name: "Pastillas de Freno Delanteras".to_string(),
            part_number: "BR-PAD-123".to_string(),
            brand: "Brembo".to_string(),
            stock: 8,
            description: "Juego de pastillas de freno cerámicas para alto rendimiento."
                .to_string(),
        },
        Part {
            id: Uuid::new_v4(),
            name: "Batería 12V 550CCA".to_string(),
            part_number: "BAT-550-LN".to_string(),
            brand: "Interstate".to_string(),
            stock: 5,
            description: "Batería estándar para la mayoría de vehículos de pasajeros."
                .to_string(),
        },
    ];

    SeedData {
        users: vec![admin, mechanic, client],
        vehicles: vec![corolla, civic],
        parts,
    }
}
