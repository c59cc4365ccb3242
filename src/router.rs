//! Role router
//!
//! Dada la sesión actual, decide qué panel es alcanzable y con qué
//! recorte de datos. También define la superficie de navegación: tres
//! vistas direccionables y un redirect a la raíz para todo lo demás.

use uuid::Uuid;

use crate::models::{Role, User, Vehicle};
use crate::services::{SessionService, VehiclesService};

/// Panel alcanzable para la sesión actual
#[derive(Debug, Clone, PartialEq)]
pub enum Dashboard {
    /// Sin sesión: solo la pantalla de login
    Login,
    /// Acceso completo; los paneles de admin leen vía los servicios
    Admin,
    /// Todos los vehículos, con escritura append-only del historial
    Mechanic { vehicles: Vec<Vehicle> },
    /// Solo lectura de los vehículos propios
    Client { vehicles: Vec<Vehicle> },
    /// Rol no reconocido: estado terminal, sin datos ni mutaciones
    Unrecognized,
}

/// Vistas direccionables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    ClientVehicles,
    VehicleDetail(Uuid),
}

impl Route {
    /// Parsea un path (con o sin `#` de hash-routing). Cualquier path no
    /// reconocido redirige a la raíz.
    pub fn parse(path: &str) -> Route {
        let path = path.trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Root,
            ["client"] => Route::ClientVehicles,
            ["vehicle", id] => match Uuid::parse_str(id) {
                Ok(id) => Route::VehicleDetail(id),
                Err(_) => Route::Root,
            },
            _ => Route::Root,
        }
    }

    pub fn as_path(&self) -> String {
        match self {
            Route::Root => "/".to_string(),
            Route::ClientVehicles => "/client".to_string(),
            Route::VehicleDetail(id) => format!("/vehicle/{}", id),
        }
    }
}

/// URL de detalle de vehículo, tal como se graba en etiquetas NFC y QR
pub fn vehicle_url(id: Uuid) -> String {
    format!("#{}", Route::VehicleDetail(id).as_path())
}

/// Extrae el id de vehículo de una URL escaneada, si la hay
pub fn parse_vehicle_url(url: &str) -> Option<Uuid> {
    let fragment = url.split('#').last()?;
    match Route::parse(fragment) {
        Route::VehicleDetail(id) => Some(id),
        _ => None,
    }
}

#[derive(Clone)]
pub struct RoleRouter {
    vehicles: VehiclesService,
}

impl RoleRouter {
    pub fn new(vehicles: VehiclesService) -> Self {
        Self { vehicles }
    }

    /// Panel y recorte de datos para la sesión actual
    pub async fn dashboard_for(&self, session: &SessionService) -> Dashboard {
        let Some(principal) = session.current_user().await else {
            return Dashboard::Login;
        };
        self.dashboard_for_user(&principal).await
    }

    pub async fn dashboard_for_user(&self, principal: &User) -> Dashboard {
        match principal.role {
            Role::Admin => Dashboard::Admin,
            Role::Mechanic => Dashboard::Mechanic {
                vehicles: self.vehicles.list_vehicles(principal).await,
            },
            Role::Client => Dashboard::Client {
                vehicles: self.vehicles.list_vehicles(principal).await,
            },
            Role::Unknown => {
                log::warn!("Rol no reconocido para '{}'", principal.email);
                Dashboard::Unrecognized
            }
        }
    }
}
