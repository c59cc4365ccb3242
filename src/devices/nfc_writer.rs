//! Escritor de etiquetas NFC
//!
//! Máquina de estados del diálogo de escritura: `Idle → Writing →
//! Success | Error`. `Success` y `Error` son terminales para la
//! instancia; tras `Success` el diálogo se auto-cierra con un retraso
//! fijo. Un fallo aquí jamás toca el entity store.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::time::timeout;

use crate::models::Vehicle;
use crate::router::vehicle_url;

#[derive(Error, Debug)]
pub enum NfcError {
    #[error("Web NFC no es compatible en este dispositivo.")]
    Unsupported,

    #[error("Fallo al escribir en la etiqueta: {0}")]
    WriteFailed(String),

    #[error("Tiempo de espera agotado buscando una etiqueta")]
    Timeout,
}

/// Estado del diálogo de escritura
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NfcStatus {
    Idle,
    Writing,
    Success,
    Error,
}

/// Adaptador de la plataforma NFC
#[async_trait]
pub trait NfcAdapter: Send + Sync {
    fn is_supported(&self) -> bool;

    /// Escribe un registro URL en la próxima etiqueta que se acerque
    async fn write_url(&self, url: &str) -> Result<(), NfcError>;
}

/// Sesión de escritura de una etiqueta para un vehículo concreto
pub struct NfcWriteSession {
    adapter: Arc<dyn NfcAdapter>,
    status: NfcStatus,
    message: String,
    write_timeout: Duration,
    close_delay: Duration,
}

impl NfcWriteSession {
    pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(30);
    pub const DEFAULT_CLOSE_DELAY: Duration = Duration::from_secs(3);

    pub fn new(adapter: Arc<dyn NfcAdapter>) -> Self {
        Self::with_timing(
            adapter,
            Self::DEFAULT_WRITE_TIMEOUT,
            Self::DEFAULT_CLOSE_DELAY,
        )
    }

    pub fn with_timing(
        adapter: Arc<dyn NfcAdapter>,
        write_timeout: Duration,
        close_delay: Duration,
    ) -> Self {
        Self {
            adapter,
            status: NfcStatus::Idle,
            message: "Listo para escribir en la etiqueta NFC.".to_string(),
            write_timeout,
            close_delay,
        }
    }

    pub fn status(&self) -> NfcStatus {
        self.status
    }

    /// Mensaje visible en el diálogo
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Inicia la escritura (disparada por el usuario).
    ///
    /// Desde un estado terminal no hace nada: la instancia ya terminó.
    pub async fn start(&mut self, vehicle: &Vehicle) -> NfcStatus {
        if self.status != NfcStatus::Idle {
            return self.status;
        }

        if !self.adapter.is_supported() {
            self.status = NfcStatus::Error;
            self.message = NfcError::Unsupported.to_string();
            log::warn!("NFC no soportado en esta plataforma");
            return self.status;
        }

        self.status = NfcStatus::Writing;
        self.message =
            "Acerque una etiqueta NFC para escribir los datos del vehículo...".to_string();

        let url = vehicle_url(vehicle.id);
        let result = match timeout(self.write_timeout, self.adapter.write_url(&url)).await {
            Ok(inner) => inner,
            Err(_) => Err(NfcError::Timeout),
        };

        match result {
            Ok(()) => {
                self.status = NfcStatus::Success;
                self.message = format!(
                    "¡URL para {} {} escrita exitosamente!",
                    vehicle.make, vehicle.model
                );
                log::info!("✅ Etiqueta NFC escrita para el vehículo {}", vehicle.id);
            }
            Err(e) => {
                self.status = NfcStatus::Error;
                self.message = e.to_string();
                log::warn!("❌ Escritura NFC fallida: {}", e);
            }
        }
        self.status
    }

    /// Tras `Success`, espera el retraso fijo y confirma el auto-cierre.
    /// En cualquier otro estado devuelve `false` sin esperar.
    pub async fn auto_close(&self) -> bool {
        if self.status != NfcStatus::Success {
            return false;
        }
        tokio::time::sleep(self.close_delay).await;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transmission;
    use uuid::Uuid;

    struct FakeAdapter {
        supported: bool,
        result: Result<(), NfcError>,
        delay: Duration,
    }

    #[async_trait]
    impl NfcAdapter for FakeAdapter {
        fn is_supported(&self) -> bool {
            self.supported
        }

        async fn write_url(&self, _url: &str) -> Result<(), NfcError> {
            tokio::time::sleep(self.delay).await;
            match &self.result {
                Ok(()) => Ok(()),
                Err(NfcError::WriteFailed(m)) => Err(NfcError::WriteFailed(m.clone())),
                Err(NfcError::Timeout) => Err(NfcError::Timeout),
                Err(NfcError::Unsupported) => Err(NfcError::Unsupported),
            }
        }
    }

    fn vehicle() -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2021,
            vin: "123ABC456DEF789".to_string(),
            license_plate: "AB-123-CD".to_string(),
            owner_id: Uuid::new_v4(),
            engine_displacement: "1.8L".to_string(),
            transmission: Transmission::Automatic,
            oil_filter: "TY-90915".to_string(),
            air_filter: "TY-17801".to_string(),
            fuel_filter: "TY-23390".to_string(),
            cabin_filter: "TY-87139".to_string(),
            service_history: Vec::new(),
        }
    }

    fn session(adapter: FakeAdapter) -> NfcWriteSession {
        NfcWriteSession::with_timing(
            Arc::new(adapter),
            Duration::from_millis(50),
            Duration::from_millis(1),
        )
    }

    #[tokio::test]
    async fn test_unsupported_platform_goes_straight_to_error() {
        let mut session = session(FakeAdapter {
            supported: false,
            result: Ok(()),
            delay: Duration::ZERO,
        });
        assert_eq!(session.status(), NfcStatus::Idle);
        assert_eq!(session.start(&vehicle()).await, NfcStatus::Error);
        assert!(!session.auto_close().await);
    }

    #[tokio::test]
    async fn test_successful_write_then_auto_close() {
        let mut session = session(FakeAdapter {
            supported: true,
            result: Ok(()),
            delay: Duration::ZERO,
        });
        let v = vehicle();
        assert_eq!(session.start(&v).await, NfcStatus::Success);
        assert!(session.message().contains("Toyota"));
        assert!(session.auto_close().await);
    }

    #[tokio::test]
    async fn test_write_failure_is_terminal() {
        let mut session = session(FakeAdapter {
            supported: true,
            result: Err(NfcError::WriteFailed("tag moved away".to_string())),
            delay: Duration::ZERO,
        });
        let v = vehicle();
        assert_eq!(session.start(&v).await, NfcStatus::Error);
        // Terminal: reintentar en la misma instancia no reabre la escritura
        assert_eq!(session.start(&v).await, NfcStatus::Error);
        assert!(!session.auto_close().await);
    }

    #[tokio::test]
    async fn test_write_timeout_becomes_error() {
        let mut session = session(FakeAdapter {
            supported: true,
            result: Ok(()),
            delay: Duration::from_secs(10),
        });
        assert_eq!(session.start(&vehicle()).await, NfcStatus::Error);
        assert!(session.message().contains("Tiempo de espera"));
    }
}
