//! Sesión de escaneo QR
//!
//! Consume un stream de intentos de decodificación de la cámara y
//! termina exactamente de una de tres formas: primer código decodificado,
//! cancelación del usuario o error fatal. El recurso de cámara se libera
//! en todas las salidas, incluida la caída del componente (Drop).
//!
//! El ruido por frame (frames sin código) se ignora, igual que el
//! callback de error por frame del widget original.

use futures::{Stream, StreamExt};
use thiserror::Error;
use tokio::sync::watch;

/// Errores fatales del escáner (los que detienen la sesión)
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("No se pudo iniciar el escáner QR: {0}")]
    CameraUnavailable(String),

    #[error("Fallo del stream de cámara: {0}")]
    Stream(String),
}

/// Un intento de decodificación sobre un frame
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeAttempt {
    /// El frame contenía un código legible
    Decoded(String),
    /// Frame sin código; se ignora
    NoCode,
}

/// Stream de cámara: secuencia perezosa y finita de intentos
pub trait CameraStream:
    Stream<Item = Result<DecodeAttempt, ScanError>> + Unpin + Send
{
    /// Libera el dispositivo de captura. Debe ser seguro llamarlo una
    /// sola vez; la sesión garantiza exactamente una llamada.
    fn release(&mut self);
}

/// Resultado terminal de una sesión de escaneo
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// Primer texto decodificado; la sesión se detuvo ahí
    Decoded(String),
    /// El usuario cerró el diálogo antes de decodificar nada
    Cancelled,
    Failed(String),
}

/// Canal de cancelación para la sesión (el botón de cerrar del diálogo)
pub fn cancel_channel() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}

/// Guarda que libera la cámara pase lo que pase
struct ReleaseGuard<S: CameraStream> {
    stream: S,
}

impl<S: CameraStream> Drop for ReleaseGuard<S> {
    fn drop(&mut self) {
        self.stream.release();
    }
}

pub struct ScanSession;

impl ScanSession {
    /// Ejecuta la sesión hasta su resultado terminal.
    ///
    /// Decodifica a lo sumo un código: al primer `Decoded` el stream se
    /// detiene y se libera la cámara.
    pub async fn run<S: CameraStream>(
        stream: S,
        mut cancel: watch::Receiver<bool>,
    ) -> ScanOutcome {
        let mut guard = ReleaseGuard { stream };

        loop {
            tokio::select! {
                changed = cancel.changed() => {
                    // Canal cerrado == diálogo desmontado: también cancela
                    if changed.is_err() || *cancel.borrow() {
                        log::info!("Escaneo QR cancelado por el usuario");
                        return ScanOutcome::Cancelled;
                    }
                }
                attempt = guard.stream.next() => {
                    match attempt {
                        Some(Ok(DecodeAttempt::Decoded(text))) => {
                            log::info!("✅ Código QR decodificado");
                            return ScanOutcome::Decoded(text);
                        }
                        Some(Ok(DecodeAttempt::NoCode)) => continue,
                        Some(Err(e)) => {
                            log::warn!("❌ Escaneo QR fallido: {}", e);
                            return ScanOutcome::Failed(e.to_string());
                        }
                        // Cámara agotada sin código: error fatal
                        None => {
                            return ScanOutcome::Failed(
                                "El stream de cámara terminó sin decodificar".to_string(),
                            );
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::task::{Context, Poll};

    /// Cámara de prueba: reproduce una lista fija de intentos y cuenta
    /// cuántas veces se la libera
    struct FakeCamera {
        attempts: VecDeque<Result<DecodeAttempt, ScanError>>,
        releases: Arc<AtomicUsize>,
    }

    impl FakeCamera {
        fn new(
            attempts: Vec<Result<DecodeAttempt, ScanError>>,
        ) -> (Self, Arc<AtomicUsize>) {
            let releases = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    attempts: attempts.into_iter().collect(),
                    releases: releases.clone(),
                },
                releases,
            )
        }
    }

    impl Stream for FakeCamera {
        type Item = Result<DecodeAttempt, ScanError>;

        fn poll_next(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
        ) -> Poll<Option<Self::Item>> {
            Poll::Ready(self.attempts.pop_front())
        }
    }

    impl CameraStream for FakeCamera {
        fn release(&mut self) {
            self.releases.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_stops_on_first_decode_and_releases() {
        let (camera, releases) = FakeCamera::new(vec![
            Ok(DecodeAttempt::NoCode),
            Ok(DecodeAttempt::NoCode),
            Ok(DecodeAttempt::Decoded("#/vehicle/abc".to_string())),
            Ok(DecodeAttempt::Decoded("nunca-se-llega".to_string())),
        ]);
        let (_tx, rx) = cancel_channel();

        let outcome = ScanSession::run(camera, rx).await;
        assert_eq!(outcome, ScanOutcome::Decoded("#/vehicle/abc".to_string()));
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fatal_error_releases() {
        let (camera, releases) = FakeCamera::new(vec![
            Ok(DecodeAttempt::NoCode),
            Err(ScanError::Stream("camera disconnected".to_string())),
        ]);
        let (_tx, rx) = cancel_channel();

        let outcome = ScanSession::run(camera, rx).await;
        assert!(matches!(outcome, ScanOutcome::Failed(_)));
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_user_cancel_releases() {
        // Cámara que nunca decodifica nada
        let (camera, releases) =
            FakeCamera::new((0..10_000).map(|_| Ok(DecodeAttempt::NoCode)).collect());
        let (tx, rx) = cancel_channel();
        tx.send(true).unwrap();

        let outcome = ScanSession::run(camera, rx).await;
        assert_eq!(outcome, ScanOutcome::Cancelled);
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_exhausted_stream_is_fatal_and_releases() {
        let (camera, releases) = FakeCamera::new(vec![Ok(DecodeAttempt::NoCode)]);
        let (_tx, rx) = cancel_channel();

        let outcome = ScanSession::run(camera, rx).await;
        assert!(matches!(outcome, ScanOutcome::Failed(_)));
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }
}
