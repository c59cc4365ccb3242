//! Integraciones de dispositivo
//!
//! Widgets laterales de mejor esfuerzo (escáner QR y escritor NFC) con
//! sus propias máquinas de estado. Sus fallos son locales al diálogo y
//! nunca se propagan al entity store.

pub mod nfc_writer;
pub mod qr_scanner;

pub use nfc_writer::{NfcAdapter, NfcError, NfcStatus, NfcWriteSession};
pub use qr_scanner::{
    cancel_channel, CameraStream, DecodeAttempt, ScanError, ScanOutcome, ScanSession,
};
