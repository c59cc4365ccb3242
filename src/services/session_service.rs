//! Servicio de sesión
//!
//! Autentica un principal y mantiene la sesión actual (a lo sumo un
//! usuario autenticado a la vez). El cambio de sesión es lo único que
//! altera qué vistas son alcanzables.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::User;
use crate::store::UserRepository;
use crate::utils::errors::AppError;

/// Verificación de credenciales enchufable
///
/// El núcleo no fija un mecanismo de autenticación: el taller de demo usa
/// una contraseña derivada del email y un despliegue real usaría hashes.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, user: &User, password: &str) -> bool;
}

/// Contraseña derivada del email (`<parte-local>123`)
///
/// Es el esquema de los datos de demo, no un mecanismo de seguridad.
#[derive(Debug, Default)]
pub struct DerivedPasswordVerifier;

impl CredentialVerifier for DerivedPasswordVerifier {
    fn verify(&self, user: &User, password: &str) -> bool {
        let local_part = user.email.split('@').next().unwrap_or_default();
        password == format!("{}123", local_part)
    }
}

/// Verificador contra hashes bcrypt por email
pub struct BcryptVerifier {
    hashes: HashMap<String, String>,
}

impl BcryptVerifier {
    pub fn new(hashes: HashMap<String, String>) -> Self {
        Self { hashes }
    }

    /// Registra una credencial hasheando la contraseña en el momento
    pub fn register(&mut self, email: &str, password: &str) -> Result<(), AppError> {
        let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Storage(format!("bcrypt: {}", e)))?;
        self.hashes.insert(email.to_string(), hash);
        Ok(())
    }
}

impl CredentialVerifier for BcryptVerifier {
    fn verify(&self, user: &User, password: &str) -> bool {
        self.hashes
            .get(&user.email)
            .map(|hash| bcrypt::verify(password, hash).unwrap_or(false))
            .unwrap_or(false)
    }
}

/// Servicio de sesión
#[derive(Clone)]
pub struct SessionService {
    users: UserRepository,
    verifier: Arc<dyn CredentialVerifier>,
    current: Arc<RwLock<Option<User>>>,
}

impl SessionService {
    pub fn new(users: UserRepository, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            users,
            verifier,
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// Autentica por email exacto y deja al usuario como principal actual.
    ///
    /// El fallo es siempre `InvalidCredentials`: no se revela si el email
    /// existe o no.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self.users.find_by_email(email).await;

        match user {
            Some(user) if self.verifier.verify(&user, password) => {
                let mut current = self.current.write().await;
                *current = Some(user.clone());
                log::info!("✅ Sesión iniciada: {} ({})", user.name, user.role.as_str());
                Ok(user)
            }
            _ => {
                log::warn!("❌ Login rechazado para '{}'", email);
                Err(AppError::InvalidCredentials)
            }
        }
    }

    /// Cierra la sesión incondicionalmente (idempotente)
    pub async fn logout(&self) {
        let mut current = self.current.write().await;
        if let Some(user) = current.take() {
            log::info!("Sesión cerrada: {}", user.name);
        }
    }

    /// Usuario autenticado actual, si lo hay
    pub async fn current_user(&self) -> Option<User> {
        self.current.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use uuid::Uuid;

    fn demo_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Client User".to_string(),
            email: "cliente@taller.pro".to_string(),
            role: Role::Client,
        }
    }

    #[test]
    fn test_derived_password() {
        let verifier = DerivedPasswordVerifier;
        let user = demo_user();
        assert!(verifier.verify(&user, "cliente123"));
        assert!(!verifier.verify(&user, "cliente124"));
        assert!(!verifier.verify(&user, ""));
    }

    #[test]
    fn test_bcrypt_verifier() {
        let mut verifier = BcryptVerifier::new(HashMap::new());
        verifier.register("cliente@taller.pro", "s3creto").unwrap();
        let user = demo_user();
        assert!(verifier.verify(&user, "s3creto"));
        assert!(!verifier.verify(&user, "otro"));
    }

    #[tokio::test]
    async fn test_failed_login_keeps_session_empty() {
        let users = UserRepository::with_seed(vec![demo_user()]);
        let session = SessionService::new(users, Arc::new(DerivedPasswordVerifier));

        let result = session.login("cliente@taller.pro", "wrong").await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
        assert!(session.current_user().await.is_none());

        // Email desconocido: mismo error, sin pista de enumeración
        let result = session.login("nadie@taller.pro", "nadie123").await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let users = UserRepository::with_seed(vec![demo_user()]);
        let session = SessionService::new(users, Arc::new(DerivedPasswordVerifier));

        session.login("cliente@taller.pro", "cliente123").await.unwrap();
        assert!(session.current_user().await.is_some());

        session.logout().await;
        assert!(session.current_user().await.is_none());
        session.logout().await;
        assert!(session.current_user().await.is_none());
    }
}
