//! Generador de resúmenes de servicio
//!
//! Traduce las notas técnicas del mecánico a un resumen amigable para el
//! cliente. Es un colaborador externo de mejor esfuerzo: si falla, el
//! registro de servicio se guarda igual, con un texto de relleno.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::EnvironmentConfig;
use crate::utils::errors::AppError;

/// Texto usado cuando el generador no está disponible
pub const SUMMARY_UNAVAILABLE: &str = "No se pudo generar el resumen en este momento.";

#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    async fn generate(&self, notes: &str) -> Result<String, AppError>;
}

#[derive(Debug, Serialize)]
struct SummaryRequest<'a> {
    notes: &'a str,
    instruction: &'static str,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    summary: String,
}

/// Cliente HTTP del servicio de resúmenes
pub struct HttpSummaryGenerator {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl HttpSummaryGenerator {
    const INSTRUCTION: &'static str = "Eres un asistente de un taller mecánico. Traduce las notas \
        técnicas a un resumen breve, claro y amable para el dueño del vehículo.";

    pub fn new(url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            api_key,
        }
    }
}

#[async_trait]
impl SummaryGenerator for HttpSummaryGenerator {
    async fn generate(&self, notes: &str) -> Result<String, AppError> {
        let request = SummaryRequest {
            notes,
            instruction: Self::INSTRUCTION,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::SummaryApi(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::SummaryApi(format!(
                "unexpected status: {}",
                response.status()
            )));
        }

        let body: SummaryResponse = response
            .json()
            .await
            .map_err(|e| AppError::SummaryApi(format!("invalid response body: {}", e)))?;

        Ok(body.summary.trim().to_string())
    }
}

/// Fallback determinista para entornos sin API configurada
#[derive(Debug, Default)]
pub struct OfflineSummaryGenerator;

#[async_trait]
impl SummaryGenerator for OfflineSummaryGenerator {
    async fn generate(&self, notes: &str) -> Result<String, AppError> {
        let trimmed = notes.trim();
        if trimmed.is_empty() {
            return Err(AppError::SummaryApi("empty notes".to_string()));
        }
        Ok(format!("Trabajo realizado: {}", trimmed))
    }
}

/// Selecciona el generador según la configuración
pub fn summary_generator_from_config(config: &EnvironmentConfig) -> Box<dyn SummaryGenerator> {
    match (&config.summary_api_url, &config.summary_api_key) {
        (Some(url), Some(key)) => {
            log::info!("Generador de resúmenes HTTP configurado: {}", url);
            Box::new(HttpSummaryGenerator::new(url.clone(), key.clone()))
        }
        _ => {
            log::info!("Sin SUMMARY_API_URL/KEY: usando generador offline");
            Box::new(OfflineSummaryGenerator)
        }
    }
}
