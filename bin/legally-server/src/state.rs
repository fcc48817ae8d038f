//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use legally_inference::{Advisor, HfClient, ModelSpec};

use crate::config::Config;
use crate::error::ServerError;
use crate::firebase::AdminGateway;

/// State shared across all HTTP handlers.
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// `None` when `HF_TOKEN` is missing; the advice endpoint reports 503.
    pub advisor: Option<Advisor<HfClient>>,
    /// `None` when `FIREBASE_DATABASE_URL` is missing; admin data endpoints
    /// report 503.
    pub firebase: Option<AdminGateway>,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let advisor = config.hf_token.as_ref().map(|token| {
            Advisor::new(
                HfClient::new(token.clone()),
                vec![
                    ModelSpec::completion(config.primary_model.clone()),
                    ModelSpec::chat(config.fallback_model.clone()),
                ],
            )
        });
        let firebase = AdminGateway::from_config(&config);
        Self {
            config: Arc::new(config),
            advisor,
            firebase,
        }
    }

    /// The advice orchestrator, or 503 when the inference credential is
    /// missing.
    pub fn advisor(&self) -> Result<&Advisor<HfClient>, ServerError> {
        self.advisor.as_ref().ok_or_else(|| {
            ServerError::NotConfigured(
                "AI service not configured. Please add HF_TOKEN to environment variables."
                    .to_owned(),
            )
        })
    }

    /// The hosted-database gateway, or 503 when it was never initialised.
    pub fn firebase(&self) -> Result<&AdminGateway, ServerError> {
        self.firebase
            .as_ref()
            .ok_or_else(|| ServerError::NotConfigured("Firebase not initialized".to_owned()))
    }
}
