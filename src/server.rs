//! HTTP server for the chat backend

use crate::config::AppConfig;
use crate::error::AppError;
use crate::providers::{GoogleProvider, LlmProvider};
use crate::recipes::RecipeBook;
use crate::responder::Responder;
use crate::routes;
use crate::substitutions::SubstitutionTable;
use axum::Router;
use log::{error, info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Application state shared across handlers, built once at startup
pub struct AppState {
    pub responder: Responder,
    pub substitutions: SubstitutionTable,
}

impl AppState {
    pub fn new(responder: Responder, substitutions: SubstitutionTable) -> Self {
        Self {
            responder,
            substitutions,
        }
    }

    /// Load data and construct the generation provider from configuration.
    ///
    /// A missing API key is not fatal: the state is built without a provider
    /// and generation requests get an explanatory reply.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let recipes = match &config.data.recipes_path {
            Some(path) => RecipeBook::from_path(path)?,
            None => RecipeBook::builtin()?,
        };
        let substitutions = match &config.data.substitutions_path {
            Some(path) => SubstitutionTable::from_path(path)?,
            None => SubstitutionTable::builtin()?,
        };
        info!(
            "Loaded {} recipes and {} substitutions",
            recipes.len(),
            substitutions.len()
        );

        let provider: Option<Box<dyn LlmProvider>> = match GoogleProvider::new(&config.provider) {
            Ok(provider) => {
                info!("Using Google Gemini model '{}'", config.provider.model);
                Some(Box::new(provider))
            }
            Err(AppError::MissingApiKey) => {
                error!("{}", AppError::MissingApiKey);
                warn!("Starting without text generation; only recipe matching will work");
                None
            }
            Err(e) => return Err(e),
        };

        Ok(Self::new(Responder::new(recipes, provider), substitutions))
    }
}

/// Build the router: API routes plus the static chat page
pub fn router(state: AppState, static_dir: impl Into<PathBuf>) -> Router {
    Router::new()
        .merge(routes::chat_routes())
        .merge(routes::substitution_routes())
        .fallback_service(ServeDir::new(static_dir.into()))
        .with_state(Arc::new(state))
}

/// Run the HTTP server until Ctrl-C
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let state = AppState::from_config(&config)?;
    let app = router(state, config.server.static_dir.clone());

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_with_api_key() {
        let mut config = AppConfig::default();
        config.provider.api_key = Some("test-key".to_string());

        let state = AppState::from_config(&config).unwrap();
        assert!(state.responder.has_provider());
        assert!(!state.responder.recipes().is_empty());
        assert!(!state.substitutions.is_empty());
    }

    #[test]
    fn test_from_config_with_data_files() {
        let dir = tempfile::tempdir().unwrap();
        let recipes = dir.path().join("recipes.json");
        let substitutions = dir.path().join("substitutions.json");
        std::fs::write(
            &recipes,
            r#"[{"name": "Toast", "ingredients": ["bread", "butter"], "steps": ["Toast"], "time": 5, "difficulty": "Easy"}]"#,
        )
        .unwrap();
        std::fs::write(
            &substitutions,
            r#"[{"ingredient": "bread", "substitutes": ["crackers"]}]"#,
        )
        .unwrap();

        let mut config = AppConfig::default();
        config.provider.api_key = Some("test-key".to_string());
        config.data.recipes_path = Some(recipes);
        config.data.substitutions_path = Some(substitutions);

        let state = AppState::from_config(&config).unwrap();
        assert_eq!(state.responder.recipes().len(), 1);
        assert_eq!(state.substitutions.len(), 1);
    }

    #[test]
    fn test_from_config_missing_data_file() {
        let mut config = AppConfig::default();
        config.data.recipes_path = Some(PathBuf::from("/nonexistent/recipes.json"));

        let result = AppState::from_config(&config);
        assert!(matches!(result, Err(AppError::IoError(_))));
    }
}
