//! Error types emitted by the routexplore CLI.

use std::sync::Arc;

use routexplore_core::ItineraryError;
use routexplore_data::ProviderBuildError;
use thiserror::Error;

/// Errors emitted by the routexplore CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Constructing the HTTP providers failed.
    #[error("failed to build HTTP providers: {0}")]
    BuildProvider(#[from] ProviderBuildError),
    /// The async runtime could not start.
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// The orchestrator rejected or failed the request.
    #[error("{source}")]
    Itinerary { source: ItineraryError },
    /// Serialising the itinerary failed.
    #[error("failed to serialise itinerary: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the itinerary failed.
    #[error("failed to write itinerary: {0}")]
    WriteOutput(#[source] std::io::Error),
}
