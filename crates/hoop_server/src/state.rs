//! Shared application state.

use hoop_core::config::Settings;
use hoop_core::pipeline::TrackingPipeline;

/// State shared across request handlers.
pub struct AppState {
    pub pipeline: TrackingPipeline,
}

impl AppState {
    /// Build the state, constructing the pipeline from settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            pipeline: TrackingPipeline::from_settings(&settings),
        }
    }
}
