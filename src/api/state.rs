use std::sync::Arc;

use crate::{config::Config, services::Recommender};

/// Shared application state.
///
/// Everything here is read-only once the server starts, so handlers share it
/// through an `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
    /// Result count used when a request does not specify one
    pub num_recommendations: usize,
    /// Title count for random samples when a request does not specify one
    pub sample_size: usize,
}

impl AppState {
    pub fn new(recommender: Recommender, num_recommendations: usize, sample_size: usize) -> Self {
        Self {
            recommender: Arc::new(recommender),
            num_recommendations,
            sample_size,
        }
    }

    pub fn from_config(recommender: Recommender, config: &Config) -> Self {
        Self::new(recommender, config.num_recommendations, config.sample_size)
    }
}
