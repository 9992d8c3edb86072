use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    services::Recommendation,
};

use super::{page, AppState};

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SampleQuery {
    pub count: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub title: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub title: String,
    pub found: bool,
    pub recommendations: Vec<Recommendation>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Movie picker page; with `?title=` it also shows the recommendations
pub async fn index_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let recommender = &state.recommender;

    let results = query
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(|title| {
            let recommendations = recommender.recommend(title, state.num_recommendations);
            page::Results {
                title,
                found: recommender.contains(title),
                recommendations,
            }
        });

    Html(page::render(&recommender.titles(), results.as_ref()))
}

/// All titles in dataset order
pub async fn get_titles(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.recommender.titles().into_iter().map(String::from).collect())
}

/// Random titles, handy for finding exact spellings
pub async fn sample_titles(
    State(state): State<AppState>,
    Query(query): Query<SampleQuery>,
) -> Json<Vec<String>> {
    let count = query.count.unwrap_or(state.sample_size);
    Json(
        state
            .recommender
            .sample_titles(count)
            .into_iter()
            .map(String::from)
            .collect(),
    )
}

/// Movies with the most similar genres to `title`
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    let title = query
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::InvalidInput("title is required".to_string()))?;
    let limit = query.limit.unwrap_or(state.num_recommendations);

    let found = state.recommender.contains(&title);
    let recommendations = state.recommender.recommend_scored(&title, limit);

    tracing::info!(
        request_id = %request_id,
        title = %title,
        found,
        returned = recommendations.len(),
        "Recommendations served"
    );

    Ok(Json(RecommendationResponse {
        title,
        found,
        recommendations,
    }))
}
