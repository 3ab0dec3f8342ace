use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::IntoResponse,
    Json,
};
use fnd_core::{guide::GUIDE, AnalysisReport, Article, HistoryEntry};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::error::ApiError;
use crate::AppState;

type ApiResult<T> = std::result::Result<T, ApiError>;

pub const EXPORT_FILENAME: &str = "fnd_history.jsonl";

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    pub title: Option<String>,
    pub source: Option<String>,
}

impl AnalyzeRequest {
    fn into_article(self) -> Article {
        let mut article = Article::pasted(self.text);
        if let Some(title) = self.title.filter(|t| !t.trim().is_empty()) {
            article = article.with_title(title);
        }
        if let Some(source) = self.source.filter(|s| !s.trim().is_empty()) {
            article = article.with_source(source);
        }
        article
    }
}

#[derive(Debug, Deserialize)]
pub struct UrlRequest {
    pub url: String,
}

pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "model": state.detector.model_name(),
        "vocabulary_size": state.detector.vocabulary_size(),
        "history": state.history.name(),
    }))
}

/// Analyze, then append to history. Failed analyses are not recorded.
async fn analyze_and_record(state: &AppState, article: Article) -> ApiResult<Json<AnalysisReport>> {
    let report = state.detector.analyze(&article)?;
    state
        .history
        .record_analysis(&article, report.result.clone())
        .await?;
    tracing::debug!("Recorded analysis of '{}'", article.title);
    Ok(Json(report))
}

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<AnalyzeRequest>, JsonRejection>,
) -> ApiResult<Json<AnalysisReport>> {
    let Json(request) = payload?;
    analyze_and_record(&state, request.into_article()).await
}

pub async fn analyze_url(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<UrlRequest>, JsonRejection>,
) -> ApiResult<Json<AnalysisReport>> {
    let Json(request) = payload?;
    let article = state.scraper.scrape_article(&request.url).await?;
    analyze_and_record(&state, article).await
}

pub async fn history(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<HistoryEntry>>> {
    Ok(Json(state.history.list().await?))
}

pub async fn export_history(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let entries = state.history.list().await?;
    let body = fnd_storage::to_jsonl(&entries)?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/x-ndjson".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
            ),
        ],
        body,
    ))
}

pub async fn learn() -> impl IntoResponse {
    Json(GUIDE)
}
