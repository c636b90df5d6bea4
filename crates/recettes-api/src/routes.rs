//! Request handlers.

use std::collections::HashMap;

use axum::extract::{Form, Query, State};
use axum::http::{header, HeaderValue};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use recettes_core::Error as InputError;
use recettes_export::archive_file_name;
use serde::{Deserialize, Serialize};

use crate::pages;
use crate::request::{SubmitRequest, RECIPE_FIELD};
use crate::server::AppState;
use crate::{Error, Result};

/// Query string of `GET /form`.
#[derive(Debug, Deserialize)]
pub struct FormQuery {
    /// Recipe to build the form for.
    pub recette: Option<String>,
}

/// Body of `GET /health`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"` when the server answers.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Number of recipes in the catalog.
    pub recipes: usize,
}

/// `GET /` — recipe list.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(pages::landing(state.calculator().catalog()))
}

/// `GET /form?recette=<name>` — headcount form for one recipe.
pub async fn form(
    State(state): State<AppState>,
    Query(query): Query<FormQuery>,
) -> Result<Html<String>> {
    let recipe = query
        .recette
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| InputError::missing_field(RECIPE_FIELD))?;
    Ok(Html(pages::form(recipe, state.calculator().coefficients())))
}

/// `POST /submit` — scale the recipe and download the archive.
pub async fn submit(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Response> {
    let request = SubmitRequest::from_form(&fields, state.calculator().coefficients())?;
    let total = state.calculator().total_coefficient(&request.counts);

    let computation = state.calculator().compute(&request.recipe, &request.counts);
    if !computation.is_found() {
        tracing::warn!(
            recipe = %request.recipe,
            "unknown recipe; continuing with an empty spreadsheet"
        );
    }
    let rows = computation.into_rows();

    let documents = state.documents().clone();
    let recipe = request.recipe.clone();
    let archive = tokio::task::spawn_blocking(move || -> recettes_export::Result<Vec<u8>> {
        let spreadsheet = recettes_export::export(&rows)?;
        documents.pack_recipe(&spreadsheet, &recipe)
    })
    .await??;

    tracing::info!(
        recipe = %request.recipe,
        headcount = request.counts.headcount(),
        %total,
        bytes = archive.len(),
        "archive ready"
    );

    let disposition = attachment(&archive_file_name(&request.recipe));
    let disposition = HeaderValue::from_bytes(disposition.as_bytes())
        .map_err(|e| Error::Internal(format!("invalid Content-Disposition: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/zip")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        archive,
    )
        .into_response())
}

/// `GET /health` — liveness check.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        recipes: state.calculator().catalog().len(),
    })
}

/// `Content-Disposition` value for a download named `file_name`.
///
/// `filename` carries an ASCII fallback; `filename*` carries the exact
/// UTF-8 name (RFC 6266).
fn attachment(file_name: &str) -> String {
    let name: String = file_name.chars().filter(|c| !c.is_control()).collect();
    let fallback: String = name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii() => c,
            _ => '_',
        })
        .collect();
    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        pages::encode_query_value(&name)
    )
}
