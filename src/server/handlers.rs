//! Request Handlers Module
//! JSON endpoints backing the dashboard controls and the two charts.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::charts::{ChartBuilder, ChartError, Figure};
use crate::data::{LaunchData, SiteSelection, ALL_SITES};

/// Shared application state: the dataset, loaded once and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub data: Arc<LaunchData>,
}

impl AppState {
    pub fn new(data: LaunchData) -> Self {
        Self {
            data: Arc::new(data),
        }
    }
}

/// Maps chart computation failures to a 500 response.
#[derive(Debug)]
pub struct AppError(ChartError);

impl From<ChartError> for AppError {
    fn from(err: ChartError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "chart computation failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

fn default_site() -> String {
    ALL_SITES.to_string()
}

#[derive(Debug, Deserialize)]
pub struct PieParams {
    #[serde(default = "default_site")]
    pub site: String,
}

#[derive(Debug, Deserialize)]
pub struct ScatterParams {
    #[serde(default = "default_site")]
    pub site: String,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

/// Values that seed the dashboard controls.
#[derive(Debug, Serialize)]
pub struct Meta {
    pub sites: Vec<String>,
    pub payload_min: f64,
    pub payload_max: f64,
    pub rows: usize,
}

/// GET /api/meta
pub async fn meta(State(state): State<AppState>) -> Json<Meta> {
    let (payload_min, payload_max) = state.data.payload_bounds();
    Json(Meta {
        sites: state.data.launch_sites().to_vec(),
        payload_min,
        payload_max,
        rows: state.data.row_count(),
    })
}

/// GET /api/pie?site=
pub async fn pie(
    State(state): State<AppState>,
    Query(params): Query<PieParams>,
) -> Result<Json<Figure>, AppError> {
    let selection = SiteSelection::parse(&params.site);
    let figure = ChartBuilder::success_pie(&state.data, &selection)?;
    if figure.is_empty() {
        tracing::debug!(site = %params.site, "pie selection matched no launches");
    }
    Ok(Json(figure))
}

/// GET /api/scatter?site=&low=&high=
///
/// Missing bounds default to the dataset's payload min/max, matching the
/// range control's initial position.
pub async fn scatter(
    State(state): State<AppState>,
    Query(params): Query<ScatterParams>,
) -> Result<Json<Figure>, AppError> {
    let selection = SiteSelection::parse(&params.site);
    let (data_min, data_max) = state.data.payload_bounds();
    let low = params.low.unwrap_or(data_min);
    let high = params.high.unwrap_or(data_max);
    let figure = ChartBuilder::payload_scatter(&state.data, &selection, low, high)?;
    if figure.is_empty() {
        tracing::debug!(site = %params.site, low, high, "scatter selection matched no launches");
    }
    Ok(Json(figure))
}
