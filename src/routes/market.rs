use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::chart::{self, DrawCommand, Layout, Tooltip, layout};
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(api_health))
        .route("/api/klines", get(api_klines))
        .route("/api/chart", get(api_chart))
}

async fn api_health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "bars": state.window().len(),
        "window": state.config.window_bound,
    }))
}

/// Current window snapshot in the upstream wire shape.
async fn api_klines(State(state): State<Arc<AppState>>) -> Json<Value> {
    let bars = state.window();
    Json(json!({
        "topic": format!("kline.{}", exchange::SYMBOL),
        "symbol": exchange::SYMBOL,
        "data": bars,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    #[serde(default = "default_width")]
    width: f32,
    /// Cursor x in surface coordinates; resolved to a hovered bar, if any.
    #[serde(default)]
    cursor_x: Option<f32>,
}

fn default_width() -> f32 {
    700.0
}

#[derive(Debug, Serialize)]
struct ChartResponse {
    width: f32,
    height: f32,
    hover: Option<usize>,
    commands: Vec<DrawCommand>,
    tooltip: Option<Tooltip>,
}

/// Renders the current window for the requested surface width.
///
/// The full pipeline runs per request: surface sizing, hover hit-test,
/// layout, paint. An empty window yields an empty command list.
async fn api_chart(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChartQuery>,
) -> Json<ChartResponse> {
    let bars = state.window();

    let width = query.width.max(0.0);
    let height = chart::surface_height(width);

    let hover = query
        .cursor_x
        .and_then(|x| layout::hit_test(x, bars.len(), width));
    let tooltip = hover.and_then(|index| bars.get(index)).map(Tooltip::for_bar);

    let layout = Layout::compute(&bars, width, height);
    let commands = chart::kline::paint(&layout, hover);

    Json(ChartResponse {
        width,
        height,
        hover,
        commands,
        tooltip,
    })
}
