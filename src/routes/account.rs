use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};

use data::account;
use data::GoldAccount;

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/account", get(api_account))
        .route("/api/account/buy", post(api_buy))
        .route("/api/account/lend", post(api_lend))
}

fn snapshot(account: &GoldAccount) -> Json<Value> {
    Json(json!({
        "balance": account.balance(),
        "apy": account::LENDING_APY,
        "symbol": account::TOKEN_SYMBOL,
    }))
}

#[derive(Debug, Deserialize)]
struct AmountRequest {
    amount: f64,
}

async fn api_account(State(state): State<Arc<AppState>>) -> Json<Value> {
    snapshot(&*state.account.lock().await)
}

async fn api_buy(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AmountRequest>,
) -> Result<Json<Value>, ApiError> {
    let mut account = state.account.lock().await;
    account
        .buy(request.amount)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    Ok(snapshot(&account))
}

async fn api_lend(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AmountRequest>,
) -> Result<Json<Value>, ApiError> {
    let mut account = state.account.lock().await;
    account
        .lend(request.amount)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    Ok(snapshot(&account))
}
