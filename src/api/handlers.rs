//! HTTP request handlers for the Parking Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_fee, calculate_rule_fee, calculate_stay_fee};
use crate::config::GarageSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{FeeResult, Transaction};

use super::request::{
    CheckInRequest, CheckOutRequest, FeeCalculationRequest, QuoteQuery, RuleFeeRequest,
    SettingsRequest, StayFeeRequest, TransactionQuery,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/fees/calculate", post(calculate_fee_handler))
        .route("/fees/stay", post(stay_fee_handler))
        .route("/fees/rules", post(rule_fee_handler))
        .route(
            "/settings",
            get(get_settings_handler).put(update_settings_handler),
        )
        .route("/slots", get(list_slots_handler))
        .route("/slots/:id/check-in", post(check_in_handler))
        .route("/slots/:id/quote", get(quote_handler))
        .route("/slots/:id/check-out", post(check_out_handler))
        .route("/vehicles/:plate", get(find_vehicle_handler))
        .route("/transactions", get(transactions_handler))
        .route("/summary", get(summary_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Unwraps a JSON body or builds the 400 response for it.
fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Rejected request body"
            );
            let error = ApiError::from_json_rejection(&rejection);
            Err(ApiErrorResponse::bad_request(error).into_response())
        }
    }
}

/// Unwraps a path parameter or builds the 400 response for it.
fn parse_path<T>(
    path: Result<Path<T>, PathRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match path {
        Ok(Path(value)) => Ok(value),
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Rejected path parameter"
            );
            let error = ApiError::validation_error(rejection.body_text());
            Err(ApiErrorResponse::bad_request(error).into_response())
        }
    }
}

/// Unwraps a query string or builds the 400 response for it.
fn parse_query<T>(
    query: Result<Query<T>, QueryRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match query {
        Ok(Query(value)) => Ok(value),
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Rejected query string"
            );
            let error = ApiError::validation_error(rejection.body_text());
            Err(ApiErrorResponse::bad_request(error).into_response())
        }
    }
}

fn error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        validation = err.is_validation(),
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

fn respond<T: Serialize>(result: EngineResult<T>, correlation_id: Uuid) -> Response {
    match result {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(err) => error_response(err, correlation_id),
    }
}

fn fee_response(result: EngineResult<FeeResult>, correlation_id: Uuid, started: Instant) -> Response {
    match result {
        Ok(fee) => {
            info!(
                correlation_id = %correlation_id,
                duration_hours = %fee.duration_hours,
                calculated_fee = %fee.calculated_fee,
                final_amount = %fee.final_amount,
                duration_us = started.elapsed().as_micros(),
                "Fee calculated"
            );
            json_response(StatusCode::OK, fee)
        }
        Err(err) => error_response(err, correlation_id),
    }
}

fn current_settings(state: &AppState) -> GarageSettings {
    *state.garage().read().settings()
}

/// Handler for POST /fees/calculate.
///
/// Prices a bare duration; rates missing from the body come from the
/// current settings.
async fn calculate_fee_handler(
    State(state): State<AppState>,
    payload: Result<Json<FeeCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing fee calculation request");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let started = Instant::now();
    let result = request
        .policy(&current_settings(&state))
        .and_then(|policy| {
            calculate_fee(request.duration_hours, &policy, request.manual_adjustment)
        });

    fee_response(result, correlation_id, started)
}

/// Handler for POST /fees/stay.
async fn stay_fee_handler(
    State(state): State<AppState>,
    payload: Result<Json<StayFeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing stay fee request");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let started = Instant::now();
    let policy = current_settings(&state).pricing_policy();
    let result = request
        .stay()
        .and_then(|stay| calculate_stay_fee(&stay, &policy, request.manual_adjustment));

    fee_response(result, correlation_id, started)
}

/// Handler for POST /fees/rules.
async fn rule_fee_handler(
    payload: Result<Json<RuleFeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing rule fee request");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let started = Instant::now();
    let result = calculate_rule_fee(
        request.duration_hours,
        &request.pricing_rules,
        request.manual_adjustment,
    );

    fee_response(result, correlation_id, started)
}

/// Handler for GET /settings.
async fn get_settings_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, current_settings(&state))
}

/// Handler for PUT /settings.
///
/// Replaces capacity and prices; new prices apply to later check-outs.
async fn update_settings_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettingsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing settings update");

    let settings: GarageSettings = match parse_body(payload, correlation_id) {
        Ok(request) => request.into(),
        Err(response) => return response,
    };

    let result = state.garage().write().update_settings(settings);
    if result.is_ok() {
        info!(
            correlation_id = %correlation_id,
            total_slots = settings.total_slots,
            price_per_hour = %settings.price_per_hour,
            price_per_day = %settings.price_per_day,
            "Settings updated"
        );
    }

    respond(result.map(|()| settings), correlation_id)
}

/// Handler for GET /slots.
async fn list_slots_handler(State(state): State<AppState>) -> Response {
    let slots = state.garage().read().slots().to_vec();
    json_response(StatusCode::OK, slots)
}

/// Handler for POST /slots/:id/check-in.
async fn check_in_handler(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
    payload: Result<Json<CheckInRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let slot_id = match parse_path(path, correlation_id) {
        Ok(slot_id) => slot_id,
        Err(response) => return response,
    };
    info!(correlation_id = %correlation_id, slot_id, "Processing check-in");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let at = request.check_in_time.unwrap_or_else(Utc::now);
    let result = state
        .garage()
        .write()
        .check_in(slot_id, &request.license_plate, at)
        .cloned();

    if let Ok(slot) = &result {
        info!(
            correlation_id = %correlation_id,
            slot_id,
            license_plate = ?slot.license_plate,
            "Vehicle checked in"
        );
    }

    respond(result, correlation_id)
}

/// Handler for GET /slots/:id/quote.
///
/// Prices the running stay without checking the vehicle out.
async fn quote_handler(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
    query: Result<Query<QuoteQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let slot_id = match parse_path(path, correlation_id) {
        Ok(slot_id) => slot_id,
        Err(response) => return response,
    };
    let query = match parse_query(query, correlation_id) {
        Ok(query) => query,
        Err(response) => return response,
    };
    info!(correlation_id = %correlation_id, slot_id, "Processing quote");

    let started = Instant::now();
    let now = query.at.unwrap_or_else(Utc::now);
    let result = state
        .garage()
        .read()
        .quote(slot_id, now, query.manual_adjustment);

    fee_response(result, correlation_id, started)
}

/// Handler for POST /slots/:id/check-out.
///
/// Charges the stay, frees the slot and returns the recorded transaction.
async fn check_out_handler(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
    payload: Result<Json<CheckOutRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let slot_id = match parse_path(path, correlation_id) {
        Ok(slot_id) => slot_id,
        Err(response) => return response,
    };
    info!(correlation_id = %correlation_id, slot_id, "Processing check-out");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let at = request.check_out_time.unwrap_or_else(Utc::now);
    let result = state.garage().write().check_out(
        slot_id,
        at,
        request.manual_adjustment,
        request.payment_method,
    );

    if let Ok(transaction) = &result {
        info!(
            correlation_id = %correlation_id,
            transaction_id = %transaction.id,
            license_plate = %transaction.license_plate,
            amount = %transaction.amount,
            payment_method = ?transaction.payment_method,
            "Vehicle checked out"
        );
    }

    respond(result, correlation_id)
}

/// Handler for GET /vehicles/:plate.
async fn find_vehicle_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let plate = match parse_path(path, correlation_id) {
        Ok(plate) => plate,
        Err(response) => return response,
    };
    info!(correlation_id = %correlation_id, plate = %plate, "Looking up vehicle");

    let result = state.garage().read().find_vehicle(&plate).cloned();
    respond(result, correlation_id)
}

/// Handler for GET /transactions.
///
/// Newest first, optionally filtered by a partial plate.
async fn transactions_handler(
    State(state): State<AppState>,
    query: Result<Query<TransactionQuery>, QueryRejection>,
) -> Response {
    let query = match parse_query(query, Uuid::new_v4()) {
        Ok(query) => query,
        Err(response) => return response,
    };
    let limit = query.limit();
    let transactions: Vec<Transaction> = {
        let garage = state.garage().read();
        match query.search.as_deref() {
            Some(term) => garage
                .search_transactions(term)
                .into_iter()
                .take(limit)
                .cloned()
                .collect(),
            None => garage.recent_transactions(limit).to_vec(),
        }
    };

    json_response(StatusCode::OK, transactions)
}

/// Handler for GET /summary.
async fn summary_handler(State(state): State<AppState>) -> Response {
    let result = state.garage().read().summary();
    respond(result, Uuid::new_v4())
}
