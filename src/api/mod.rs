//! HTTP API module for the Parking Engine.
//!
//! This module provides the REST API endpoints for pricing stays and for
//! running the garage: settings, slots, check-in/check-out, transactions
//! and the dashboard summary.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CheckInRequest, CheckOutRequest, DEFAULT_TRANSACTION_LIMIT, FeeCalculationRequest,
    QuoteQuery, RuleFeeRequest, SettingsRequest, StayFeeRequest, TransactionQuery,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
