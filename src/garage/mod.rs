//! Garage state for the Parking Engine.
//!
//! [`Garage`] owns the slot table and the transaction log and routes every
//! check-out through the fee calculator. It holds no locks itself; callers
//! sharing it across tasks wrap it the way [`crate::api::AppState`] does.

mod slots;
mod summary;

pub use slots::Garage;
pub use summary::GarageSummary;
