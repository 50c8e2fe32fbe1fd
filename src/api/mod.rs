//! HTTP API for the payroll calculators.
//!
//! Exposes the calculators, the result formatter, the saved-calculation
//! helpers, A/B variant assignment and the admin experiment listing.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{FormatRequest, USER_EMAIL_HEADER};
pub use response::{
    ApiError, CalculateResponse, ExperimentsResponse, PrefillResponse, ReconstructResponse,
    RowsResponse,
};
pub use state::AppState;
