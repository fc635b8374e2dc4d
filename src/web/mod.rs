//! Web server module
//!
//! Carries suggestion queries between the client widget and the extension
//! over HTTP.

mod handlers;
mod routes;
mod state;

pub use handlers::{ApiError, QuerySuggestionsRequest, SuggestionsResponse};
pub use routes::create_router;
pub use state::AppState;
