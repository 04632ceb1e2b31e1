//! # astra-server
//!
//! axum HTTP layer for Astra. Handlers parse requests, call the
//! repository methods on `AstraService`, and answer with the typed views from
//! `astra-core`.
//!
//! ```text
//! GET  /                 200, empty body
//! GET  /scientists       200, [ScientistView]
//! POST /scientists       201, ScientistView | 422 {"errors": [...]}
//! GET  /scientists/:id   200, ScientistWithMissionsView | 404 {"error": ...}
//! ```

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
