//! Quiz HTTP server.
//!
//! Exposes the assembler and grading as a small JSON API.

mod error;
mod server;
mod state;

pub use error::ApiError;
pub use server::{router, run};
pub use state::AppState;
