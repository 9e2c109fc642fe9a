//! HTTP server implementation
//!
//! Session endpoints and the role matrix administration API.

// Submodules
pub mod middleware;
pub mod routes;

pub mod builder;
pub mod server;
pub mod state;
mod utils;


pub use builder::{ServerBuilder, run_server};
pub use server::HttpServer;
pub use state::AppState;
