//! # Folio Gateway
//! HTTP surface for the Folio search pipeline: an axum router with
//! request-trace and CORS middleware over a shared application state.

pub mod routes;
pub mod server;

pub use server::{AppState, build_router, serve};
