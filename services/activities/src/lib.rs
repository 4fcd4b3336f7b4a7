//! Mergington High School activities service
//!
//! Lists extracurricular activities, lets students sign up and lets logged-in
//! teachers unregister them. All state lives in memory for the lifetime of the
//! process.

pub mod credentials;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod session;
pub mod state;
pub mod store;

pub use state::AppState;
