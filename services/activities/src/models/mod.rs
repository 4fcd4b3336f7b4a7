//! Activities service models

pub mod activity;
pub mod admin;
pub mod credential;

// Re-export for convenience
pub use activity::{Activity, seed_activities};
pub use admin::{EmailQuery, LoginRequest, LoginResponse, MessageResponse};
pub use credential::{CredentialFile, TeacherCredential};
