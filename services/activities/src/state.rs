//! Application state shared across handlers

use crate::{session::SessionManager, store::ActivityStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub activity_store: ActivityStore,
    pub session_manager: SessionManager,
}

impl AppState {
    pub fn new(activity_store: ActivityStore, session_manager: SessionManager) -> Self {
        Self {
            activity_store,
            session_manager,
        }
    }
}
