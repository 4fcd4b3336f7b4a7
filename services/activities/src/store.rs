//! In-memory activity registry

use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    error::RegistryError,
    models::{Activity, seed_activities},
};

/// Activity store shared across handlers
///
/// Every mutation runs under the write lock, so the membership check and the
/// roster change are applied together. Capacity is not enforced on signup.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    activities: Arc<RwLock<IndexMap<String, Activity>>>,
}

impl ActivityStore {
    /// Create a store holding the given activities
    pub fn new(activities: IndexMap<String, Activity>) -> Self {
        Self {
            activities: Arc::new(RwLock::new(activities)),
        }
    }

    /// Create a store holding the startup roster
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    /// Snapshot of every activity, in seed order
    pub async fn list_activities(&self) -> IndexMap<String, Activity> {
        self.activities.read().await.clone()
    }

    /// Append a student to an activity roster
    pub async fn signup(&self, name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or(RegistryError::ActivityNotFound)?;

        if activity.is_signed_up(email) {
            return Err(RegistryError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        info!("Signed up {} for {}", email, name);

        Ok(())
    }

    /// Remove a student from an activity roster
    pub async fn unregister(&self, name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or(RegistryError::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RegistryError::NotSignedUp)?;

        activity.participants.remove(position);
        info!("Unregistered {} from {}", email, name);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn roster(store: &ActivityStore, name: &str) -> Vec<String> {
        store.list_activities().await[name].participants.clone()
    }

    #[tokio::test]
    async fn test_signup_appends_in_order() {
        let store = ActivityStore::seeded();
        store
            .signup("Chess Club", "new@mergington.edu")
            .await
            .unwrap();

        assert_eq!(
            roster(&store, "Chess Club").await,
            vec![
                "michael@mergington.edu",
                "daniel@mergington.edu",
                "new@mergington.edu"
            ]
        );
    }

    #[tokio::test]
    async fn test_signup_rejects_duplicates() {
        let store = ActivityStore::seeded();
        let result = store.signup("Chess Club", "michael@mergington.edu").await;

        assert_eq!(result, Err(RegistryError::AlreadySignedUp));
        assert_eq!(roster(&store, "Chess Club").await.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_activity() {
        let store = ActivityStore::seeded();

        assert_eq!(
            store.signup("Underwater Basket Weaving", "a@mergington.edu").await,
            Err(RegistryError::ActivityNotFound)
        );
        assert_eq!(
            store.unregister("Underwater Basket Weaving", "a@mergington.edu").await,
            Err(RegistryError::ActivityNotFound)
        );
    }

    #[tokio::test]
    async fn test_unregister() {
        let store = ActivityStore::seeded();
        store
            .unregister("Chess Club", "michael@mergington.edu")
            .await
            .unwrap();

        assert_eq!(
            roster(&store, "Chess Club").await,
            vec!["daniel@mergington.edu"]
        );
        assert_eq!(
            store.unregister("Chess Club", "michael@mergington.edu").await,
            Err(RegistryError::NotSignedUp)
        );
        assert_eq!(roster(&store, "Chess Club").await.len(), 1);
    }

    #[tokio::test]
    async fn test_signup_does_not_check_capacity() {
        let mut activities = IndexMap::new();
        activities.insert(
            "Tiny Club".to_string(),
            Activity::new("Tiny Club", "One seat", "Never", 1, &["a@mergington.edu"]),
        );
        let store = ActivityStore::new(activities);

        store.signup("Tiny Club", "b@mergington.edu").await.unwrap();

        let activities = store.list_activities().await;
        assert_eq!(activities["Tiny Club"].participants.len(), 2);
        assert_eq!(activities["Tiny Club"].max_participants, 1);
    }

    #[tokio::test]
    async fn test_concurrent_signups_are_not_lost() {
        let store = ActivityStore::seeded();

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .signup("Gym Class", &format!("student{}@mergington.edu", i))
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(roster(&store, "Gym Class").await.len(), 22);
    }
}
