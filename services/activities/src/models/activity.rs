//! Activity model and the seed roster

use indexmap::IndexMap;
use serde::Serialize;

/// Activity entity
///
/// Serialized under its name in the activities map, so the name itself is
/// left out of the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in signup order
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: &str,
        description: &str,
        schedule: &str,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn is_signed_up(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Build the roster every process starts with
pub fn seed_activities() -> IndexMap<String, Activity> {
    [
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        Activity::new(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
        Activity::new(
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
        Activity::new(
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        Activity::new(
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
        Activity::new(
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
        Activity::new(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    ]
    .into_iter()
    .map(|activity| (activity.name.clone(), activity))
    .collect()
}
