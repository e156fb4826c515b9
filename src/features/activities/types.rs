use serde::{
    Deserialize, Deserializer, Serialize,
    de::{MapAccess, Visitor},
};
use std::fmt;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Negative when the roster is over capacity.
    #[must_use]
    pub fn spots_left(&self) -> i64 {
        let taken = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// Activities keyed by name, in the order the server sent them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityBook {
    entries: Vec<(String, Activity)>,
}

impl ActivityBook {
    #[must_use]
    pub fn new(entries: Vec<(String, Activity)>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, activity)| activity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries
            .iter()
            .map(|(name, activity)| (name.as_str(), activity))
    }
}

impl<'de> Deserialize<'de> for ActivityBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BookVisitor;

        impl<'de> Visitor<'de> for BookVisitor {
            type Value = ActivityBook;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of activity name to activity")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    entries.push((name, activity));
                }
                Ok(ActivityBook { entries })
            }
        }

        deserializer.deserialize_map(BookVisitor)
    }
}

/// Success body of the signup and unregister endpoints.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionMessage {
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn book_keeps_server_order() {
        let book: ActivityBook = serde_json::from_str(
            r#"{
                "Soccer Team": {"description": "d", "schedule": "s", "max_participants": 22, "participants": []},
                "Art Club": {"description": "d", "schedule": "s", "max_participants": 15, "participants": ["a@mergington.edu"]},
                "Chess Club": {"description": "d", "schedule": "s", "max_participants": 12, "participants": []}
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = book.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Soccer Team", "Art Club", "Chess Club"]);
        assert_eq!(book.len(), 3);
        assert_eq!(
            book.get("Art Club").map(|a| a.participants.len()),
            Some(1)
        );
        assert!(book.get("Drama Club").is_none());
    }

    #[test]
    fn book_rejects_non_map() {
        assert!(serde_json::from_str::<ActivityBook>("[]").is_err());
        assert!(serde_json::from_str::<ActivityBook>(r#"{"detail": "nope"}"#).is_err());
    }

    #[test]
    fn spots_left_counts_participants() {
        let mut activity = Activity {
            description: "Learn strategies".to_string(),
            schedule: "Fridays".to_string(),
            max_participants: 2,
            participants: vec!["a@mergington.edu".to_string()],
        };
        assert_eq!(activity.spots_left(), 1);

        activity.participants.push("b@mergington.edu".to_string());
        activity.participants.push("c@mergington.edu".to_string());
        assert_eq!(activity.spots_left(), -1);
    }
}
