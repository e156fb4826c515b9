//! Activity cards and select options built from one activity snapshot.
//! Cards are rebuilt from scratch on every render.

use crate::features::activities::{Activity, ActivityBook};
use std::fmt;

/// Target of a participant's removal control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoveControl {
    pub activity: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    /// Present only while a teacher is signed in.
    pub remove: Option<RemoveControl>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

impl ActivityCard {
    #[must_use]
    pub fn build(name: &str, activity: &Activity, removable: bool) -> Self {
        let participants = activity
            .participants
            .iter()
            .map(|email| ParticipantRow {
                email: email.clone(),
                remove: removable.then(|| RemoveControl {
                    activity: name.to_string(),
                    email: email.clone(),
                }),
            })
            .collect();

        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants,
        }
    }

    pub fn remove_controls(&self) -> impl Iterator<Item = &RemoveControl> {
        self.participants.iter().filter_map(|row| row.remove.as_ref())
    }
}

impl fmt::Display for ActivityCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  {}", self.description)?;
        writeln!(f, "  Schedule: {}", self.schedule)?;
        writeln!(f, "  Availability: {} spots left", self.spots_left)?;

        if self.participants.is_empty() {
            return writeln!(f, "  No participants yet");
        }

        writeln!(f, "  Participants:")?;
        for row in &self.participants {
            if row.remove.is_some() {
                writeln!(f, "    - {} [❌]", row.email)?;
            } else {
                writeln!(f, "    - {}", row.email)?;
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Builds one card and one select option per activity, in server order.
#[must_use]
pub fn build(book: &ActivityBook, removable: bool) -> (Vec<ActivityCard>, Vec<SelectOption>) {
    book.iter()
        .map(|(name, activity)| {
            (
                ActivityCard::build(name, activity, removable),
                SelectOption {
                    value: name.to_string(),
                    label: name.to_string(),
                },
            )
        })
        .unzip()
}
