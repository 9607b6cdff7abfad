//! Registration snapshot.
//!
//! A `Registration` is the materialized, read-only view of a manufactured
//! home record: the base registration plus its append-only history of change
//! registrations. Validation never mutates a snapshot. The persistence layer
//! (current or legacy schema) is responsible for normalizing into this one
//! canonical shape before any rule runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::description::HomeDescription;
use crate::enums::{RecordStatus, RegistrationStatus, RegistrationType};
use crate::location::Location;
use crate::note::Note;
use crate::owner::OwnerGroup;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub mhr_number: String,
    pub registration_type: RegistrationType,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub status: Option<RegistrationStatus>,
    #[serde(default)]
    pub registration_ts: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub description: Option<HomeDescription>,
    #[serde(default)]
    pub owner_groups: Vec<OwnerGroup>,
    #[serde(default)]
    pub notes: Vec<Note>,
    /// Change registrations in registration order (oldest first).
    #[serde(default)]
    pub change_registrations: Vec<Registration>,
}

impl Registration {
    /// The currently active location, searching the base registration first
    /// and then the change history. At most one location is active at a time.
    pub fn active_location(&self) -> Option<&Location> {
        if let Some(location) = self.location.as_ref()
            && location.status == Some(RecordStatus::Active)
        {
            return Some(location);
        }
        self.change_registrations.iter().find_map(|reg| {
            reg.location
                .as_ref()
                .filter(|location| location.status == Some(RecordStatus::Active))
        })
    }

    /// The most recent change registration, if any.
    pub fn last_change(&self) -> Option<&Registration> {
        self.change_registrations.last()
    }

    /// Count owner groups still of record (active or exempt) across the base
    /// registration and its change history.
    pub fn existing_group_count(&self) -> u32 {
        let mut count = self
            .owner_groups
            .iter()
            .filter(|group| group.is_of_record())
            .count();
        for reg in &self.change_registrations {
            count += reg
                .owner_groups
                .iter()
                .filter(|group| group.is_of_record())
                .count();
        }
        count as u32
    }

    /// Find an owner group by id across the base registration and its change
    /// history.
    pub fn find_group(&self, group_id: u32) -> Option<&OwnerGroup> {
        if let Some(group) = self
            .owner_groups
            .iter()
            .find(|group| group.group_id == group_id)
        {
            return Some(group);
        }
        self.change_registrations.iter().find_map(|reg| {
            reg.owner_groups
                .iter()
                .find(|group| group.group_id == group_id)
        })
    }

    /// All owner groups, proposed base first then change history, for rules
    /// that reconcile interest across the full lineage.
    pub fn all_groups(&self) -> impl Iterator<Item = &OwnerGroup> {
        self.owner_groups.iter().chain(
            self.change_registrations
                .iter()
                .flat_map(|reg| reg.owner_groups.iter()),
        )
    }

    /// Find a note by its registration document id across the base
    /// registration and its change history.
    pub fn find_cancel_note(&self, document_id: &str) -> Option<&Note> {
        let matches_doc = |note: &&Note| {
            note.document_id
                .as_deref()
                .map(|id| id == document_id)
                .unwrap_or(false)
        };
        if let Some(note) = self.notes.iter().find(matches_doc) {
            return Some(note);
        }
        self.change_registrations
            .iter()
            .find_map(|reg| reg.notes.iter().find(matches_doc))
    }
}
