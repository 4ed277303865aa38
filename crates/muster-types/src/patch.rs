//! Partial-update payloads with explicit per-field presence.
//!
//! An update touches exactly the fields that are `Some` and leaves every
//! `None` field unchanged. Presence is tracked per field rather than by
//! sentinel values, so "not provided" is unambiguous from "provided empty
//! string". Patches are embedded in update events, which makes the applied
//! delta visible in the log and keeps replay deterministic.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ids::DayId;

/// Partial update for an [`Event`](crate::Event).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPatch {
    /// New title, if provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement day set, if provided. Validated against the owning
    /// campaign before the patch is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<BTreeSet<DayId>>,
    /// New attendee capacity, if provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    /// New special-pupil sub-quota, if provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_special_pupils: Option<u32>,
}

impl EventPatch {
    /// Whether the patch specifies no fields at all.
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.days.is_none()
            && self.capacity.is_none()
            && self.max_special_pupils.is_none()
    }
}

/// Partial update for a [`Pupil`](crate::Pupil).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PupilPatch {
    /// New name, if provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New class label, if provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// New special flag, if provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special: Option<bool>,
}

impl PupilPatch {
    /// Whether the patch specifies no fields at all.
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.class.is_none() && self.special.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_omitted_from_encoding() {
        let patch = PupilPatch {
            class: Some("5b".to_owned()),
            ..PupilPatch::default()
        };
        let json = serde_json::to_string(&patch).ok();
        assert_eq!(json.as_deref(), Some(r#"{"class":"5b"}"#));
    }

    #[test]
    fn empty_string_is_distinct_from_absent() {
        let decoded: Option<PupilPatch> = serde_json::from_str(r#"{"name":""}"#).ok();
        let patch = decoded.unwrap_or_default();
        assert_eq!(patch.name.as_deref(), Some(""));
        assert!(patch.class.is_none());
        assert!(!patch.is_empty());
    }
}
