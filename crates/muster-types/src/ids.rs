//! Type-safe identifier wrappers for model entities.
//!
//! Every entity family in the model has a strongly-typed ID to prevent
//! accidental mixing of identifiers at compile time. IDs are plain integers
//! assigned monotonically by the model when an entity is created; they are
//! never reused after deletion, so an ID uniquely names one entity for the
//! lifetime of a model instance.

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around `u64` with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Return the inner integer value.
            pub const fn into_inner(self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a campaign.
    CampaignId
}

define_id! {
    /// Unique identifier for a day within a campaign.
    DayId
}

define_id! {
    /// Unique identifier for an event within a campaign.
    EventId
}

define_id! {
    /// Unique identifier for a pupil within a campaign.
    PupilId
}
