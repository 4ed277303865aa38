//! Domain model and event-producing mutators for the Muster campaign
//! planner.
//!
//! The [`Model`] is one plain in-memory value holding every campaign, day,
//! event, and pupil. It knows nothing about locking or persistence — that
//! is the state container's job (`muster-store`). What this crate defines
//! is the transition discipline:
//!
//! 1. A *mutator* (`create_campaign`, `update_event`, `delete_pupil`, ...)
//!    borrows the model immutably, validates, and returns a
//!    [`ModelEvent`](muster_types::ModelEvent) describing the transition.
//!    Mutators never mutate.
//! 2. [`Model::apply`] is the only way state actually changes. Live writes
//!    and log replay both go through it, so replaying the recorded event
//!    sequence from the empty model reproduces the live state exactly.
//!
//! Deletions cascade: removing a campaign removes its days, events, and
//! pupils; removing a day drops it from referencing events' day sets.

mod apply;
mod campaign;
mod day;
pub mod error;
mod event;
mod model;
mod pupil;

pub use error::ModelError;
pub use model::Model;
