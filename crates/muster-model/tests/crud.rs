//! Integration tests for the create/update/delete pathways.
//!
//! Every test drives the model the way the state container does: call a
//! mutator to get the event, then apply it.

// Tests use expect/unwrap extensively for clarity -- panicking on failure
// is the correct behavior in test code.
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::collections::BTreeSet;

use muster_model::{Model, ModelError};
use muster_types::{CampaignId, DayId, EventPatch, ModelEvent, PupilPatch};

/// Apply an event produced by a mutator, panicking on failure.
fn commit(model: &mut Model, event: &ModelEvent) {
    model.apply(event).expect("event must apply");
}

/// Build a model with one campaign ("Spring Trip", days Mon + Tue).
fn spring_trip() -> (Model, CampaignId, Vec<DayId>) {
    let mut model = Model::new();
    let (id, event) = model.create_campaign(
        "Spring Trip".to_owned(),
        vec!["Mon".to_owned(), "Tue".to_owned()],
    );
    commit(&mut model, &event);
    let days = model
        .campaign(id)
        .expect("campaign must exist")
        .days
        .clone();
    (model, id, days)
}

#[test]
fn created_ids_are_unique_and_never_reused() {
    let (mut model, campaign, _) = spring_trip();

    let (pupil_id, event) = model
        .create_pupil(campaign, "Ada".to_owned(), "5b".to_owned(), false)
        .unwrap();
    commit(&mut model, &event);

    let event = model.delete_pupil(pupil_id).unwrap();
    commit(&mut model, &event);

    // A fresh create after the delete must not reuse the freed id.
    let (next_id, event) = model
        .create_pupil(campaign, "Grace".to_owned(), "5b".to_owned(), true)
        .unwrap();
    commit(&mut model, &event);
    assert!(next_id.into_inner() > pupil_id.into_inner());
    assert!(matches!(
        model.pupil(pupil_id),
        Err(ModelError::PupilNotFound(_))
    ));
}

#[test]
fn create_then_read_back_reflects_every_field() {
    let (mut model, campaign, days) = spring_trip();
    let monday = *days.first().unwrap();

    let (id, event) = model
        .create_event(
            campaign,
            "Hike".to_owned(),
            BTreeSet::from([monday]),
            20,
            5,
        )
        .unwrap();
    commit(&mut model, &event);

    let stored = model.event(id).unwrap();
    assert_eq!(stored.title, "Hike");
    assert_eq!(stored.campaign, campaign);
    assert_eq!(stored.days, BTreeSet::from([monday]));
    assert_eq!(stored.capacity, 20);
    assert_eq!(stored.max_special_pupils, 5);
}

#[test]
fn partial_update_leaves_unspecified_fields_untouched() {
    let (mut model, campaign, days) = spring_trip();
    let monday = *days.first().unwrap();

    let (id, event) = model
        .create_event(
            campaign,
            "Hike".to_owned(),
            BTreeSet::from([monday]),
            20,
            5,
        )
        .unwrap();
    commit(&mut model, &event);

    let patch = EventPatch {
        capacity: Some(25),
        ..EventPatch::default()
    };
    let event = model.update_event(id, patch).unwrap();
    commit(&mut model, &event);

    let stored = model.event(id).unwrap();
    assert_eq!(stored.capacity, 25);
    // Everything else kept its pre-update value.
    assert_eq!(stored.title, "Hike");
    assert_eq!(stored.days, BTreeSet::from([monday]));
    assert_eq!(stored.max_special_pupils, 5);
}

#[test]
fn provided_empty_string_overwrites_but_absent_does_not() {
    let (mut model, campaign, _) = spring_trip();
    let (id, event) = model
        .create_pupil(campaign, "Ada".to_owned(), "5b".to_owned(), true)
        .unwrap();
    commit(&mut model, &event);

    // An explicitly provided empty class is applied; the absent name and
    // special flag are not reset.
    let patch = PupilPatch {
        class: Some(String::new()),
        ..PupilPatch::default()
    };
    let event = model.update_pupil(id, patch).unwrap();
    commit(&mut model, &event);

    let stored = model.pupil(id).unwrap();
    assert_eq!(stored.name, "Ada");
    assert_eq!(stored.class, "");
    assert!(stored.special);
}

#[test]
fn listings_are_scoped_to_their_campaign() {
    let (mut model, first, _) = spring_trip();
    let (second, event) = model.create_campaign("Autumn".to_owned(), vec!["Fri".to_owned()]);
    commit(&mut model, &event);

    let (_, event) = model
        .create_pupil(first, "Ada".to_owned(), "5b".to_owned(), false)
        .unwrap();
    commit(&mut model, &event);
    let (_, event) = model
        .create_pupil(second, "Grace".to_owned(), "6a".to_owned(), false)
        .unwrap();
    commit(&mut model, &event);

    assert_eq!(model.pupils_of(first).unwrap().len(), 1);
    assert_eq!(model.pupils_of(second).unwrap().len(), 1);
    assert_eq!(model.days_of(first).unwrap().len(), 2);
    assert_eq!(model.days_of(second).unwrap().len(), 1);
    assert_eq!(model.campaigns().count(), 2);
}
