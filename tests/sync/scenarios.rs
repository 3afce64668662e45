use std::collections::BTreeSet;

use tempfeel::engine::{
    Intensity, ObservationDefaults, ObservationState, PredictionMode, PredictionOutcome,
    PredictionSynchronizer, Sensation, SubmitStatus, aggregate, from_prediction_label,
    recommend,
};
use tempfeel::error::{ServiceError, TempFeelError};
use tempfeel::{FormEdit, FormSession, GarmentCatalog, GarmentEntry, GarmentId, Zone};

use super::service_harness::QueuedService;

fn scenario_catalog() -> GarmentCatalog {
    GarmentCatalog::new(vec![
        GarmentEntry::new(GarmentId::JLight, Zone::Upper, 0.5),
        GarmentEntry::new(GarmentId::JFleece, Zone::Upper, 0.7),
        GarmentEntry::new(GarmentId::Shorts, Zone::Lower, 0.06),
        GarmentEntry::new(GarmentId::PThin, Zone::Lower, 0.15),
    ])
    .expect("scenario catalog is valid")
}

#[test]
fn aggregate_sums_single_zone_selection() {
    let catalog = GarmentCatalog::new(vec![
        GarmentEntry::new(GarmentId::TPoly, Zone::Upper, 0.08),
        GarmentEntry::new(GarmentId::PThin, Zone::Lower, 0.15),
    ])
    .unwrap();
    let selections = BTreeSet::from([GarmentId::TPoly]);

    assert_eq!(aggregate(&catalog, &selections, Zone::Upper), 0.08);
    assert_eq!(aggregate(&catalog, &selections, Zone::Lower), 0.0);
}

#[test]
fn aggregate_matches_catalog_sum_for_every_upper_subset() {
    let catalog = GarmentCatalog::standard();
    let upper: Vec<_> = catalog.zone(Zone::Upper).copied().collect();

    for mask in 0u32..(1 << upper.len()) {
        let chosen: Vec<_> = upper
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, entry)| *entry)
            .collect();
        let selections: BTreeSet<_> = chosen.iter().map(|entry| entry.id).collect();
        let expected: f64 = chosen.iter().map(|entry| entry.insulation).sum();

        assert!((aggregate(catalog, &selections, Zone::Upper) - expected).abs() < 1e-9);
        assert_eq!(aggregate(catalog, &selections, Zone::Lower), 0.0);
    }
}

#[test]
fn every_sensation_survives_label_round_trip() {
    for sensation in [
        Sensation::Cold,
        Sensation::Cool,
        Sensation::Warm,
        Sensation::Hot,
    ] {
        assert_eq!(from_prediction_label(sensation.wire_label()), Some(sensation));
        assert_eq!(
            from_prediction_label(&sensation.wire_label().to_lowercase()),
            Some(sensation)
        );
    }
}

#[test]
fn recommendation_is_stable_and_nearest() {
    let catalog = scenario_catalog();
    for _ in 0..5 {
        assert_eq!(recommend(&catalog, 0.52, Zone::Upper), Some(GarmentId::JLight));
        assert_eq!(recommend(&catalog, 0.07, Zone::Lower), Some(GarmentId::Shorts));
    }
}

#[tokio::test]
async fn identical_resubmission_makes_no_second_call() {
    let mut sync =
        PredictionSynchronizer::new(QueuedService::default().feels("COOL"), scenario_catalog());
    let state = ObservationState::default();

    let first = sync.submit(&state, PredictionMode::Comfort).await.unwrap();
    let second = sync.submit(&state, PredictionMode::Comfort).await.unwrap();

    assert_eq!(sync.service().calls(), 1);
    assert_eq!(second.status, SubmitStatus::Unchanged);
    assert_eq!(second.outcome, first.outcome);
}

#[tokio::test]
async fn session_resubmit_without_edits_reuses_prediction() {
    let mut form = FormSession::new(
        QueuedService::default().feels("WARM").feels("WARM"),
        GarmentCatalog::standard().clone(),
        ObservationDefaults::default(),
    );

    let first = form.submit().await.unwrap();
    let second = form.submit().await.unwrap();

    assert_eq!(form.state().sensation, Some(Sensation::Warm));
    assert_eq!(first.status, SubmitStatus::Submitted);
    assert_eq!(second.status, SubmitStatus::Unchanged);
    assert_eq!(second.outcome, first.outcome);
    assert_eq!(form.synchronizer().service().calls(), 1);
    assert!(form.synchronizer().service().payloads()[0].feels.is_none());
}

#[tokio::test]
async fn heart_rate_change_reaches_the_service() {
    let mut sync = PredictionSynchronizer::new(
        QueuedService::default().feels("COOL").feels("WARM"),
        GarmentCatalog::standard().clone(),
    );
    let mut state = ObservationState::default();
    state.heart_rate = 90;
    sync.submit(&state, PredictionMode::Comfort).await.unwrap();

    state.heart_rate = 95;
    let report = sync.submit(&state, PredictionMode::Comfort).await.unwrap();

    assert_eq!(report.status, SubmitStatus::Submitted);
    let payloads = sync.service().payloads();
    assert_eq!(payloads.len(), 2);
    assert_eq!(payloads[0].hr, 90);
    assert_eq!(payloads[1].hr, 95);
}

#[tokio::test]
async fn warm_label_updates_sensation_and_unknown_label_does_not() {
    let mut form = FormSession::new(
        QueuedService::default().feels("WARM").feels("balmy"),
        GarmentCatalog::standard().clone(),
        ObservationDefaults::default(),
    );

    form.submit().await.unwrap();
    assert_eq!(form.state().sensation, Some(Sensation::Warm));

    form.apply(FormEdit::Snow(Intensity::Light));
    form.submit().await.unwrap();
    assert_eq!(form.state().sensation, Some(Sensation::Warm));
}

#[tokio::test]
async fn clothing_mode_replaces_selection_with_nearest_garments() {
    let mut form = FormSession::new(
        QueuedService::default().clothing(0.52, 0.07),
        scenario_catalog(),
        ObservationDefaults {
            garments: vec![GarmentId::JFleece, GarmentId::PThin],
            ..ObservationDefaults::default()
        },
    );
    form.set_mode(PredictionMode::Clothing);

    let report = form.submit().await.unwrap();

    let PredictionOutcome::Clothing(recommendation) = &report.outcome else {
        panic!("expected clothing outcome");
    };
    assert_eq!(recommendation.upper, Some(GarmentId::JLight));
    assert_eq!(recommendation.lower, Some(GarmentId::Shorts));
    assert_eq!(
        form.state().garments,
        BTreeSet::from([GarmentId::JLight, GarmentId::Shorts])
    );
}

#[tokio::test]
async fn network_failure_leaves_committed_state_alone() {
    let mut sync = PredictionSynchronizer::new(
        QueuedService::default().feels("COOL").feels_failure().feels("HOT"),
        GarmentCatalog::standard().clone(),
    );
    let mut state = ObservationState::default();
    let good = sync.submit(&state, PredictionMode::Comfort).await.unwrap();
    let snapshot = sync.tracker().snapshot().cloned();

    state.fatigued = true;
    let err = sync.submit(&state, PredictionMode::Comfort).await.unwrap_err();

    assert!(matches!(
        err,
        TempFeelError::Service(ServiceError::Transport { .. })
    ));
    assert_eq!(sync.last_outcome(), Some(&good.outcome));
    assert_eq!(sync.tracker().snapshot().cloned(), snapshot);
    assert!(sync.should_submit(&state, PredictionMode::Comfort));

    let retried = sync.submit(&state, PredictionMode::Comfort).await.unwrap();
    assert_eq!(retried.status, SubmitStatus::Submitted);
    assert_eq!(sync.service().calls(), 3);
}

#[tokio::test]
async fn edits_after_capture_only_affect_next_submission() {
    let mut sync = PredictionSynchronizer::new(
        QueuedService::default().feels("COOL").feels("COOL"),
        GarmentCatalog::standard().clone(),
    );
    let mut state = ObservationState::default();

    sync.submit(&state, PredictionMode::Comfort).await.unwrap();
    state.temperature = -8.0;
    sync.submit(&state, PredictionMode::Comfort).await.unwrap();

    let payloads = sync.service().payloads();
    assert_eq!(payloads[0].temp, 20.0);
    assert_eq!(payloads[1].temp, -8.0);
}
