//! End-to-end behavior of the dynamic select/project operations, driven
//! through a recording fake executor.

mod common;

use common::{FailingExecutor, FakeExecutor, trail_rows};
use trailstore::{store, ComparisonOp, FilterCondition, StoreError};

const ALL_COLUMNS: &str =
    "trail_id, region_id, trail_name, length_km, sport, terrain_type, start_loc, end_loc";

#[tokio::test]
async fn empty_filter_selects_every_row() {
    let exec = FakeExecutor::returning(trail_rows());

    let result = store::select_trails(&exec, &[]).await.unwrap();

    assert_eq!(result, trail_rows());
    let calls = exec.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].sql, format!("SELECT {ALL_COLUMNS} FROM trail"));
    assert_eq!(calls[0].params, 0);
}

#[tokio::test]
async fn unknown_filter_column_never_reaches_the_executor() {
    let exec = FakeExecutor::empty();

    let err = store::select_trails(
        &exec,
        &[FilterCondition::new("Elevation", ComparisonOp::Gt, 100i64)],
    )
    .await
    .unwrap_err();

    assert!(matches!(err, StoreError::UnknownColumn(name) if name == "Elevation"));
    assert_eq!(exec.call_count(), 0);
}

#[tokio::test]
async fn unknown_projection_column_never_reaches_the_executor() {
    let exec = FakeExecutor::empty();

    let err = store::project_trails(&exec, &["Sport".into(), "Difficulty".into()])
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::UnknownColumn(_)));
    assert_eq!(exec.call_count(), 0);
}

#[tokio::test]
async fn type_mismatch_never_reaches_the_executor() {
    let exec = FakeExecutor::empty();

    let err = store::select_trails(
        &exec,
        &[FilterCondition::new("length_km", ComparisonOp::Eq, "soft")],
    )
    .await
    .unwrap_err();

    assert!(matches!(err, StoreError::TypeMismatch { .. }));
    assert_eq!(exec.call_count(), 0);
}

#[tokio::test]
async fn or_filter_builds_one_flat_parenthesized_chain() {
    let exec = FakeExecutor::returning(trail_rows());

    store::select_trails(
        &exec,
        &[
            FilterCondition::new("Sport", ComparisonOp::Eq, "hiking").or(),
            FilterCondition::new("TerrainType", ComparisonOp::Eq, "rocky"),
        ],
    )
    .await
    .unwrap();

    let calls = exec.calls();
    assert_eq!(
        calls[0].sql,
        format!("SELECT {ALL_COLUMNS} FROM trail WHERE (sport = $1) OR (terrain_type = $2)")
    );
    assert_eq!(calls[0].params, 2);
}

/// Mixed AND/OR chains carry no grouping parentheses, so they evaluate the
/// way SQL associates them: `(a AND b) OR c`. The two possible groupings
/// produce different row sets over the sample dataset, and the emitted SQL
/// pins down which one callers get.
#[tokio::test]
async fn mixed_connectors_evaluate_left_to_right() {
    // sport = 'hiking' AND terrain_type = 'rocky' OR length_km > 10
    let a = |sport: &str| sport == "hiking";
    let b = |terrain: &str| terrain == "rocky";
    let c = |length: i64| length > 10;

    let dataset = [
        ("hiking", "rocky", 3i64),
        ("hiking", "forest", 5),
        ("biking", "rocky", 12),
    ];

    let left_to_right: Vec<_> = dataset
        .iter()
        .filter(|&&(s, t, l)| (a(s) && b(t)) || c(l))
        .collect();
    let algebraic: Vec<_> = dataset
        .iter()
        .filter(|&&(s, t, l)| a(s) && (b(t) || c(l)))
        .collect();

    // The groupings genuinely disagree on this dataset.
    assert_ne!(left_to_right, algebraic);
    // Flat chaining matches rows 1 and 3.
    assert_eq!(left_to_right.len(), 2);

    let exec = FakeExecutor::returning(trail_rows());
    store::select_trails(
        &exec,
        &[
            FilterCondition::new("sport", ComparisonOp::Eq, "hiking").and(),
            FilterCondition::new("terrain_type", ComparisonOp::Eq, "rocky").or(),
            FilterCondition::new("length_km", ComparisonOp::Gt, 10i64),
        ],
    )
    .await
    .unwrap();

    let calls = exec.calls();
    assert_eq!(
        calls[0].sql,
        format!(
            "SELECT {ALL_COLUMNS} FROM trail \
             WHERE (sport = $1) AND (terrain_type = $2) OR (length_km > $3)"
        )
    );
}

#[tokio::test]
async fn missing_connector_is_rejected_before_submission() {
    let exec = FakeExecutor::empty();

    let err = store::select_trails(
        &exec,
        &[
            FilterCondition::new("sport", ComparisonOp::Eq, "hiking"),
            FilterCondition::new("terrain_type", ComparisonOp::Eq, "rocky"),
        ],
    )
    .await
    .unwrap_err();

    assert!(matches!(err, StoreError::MissingConnector(0)));
    assert_eq!(exec.call_count(), 0);
}

#[tokio::test]
async fn projection_selects_exactly_the_requested_columns() {
    let exec = FakeExecutor::returning(trail_rows());

    store::project_trails(&exec, &["Sport".into(), "TrailName".into()])
        .await
        .unwrap();

    let calls = exec.calls();
    assert_eq!(calls[0].sql, "SELECT sport, trail_name FROM trail");
    assert_eq!(calls[0].params, 0);
}

#[tokio::test]
async fn empty_projection_substitutes_the_full_column_set() {
    let exec = FakeExecutor::returning(trail_rows());

    store::project_trails(&exec, &[]).await.unwrap();

    assert_eq!(
        exec.calls()[0].sql,
        format!("SELECT {ALL_COLUMNS} FROM trail")
    );
}

#[tokio::test]
async fn identical_calls_are_idempotent() {
    let exec = FakeExecutor::returning(trail_rows());
    let conditions = [
        FilterCondition::new("sport", ComparisonOp::Eq, "hiking").or(),
        FilterCondition::new("terrain_type", ComparisonOp::Eq, "rocky"),
    ];

    let first = store::select_trails(&exec, &conditions).await.unwrap();
    let second = store::select_trails(&exec, &conditions).await.unwrap();

    assert_eq!(first, second);
    let calls = exec.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}

#[tokio::test]
async fn executor_failure_propagates_without_poisoning_later_calls() {
    let failing = FailingExecutor;
    let err = store::select_trails(&failing, &[]).await.unwrap_err();
    assert!(err.is_data_access());
    assert!(matches!(err, StoreError::Connection(_)));

    // An independent call on a healthy executor is unaffected.
    let healthy = FakeExecutor::returning(trail_rows());
    let result = store::select_trails(&healthy, &[]).await.unwrap();
    assert_eq!(result.len(), 3);
}
