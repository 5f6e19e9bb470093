use {
    assert_matches::assert_matches,
    chrono::NaiveDate,
    hr_zones::{
        FieldEdit, IntervalCommand, IntervalStore,
        data::{FileSource, LimitsSnapshot, SimulatedSource, fetch_limits},
        domain::{IntervalError, ValidationError},
        series::{ChartScales, build_series},
        store::ChangeOrigin,
        utils::FixedClock,
    },
    std::{io::Write, sync::Arc, time::Duration},
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(d(2023, 6, 1)))
}

fn summaries(store: &IntervalStore) -> Vec<(u16, u16, NaiveDate)> {
    store.periods().iter().map(|p| p.summary()).collect()
}

async fn loaded_demo_store() -> IntervalStore {
    let source = SimulatedSource::demo()
        .unwrap()
        .with_delay(Duration::ZERO);
    let periods = fetch_limits(&source).await.unwrap();
    let mut store = IntervalStore::new(clock());
    store.dispatch(IntervalCommand::Load(periods));
    assert!(store.process_pending().is_empty());
    store
}

#[tokio::test]
async fn moving_a_period_past_its_successor_reorders_and_redraws() {
    let mut store = loaded_demo_store().await;

    store.dispatch(IntervalCommand::Edit {
        index: 1,
        edit: FieldEdit::StartDate(d(2023, 5, 10)),
    });
    assert!(store.process_pending().is_empty());

    assert_eq!(
        summaries(&store),
        vec![
            (138, 143, d(2023, 2, 1)),
            (130, 140, d(2023, 5, 5)),
            (120, 127, d(2023, 5, 10)),
        ]
    );
    assert_eq!(store.last_change(), Some(ChangeOrigin::Programmatic));
    assert!(!store.has_errors());

    let series = build_series(store.periods(), store.clock()).unwrap();
    assert_eq!(series.len(), 4);
    let today = series.today_point().unwrap();
    assert_eq!(today.date, d(2023, 6, 1));
    assert_eq!((today.lower_limit, today.upper_limit), (120, 127));

    // Step curve: one vertex per point plus one per step.
    let scales = ChartScales::new(d(2023, 6, 1));
    assert_eq!(series.upper_curve(&scales).len(), 7);
    assert_eq!(series.band(&scales).len(), 3);
}

#[tokio::test]
async fn edit_session_round_trips_through_a_snapshot() {
    let mut store = loaded_demo_store().await;

    store.dispatch(IntervalCommand::Append);
    store.dispatch(IntervalCommand::Edit {
        index: 3,
        edit: FieldEdit::UpperLimit("145".to_string()),
    });
    store.dispatch(IntervalCommand::Remove(0));
    assert!(store.process_pending().is_empty());

    let json = store.snapshot().to_json().unwrap();
    let reloaded = LimitsSnapshot::from_json(&json)
        .unwrap()
        .into_periods()
        .unwrap();

    let mut copy = IntervalStore::new(clock());
    copy.load(reloaded);
    assert_eq!(summaries(&copy), summaries(&store));
    assert_eq!(summaries(&copy)[2], (130, 145, d(2023, 6, 1)));
}

#[tokio::test]
async fn bad_input_is_kept_and_flagged() {
    let mut store = loaded_demo_store().await;

    store
        .edit_field(2, FieldEdit::StartDate(d(2023, 1, 1)))
        .unwrap();
    store
        .edit_field(1, FieldEdit::LowerLimit("abc".to_string()))
        .unwrap();

    // The early date was repaired into first place and is valid there.
    assert_eq!(store.periods()[0].start_date, d(2023, 1, 1));
    assert_eq!(store.field_errors(0).start_date, None);

    // The unparsed limit is kept and blocks Save.
    assert!(store.has_errors());
    assert_eq!(store.periods()[1].lower_limit.raw(), "abc");
    assert_eq!(store.periods()[1].lower(), 138);
    assert_eq!(
        store.field_errors(1).lower_limit,
        Some(ValidationError::NotANumber)
    );
    assert_matches!(
        store.edit_field(9, FieldEdit::UpperLimit("1".into())),
        Err(IntervalError::IndexOutOfRange { index: 9, len: 3 })
    );

    store
        .edit_field(1, FieldEdit::LowerLimit("139".to_string()))
        .unwrap();
    assert!(!store.has_errors());
}

#[tokio::test]
async fn moving_a_period_earlier_leaves_nothing_to_fix() {
    let mut store = loaded_demo_store().await;

    store.dispatch(IntervalCommand::Edit {
        index: 2,
        edit: FieldEdit::StartDate(d(2023, 4, 5)),
    });
    assert!(store.process_pending().is_empty());

    let dates: Vec<NaiveDate> = store.periods().iter().map(|p| p.start_date).collect();
    assert_eq!(dates, vec![d(2023, 2, 1), d(2023, 4, 5), d(2023, 4, 10)]);
    assert!(!store.has_errors());
}

#[tokio::test]
async fn added_period_ignores_unparsed_text() {
    let mut store = loaded_demo_store().await;

    store
        .edit_field(2, FieldEdit::UpperLimit("14x".to_string()))
        .unwrap();
    store.append().unwrap();

    let added = store.periods().last().unwrap();
    assert_eq!(added.upper_limit.raw(), "140");
    assert_eq!(store.field_errors(3).upper_limit, None);
    assert_eq!(store.snapshot().limits[3].upper_limit, "140");
}

#[tokio::test]
async fn snapshot_file_feeds_the_store() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"limits":[
            {{"lowerLimit":"110","upperLimit":"120","startDate":"2023-01-15"}},
            {{"lowerLimit":"115","upperLimit":"125","startDate":"2023-03-01"}}
        ]}}"#
    )
    .unwrap();

    let source = FileSource::new(file.path());
    let periods = fetch_limits(&source).await.unwrap();
    let mut store = IntervalStore::new(clock());
    store.load(periods);

    assert_eq!(
        summaries(&store),
        vec![(110, 120, d(2023, 1, 15)), (115, 125, d(2023, 3, 1))]
    );
}

#[tokio::test]
async fn missing_snapshot_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileSource::new(dir.path().join("nope.json"));
    let err = fetch_limits(&source).await.unwrap_err();
    assert!(format!("{:#}", err).contains("nope.json"));
}
