use fitveg_daylog::{Command, DayLog};
use fitveg_workout::WorkoutId;
use temp_dir::TempDir;
use time::macros::date;

mod helpers;

#[tokio::test]
async fn test_invalid_weight_leaves_store_untouched() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state);
    let today = date!(2025 - 01 - 06);

    let before = command.get_or_create(today, today).await?;

    for input in ["-5", "abc", "0", ""] {
        let err = command.log_weight(today, input).await.unwrap_err();
        assert!(matches!(err, fitveg_shared::Error::User(_)), "{input:?}");
    }

    assert_eq!(command.get(today).await?, Some(before));
    assert!(command.get(date!(2025 - 01 - 07)).await?.is_none());
    assert!(command.log_weight(date!(2025 - 01 - 07), "-5").await.is_err());
    assert!(command.get(date!(2025 - 01 - 07)).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_weight_on_new_date_sets_only_weight() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state);
    let monday = date!(2025 - 01 - 06);

    let log = command.log_weight(monday, "68.5").await?;

    let expected = DayLog {
        weight: Some(68.5),
        ..DayLog::new(monday, None)
    };
    assert_eq!(log, expected);
    assert_eq!(command.get(monday).await?, Some(expected.clone()));

    // the weight-only record is an existing log from now on
    assert_eq!(command.get_or_create(monday, monday).await?, expected);

    Ok(())
}

#[tokio::test]
async fn test_weight_on_existing_log_keeps_other_fields() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state);
    let monday = date!(2025 - 01 - 06);

    command.toggle_workout(monday, monday).await?;
    command.log_weight(monday, "70").await?;
    let log = command.log_weight(monday, "69.8").await?;

    assert_eq!(log.workout, Some(WorkoutId::A));
    assert!(log.workout_completed);
    assert_eq!(log.weight, Some(69.8));

    Ok(())
}

#[tokio::test]
async fn test_progress() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state);
    let start = date!(2025 - 01 - 06);

    command.toggle_workout(start, start).await?;
    command.toggle_workout(date!(2025 - 01 - 08), start).await?;
    command.log_weight(start, "72.4").await?;
    command.log_weight(date!(2025 - 01 - 09), "71.9").await?;

    let progress = command.progress(date!(2025 - 01 - 10)).await?;
    assert_eq!(progress.start_date, start);
    assert_eq!(progress.total_days, 5);
    assert_eq!(progress.workouts_completed, 2);
    assert_eq!(progress.last_weight, Some(71.9));
    assert_eq!(progress.weight_history.len(), 2);

    Ok(())
}
