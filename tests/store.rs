use fitveg_daylog::MealSlot;
use temp_dir::TempDir;
use time::macros::date;

#[tokio::test]
async fn test_day_logs_survive_reopening_the_store() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("fitveg.db").to_string_lossy());
    let today = date!(2025 - 01 - 06);

    {
        let pool = fitveg::create_pool(&url, 1).await?;
        fitveg::migrate(&pool).await?;
        let command = fitveg_daylog::Command::new(fitveg_shared::State::new(pool.clone()));
        command.select_meal(today, MealSlot::Lunch, 8, today).await?;
        command.log_weight(today, "71.3").await?;
        pool.close().await;
    }

    let pool = fitveg::create_pool(&url, 1).await?;
    fitveg::migrate(&pool).await?;
    let state = fitveg_shared::State::new(pool);
    let command = fitveg_daylog::Command::new(state.clone());

    let log = command.get(today).await?.expect("log persisted");
    assert_eq!(log.lunch, Some(8));
    assert_eq!(log.weight, Some(71.3));
    assert_eq!(command.start_date(date!(2030 - 01 - 01)).await?, today);

    let list = fitveg_shopping::Command::new(state).generate(today).await?;
    assert_eq!(list.len(), 6);

    Ok(())
}
