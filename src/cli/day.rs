use anyhow::Result;
use fitveg_daylog::{Command, DayLog, MealSlot};
use fitveg_shared::{add_weeks, day_name, format_date, month_day, parse_date, today};
use time::Date;

fn date_or_today(date: Option<String>) -> fitveg_shared::Result<Date> {
    match date {
        Some(date) => parse_date(&date),
        None => Ok(today()),
    }
}

fn recipe_name(id: Option<u32>) -> &'static str {
    match id.and_then(fitveg_recipe::find) {
        Some(recipe) => recipe.name,
        None => "-",
    }
}

fn workout_label(log: &DayLog) -> String {
    match log.workout {
        Some(workout) => {
            let mark = if log.workout_completed { "x" } else { " " };
            format!("[{mark}] {}", workout.template().name)
        }
        None => "Rest".to_owned(),
    }
}

fn print_day(log: &DayLog) {
    let weight = log
        .weight
        .map(|weight| format!("{weight:.1} kg"))
        .unwrap_or_else(|| "-".to_owned());

    println!(
        "{} {:<6} {:<14} lunch: {:<22} dinner: {:<22} weight: {}",
        day_name(log.date),
        month_day(log.date),
        workout_label(log),
        recipe_name(log.lunch),
        recipe_name(log.dinner),
        weight
    );
}

#[tracing::instrument(skip(config))]
pub async fn week(config: fitveg::Config, date: Option<String>, offset: i64) -> Result<()> {
    let command = Command::new(super::open(&config).await?);
    let today = today();
    let date = add_weeks(date_or_today(date)?, offset)?;

    let week = command.week(date, today).await?;

    println!(
        "Week of {} to {}",
        month_day(week.start),
        month_day(week.end())
    );
    for log in &week.days {
        print_day(log);
    }

    let planned = week.days.iter().filter(|log| log.workout.is_some()).count();
    let completed = week
        .days
        .iter()
        .filter(|log| log.workout.is_some() && log.workout_completed)
        .count();
    println!("Workouts: {completed}/{planned}");

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn show(config: fitveg::Config, date: Option<String>) -> Result<()> {
    let command = Command::new(super::open(&config).await?);
    let date = date_or_today(date)?;

    let log = command.get_or_create(date, today()).await?;

    println!("{} {}", day_name(date), format_date(date));
    print_day(&log);

    if let Some(workout) = log.workout {
        println!();
        for exercise in workout.template().exercises {
            println!("  {} {} x {}", exercise.name, exercise.sets, exercise.reps);
        }
    }

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn done(config: fitveg::Config, date: Option<String>) -> Result<()> {
    let command = Command::new(super::open(&config).await?);
    let date = date_or_today(date)?;

    let log = command.toggle_workout(date, today()).await?;
    print_day(&log);

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn meal(config: fitveg::Config, date: String, slot: MealSlot, recipe_id: u32) -> Result<()> {
    let command = Command::new(super::open(&config).await?);
    let date = parse_date(&date)?;

    let log = command.select_meal(date, slot, recipe_id, today()).await?;
    print_day(&log);

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn weight(config: fitveg::Config, value: String, date: Option<String>) -> Result<()> {
    let command = Command::new(super::open(&config).await?);
    let date = date_or_today(date)?;

    let log = command.log_weight(date, &value).await?;
    print_day(&log);

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn progress(config: fitveg::Config) -> Result<()> {
    let command = Command::new(super::open(&config).await?);

    let progress = command.progress(today()).await?;

    println!("Started {}", format_date(progress.start_date));
    println!("Days: {}", progress.total_days);
    println!("Workouts completed: {}", progress.workouts_completed);
    match progress.last_weight {
        Some(weight) => println!("Current weight: {weight:.1} kg"),
        None => println!("Current weight: -"),
    }

    if !progress.weight_history.is_empty() {
        println!();
        for (date, weight) in &progress.weight_history {
            println!("  {} {weight:.1} kg", format_date(*date));
        }
    }

    Ok(())
}
