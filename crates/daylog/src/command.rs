use std::ops::Deref;

use fitveg_db::table::{DayLogs, Settings};
use fitveg_shared::{add_days, format_date, monday_of};
use sea_query::{OnConflict, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::Date;

use crate::{DayLog, MealSlot, Query, Week, parse_weight, query::START_DATE_KEY, rotation};

#[derive(Clone)]
pub struct Command {
    query: Query,
}

impl Deref for Command {
    type Target = Query;

    fn deref(&self) -> &Self::Target {
        &self.query
    }
}

impl Command {
    pub fn new(state: fitveg_shared::State) -> Self {
        Self {
            query: Query::new(state),
        }
    }

    /// Rotation start date, recording `today` the first time it is asked for
    pub async fn start_date(&self, today: Date) -> fitveg_shared::Result<Date> {
        if let Some(start) = self.query.start_date().await? {
            return Ok(start);
        }

        let statement = sea_query::Query::insert()
            .into_table(Settings::Table)
            .columns([Settings::Key, Settings::Value])
            .values_panic([START_DATE_KEY.into(), format_date(today).into()])
            .on_conflict(
                OnConflict::column(Settings::Key)
                    .update_column(Settings::Value)
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        tracing::info!(start_date = %format_date(today), "rotation start date recorded");

        Ok(today)
    }

    /// Replace the stored log for `log.date` with `log`
    pub async fn upsert(&self, log: &DayLog) -> fitveg_shared::Result<()> {
        let statement = sea_query::Query::insert()
            .into_table(DayLogs::Table)
            .columns([
                DayLogs::Date,
                DayLogs::Workout,
                DayLogs::WorkoutCompleted,
                DayLogs::Lunch,
                DayLogs::Dinner,
                DayLogs::Weight,
            ])
            .values_panic([
                format_date(log.date).into(),
                log.workout.map(|workout| workout.to_string()).into(),
                log.workout_completed.into(),
                log.lunch.map(i64::from).into(),
                log.dinner.map(i64::from).into(),
                log.weight.into(),
            ])
            .on_conflict(
                OnConflict::column(DayLogs::Date)
                    .update_columns([
                        DayLogs::Workout,
                        DayLogs::WorkoutCompleted,
                        DayLogs::Lunch,
                        DayLogs::Dinner,
                        DayLogs::Weight,
                    ])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        tracing::debug!(date = %format_date(log.date), "day log saved");

        Ok(())
    }

    /// Stored log for `date`, created from the rotation on first access
    pub async fn get_or_create(&self, date: Date, today: Date) -> fitveg_shared::Result<DayLog> {
        if let Some(log) = self.get(date).await? {
            return Ok(log);
        }

        let start = self.start_date(today).await?;
        let log = DayLog::new(date, rotation(date, start).workout());
        self.upsert(&log).await?;

        tracing::info!(
            date = %format_date(date),
            workout = log.workout.map_or("rest", |w| w.into()),
            "day log created"
        );

        Ok(log)
    }

    /// Monday to Sunday logs of the week containing `date`
    pub async fn week(&self, date: Date, today: Date) -> fitveg_shared::Result<Week> {
        let start = monday_of(date);
        let mut days = Vec::with_capacity(7);
        for offset in 0..7 {
            days.push(self.get_or_create(add_days(start, offset), today).await?);
        }

        Ok(Week { start, days })
    }

    pub async fn toggle_workout(&self, date: Date, today: Date) -> fitveg_shared::Result<DayLog> {
        let mut log = self.get_or_create(date, today).await?;
        let Some(workout) = log.workout else {
            fitveg_shared::user!("{} is a rest day", format_date(date));
        };

        log.workout_completed = !log.workout_completed;
        self.upsert(&log).await?;

        tracing::info!(
            date = %format_date(date),
            workout = %workout,
            completed = log.workout_completed,
            "workout completion toggled"
        );

        Ok(log)
    }

    pub async fn select_meal(
        &self,
        date: Date,
        slot: MealSlot,
        recipe_id: u32,
        today: Date,
    ) -> fitveg_shared::Result<DayLog> {
        let recipe = fitveg_recipe::load(recipe_id)?;

        let mut log = self.get_or_create(date, today).await?;
        log.set_meal(slot, Some(recipe.id));
        self.upsert(&log).await?;

        tracing::info!(date = %format_date(date), %slot, recipe = recipe.name, "meal selected");

        Ok(log)
    }

    /// Record a weight typed by the user. Invalid input leaves the store untouched.
    pub async fn log_weight(&self, date: Date, input: &str) -> fitveg_shared::Result<DayLog> {
        let weight = parse_weight(input)?;

        let mut log = match self.get(date).await? {
            Some(log) => log,
            None => DayLog::new(date, None),
        };
        log.weight = Some(weight);
        self.upsert(&log).await?;

        tracing::info!(date = %format_date(date), weight, "weight logged");

        Ok(log)
    }
}
