use std::ops::Deref;

use fitveg_db::table::{DayLogs, Settings};
use fitveg_shared::{format_date, parse_date};
use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use time::Date;

use crate::DayLog;

pub(crate) const START_DATE_KEY: &str = "start_date";

#[derive(Clone)]
pub struct Query {
    state: fitveg_shared::State,
}

impl Deref for Query {
    type Target = fitveg_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

#[derive(FromRow)]
pub(crate) struct DayLogRow {
    pub date: String,
    pub workout: Option<String>,
    pub workout_completed: bool,
    pub lunch: Option<i64>,
    pub dinner: Option<i64>,
    pub weight: Option<f64>,
}

impl DayLogRow {
    /// `None` when the stored row cannot be understood; such rows read as absent.
    fn decode(self) -> Option<DayLog> {
        let date = parse_date(&self.date).ok()?;
        let workout = match self.workout {
            Some(workout) => Some(workout.parse().ok()?),
            None => None,
        };
        let lunch = self.lunch.map(u32::try_from).transpose().ok()?;
        let dinner = self.dinner.map(u32::try_from).transpose().ok()?;
        let weight = match self.weight {
            Some(weight) if !weight.is_finite() || weight <= 0.0 => return None,
            weight => weight,
        };

        Some(DayLog {
            date,
            workout,
            workout_completed: self.workout_completed,
            lunch,
            dinner,
            weight,
        })
    }
}

fn select_day_logs() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            DayLogs::Date,
            DayLogs::Workout,
            DayLogs::WorkoutCompleted,
            DayLogs::Lunch,
            DayLogs::Dinner,
            DayLogs::Weight,
        ])
        .from(DayLogs::Table)
        .to_owned()
}

fn decode_rows(rows: Vec<DayLogRow>) -> Vec<DayLog> {
    rows.into_iter()
        .filter_map(|row| {
            let key = row.date.to_owned();
            let log = row.decode();
            if log.is_none() {
                tracing::warn!(date = %key, "ignoring malformed day log");
            }
            log
        })
        .collect()
}

impl Query {
    pub fn new(state: fitveg_shared::State) -> Self {
        Self { state }
    }

    /// Stored log for `date`, never creates one
    pub async fn get(&self, date: Date) -> fitveg_shared::Result<Option<DayLog>> {
        let statement = select_day_logs()
            .and_where(Expr::col(DayLogs::Date).eq(format_date(date)))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, DayLogRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        tracing::debug!(date = %format_date(date), found = row.is_some(), "day log read");

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(decode_rows(vec![row]).pop())
    }

    /// Every stored log, oldest first
    pub async fn all(&self) -> fitveg_shared::Result<Vec<DayLog>> {
        let statement = select_day_logs()
            .order_by(DayLogs::Date, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, DayLogRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(decode_rows(rows))
    }

    /// Stored rotation start, `None` before first run or when unreadable
    pub async fn start_date(&self) -> fitveg_shared::Result<Option<Date>> {
        let statement = sea_query::Query::select()
            .column(Settings::Value)
            .from(Settings::Table)
            .and_where(Expr::col(Settings::Key).eq(START_DATE_KEY))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let value = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        let Some((value,)) = value else {
            return Ok(None);
        };

        match parse_date(&value) {
            Ok(date) => Ok(Some(date)),
            Err(_) => {
                tracing::warn!(value, "ignoring malformed start date");
                Ok(None)
            }
        }
    }
}
