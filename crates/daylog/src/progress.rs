use time::Date;

use crate::{Command, DayLog};

const WEIGHT_HISTORY_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub start_date: Date,
    /// Days since the start date, counting both ends
    pub total_days: i64,
    pub workouts_completed: usize,
    pub last_weight: Option<f64>,
    /// Most recent weighed days, newest first
    pub weight_history: Vec<(Date, f64)>,
}

impl Progress {
    pub fn compute(start_date: Date, today: Date, logs: &[DayLog]) -> Self {
        let mut weight_history = logs
            .iter()
            .filter_map(|log| log.weight.map(|weight| (log.date, weight)))
            .collect::<Vec<_>>();
        weight_history.sort_by(|a, b| b.0.cmp(&a.0));
        weight_history.truncate(WEIGHT_HISTORY_LEN);

        Self {
            start_date,
            total_days: fitveg_shared::days_between(start_date, today) + 1,
            workouts_completed: logs.iter().filter(|log| log.workout_completed).count(),
            last_weight: weight_history.first().map(|(_, weight)| *weight),
            weight_history,
        }
    }
}

impl Command {
    pub async fn progress(&self, today: Date) -> fitveg_shared::Result<Progress> {
        let start_date = self.start_date(today).await?;
        let logs = self.all().await?;

        Ok(Progress::compute(start_date, today, &logs))
    }
}
