use fitveg_workout::WorkoutId;
use strum::{AsRefStr, Display};
use time::{Date, Weekday};

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    A,
    B,
    Rest,
}

impl Rotation {
    pub fn workout(self) -> Option<WorkoutId> {
        match self {
            Rotation::A => Some(WorkoutId::A),
            Rotation::B => Some(WorkoutId::B),
            Rotation::Rest => None,
        }
    }
}

/// Workout scheduled on `date` for a rotation that began on `start`.
///
/// Mondays, Wednesdays and Fridays train, alternating A/B/A and B/A/B
/// between even and odd weeks counted from `start`. Week numbers use floor
/// division so dates before `start` keep a stable parity (the week just
/// before `start` is week -1, odd).
pub fn rotation(date: Date, start: Date) -> Rotation {
    let even_week = match date.weekday() {
        Weekday::Monday | Weekday::Wednesday | Weekday::Friday => {
            let days_since_start = fitveg_shared::days_between(start, date);
            days_since_start.div_euclid(7).rem_euclid(2) == 0
        }
        _ => return Rotation::Rest,
    };

    match (date.weekday(), even_week) {
        (Weekday::Monday, true) | (Weekday::Wednesday, false) | (Weekday::Friday, true) => {
            Rotation::A
        }
        _ => Rotation::B,
    }
}
