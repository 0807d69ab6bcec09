use fitveg_workout::WorkoutId;
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::Date;

#[derive(Debug, Clone, PartialEq)]
pub struct DayLog {
    pub date: Date,
    pub workout: Option<WorkoutId>,
    pub workout_completed: bool,
    pub lunch: Option<u32>,
    pub dinner: Option<u32>,
    pub weight: Option<f64>,
}

impl DayLog {
    pub fn new(date: Date, workout: Option<WorkoutId>) -> Self {
        Self {
            date,
            workout,
            workout_completed: false,
            lunch: None,
            dinner: None,
            weight: None,
        }
    }

    pub fn meal(&self, slot: MealSlot) -> Option<u32> {
        match slot {
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
        }
    }

    pub fn set_meal(&mut self, slot: MealSlot, recipe_id: Option<u32>) {
        match slot {
            MealSlot::Lunch => self.lunch = recipe_id,
            MealSlot::Dinner => self.dinner = recipe_id,
        }
    }

    /// Recipe ids referenced by this day, lunch first
    pub fn recipe_ids(&self) -> impl Iterator<Item = u32> {
        self.lunch.into_iter().chain(self.dinner)
    }
}

#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MealSlot {
    Lunch,
    Dinner,
}

/// Seven consecutive day logs starting on a Monday
#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub start: Date,
    pub days: Vec<DayLog>,
}

impl Week {
    pub fn end(&self) -> Date {
        fitveg_shared::add_days(self.start, 6)
    }
}

/// Parse a body weight in kilograms typed by the user
pub fn parse_weight(input: &str) -> fitveg_shared::Result<f64> {
    match input.trim().parse::<f64>() {
        Ok(weight) if weight.is_finite() && weight > 0.0 => Ok(weight),
        _ => fitveg_shared::user!("Please enter a valid weight"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight("68.5").unwrap(), 68.5);
        assert_eq!(parse_weight(" 70 ").unwrap(), 70.0);

        for input in ["-5", "0", "abc", "", "NaN", "inf", "68.5kg"] {
            assert!(
                matches!(parse_weight(input), Err(fitveg_shared::Error::User(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_meal_slots() {
        let mut log = DayLog::new(date!(2025 - 01 - 06), Some(WorkoutId::A));
        assert_eq!(log.recipe_ids().count(), 0);

        log.set_meal(MealSlot::Dinner, Some(12));
        log.set_meal(MealSlot::Lunch, Some(8));
        assert_eq!(log.meal(MealSlot::Lunch), Some(8));
        assert_eq!(log.recipe_ids().collect::<Vec<_>>(), vec![8, 12]);

        assert_eq!("Dinner".parse::<MealSlot>().unwrap(), MealSlot::Dinner);
        assert!("breakfast".parse::<MealSlot>().is_err());
    }
}
