use std::collections::HashSet;

use crate::WorkoutTemplate;

/// Checked sets of one workout session, keyed by (exercise, set) index.
/// Lives for the session only and is never persisted.
#[derive(Debug, Default, Clone)]
pub struct SetTracker {
    checked: HashSet<(usize, u8)>,
}

impl SetTracker {
    pub fn toggle(&mut self, exercise: usize, set: u8) -> bool {
        let key = (exercise, set);
        if self.checked.remove(&key) {
            return false;
        }

        self.checked.insert(key);
        true
    }

    pub fn is_checked(&self, exercise: usize, set: u8) -> bool {
        self.checked.contains(&(exercise, set))
    }

    pub fn completed(&self) -> usize {
        self.checked.len()
    }

    pub fn is_complete(&self, template: &WorkoutTemplate) -> bool {
        template
            .exercises
            .iter()
            .enumerate()
            .all(|(idx, exercise)| (0..exercise.sets).all(|set| self.is_checked(idx, set)))
    }
}

/// Rest countdown between sets, advanced by one-second ticks
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RestTimer {
    remaining: u32,
    running: bool,
    exercise: String,
}

impl RestTimer {
    /// Restart the countdown. Zero seconds leaves the timer untouched.
    pub fn start(&mut self, seconds: u32, exercise: impl Into<String>) {
        if seconds == 0 {
            return;
        }

        self.remaining = seconds;
        self.exercise = exercise.into();
        self.running = true;

        tracing::debug!(seconds, exercise = %self.exercise, "rest timer started");
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        if self.remaining > 0 {
            self.running = true;
        }
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.resume();
        }
    }

    /// Advance by one second. Returns true when this tick finished the countdown.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.remaining == 0 {
            return false;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.running = false;
            tracing::debug!(exercise = %self.exercise, "rest timer finished");
            return true;
        }

        false
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn exercise(&self) -> &str {
        &self.exercise
    }

    /// `m:ss`
    pub fn display(&self) -> String {
        format!("{}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WorkoutId;

    #[test]
    fn test_set_toggle_twice_unchecks() {
        let mut tracker = SetTracker::default();
        assert!(tracker.toggle(0, 1));
        assert!(tracker.is_checked(0, 1));
        assert!(!tracker.toggle(0, 1));
        assert!(!tracker.is_checked(0, 1));
        assert_eq!(tracker.completed(), 0);
    }

    #[test]
    fn test_session_complete_when_every_set_checked() {
        let template = WorkoutId::A.template();
        let mut tracker = SetTracker::default();

        for (idx, exercise) in template.exercises.iter().enumerate() {
            for set in 0..exercise.sets {
                assert!(!tracker.is_complete(template));
                tracker.toggle(idx, set);
            }
        }

        assert!(tracker.is_complete(template));
        assert_eq!(tracker.completed(), 13);
    }

    #[test]
    fn test_timer_counts_down_and_stops_at_zero() {
        let mut timer = RestTimer::default();
        timer.start(3, "Plank");
        assert_eq!(timer.display(), "0:03");

        assert!(!timer.tick());
        assert!(!timer.tick());
        assert!(timer.tick());
        assert_eq!(timer.remaining(), 0);
        assert!(!timer.is_running());

        assert!(!timer.tick());
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn test_timer_pause_and_resume() {
        let mut timer = RestTimer::default();
        timer.start(90, "Goblet Squats");
        timer.tick();
        timer.pause();
        timer.tick();
        timer.tick();
        assert_eq!(timer.remaining(), 89);
        assert_eq!(timer.display(), "1:29");

        timer.toggle();
        assert!(timer.is_running());
        timer.tick();
        assert_eq!(timer.remaining(), 88);
    }

    #[test]
    fn test_timer_ignores_zero_rest() {
        let mut timer = RestTimer::default();
        timer.start(0, "Cardio Finisher");
        assert!(!timer.is_running());
        assert_eq!(timer.exercise(), "");

        timer.resume();
        assert!(!timer.is_running());
    }
}
