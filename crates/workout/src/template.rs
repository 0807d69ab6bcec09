use strum::{AsRefStr, Display, EnumString, IntoStaticStr, VariantArray};

#[derive(
    EnumString, Display, VariantArray, AsRefStr, IntoStaticStr, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum WorkoutId {
    A,
    B,
}

#[derive(Debug, PartialEq)]
pub struct Exercise {
    pub name: &'static str,
    pub sets: u8,
    /// Free-form: a rep range, a hold duration or "to failure"
    pub reps: &'static str,
    /// 0 when the exercise has no timed rest
    pub rest_seconds: u32,
}

#[derive(Debug, PartialEq)]
pub struct WorkoutTemplate {
    pub id: WorkoutId,
    pub name: &'static str,
    pub exercises: &'static [Exercise],
}

static WORKOUT_A: WorkoutTemplate = WorkoutTemplate {
    id: WorkoutId::A,
    name: "Workout A",
    exercises: &[
        Exercise {
            name: "Goblet Squats",
            sets: 3,
            reps: "8-10",
            rest_seconds: 90,
        },
        Exercise {
            name: "Push-ups",
            sets: 3,
            reps: "to failure",
            rest_seconds: 60,
        },
        Exercise {
            name: "Dumbbell Rows (per arm)",
            sets: 3,
            reps: "8-10",
            rest_seconds: 60,
        },
        Exercise {
            name: "Plank",
            sets: 3,
            reps: "30-60s hold",
            rest_seconds: 60,
        },
        Exercise {
            name: "Cardio Finisher",
            sets: 1,
            reps: "10 min jogging/cycling",
            rest_seconds: 0,
        },
    ],
};

static WORKOUT_B: WorkoutTemplate = WorkoutTemplate {
    id: WorkoutId::B,
    name: "Workout B",
    exercises: &[
        Exercise {
            name: "Romanian Deadlifts",
            sets: 3,
            reps: "10-12",
            rest_seconds: 90,
        },
        Exercise {
            name: "Dumbbell Overhead Press",
            sets: 3,
            reps: "8-10",
            rest_seconds: 60,
        },
        Exercise {
            name: "Bodyweight Lunges (per leg)",
            sets: 3,
            reps: "10",
            rest_seconds: 60,
        },
        Exercise {
            name: "Lat Pulldowns",
            sets: 3,
            reps: "10-12",
            rest_seconds: 60,
        },
        Exercise {
            name: "Cardio Finisher",
            sets: 1,
            reps: "15 min walk/jump rope",
            rest_seconds: 0,
        },
    ],
};

impl WorkoutId {
    pub fn template(self) -> &'static WorkoutTemplate {
        match self {
            WorkoutId::A => &WORKOUT_A,
            WorkoutId::B => &WORKOUT_B,
        }
    }
}

pub fn all() -> [&'static WorkoutTemplate; 2] {
    [&WORKOUT_A, &WORKOUT_B]
}

/// Resolve a template from a user supplied identifier such as `a` or `B`
pub fn find(id: &str) -> fitveg_shared::Result<&'static WorkoutTemplate> {
    match id.trim().parse::<WorkoutId>() {
        Ok(id) => Ok(id.template()),
        Err(_) => fitveg_shared::not_found!("workout '{}' not found", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_match_their_ids() {
        for id in WorkoutId::VARIANTS {
            assert_eq!(id.template().id, *id);
        }
        assert_eq!(WorkoutId::A.template().name, "Workout A");
        assert_eq!(WorkoutId::B.template().exercises.len(), 5);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find("a").unwrap().id, WorkoutId::A);
        assert_eq!(find(" B ").unwrap().id, WorkoutId::B);
    }

    #[test]
    fn test_find_unknown_is_not_found() {
        for id in ["C", "", "Rest"] {
            assert!(matches!(
                find(id),
                Err(fitveg_shared::Error::NotFound(_))
            ));
        }
    }

    #[test]
    fn test_finishers_have_no_timed_rest() {
        for template in all() {
            let last = template.exercises.last().unwrap();
            assert_eq!(last.name, "Cardio Finisher");
            assert_eq!(last.sets, 1);
            assert_eq!(last.rest_seconds, 0);
        }
    }
}
