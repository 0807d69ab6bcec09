use std::time::Duration;

use anyhow::Result;
use fitveg_recipe::RecipeCategory;
use fitveg_workout::RestTimer;

pub fn recipes(category: Option<RecipeCategory>) -> Result<()> {
    let recipes = fitveg_recipe::all()
        .iter()
        .filter(|recipe| category.is_none_or(|category| recipe.category == category));

    for recipe in recipes {
        println!(
            "{:>2}  {:<24} {:<10} {}",
            recipe.id, recipe.name, recipe.category, recipe.protein_source
        );
    }

    Ok(())
}

pub fn recipe(id: u32) -> Result<()> {
    let recipe = fitveg_recipe::load(id)?;

    println!("{} ({}, {})", recipe.name, recipe.category, recipe.protein_source);
    println!();
    for ingredient in recipe.ingredients {
        println!("  - {ingredient}");
    }
    println!();
    for (idx, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {step}", idx + 1);
    }

    Ok(())
}

pub fn workouts() -> Result<()> {
    for template in fitveg_workout::all() {
        let sets: u32 = template.exercises.iter().map(|e| u32::from(e.sets)).sum();
        println!(
            "{}  {:<10} {} exercises, {} sets",
            template.id,
            template.name,
            template.exercises.len(),
            sets
        );
    }

    Ok(())
}

pub fn workout(id: &str) -> Result<()> {
    let template = fitveg_workout::find(id)?;

    println!("{}", template.name);
    for (idx, exercise) in template.exercises.iter().enumerate() {
        let rest = match exercise.rest_seconds {
            0 => "-".to_owned(),
            seconds => format!("{seconds}s rest"),
        };
        println!(
            "  {}. {:<28} {} x {:<22} {}",
            idx + 1,
            exercise.name,
            exercise.sets,
            exercise.reps,
            rest
        );
    }

    Ok(())
}

#[tracing::instrument]
pub async fn timer(seconds: u32, exercise: String) -> Result<()> {
    let mut timer = RestTimer::default();
    timer.start(seconds, exercise);

    if !timer.is_running() {
        println!("Nothing to count down");
        return Ok(());
    }

    let mut interval = tokio::time::interval(Duration::from_secs(1));
    // first tick completes immediately
    interval.tick().await;

    println!("{} {}", timer.exercise(), timer.display());
    loop {
        interval.tick().await;
        let finished = timer.tick();
        println!("{} {}", timer.exercise(), timer.display());
        if finished {
            break;
        }
    }

    println!("Rest over, next set!");

    Ok(())
}
