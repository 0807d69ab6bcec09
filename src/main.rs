use anyhow::Result;
use clap::{Parser, Subcommand};
use fitveg_daylog::MealSlot;
use fitveg_recipe::RecipeCategory;

mod cli;

/// fitveg - workout rotation and vegetarian meal companion
#[derive(Parser)]
#[command(name = "fitveg")]
#[command(about = "Track a three-day workout rotation, meals, weight and groceries", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or upgrade the store
    Migrate,
    /// Weekly dashboard, Monday to Sunday
    Week {
        /// Any date of the week to show (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Weeks away from the selected one, negative for past weeks
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i64,
    },
    /// Show a day log, creating it on first access
    Day {
        /// YYYY-MM-DD (defaults to today)
        date: Option<String>,
    },
    /// Toggle workout completion
    Done {
        /// YYYY-MM-DD (defaults to today)
        date: Option<String>,
    },
    /// Pick the lunch or dinner recipe of a day
    Meal {
        date: String,
        slot: MealSlot,
        recipe_id: u32,
    },
    /// Log body weight in kg
    Weight {
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Completed workouts and weight history since the start date
    Progress,
    /// List recipes
    Recipes {
        #[arg(long)]
        category: Option<RecipeCategory>,
    },
    /// Show a recipe
    Recipe { id: u32 },
    /// List workout templates
    Workouts,
    /// Workout templates and rest timer
    Workout {
        #[command(subcommand)]
        command: WorkoutCommands,
    },
    /// Shopping list for the next seven days
    Shopping {
        #[command(subcommand)]
        command: ShoppingCommands,
    },
}

#[derive(Subcommand)]
enum WorkoutCommands {
    /// Show the exercises of a template
    Show { id: String },
    /// Count down a rest period
    Timer {
        seconds: u32,

        #[arg(long, default_value = "Rest")]
        exercise: String,
    },
}

#[derive(Subcommand)]
enum ShoppingCommands {
    /// Show the stored list grouped by category
    Show,
    /// Rebuild the list from meals planned today and the next six days
    Generate,
    /// Check or uncheck an item by position
    Toggle { index: usize },
    /// Empty the list
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = fitveg::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    fitveg::observability::init_observability(
        "fitveg",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let result = match cli.command {
        Commands::Migrate => cli::migrate(config).await,
        Commands::Week { date, offset } => cli::day::week(config, date, offset).await,
        Commands::Day { date } => cli::day::show(config, date).await,
        Commands::Done { date } => cli::day::done(config, date).await,
        Commands::Meal {
            date,
            slot,
            recipe_id,
        } => cli::day::meal(config, date, slot, recipe_id).await,
        Commands::Weight { value, date } => cli::day::weight(config, value, date).await,
        Commands::Progress => cli::day::progress(config).await,
        Commands::Recipes { category } => cli::catalog::recipes(category),
        Commands::Recipe { id } => cli::catalog::recipe(id),
        Commands::Workouts => cli::catalog::workouts(),
        Commands::Workout { command } => match command {
            WorkoutCommands::Show { id } => cli::catalog::workout(&id),
            WorkoutCommands::Timer { seconds, exercise } => {
                cli::catalog::timer(seconds, exercise).await
            }
        },
        Commands::Shopping { command } => match command {
            ShoppingCommands::Show => cli::shopping::show(config).await,
            ShoppingCommands::Generate => cli::shopping::generate(config).await,
            ShoppingCommands::Toggle { index } => cli::shopping::toggle(config, index).await,
            ShoppingCommands::Clear => cli::shopping::clear(config).await,
        },
    };

    let Err(err) = result else {
        return Ok(());
    };

    match err.downcast_ref::<fitveg_shared::Error>() {
        Some(app_err) if app_err.is_user_facing() => {
            tracing::error!("{app_err}");
            std::process::exit(1);
        }
        _ => Err(err),
    }
}
