mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mealplanner_shared::mealplan::SlotId;

/// mealplanner - Weekly meal planning and shopping list
#[derive(Parser)]
#[command(name = "mealplanner")]
#[command(about = "Plan the week's meals and derive the shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// ISO week year (defaults to the current one)
    #[arg(long, global = true)]
    year: Option<i32>,

    /// ISO week number (defaults to the current week)
    #[arg(long, global = true)]
    week: Option<u8>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the meals of the week
    Plan,
    /// Put a meal in one slot, or in several slots as one multi-day meal
    Assign {
        /// Slots such as `wednesday_dinner`
        #[arg(required = true)]
        slots: Vec<SlotId>,

        #[command(flatten)]
        meal: cli::MealArgs,
    },
    /// Clear a slot
    Unassign { slot: SlotId },
    /// Move a meal to another slot, swapping with the meal already there
    Move { from: SlotId, to: SlotId },
    /// Add a meal outside the calendar
    AddExtra {
        #[command(flatten)]
        meal: cli::MealArgs,
    },
    /// Delete an extra meal
    DeleteExtra { id: String },
    /// Add or replace recipes from a JSON file holding an array of recipes
    ImportRecipes { path: String },
    /// Print the shopping list of the week
    List,
    /// Check or uncheck a shopping list entry
    Toggle { key: String },
    /// Uncheck every entry of the week
    ClearChecks,
    /// Add an item to the shopping list by hand
    AddItem {
        #[arg(long)]
        name: String,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        quantity: Option<f64>,

        #[arg(long)]
        unit: Option<String>,
    },
    /// Delete an item added by hand
    DeleteItem { id: String },
    /// List the known units
    Units,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealplanner::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealplanner::observability::init_observability(
        "mealplanner",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    if let Commands::Units = cli.command {
        print!("{}", mealplanner::render::units());
        return Ok(());
    }

    let context = cli::Context::new(config, cli.year, cli.week)?;

    match cli.command {
        Commands::Plan => cli::plan::show(&context).await,
        Commands::Assign { slots, meal } => cli::plan::assign(&context, slots, meal).await,
        Commands::Unassign { slot } => cli::plan::unassign(&context, slot).await,
        Commands::Move { from, to } => cli::plan::swap(&context, from, to).await,
        Commands::AddExtra { meal } => cli::plan::add_extra(&context, meal).await,
        Commands::DeleteExtra { id } => cli::plan::delete_extra(&context, id).await,
        Commands::ImportRecipes { path } => cli::plan::import_recipes(&context, path).await,
        Commands::List => cli::shopping::list(&context).await,
        Commands::Toggle { key } => cli::shopping::toggle(&context, key).await,
        Commands::ClearChecks => cli::shopping::clear_checks(&context).await,
        Commands::AddItem {
            name,
            category,
            quantity,
            unit,
        } => cli::shopping::add_item(&context, name, category, quantity, unit).await,
        Commands::DeleteItem { id } => cli::shopping::delete_item(&context, id).await,
        Commands::Units => Ok(()),
    }
}
