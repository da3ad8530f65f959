mod commands;
mod context;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use bodyfolio_core::metrics::MetricType;
use chrono::NaiveDate;

#[derive(Parser)]
#[command(name = "bodyfolio", version, about = "Personal body-metrics tracker")]
struct Cli {
    /// Data directory (defaults to the platform-local app data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record a measurement (at least one reading is required)
    Log {
        /// Measurement date, defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Weight in kg
        #[arg(long)]
        weight: Option<f64>,
        /// Muscle mass in kg
        #[arg(long)]
        muscle_mass: Option<f64>,
        /// Fat mass in kg
        #[arg(long)]
        fat_mass: Option<f64>,
        /// Body mass index
        #[arg(long)]
        bmi: Option<f64>,
        /// Fat percentage
        #[arg(long)]
        fat_percentage: Option<f64>,
    },
    /// List recorded measurements, newest first
    Metrics {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Manage goals and their trajectories
    Goal {
        #[command(subcommand)]
        command: GoalCommand,
    },
    /// Show or update profile settings
    Profile {
        /// Height in cm, used for BMI projections
        #[arg(long)]
        height_cm: Option<f64>,
    },
    /// Export all data as JSON
    Export { path: PathBuf },
    /// Import a JSON export, replacing all stored data
    Import { path: PathBuf },
    /// Remove measurements and goals past the retention horizon
    Cleanup,
    /// Show stored-data statistics
    Stats,
    /// Delete all stored measurements and goals
    Clear {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum GoalCommand {
    /// Set a goal, replacing any existing goal for the metric
    Set {
        metric_type: MetricType,
        #[arg(long)]
        target: f64,
        /// Target date (YYYY-MM-DD), at most one year out
        #[arg(long)]
        date: NaiveDate,
    },
    /// List active goals
    List,
    /// Show a goal's weekly and monthly trajectory
    Show { metric_type: MetricType },
    /// Delete a goal
    Delete { metric_type: MetricType },
    /// Record an actual value for a checkpoint
    Record {
        metric_type: MetricType,
        /// Weekly checkpoint index (0-based)
        #[arg(long, conflicts_with = "month")]
        week: Option<usize>,
        /// Monthly checkpoint as YYYY-MM
        #[arg(long)]
        month: Option<String>,
        #[arg(long)]
        value: f64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let ctx = context::build_context(cli.data_dir)?;
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Command::Log {
            date,
            weight,
            muscle_mass,
            fat_mass,
            bmi,
            fat_percentage,
        } => commands::log_measurement(
            &ctx,
            today,
            date.unwrap_or(today),
            weight,
            muscle_mass,
            fat_mass,
            bmi,
            fat_percentage,
        ),
        Command::Metrics { limit } => commands::list_metrics(&ctx, limit),
        Command::Goal { command } => match command {
            GoalCommand::Set {
                metric_type,
                target,
                date,
            } => commands::set_goal(&ctx, today, metric_type, target, date),
            GoalCommand::List => commands::list_goals(&ctx),
            GoalCommand::Show { metric_type } => commands::show_goal(&ctx, metric_type),
            GoalCommand::Delete { metric_type } => commands::delete_goal(&ctx, metric_type),
            GoalCommand::Record {
                metric_type,
                week,
                month,
                value,
            } => commands::record_actual(&ctx, metric_type, week, month, value),
        },
        Command::Profile { height_cm } => commands::profile(&ctx, height_cm),
        Command::Export { path } => commands::export(&ctx, &path),
        Command::Import { path } => commands::import(&ctx, &path),
        Command::Cleanup => commands::cleanup(&ctx, today),
        Command::Stats => commands::stats(&ctx),
        Command::Clear { yes } => commands::clear(&ctx, yes),
    }
}
