//! Command handlers. Each one talks to the services and prints plain text.

use std::path::Path;

use anyhow::{bail, Context as _, Result};
use chrono::NaiveDate;

use bodyfolio_core::goals::{Goal, NewGoal};
use bodyfolio_core::metrics::{MetricType, NewHealthMetric};

use crate::context::AppContext;

#[allow(clippy::too_many_arguments)]
pub fn log_measurement(
    ctx: &AppContext,
    today: NaiveDate,
    date: NaiveDate,
    weight: Option<f64>,
    muscle_mass: Option<f64>,
    fat_mass: Option<f64>,
    bmi: Option<f64>,
    fat_percentage: Option<f64>,
) -> Result<()> {
    let metric = ctx.metric_service.create_metric(NewHealthMetric {
        date,
        weight,
        muscle_mass,
        fat_mass,
        bmi,
        fat_percentage,
    })?;
    println!("Recorded measurement {} for {}", metric.id, metric.date);

    let updated = ctx.goal_service.apply_measurement(&metric, today)?;
    for goal in &updated {
        println!(
            "Updated {} goal progress (target {}{} by {})",
            goal.metric_type.label().to_lowercase(),
            goal.target_value,
            goal.metric_type.unit(),
            goal.target_date
        );
    }
    Ok(())
}

pub fn list_metrics(ctx: &AppContext, limit: Option<usize>) -> Result<()> {
    let metrics = ctx.metric_service.get_metrics()?;
    if metrics.is_empty() {
        println!("No measurements recorded.");
        return Ok(());
    }

    for metric in metrics.iter().take(limit.unwrap_or(usize::MAX)) {
        let mut readings = Vec::new();
        for metric_type in MetricType::ALL {
            if let Some(value) = metric.value_of(metric_type) {
                readings.push(format!(
                    "{} {}{}",
                    metric_type.label().to_lowercase(),
                    value,
                    metric_type.unit()
                ));
            }
        }
        println!("{}  {}", metric.date, readings.join(", "));
    }
    Ok(())
}

pub fn set_goal(
    ctx: &AppContext,
    today: NaiveDate,
    metric_type: MetricType,
    target: f64,
    date: NaiveDate,
) -> Result<()> {
    let current_value = ctx.metric_service.latest_value(metric_type)?;
    let goal = ctx.goal_service.create_goal(
        NewGoal {
            metric_type,
            target_value: target,
            target_date: date,
            current_value,
        },
        today,
    )?;
    println!(
        "Goal set: {} {}{} by {} ({} weekly, {} monthly checkpoints)",
        goal.metric_type.label().to_lowercase(),
        goal.target_value,
        goal.metric_type.unit(),
        goal.target_date,
        goal.weekly_goals.len(),
        goal.monthly_goals.len()
    );
    Ok(())
}

pub fn list_goals(ctx: &AppContext) -> Result<()> {
    let goals = ctx.goal_service.get_goals()?;
    if goals.is_empty() {
        println!("No active goals.");
        return Ok(());
    }
    for goal in &goals {
        let (weekly_hit, monthly_hit) = achieved_counts(goal);
        println!(
            "{:<15} target {}{} by {}  weekly {}/{}  monthly {}/{}",
            goal.metric_type.label(),
            goal.target_value,
            goal.metric_type.unit(),
            goal.target_date,
            weekly_hit,
            goal.weekly_goals.len(),
            monthly_hit,
            goal.monthly_goals.len()
        );
    }
    Ok(())
}

pub fn show_goal(ctx: &AppContext, metric_type: MetricType) -> Result<()> {
    let Some(goal) = ctx.goal_service.get_goal(metric_type)? else {
        bail!("no goal set for {}", metric_type);
    };

    let unit = goal.metric_type.unit();
    println!(
        "{} goal: {}{} by {}",
        goal.metric_type.label(),
        goal.target_value,
        unit,
        goal.target_date
    );
    if let Some(current) = goal.current_value {
        println!("Starting value: {current}{unit}");
    }

    println!("\nWeekly checkpoints:");
    for (index, week) in goal.weekly_goals.iter().enumerate() {
        println!(
            "  {:>2}. {} .. {}  target {}{}  {}",
            index,
            week.week_start,
            week.week_end,
            week.target_value,
            unit,
            checkpoint_status(week.actual_value, week.achieved)
        );
    }

    println!("\nMonthly checkpoints:");
    for month in &goal.monthly_goals {
        println!(
            "  {}-{:02}  target {}{}  {}",
            month.year,
            month.month,
            month.target_value,
            unit,
            checkpoint_status(month.actual_value, month.achieved)
        );
    }
    Ok(())
}

pub fn delete_goal(ctx: &AppContext, metric_type: MetricType) -> Result<()> {
    let removed = ctx.goal_service.delete_goal(metric_type)?;
    if removed == 0 {
        println!("No goal set for {metric_type}.");
    } else {
        println!("Deleted {metric_type} goal.");
    }
    Ok(())
}

pub fn record_actual(
    ctx: &AppContext,
    metric_type: MetricType,
    week: Option<usize>,
    month: Option<String>,
    value: f64,
) -> Result<()> {
    let goal = match (week, month) {
        (Some(week_index), None) => {
            ctx.goal_service
                .record_weekly_actual(metric_type, week_index, value)?
        }
        (None, Some(month)) => {
            let (month, year) = parse_year_month(&month)?;
            ctx.goal_service
                .record_monthly_actual(metric_type, month, year, value)?
        }
        _ => bail!("pass exactly one of --week or --month"),
    };
    println!(
        "Recorded {}{} against the {} goal.",
        value,
        goal.metric_type.unit(),
        goal.metric_type.label().to_lowercase()
    );
    Ok(())
}

pub fn profile(ctx: &AppContext, height_cm: Option<f64>) -> Result<()> {
    if let Some(height_cm) = height_cm {
        ctx.settings_service.set_height_cm(height_cm)?;
        println!("Height set to {height_cm} cm.");
    } else {
        println!("Height: {} cm", ctx.settings_service.height_cm()?);
    }
    Ok(())
}

pub fn export(ctx: &AppContext, path: &Path) -> Result<()> {
    let json = ctx.transfer_service.export_json()?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    println!("Exported data to {}.", path.display());
    Ok(())
}

pub fn import(ctx: &AppContext, path: &Path) -> Result<()> {
    let json =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let summary = ctx.transfer_service.import_json(&json)?;
    println!(
        "Imported {} measurements and {} goals.",
        summary.metrics_imported, summary.goals_imported
    );
    Ok(())
}

pub fn cleanup(ctx: &AppContext, today: NaiveDate) -> Result<()> {
    let metrics_removed = ctx.metric_service.sweep_expired(today)?;
    let goals_removed = ctx.goal_service.sweep_expired(today)?;
    println!("Removed {metrics_removed} expired measurements and {goals_removed} expired goals.");
    Ok(())
}

pub fn stats(ctx: &AppContext) -> Result<()> {
    let total_goals = ctx.goal_service.get_goals()?.len();
    let stats = ctx.metric_service.data_stats(total_goals)?;
    println!("Measurements: {}", stats.total_metrics);
    println!("Goals:        {}", stats.total_goals);
    if let (Some(oldest), Some(newest)) = (stats.oldest_metric, stats.newest_metric) {
        println!("Date range:   {oldest} .. {newest}");
    }
    Ok(())
}

pub fn clear(ctx: &AppContext, yes: bool) -> Result<()> {
    if !yes {
        bail!("refusing to wipe data without --yes");
    }
    let goals = ctx.goal_service.get_goals()?;
    for goal in &goals {
        ctx.goal_service.delete_goal(goal.metric_type)?;
    }
    let metrics_removed = ctx.metric_service.clear_all()?;
    println!(
        "Deleted {} measurements and {} goals.",
        metrics_removed,
        goals.len()
    );
    Ok(())
}

fn achieved_counts(goal: &Goal) -> (usize, usize) {
    (
        goal.weekly_goals.iter().filter(|w| w.achieved).count(),
        goal.monthly_goals.iter().filter(|m| m.achieved).count(),
    )
}

fn checkpoint_status(actual_value: Option<f64>, achieved: bool) -> String {
    match actual_value {
        Some(actual) if achieved => format!("achieved (actual {actual})"),
        Some(actual) => format!("missed (actual {actual})"),
        None => "pending".to_string(),
    }
}

fn parse_year_month(input: &str) -> Result<(u32, i32)> {
    let (year, month) = input
        .split_once('-')
        .context("expected YYYY-MM, e.g. 2026-03")?;
    let year: i32 = year.parse().context("invalid year")?;
    let month: u32 = month.parse().context("invalid month")?;
    if !(1..=12).contains(&month) {
        bail!("month must be between 1 and 12, got {month}");
    }
    Ok((month, year))
}
