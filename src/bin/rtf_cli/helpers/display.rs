// ABOUTME: Output formatting helpers for rtf-cli
// ABOUTME: Text tables for programs, forecasts, and TM trends plus JSON printing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use rtf_program_engine::models::{
    ForecastWeek, ProgramConfig, TmTrendSnapshot, VariantGoal, WeekPlan,
};
use serde::Serialize;

/// Print any wire type as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a program as a week table
pub fn print_program(config: &ProgramConfig, weeks: &[WeekPlan]) {
    println!(
        "\n{} RTF program: TM {} kg, rounding {} kg, {} weeks",
        config.style.display_name(),
        config.initial_weight,
        config.rounding_increment_kg,
        weeks.len()
    );
    println!("{}", "=".repeat(78));
    println!("Week     Int  Sets×Reps  AMRAP    Set     TM    Weight  Action");
    println!("{}", "-".repeat(78));

    for week in weeks {
        match week.targets() {
            Some(t) => println!(
                "{:>4}  {:>5.0}%  {:>9}  {:>4}+  {:>5}  {:>5}  {:>8}  {}",
                week.week,
                t.intensity * 100.0,
                sets_by_reps(t.sets, t.fixed_reps),
                t.amrap_target,
                t.amrap_set_index,
                t.training_max,
                t.weight,
                t.action
            ),
            None => println!("{:>4}  Deload", week.week),
        }
    }
}

fn sets_by_reps(sets: u32, reps: u32) -> String {
    format!("{sets}×{reps}")
}

fn variant_cell(goal: Option<&VariantGoal>) -> String {
    goal.map_or_else(
        || "-".to_owned(),
        |g| {
            format!(
                "{:.0}% {}×{} AMRAP {}+",
                g.intensity * 100.0,
                g.sets,
                g.fixed_reps,
                g.amrap_target
            )
        },
    )
}

/// Print a forecast as a two-column comparison
pub fn print_forecast(forecast: &[ForecastWeek]) {
    println!("\nStandard vs Hypertrophy forecast ({} weeks)", forecast.len());
    println!("{}", "=".repeat(64));
    println!("Week  Standard                      Hypertrophy");
    println!("{}", "-".repeat(64));

    for row in forecast {
        if row.is_deload {
            println!("{:>4}  Deload", row.week);
        } else {
            println!(
                "{:>4}  {:<28}  {:<28}",
                row.week,
                variant_cell(row.standard.as_ref()),
                variant_cell(row.hypertrophy.as_ref())
            );
        }
    }
}

/// Print a training-max trend snapshot
pub fn print_trend(snapshot: &TmTrendSnapshot) {
    let exercise = snapshot.exercise_id.as_deref().unwrap_or("all exercises");
    println!(
        "\nTraining max trend: {} ({exercise})",
        snapshot.style.display_name()
    );
    println!("{}", "=".repeat(50));

    if snapshot.adjustments.is_empty() {
        println!("No training max adjustments");
    } else {
        println!("Week    Previous         New    Change");
        println!("{}", "-".repeat(50));
        for adj in &snapshot.adjustments {
            println!(
                "{:>4}  {:>10}  {:>10}  {:>8}",
                adj.week,
                adj.previous_tm,
                adj.new_tm,
                adj.percent_change_display()
            );
        }
    }

    match snapshot.latest_tm {
        Some(tm) => println!("\nLatest TM: {tm} kg"),
        None => println!("\nLatest TM: unknown"),
    }
    if let Some(total) = snapshot.total_percent_change {
        println!("Total change: {total:+.1}%");
    }
}
