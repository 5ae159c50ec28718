// ABOUTME: Display helpers for the weight-tracker CLI
// ABOUTME: Formats limits, verdicts, and the dashboard for the terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use weight_tracker::{config::LimitsOrigin, models::ValidationLimits, session::DashboardView};

/// Print the limits and where they came from
pub fn display_limits(limits: &ValidationLimits, origin: LimitsOrigin) {
    println!("Validation limits ({})", origin.as_str());
    println!("{}", "=".repeat(40));
    println!(
        "   Height:    {} - {} m",
        limits.height_min, limits.height_max
    );
    println!(
        "   Weight:    {} - {} kg",
        limits.weight_min, limits.weight_max
    );
    println!("   Born on or after: {}", limits.birth_date_min);
    println!(
        "   Max change: {} kg/day",
        limits.weight_variation_per_day
    );
}

/// Print a one-line verdict
pub fn display_verdict(subject: &str, valid: bool) {
    println!("{subject}: {}", if valid { "valid" } else { "invalid" });
}

/// Print the dashboard
pub fn display_dashboard(view: &DashboardView) {
    if let Some(greeting) = &view.greeting {
        println!("{greeting}");
    }
    if view.needs_profile {
        println!("No profile configured. Run `weight-tracker profile` first.");
    }
    println!("{}", "=".repeat(40));
    println!("   BMI: {}", view.bmi_value);
    println!("   {}", view.bmi_description);
    println!("{}", "-".repeat(40));
    println!("   Weigh-ins: {}", view.stats.count);
    println!("   Max: {} kg", view.stats.max_kg);
    println!("   Min: {} kg", view.stats.min_kg);
}
