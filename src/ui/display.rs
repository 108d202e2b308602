//! Display functions for apps
//!
//! Text output for people and JSON output for scripts.

use console::Style;
use serde::Serialize;

use crate::domain::VersionedApp;
use crate::error::{AppCenterError, Result};

/// Describe an app's versions in one line
pub fn format_versions(app: &VersionedApp) -> String {
    match (app.installed_version(), app.available_version()) {
        (Some(installed), Some(available)) if installed != available => {
            format!("{installed} -> {available} (upgrade available)")
        }
        (Some(installed), Some(_)) => format!("{installed} (up to date)"),
        (Some(installed), None) => format!("{installed} (installed, not in store)"),
        (None, Some(available)) => format!("{available} (available)"),
        (None, None) => String::from("unknown"),
    }
}

/// Print a list of apps, one line each
pub fn print_app_list(title: &str, apps: &[VersionedApp]) {
    if apps.is_empty() {
        println!("No apps found.");
        return;
    }

    println!("{} ({}):", title, apps.len());
    println!();

    let width = apps
        .iter()
        .map(|a| a.id().as_str().len())
        .max()
        .unwrap_or(0);

    for app in apps {
        let id_style = if app.is_installed() {
            Style::new().bold().yellow()
        } else {
            Style::new().bold()
        };
        let id = format!("{:width$}", app.id().as_str());
        let versions = if app.is_upgradable() {
            Style::new().green().apply_to(format_versions(app)).to_string()
        } else {
            Style::new().dim().apply_to(format_versions(app)).to_string()
        };
        println!("  {}  {}", id_style.apply_to(id), versions);
    }
}

/// Print everything known about one app
pub fn print_app_detail(app: &VersionedApp) {
    let label = Style::new().bold();
    println!("{}", Style::new().bold().yellow().apply_to(app.id()));
    println!("  {} {}", label.apply_to("Name:"), app.app().name());
    println!("  {} {}", label.apply_to("URL:"), app.app().url());
    println!("  {} {}", label.apply_to("Icon:"), app.app().icon());
    println!(
        "  {} {}",
        label.apply_to("Installed:"),
        app.installed_version().unwrap_or("-")
    );
    println!(
        "  {} {}",
        label.apply_to("Available:"),
        app.available_version().unwrap_or("-")
    );
    if app.is_upgradable() {
        println!(
            "  {}",
            Style::new()
                .green()
                .apply_to(format!("Run 'appcenter upgrade {}' to upgrade", app.id()))
        );
    }
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| AppCenterError::IoError {
        message: format!("Failed to serialize output: {e}"),
    })?;
    println!("{json}");
    Ok(())
}
