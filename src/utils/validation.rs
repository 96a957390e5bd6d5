use anyhow::{anyhow, Result};

pub fn validate_project_name(name: Option<&str>) -> Result<()> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(()),
        _ => Err(anyhow!("Project name is required")),
    }
}

/// Checks a zone typed into a clock before it is added.
///
/// Only shape is checked here; unknown zones are still accepted and render
/// as invalid.
pub fn validate_zone_input(zone: &str) -> Result<&str> {
    let zone = zone.trim();

    if zone.is_empty() {
        return Err(anyhow!("Timezone cannot be empty"));
    }

    if zone.chars().any(char::is_whitespace) {
        return Err(anyhow!("Timezone '{}' cannot contain spaces", zone));
    }

    Ok(zone)
}
