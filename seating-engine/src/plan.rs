//! Plan file loading
//!
//! A plan file is the JSON record the host persists:
//! `{ "venue": {..}, "viewport": {..}?, "guests": [..], "tables": [..] }`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use shared::models::SeatingPlan;

use crate::core::Config;
use crate::session::SeatingSession;

pub fn load_plan(path: impl AsRef<Path>) -> Result<SeatingPlan> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file {}", path.display()))?;
    let plan = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse plan file {}", path.display()))?;
    Ok(plan)
}

/// Load a plan file straight into a session
pub fn open_session(config: Config, path: impl AsRef<Path>) -> Result<SeatingSession> {
    let path = path.as_ref();
    let plan = load_plan(path)?;
    tracing::info!(
        path = %path.display(),
        guests = plan.guests.len(),
        tables = plan.tables.len(),
        "Plan loaded"
    );
    SeatingSession::from_plan(config, plan)
        .with_context(|| format!("Plan file {} is not a valid seating", path.display()))
}
