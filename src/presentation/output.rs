//! Output Rendering
//!
//! JSON event lines and text summaries for the `next` and `check` handlers.
//! Per-file clean output comes from the executor and `JsonEventSink`.

use std::fmt;

use chrono::{DateTime, TimeZone};
use serde_json::{json, Value};

use crate::domain::entities::DeletionPlan;

/// Text line for the next scheduled run
pub fn render_next_run<Tz: TimeZone>(next: DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    format!("Cleanup will occur next at {}", next.to_rfc3339())
}

/// JSON event for the next scheduled run
pub fn next_run_event<Tz: TimeZone>(schedule: &str, next: DateTime<Tz>) -> Value
where
    Tz::Offset: fmt::Display,
{
    json!({
        "type": "next_run",
        "schedule": schedule,
        "at": next.to_rfc3339(),
    })
}

/// Per-rule table for `cleaner check`
pub fn render_check(plan: &DeletionPlan) -> String {
    let mut out = String::new();
    for rule in &plan.rules {
        let matched = rule.kept.len() + rule.delete.len();
        out.push_str(&format!(
            "{}  {}  retain {}: {} matched, {} to delete\n",
            rule.bucket,
            rule.pattern,
            rule.retain,
            matched,
            rule.delete.len()
        ));
    }
    out.push_str(&format!(
        "Config OK: {} files to delete, {} kept\n",
        plan.len(),
        plan.kept_count()
    ));
    out
}

/// JSON summary for `cleaner check`
pub fn check_event(plan: &DeletionPlan) -> Value {
    let rules: Vec<Value> = plan
        .rules
        .iter()
        .map(|rule| {
            json!({
                "bucket": rule.bucket,
                "pattern": rule.pattern,
                "retain": rule.retain,
                "matched": rule.kept.len() + rule.delete.len(),
                "delete": rule.delete.len(),
            })
        })
        .collect();
    json!({
        "type": "check_complete",
        "rules": rules,
        "delete": plan.len(),
        "kept": plan.kept_count(),
    })
}
