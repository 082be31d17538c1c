use crate::error::HuddleError;
use crate::model::PHASE_COUNT;
use crate::session::Session;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{format_status, parse_phase};

fn overview_json(session: &Session) -> serde_json::Value {
    let tracker = &session.tracker;
    serde_json::json!({
        "current_step": tracker.current_step(),
        "current_phase": tracker.current_phase().name,
        "phases": tracker.overview().iter().map(|(name, status)| {
            serde_json::json!({
                "name": name,
                "step": name.step(),
                "status": status,
            })
        }).collect::<Vec<_>>(),
        "suggestions": tracker.suggestions(),
        "pending_nudges": session.nudges.len(),
        "accepted_nudges": session.nudges.accepted().len(),
        "started": session.started,
        "updated": session.updated,
    })
}

fn print_overview(session: &Session) {
    let tracker = &session.tracker;
    println!(
        "{} step {} of 4",
        "Journey".bold(),
        tracker.current_step()
    );
    for (name, status) in tracker.overview() {
        let phase = tracker.phase(name);
        println!(
            "  {}. {:<7} {:<12} {}",
            name.step(),
            format!("{}", name),
            format_status(status),
            phase.description.dimmed()
        );
    }

    let suggestions = tracker.suggestions();
    if !suggestions.is_empty() {
        println!("\n{}", "Suggestions".bold());
        for suggestion in suggestions {
            println!("  - {}", suggestion);
        }
    }

    println!(
        "\n{} pending, {} accepted nudges",
        session.nudges.len().to_string().cyan(),
        session.nudges.accepted().len().to_string().cyan()
    );
}

pub fn handle_status(ctx: &CommandContext, json: bool) -> Result<()> {
    let session = ctx.store.load()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&overview_json(&session))?);
    } else {
        print_overview(&session);
    }
    Ok(())
}

pub fn handle_advance(ctx: &CommandContext, step: Option<String>, json: bool) -> Result<()> {
    let session = ctx.update_session(|session| {
        match step.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
                // numbers go straight to the tracker so 0 and 5 report out of range
                let n = s.parse::<usize>().map_err(|_| {
                    HuddleError::OutOfRange(format!("step {} is outside 1..={}", s, PHASE_COUNT))
                })?;
                session.tracker.advance_to(n)?
            }
            Some(s) => session.tracker.advance_to(parse_phase(s)?.step())?,
            None => session.tracker.advance()?,
        };
        Ok(session.clone())
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&overview_json(&session))?);
    } else {
        let phase = session.tracker.current_phase();
        println!(
            "{} to {} ({})",
            "Advanced".green(),
            format!("{}", phase.name).bold(),
            phase.description
        );
    }
    Ok(())
}
