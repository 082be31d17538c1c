use crate::cli::NudgeAction;
use crate::model::{Difficulty, Nudge};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{generate_nudge_id, print_nudge_list};

pub fn handle_nudge(ctx: &CommandContext, action: NudgeAction) -> Result<()> {
    match action {
        NudgeAction::List { json } => {
            let session = ctx.store.load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(session.nudges.pending())?);
            } else {
                print_nudge_list(session.nudges.pending());
            }
        }
        NudgeAction::Accepted { json } => {
            let session = ctx.store.load()?;
            let accepted = session.nudges.accepted();
            if json {
                println!("{}", serde_json::to_string_pretty(accepted)?);
            } else if accepted.is_empty() {
                println!("No accepted nudges.");
            } else {
                for (i, id) in accepted.iter().enumerate() {
                    println!("{}. {}", i + 1, id.cyan());
                }
            }
        }
        NudgeAction::Add {
            title,
            reason,
            suggestion,
            difficulty,
            cooldown,
            id,
        } => {
            let difficulty = Difficulty::try_from(difficulty)?;
            let nudge = ctx.update_session(|session| {
                let id = id.unwrap_or_else(|| generate_nudge_id(&ctx.config, &session.nudges));
                let nudge = Nudge::new(id, title)
                    .with_reason(reason)
                    .with_suggestion(suggestion)
                    .with_difficulty(difficulty)
                    .with_cooldown(cooldown);
                session.nudges.enqueue(nudge.clone())?;
                Ok(nudge)
            })?;
            println!("{} {} {}", "Queued".green(), nudge.id.cyan(), nudge.title);
        }
        NudgeAction::Accept { id } => {
            let nudge = ctx.update_session(|session| Ok(session.nudges.accept(&id)?))?;
            println!("{} {} {}", "Accepted".green(), nudge.id.cyan(), nudge.title);
            if !nudge.suggestion.is_empty() {
                println!("    Try: \"{}\"", nudge.suggestion.italic());
            }
        }
        NudgeAction::Dismiss { id } => {
            let nudge = ctx.update_session(|session| Ok(session.nudges.dismiss(&id)?))?;
            println!("{} {} {}", "Dismissed".yellow(), nudge.id.cyan(), nudge.title);
        }
    }
    Ok(())
}
