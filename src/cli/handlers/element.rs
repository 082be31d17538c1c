use crate::cli::ElementAction;
use crate::model::{LibraryElement, PhaseName};
use anyhow::Result;
use colored::Colorize;
use slug::slugify;

use super::CommandContext;
use super::utils::{format_kind, parse_phase, print_elements};

pub fn handle_element(ctx: &CommandContext, action: ElementAction) -> Result<()> {
    match action {
        ElementAction::List { phase, json } => {
            let session = ctx.store.load()?;
            let phase = match phase {
                Some(p) => session.tracker.phase(parse_phase(&p)?),
                None => session.tracker.current_phase(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&phase.elements)?);
            } else {
                print_elements(phase);
            }
        }
        ElementAction::Add {
            title,
            phase,
            kind,
            description,
            id,
        } => {
            let phase = parse_phase(&phase)?;
            let id = id.unwrap_or_else(|| slugify(&title));
            let element = LibraryElement::new(id, kind.into(), title).with_description(description);
            let summary = format!("{} [{}] {}", element.id.cyan(), format_kind(element.kind), element.title);
            ctx.update_session(|session| Ok(session.tracker.add_element(phase, element)?))?;
            println!("{} {} to {}", "Added".green(), summary, phase);
        }
        ElementAction::Remove { id, phase } => {
            let phase = parse_phase(&phase)?;
            let removed =
                ctx.update_session(|session| Ok(session.tracker.remove_element(phase, &id)?))?;
            println!("{} {} from {}", "Removed".green(), removed.id.cyan(), phase);
        }
        ElementAction::Move { from, to, phase } => {
            let phase = parse_phase(&phase)?;
            ctx.update_session(|session| Ok(session.tracker.reorder_element(phase, from, to)?))?;
            println!("{} {} -> {} in {}", "Moved".green(), from, to, phase);
        }
        ElementAction::Up { pos, phase } => {
            let phase = parse_phase(&phase)?;
            let moved = ctx.update_session(|session| Ok(session.tracker.move_up(phase, pos)?))?;
            report_step_move(moved, pos, pos.wrapping_sub(1), phase);
        }
        ElementAction::Down { pos, phase } => {
            let phase = parse_phase(&phase)?;
            let moved = ctx.update_session(|session| Ok(session.tracker.move_down(phase, pos)?))?;
            report_step_move(moved, pos, pos + 1, phase);
        }
    }
    Ok(())
}

fn report_step_move(moved: bool, from: usize, to: usize, phase: PhaseName) {
    if moved {
        println!("{} {} -> {} in {}", "Moved".green(), from, to, phase);
    } else {
        println!("{} element {} is already at the edge of {}", "Unchanged".yellow(), from, phase);
    }
}
