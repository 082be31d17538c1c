use crate::catalog::sample_nudges;
use crate::session::Session;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_start(ctx: &CommandContext, demo: bool, force: bool) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut session = Session::start(&catalog)?;

    if demo {
        for nudge in sample_nudges() {
            session.nudges.enqueue(nudge)?;
        }
    }

    ctx.store.create(&session, force)?;

    let phase = session.tracker.current_phase();
    println!(
        "{} session at {} ({})",
        "Started".green(),
        format!("{}", phase.name).bold(),
        phase.description
    );
    if demo {
        println!("  {} demo nudges queued", session.nudges.len());
    }
    Ok(())
}

pub fn handle_end(ctx: &CommandContext) -> Result<()> {
    let session = ctx.store.end()?;
    println!(
        "{} session started {} ({} nudges accepted)",
        "Ended".green(),
        session.started.format("%Y-%m-%d %H:%M"),
        session.nudges.accepted().len()
    );
    Ok(())
}
