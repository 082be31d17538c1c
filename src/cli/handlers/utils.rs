use crate::config::HuddleConfig;
use crate::model::{Difficulty, ElementKind, Nudge, Phase, PhaseName, PhaseStatus, PromptTemplate};
use crate::session::NudgeQueue;
use anyhow::Result;
use colored::Colorize;

pub fn parse_phase(s: &str) -> Result<PhaseName> {
    Ok(s.parse::<PhaseName>()?)
}

/// Random nudge ID that does not collide with a pending one
pub fn generate_nudge_id(config: &HuddleConfig, queue: &NudgeQueue) -> String {
    const ALPHABET: [char; 36] = [
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h',
        'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    ];
    loop {
        let suffix = nanoid::format(
            nanoid::rngs::default,
            &ALPHABET,
            config.session.id_length,
        );
        let id = format!("{}{}", config.session.id_prefix, suffix);
        if queue.get(&id).is_none() {
            return id;
        }
    }
}

/// Format phase status with color coding
pub fn format_status(status: PhaseStatus) -> colored::ColoredString {
    match status {
        PhaseStatus::Done => "done".green(),
        PhaseStatus::InProgress => "in-progress".yellow().bold(),
        PhaseStatus::Queued => "queued".dimmed(),
    }
}

pub fn format_kind(kind: ElementKind) -> colored::ColoredString {
    let label = format!("{}", kind);
    match kind {
        ElementKind::Word => label.blue(),
        ElementKind::Prompt => label.cyan(),
        ElementKind::Visual => label.magenta(),
        ElementKind::Exercise => label.green(),
        ElementKind::Deck => label.yellow(),
        ElementKind::Template => label.white(),
    }
}

pub fn format_difficulty(difficulty: Difficulty) -> colored::ColoredString {
    let dots = "●".repeat(difficulty.level() as usize);
    match difficulty {
        Difficulty::Gentle => dots.green(),
        Difficulty::Moderate => dots.yellow(),
        Difficulty::Bold => dots.red(),
    }
}

/// Print a phase's elements with their positions
pub fn print_elements(phase: &Phase) {
    println!(
        "{} {}",
        format!("{}", phase.name).bold(),
        phase.description.dimmed()
    );
    if phase.elements.is_empty() {
        println!("  No elements.");
        return;
    }
    for (pos, element) in phase.elements.iter().enumerate() {
        println!(
            "  {} [{}] {} {}",
            pos,
            format_kind(element.kind),
            element.title,
            format!("({})", element.id).dimmed()
        );
    }
}

pub fn print_nudge(nudge: &Nudge) {
    println!(
        "{} {} {}",
        nudge.id.cyan(),
        format_difficulty(nudge.difficulty),
        nudge.title.bold()
    );
    if !nudge.reason.is_empty() {
        println!("    Why: {}", nudge.reason);
    }
    if !nudge.suggestion.is_empty() {
        println!("    Try: \"{}\"", nudge.suggestion.italic());
    }
    if nudge.cooldown > 0 {
        println!("    {}", format!("cooldown {}s", nudge.cooldown).dimmed());
    }
}

pub fn print_nudge_list(nudges: &[Nudge]) {
    if nudges.is_empty() {
        println!("No pending nudges.");
        return;
    }
    for nudge in nudges {
        print_nudge(nudge);
    }
}

pub fn print_prompt_list(prompts: &[&PromptTemplate]) {
    if prompts.is_empty() {
        println!("No prompts found.");
        return;
    }
    for prompt in prompts {
        let tags = if prompt.tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", prompt.tags.join(", "))
        };
        println!("{}{}", prompt.title.bold(), tags.magenta());
        if !prompt.example.is_empty() {
            println!("    {}", prompt.example.dimmed());
        }
    }
}
