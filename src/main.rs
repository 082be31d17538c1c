use anyhow::Result;
use clap::Parser;

use huddle::cli::handlers::{
    CommandContext, handle_advance, handle_element, handle_end, handle_init, handle_nudge,
    handle_prompts, handle_start, handle_status,
};
use huddle::cli::{Cli, Commands};
use huddle::logging::LogOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    huddle::logging::init(&LogOptions::resolve(cli.verbose, cli.log_file, &cwd));

    match cli.command {
        Commands::Init { catalog } => handle_init(catalog),
        Commands::Start { demo, force } => handle_start(&CommandContext::discover()?, demo, force),
        Commands::End => handle_end(&CommandContext::discover()?),
        Commands::Status { json } => handle_status(&CommandContext::discover()?, json),
        Commands::Advance { step, json } => {
            handle_advance(&CommandContext::discover()?, step, json)
        }
        Commands::Element(action) => handle_element(&CommandContext::discover()?, action),
        Commands::Nudge(action) => handle_nudge(&CommandContext::discover()?, action),
        Commands::Prompts {
            query,
            advanced,
            json,
        } => handle_prompts(&CommandContext::discover()?, query, advanced, json),
    }
}
