use crate::session::PromptLibrary;
use anyhow::Result;

use super::CommandContext;
use super::utils::print_prompt_list;

pub fn handle_prompts(ctx: &CommandContext, query: String, advanced: bool, json: bool) -> Result<()> {
    let library = PromptLibrary::new(ctx.catalog()?.prompts);

    let results: Vec<_> = if advanced && !query.is_empty() {
        library.search(&query)?
    } else {
        library.filter(&query).collect()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        if !query.is_empty() {
            println!("Found {} prompts for '{}':\n", results.len(), query);
        }
        print_prompt_list(&results);
    }
    Ok(())
}
