use crate::catalog::Catalog;
use crate::config::{CONFIG_FILE, CatalogSettings, HuddleConfig};
use anyhow::{Context, Result};
use colored::Colorize;

pub fn handle_init(catalog: Option<String>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE);

    if config_path.exists() {
        anyhow::bail!("Project already initialized at {}", config_path.display());
    }

    // Fail early on a catalog that would break every later command
    if let Some(ref path) = catalog {
        Catalog::load(&cwd.join(path))
            .with_context(|| format!("Invalid catalog {}", path))?;
    }

    let config = HuddleConfig {
        catalog: CatalogSettings { path: catalog },
        ..Default::default()
    };

    let data_path = config.data_path(&cwd);
    std::fs::create_dir_all(&data_path)?;
    config.save(&config_path)?;

    println!(
        "{} huddle project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    println!("  Data:   {}", data_path.display());

    Ok(())
}
