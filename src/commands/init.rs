//! @acp:module "Init Command"
//! @acp:summary "Write a starter vitaplan config"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `vitaplan init`. The API key is never written to the config file.

use std::path::PathBuf;

use anyhow::{bail, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::config::Config;
use crate::locale::Locale;

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Config file to create
    pub config_path: PathBuf,
    /// Force overwrite existing config
    pub force: bool,
    /// Display language
    pub locale: Option<Locale>,
    /// Chat model name
    pub model: Option<String>,
    /// Skip interactive prompts
    pub yes: bool,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    let config_path = &options.config_path;

    if config_path.exists() && !options.force {
        bail!(
            "Config file {} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    let mut config = Config::default();

    // Interactive mode if no CLI options and not using --yes
    let interactive = !options.yes && options.locale.is_none() && options.model.is_none();

    if interactive {
        run_interactive_init(&mut config)?;
    } else {
        apply_cli_options(&mut config, &options);
    }

    config.save(config_path)?;
    println!("{} Created {}", style("✓").green(), config_path.display());

    println!("\n{}", style("Next steps:").bold());
    println!(
        "  1. Export {} with your API key",
        style("OPENAI_API_KEY").cyan()
    );
    println!("  2. Run {} to start the questionnaire", style("vitaplan run").cyan());

    Ok(())
}

fn run_interactive_init(config: &mut Config) -> Result<()> {
    println!("{} Vitaplan Setup\n", style("→").cyan());
    let theme = ColorfulTheme::default();

    let languages: Vec<&str> = Locale::all().iter().map(|l| l.texts().language).collect();
    let choice = Select::with_theme(&theme)
        .with_prompt("Questionnaire language")
        .items(&languages)
        .default(0)
        .interact()?;
    config.locale = Locale::all()[choice];

    let model: String = Input::with_theme(&theme)
        .with_prompt("Chat model")
        .default(config.generation.model.clone())
        .interact_text()?;
    config.generation.model = model.trim().to_string();

    let custom_endpoint = Confirm::with_theme(&theme)
        .with_prompt("Use a custom chat-completions endpoint?")
        .default(false)
        .interact()?;

    if custom_endpoint {
        let endpoint: String = Input::with_theme(&theme)
            .with_prompt("Endpoint URL")
            .default(config.generation.endpoint.clone())
            .interact_text()?;
        config.generation.endpoint = endpoint.trim().to_string();
    }

    Ok(())
}

fn apply_cli_options(config: &mut Config, options: &InitOptions) {
    if let Some(locale) = options.locale {
        config.locale = locale;
    }
    if let Some(model) = &options.model {
        config.generation.model = model.clone();
    }
}
