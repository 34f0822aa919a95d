#![forbid(unsafe_code)]
//! Vitaplan Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use vitaplan::commands::{
    execute_init, execute_options, execute_plan, execute_run, InitOptions, OptionsCommand,
    PlanOptions, RunOptions,
};
use vitaplan::config::DEFAULT_CONFIG_FILE;
use vitaplan::{ApiKey, Config, Locale};

#[derive(Parser)]
#[command(name = "vitaplan")]
#[command(about = "Health questionnaire and personalized supplement plans")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// API key for the chat-completion service
    #[arg(long, global = true, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a config file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Questionnaire language
        #[arg(long, value_enum)]
        locale: Option<LocaleArg>,

        /// Chat model name
        #[arg(long)]
        model: Option<String>,

        /// Skip interactive prompts (use defaults + CLI args)
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Walk through the questionnaire and get a plan
    Run {
        /// Questionnaire language (default: from config)
        #[arg(long, value_enum)]
        locale: Option<LocaleArg>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a plan from an answers file (.json, .yaml, .yml)
    Plan {
        /// Answers file
        answers: PathBuf,

        /// Output language (default: from config)
        #[arg(long, value_enum)]
        locale: Option<LocaleArg>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,

        /// Also write the plan as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List questionnaire fields and accepted answer tokens
    Options {
        /// Label language (default: from config)
        #[arg(long, value_enum)]
        locale: Option<LocaleArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LocaleArg {
    En,
    Mk,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Locale::En,
            LocaleArg::Mk => Locale::Mk,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "vitaplan=debug" } else { "vitaplan=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config (init may be replacing a broken one)
    let config = if matches!(cli.command, Commands::Init { .. }) {
        Config::default()
    } else {
        Config::load_or_default(&cli.config)?
    };
    let credential = ApiKey::from_optional(cli.api_key);
    let pick = |arg: Option<LocaleArg>| arg.map(Locale::from).unwrap_or(config.locale);

    match cli.command {
        Commands::Init { force, locale, model, yes } => {
            let options = InitOptions {
                config_path: cli.config.clone(),
                force,
                locale: locale.map(Locale::from),
                model,
                yes,
            };
            execute_init(options)?;
        }

        Commands::Run { locale, json } => {
            let options = RunOptions {
                locale: pick(locale),
                json,
            };
            execute_run(options, config, credential).await?;
        }

        Commands::Plan { answers, locale, json, output } => {
            let options = PlanOptions {
                answers,
                locale: pick(locale),
                json,
                output,
            };
            execute_plan(options, config, credential).await?;
        }

        Commands::Options { locale, json } => {
            execute_options(OptionsCommand {
                locale: pick(locale),
                json,
            })?;
        }
    }

    Ok(())
}
