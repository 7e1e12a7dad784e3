//! CLI Adapter.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use dialoguer::{Error as DialoguerError, Input};

use crate::app::api;
use crate::domain::{AppConfig, AppError, GenerationRequest};

#[derive(Parser)]
#[command(name = "postcraft")]
#[command(version)]
#[command(
    about = "Draft platform-tailored social media posts, image prompts and posting schedules",
    long_about = None
)]
struct Cli {
    /// Path to postcraft.toml (defaults to $POSTCRAFT_CONFIG, then ./postcraft.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a content package for a topic
    #[clap(visible_alias = "g")]
    Generate(GenerateArgs),
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Topic or product to write about (prompted when omitted)
    #[arg(short, long)]
    topic: Option<String>,
    /// Brand voice, e.g. Friendly, Professional, Playful
    #[arg(short, long)]
    voice: Option<String>,
    /// Target audience
    #[arg(short, long)]
    audience: Option<String>,
    /// Target platform; repeat or separate with commas
    #[arg(short, long = "platform", value_delimiter = ',')]
    platforms: Vec<String>,
    /// IANA timezone used for the posting schedule
    #[arg(long)]
    timezone: Option<String>,
    /// Try the remote orchestrator before generating locally
    #[arg(short, long)]
    remote: bool,
    /// Write the JSON export to this file (social_preview.json when no value is given)
    #[arg(short, long, num_args = 0..=1, default_missing_value = api::DEFAULT_EXPORT_FILE)]
    output: Option<PathBuf>,
    /// Print the package as JSON instead of the text preview
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate(args) => run_generate(config_path, args),
        Commands::Config { command } => match command {
            ConfigCommands::Show => run_config_show(config_path),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(config_path: Option<&Path>, args: GenerateArgs) -> Result<(), AppError> {
    let mut session = api::open_session(config_path)?;
    let Some(request) = build_request(
        session.config(),
        args.topic,
        args.voice,
        args.audience,
        args.platforms,
        args.timezone,
        prompt_topic,
    )?
    else {
        return Ok(());
    };

    let generation = session.generate(&request, args.remote)?;

    for warning in &generation.warnings {
        eprintln!("⚠️  {}", warning);
    }

    if args.json {
        println!("{}", api::export_json(&generation.package)?);
    } else {
        print!("{}", api::render_preview(&generation.package));
    }

    if let Some(path) = args.output {
        api::export_to(&generation.package, &path)?;
        eprintln!("✅ Exported content package to {}", path.display());
    }

    Ok(())
}

fn run_config_show(config_path: Option<&Path>) -> Result<(), AppError> {
    print!("{}", api::show_config(config_path)?);
    Ok(())
}

fn build_request(
    config: &AppConfig,
    topic: Option<String>,
    voice: Option<String>,
    audience: Option<String>,
    platforms: Vec<String>,
    timezone: Option<String>,
    prompt: impl FnOnce() -> Result<Option<String>, AppError>,
) -> Result<Option<GenerationRequest>, AppError> {
    let topic = match topic {
        Some(value) => value,
        None => match prompt()? {
            Some(value) => value,
            None => return Ok(None),
        },
    };
    let platforms = if platforms.is_empty() { config.defaults.platforms.clone() } else { platforms };

    Ok(Some(GenerationRequest::new(
        topic,
        voice.unwrap_or_else(|| config.defaults.voice.clone()),
        audience,
        platforms,
        timezone.unwrap_or_else(|| config.defaults.timezone.clone()),
    )))
}

fn prompt_topic() -> Result<Option<String>, AppError> {
    topic_input(Input::<String>::new().with_prompt("Topic / product").allow_empty(true).interact_text())
}

/// Ctrl-C at the prompt cancels the run instead of failing it.
fn topic_input(read: Result<String, DialoguerError>) -> Result<Option<String>, AppError> {
    match read {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Validation(format!("Failed to read topic: {}", err))),
    }
}
