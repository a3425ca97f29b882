use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use moyagen_core::CodeGenerator;
use moyagen_core::api::ApiDescription;
use moyagen_core::config::{self, CONFIG_FILE_NAME, GenOptions, MoyagenConfig};
use moyagen_core::model;
use moyagen_swift::SwiftClientGenerator;

mod output;

#[derive(Parser)]
#[command(name = "moyagen", about = "Swift API client generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Swift sources from a normalized API description
    Generate {
        /// Path to the API description (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit internal instead of public declarations
        #[arg(long)]
        internal_level: bool,

        /// Append the typed-response-decoding contract to Utils.swift
        #[arg(long)]
        response_types: bool,

        /// Server shim takes a RequestAdapter instead of a bearer token
        #[arg(long)]
        custom_authorization: bool,

        /// Emit the Server.swift runtime shim
        #[arg(long)]
        moya_provider: bool,
    },

    /// Inspect the derived operation models of an API description
    Inspect {
        /// Path to the API description
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new moyagen configuration
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            internal_level,
            response_types,
            custom_authorization,
            moya_provider,
        } => {
            let flags = GenOptions {
                internal_level,
                response_types,
                custom_authorization,
                moya_provider,
            };
            cmd_generate(input, output, flags)
        }

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "moyagen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<MoyagenConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

fn load_description(path: &PathBuf) -> Result<ApiDescription> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let api = match ext {
        "json" => ApiDescription::from_json(&content)?,
        _ => ApiDescription::from_yaml(&content)?,
    };
    Ok(api)
}

fn cmd_generate(input: Option<PathBuf>, output: Option<PathBuf>, flags: GenOptions) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output_dir = output.unwrap_or_else(|| PathBuf::from(&cfg.output));

    // CLI flags switch options on over whatever the config file says.
    let options = GenOptions {
        internal_level: cfg.options.internal_level || flags.internal_level,
        response_types: cfg.options.response_types || flags.response_types,
        custom_authorization: cfg.options.custom_authorization || flags.custom_authorization,
        moya_provider: cfg.options.moya_provider || flags.moya_provider,
    };

    let api = load_description(&input)?;
    let files = SwiftClientGenerator
        .generate(&api, &options)
        .map_err(|e| anyhow::anyhow!(e))?;

    eprintln!("Generating {} file(s) → {}", files.len(), output_dir.display());
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;
    output::write_output(&output_dir, &files)?;
    eprintln!("Done.");
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat) -> Result<()> {
    let api = load_description(&input)?;
    let units = model::build_units(&api).map_err(|e| anyhow::anyhow!(e))?;

    let text = match format {
        InspectFormat::Yaml => serde_yaml_ng::to_string(&units)?,
        InspectFormat::Json => serde_json::to_string_pretty(&units)?,
    };
    println!("{text}");
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    if path.exists() && !force {
        anyhow::bail!("{CONFIG_FILE_NAME} already exists (use --force to overwrite)");
    }
    fs::write(&path, config::default_config_content())
        .with_context(|| format!("failed to write {CONFIG_FILE_NAME}"))?;
    eprintln!("wrote {CONFIG_FILE_NAME}");
    Ok(())
}
