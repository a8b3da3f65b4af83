use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use mmg_core::Generator;
use mmg_core::calc::{DefaultNames, HttpBinding, NamesCalculator, PackagesCalculator, VersionPackages};
use mmg_core::config::{self, CONFIG_FILE_NAME, MmgConfig, OutputFormat};
use mmg_core::model::Model;
use mmg_core::parse;
use mmg_core::reporter::Reporter;
use mmg_openapi::OpenApiGenerator;
use mmg_openapi::emitters::paths::absolute_path;

#[derive(Parser)]
#[command(name = "mmg", about = "OpenAPI 3.0 generator for versioned API models", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one OpenAPI document per service version
    Generate {
        /// Path to the model description (YAML or JSON)
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Document format, overrides the config file
        #[arg(long)]
        format: Option<DocumentFormat>,
    },

    /// Validate a model description
    Validate {
        /// Path to the model description
        #[arg(short, long)]
        model: PathBuf,
    },

    /// Inspect the paths and schemas a model produces
    Inspect {
        /// Path to the model description
        #[arg(short, long)]
        model: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new mmg configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DocumentFormat {
    Json,
    Yaml,
}

impl From<DocumentFormat> for OutputFormat {
    fn from(value: DocumentFormat) -> Self {
        match value {
            DocumentFormat::Json => OutputFormat::Json,
            DocumentFormat::Yaml => OutputFormat::Yaml,
        }
    }
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
            model,
            output,
            format,
        } => cmd_generate(model, output, format),

        Commands::Validate { model } => cmd_validate(&model),

        Commands::Inspect { model, format } => cmd_inspect(&model, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "mmg", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<MmgConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

fn load_model(path: &Path) -> Result<Model> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let model = match ext {
        "json" => parse::from_json(&content),
        _ => parse::from_yaml(&content),
    }
    .with_context(|| format!("failed to load model {}", path.display()))?;
    log::debug!(
        "loaded {} with {} service versions",
        path.display(),
        model.versions().count()
    );
    Ok(model)
}

fn cmd_generate(
    model: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<DocumentFormat>,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let model_path = model.unwrap_or_else(|| PathBuf::from(&cfg.model));
    let output = output.unwrap_or_else(|| PathBuf::from(&cfg.output));
    let format = format.map(OutputFormat::from).unwrap_or(cfg.format);
    let model = load_model(&model_path)?;

    eprintln!("Generating {} → {}", model_path.display(), output.display());
    log::debug!("writing {} documents", format.extension());
    let mut reporter = Reporter::new();
    let mut generator = OpenApiGenerator::builder()
        .reporter(&mut reporter)
        .model(&model)
        .output(&output)
        .names(&DefaultNames)
        .binding(&HttpBinding)
        .packages(&VersionPackages)
        .format(format)
        .build()?;
    generator.run().context("failed to generate OpenAPI documents")?;

    eprintln!(
        "Generated {} documents in {}",
        model.versions().count(),
        output.display()
    );
    Ok(())
}

fn cmd_validate(path: &Path) -> Result<()> {
    let model = load_model(path)?;

    eprintln!("Valid model: {}", path.display());
    for service in &model.services {
        eprintln!("  Service: {}", service.name);
        for version in &service.versions {
            eprintln!(
                "    {}: {} types, {} resources, {} paths",
                version.name,
                version.types().filter(|(_, t)| t.is_enum() || t.is_struct()).count(),
                version.resources().count(),
                version.paths().len()
            );
            if version.root().is_none() {
                eprintln!("    warning: {} has no root resource", version.name);
            }
        }
    }

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(path: &Path, format: InspectFormat) -> Result<()> {
    let model = load_model(path)?;

    let summary = build_inspect_summary(&model);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(model: &Model) -> serde_json::Value {
    let versions: Vec<serde_json::Value> = model
        .versions()
        .map(|version| {
            let mut paths: Vec<String> = version
                .paths()
                .iter()
                .map(|path| absolute_path(version, path))
                .collect();
            paths.sort();
            paths.dedup();

            let schemas: Vec<String> = version
                .types()
                .filter(|(_, t)| t.is_enum() || t.is_struct())
                .map(|(_, t)| DefaultNames.schema_name(t))
                .collect();

            serde_json::json!({
                "service": version.service().to_string(),
                "version": version.name.to_string(),
                "package": VersionPackages.version_package(version),
                "paths": paths,
                "schemas": schemas,
            })
        })
        .collect();

    serde_json::json!({ "versions": versions })
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
