use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use swg_core::config::{self, CONFIG_FILE_NAME, SwgConfig};
use swg_core::manifest::{self, ListingManifest};
use swg_core::model::ResourceListing;
use swg_core::naming::{file_name_from_path, listing_file_name};
use swg_core::{FileStore, SchemaVersion, SwaggerFormat, SwaggerWriter};

#[derive(Parser)]
#[command(name = "swg", about = "Swagger 1.x document writer", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write api-docs and one declaration per resource from a manifest
    Generate {
        /// Path to the manifest (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Document format: json, yaml or xml
        #[arg(short, long)]
        format: Option<String>,

        /// Swagger version to write: 1.1 or 1.2
        #[arg(long)]
        swagger_version: Option<String>,
    },

    /// Check that a manifest builds a valid listing
    Validate {
        /// Path to the manifest
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Summarize the listing a manifest builds
    Inspect {
        /// Path to the manifest
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new swg configuration
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
            format,
            swagger_version,
        } => cmd_generate(input, output, format, swagger_version),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "swg", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<SwgConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    Ok(config::load_config(&config_path)?)
}

fn load_manifest(path: &Path) -> Result<ListingManifest> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let parsed = match ext {
        "json" => manifest::from_json(&content),
        _ => manifest::from_yaml(&content),
    }
    .with_context(|| format!("failed to parse {}", path.display()))?;
    log::debug!(
        "loaded manifest {} ({} resources)",
        path.display(),
        parsed.resources.len()
    );
    Ok(parsed)
}

fn cmd_generate(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<String>,
    swagger_version: Option<String>,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();

    // Resolve format and version before anything is written.
    let format = match format {
        Some(f) => f.parse::<SwaggerFormat>()?,
        None => cfg.format,
    };
    let version = match swagger_version {
        Some(v) => Some(v.parse::<SchemaVersion>()?),
        None => cfg.schema_version,
    };

    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output = output.unwrap_or_else(|| PathBuf::from(&cfg.output));

    let mut parsed = load_manifest(&input)?;
    if let Some(version) = version {
        parsed.swagger_version = version.to_string();
    }
    let listing = parsed.into_listing()?;

    eprintln!(
        "Generating Swagger {} ({}) → {}",
        listing.schema_version,
        format,
        output.display()
    );
    let mut store = FileStore::new(&output);
    SwaggerWriter::new(format)
        .write_swagger(&mut store, &listing)
        .with_context(|| format!("failed to write documents to {}", output.display()))?;

    eprintln!("  wrote {}", output.join(listing_file_name(format)).display());
    for entry in listing.apis() {
        let name = file_name_from_path(&entry.path, format);
        eprintln!("  wrote {}", output.join(name).display());
    }
    eprintln!(
        "Generated {} files in {}",
        listing.apis().len() + 1, // +1 for the resource listing
        output.display()
    );
    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let listing = load_manifest(&input)?.into_listing()?;

    eprintln!("Valid Swagger {} manifest", listing.schema_version);
    eprintln!("  API version: {}", listing.api_version);
    eprintln!("  Resources: {}", listing.apis().len());

    let apis: usize = listing.apis().iter().map(|e| e.declaration.api_count()).sum();
    let operations: usize = listing
        .apis()
        .iter()
        .flat_map(|e| e.declaration.apis())
        .map(|api| api.operations.len())
        .sum();
    eprintln!("  Apis: {}", apis);
    eprintln!("  Operations: {}", operations);

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat) -> Result<()> {
    let listing = load_manifest(&input)?.into_listing()?;

    let summary = build_inspect_summary(&listing);

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

fn build_inspect_summary(listing: &ResourceListing) -> serde_json::Value {
    let resources: Vec<serde_json::Value> = listing
        .apis()
        .iter()
        .map(|entry| {
            let decl = &entry.declaration;
            let operations: Vec<serde_json::Value> = decl
                .apis()
                .iter()
                .flat_map(|api| {
                    api.operations.iter().map(move |op| {
                        serde_json::json!({
                            "nickname": op.nickname,
                            "method": op.method.as_str(),
                            "path": api.path,
                        })
                    })
                })
                .collect();
            serde_json::json!({
                "path": entry.path,
                "file": file_name_from_path(&entry.path, SwaggerFormat::Json),
                "base_path": decl.base_path(),
                "models": decl.models().map(|m| m.id.as_str()).collect::<Vec<_>>(),
                "operations": operations,
            })
        })
        .collect();

    serde_json::json!({
        "swagger_version": listing.schema_version.identifier(),
        "api_version": listing.api_version,
        "title": listing.info.title,
        "resources": resources,
    })
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
