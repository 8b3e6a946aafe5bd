use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use modelschema_cli::catalog::ASPECT_REGISTRY;
use modelschema_cli::config::{self, ConfigMerger, ModelschemaConfig, OutputFormat};
use modelschema_cli::declarations::load_declarations;
use modelschema_core::{SchemaError, StructSchema};
use modelschema_render::{render_schema_md, render_schema_text};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "modelschema",
    version,
    about = "Build and inspect struct schemas from property and aspect declarations."
)]
struct Cli {
    /// Config file (default: ./modelschema.toml if present).
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build the schema declared in a file and print it.
    Inspect(InspectArgs),
    /// Build every declared schema and report which ones are invalid.
    Check(CheckArgs),
    /// List the aspects a declaration file may use.
    ListAspects(ListAspectsArgs),
}

#[derive(Debug, Parser)]
struct InspectArgs {
    /// Declaration file (.json or .toml).
    file: Utf8PathBuf,

    /// Output format (default: from config, else text).
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Debug, Parser)]
struct CheckArgs {
    /// Declaration files (.json or .toml).
    #[arg(required = true)]
    files: Vec<Utf8PathBuf>,

    /// Stop at the first file that is not ok.
    #[arg(long, default_value_t = false)]
    fail_fast: bool,
}

#[derive(Debug, Parser)]
struct ListAspectsArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: ListFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ListFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match real_main() {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            // Schema violations are declaration problems, not tool failures.
            if e.downcast_ref::<SchemaError>().is_some() {
                ExitCode::from(2)
            } else {
                ExitCode::from(1)
            }
        }
    }
}

fn real_main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Inspect(args) => cmd_inspect(cli.config.as_deref(), args),
        Command::Check(args) => cmd_check(cli.config.as_deref(), args),
        Command::ListAspects(args) => cmd_list_aspects(args),
    }
}

fn load_file_config(explicit: Option<&Utf8Path>) -> anyhow::Result<ModelschemaConfig> {
    config::load_or_default(explicit, Utf8Path::new(".")).context("load modelschema.toml config")
}

fn build_schema(path: &Utf8Path) -> anyhow::Result<StructSchema> {
    let decl = load_declarations(path)?;
    let schema = decl
        .build()
        .with_context(|| format!("build schema from {}", path))?;
    Ok(schema)
}

fn cmd_inspect(config: Option<&Utf8Path>, args: InspectArgs) -> anyhow::Result<ExitCode> {
    let merged = ConfigMerger::new(load_file_config(config)?).merge_inspect_args(args.format);
    debug!("merged config: {:?}", merged);

    let schema = build_schema(&args.file)?;
    let snapshot = schema.snapshot();

    match merged.format {
        OutputFormat::Text => print!("{}", render_schema_text(&snapshot)),
        OutputFormat::Markdown => print!("{}", render_schema_md(&snapshot)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(config: Option<&Utf8Path>, args: CheckArgs) -> anyhow::Result<ExitCode> {
    let merged = ConfigMerger::new(load_file_config(config)?).merge_check_args(args.fail_fast);
    debug!("merged config: {:?}", merged);

    let mut invalid = 0usize;
    let mut failed = 0usize;

    for path in &args.files {
        match build_schema(path) {
            Ok(schema) => {
                println!(
                    "ok       {} ({}: {} properties, {} aspects)",
                    path,
                    schema.type_identity(),
                    schema.property_count(),
                    schema.aspect_count()
                );
                continue;
            }
            Err(e) if e.downcast_ref::<SchemaError>().is_some() => {
                invalid += 1;
                println!("invalid  {}: {:#}", path, e);
            }
            Err(e) => {
                failed += 1;
                println!("error    {}: {:#}", path, e);
            }
        }
        if merged.fail_fast {
            break;
        }
    }

    debug!(
        files = args.files.len(),
        invalid, failed, "check finished"
    );

    // Runtime failures take precedence over schema violations.
    let code = if failed > 0 {
        ExitCode::from(1)
    } else if invalid > 0 {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    };
    Ok(code)
}

fn cmd_list_aspects(args: ListAspectsArgs) -> anyhow::Result<ExitCode> {
    match args.format {
        ListFormat::Text => {
            println!("Declarable aspects:\n");
            println!("  {:<22} {:<16} TITLE", "KEY", "FIELDS");
            println!("  {:<22} {:<16} -----", "---", "------");
            for a in ASPECT_REGISTRY {
                println!("  {:<22} {:<16} {}", a.key, a.fields.join(", "), a.title);
            }
        }
        ListFormat::Json => {
            let aspects: Vec<_> = ASPECT_REGISTRY
                .iter()
                .map(|a| {
                    serde_json::json!({
                        "key": a.key,
                        "title": a.title,
                        "fields": a.fields,
                        "description": a.description,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&aspects)?);
        }
    }
    Ok(ExitCode::SUCCESS)
}
