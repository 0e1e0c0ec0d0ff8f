//! PVC Converter CLI
//!
//! Reads PersistentVolumeClaim objects, console claims and form values from
//! JSON or YAML files and prints the converted result as JSON on stdout.
//! Logs go to stderr.

use clap::{Parser, Subcommand};
use k8s_openapi::api::core::v1::PersistentVolumeClaim;
use k8s_openapi::api::storage::v1::StorageClass as ApiStorageClass;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pvc_converter::{
    application_form_to_claims, volume_form_to_claim, ApplicationFormValues, ClaimConverter,
    ConverterConfig, Manifest, Result, StorageClaim, StorageClass, VolumeFormValues,
};

// =============================================================================
// CLI Arguments
// =============================================================================

/// PVC Converter - PersistentVolumeClaim conversion and JSON patch generation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Converter configuration file (YAML or JSON)
    #[arg(long, env = "PVC_CONVERTER_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, env = "LOG_JSON", global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a PersistentVolumeClaim API object into a console claim
    FromApi {
        /// PersistentVolumeClaim object
        claim: PathBuf,
        /// List of StorageClass objects to resolve the class against
        #[arg(long)]
        storage_classes: Option<PathBuf>,
        /// Raw manifest to attach to the claim
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
    /// Build the create request body for a console claim
    Payload {
        /// Console claim
        claim: PathBuf,
    },
    /// Compute the JSON patch between two console claims
    Patch {
        /// Claim before the update
        old: PathBuf,
        /// Claim after the update
        new: PathBuf,
    },
    /// Convert application form values into claims
    AppForm {
        /// Application form values
        form: PathBuf,
    },
    /// Convert standalone volume form values into a claim
    VolumeForm {
        /// Volume form values
        form: PathBuf,
    },
    /// Print the JSON schema of the configuration file
    ConfigSchema,
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args);

    debug!("Starting PVC converter {}", pvc_converter::VERSION);

    let config = match &args.config {
        Some(path) => ConverterConfig::load(path)?,
        None => ConverterConfig::default(),
    };
    let converter = ClaimConverter::new(config);

    match args.command {
        Command::FromApi {
            claim,
            storage_classes,
            manifest,
        } => {
            let pvc: PersistentVolumeClaim = read_document(&claim)?;
            let catalog: Vec<StorageClass> = match storage_classes {
                Some(path) => read_document::<Vec<ApiStorageClass>>(&path)?
                    .iter()
                    .map(StorageClass::from)
                    .collect(),
                None => Vec::new(),
            };
            let manifest = manifest
                .map(|path| std::fs::read_to_string(path).map(Manifest::new))
                .transpose()?;
            let claim = converter.api_to_claim(&pvc, &catalog, manifest.as_ref())?;
            print_json(&claim)
        }
        Command::Payload { claim } => {
            let claim: StorageClaim = read_document(&claim)?;
            print_json(&converter.create_payload(&claim))
        }
        Command::Patch { old, new } => {
            let old: StorageClaim = read_document(&old)?;
            let new: StorageClaim = read_document(&new)?;
            let patch = converter.patch_payload(&old, &new)?;
            info!(
                "{} operation(s), content type {}",
                patch.0.len(),
                pvc_converter::patch::CONTENT_TYPE
            );
            print_json(&patch)
        }
        Command::AppForm { form } => {
            let form: ApplicationFormValues = read_document(&form)?;
            print_json(&application_form_to_claims(&form)?)
        }
        Command::VolumeForm { form } => {
            let form: VolumeFormValues = read_document(&form)?;
            print_json(&volume_form_to_claim(&form)?)
        }
        Command::ConfigSchema => print_json(&schemars::schema_for!(ConverterConfig)),
    }
}

// =============================================================================
// Input / Output
// =============================================================================

/// Read a JSON or YAML document
fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!("Reading {}", path.display());
    let source = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&source)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// =============================================================================
// Logging Setup
// =============================================================================

fn init_logging(args: &Args) {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
