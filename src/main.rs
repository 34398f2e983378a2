//! vulners-sbom: extract OS packages from SBOMs and audit them with Vulners
//!
//! Reads SPDX, Syft and CycloneDX documents and reports their deb/rpm
//! packages and operating system.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vulners_sbom::{
    cli,
    config::{file::generate_example_config, AppConfig, CliOverrides},
    pipeline::exit_codes,
    reports::ReportFormat,
};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported SBOM Formats:",
        "\n  SPDX:      2.2 (JSON)",
        "\n  Syft:      JSON",
        "\n  CycloneDX: 1.4 (JSON, XML)",
        "\n\nPackage ecosystems:",
        "\n  deb, rpm",
        "\n\nOutput Formats:",
        "\n  summary, json"
    )
}

#[derive(Parser)]
#[command(name = "vulners-sbom")]
#[command(version, long_version = build_long_version())]
#[command(about = "Extract OS packages from SBOMs and audit them with Vulners", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Vulnerabilities found (with --fail-on-vuln)
    3  Error occurred

EXAMPLES:
    # List the packages and OS of several SBOMs
    vulners-sbom extract bom.cdx.json image.spdx.json

    # Audit an SBOM, failing the build on findings
    VULNERS_API_KEY=... vulners-sbom audit -i bom.cdx.xml --fail-on-vuln

    # Machine-readable audit output
    vulners-sbom audit -i syft.json --format json -O audit.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `extract` subcommand
#[derive(Parser)]
struct ExtractArgs {
    /// SBOM files to read
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output format
    #[arg(long)]
    format: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `audit` subcommand
#[cfg(feature = "audit")]
#[derive(Parser)]
struct AuditArgs {
    /// Input file name. Supported formats: CycloneDX json or xml, SPDX json or Syft json
    #[arg(short, long)]
    input: PathBuf,

    /// Vulners API key, generated at https://vulners.com/userinfo with the 'api' scope
    #[arg(short = 'k', long, env = "VULNERS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Output format
    #[arg(long)]
    format: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long, alias = "output", short_alias = 'o')]
    output_file: Option<PathBuf>,

    /// API request timeout in seconds
    #[arg(long)]
    api_timeout: Option<u64>,

    /// Exit with code 1 if vulnerabilities are found
    #[arg(long)]
    fail_on_vuln: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the packages and operating system found in SBOM files
    Extract(ExtractArgs),

    /// Audit the packages of an SBOM against the Vulners database
    #[cfg(feature = "audit")]
    Audit(AuditArgs),

    /// Print an example configuration file
    InitConfig,
}

/// Configuration from the discovered file, with command-line values on top
fn resolve_config(cli: &Cli, mut overrides: CliOverrides) -> Result<AppConfig> {
    overrides.quiet = cli.quiet;
    overrides.no_color = cli.no_color;

    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Loaded configuration from {}", path.display());
    }
    cli::ensure_valid(&config)?;
    Ok(config)
}

fn run(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Commands::Extract(args) => {
            let config = resolve_config(
                cli,
                CliOverrides {
                    format: args.format,
                    output_file: args.output_file.clone(),
                    ..CliOverrides::default()
                },
            )?;
            cli::run_extract(&args.inputs, &config)
        }

        #[cfg(feature = "audit")]
        Commands::Audit(args) => {
            let config = resolve_config(
                cli,
                CliOverrides {
                    format: args.format,
                    output_file: args.output_file.clone(),
                    api_key: args.api_key.clone(),
                    timeout_secs: args.api_timeout,
                    fail_on_vuln: args.fail_on_vuln,
                    ..CliOverrides::default()
                },
            )?;
            cli::run_audit(&args.input, &config)
        }

        Commands::InitConfig => {
            print!("{}", generate_example_config());
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            cli::report_failure(&e);
            exit_codes::ERROR
        }
    };
    std::process::exit(exit_code);
}
