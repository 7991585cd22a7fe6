// scanlib test application -- CLI tool for exercising the Uniden backend
// against real hardware or a mock transport.
//
// Usage:
//   scanlib-test-app --model BCD396T --port /dev/ttyUSB0 info
//   scanlib-test-app --model BCD996T --port /dev/ttyUSB0 --baud 57600 freq get
//   scanlib-test-app --model BCD396T --mock info
//   scanlib-test-app list

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use scanlib::Scanner;
use scanlib::uniden::{UnidenBuilder, UnidenScanner, models};
use scanlib_test_harness::MockTransport;

// ---------------------------------------------------------------------------
// CLI argument definitions
// ---------------------------------------------------------------------------

/// scanlib test application -- exercises scanner backends from the command line.
#[derive(Parser)]
#[command(name = "scanlib-test-app", version, about)]
struct Cli {
    /// Scanner model name (e.g. BCD396T, BCD996T).
    /// Required for all commands except `list`.
    #[arg(long)]
    model: Option<String>,

    /// Serial port path (e.g. /dev/ttyUSB0, COM3).
    /// Required unless --mock is used.
    #[arg(long)]
    port: Option<String>,

    /// Override the default baud rate for this model.
    #[arg(long)]
    baud: Option<u32>,

    /// Use a mock transport instead of a real serial port.
    /// Useful for verifying CLI parsing and builder wiring without hardware.
    #[arg(long)]
    mock: bool,

    /// Enable debug logging (RUST_LOG overrides this).
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print scanner identification and capabilities.
    Info,

    /// Frequency operations.
    Freq {
        #[command(subcommand)]
        action: FreqAction,
    },

    /// List all supported scanner models.
    List,
}

#[derive(Subcommand)]
enum FreqAction {
    /// Read the currently tuned frequency.
    Get,
    /// Tune to a frequency (in Hz).
    Set {
        /// Frequency in hertz (e.g. 146525000).
        freq_hz: u64,
    },
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Format a frequency in Hz as a human-readable MHz string.
fn format_freq(hz: u64) -> String {
    let mhz = hz as f64 / 1_000_000.0;
    format!("{mhz:.4} MHz")
}

/// Normalize a model name for case-insensitive comparison.
/// Strips hyphens and converts to lowercase: "BCD-396T" -> "bcd396t".
fn normalize_model(name: &str) -> String {
    name.to_lowercase().replace('-', "")
}

/// Look up a Uniden model by name (case-insensitive, hyphen-insensitive).
fn lookup_model(name: &str) -> Result<models::UnidenModel> {
    let norm = normalize_model(name);
    let result = match norm.as_str() {
        "bcd396t" => models::bcd396t(),
        "bcd996t" => models::bcd996t(),
        _ => {
            let known: Vec<&str> = models::all_uniden_models().iter().map(|m| m.name).collect();
            bail!(
                "unknown model '{}'. Supported models: {}",
                name,
                known.join(", ")
            );
        }
    };
    Ok(result)
}

// ---------------------------------------------------------------------------
// Scanner construction
// ---------------------------------------------------------------------------

/// Construct a scanner from CLI arguments.
async fn create_scanner(cli: &Cli) -> Result<UnidenScanner> {
    let model_name = cli
        .model
        .as_deref()
        .context("--model is required for this command")?;
    let model = lookup_model(model_name)?;

    let mut builder = UnidenBuilder::new(model.clone());

    if let Some(baud) = cli.baud {
        builder = builder.baud_rate(baud);
    }

    if cli.mock {
        let scanner = builder.build_with_transport(Box::new(MockTransport::new()));
        println!("Connected (mock transport) -- Uniden {}", model.name);
        Ok(scanner)
    } else {
        let port = cli
            .port
            .as_deref()
            .context("--port is required when not using --mock")?;
        let baud = cli.baud.unwrap_or(model.default_baud_rate);

        let scanner = builder
            .serial_port(port)
            .build()
            .await
            .with_context(|| format!("failed to open serial port {port} at {baud} baud"))?;

        println!("Connected to {port} at {baud} baud -- Uniden {}", model.name);
        Ok(scanner)
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

async fn cmd_info(scanner: &UnidenScanner) -> Result<()> {
    let info = scanner.info();
    let caps = scanner.capabilities();

    println!("Scanner Information");
    println!("  Manufacturer:    {}", info.manufacturer);
    println!("  Model:           {}", info.model_name);
    println!("  Model ID:        {}", info.model_id);
    println!();
    println!("Capabilities");
    println!("  Model ident:     {}", caps.has_model_ident);
    println!("  Freq control:    {}", caps.has_frequency_control);
    println!("  Memory channels: {}", caps.memory_channels);
    println!();

    match scanner.get_info().await {
        Some(ident) => {
            println!("Radio identification:");
            for line in ident.lines() {
                println!("  {line}");
            }
        }
        None => println!("Radio did not answer the identification query."),
    }

    Ok(())
}

async fn cmd_freq_get(scanner: &UnidenScanner) -> Result<()> {
    let freq = scanner.get_frequency().await?;
    println!("{}", format_freq(freq));
    Ok(())
}

async fn cmd_freq_set(scanner: &UnidenScanner, freq_hz: u64) -> Result<()> {
    scanner.set_frequency(freq_hz).await?;
    println!("Tuned to {}", format_freq(freq_hz));
    Ok(())
}

fn cmd_list() -> Result<()> {
    let entries = scanlib::supported_scanners();

    if entries.is_empty() {
        println!("No models found.");
        return Ok(());
    }

    println!("{:<14}  Model", "Manufacturer");
    println!("{:<14}  {}", "-".repeat(14), "-".repeat(12));
    for entry in &entries {
        println!("{:<14}  {}", entry.manufacturer.to_string(), entry.model_name);
    }

    println!();
    println!("{} models total.", entries.len());

    Ok(())
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    // The `list` command does not require a scanner connection.
    if matches!(&cli.command, Command::List) {
        return cmd_list();
    }

    let scanner = create_scanner(&cli).await?;

    match &cli.command {
        Command::Info => cmd_info(&scanner).await,
        Command::Freq { action } => match action {
            FreqAction::Get => cmd_freq_get(&scanner).await,
            FreqAction::Set { freq_hz } => cmd_freq_set(&scanner, *freq_hz).await,
        },
        Command::List => unreachable!("list handled above"),
    }
}
