//! Command-line NDC ⇄ RXCUI translator.
//!
//! # Usage
//!
//! ```bash
//! # Prompt for an NDC and print its RXCUI
//! cargo run --bin translate -- ndc
//!
//! # NDC with name and term type
//! cargo run --bin translate -- ndc 0069-4405-68 --properties
//!
//! # NDCs of an RXCUI, each with its drug name
//! cargo run --bin translate -- rxcui 206765 --names
//!
//! # Machine-readable output
//! cargo run --bin translate -- rxcui 206765 --json
//! ```
//!
//! # Environment Variables
//!
//! - `RXNAV_BASE_URL` (optional): RxNorm REST root
//! - `RXNAV_TIMEOUT_SECS` (optional): upstream request timeout
//!
//! A failed translation prints `Error: <message>` and exits with status 1.

use ndc_rxcui::application::services::TranslationService;
use ndc_rxcui::config::{MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS, check_base_url};
use ndc_rxcui::domain::entities::{NdcTranslation, RxcuiResolution, RxcuiTranslation};
use ndc_rxcui::domain::error::TranslationError;
use ndc_rxcui::infrastructure::rxnav::{DEFAULT_BASE_URL, RxNavClient};
use ndc_rxcui::telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

/// Translate between NDC and RXCUI using the RxNorm API.
#[derive(Parser)]
#[command(name = "translate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// RxNorm REST root
    #[arg(
        long,
        env = "RXNAV_BASE_URL",
        default_value = DEFAULT_BASE_URL,
        value_parser = parse_base_url,
        global = true
    )]
    base_url: String,

    /// Upstream request timeout in seconds
    #[arg(
        long,
        env = "RXNAV_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS),
        global = true
    )]
    timeout: u64,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an NDC to its RXCUI
    Ndc {
        /// NDC to resolve (prompted for when omitted)
        ndc: Option<String>,

        /// Also look up the drug name and term type
        #[arg(short, long)]
        properties: bool,
    },

    /// List the NDCs of an RXCUI
    Rxcui {
        /// RXCUI to resolve (prompted for when omitted)
        rxcui: Option<String>,

        /// Look up the drug name of every NDC
        #[arg(short, long)]
        names: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    telemetry::init("warn", "text");

    let cli = Cli::parse();

    let client =
        RxNavClient::new(Duration::from_secs(cli.timeout)).context("Failed to build HTTP client")?;
    let translator = TranslationService::new(Arc::new(client), cli.base_url);

    let outcome = match cli.command {
        Commands::Ndc { ndc, properties } => {
            let ndc = identifier(ndc, "Enter the NDC")?;
            handle_ndc(&translator, &ndc, properties, cli.json).await
        }
        Commands::Rxcui { rxcui, names } => {
            let rxcui = identifier(rxcui, "Please enter an RXCUI")?;
            handle_rxcui(&translator, &rxcui, names, cli.json).await
        }
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Accepts absolute http(s) URLs only, as the server config does.
fn parse_base_url(value: &str) -> Result<String, String> {
    check_base_url(value)
        .map(|()| value.to_string())
        .map_err(|e| e.to_string())
}

/// Uses the argument if given, otherwise prompts for it.
fn identifier(arg: Option<String>, prompt: &str) -> Result<String> {
    let value = match arg {
        Some(v) => v,
        None => Input::<String>::new().with_prompt(prompt).interact_text()?,
    };
    Ok(value.trim().to_string())
}

/// Prints the RXCUI of an NDC, optionally with its properties.
async fn handle_ndc(
    translator: &TranslationService,
    ndc: &str,
    properties: bool,
    json: bool,
) -> Result<(), TranslationError> {
    if properties {
        let translation = translator.translate_ndc(ndc).await?;
        if json {
            print_json(&translation);
        } else {
            print_ndc_translation(&translation);
        }
        return Ok(());
    }

    let resolution = translator.resolve_rxcui(ndc).await?;
    if json {
        print_json(&serde_json::json!({
            "ndc": ndc,
            "rxcui": resolution.rxcui,
            "ndc_url": resolution.source_url,
        }));
    } else {
        print_rxcui(ndc, &resolution);
    }

    Ok(())
}

/// Prints the NDCs of an RXCUI, optionally with names.
async fn handle_rxcui(
    translator: &TranslationService,
    rxcui: &str,
    names: bool,
    json: bool,
) -> Result<(), TranslationError> {
    let translation = translator.translate_rxcui(rxcui, names).await?;

    if json {
        print_json(&translation);
    } else {
        print_ndc_list(&translation);
    }

    Ok(())
}

fn print_rxcui(ndc: &str, resolution: &RxcuiResolution) {
    println!(
        "The RXCUI for NDC {} is {}",
        ndc.cyan(),
        resolution.rxcui.bright_green().bold()
    );
    println!("API URL used: {}", resolution.source_url.bright_black());
}

fn print_ndc_translation(translation: &NdcTranslation) {
    println!(
        "The RXCUI for NDC {} is {}",
        translation.ndc.cyan(),
        translation.rxcui.bright_green().bold()
    );
    println!("  Term Type (TTY): {}", translation.term_type.bright_white());
    println!("  Name:            {}", translation.name.bright_white());
    println!();
    println!("API URL used for NDC:   {}", translation.ndc_url.bright_black());
    println!("API URL used for RXCUI: {}", translation.rxcui_url.bright_black());
}

/// # Output Format
///
/// ```text
/// The NDCs for RXCUI 206765 are:
///   0002-1200-30  Losartan Potassium 50 MG Oral Tablet
///   0002-1200-50  Unknown
///
///   Total: 2
/// API URL used: https://rxnav.nlm.nih.gov/REST/rxcui/206765/ndcs.json
/// ```
fn print_ndc_list(translation: &RxcuiTranslation) {
    println!(
        "The NDCs for RXCUI {} are:",
        translation.rxcui.bright_green().bold()
    );

    if translation.is_empty() {
        println!("  {}", "(none)".yellow());
    }

    for entry in &translation.ndcs {
        match &entry.name {
            None => println!("  {}", entry.ndc.cyan()),
            Some(name) if entry.is_unknown() => {
                println!("  {:<14} {}", entry.ndc.cyan(), name.yellow())
            }
            Some(name) => println!("  {:<14} {}", entry.ndc.cyan(), name),
        }
    }

    println!();
    println!(
        "  Total: {}",
        translation.len().to_string().bright_white().bold()
    );
    println!("API URL used: {}", translation.source_url.bright_black());
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
    }
}
