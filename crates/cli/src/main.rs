//! Promotion decoder command-line entry point

mod output;

use std::io::{self, BufRead};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use promo_decoder_config::{constants, load_settings, Settings};
use promo_decoder_core::compare_unit_prices;
use promo_decoder_text_processing::PromotionDecoder;

#[derive(Parser)]
#[command(
    about = env!("CARGO_PKG_DESCRIPTION"),
    version = env!("CARGO_PKG_VERSION")
)]
struct Args {
    /// Configuration overlay, loaded from config/{env}.*
    #[arg(long, global = true, env = constants::env::ENV_VAR)]
    env: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify promotional phrases (one per argument, or one per stdin line)
    Decode { phrases: Vec<String> },

    /// Capture a phrase from the configured source and classify it
    Capture,

    /// Compare the unit prices of two offers
    Compare {
        #[arg(long)]
        price_a: f64,
        #[arg(long)]
        amount_a: f64,
        #[arg(long)]
        price_b: f64,
        #[arg(long)]
        amount_b: f64,
    },
}

fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!(
            "promo_decoder_cli={0},promo_decoder_text_processing={0},promo_decoder_config={0}",
            level
        )
        .into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(io::stderr).boxed()
    };
    subscriber.with(fmt_layer).init();
}

fn read_stdin_phrases() -> Result<Vec<String>> {
    let mut phrases = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            phrases.push(line);
        }
    }
    Ok(phrases)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Priority: env vars > config/{env}.* > config/default.* > defaults
    let config = match load_settings(args.env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        },
    };

    init_tracing(&config);
    tracing::debug!(
        env = args.env.as_deref().unwrap_or("default"),
        "Configuration loaded"
    );

    let decoder = PromotionDecoder::from_settings(&config);

    match args.command {
        Command::Decode { phrases } => {
            let phrases = if phrases.is_empty() {
                read_stdin_phrases()?
            } else {
                phrases
            };

            for phrase in &phrases {
                match decoder.decode_input(phrase) {
                    Some(result) => output::print_result(phrase, &result, args.json)?,
                    None => tracing::warn!(
                        phrase = %phrase,
                        min_chars = config.decoder.min_input_chars,
                        "Skipping input shorter than the minimum length"
                    ),
                }
            }
        },
        Command::Capture => {
            let decoded = decoder.decode_capture().await?;
            output::print_result(&decoded.text, &decoded.result, args.json)?;
        },
        Command::Compare {
            price_a,
            amount_a,
            price_b,
            amount_b,
        } => {
            let Some(comparison) = compare_unit_prices((price_a, amount_a), (price_b, amount_b))
            else {
                bail!("Both offers need a non-zero price and a positive amount");
            };
            output::print_comparison(&comparison, args.json)?;
        },
    }

    Ok(())
}
