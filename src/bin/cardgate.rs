//! CLI tool for card validation.
//!
//! # Usage
//!
//! ```bash
//! # Validate card number, expiration date and CVV
//! cardgate validate 4834851062286596 10/27 848
//!
//! # Same, as JSON
//! cardgate validate 4834851062286596 10/27 848 --output json
//!
//! # Mask a card number
//! cardgate mask 4834851062286596
//!
//! # Luhn check only
//! cardgate luhn 4834851062286596
//!
//! # Detect network
//! cardgate detect 378282246310005
//! ```

use std::process::ExitCode;

use cardgate::{
    detect::classify_str, mask::mask_card_number, passes_luhn, validate_card, CardInput,
    ValidationVerdict,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "cardgate")]
#[command(author, version, about = "Card number, expiration date and CVV validation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate card number, expiration date and CVV
    Validate {
        /// Card number, digits only
        card_number: String,

        /// Expiration date (MM/YY)
        expiration_date: String,

        /// Card verification value
        cvv: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Mask a card number, keeping the last four characters
    Mask {
        /// Card number to mask
        card_number: String,
    },

    /// Check if a card passes Luhn algorithm
    Luhn {
        /// Card number to check
        card_number: String,
    },

    /// Detect card network from number
    Detect {
        /// Card number
        card_number: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct VerdictOutput<'a> {
    card_number: &'a str,
    card_type: Option<&'static str>,
    is_valid_luhn: bool,
    expiration_date: &'a str,
    is_valid_expiration: bool,
    cvv: &'static str,
    is_valid_cvv: bool,
    valid_card_data: bool,
}

impl<'a> From<&'a ValidationVerdict> for VerdictOutput<'a> {
    fn from(verdict: &'a ValidationVerdict) -> Self {
        let network = verdict.network();
        Self {
            card_number: verdict.card_number(),
            card_type: network.is_recognized().then(|| network.name()),
            is_valid_luhn: verdict.is_valid_luhn(),
            expiration_date: verdict.expiration_date(),
            is_valid_expiration: verdict.is_valid_expiration(),
            cvv: verdict.cvv(),
            is_valid_cvv: verdict.is_valid_cvv(),
            valid_card_data: verdict.is_valid(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            card_number,
            expiration_date,
            cvv,
            output,
        } => cmd_validate(&CardInput::new(&card_number, &expiration_date, &cvv), output),
        Commands::Mask { card_number } => cmd_mask(&card_number),
        Commands::Luhn { card_number } => cmd_luhn(&card_number),
        Commands::Detect { card_number } => cmd_detect(&card_number),
    }
}

fn cmd_validate(input: &CardInput<'_>, output: OutputFormat) -> ExitCode {
    match validate_card(input) {
        Ok(verdict) => {
            let report = VerdictOutput::from(&verdict);
            match output {
                OutputFormat::Text => {
                    println!("Card Number: {}", report.card_number);
                    println!("Card Type: {}", report.card_type.unwrap_or("Unknown"));
                    println!("Luhn: {}", pass_fail(report.is_valid_luhn));
                    println!(
                        "Expiration: {} ({})",
                        report.expiration_date,
                        pass_fail(report.is_valid_expiration)
                    );
                    println!("CVV: {} ({})", report.cvv, pass_fail(report.is_valid_cvv));
                    println!("Valid: {}", if report.valid_card_data { "yes" } else { "no" });
                }
                OutputFormat::Json => match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                },
            }
            if verdict.is_valid() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            match output {
                OutputFormat::Text => {
                    println!("Valid: no");
                    println!("Error: {}", e);
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::json!({ "error": e.to_string() }));
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn cmd_mask(card_number: &str) -> ExitCode {
    println!("{}", mask_card_number(card_number));
    ExitCode::SUCCESS
}

fn cmd_luhn(card_number: &str) -> ExitCode {
    if passes_luhn(card_number) {
        println!("Luhn check: PASS");
        ExitCode::SUCCESS
    } else {
        println!("Luhn check: FAIL");
        ExitCode::FAILURE
    }
}

fn cmd_detect(card_number: &str) -> ExitCode {
    let network = classify_str(card_number);
    println!("Detected Network: {}", network);
    if network.is_recognized() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn pass_fail(ok: bool) -> &'static str {
    if ok {
        "PASS"
    } else {
        "FAIL"
    }
}
