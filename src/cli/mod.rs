pub mod banks;
pub mod completions;
pub mod config;
pub mod summary;
pub mod totals;
pub mod words;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use rust_decimal::Decimal;

use peticao::money::{check_amount, parse_amount};

/// Amount arguments take the same forms the forms accept: `1234.56`,
/// `1.234,56`, `R$ 1.234,56`.
pub(crate) fn amount_arg(raw: &str) -> std::result::Result<Decimal, String> {
    parse_amount(raw).map_err(|e| e.to_string())
}

/// Damage overrides feed the totals, so they are bounded like charges.
pub(crate) fn damage_arg(raw: &str) -> std::result::Result<Decimal, String> {
    parse_amount(raw)
        .and_then(|v| check_amount("damage", v))
        .map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(
    name = "peticao",
    version,
    about = "Charge totals and written-out amounts for consumer-banking petitions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write an amount out in words ("por extenso").
    Words {
        /// Amount, e.g. 1234.56 or 1.234,56
        #[arg(value_parser = amount_arg, allow_hyphen_values = true)]
        amount: Decimal,
        /// Prefix the numeral: R$ 1.234,56 (mil duzentos ...)
        #[arg(long)]
        numeral: bool,
    },
    /// Compute totals for a charge sheet (CSV or JSON).
    Totals {
        /// Path to the charge sheet
        file: PathBuf,
        /// Moral damage (default from settings)
        #[arg(long, value_parser = damage_arg)]
        moral: Option<Decimal>,
        /// Wasted-time damage (default from settings)
        #[arg(long = "wasted-time", value_parser = damage_arg)]
        wasted_time: Option<Decimal>,
    },
    /// Print the petition summary for a case file.
    Summary {
        /// Path to the case file (JSON)
        file: PathBuf,
    },
    /// List the built-in defendant banks.
    Banks {
        /// Show only banks whose name contains this text
        #[arg(long)]
        find: Option<String>,
    },
    /// Show or change settings.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Print a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current settings and where they are stored.
    Show,
    /// Update one or more settings.
    Set {
        /// Office name shown on summaries
        #[arg(long)]
        office: Option<String>,
        /// City used when the client has none
        #[arg(long)]
        city: Option<String>,
        /// State used when the client has none
        #[arg(long)]
        state: Option<String>,
        /// Default moral damage
        #[arg(long, value_parser = damage_arg)]
        moral: Option<Decimal>,
        /// Default wasted-time damage
        #[arg(long = "wasted-time", value_parser = damage_arg)]
        wasted_time: Option<Decimal>,
    },
}
