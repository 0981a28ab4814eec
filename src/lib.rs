//! Monetary figures for consumer-banking petitions: charge totals with the
//! double-refund rule, and amounts written out in Brazilian Portuguese.

pub mod catalog;
pub mod error;
pub mod extenso;
pub mod fmt;
pub mod importer;
pub mod logging;
pub mod models;
pub mod money;
pub mod reports;
pub mod settings;
pub mod totals;

pub use extenso::to_words;
pub use models::{ChargeEntry, DamageInputs, MonetaryTotals};
