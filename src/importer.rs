use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{PeticaoError, Result};
use crate::fmt::parse_iso_date;
use crate::models::{CaseFile, ChargeEntry};
use crate::money::{check_amount, parse_amount};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Accept `YYYY-MM-DD` or the Brazilian `DD/MM/YYYY`; always return ISO.
/// Empty stays empty.
pub fn normalize_date(raw: &str) -> Result<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(String::new());
    }
    if raw.contains('/') {
        return chrono::NaiveDate::parse_from_str(raw, "%d/%m/%Y")
            .map(|d| d.format("%Y-%m-%d").to_string())
            .map_err(|e| PeticaoError::Date(format!("{raw:?}: {e}")));
    }
    parse_iso_date(raw).map(|d| d.format("%Y-%m-%d").to_string())
}

/// Negative or oversized values come from bad input upstream; the sums
/// never see them.
fn check_value(row: usize, value: Decimal) -> Result<()> {
    check_amount(&format!("charge {row}"), value).map(|_| ())
}

// ---------------------------------------------------------------------------
// CSV charge sheets
// ---------------------------------------------------------------------------

#[derive(serde::Deserialize)]
struct CsvRow {
    #[serde(default, alias = "data")]
    date: String,
    #[serde(default, alias = "descricao", alias = "descrição")]
    description: String,
    #[serde(alias = "valor")]
    value: String,
}

pub fn read_charges_csv<R: Read>(r: R) -> Result<Vec<ChargeEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(r);
    let mut charges = Vec::new();
    for (i, rec) in rdr.deserialize::<CsvRow>().enumerate() {
        let row = rec?;
        let n = i + 1;
        let value = parse_amount(&row.value)
            .map_err(|e| PeticaoError::Amount(format!("charge {n}: {e}")))?;
        check_value(n, value)?;
        let date = normalize_date(&row.date)
            .map_err(|e| PeticaoError::Date(format!("charge {n}: {e}")))?;
        charges.push(ChargeEntry {
            date,
            description: row.description,
            value,
        });
    }
    Ok(charges)
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Load a charge sheet: a JSON array of charges, or CSV with
/// `date,description,value` headers.
pub fn load_charges(path: &Path) -> Result<Vec<ChargeEntry>> {
    let charges = if is_json(path) {
        let content = std::fs::read_to_string(path)?;
        let mut charges: Vec<ChargeEntry> = serde_json::from_str(&content)?;
        validate_charges(&mut charges)?;
        charges
    } else {
        read_charges_csv(std::fs::File::open(path)?)?
    };
    tracing::debug!("loaded {} charges from {}", charges.len(), path.display());
    Ok(charges)
}

pub fn load_case(path: &Path) -> Result<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    let mut case: CaseFile = serde_json::from_str(&content)?;
    validate_charges(&mut case.charges)?;
    if let Some(v) = case.moral_damage {
        check_amount("moral_damage", v)?;
    }
    if let Some(v) = case.wasted_time_damage {
        check_amount("wasted_time_damage", v)?;
    }
    tracing::debug!(
        "loaded case for {:?} with {} charges from {}",
        case.client.name,
        case.charges.len(),
        path.display()
    );
    Ok(case)
}

fn validate_charges(charges: &mut [ChargeEntry]) -> Result<()> {
    for (i, c) in charges.iter_mut().enumerate() {
        check_value(i + 1, c.value)?;
        c.date = normalize_date(&c.date)
            .map_err(|e| PeticaoError::Date(format!("charge {}: {e}", i + 1)))?;
    }
    Ok(())
}
