use rust_decimal::Decimal;

use crate::error::Result;
use crate::fmt::{currency, currency_extended, date_long, date_short};
use crate::models::{CaseFile, DamageInputs, MonetaryTotals};
use crate::settings::Settings;

// ---------------------------------------------------------------------------
// Petition summary
// ---------------------------------------------------------------------------

pub struct ChargeLine {
    pub date: String,
    pub description: String,
    pub amount: String,
}

/// One figure with both renderings the petition quotes.
pub struct TotalLine {
    pub label: &'static str,
    pub numeral: String,
    pub extended: String,
}

pub struct Summary {
    pub charge_label: String,
    pub charges: Vec<ChargeLine>,
    pub totals: MonetaryTotals,
    pub lines: Vec<TotalLine>,
    /// "Neste sentido, os valores cobrados INDEVIDAMENTE ..." paragraph.
    pub repetition: String,
    /// "Dá-se à causa, o valor de ..." closing sentence.
    pub claim_value: String,
    pub place_and_date: String,
}

impl TotalLine {
    fn new(label: &'static str, value: Decimal) -> Result<Self> {
        Ok(Self {
            label,
            numeral: currency(value),
            extended: currency_extended(value)?,
        })
    }
}

/// Totals table shared by the `totals` and `summary` commands. The
/// wasted-time line only appears when that damage is claimed.
pub fn total_lines(totals: &MonetaryTotals, damages: &DamageInputs) -> Result<Vec<TotalLine>> {
    let mut lines = vec![
        TotalLine::new("Total cobrado", totals.total_charges)?,
        TotalLine::new("Dano material (em dobro)", totals.material_damage)?,
        TotalLine::new("Dano moral", damages.moral_damage)?,
    ];
    if damages.wasted_time_damage > Decimal::ZERO {
        lines.push(TotalLine::new("Tempo desperdiçado", damages.wasted_time_damage)?);
    }
    lines.push(TotalLine::new("Valor total", totals.total_value)?);
    Ok(lines)
}

pub fn build_summary(case: &CaseFile, settings: &Settings) -> Result<Summary> {
    let damages = case.damages(settings.damages());
    let totals = MonetaryTotals::compute(&case.charges, &damages);

    let charge_label = if case.charge_description.trim().is_empty() {
        case.petition_type.label().to_uppercase()
    } else {
        case.charge_description.trim().to_string()
    };

    let charges = case
        .charges
        .iter()
        .map(|c| ChargeLine {
            date: date_short(&c.date),
            description: if c.description.is_empty() {
                charge_label.clone()
            } else {
                c.description.clone()
            },
            amount: currency(c.value),
        })
        .collect();

    let repetition = format!(
        "Neste sentido, os valores cobrados INDEVIDAMENTE a título de \"{charge_label}\" soma a quantia de {}, com repetição do indébito (2x {}), totaliza o valor de {}, em virtude da devolução EM DOBRO.",
        currency_extended(totals.total_charges)?,
        currency(totals.total_charges),
        currency_extended(totals.material_damage)?,
    );
    let claim_value = format!(
        "Dá-se à causa, o valor de {}.",
        currency_extended(totals.total_value)?
    );

    let city = non_empty(&case.client.city, &settings.default_city);
    let state = non_empty(&case.client.state, &settings.default_state);
    let date = if case.date_of_petition.trim().is_empty() {
        chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
    } else {
        case.date_of_petition.clone()
    };
    let place_and_date = format!("{city} / {state}, {}", date_long(&date));

    Ok(Summary {
        charge_label,
        charges,
        lines: total_lines(&totals, &damages)?,
        totals,
        repetition,
        claim_value,
        place_and_date,
    })
}

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value.trim()
    }
}
