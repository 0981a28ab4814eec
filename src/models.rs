use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::PetitionType;

/// One improperly billed line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeEntry {
    /// ISO date (`YYYY-MM-DD`) or empty.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    pub value: Decimal,
}

impl ChargeEntry {
    pub fn new(date: &str, description: &str, value: Decimal) -> Self {
        Self {
            date: date.to_string(),
            description: description.to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DamageInputs {
    pub moral_damage: Decimal,
    pub wasted_time_damage: Decimal,
}

/// Derived figures; recomputed on every read, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonetaryTotals {
    pub total_charges: Decimal,
    pub material_damage: Decimal,
    pub total_indemnification: Decimal,
    pub total_value: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Client {
    pub name: String,
    pub nationality: String,
    pub civil_status: String,
    pub profession: String,
    pub cpf: String,
    pub rg: String,
    pub rg_issuer: String,
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub cep: String,
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bank {
    pub name: String,
    pub cnpj: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub cep: String,
}

/// Everything the petition form collects. Damages left out of the file fall
/// back to the configured defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseFile {
    #[serde(default)]
    pub client: Client,
    #[serde(default)]
    pub bank: Bank,
    #[serde(default)]
    pub petition_type: PetitionType,
    #[serde(default)]
    pub charge_description: String,
    pub charges: Vec<ChargeEntry>,
    #[serde(default)]
    pub moral_damage: Option<Decimal>,
    #[serde(default)]
    pub wasted_time_damage: Option<Decimal>,
    #[serde(default)]
    pub date_of_petition: String,
}

impl CaseFile {
    pub fn damages(&self, defaults: DamageInputs) -> DamageInputs {
        DamageInputs {
            moral_damage: self.moral_damage.unwrap_or(defaults.moral_damage),
            wasted_time_damage: self
                .wasted_time_damage
                .unwrap_or(defaults.wasted_time_damage),
        }
    }
}
