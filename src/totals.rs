use rust_decimal::Decimal;

use crate::models::{ChargeEntry, DamageInputs, MonetaryTotals};

/// Improperly charged amounts are refunded in double ("repetição do indébito
/// em dobro").
pub const DOUBLING_FACTOR: Decimal = Decimal::TWO;

/// Values are assumed to have passed `money::check_amount`, which keeps the
/// sums well inside `Decimal`'s range.
pub fn sum_charges(charges: &[ChargeEntry]) -> Decimal {
    charges.iter().map(|c| c.value).sum()
}

pub fn material_damage(total_charges: Decimal) -> Decimal {
    total_charges * DOUBLING_FACTOR
}

pub fn total_value(material_damage: Decimal, moral_damage: Decimal, wasted_time_damage: Decimal) -> Decimal {
    material_damage + moral_damage + wasted_time_damage
}

impl MonetaryTotals {
    /// Every figure the summary and the petition body show, from one pass
    /// over the inputs.
    pub fn compute(charges: &[ChargeEntry], damages: &DamageInputs) -> Self {
        let total_charges = sum_charges(charges);
        let material = material_damage(total_charges);
        Self {
            total_charges,
            material_damage: material,
            total_indemnification: damages.moral_damage + damages.wasted_time_damage,
            total_value: total_value(material, damages.moral_damage, damages.wasted_time_damage),
        }
    }
}
