use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};
use rust_decimal::Decimal;

use peticao::error::Result;
use peticao::importer::load_charges;
use peticao::models::{DamageInputs, MonetaryTotals};
use peticao::reports::{total_lines, TotalLine};
use peticao::settings::load_settings;

pub(crate) fn totals_table(lines: &[TotalLine]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["", "Valor", "Por extenso"]);
    let last = lines.len().saturating_sub(1);
    for (i, line) in lines.iter().enumerate() {
        let label = if i == last {
            Cell::new(line.label.bold())
        } else {
            Cell::new(line.label)
        };
        table.add_row(vec![label, Cell::new(&line.numeral), Cell::new(&line.extended)]);
    }
    table
}

pub fn run(file: &Path, moral: Option<Decimal>, wasted_time: Option<Decimal>) -> Result<()> {
    let defaults = load_settings().damages();
    let damages = DamageInputs {
        moral_damage: moral.unwrap_or(defaults.moral_damage),
        wasted_time_damage: wasted_time.unwrap_or(defaults.wasted_time_damage),
    };
    let charges = load_charges(file)?;
    let totals = MonetaryTotals::compute(&charges, &damages);
    let lines = total_lines(&totals, &damages)?;

    println!("Cobranças: {}", charges.len());
    println!("{}", totals_table(&lines));
    Ok(())
}
