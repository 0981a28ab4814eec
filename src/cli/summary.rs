use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};

use peticao::error::Result;
use peticao::fmt::{cpf, currency};
use peticao::importer::load_case;
use peticao::reports::build_summary;
use peticao::settings::load_settings;

use super::totals::totals_table;

const WRAP_WIDTH: usize = 88;

pub fn run(file: &Path) -> Result<()> {
    let settings = load_settings();
    let case = load_case(file)?;
    let summary = build_summary(&case, &settings)?;

    println!("{}", settings.office_name.bold());
    println!("Autor:    {}", or_blank(&case.client.name));
    println!("CPF:      {}", or_blank(&cpf(&case.client.cpf)));
    println!("Réu:      {}", or_blank(&case.bank.name));
    println!("Ação:     {}", case.petition_type.label());
    println!();

    let mut table = Table::new();
    table.set_header(vec!["Data", "Descrição", "Valor"]);
    for line in &summary.charges {
        table.add_row(vec![
            Cell::new(&line.date),
            Cell::new(&line.description),
            Cell::new(&line.amount),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total".bold()),
        Cell::new(""),
        Cell::new(currency(summary.totals.total_charges).bold()),
    ]);
    println!("Cobranças indevidas\n{table}");
    println!();
    println!("Valores\n{}", totals_table(&summary.lines));
    println!();
    println!("{}", textwrap::fill(&summary.repetition, WRAP_WIDTH));
    println!();
    println!("{}", textwrap::fill(&summary.claim_value, WRAP_WIDTH));
    println!();
    println!("{}", summary.place_and_date);
    Ok(())
}

fn or_blank(value: &str) -> &str {
    if value.trim().is_empty() {
        "(não informado)"
    } else {
        value
    }
}
