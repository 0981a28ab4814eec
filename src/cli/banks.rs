use comfy_table::{Cell, Table};

use peticao::catalog::{banks, find_bank};
use peticao::error::Result;

pub fn run(find: Option<&str>) -> Result<()> {
    let rows = match find {
        Some(q) => vec![find_bank(q)?],
        None => banks(),
    };

    let mut table = Table::new();
    table.set_header(vec!["Banco", "CNPJ", "Endereço", "Cidade/UF", "CEP"]);
    for bank in rows {
        table.add_row(vec![
            Cell::new(bank.name),
            Cell::new(bank.cnpj),
            Cell::new(bank.address),
            Cell::new(format!("{}/{}", bank.city, bank.state)),
            Cell::new(bank.cep),
        ]);
    }
    println!("Bancos\n{table}");
    Ok(())
}
