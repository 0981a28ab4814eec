use serde::{Deserialize, Serialize};

use crate::error::{PeticaoError, Result};
use crate::models::Bank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PetitionType {
    #[default]
    TarifasIndevidas,
    SeguroNaoContratado,
    RmcRcc,
    NegativacaoIndevida,
}

impl PetitionType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::TarifasIndevidas => "Tarifas Indevidas",
            Self::SeguroNaoContratado => "Seguro Não Contratado",
            Self::RmcRcc => "RMC/RCC",
            Self::NegativacaoIndevida => "Negativação Indevida",
        }
    }
}

struct BankRecord {
    name: &'static str,
    cnpj: &'static str,
    address: &'static str,
    city: &'static str,
    state: &'static str,
    cep: &'static str,
}

const BANKS: &[BankRecord] = &[
    BankRecord {
        name: "BANCO BRADESCO S/A",
        cnpj: "60.746.948/0001-12",
        address: "Núcleo Cidade de Deus, s/nº, Vila Yara",
        city: "Osasco",
        state: "SP",
        cep: "06.029-900",
    },
    BankRecord {
        name: "ITAÚ UNIBANCO S/A",
        cnpj: "60.701.190/0001-04",
        address: "Praça Alfredo Egydio de Souza Aranha, 100",
        city: "São Paulo",
        state: "SP",
        cep: "04344-902",
    },
    BankRecord {
        name: "BANCO DO BRASIL S/A",
        cnpj: "00.000.000/0001-91",
        address: "SBS Quadra 1, Bloco G, Lote 32",
        city: "Brasília",
        state: "DF",
        cep: "70073-901",
    },
    BankRecord {
        name: "CAIXA ECONÔMICA FEDERAL",
        cnpj: "00.360.305/0001-04",
        address: "SBS Quadra 4, Lote 3/4",
        city: "Brasília",
        state: "DF",
        cep: "70092-900",
    },
    BankRecord {
        name: "BANCO SANTANDER (BRASIL) S/A",
        cnpj: "90.400.888/0001-42",
        address: "Avenida Presidente Juscelino Kubitschek, 2041",
        city: "São Paulo",
        state: "SP",
        cep: "04543-011",
    },
    BankRecord {
        name: "BANCO BMG S/A",
        cnpj: "61.186.680/0001-74",
        address: "Avenida Álvares Cabral, 1707",
        city: "Belo Horizonte",
        state: "MG",
        cep: "30170-001",
    },
    BankRecord {
        name: "BANCO PAN S/A",
        cnpj: "59.285.411/0001-13",
        address: "Avenida Paulista, 1374",
        city: "São Paulo",
        state: "SP",
        cep: "01310-916",
    },
    BankRecord {
        name: "BANCO C6 S/A",
        cnpj: "31.872.495/0001-72",
        address: "Avenida Nove de Julho, 3186",
        city: "São Paulo",
        state: "SP",
        cep: "01406-000",
    },
];

impl BankRecord {
    fn to_bank(&self) -> Bank {
        Bank {
            name: self.name.to_string(),
            cnpj: self.cnpj.to_string(),
            address: self.address.to_string(),
            city: self.city.to_string(),
            state: self.state.to_string(),
            cep: self.cep.to_string(),
        }
    }
}

pub fn banks() -> Vec<Bank> {
    BANKS.iter().map(BankRecord::to_bank).collect()
}

/// Case-insensitive substring match on the bank name. The first hit wins.
pub fn find_bank(query: &str) -> Result<Bank> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Err(PeticaoError::UnknownBank(query.to_string()));
    }
    BANKS
        .iter()
        .find(|b| b.name.to_lowercase().contains(&needle))
        .map(BankRecord::to_bank)
        .ok_or_else(|| PeticaoError::UnknownBank(query.to_string()))
}
