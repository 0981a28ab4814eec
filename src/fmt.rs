use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::{PeticaoError, Result};
use crate::extenso::to_words;
use crate::money::split_cents;

const MONTHS: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

/// Format an amount as Brazilian reais with thousands separators: R$ 1.234,56
pub fn currency(val: Decimal) -> String {
    let negative = val.is_sign_negative() && !val.is_zero();
    let Some((whole, cents)) = split_cents(val) else {
        return format!("R$ {val}");
    };
    // a negative amount under half a cent still prints as R$ 0,00
    let negative = negative && (whole, cents) != (0, 0);

    let digits = whole.to_string();
    let mut with_dots = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_dots.push('.');
        }
        with_dots.push(c);
    }
    let with_dots: String = with_dots.chars().rev().collect();

    if negative {
        format!("-R$ {with_dots},{cents:02}")
    } else {
        format!("R$ {with_dots},{cents:02}")
    }
}

/// Numeral followed by the written-out amount, as petitions quote values:
/// `R$ 1.234,56 (mil duzentos e trinta e quatro reais e cinquenta e seis centavos)`
pub fn currency_extended(val: Decimal) -> Result<String> {
    Ok(format!("{} ({})", currency(val), to_words(val)?))
}

fn non_digits() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^0-9]").expect("valid regex"))
}

/// Mask a CPF as it is typed: 000.000.000-00. Extra digits are dropped.
pub fn cpf(raw: &str) -> String {
    let digits = non_digits().replace_all(raw, "");
    let d: String = digits.chars().take(11).collect();
    match d.len() {
        0..=3 => d,
        4..=6 => format!("{}.{}", &d[..3], &d[3..]),
        7..=9 => format!("{}.{}.{}", &d[..3], &d[3..6], &d[6..]),
        _ => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
    }
}

pub fn parse_iso_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| PeticaoError::Date(format!("{raw:?}: {e}")))
}

fn render_date(raw: &str, render: impl Fn(NaiveDate) -> String) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    match parse_iso_date(raw) {
        Ok(date) => render(date),
        Err(e) => {
            tracing::warn!("leaving date as typed: {e}");
            raw.to_string()
        }
    }
}

/// `2025-03-05` → `05 de março de 2025`
pub fn date_long(raw: &str) -> String {
    render_date(raw, |d| {
        format!("{:02} de {} de {}", d.day(), MONTHS[d.month0() as usize], d.year())
    })
}

/// `2025-03-05` → `05/03/2025`
pub fn date_short(raw: &str) -> String {
    render_date(raw, |d| d.format("%d/%m/%Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_formatting() {
        assert_eq!(currency(dec!(1234.56)), "R$ 1.234,56");
        assert_eq!(currency(dec!(-500.00)), "-R$ 500,00");
        assert_eq!(currency(Decimal::ZERO), "R$ 0,00");
        assert_eq!(currency(dec!(1000000.99)), "R$ 1.000.000,99");
        assert_eq!(currency(dec!(42.1)), "R$ 42,10");
        assert_eq!(currency(dec!(22701)), "R$ 22.701,00");
        assert_eq!(currency(dec!(-0.001)), "R$ 0,00");
    }

    #[test]
    fn test_numeral_and_words_round_the_same_way() {
        for v in [dec!(19.995), dec!(0.005), dec!(2.675), dec!(999.999)] {
            let numeral = currency(v);
            let words = to_words(v).unwrap();
            let (whole, cents) = split_cents(v).unwrap();
            assert!(numeral.ends_with(&format!(",{cents:02}")), "{numeral}");
            if cents == 0 {
                assert!(!words.contains("centavo"), "{words}");
            }
            assert_eq!(whole == 0, !words.contains("rea"), "{words}");
        }
        assert_eq!(currency(dec!(19.995)), "R$ 20,00");
        assert_eq!(to_words(dec!(19.995)).unwrap(), "vinte reais");
    }

    #[test]
    fn test_currency_extended() {
        assert_eq!(
            currency_extended(dec!(1234.56)).unwrap(),
            "R$ 1.234,56 (mil duzentos e trinta e quatro reais e cinquenta e seis centavos)"
        );
        assert_eq!(currency_extended(Decimal::ZERO).unwrap(), "R$ 0,00 (zero reais)");
        assert!(currency_extended(dec!(-1)).is_err());
    }

    #[test]
    fn test_cpf_mask() {
        assert_eq!(cpf(""), "");
        assert_eq!(cpf("123"), "123");
        assert_eq!(cpf("1234"), "123.4");
        assert_eq!(cpf("1234567"), "123.456.7");
        assert_eq!(cpf("12345678901"), "123.456.789-01");
        assert_eq!(cpf("123.456.789-01"), "123.456.789-01");
        assert_eq!(cpf("1234567890123"), "123.456.789-01");
    }

    #[test]
    fn test_dates() {
        assert_eq!(date_long("2025-03-05"), "05 de março de 2025");
        assert_eq!(date_long("2026-12-31"), "31 de dezembro de 2026");
        assert_eq!(date_short("2025-03-05"), "05/03/2025");
        assert_eq!(date_long(""), "");
        assert_eq!(date_short("ontem"), "ontem");
    }
}
