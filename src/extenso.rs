//! Written-out ("por extenso") Brazilian Portuguese rendering of amounts in reais.

use rust_decimal::Decimal;

use crate::error::{PeticaoError, Result};
use crate::money::{split_cents, MAX_WHOLE};

const UNITS: [&str; 10] = [
    "zero", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
];

const TEENS: [&str; 10] = [
    "dez", "onze", "doze", "treze", "quatorze", "quinze", "dezesseis", "dezessete", "dezoito",
    "dezenove",
];

const TENS: [&str; 10] = [
    "", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta", "noventa",
];

const HUNDREDS: [&str; 10] = [
    "", "cento", "duzentos", "trezentos", "quatrocentos", "quinhentos", "seiscentos", "setecentos",
    "oitocentos", "novecentos",
];

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;

/// Render a non-negative amount in words, e.g. `1234.56` →
/// "mil duzentos e trinta e quatro reais e cinquenta e seis centavos".
///
/// Negative amounts and whole parts above [`MAX_WHOLE`] are rejected.
pub fn to_words(value: Decimal) -> Result<String> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(PeticaoError::OutOfDomain(format!("negative amount {value}")));
    }
    let (whole, cents) = split_cents(value)
        .filter(|(whole, _)| *whole <= MAX_WHOLE)
        .ok_or_else(|| PeticaoError::OutOfDomain(format!("amount too large {value}")))?;

    if whole == 0 && cents == 0 {
        return Ok("zero reais".to_string());
    }

    let mut out = String::new();
    if whole > 0 {
        out.push_str(&whole_words(whole));
        out.push_str(currency_unit(whole));
    }
    if cents > 0 {
        if whole > 0 {
            out.push_str(" e ");
        }
        out.push_str(&below_hundred(cents));
        out.push_str(if cents == 1 { " centavo" } else { " centavos" });
    }
    Ok(out)
}

fn currency_unit(whole: u64) -> &'static str {
    if whole == 1 {
        " real"
    } else if whole % MILLION == 0 {
        " de reais"
    } else {
        " reais"
    }
}

fn whole_words(n: u64) -> String {
    if n >= MILLION {
        millions(n)
    } else if n >= THOUSAND {
        thousands(n)
    } else {
        hundreds(n)
    }
}

/// 1..=99
fn below_hundred(n: u64) -> String {
    let n = n as usize;
    match n {
        0..=9 => UNITS[n].to_string(),
        10..=19 => TEENS[n - 10].to_string(),
        _ if n % 10 == 0 => TENS[n / 10].to_string(),
        _ => format!("{} e {}", TENS[n / 10], UNITS[n % 10]),
    }
}

/// 1..=999
fn hundreds(n: u64) -> String {
    if n == 100 {
        return "cem".to_string();
    }
    if n < 100 {
        return below_hundred(n);
    }
    let head = HUNDREDS[(n / 100) as usize];
    match n % 100 {
        0 => head.to_string(),
        rest => format!("{head} e {}", below_hundred(rest)),
    }
}

/// 1..=999_999
fn thousands(n: u64) -> String {
    let count = n / THOUSAND;
    let rest = n % THOUSAND;
    if count == 0 {
        return hundreds(rest);
    }
    let head = if count == 1 {
        "mil".to_string()
    } else {
        format!("{} mil", hundreds(count))
    };
    if rest == 0 {
        return head;
    }
    let joiner = if takes_e(rest) {
        " e "
    } else if count == 1 {
        " "
    } else {
        ", "
    };
    format!("{head}{joiner}{}", hundreds(rest))
}

fn millions(n: u64) -> String {
    let count = n / MILLION;
    let rest = n % MILLION;
    let head = if count == 1 {
        "um milhão".to_string()
    } else {
        format!("{} milhões", thousands(count))
    };
    if rest == 0 {
        return head;
    }
    let joiner = if takes_e(rest) { " e " } else { ", " };
    format!("{head}{joiner}{}", thousands(rest))
}

/// A remainder joins the larger scale with "e" when it is below 100 or an
/// exact hundred below 1000. Everything else follows a comma (or a space).
fn takes_e(rest: u64) -> bool {
    rest < 100 || (rest < THOUSAND && rest % 100 == 0)
}
