use rust_decimal::Decimal;

use peticao::error::Result;
use peticao::extenso::to_words;
use peticao::fmt::currency_extended;

pub fn run(amount: Decimal, numeral: bool) -> Result<()> {
    let text = if numeral {
        currency_extended(amount)?
    } else {
        to_words(amount)?
    };
    println!("{text}");
    Ok(())
}
