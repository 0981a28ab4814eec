use rust_decimal::Decimal;

use peticao::error::Result;
use peticao::fmt::currency;
use peticao::settings::{load_settings, save_settings, settings_path, Settings};

fn print_settings(settings: &Settings) {
    println!("Escritório:         {}", settings.office_name);
    println!("Cidade padrão:      {} / {}", settings.default_city, settings.default_state);
    println!("Dano moral:         {}", currency(settings.moral_damage));
    println!("Tempo desperdiçado: {}", currency(settings.wasted_time_damage));
}

pub fn show() -> Result<()> {
    let path = settings_path();
    let settings = load_settings();
    print_settings(&settings);
    println!();
    if path.exists() {
        println!("Arquivo: {}", path.display());
    } else {
        println!("Arquivo: {} (ainda não criado, usando padrões)", path.display());
    }
    Ok(())
}

pub fn set(
    office: Option<String>,
    city: Option<String>,
    state: Option<String>,
    moral: Option<Decimal>,
    wasted_time: Option<Decimal>,
) -> Result<()> {
    let mut settings = load_settings();
    if let Some(v) = office {
        settings.office_name = v;
    }
    if let Some(v) = city {
        settings.default_city = v;
    }
    if let Some(v) = state {
        settings.default_state = v.to_uppercase();
    }
    if let Some(v) = moral {
        settings.moral_damage = v;
    }
    if let Some(v) = wasted_time {
        settings.wasted_time_damage = v;
    }
    save_settings(&settings)?;
    tracing::info!("saved settings to {}", settings_path().display());
    print_settings(&settings);
    Ok(())
}
