mod cli;

use clap::Parser;

use cli::{Cli, Commands, ConfigCommands};

fn main() {
    peticao::logging::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Words { amount, numeral } => cli::words::run(amount, numeral),
        Commands::Totals {
            file,
            moral,
            wasted_time,
        } => cli::totals::run(&file, moral, wasted_time),
        Commands::Summary { file } => cli::summary::run(&file),
        Commands::Banks { find } => cli::banks::run(find.as_deref()),
        Commands::Config { command } => match command {
            ConfigCommands::Show => cli::config::show(),
            ConfigCommands::Set {
                office,
                city,
                state,
                moral,
                wasted_time,
            } => cli::config::set(office, city, state, moral, wasted_time),
        },
        Commands::Completions { shell } => cli::completions::run(shell),
    };

    if let Err(e) = result {
        tracing::debug!("command failed: {e:?}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
