use clap::CommandFactory;
use clap_complete::{generate, Shell};

use peticao::error::Result;

use super::Cli;

pub fn run(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
