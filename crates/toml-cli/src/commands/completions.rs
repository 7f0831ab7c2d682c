//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{Generator, generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};

const BIN_NAME: &str = "toml";

pub fn execute(args: CompletionsArgs) -> crate::error::CliResult<()> {
    let mut stdout = std::io::stdout();
    match args.shell {
        Shell::Bash => write_completions(shells::Bash, &mut stdout),
        Shell::Zsh => write_completions(shells::Zsh, &mut stdout),
        Shell::Fish => write_completions(shells::Fish, &mut stdout),
        Shell::PowerShell => write_completions(shells::PowerShell, &mut stdout),
        Shell::Elvish => write_completions(shells::Elvish, &mut stdout),
    }
    Ok(())
}

fn write_completions<G: Generator>(shell: G, out: &mut dyn std::io::Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}
