mod check;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for directus_typegen_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "directus-typegen")]
#[command(version)]
#[command(about = "Generate TypeScript declarations from a Directus schema snapshot")]
#[command(args_conflicts_with_subcommands = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Arguments of the default `generate` command
    #[command(flatten)]
    generate: GenerateCommand,

    /// Log pipeline decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Some(Commands::Generate(cmd)) => cmd.run(),
            Some(Commands::Check(cmd)) => cmd.run(),
            None => self.generate.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript declarations (the default)
    Generate(GenerateCommand),

    /// Validate a snapshot without generating declarations
    Check(CheckCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_is_the_default() {
        let cli = Cli::try_parse_from(["directus-typegen", "--snapshot", "s.json", "--verbose"])
            .unwrap();
        assert!(cli.command.is_none());
        assert!(cli.verbose);
        assert_eq!(
            cli.generate.source.snapshot.as_deref(),
            Some(std::path::Path::new("s.json"))
        );
    }

    #[test]
    fn test_check_subcommand() {
        let cli = Cli::try_parse_from(["directus-typegen", "check", "--snapshot", "s.json"])
            .unwrap();
        assert!(matches!(cli.command, Some(Commands::Check(_))));
    }

    #[test]
    fn test_declaration_style_flag() {
        let cli = Cli::try_parse_from([
            "directus-typegen",
            "generate",
            "--declaration-style",
            "type",
            "--no-system-types",
        ])
        .unwrap();
        let Some(Commands::Generate(cmd)) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(
            cmd.options.declaration_style,
            Some(directus_typegen_schema::DeclarationStyle::Type)
        );
        assert!(cmd.options.no_system_types);

        assert!(
            Cli::try_parse_from(["directus-typegen", "--declaration-style", "class"]).is_err()
        );
    }
}
