use std::path::PathBuf;

use clap::Args;
use directus_typegen_schema::SchemaSnapshot;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    config::{OptionArgs, Settings, SourceArgs, load_config},
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Debug, Clone, Default, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output file (defaults to stdout)
    #[arg(short, long, env = "DIRECTUS_TYPEGEN_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Refuse to replace an existing output file
    #[arg(long)]
    pub no_overwrite: bool,

    #[command(flatten)]
    pub options: OptionArgs,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = load_config(self.source.config.as_deref()).unwrap_or_exit();
        let settings = Settings::merge(file, &self.source, &self.options, self.output.as_deref())?;
        let snapshot = SchemaSnapshot::from_file(&settings.snapshot).unwrap_or_exit();

        let report = ops::generate(snapshot, &settings, self.no_overwrite)?;
        report.render(&mut TerminalOutput::new());

        if report.refused() {
            std::process::exit(1);
        }

        Ok(())
    }
}
