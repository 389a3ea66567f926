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
pub struct CheckCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub options: OptionArgs,

    /// Also list the pipeline phases and lints
    #[arg(long)]
    pub explain: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = load_config(self.source.config.as_deref()).unwrap_or_exit();
        let settings = Settings::merge(file, &self.source, &self.options, None)?;
        let snapshot = SchemaSnapshot::from_file(&settings.snapshot).unwrap_or_exit();

        let report = ops::check(snapshot, settings.options, &settings.snapshot, self.explain)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
