//! `xenrich defaults` - print the override table

use miette::Result;
use std::path::PathBuf;

use crate::core::loader::to_pretty_string;
use crate::core::{Config, OverrideTable};

#[derive(clap::Args, Debug)]
pub struct DefaultsArgs {
    /// Override table (JSON) to print instead of the configured one
    #[arg(long)]
    pub overrides: Option<PathBuf>,

    /// Always print the builtin table, ignoring configuration
    #[arg(long, conflicts_with = "overrides")]
    pub builtin: bool,
}

pub fn run(args: DefaultsArgs) -> Result<()> {
    let table = if args.builtin {
        OverrideTable::builtin()
    } else {
        let mut config = Config::load();
        config.merge(Config {
            overrides: args.overrides,
            ..Default::default()
        });
        config.override_table()?
    };

    print!("{}", to_pretty_string(&table)?);
    Ok(())
}
