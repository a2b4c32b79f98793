//! `xenrich enrich` - enrich the catalog and write both artifacts

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::loader::{to_pretty_string, write_artifacts};
use crate::core::{enrich_all, read_records, Config};
use crate::entities::component::fields;
use crate::entities::{ComponentRecord, LeadConfiguration};

#[derive(clap::Args, Debug, Default)]
pub struct EnrichArgs {
    /// Catalog to enrich (JSON array of component records)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Where to write the enriched catalog
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Where to write the override table
    #[arg(long)]
    pub defaults_output: Option<PathBuf>,

    /// Override table (JSON) to use instead of the builtin one
    #[arg(long)]
    pub overrides: Option<PathBuf>,

    /// Print the enriched catalog to stdout and write no files
    #[arg(long)]
    pub stdout: bool,
}

/// Counts shown after a successful run
#[derive(Debug, Default, PartialEq, Eq)]
struct EnrichStats {
    axial: usize,
    radial: usize,
    coils: usize,
}

impl EnrichStats {
    fn collect(records: &[ComponentRecord]) -> Self {
        let mut stats = Self::default();
        for record in records {
            match record.lead_configuration() {
                Some(LeadConfiguration::Axial) => stats.axial += 1,
                Some(LeadConfiguration::Radial) => stats.radial += 1,
                None => {}
            }
            if record.contains(fields::LEAD_PATTERN) {
                stats.coils += 1;
            }
        }
        stats
    }
}

pub fn run(args: EnrichArgs, global: &GlobalOpts) -> Result<()> {
    let mut config = Config::load();
    config.merge(Config {
        input: args.input,
        output: args.output,
        defaults_output: args.defaults_output,
        overrides: args.overrides,
    });

    let input = config.input();
    let table = config.override_table()?;
    let records = read_records(&input)?;

    // Nothing is written unless every record enriched
    let enriched = enrich_all(&records, &table)?;

    if args.stdout {
        print!("{}", to_pretty_string(&enriched)?);
        return Ok(());
    }

    let output = config.output();
    let defaults_output = config.defaults_output();
    write_artifacts(&[
        (output.as_path(), to_pretty_string(&enriched)?),
        (defaults_output.as_path(), to_pretty_string(&table)?),
    ])?;

    if !global.quiet {
        let stats = EnrichStats::collect(&enriched);
        println!(
            "{} Enriched {} component(s) from {}",
            style("✓").green(),
            style(enriched.len()).cyan(),
            input.display()
        );
        println!(
            "   {} axial, {} radial, {} coil(s)",
            stats.axial, stats.radial, stats.coils
        );
        println!("{} Saved to {}", style("→").blue(), output.display());
        println!("{} Saved defaults to {}", style("→").blue(), defaults_output.display());
    }

    Ok(())
}
