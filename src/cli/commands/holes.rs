//! `xenrich holes` - lead hole positions for enriched components

use miette::Result;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::helpers::resolve_path;
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::loader::to_pretty_string;
use crate::core::read_records;
use crate::entities::{find_by_key, lead_holes, ComponentRecord, LeadHole};

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("key", "KEY", 44),
    ColumnDef::new("x", "X", 9),
    ColumnDef::new("z", "Z", 9),
    ColumnDef::new("diameter", "DIA", 6),
];

#[derive(clap::Args, Debug)]
pub struct HolesArgs {
    /// Enriched catalog to read (default: the configured output)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Only the component with this key ("{brand}-{series}-{value}{unit}")
    #[arg(long, short = 'k')]
    pub key: Option<String>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Tsv)]
    pub format: OutputFormat,
}

/// Holes of one component, as printed in JSON output
#[derive(Debug, Serialize)]
struct ComponentHoles {
    key: String,
    holes: Vec<LeadHole>,
}

impl ComponentHoles {
    fn of(record: &ComponentRecord) -> Self {
        Self {
            key: record.key(),
            holes: lead_holes(record),
        }
    }

    fn rows(&self) -> impl Iterator<Item = TableRow> + '_ {
        self.holes.iter().map(|hole| {
            TableRow::new()
                .cell("key", CellValue::Key(self.key.clone()))
                .cell("x", CellValue::Mm(Some(hole.x)))
                .cell("z", CellValue::Mm(Some(hole.z)))
                .cell("diameter", CellValue::Mm(Some(hole.diameter)))
        })
    }
}

pub fn run(args: HolesArgs, global: &GlobalOpts) -> Result<()> {
    let input = resolve_path(args.input.as_deref(), |c| c.output());
    let records = read_records(&input)?;

    let selected: Vec<&ComponentRecord> = match &args.key {
        Some(key) => match find_by_key(&records, key) {
            Some(record) => vec![record],
            None => return Err(miette::miette!("No component with key '{}' in {}", key, input.display())),
        },
        None => records.iter().collect(),
    };

    let layouts: Vec<ComponentHoles> = selected.into_iter().map(ComponentHoles::of).collect();

    if args.format == OutputFormat::Json {
        print!("{}", to_pretty_string(&layouts)?);
        return Ok(());
    }

    let rows: Vec<TableRow> = layouts.iter().flat_map(ComponentHoles::rows).collect();
    let mut formatter = TableFormatter::new(COLUMNS, "hole");
    if global.quiet {
        formatter = formatter.without_summary();
    }
    print!("{}", formatter.render(&rows, args.format));
    Ok(())
}
