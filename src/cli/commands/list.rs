//! `xenrich list` - list enriched components

use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::resolve_path;
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::loader::to_pretty_string;
use crate::core::read_records;
use crate::entities::component::fields;
use crate::entities::{filter_by_type, ComponentRecord};

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("key", "KEY", 44),
    ColumnDef::new("type", "TYPE", 12),
    ColumnDef::new("leads", "LEADS", 8),
    ColumnDef::new("hole", "HOLE", 6),
    ColumnDef::new("inset", "INSET", 7),
    ColumnDef::new("spacing", "SPACING", 8),
    ColumnDef::new("pattern", "PATTERN", 10),
];

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Enriched catalog to read (default: the configured output)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Only list this part type (capacitor, resistor, inductor, ...)
    #[arg(long = "type", short = 't')]
    pub part_type: Option<String>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Tsv)]
    pub format: OutputFormat,
}

fn to_row(record: &ComponentRecord) -> TableRow {
    let pattern = record
        .str_field(fields::LEAD_PATTERN)
        .map(|p| CellValue::Text(p.to_string()))
        .unwrap_or(CellValue::Empty);

    TableRow::new()
        .cell("key", CellValue::Key(record.key()))
        .cell(
            "type",
            CellValue::Type(record.str_field(fields::PART_TYPE).unwrap_or("-").to_string()),
        )
        .cell("leads", CellValue::Leads(record.lead_configuration()))
        .cell("hole", CellValue::Mm(record.f64_field(fields::SUGGESTED_HOLE_DIAMETER_MM)))
        .cell("inset", CellValue::Mm(record.f64_field(fields::END_INSET_MM)))
        .cell("spacing", CellValue::Mm(record.f64_field(fields::LEAD_SPACING_MM)))
        .cell("pattern", pattern)
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let input = resolve_path(args.input.as_deref(), |c| c.output());
    let records = read_records(&input)?;

    let selected: Vec<&ComponentRecord> = match &args.part_type {
        Some(part_type) => filter_by_type(&records, part_type),
        None => records.iter().collect(),
    };

    if args.format == OutputFormat::Json {
        print!("{}", to_pretty_string(&selected)?);
        return Ok(());
    }

    let rows: Vec<TableRow> = selected.iter().map(|r| to_row(r)).collect();
    let mut formatter = TableFormatter::new(COLUMNS, "component");
    if global.quiet {
        formatter = formatter.without_summary();
    }
    print!("{}", formatter.render(&rows, args.format));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{enrich, OverrideTable};
    use serde_json::json;

    #[test]
    fn test_row_for_coil() {
        let record = enrich(
            &serde_json::from_value(json!({
                "part_type": "inductor",
                "brand": "Intertechnik",
                "series": "Air Core",
                "value": 2.2,
                "value_unit": "mH",
                "outer_diameter_mm": 35.0
            }))
            .unwrap(),
            &OverrideTable::builtin(),
        )
        .unwrap();

        let row = to_row(&record);
        assert_eq!(row.get("key").unwrap().raw(), "Intertechnik-Air Core-2.2mH");
        assert_eq!(row.get("leads").unwrap().raw(), "radial");
        assert_eq!(row.get("hole").unwrap().raw(), "1.1");
        assert_eq!(row.get("inset").unwrap().raw(), "-");
        assert_eq!(row.get("spacing").unwrap().raw(), "5.08");
        assert_eq!(row.get("pattern").unwrap().raw(), "opposite");
    }
}
