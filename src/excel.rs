//! Read award rows from the input workbook.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Data, Reader, Xlsx, open_workbook};

use crate::award::AwardRow;

/// Column headers, matched case-sensitively against the header row.
const COL_AGE_GROUP: &str = "age_group_label";
const COL_METRIC: &str = "Metric_code";
const COL_TIER: &str = "Tier";
const COL_FILENAME: &str = "Image_filename";

pub type AwardWorkbook = Xlsx<BufReader<File>>;

/// Open the workbook at `path`.
pub fn open_award_workbook(path: &Path) -> Result<AwardWorkbook> {
    open_workbook(path).with_context(|| format!("Failed to open workbook: {}", path.display()))
}

/// Read all complete award rows from the named sheet, preserving workbook
/// order. Rows with any of the four fields blank are dropped silently; a
/// missing sheet or a header without the expected columns is an error.
pub fn read_award_sheet(workbook: &mut AwardWorkbook, sheet_name: &str) -> Result<Vec<AwardRow>> {
    let range = workbook
        .worksheet_range(sheet_name)
        .with_context(|| format!("Workbook has no sheet named '{}'", sheet_name))?;

    let mut rows_iter = range.rows();
    let header = match rows_iter.next() {
        Some(header) => header,
        None => return Ok(Vec::new()),
    };
    let cols = ColumnIndices::parse(header, sheet_name)?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for row in rows_iter {
        match AwardRow::normalize(
            cell_string(row, cols.age_group),
            cell_string(row, cols.metric),
            cell_string(row, cols.tier),
            cell_string(row, cols.filename),
        ) {
            Some(award) => rows.push(award),
            None => skipped += 1,
        }
    }

    log::debug!(
        "Sheet '{}': {} rows retained, {} skipped",
        sheet_name,
        rows.len(),
        skipped
    );

    Ok(rows)
}

struct ColumnIndices {
    age_group: usize,
    metric: usize,
    tier: usize,
    filename: usize,
}

impl ColumnIndices {
    fn parse(header: &[Data], sheet_name: &str) -> Result<Self> {
        Ok(ColumnIndices {
            age_group: find_column(header, COL_AGE_GROUP, sheet_name)?,
            metric: find_column(header, COL_METRIC, sheet_name)?,
            tier: find_column(header, COL_TIER, sheet_name)?,
            filename: find_column(header, COL_FILENAME, sheet_name)?,
        })
    }
}

fn find_column(header: &[Data], name: &str, sheet_name: &str) -> Result<usize> {
    header
        .iter()
        .position(|c| matches!(c, Data::String(s) if s == name))
        .with_context(|| format!("Sheet '{}' is missing column '{}'", sheet_name, name))
}

fn cell_string(row: &[Data], col: usize) -> Option<String> {
    row.get(col).and_then(|c| match c {
        Data::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                Some((*f as i64).to_string())
            } else {
                Some(f.to_string())
            }
        }
        Data::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}
