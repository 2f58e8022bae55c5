//! Generate SQL UPDATE statements that point `medal_definitions` and
//! `trophy_definitions` rows at their image files, from an Excel workbook.
//!
//! Usage:
//!
//! ```text
//! award-image-sql path/to/medal_definitions.xlsx > award_image_updates.sql
//! ```

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

mod award;
mod excel;
mod sql;

use award::{AwardTable, SHEETS};

/// Generate SQL UPDATE statements for medal and trophy image filenames.
#[derive(Parser)]
#[command(name = "award-image-sql", version)]
struct Args {
    /// Path to the workbook containing the Medals and Trophies sheets
    workbook: PathBuf,
}

fn main() {
    env_logger::init();

    // Usage errors exit 1, not clap's default 2.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&args) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    if !args.workbook.exists() {
        bail!("File not found: {}", args.workbook.display());
    }

    let mut workbook = excel::open_award_workbook(&args.workbook)?;

    let mut tables = Vec::with_capacity(SHEETS.len());
    for (sheet_name, table_name) in SHEETS {
        let rows = excel::read_award_sheet(&mut workbook, sheet_name)?;
        log::info!("{}: {} update statements", table_name, rows.len());
        tables.push(AwardTable { table_name, rows });
    }
    drop(workbook);

    print!("{}", sql::render_report(&tables));
    Ok(())
}
