//! CSV loader for developer records.

use anyhow::{Context, Result};
use std::fs::File;

use crate::model::Developer;

/// Reads every row of a developer CSV file into typed records.
///
/// The first line must be a header naming all seven record fields; column
/// order does not matter. Rows come back in file order.
///
/// # Errors
///
/// Returns a single error naming the offending file if it cannot be opened,
/// the header is missing a field or carries an extra one, or any row holds a
/// non-numeric value in a numeric column. No partial rows are returned.
pub fn load_records(path: &str) -> Result<Vec<Developer>> {
    let file = File::open(path).with_context(|| format!("cannot open '{}'", path))?;
    let mut rdr = csv::Reader::from_reader(file);

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: Developer =
            result.with_context(|| format!("malformed row in '{}'", path))?;
        records.push(record);
    }

    Ok(records)
}
