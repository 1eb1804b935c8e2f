//! CSV input: a header row naming the fields, then one record per row.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::Result;
use crate::light::RawLightRow;

pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawLightRow>> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<RawLightRow>() {
        rows.push(record?);
    }
    log::debug!("Read {} rows", rows.len());
    Ok(rows)
}

pub fn read_rows_from_path(path: &Path) -> Result<Vec<RawLightRow>> {
    let file = std::fs::File::open(path)?;
    read_rows(std::io::BufReader::new(file))
}
