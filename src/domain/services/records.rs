use crate::domain::model::Record;
use crate::utils::error::Result;

/// Parses the raw data file into one `Record` per line, fields comma-separated.
///
/// The input carries no quoting or escaping convention, so the reader runs
/// with quoting disabled and fields pass through verbatim. Field counts may
/// differ per line here; the statement assembler diagnoses mismatches with the
/// record index.
pub fn parse_records(data: &[u8]) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(data);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(Record {
            fields: row.iter().map(|field| field.to_string()).collect(),
        });
    }

    Ok(records)
}
