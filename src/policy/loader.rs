//! Load calculation requests from CSV (`BirthDate,PersonType`)

use csv::Reader;
use std::path::Path;

use super::CalculationRequest;
use crate::error::Result;

/// Load all requests from a CSV file
pub fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<CalculationRequest>> {
    let reader = Reader::from_path(path)?;
    collect_rows(reader)
}

/// Load requests from any reader (e.g., string buffer, stdin)
pub fn load_requests_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<CalculationRequest>> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<CalculationRequest>> {
    let mut requests = Vec::new();

    // Rows are kept raw; validation happens per row in the batch runner so a
    // single bad birth date does not sink the whole file
    for result in reader.deserialize() {
        let row: CalculationRequest = result?;
        requests.push(row);
    }

    Ok(requests)
}
