//! Load the historical cost dataset from insurance_data.csv

use super::{DatasetRow, Observation};
use crate::error::EngineError;
use csv::Reader;
use std::path::Path;

/// Default dataset location
pub const DEFAULT_DATASET_PATH: &str = "insurance_data.csv";

/// Raw CSV row matching the dataset columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    age: u32,
    sex: String,
    bmi: f64,
    children: u32,
    smoker: String,
    region: String,
    charges: f64,
}

impl CsvRow {
    fn into_row(self) -> DatasetRow {
        DatasetRow {
            observation: Observation {
                age: self.age,
                sex: self.sex,
                bmi: self.bmi,
                children: self.children,
                smoker: self.smoker,
                region: self.region,
            },
            charges: self.charges,
        }
    }
}

/// Load all rows from a dataset CSV file
///
/// A missing or malformed file is a hard error; there is no recovery path at
/// training time.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<DatasetRow>, EngineError> {
    let mut reader = Reader::from_path(path)?;
    let mut rows = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        rows.push(row.into_row());
    }

    Ok(rows)
}

/// Load rows from any reader (e.g., string buffer, network stream)
pub fn load_dataset_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<DatasetRow>, EngineError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut rows = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        rows.push(row.into_row());
    }

    Ok(rows)
}

/// Write rows back out in the same CSV format
pub fn write_dataset<P: AsRef<Path>>(path: P, rows: &[DatasetRow]) -> Result<(), EngineError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["age", "sex", "bmi", "children", "smoker", "region", "charges"])?;

    for row in rows {
        let obs = &row.observation;
        writer.write_record([
            obs.age.to_string(),
            obs.sex.clone(),
            format!("{:.2}", obs.bmi),
            obs.children.to_string(),
            obs.smoker.clone(),
            obs.region.clone(),
            format!("{:.2}", row.charges),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_reader() {
        let csv = "age,sex,bmi,children,smoker,region,charges\n\
                   19,female,27.9,0,yes,southwest,16884.92\n\
                   18,male,33.77,1,no,southeast,1725.55\n";

        let rows = load_dataset_from_reader(csv.as_bytes()).expect("parse failed");
        assert_eq!(rows.len(), 2);

        let first = &rows[0];
        assert_eq!(first.observation.age, 19);
        assert_eq!(first.observation.sex, "female");
        assert_eq!(first.observation.smoker, "yes");
        assert!((first.charges - 16884.92).abs() < 1e-9);
    }

    #[test]
    fn test_malformed_row_is_error() {
        let csv = "age,sex,bmi,children,smoker,region,charges\n\
                   not_a_number,female,27.9,0,yes,southwest,16884.92\n";

        assert!(load_dataset_from_reader(csv.as_bytes()).is_err());
    }
}
