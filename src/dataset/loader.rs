use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::info;

use super::types::{Dataset, LaunchOutcome, LaunchRecord};
use crate::LaunchDashError;

pub const DEFAULT_DATASET_FILE: &str = "spacex_launch_dash.csv";

pub const LAUNCH_SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_MASS_COLUMN: &str = "PayloadMass";
pub const CLASS_COLUMN: &str = "Class";
pub const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";

/// Positions of the required columns within a header row
struct ColumnIndex {
    launch_site: usize,
    payload_mass: usize,
    class: usize,
    booster_category: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, LaunchDashError> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| LaunchDashError::MissingColumn {
                    column: column.to_string(),
                })
        };

        Ok(Self {
            launch_site: find(LAUNCH_SITE_COLUMN)?,
            payload_mass: find(PAYLOAD_MASS_COLUMN)?,
            class: find(CLASS_COLUMN)?,
            booster_category: find(BOOSTER_CATEGORY_COLUMN)?,
        })
    }

    fn parse(&self, row: usize, record: &StringRecord) -> Result<LaunchRecord, LaunchDashError> {
        let field = |index: usize| record.get(index).unwrap_or("");

        let launch_site = field(self.launch_site);
        if launch_site.is_empty() {
            return Err(LaunchDashError::MissingLaunchSite { row });
        }

        let raw_mass = field(self.payload_mass);
        let payload_mass_kg = raw_mass
            .parse::<f64>()
            .ok()
            .filter(|mass| mass.is_finite())
            .ok_or_else(|| LaunchDashError::InvalidPayloadMass {
                row,
                value: raw_mass.to_string(),
            })?;

        let raw_class = field(self.class);
        let outcome =
            LaunchOutcome::from_class(raw_class).ok_or_else(|| LaunchDashError::InvalidOutcomeClass {
                row,
                value: raw_class.to_string(),
            })?;

        Ok(LaunchRecord::new(
            launch_site,
            payload_mass_kg,
            outcome,
            field(self.booster_category),
        ))
    }
}

/// Loads the launch records table from a CSV file. Any malformed row fails the whole load.
pub fn load_launch_csv(source_file: &Path) -> Result<Dataset, LaunchDashError> {
    if !source_file.exists() {
        return Err(LaunchDashError::DatasetNotFound {
            path: format!("{:?}", source_file),
        });
    }
    let file = File::open(source_file).map_err(|e| LaunchDashError::DatasetOpenError { source: e })?;
    let dataset = read_launch_records(file)?;

    info!(
        "Loaded {:?}, found {} launch records across {} sites",
        source_file,
        dataset.len(),
        dataset.launch_sites().len()
    );
    Ok(dataset)
}

pub fn read_launch_records<R: Read>(reader: R) -> Result<Dataset, LaunchDashError> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| LaunchDashError::DatasetReadError { source: e })?;
    let columns = ColumnIndex::from_headers(headers)?;

    let mut records = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        let row = row.map_err(|e| LaunchDashError::DatasetReadError { source: e })?;
        records.push(columns.parse(index + 1, &row)?);
    }

    Dataset::from_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Flight Number,Launch Site,Class,PayloadMass,Booster Version,Booster Version Category";

    fn read(contents: &str) -> Result<Dataset, LaunchDashError> {
        read_launch_records(contents.as_bytes())
    }

    #[test]
    fn test_load_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(file, "1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0").unwrap();
        writeln!(file, "2,CCAFS LC-40,1,525,F9 v1.0  B0005,v1.0").unwrap();
        writeln!(file, "3,VAFB SLC-4E,1,9600.5,F9 FT B1029.1,FT").unwrap();
        file.flush().unwrap();

        let dataset = load_launch_csv(file.path()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.launch_sites(), &["CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(dataset.payload_bounds().min, 0.0);
        assert_eq!(dataset.payload_bounds().max, 9600.5);

        let last = &dataset.records()[2];
        assert_eq!(last.outcome, LaunchOutcome::Success);
        assert_eq!(last.booster_version_category, "FT");
    }

    #[test]
    fn test_column_order_is_free_and_fields_are_trimmed() {
        let dataset = read(
            "Booster Version Category,PayloadMass,Launch Site,Class\n\
             B4 , 3600 , KSC LC-39A , 1.0\n",
        )
        .unwrap();

        let record = &dataset.records()[0];
        assert_eq!(record.launch_site, "KSC LC-39A");
        assert_eq!(record.payload_mass_kg, 3600.0);
        assert_eq!(record.outcome, LaunchOutcome::Success);
        assert_eq!(record.booster_version_category, "B4");
    }

    #[test]
    fn test_missing_file_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_launch_csv(&dir.path().join(DEFAULT_DATASET_FILE));
        assert!(matches!(result, Err(LaunchDashError::DatasetNotFound { .. })));
    }

    #[test]
    fn test_missing_column_returns_error() {
        match read("Launch Site,Class,Booster Version Category\nCCAFS LC-40,1,v1.0\n") {
            Err(LaunchDashError::MissingColumn { column }) => {
                assert_eq!(column, PAYLOAD_MASS_COLUMN)
            }
            other => panic!("Expected MissingColumn error, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_payload_returns_error() {
        let contents = format!("{}\n1,CCAFS LC-40,0,0,B0003,v1.0\n2,CCAFS LC-40,1,heavy,B0005,v1.0\n", HEADER);
        match read(&contents) {
            Err(LaunchDashError::InvalidPayloadMass { row, value }) => {
                assert_eq!(row, 2);
                assert_eq!(value, "heavy");
            }
            other => panic!("Expected InvalidPayloadMass error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_payload_returns_error() {
        let contents = format!("{}\n1,CCAFS LC-40,0,,B0003,v1.0\n", HEADER);
        assert!(matches!(
            read(&contents),
            Err(LaunchDashError::InvalidPayloadMass { row: 1, .. })
        ));
    }

    #[test]
    fn test_invalid_class_returns_error() {
        let contents = format!("{}\n1,CCAFS LC-40,3,100,B0003,v1.0\n", HEADER);
        assert!(matches!(
            read(&contents),
            Err(LaunchDashError::InvalidOutcomeClass { row: 1, .. })
        ));
    }

    #[test]
    fn test_empty_site_returns_error() {
        let contents = format!("{}\n1,,1,100,B0003,v1.0\n", HEADER);
        assert!(matches!(
            read(&contents),
            Err(LaunchDashError::MissingLaunchSite { row: 1 })
        ));
    }

    #[test]
    fn test_header_only_file_returns_error() {
        let contents = format!("{}\n", HEADER);
        assert!(matches!(read(&contents), Err(LaunchDashError::EmptyDataset)));
    }

    #[test]
    fn test_ragged_row_returns_error() {
        let contents = format!("{}\n1,CCAFS LC-40,1\n", HEADER);
        assert!(matches!(
            read(&contents),
            Err(LaunchDashError::DatasetReadError { .. })
        ));
    }
}
