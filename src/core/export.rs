use crate::domain::model::ProjectionSeries;
use crate::domain::ports::Storage;
use crate::utils::error::{EstimatorError, Result};

/// Render the projection as CSV, one row per year.
pub fn projection_to_csv(series: &ProjectionSeries) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for point in series {
        writer.serialize(point)?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| EstimatorError::CsvError(csv::Error::from(e.into_error())))?;
    csv_text(data)
}

fn csv_text(data: Vec<u8>) -> Result<String> {
    String::from_utf8(data).map_err(|e| {
        EstimatorError::CsvError(csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e,
        )))
    })
}

pub fn export_projection<S: Storage>(storage: &S, path: &str, series: &ProjectionSeries) -> Result<()> {
    let csv_output = projection_to_csv(series)?;
    tracing::debug!("Writing projection CSV ({} rows) to {}", series.len(), path);
    storage.write_file(path, csv_output.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryStorage;
    use crate::domain::model::ProjectionPoint;

    fn series() -> ProjectionSeries {
        ProjectionSeries {
            points: vec![
                ProjectionPoint {
                    year: 1,
                    projected_sales: 10500.0,
                    in_house_cost: 7350.0,
                    third_party_cost: 2100.0,
                },
                ProjectionPoint {
                    year: 2,
                    projected_sales: 11025.0,
                    in_house_cost: 7350.0,
                    third_party_cost: 2205.0,
                },
            ],
        }
    }

    #[test]
    fn test_csv_layout() {
        let csv_output = projection_to_csv(&series()).unwrap();
        let lines: Vec<&str> = csv_output.lines().collect();

        assert_eq!(lines[0], "year,projected_sales,in_house_cost,third_party_cost");
        assert_eq!(lines[1], "1,10500.0,7350.0,2100.0");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_invalid_utf8_is_a_csv_error() {
        let err = csv_text(vec![b'1', 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, EstimatorError::CsvError(_)));
        assert_eq!(err.category(), crate::utils::error::ErrorCategory::Data);
    }

    #[test]
    fn test_empty_series_has_no_rows() {
        let csv_output = projection_to_csv(&ProjectionSeries::default()).unwrap();
        assert!(csv_output.is_empty());
    }

    #[test]
    fn test_export_writes_through_storage() {
        let storage = MemoryStorage::new();
        export_projection(&storage, "projection.csv", &series()).unwrap();

        let written = String::from_utf8(storage.get_file("projection.csv").unwrap()).unwrap();
        assert!(written.contains("2,11025.0,7350.0,2205.0"));
    }
}
