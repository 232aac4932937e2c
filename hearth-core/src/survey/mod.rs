//! Loading survey exports and mapping their rows to typed household records.

pub mod fields;

use crate::error::HearthError;
use csv::ReaderBuilder;
use fields::SurveyRow;
use std::{fs::File, io::Read};
use tracing::{debug, info};

/// A raw row together with its 1-based position in the export.
pub type NumberedRow = (usize, Result<SurveyRow, HearthError>);

/// Reads every row of a survey CSV file.
///
/// Rows that fail to decode are returned as per-row errors so the batch can
/// report them and move on. A missing or unreadable file, or one without any
/// data rows, fails the whole load.
pub fn load_survey(path: &str) -> Result<Vec<NumberedRow>, HearthError> {
    let file = File::open(path).map_err(|e| HearthError::FileIO(path.to_string(), e))?;
    let rows = read_survey(file, path)?;
    info!(path, rows = rows.len(), "loaded survey export");
    Ok(rows)
}

/// Like `load_survey`, for any reader. `source` names the input in errors.
pub fn read_survey<R: Read>(input: R, source: &str) -> Result<Vec<NumberedRow>, HearthError> {
    // Short rows are trailing blank answers; their missing cells read as absent.
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    let headers = reader
        .headers()
        .map_err(|e| HearthError::CsvError(source.to_string(), e))?
        .clone();
    debug!(columns = headers.len(), "read survey header");

    let rows: Vec<NumberedRow> = reader
        .records()
        .enumerate()
        .map(|(i, record)| {
            let row = i + 1;
            let parsed = record
                .map_err(|source| HearthError::MalformedRow { row, source })
                .and_then(|record| {
                    if record.len() > headers.len() {
                        return Err(HearthError::TooManyFields {
                            row,
                            expected: headers.len(),
                            found: record.len(),
                        });
                    }
                    Ok(headers.iter().zip(record.iter()).collect::<SurveyRow>())
                });
            (row, parsed)
        })
        .collect();

    if rows.is_empty() {
        return Err(HearthError::EmptyDataset(source.to_string()));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_in_order() {
        let data = "Q0_name,Q2_num_adults\nAsha,2\nRavi,4\n";
        let rows = read_survey(data.as_bytes(), "inline").unwrap();
        assert_eq!(rows.len(), 2);
        let (index, row) = &rows[1];
        assert_eq!(*index, 2);
        assert_eq!(row.as_ref().unwrap().get("Q0_name"), Some("Ravi"));
    }

    #[test]
    fn header_only_file_is_empty() {
        let err = read_survey("Q0_name,Q2_num_adults\n".as_bytes(), "inline").unwrap_err();
        assert!(matches!(err, HearthError::EmptyDataset(ref s) if s == "inline"));
    }

    #[test]
    fn ragged_row_is_reported_per_row() {
        let data = "Q0_name,Q2_num_adults\nAsha,2\nRavi,4,extra\nMeera,1\n";
        let rows = read_survey(data.as_bytes(), "inline").unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].1.is_ok());
        assert!(matches!(
            rows[1].1,
            Err(HearthError::TooManyFields { row: 2, expected: 2, found: 3 })
        ));
        assert!(rows[2].1.is_ok());
    }

    #[test]
    fn short_row_leaves_trailing_answers_absent() {
        let data = "Q0_name,Q2_num_adults,Q9_num_refrigerators\nAsha,2\n";
        let rows = read_survey(data.as_bytes(), "inline").unwrap();
        let row = rows[0].1.as_ref().unwrap();
        assert_eq!(row.get("Q0_name"), Some("Asha"));
        assert_eq!(row.get("Q9_num_refrigerators"), None);

        let household = row.to_household();
        assert_eq!(household.respondent.num_adults, 2.0);
        assert_eq!(household.refrigerators.count, 0.0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_survey("/nonexistent/survey.csv").unwrap_err();
        assert!(matches!(err, HearthError::FileIO(..)));
    }
}
