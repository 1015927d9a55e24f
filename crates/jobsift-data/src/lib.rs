//! jobsift-data — dataset source adapters for jobsift.
//!
//! Currently one source: a CSV file in the Glassdoor export shape. The
//! adapter reads raw rows and yields [`jobsift_core::RawRecord`] values for
//! the normalizer; it does no cleaning of its own.
//!
//! The header row is a contract: the columns named in [`REQUIRED_COLUMNS`]
//! must be present, spelled exactly. Extra columns are ignored. The company
//! column routinely contains a quoted embedded newline (`"Acme\n3.8"`),
//! which is why this goes through a real CSV reader instead of line
//! splitting.

use std::path::Path;

use jobsift_core::RawRecord;
use serde::Deserialize;
use thiserror::Error;

/// Column names the source file must carry, exactly as spelled here.
pub const REQUIRED_COLUMNS: [&str; 3] = ["Job Title", "Salary Estimate", "Company Name"];

/// Why a source file could not be loaded.
///
/// Loading is all-or-nothing: a file that violates the contract produces
/// no dataset at all rather than a partial one.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("required column {0:?} missing from header row")]
    MissingColumn(&'static str),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// One row as serde sees it. Only the contract columns are bound; csv
/// ignores the rest.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Job Title")]
    title: String,
    #[serde(rename = "Salary Estimate")]
    salary: String,
    #[serde(rename = "Company Name")]
    company: String,
}

/// Read every listing row from `path`.
///
/// Returns the rows in file order, one [`RawRecord`] per data row. The
/// header is validated up front so a missing column surfaces as
/// [`LoadError::MissingColumn`] instead of a per-row deserialize error.
pub fn load_csv(path: &Path) -> Result<Vec<RawRecord>, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = reader.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::MissingColumn(required));
        }
    }

    let mut rows = Vec::new();
    for result in reader.deserialize::<CsvRow>() {
        let row = result?;
        rows.push(RawRecord {
            title: row.title,
            salary_text: row.salary,
            company_text: row.company,
        });
    }

    tracing::debug!(rows = rows.len(), path = %path.display(), "csv loaded");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp csv");
        file.write_all(contents.as_bytes()).expect("write temp csv");
        file
    }

    #[test]
    fn loads_rows_in_order() {
        let file = write_csv(
            "Job Title,Salary Estimate,Company Name\n\
             Data Scientist,$53K-$91K (Glassdoor est.),\"Tecolote Research\n3.8\"\n\
             Analyst,$90K (Employer est.),Unknown Corp\n",
        );
        let rows = load_csv(file.path()).expect("load");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "Data Scientist");
        assert_eq!(rows[0].company_text, "Tecolote Research\n3.8");
        assert_eq!(rows[1].salary_text, "$90K (Employer est.)");
    }

    #[test]
    fn missing_column_is_typed() {
        let file = write_csv("Job Title,Company Name\nData Scientist,Acme\n");
        match load_csv(file.path()) {
            Err(LoadError::MissingColumn(col)) => assert_eq!(col, "Salary Estimate"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn extra_columns_ignored() {
        let file = write_csv(
            "Location,Job Title,Salary Estimate,Company Name,Founded\n\
             NM,Data Scientist,$53K-$91K,\"Acme\n4.0\",1973\n",
        );
        let rows = load_csv(file.path()).expect("load");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].company_text, "Acme\n4.0");
    }

    #[test]
    fn unreadable_path_is_io() {
        let missing = Path::new("/nonexistent/jobs.csv");
        assert!(matches!(load_csv(missing), Err(LoadError::Io { .. })));
    }
}
