//! Parsed-but-unvalidated tabular input.

/// A header row plus data rows of string cells, exactly as they appeared in
/// the input file. Extra columns survive to this point; the validator
/// projects them away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Invariant: every row has exactly `headers.len()` cells. The CSV
    /// reader enforces this; hand-built tables (tests) must too.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == headers.len()));
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of the column named `name`, if present.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}
