//! The Validator.
//!
//! `validate` enforces the required-column contract on a [`RawTable`] and
//! projects each row down to the 15 canonical columns, discarding anything
//! extra. When the `Random URL` column is absent entirely, one avatar URL is
//! synthesized per row; when the column is present, every existing value is
//! preserved unchanged — even blank cells. Presence of the column
//! short-circuits all per-row synthesis.
//!
//! Pure transform: no store access, no filesystem access.

use rand::Rng;

use roster_core::schema::{self, AVATAR_URL_COLUMN};
use roster_core::{CandidateName, Record, SchemaError};

use crate::table::RawTable;

/// Avatar images are numbered `avatar_1.jpg` … `avatar_25.jpg` in the hosted
/// bucket; a synthesized URL picks one uniformly.
const AVATAR_URL_PREFIX: &str =
    "https://firebasestorage.googleapis.com/v0/b/reportcraft-164f6.appspot.com/o/avatar_";
const AVATAR_URL_SUFFIX: &str = ".jpg?alt=media&token=06d72c5c-cc8a-41ff-bf1f-1d12ccc7208f";
const AVATAR_CHOICES: u32 = 25;

// ---------------------------------------------------------------------------
// Column resolution
// ---------------------------------------------------------------------------

/// Positions of the canonical columns inside one particular input header.
struct Columns {
    candidate: usize,
    email: usize,
    location: usize,
    manager: usize,
    marketing_start_date: usize,
    open_to_relocate: usize,
    phone_number: usize,
    /// `None` means the column is absent and URLs get synthesized.
    avatar_url: Option<usize>,
    recruiter: usize,
    status: usize,
    team_lead: usize,
    technology: usize,
    upfront: usize,
    visa: usize,
    branch: usize,
}

impl Columns {
    /// Resolve against `table`. The caller has already run
    /// [`schema::check_headers`], so a miss here cannot happen in practice;
    /// it still maps to a `SchemaError` rather than a panic.
    fn resolve(table: &RawTable) -> Result<Self, SchemaError> {
        let col = |name: &str| {
            table.column(name).ok_or_else(|| SchemaError::MissingColumns {
                columns: vec![name.to_owned()],
            })
        };
        Ok(Columns {
            candidate: col("Candidate")?,
            email: col("Candidate's email address")?,
            location: col("Location")?,
            manager: col("Manager")?,
            marketing_start_date: col("Marketing start date")?,
            open_to_relocate: col("Open to Relocate")?,
            phone_number: col("Phone number")?,
            avatar_url: table.column(AVATAR_URL_COLUMN),
            recruiter: col("Recruiter")?,
            status: col("Status")?,
            team_lead: col("Team Lead")?,
            technology: col("Technology")?,
            upfront: col("Upfront")?,
            visa: col("Visa")?,
            branch: col("Branch")?,
        })
    }
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

/// Validate `table` against the schema and build the record batch.
///
/// Fails with [`SchemaError`] naming **every** missing required column. An
/// empty table with a valid header is fine and yields an empty batch.
pub fn validate(table: &RawTable) -> Result<Vec<Record>, SchemaError> {
    schema::check_headers(table.headers())?;
    let cols = Columns::resolve(table)?;

    if cols.avatar_url.is_none() {
        log::debug!(
            "input lacks '{AVATAR_URL_COLUMN}' column; synthesizing {} avatar URLs",
            table.row_count()
        );
    }

    let mut rng = rand::thread_rng();
    let mut records = Vec::with_capacity(table.row_count());
    for row in table.rows() {
        let cell = |i: usize| row.get(i).cloned().unwrap_or_default();
        let avatar_url = match cols.avatar_url {
            Some(i) => cell(i),
            None => synthesize_avatar_url(&mut rng),
        };
        records.push(Record {
            candidate: CandidateName::from(cell(cols.candidate)),
            email: cell(cols.email),
            location: cell(cols.location),
            manager: cell(cols.manager),
            marketing_start_date: cell(cols.marketing_start_date),
            open_to_relocate: cell(cols.open_to_relocate),
            phone_number: cell(cols.phone_number),
            avatar_url,
            recruiter: cell(cols.recruiter),
            status: cell(cols.status),
            team_lead: cell(cols.team_lead),
            technology: cell(cols.technology),
            upfront: cell(cols.upfront),
            visa: cell(cols.visa),
            branch: cell(cols.branch),
        });
    }
    Ok(records)
}

/// One fresh avatar URL: uniform draw of `avatar_{1..=25}.jpg`.
fn synthesize_avatar_url(rng: &mut impl Rng) -> String {
    let n = rng.gen_range(1..=AVATAR_CHOICES);
    format!("{AVATAR_URL_PREFIX}{n}{AVATAR_URL_SUFFIX}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use roster_core::schema::REQUIRED_COLUMNS;

    use super::*;

    /// A table whose header is the canonical 15 columns minus `dropped`,
    /// with `names.len()` rows. Cell values are `<column>:<candidate>` so
    /// tests can tell columns apart after projection.
    fn table_for(names: &[&str], dropped: &[&str]) -> RawTable {
        let headers: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| !dropped.contains(*c))
            .map(|c| c.to_string())
            .collect();
        let rows = names
            .iter()
            .map(|name| {
                headers
                    .iter()
                    .map(|h| {
                        if h == "Candidate" {
                            (*name).to_string()
                        } else {
                            format!("{h}:{name}")
                        }
                    })
                    .collect()
            })
            .collect();
        RawTable::new(headers, rows)
    }

    #[test]
    fn valid_table_produces_one_record_per_row() {
        let records = validate(&table_for(&["Alice", "Bob"], &[])).expect("validate");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].candidate, CandidateName::from("Alice"));
        assert_eq!(records[0].email, "Candidate's email address:Alice");
        assert_eq!(records[1].branch, "Branch:Bob");
    }

    #[test]
    fn empty_table_with_valid_header_yields_empty_batch() {
        let records = validate(&table_for(&[], &[])).expect("validate");
        assert!(records.is_empty());
    }

    #[test]
    fn extra_columns_are_discarded() {
        let mut headers: Vec<String> = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
        headers.push("Notes".into());
        let mut row: Vec<String> = REQUIRED_COLUMNS.iter().map(|c| format!("{c}:v")).collect();
        row.push("scratch".into());
        let table = RawTable::new(headers, vec![row]);

        let records = validate(&table).expect("validate");
        assert_eq!(records.len(), 1);
        // The projected record has no slot for the extra column; spot-check
        // that nothing shifted.
        assert_eq!(records[0].branch, "Branch:v");
    }

    #[test]
    fn shuffled_header_still_maps_by_name() {
        let mut headers: Vec<String> = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
        headers.reverse();
        let row: Vec<String> = headers.iter().map(|h| format!("{h}:v")).collect();
        let table = RawTable::new(headers, vec![row]);

        let records = validate(&table).expect("validate");
        assert_eq!(records[0].candidate, CandidateName::from("Candidate:v"));
        assert_eq!(records[0].visa, "Visa:v");
    }

    #[rstest]
    #[case::single(&["Visa"])]
    #[case::pair(&["Candidate", "Branch"])]
    #[case::scattered(&["Manager", "Recruiter", "Upfront"])]
    fn schema_error_names_every_missing_column(#[case] dropped: &[&str]) {
        let err = validate(&table_for(&["Alice"], dropped)).expect_err("must fail");
        let message = err.to_string();
        for column in dropped {
            assert!(
                message.contains(column),
                "message {message:?} missing {column:?}"
            );
        }
    }

    #[test]
    fn present_avatar_column_is_preserved_verbatim() {
        let records = validate(&table_for(&["Alice"], &[])).expect("validate");
        assert_eq!(records[0].avatar_url, "Random URL:Alice");
    }

    #[test]
    fn blank_avatar_cell_stays_blank() {
        let headers: Vec<String> = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
        let row: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .map(|c| {
                if *c == AVATAR_URL_COLUMN {
                    String::new()
                } else {
                    format!("{c}:v")
                }
            })
            .collect();
        let table = RawTable::new(headers, vec![row]);

        let records = validate(&table).expect("validate");
        assert_eq!(records[0].avatar_url, "");
    }

    #[test]
    fn absent_avatar_column_synthesizes_one_url_per_row() {
        let names = ["Alice", "Bob", "Carol", "Dan"];
        let records =
            validate(&table_for(&names, &[AVATAR_URL_COLUMN])).expect("validate");
        assert_eq!(records.len(), names.len());
        for record in &records {
            let url = &record.avatar_url;
            let n: u32 = url
                .strip_prefix(AVATAR_URL_PREFIX)
                .and_then(|rest| rest.strip_suffix(AVATAR_URL_SUFFIX))
                .and_then(|n| n.parse().ok())
                .unwrap_or_else(|| panic!("URL does not match template: {url}"));
            assert!((1..=AVATAR_CHOICES).contains(&n), "n out of range: {n}");
        }
    }

    #[test]
    fn synthesized_urls_cover_the_range_uniformly_enough() {
        // 200 draws over 25 buckets; each bucket is hit with overwhelming
        // probability, which pins down both bounds of the sample range.
        let names: Vec<String> = (0..200).map(|i| format!("c{i}")).collect();
        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let records =
            validate(&table_for(&name_refs, &[AVATAR_URL_COLUMN])).expect("validate");
        let mut seen = std::collections::HashSet::new();
        for record in &records {
            let n: u32 = record
                .avatar_url
                .strip_prefix(AVATAR_URL_PREFIX)
                .and_then(|rest| rest.strip_suffix(AVATAR_URL_SUFFIX))
                .and_then(|n| n.parse().ok())
                .expect("template");
            seen.insert(n);
        }
        assert!(seen.len() > 10, "draws look degenerate: {seen:?}");
        assert!(seen.iter().all(|n| (1..=AVATAR_CHOICES).contains(n)));
    }
}
