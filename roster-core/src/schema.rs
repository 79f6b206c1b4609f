//! Required-column schema for candidate input files.
//!
//! The canonical column order here is the order fields appear on
//! [`crate::types::Record`]; validated output always projects down to these
//! 15 columns regardless of how the input file ordered them.

use crate::error::SchemaError;

/// The 15 columns every validated record carries, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 15] = [
    "Candidate",
    "Candidate's email address",
    "Location",
    "Manager",
    "Marketing start date",
    "Open to Relocate",
    "Phone number",
    "Random URL",
    "Recruiter",
    "Status",
    "Team Lead",
    "Technology",
    "Upfront",
    "Visa",
    "Branch",
];

/// The one optional column: absent it is synthesized per row, present it is
/// preserved verbatim.
pub const AVATAR_URL_COLUMN: &str = "Random URL";

/// Columns that must be present in the input header, in canonical order.
///
/// `Random URL` is excluded — its absence triggers synthesis, not rejection.
pub fn hard_required_columns() -> impl Iterator<Item = &'static str> {
    REQUIRED_COLUMNS
        .into_iter()
        .filter(|c| *c != AVATAR_URL_COLUMN)
}

/// Check `headers` against the schema.
///
/// Returns `SchemaError::MissingColumns` naming **every** absent required
/// column (canonical order), or `Ok(())` when the header satisfies the
/// contract.
pub fn check_headers(headers: &[String]) -> Result<(), SchemaError> {
    let missing: Vec<String> = hard_required_columns()
        .filter(|required| !headers.iter().any(|h| h == required))
        .map(str::to_owned)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::MissingColumns { columns: missing })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn headers_without(dropped: &[&str]) -> Vec<String> {
        REQUIRED_COLUMNS
            .iter()
            .filter(|c| !dropped.contains(*c))
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn full_header_passes() {
        let headers = headers_without(&[]);
        assert!(check_headers(&headers).is_ok());
    }

    #[test]
    fn header_order_is_irrelevant() {
        let mut headers = headers_without(&[]);
        headers.reverse();
        assert!(check_headers(&headers).is_ok());
    }

    #[test]
    fn extra_columns_are_tolerated() {
        let mut headers = headers_without(&[]);
        headers.push("Notes".into());
        assert!(check_headers(&headers).is_ok());
    }

    #[test]
    fn missing_avatar_column_is_not_an_error() {
        let headers = headers_without(&[AVATAR_URL_COLUMN]);
        assert!(check_headers(&headers).is_ok());
    }

    #[rstest]
    #[case::single(&["Visa"])]
    #[case::pair(&["Candidate", "Branch"])]
    #[case::scattered(&["Manager", "Recruiter", "Upfront"])]
    fn error_names_every_missing_column(#[case] dropped: &[&str]) {
        let headers = headers_without(dropped);
        let err = check_headers(&headers).expect_err("must fail");
        let message = err.to_string();
        for column in dropped {
            assert!(
                message.contains(column),
                "message {message:?} missing {column:?}"
            );
        }
    }

    #[test]
    fn missing_columns_reported_in_canonical_order() {
        let headers = headers_without(&["Visa", "Location", "Status"]);
        let SchemaError::MissingColumns { columns } = check_headers(&headers).unwrap_err();
        assert_eq!(columns, vec!["Location", "Status", "Visa"]);
    }

    #[test]
    fn empty_header_reports_all_fourteen_hard_required() {
        let SchemaError::MissingColumns { columns } = check_headers(&[]).unwrap_err();
        assert_eq!(columns.len(), 14);
        assert!(!columns.iter().any(|c| c == AVATAR_URL_COLUMN));
    }
}
