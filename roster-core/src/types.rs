//! Domain types for the Roster importer.
//!
//! A [`Record`] mirrors one row of the candidate CSV; serde renames keep the
//! serialized field names identical to the input column headers, so a
//! persisted document reads the same as the file it came from.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed candidate name — the reconciliation key.
///
/// Uniqueness is only checked against the store snapshot taken at the start
/// of a run; the store itself does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateName(pub String);

impl fmt::Display for CandidateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for CandidateName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CandidateName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One validated candidate entry carrying exactly the 15 required attributes.
///
/// All values are kept as strings: the importer moves rows between a CSV file
/// and a document collection without interpreting them. `avatar_url` is
/// always populated by the time a `Record` exists — either copied from the
/// input or synthesized by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Candidate")]
    pub candidate: CandidateName,
    #[serde(rename = "Candidate's email address")]
    pub email: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Manager")]
    pub manager: String,
    #[serde(rename = "Marketing start date")]
    pub marketing_start_date: String,
    #[serde(rename = "Open to Relocate")]
    pub open_to_relocate: String,
    #[serde(rename = "Phone number")]
    pub phone_number: String,
    #[serde(rename = "Random URL")]
    pub avatar_url: String,
    #[serde(rename = "Recruiter")]
    pub recruiter: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Team Lead")]
    pub team_lead: String,
    #[serde(rename = "Technology")]
    pub technology: String,
    #[serde(rename = "Upfront")]
    pub upfront: String,
    #[serde(rename = "Visa")]
    pub visa: String,
    #[serde(rename = "Branch")]
    pub branch: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
