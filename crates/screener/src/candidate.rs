use serde::{Deserialize, Serialize};

use crate::contact::ContactInfo;
use crate::scoring::Status;

/// One evaluated resume, as persisted in the candidate collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(flatten)]
    pub contact: ContactInfo,
    pub content_score: f64,
    pub structure_score: u8,
    pub final_score: f64,
    pub threshold: f64,
    pub status: Status,
    pub resume_filename: String,
}

impl CandidateRecord {
    /// Whether this record is addressed by the `(email, phone)` deletion key.
    pub fn matches_contact(&self, email: &str, phone: &str) -> bool {
        self.contact.email == email && self.contact.phone == phone
    }
}
