// ABOUTME: Signature request record, the only entity tracked by signtrack
// ABOUTME: Carries creation time in nanoseconds and derives the "days pending" counter

use serde::{Deserialize, Serialize};

/// Nanoseconds in one day, used to derive the days-pending counter
pub const NANOS_PER_DAY: i64 = 86_400_000_000_000;

/// A request for someone to sign a linked document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureRequest {
    /// Store-assigned identifier, strictly increasing and never reused
    pub id: u64,
    /// Who the request is for
    pub name: String,
    /// Where the document lives
    pub link: String,
    /// Creation time in nanoseconds since the Unix epoch
    pub created_at: i64,
    pub notes: Option<String>,
    pub signed: bool,
}

impl SignatureRequest {
    /// Whole days elapsed since creation, or `None` once signed.
    ///
    /// Truncates toward zero, so a clock running behind `created_at`
    /// yields zero or a negative count rather than panicking.
    pub fn days_pending(&self, now_nanos: i64) -> Option<i64> {
        if self.signed {
            return None;
        }
        Some(now_nanos.saturating_sub(self.created_at) / NANOS_PER_DAY)
    }
}
