//! Dashboard aggregation over the interview list.
//!
//! The dashboard fetches all interviews once and derives its charts
//! client-side; only the counting lives here, rendering does not.

use crate::entities::{Interview, InterviewResult, InterviewStatus};

/// Count interviews per status, in enum order, including zero buckets.
#[must_use]
pub fn status_counts(interviews: &[Interview]) -> Vec<(InterviewStatus, usize)> {
    InterviewStatus::ALL
        .into_iter()
        .map(|status| {
            let count = interviews.iter().filter(|iv| iv.status == status).count();
            (status, count)
        })
        .collect()
}

/// Count interviews per result. An absent result counts as `Na`.
#[must_use]
pub fn result_counts(interviews: &[Interview]) -> Vec<(InterviewResult, usize)> {
    InterviewResult::ALL
        .into_iter()
        .map(|result| {
            let count = interviews
                .iter()
                .filter(|iv| iv.result.unwrap_or(InterviewResult::Na) == result)
                .count();
            (result, count)
        })
        .collect()
}

/// Interviews not yet held, soonest first. Entries without a start time
/// are excluded.
#[must_use]
pub fn upcoming(interviews: &[Interview], now: time::OffsetDateTime) -> Vec<&Interview> {
    let mut pending: Vec<&Interview> = interviews
        .iter()
        .filter(|iv| {
            matches!(iv.status, InterviewStatus::New | InterviewStatus::Invited)
                && iv.start_time.is_some_and(|start| start > now)
        })
        .collect();
    pending.sort_by_key(|iv| iv.start_time);
    pending
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod tests;
