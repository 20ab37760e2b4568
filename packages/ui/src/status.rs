//! Presentation lookup for application statuses. Pure display mapping —
//! the workflow itself lives in `api::applications`.

use api::ApplicationStatus;

/// Human-readable badge text.
pub fn status_label(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Applied => "Applied",
        ApplicationStatus::Shortlisted => "Shortlisted",
        ApplicationStatus::Accepted => "Accepted",
        ApplicationStatus::Rejected => "Rejected",
    }
}

/// CSS class selecting the badge color.
pub fn status_class(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Applied => "status-applied",
        ApplicationStatus::Shortlisted => "status-shortlisted",
        ApplicationStatus::Accepted => "status-accepted",
        ApplicationStatus::Rejected => "status-rejected",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_distinct_badge() {
        let all = [
            ApplicationStatus::Applied,
            ApplicationStatus::Shortlisted,
            ApplicationStatus::Accepted,
            ApplicationStatus::Rejected,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(status_label(*a), status_label(*b));
                assert_ne!(status_class(*a), status_class(*b));
            }
        }
    }
}
