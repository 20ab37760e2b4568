//! # JobQuery — canonical search/filter/pagination descriptor
//!
//! [`JobFilter`] holds everything the job browser can filter on and
//! serializes to a *canonical* query string: fixed field order, empty
//! fields omitted, numbers as decimal integers, `page` always present.
//! Because the string is deterministic, it doubles as the resource key the
//! fetch layer compares to decide whether a refetch is needed — equal
//! strings mean the previous result is still valid.
//!
//! The one stateful rule lives in [`JobFilter::set`]: mutating any filter
//! field snaps `page` back to 1 (a changed filter invalidates the old page
//! position), while paging itself leaves the filters alone.

use serde::{Deserialize, Serialize};

/// Search, filter, and pagination state for the job listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFilter {
    pub search: String,
    pub location: String,
    pub job_type: String,
    pub salary_min: Option<u64>,
    pub salary_max: Option<u64>,
    pub page: u32,
}

impl Default for JobFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            location: String::new(),
            job_type: String::new(),
            salary_min: None,
            salary_max: None,
            page: 1,
        }
    }
}

/// A mutable field of [`JobFilter`], for wiring generic input handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Search,
    Location,
    JobType,
    SalaryMin,
    SalaryMax,
    Page,
}

impl JobFilter {
    /// Return a copy with `field` set from the raw input string.
    ///
    /// Every filter-field change resets `page` to 1; changing `Page` leaves
    /// the filters untouched. Numeric fields parse leniently: input that is
    /// not a decimal integer clears the field.
    pub fn set(&self, field: FilterField, value: &str) -> JobFilter {
        let mut next = self.clone();
        match field {
            FilterField::Search => next.search = value.to_string(),
            FilterField::Location => next.location = value.to_string(),
            FilterField::JobType => next.job_type = value.to_string(),
            FilterField::SalaryMin => next.salary_min = value.trim().parse().ok(),
            FilterField::SalaryMax => next.salary_max = value.trim().parse().ok(),
            FilterField::Page => {
                next.page = value.trim().parse().unwrap_or(1).max(1);
                return next;
            }
        }
        next.page = 1;
        next
    }

    /// Copy with the given page (clamped to ≥ 1), filters untouched.
    pub fn with_page(&self, page: u32) -> JobFilter {
        let mut next = self.clone();
        next.page = page.max(1);
        next
    }

    /// The canonical query string: `search, location, type, salary_min,
    /// salary_max, page`, empty fields omitted, `page` always emitted.
    pub fn query_string(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(6);
        if !self.search.is_empty() {
            parts.push(format!("search={}", encode(&self.search)));
        }
        if !self.location.is_empty() {
            parts.push(format!("location={}", encode(&self.location)));
        }
        if !self.job_type.is_empty() {
            parts.push(format!("type={}", encode(&self.job_type)));
        }
        if let Some(min) = self.salary_min {
            parts.push(format!("salary_min={min}"));
        }
        if let Some(max) = self.salary_max {
            parts.push(format!("salary_max={max}"));
        }
        parts.push(format!("page={}", self.page));
        parts.join("&")
    }
}

/// Percent-encode a query value. Unreserved characters pass through;
/// everything else is emitted as UTF-8 `%XX` triplets, so equal inputs
/// always yield byte-identical output.
fn encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_serializes_to_page_only() {
        assert_eq!(JobFilter::default().query_string(), "page=1");
    }

    #[test]
    fn every_filter_field_mutation_resets_page() {
        let paged = JobFilter::default().with_page(4);
        for (field, value) in [
            (FilterField::Search, "react"),
            (FilterField::Location, "Jakarta"),
            (FilterField::JobType, "Full-time"),
            (FilterField::SalaryMin, "5000000"),
            (FilterField::SalaryMax, "9000000"),
        ] {
            assert_eq!(paged.set(field, value).page, 1, "{field:?}");
        }
    }

    #[test]
    fn page_change_keeps_filters() {
        let filter = JobFilter::default()
            .set(FilterField::Search, "rust")
            .set(FilterField::Location, "Bandung");
        let paged = filter.set(FilterField::Page, "3");
        assert_eq!(paged.page, 3);
        assert_eq!(paged.search, "rust");
        assert_eq!(paged.location, "Bandung");
    }

    #[test]
    fn fields_are_omitted_iff_empty_and_order_is_fixed() {
        let filter = JobFilter::default()
            .set(FilterField::Search, "backend engineer")
            .set(FilterField::JobType, "Contract")
            .set(FilterField::SalaryMin, "7000000");
        assert_eq!(
            filter.query_string(),
            "search=backend%20engineer&type=Contract&salary_min=7000000&page=1"
        );

        // Clearing a field removes it again.
        let cleared = filter.set(FilterField::SalaryMin, "");
        assert_eq!(
            cleared.query_string(),
            "search=backend%20engineer&type=Contract&page=1"
        );
    }

    #[test]
    fn non_numeric_salary_input_clears_the_field() {
        let filter = JobFilter::default().set(FilterField::SalaryMin, "lots");
        assert_eq!(filter.salary_min, None);
        assert_eq!(filter.query_string(), "page=1");
    }

    #[test]
    fn invalid_page_input_falls_back_to_one() {
        assert_eq!(JobFilter::default().set(FilterField::Page, "zero").page, 1);
        assert_eq!(JobFilter::default().set(FilterField::Page, "0").page, 1);
        assert_eq!(JobFilter::default().with_page(0).page, 1);
    }

    #[test]
    fn distinct_filters_produce_distinct_canonical_strings() {
        let first = JobFilter::default().set(FilterField::Search, "react");
        let second = first.set(FilterField::Location, "Jakarta");
        assert_ne!(first.query_string(), second.query_string());

        // Equal state, equal key — no refetch would be triggered.
        assert_eq!(
            first.query_string(),
            JobFilter::default().set(FilterField::Search, "react").query_string()
        );
    }
}
