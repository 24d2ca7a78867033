//! In-memory filter → sort → paginate pipeline for listing pages.
//!
//! Entities are fetched once per request and handed over as an immutable
//! slice; [`run`] derives the visible page from it without I/O and without
//! failure modes.

pub mod criteria;
mod entities;
pub mod filter;
pub mod paginate;
pub mod sort;

use chrono::{DateTime, Utc};

pub use criteria::{FilterCriteria, ListingView, Selection, SortKey, ALL};
pub use paginate::PAGE_SIZE;

/// A company, internship or recruitment as seen by the pipeline.
pub trait Listable {
    /// Fields the keyword filter searches. `None` entries never match.
    fn searchable_fields(&self) -> Vec<Option<&str>>;

    /// Free-text location matched by the area filter.
    fn location(&self) -> Option<&str>;

    fn industries(&self) -> Vec<&str>;

    fn job_types(&self) -> Vec<&str>;

    fn tag_ids(&self) -> Vec<String> {
        Vec::new()
    }

    fn created_at(&self) -> Option<DateTime<Utc>>;
}

#[derive(Debug)]
pub struct ListingPage<'a, T> {
    pub items: Vec<&'a T>,
    pub total: usize,
    pub page: u32,
    pub per_page: usize,
    pub total_pages: u32,
}

impl<'a, T> ListingPage<'a, T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

pub fn run<'a, T: Listable>(
    items: &'a [T],
    criteria: &FilterCriteria,
    page: u32,
) -> ListingPage<'a, T> {
    let mut matched = filter::filter_items(items, criteria);
    sort::sort_items(&mut matched, criteria.sort);

    let page = page.max(1);
    let window = paginate::page_window(&matched, page, PAGE_SIZE).to_vec();

    ListingPage {
        total: matched.len(),
        total_pages: paginate::total_pages(matched.len(), PAGE_SIZE),
        items: window,
        page,
        per_page: PAGE_SIZE,
    }
}

pub fn run_view<'a, T: Listable>(items: &'a [T], view: &ListingView) -> ListingPage<'a, T> {
    run(items, view.criteria(), view.page())
}

/// Distinct values in first-seen order, for building filter option lists.
pub fn distinct<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !value.is_empty() && !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Listable;
    use chrono::{DateTime, TimeZone, Utc};

    #[derive(Debug, Clone, Default)]
    pub struct Item {
        pub fields: Vec<Option<String>>,
        pub location: Option<String>,
        pub industries: Vec<String>,
        pub job_types: Vec<String>,
        pub tags: Vec<String>,
        pub created_at: Option<DateTime<Utc>>,
    }

    impl Item {
        pub fn titled(title: &str) -> Self {
            Self {
                fields: vec![Some(title.to_string())],
                ..Self::default()
            }
        }
        pub fn located(mut self, location: &str) -> Self {
            self.location = Some(location.to_string());
            self
        }
        pub fn industry(mut self, industry: &str) -> Self {
            self.industries.push(industry.to_string());
            self
        }
        pub fn job_type(mut self, job_type: &str) -> Self {
            self.job_types.push(job_type.to_string());
            self
        }
        pub fn tag(mut self, tag: &str) -> Self {
            self.tags.push(tag.to_string());
            self
        }
        pub fn created(mut self, at: DateTime<Utc>) -> Self {
            self.created_at = Some(at);
            self
        }
    }

    pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    impl Listable for Item {
        fn searchable_fields(&self) -> Vec<Option<&str>> {
            self.fields.iter().map(|f| f.as_deref()).collect()
        }
        fn location(&self) -> Option<&str> {
            self.location.as_deref()
        }
        fn industries(&self) -> Vec<&str> {
            self.industries.iter().map(String::as_str).collect()
        }
        fn job_types(&self) -> Vec<&str> {
            self.job_types.iter().map(String::as_str).collect()
        }
        fn tag_ids(&self) -> Vec<String> {
            self.tags.clone()
        }
        fn created_at(&self) -> Option<DateTime<Utc>> {
            self.created_at
        }
    }
}
