use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Query-string sentinel meaning "do not filter on this attribute".
pub const ALL: &str = "all";

/// One categorical filter: either the "all" sentinel or a concrete value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Missing, blank and `"all"` all mean no filter.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::All,
            Some(v) if v.eq_ignore_ascii_case(ALL) => Self::All,
            Some(v) => Self::Only(v.to_string()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(v) => Some(v.as_str()),
        }
    }

    pub fn query_value(&self) -> &str {
        self.value().unwrap_or(ALL)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Self::parse(Some(value))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    CreatedAt,
    Favorites,
}

impl SortKey {
    /// Unknown keys fall back to `CreatedAt`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("favorites") => Self::Favorites,
            _ => Self::CreatedAt,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::Favorites => "favorites",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CreatedAt => "掲載順",
            Self::Favorites => "お気に入り数順",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub keyword: String,
    pub area: Selection,
    pub industry: Selection,
    pub job_type: Selection,
    pub tag: Selection,
    pub sort: SortKey,
}

impl FilterCriteria {
    /// Trimmed, case-folded keyword, or `None` when the keyword filter is a no-op.
    pub fn folded_keyword(&self) -> Option<String> {
        let trimmed = self.keyword.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    pub fn is_unfiltered(&self) -> bool {
        self.folded_keyword().is_none()
            && self.area.is_all()
            && self.industry.is_all()
            && self.job_type.is_all()
            && self.tag.is_all()
    }
}

/// Criteria plus the active page of one listing view.
///
/// Any change to the criteria sends the view back to page 1 so a narrowed
/// result set never lands on an empty page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    criteria: FilterCriteria,
    page: u32,
}

impl Default for ListingView {
    fn default() -> Self {
        Self::new(FilterCriteria::default(), 1)
    }
}

impl ListingView {
    pub fn new(criteria: FilterCriteria, page: u32) -> Self {
        Self {
            criteria,
            page: page.max(1),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria != self.criteria {
            self.criteria = criteria;
            self.page = 1;
        }
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn update_criteria(&mut self, change: impl FnOnce(&mut FilterCriteria)) {
        let mut next = self.criteria.clone();
        change(&mut next);
        self.set_criteria(next);
    }
}
