use chrono::{DateTime, Utc};

use super::Listable;
use crate::models::{company::Company, internship::Internship, recruitment::Recruitment};

impl Listable for Company {
    fn searchable_fields(&self) -> Vec<Option<&str>> {
        let data = self.data.as_ref();
        vec![
            Some(self.name.as_str()),
            self.name_kana.as_deref(),
            data.and_then(|d| d.profile.as_deref()),
            data.and_then(|d| d.business_content.as_deref()),
        ]
    }

    fn location(&self) -> Option<&str> {
        Company::location(self)
    }

    fn industries(&self) -> Vec<&str> {
        self.industry().into_iter().collect()
    }

    fn job_types(&self) -> Vec<&str> {
        self.recruitment_job_types.iter().map(String::as_str).collect()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl Listable for Internship {
    fn searchable_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.title.as_deref(),
            Some(self.company.name.as_str()),
            self.company.name_kana.as_deref(),
            self.job_type_description.as_deref(),
            self.job_description.as_deref(),
        ]
    }

    fn location(&self) -> Option<&str> {
        self.work_location.as_deref()
    }

    fn industries(&self) -> Vec<&str> {
        self.company.industry.as_deref().into_iter().collect()
    }

    fn job_types(&self) -> Vec<&str> {
        self.job_type.as_deref().into_iter().collect()
    }

    fn tag_ids(&self) -> Vec<String> {
        self.tags.iter().map(|tag| tag.id.to_string()).collect()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl Listable for Recruitment {
    fn searchable_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.company.name.as_str()),
            self.company.name_kana.as_deref(),
            self.job_type.as_deref(),
            self.job_type_description.as_deref(),
            self.job_description.as_deref(),
        ]
    }

    fn location(&self) -> Option<&str> {
        self.work_location.as_deref()
    }

    fn industries(&self) -> Vec<&str> {
        self.company.industry.as_deref().into_iter().collect()
    }

    fn job_types(&self) -> Vec<&str> {
        self.job_type.as_deref().into_iter().collect()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}
