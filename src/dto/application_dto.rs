use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::application::{ApplicationSummary, ApplicationType};

/// Exactly one of the two targets must be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ApplyPayload {
    pub internship_id: Option<Uuid>,
    pub recruitment_id: Option<Uuid>,
}

impl ApplyPayload {
    pub fn target(&self) -> Result<(ApplicationType, Uuid)> {
        match (self.internship_id, self.recruitment_id) {
            (Some(id), None) => Ok((ApplicationType::Internship, id)),
            (None, Some(id)) => Ok((ApplicationType::Recruitment, id)),
            (None, None) => Err(Error::BadRequest(
                "internship_id or recruitment_id is required".to_string(),
            )),
            (Some(_), Some(_)) => Err(Error::BadRequest(
                "Only one of internship_id or recruitment_id may be set".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApplicationListResponse {
    pub items: Vec<ApplicationSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_requires_exactly_one_id() {
        let id = Uuid::new_v4();
        let internship = ApplyPayload {
            internship_id: Some(id),
            recruitment_id: None,
        };
        assert_eq!(internship.target().unwrap(), (ApplicationType::Internship, id));

        assert!(ApplyPayload::default().target().is_err());
        let both = ApplyPayload {
            internship_id: Some(id),
            recruitment_id: Some(id),
        };
        assert!(both.target().is_err());
    }
}
