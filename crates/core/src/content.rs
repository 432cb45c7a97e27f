use thiserror::Error;

use crate::model::Portfolio;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed content file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid content: {0}")]
    Invalid(String),
}

/// Parse a portfolio content file (JSON) and validate it.
pub fn parse(data: &[u8]) -> Result<Portfolio, ContentError> {
    let portfolio: Portfolio = serde_json::from_slice(data)?;
    validate(&portfolio)?;
    Ok(portfolio)
}

/// Semantic checks the type system can't express.
fn validate(portfolio: &Portfolio) -> Result<(), ContentError> {
    if portfolio.name.trim().is_empty() {
        return Err(ContentError::Invalid("name must not be empty".into()));
    }
    if portfolio.contact.email.trim().is_empty() {
        return Err(ContentError::Invalid(
            "contact.email must not be empty".into(),
        ));
    }
    for category in &portfolio.skills {
        for skill in &category.skills {
            if skill.level > 100 {
                return Err(ContentError::Invalid(format!(
                    "skill level {} for '{}' exceeds 100",
                    skill.level, skill.name
                )));
            }
        }
    }
    if portfolio.projects.is_empty() {
        return Err(ContentError::Invalid(
            "at least one project is required".into(),
        ));
    }
    Ok(())
}
