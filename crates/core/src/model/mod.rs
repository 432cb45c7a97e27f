pub mod form;
pub mod portfolio;
pub mod section;

pub use form::{ContactFormView, FieldView, SubmitStatus};
pub use portfolio::{
    About, Article, CodingProfile, ContactInfo, Feature, Portfolio, Project, Skill, SkillCategory,
    SocialLink, Stat,
};
pub use section::{SectionId, SectionMetrics};
