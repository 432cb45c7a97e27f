use serde::{Deserialize, Serialize};

/// The full declarative page content. Everything the views render comes
/// from this tree; it carries no layout or animation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub tagline: String,
    /// Rotating role strings shown under the name on the landing section.
    pub roles: Vec<String>,
    pub about: About,
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub coding_profiles: Vec<CodingProfile>,
    pub projects: Vec<Project>,
    pub articles: Vec<Article>,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency from 0 to 100, rendered as a gauge.
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodingProfile {
    pub name: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub excerpt: String,
    /// ISO date, rendered as-is.
    pub date: String,
    pub read_time: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

impl Portfolio {
    /// Built-in content used when no JSON file is given.
    pub fn sample() -> Self {
        Self {
            name: "Sam Okafor".into(),
            tagline: "Full-stack developer building fast, honest software".into(),
            roles: vec![
                "Full-Stack Developer".into(),
                "Systems Tinkerer".into(),
                "Open Source Contributor".into(),
            ],
            about: About {
                paragraphs: vec![
                    "I'm a developer with a soft spot for tools that feel instant. \
                     Most of my work lives at the boundary between a clean data model \
                     and the interface that makes it legible."
                        .into(),
                    "Lately that has meant terminal applications, profiling tooling, \
                     and the occasional web service. I like small codebases with \
                     sharp edges filed down."
                        .into(),
                    "I'm always happy to talk about text rendering, reactive state, \
                     or why your build is slow."
                        .into(),
                ],
                stats: vec![
                    Stat {
                        number: "6+".into(),
                        label: "Years Shipping".into(),
                    },
                    Stat {
                        number: "20+".into(),
                        label: "Projects Built".into(),
                    },
                    Stat {
                        number: "120+".into(),
                        label: "PRs Merged".into(),
                    },
                    Stat {
                        number: "3".into(),
                        label: "Languages Daily".into(),
                    },
                ],
                features: vec![
                    Feature {
                        title: "Clean Code".into(),
                        description: "Small modules, explicit data flow, tests that read like docs".into(),
                    },
                    Feature {
                        title: "Fast Feedback".into(),
                        description: "Tight edit-run loops and tooling that stays out of the way".into(),
                    },
                    Feature {
                        title: "User-Focused".into(),
                        description: "Interfaces judged by how quickly someone stops noticing them".into(),
                    },
                    Feature {
                        title: "Curious".into(),
                        description: "Happiest one abstraction layer below where the bug appears".into(),
                    },
                ],
            },
            skills: vec![
                SkillCategory {
                    title: "Languages".into(),
                    skills: vec![
                        Skill { name: "Rust".into(), level: 85 },
                        Skill { name: "TypeScript".into(), level: 80 },
                        Skill { name: "Python".into(), level: 70 },
                        Skill { name: "SQL".into(), level: 75 },
                    ],
                },
                SkillCategory {
                    title: "Backend".into(),
                    skills: vec![
                        Skill { name: "PostgreSQL".into(), level: 75 },
                        Skill { name: "Redis".into(), level: 65 },
                        Skill { name: "gRPC".into(), level: 60 },
                        Skill { name: "REST APIs".into(), level: 85 },
                    ],
                },
                SkillCategory {
                    title: "Tools & Others".into(),
                    skills: vec![
                        Skill { name: "Git".into(), level: 90 },
                        Skill { name: "Linux".into(), level: 85 },
                        Skill { name: "Docker".into(), level: 70 },
                        Skill { name: "Profiling".into(), level: 80 },
                    ],
                },
            ],
            coding_profiles: vec![
                CodingProfile {
                    name: "GitHub".into(),
                    username: "samokafor".into(),
                },
                CodingProfile {
                    name: "Codeberg".into(),
                    username: "sokafor".into(),
                },
                CodingProfile {
                    name: "exercism".into(),
                    username: "sam-ok".into(),
                },
            ],
            projects: vec![
                Project {
                    title: "ledgerline".into(),
                    description: "A terminal double-entry bookkeeping viewer with live \
                                  filtering and a running balance sparkline. Parses plain-text \
                                  ledger files and never writes them."
                        .into(),
                    tech: vec!["Rust".into(), "ratatui".into(), "serde".into()],
                    repo_url: Some("https://github.com/samokafor/ledgerline".into()),
                    demo_url: None,
                },
                Project {
                    title: "quickdeck".into(),
                    description: "Markdown-to-slides presenter for conference talks. One file \
                                  in, keyboard-driven deck out, with speaker notes on a second \
                                  screen."
                        .into(),
                    tech: vec!["TypeScript".into(), "Vite".into(), "WebSockets".into()],
                    repo_url: Some("https://github.com/samokafor/quickdeck".into()),
                    demo_url: Some("https://quickdeck.dev".into()),
                },
                Project {
                    title: "trailmap".into(),
                    description: "Self-hosted GPS track archive with elevation profiles and \
                                  heatmap tiles rendered server-side."
                        .into(),
                    tech: vec!["Rust".into(), "axum".into(), "PostGIS".into()],
                    repo_url: Some("https://github.com/samokafor/trailmap".into()),
                    demo_url: None,
                },
            ],
            articles: vec![
                Article {
                    title: "Terminal UIs Are Having a Moment".into(),
                    excerpt: "Why the humble grid of cells keeps out-surviving every \
                              rendering fashion, and what modern TUI toolkits get right."
                        .into(),
                    date: "2025-11-02".into(),
                    read_time: "9 min read".into(),
                    category: "Terminals".into(),
                },
                Article {
                    title: "Profiling Before Guessing".into(),
                    excerpt: "A field guide to finding the slow part: flame graphs, \
                              span traces, and the discipline of measuring first."
                        .into(),
                    date: "2025-08-17".into(),
                    read_time: "12 min read".into(),
                    category: "Performance".into(),
                },
                Article {
                    title: "State Cells Over Global Mutables".into(),
                    excerpt: "Replacing ambient shared state with single-writer cells \
                              and subscriptions, one refactor at a time."
                        .into(),
                    date: "2025-05-30".into(),
                    read_time: "7 min read".into(),
                    category: "Design".into(),
                },
                Article {
                    title: "The Case for Boring Serialization".into(),
                    excerpt: "JSON with serde, schema by construction, and why clever \
                              wire formats rarely pay their way in small tools."
                        .into(),
                    date: "2025-02-11".into(),
                    read_time: "6 min read".into(),
                    category: "Rust".into(),
                },
            ],
            contact: ContactInfo {
                email: "sam@okafor.dev".into(),
                location: Some("Rotterdam, NL".into()),
                socials: vec![
                    SocialLink {
                        name: "GitHub".into(),
                        url: "https://github.com/samokafor".into(),
                    },
                    SocialLink {
                        name: "Mastodon".into(),
                        url: "https://hachyderm.io/@samokafor".into(),
                    },
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_every_section_populated() {
        let p = Portfolio::sample();
        assert!(!p.name.is_empty());
        assert!(!p.about.paragraphs.is_empty());
        assert!(!p.skills.is_empty());
        assert!(!p.projects.is_empty());
        assert!(!p.articles.is_empty());
        assert!(!p.contact.email.is_empty());
    }

    #[test]
    fn sample_skill_levels_in_range() {
        let p = Portfolio::sample();
        for cat in &p.skills {
            for skill in &cat.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn roundtrips_through_json() {
        let p = Portfolio::sample();
        let json = serde_json::to_string(&p).unwrap_or_default();
        let back: Result<Portfolio, _> = serde_json::from_str(&json);
        assert!(back.is_ok());
    }
}
