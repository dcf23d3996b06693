//! Content validation
//!
//! Validation never rejects content. It collects [`ContentWarning`]s so the
//! page can still render with the offending pieces treated as absent.

use rustc_hash::FxHashSet;
use tracing::warn;
use url::Url;

use crate::model::PortfolioContent;

/// Something questionable in otherwise loadable content
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentWarning {
    /// Two projects share a title, so the title no longer identifies a card
    DuplicateProjectTitle(String),
    /// A link that is not an absolute http(s) or mailto URL. It is omitted.
    InvalidLink {
        field: String,
        value: String,
        reason: String,
    },
    /// A field that every entry should carry is blank
    EmptyField(String),
}

impl std::fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentWarning::DuplicateProjectTitle(title) => {
                write!(f, "duplicate project title {title:?}")
            }
            ContentWarning::InvalidLink {
                field,
                value,
                reason,
            } => write!(f, "{field}: invalid link {value:?} ({reason})"),
            ContentWarning::EmptyField(field) => write!(f, "{field} is empty"),
        }
    }
}

/// Check a link and explain why it is rejected
pub fn check_link(link: &str) -> Result<(), String> {
    match Url::parse(link) {
        Ok(url) => match url.scheme() {
            "http" | "https" if url.host().is_some() => Ok(()),
            "http" | "https" => Err("missing host".to_string()),
            "mailto" => Ok(()),
            other => Err(format!("unsupported scheme '{other}'")),
        },
        Err(e) => Err(e.to_string()),
    }
}

/// Whether a link may be rendered
pub fn is_valid_link(link: &str) -> bool {
    check_link(link).is_ok()
}

/// Collect every warning for `content`, logging each one
pub fn validate(content: &PortfolioContent) -> Vec<ContentWarning> {
    let mut warnings = Vec::new();

    if content.profile.name.trim().is_empty() {
        warnings.push(ContentWarning::EmptyField("Profile.name".into()));
    }
    for (platform, link) in &content.profile.links {
        push_link(&mut warnings, format!("Profile.links.{platform}"), link);
    }

    for (i, entry) in content.education.iter().enumerate() {
        if entry.school.trim().is_empty() {
            warnings.push(ContentWarning::EmptyField(format!("Education[{i}].school")));
        }
    }
    for (i, entry) in content.experience.iter().enumerate() {
        if entry.org.trim().is_empty() {
            warnings.push(ContentWarning::EmptyField(format!("experience[{i}].org")));
        }
    }

    let mut seen = FxHashSet::default();
    let mut reported = FxHashSet::default();
    for (i, project) in content.projects.iter().enumerate() {
        if project.title.trim().is_empty() {
            warnings.push(ContentWarning::EmptyField(format!("projects[{i}].title")));
        } else if !seen.insert(project.title.as_str()) && reported.insert(project.title.as_str())
        {
            warnings.push(ContentWarning::DuplicateProjectTitle(project.title.clone()));
        }
        if let Some(link) = &project.link {
            push_link(&mut warnings, format!("projects[{i}].link"), link);
        }
    }

    for warning in &warnings {
        warn!("{}", warning);
    }
    warnings
}

fn push_link(warnings: &mut Vec<ContentWarning>, field: String, link: &str) {
    if let Err(reason) = check_link(link) {
        warnings.push(ContentWarning::InvalidLink {
            field,
            value: link.to_string(),
            reason,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Profile, ProjectEntry};

    fn project(title: &str, link: Option<&str>) -> ProjectEntry {
        ProjectEntry {
            title: title.into(),
            link: link.map(Into::into),
            ..ProjectEntry::default()
        }
    }

    #[test]
    fn test_check_link() {
        assert!(is_valid_link("https://github.com/someone"));
        assert!(is_valid_link("http://example.com"));
        assert!(is_valid_link("mailto:someone@example.com"));
        assert!(!is_valid_link("github.com/someone"));
        assert!(!is_valid_link("ftp://example.com/file"));
        assert!(!is_valid_link(""));
    }

    #[test]
    fn test_duplicate_titles_reported_once() {
        let content = PortfolioContent {
            profile: Profile {
                name: "Someone".into(),
                ..Profile::default()
            },
            projects: vec![
                project("Same", None),
                project("Same", None),
                project("Same", None),
                project("Other", None),
            ],
            ..PortfolioContent::default()
        };
        let warnings = validate(&content);
        assert_eq!(
            warnings,
            vec![ContentWarning::DuplicateProjectTitle("Same".into())]
        );
    }

    #[test]
    fn test_invalid_link_and_empty_name() {
        let content = PortfolioContent {
            projects: vec![project("P", Some("nope"))],
            ..PortfolioContent::default()
        };
        let warnings = validate(&content);
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0], ContentWarning::EmptyField("Profile.name".into()));
        assert!(matches!(
            &warnings[1],
            ContentWarning::InvalidLink { field, value, .. }
                if field == "projects[0].link" && value == "nope"
        ));
    }
}
