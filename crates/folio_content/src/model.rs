//! Portfolio content schema
//!
//! Field names follow the bundled data file. Every optional field is an
//! explicit `Option` (or a possibly-empty list) and absent means "leave that
//! region out", never an error:
//!
//! | Field                       | Absent ⇒                     |
//! |-----------------------------|------------------------------|
//! | `Profile.location/email/phone` | quick-info item omitted   |
//! | `Profile.summary`           | summary paragraph omitted    |
//! | `Profile.links.*`           | contact button omitted       |
//! | `EducationEntry.meta`       | metric pill omitted          |
//! | `ExperienceEntry.points`    | bullet list omitted          |
//! | `ProjectEntry.stack`        | tag row omitted              |
//! | `ProjectEntry.highlights`   | highlight list omitted       |
//! | `ProjectEntry.link`         | project link omitted         |

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::validate::is_valid_link;

/// The whole portfolio record
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    #[serde(rename = "Profile")]
    pub profile: Profile,
    #[serde(rename = "Education", default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub skills: SkillGroups,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl PortfolioContent {
    /// Turn blank optional strings into `None` and drop blank list items
    pub fn normalize(&mut self) {
        let p = &mut self.profile;
        for field in [&mut p.location, &mut p.email, &mut p.phone, &mut p.summary] {
            blank_to_none(field);
        }
        p.links.retain(|_, url| !url.trim().is_empty());

        for entry in &mut self.education {
            blank_to_none(&mut entry.meta);
        }
        for entry in &mut self.experience {
            drop_blank(&mut entry.points);
        }
        for project in &mut self.projects {
            blank_to_none(&mut project.link);
            drop_blank(&mut project.stack);
            drop_blank(&mut project.highlights);
        }
        for skills in self.skills.0.values_mut() {
            drop_blank(skills);
        }
        drop_blank(&mut self.achievements);
    }
}

fn blank_to_none(field: &mut Option<String>) {
    if field.as_deref().is_some_and(|s| s.trim().is_empty()) {
        *field = None;
    }
}

fn drop_blank(items: &mut Vec<String>) {
    items.retain(|s| !s.trim().is_empty());
}

/// Who the portfolio is about
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Platform name to URL, in display order
    #[serde(default)]
    pub links: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Profile {
    /// Links that parse as absolute URLs, in display order
    pub fn valid_links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.links
            .iter()
            .filter(|(_, url)| is_valid_link(url))
            .map(|(platform, url)| (platform.as_str(), url.as_str()))
    }

    /// A single link by platform name, if present and valid
    pub fn link(&self, platform: &str) -> Option<&str> {
        self.links
            .get(platform)
            .map(String::as_str)
            .filter(|url| is_valid_link(url))
    }
}

/// One school or degree
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    #[serde(default)]
    pub degree: String,
    /// Free-form grade text such as "CGPA: 8.00"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    #[serde(default)]
    pub period: String,
}

/// One position held
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub org: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub points: Vec<String>,
}

/// One showcased project. The title is its display key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ProjectEntry {
    /// The external link, if present and a valid absolute URL
    pub fn valid_link(&self) -> Option<&str> {
        self.link.as_deref().filter(|url| is_valid_link(url))
    }
}

/// Skill category name to skill names, both in display order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillGroups(pub IndexMap<String, Vec<String>>);

impl SkillGroups {
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.0.get(category).map(Vec::as_slice)
    }

    /// Categories in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, Vec<V>)> for SkillGroups {
    fn from_iter<I: IntoIterator<Item = (K, Vec<V>)>>(iter: I) -> Self {
        SkillGroups(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into_iter().map(Into::into).collect()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_blanks() {
        let mut content = PortfolioContent {
            profile: Profile {
                name: "A".into(),
                phone: Some("  ".into()),
                links: [("github".to_string(), "".to_string())].into_iter().collect(),
                ..Profile::default()
            },
            education: vec![EducationEntry {
                school: "S".into(),
                meta: Some(String::new()),
                ..EducationEntry::default()
            }],
            projects: vec![ProjectEntry {
                title: "P".into(),
                link: Some("".into()),
                highlights: vec!["".into(), "kept".into()],
                ..ProjectEntry::default()
            }],
            ..PortfolioContent::default()
        };
        content.normalize();

        assert_eq!(content.profile.phone, None);
        assert!(content.profile.links.is_empty());
        assert_eq!(content.education[0].meta, None);
        assert_eq!(content.projects[0].link, None);
        assert_eq!(content.projects[0].highlights, vec!["kept".to_string()]);
    }

    #[test]
    fn test_valid_link_filters_garbage() {
        let project = ProjectEntry {
            title: "P".into(),
            link: Some("not a url".into()),
            ..ProjectEntry::default()
        };
        assert_eq!(project.valid_link(), None);

        let project = ProjectEntry {
            link: Some("https://example.com/x".into()),
            ..project
        };
        assert_eq!(project.valid_link(), Some("https://example.com/x"));
    }

    #[test]
    fn test_skill_groups_keep_order() {
        let groups: SkillGroups = vec![
            ("Zeta", vec!["z"]),
            ("Alpha", vec!["a", "b"]),
        ]
        .into_iter()
        .collect();
        let names: Vec<&str> = groups.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
        assert_eq!(groups.get("Alpha").map(<[String]>::len), Some(2));
    }
}
