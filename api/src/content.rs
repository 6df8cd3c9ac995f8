use serde::{Deserialize, Serialize};

use crate::endpoint;

// structs and types

// everything the site displays, served as one json document so that the page can be edited
// without rebuilding the wasm bundle
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    #[serde(default)]
    pub personal_info: PersonalInfo,

    // None means "use the built-in defaults", see common::resume
    #[serde(default)]
    pub skills: Option<Vec<SkillCategory>>,

    #[serde(default)]
    pub experiences: Vec<Experience>,

    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub summary: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub projects: Vec<ExperienceProject>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperienceProject {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

// messages

// fetch the portfolio content
endpoint!(GetContent);

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetContentReq {}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetContentResp {
    pub content: PortfolioContent,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sparse_content_document_fills_defaults() {
        let doc = r#"{
            "personal_info": { "name": "Ada" },
            "projects": [ { "title": "Engine", "description": "difference engine" } ]
        }"#;

        let content: PortfolioContent = serde_json::from_str(doc).unwrap();

        assert_eq!(content.personal_info.name.as_deref(), Some("Ada"));
        assert_eq!(content.personal_info.email, None);
        assert_eq!(content.skills, None);
        assert!(content.experiences.is_empty());
        assert_eq!(content.projects[0].technologies, Vec::<String>::new());
        assert_eq!(content.projects[0].link, None);
    }

    #[test]
    fn bundled_sample_content_parses() {
        let content: PortfolioContent =
            serde_json::from_str(include_str!("../../content.json")).unwrap();

        assert_eq!(content.personal_info.name.as_deref(), Some("Jane Doe"));
        assert_eq!(content.skills.as_ref().map(Vec::len), Some(3));
        assert_eq!(content.experiences[1].description, None);
        assert_eq!(content.projects.len(), 3);
    }
}
