//! Bundled Content
//!
//! The whole site's copy and catalog, compiled in from `content/portfolio.json`
//! and validated once at startup.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SiteConfig;
use crate::models::{ContactCopy, HeroCopy, NavItem, Project, SandboxCopy, Skill, TimelineEvent};

const BUNDLED: &str = include_str!("../content/portfolio.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content file is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("project id {0} appears more than once")]
    DuplicateProjectId(u32),
    #[error("nav anchor {0:?} does not match any section")]
    UnknownAnchor(String),
    #[error("project catalog is empty")]
    EmptyCatalog,
}

/// Page sections reachable by in-page anchors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Projects,
    Sandbox,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::About, Section::Projects, Section::Sandbox, Section::Contact];

    /// Element id of the section
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Sandbox => "sandbox",
            Section::Contact => "contact",
        }
    }

    /// Exact match on `#id`; no case folding or prefix matching
    pub fn from_anchor(anchor: &str) -> Option<Section> {
        let id = anchor.strip_prefix('#')?;
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub brand: String,
    pub nav: Vec<NavItem>,
    pub hero: HeroCopy,
    pub timeline: Vec<TimelineEvent>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub sandbox: SandboxCopy,
    pub contact: ContactCopy,
    #[serde(default)]
    pub settings: SiteConfig,
}

impl Portfolio {
    /// Parse and validate the content compiled into the binary
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_str(json)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.projects.is_empty() {
            return Err(ContentError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProjectId(project.id));
            }
        }
        if let Some(bad) = self.nav.iter().find(|item| Section::from_anchor(&item.anchor).is_none()) {
            return Err(ContentError::UnknownAnchor(bad.anchor.clone()));
        }
        Ok(())
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content_is_valid() {
        let portfolio = Portfolio::bundled().unwrap();
        assert_eq!(portfolio.nav.len(), 4);
        assert_eq!(portfolio.projects.len(), 4);
        assert_eq!(portfolio.timeline.len(), 5);
        assert_eq!(portfolio.sandbox.demos.len(), 2);
        assert_eq!(portfolio.settings.series.capacity, 6);
    }

    #[test]
    fn test_optional_links_are_absent_not_empty() {
        let portfolio = Portfolio::bundled().unwrap();
        let fitness = portfolio.project(4).unwrap();
        assert_eq!(fitness.live_url, None);
        assert_eq!(fitness.code_url.as_deref(), Some("#"));
    }

    #[test]
    fn test_nav_anchors_resolve_exactly() {
        assert_eq!(Section::from_anchor("#projects"), Some(Section::Projects));
        assert_eq!(Section::from_anchor("#Projects"), None);
        assert_eq!(Section::from_anchor("projects"), None);
        assert_eq!(Section::from_anchor("#proj"), None);
        assert_eq!(Section::from_anchor("#projects "), None);
    }

    #[test]
    fn test_duplicate_project_id_rejected() {
        let mut portfolio = Portfolio::bundled().unwrap();
        let mut dup = portfolio.projects[0].clone();
        dup.title = "Copy".to_string();
        portfolio.projects.push(dup);
        assert!(matches!(portfolio.validate(), Err(ContentError::DuplicateProjectId(1))));
    }

    #[test]
    fn test_unknown_anchor_rejected() {
        let mut portfolio = Portfolio::bundled().unwrap();
        portfolio.nav[1].anchor = "#work".to_string();
        match portfolio.validate() {
            Err(ContentError::UnknownAnchor(anchor)) => assert_eq!(anchor, "#work"),
            other => panic!("expected UnknownAnchor, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(Portfolio::from_json("{"), Err(ContentError::Parse(_))));
    }
}
