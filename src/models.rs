//! Content Models
//!
//! Static site content, deserialized from the bundled content file.

use serde::{Deserialize, Serialize};

use crate::icons::Icon;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    /// In-page anchor, e.g. `#projects`
    pub anchor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    #[serde(rename = "image")]
    pub image_url: String,
    pub problem: String,
    pub role: String,
    pub stack: Vec<String>,
    pub challenges: String,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub code_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub description: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Ordinal label: a year or "Present"
    pub year: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroCopy {
    pub headline: String,
    pub tagline: String,
    pub chips: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemoKind {
    LiveChart,
    DraggableCard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoCopy {
    pub title: String,
    pub description: String,
    pub demo: DemoKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SandboxCopy {
    pub intro: String,
    pub demos: Vec<DemoCopy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactCopy {
    pub heading: String,
    pub blurb: String,
    pub owner: String,
    pub links: Vec<SocialLink>,
}

/// One live-chart point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSample {
    pub label: String,
    pub value: u32,
}
