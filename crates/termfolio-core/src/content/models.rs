use serde::{Deserialize, Serialize};

/// Sections of the page, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Home,
    About,
    Experience,
    Projects,
    Contact,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Home,
        SectionKind::About,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Contact,
    ];

    pub fn default_label(self) -> &'static str {
        match self {
            SectionKind::Home => "Home",
            SectionKind::About => "About",
            SectionKind::Experience => "Experience",
            SectionKind::Projects => "Projects",
            SectionKind::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub label: String,
    pub section: SectionKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub name: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default = "default_scroll_hint")]
    pub scroll_hint: String,
}

fn default_scroll_hint() -> String {
    "Scroll to explore".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    #[serde(default)]
    pub greeting: String,
    #[serde(default)]
    pub story: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub interests: Vec<Interest>,
    #[serde(default)]
    pub quote: Option<String>,
}

/// One entry of the experience timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: String,
    /// Employment type, e.g. "Full-time" or "Internship"
    #[serde(default)]
    pub kind: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch: Option<String>,
}

impl ProjectLinks {
    /// Present links as (label, url) pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("GitHub", self.github.as_deref()),
            ("Live", self.live.as_deref()),
            ("Watch", self.watch.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|u| (label, u)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectsContent {
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Vec<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

/// Optional quote shown under each section header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionQuotes {
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub projects: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
}

impl SectionQuotes {
    pub fn for_section(&self, section: SectionKind) -> Option<&str> {
        match section {
            SectionKind::Home => None,
            SectionKind::About => self.about.as_deref(),
            SectionKind::Experience => self.experience.as_deref(),
            SectionKind::Projects => self.projects.as_deref(),
            SectionKind::Contact => self.contact.as_deref(),
        }
    }
}

/// Complete portfolio document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub hero: HeroContent,
    #[serde(default)]
    pub about: AboutContent,
    #[serde(default)]
    pub experience: Vec<TimelineEntry>,
    #[serde(default)]
    pub projects: ProjectsContent,
    #[serde(default)]
    pub contact: ContactContent,
    #[serde(default)]
    pub quotes: SectionQuotes,
    #[serde(default = "default_navigation")]
    pub navigation: Vec<NavigationItem>,
}

pub fn default_navigation() -> Vec<NavigationItem> {
    SectionKind::ALL
        .iter()
        .map(|&section| NavigationItem {
            label: section.default_label().to_string(),
            section,
        })
        .collect()
}

impl Portfolio {
    /// Sections shown on the page, in navigation order
    pub fn sections(&self) -> Vec<SectionKind> {
        self.navigation.iter().map(|item| item.section).collect()
    }

    /// Label for a section, falling back to its default name
    pub fn label_for(&self, section: SectionKind) -> &str {
        self.navigation
            .iter()
            .find(|item| item.section == section)
            .map(|item| item.label.as_str())
            .unwrap_or_else(|| section.default_label())
    }
}
