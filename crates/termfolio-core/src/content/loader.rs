use std::path::Path;

use tracing::{debug, info};

use super::models::{Portfolio, SectionKind};
use crate::{Error, Result};

/// Bundled sample portfolio, used when no content file is configured
pub const SAMPLE_PORTFOLIO: &str = include_str!("../../assets/portfolio.toml");

impl Portfolio {
    /// Parse and validate a portfolio document
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let portfolio: Portfolio = toml::from_str(src)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Load a portfolio from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading portfolio content");
        let src = std::fs::read_to_string(path)?;
        let portfolio = Self::from_toml_str(&src)?;
        info!(
            sections = portfolio.navigation.len(),
            projects = portfolio.projects.items.len(),
            "portfolio loaded"
        );
        Ok(portfolio)
    }

    /// Load from `path` if given, otherwise the bundled sample
    pub fn load_or_sample(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::sample(),
        }
    }

    pub fn sample() -> Result<Self> {
        Self::from_toml_str(SAMPLE_PORTFOLIO)
    }

    /// Check the structural rules the page layout relies on
    pub fn validate(&self) -> Result<()> {
        if self.hero.name.trim().is_empty() {
            return Err(Error::Content("hero.name must not be empty".into()));
        }

        let Some(first) = self.navigation.first() else {
            return Err(Error::Content("navigation must list at least one section".into()));
        };
        if first.section != SectionKind::Home {
            return Err(Error::Content(format!(
                "navigation must start with the home section, found {:?}",
                first.section
            )));
        }
        for pair in self.navigation.windows(2) {
            if pair[0].section >= pair[1].section {
                return Err(Error::Content(format!(
                    "navigation sections must be unique and in page order: {:?} before {:?}",
                    pair[0].section, pair[1].section
                )));
            }
        }
        if let Some(item) = self.navigation.iter().find(|item| item.label.trim().is_empty()) {
            return Err(Error::Content(format!(
                "navigation entry for {:?} has an empty label",
                item.section
            )));
        }

        for project in &self.projects.items {
            if project.title.trim().is_empty() {
                return Err(Error::Content("project title must not be empty".into()));
            }
            if let Some((label, _)) = project.links.iter().find(|(_, url)| url.trim().is_empty()) {
                return Err(Error::Content(format!(
                    "project '{}' has an empty {} link",
                    project.title, label
                )));
            }
        }

        for entry in &self.experience {
            if entry.title.trim().is_empty() || entry.company.trim().is_empty() {
                return Err(Error::Content(format!(
                    "experience entry for {} needs a title and a company",
                    entry.year
                )));
            }
        }

        if let Some(link) = self.contact.social.iter().find(|s| s.url.trim().is_empty()) {
            return Err(Error::Content(format!("social link '{}' has no url", link.name)));
        }

        Ok(())
    }

    /// Serialize to JSON for export
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"
[hero]
name = "Ada"
"#;

    #[test]
    fn test_sample_is_valid() {
        let portfolio = Portfolio::sample().unwrap();
        assert!(!portfolio.hero.name.is_empty());
        assert_eq!(portfolio.sections(), SectionKind::ALL.to_vec());
        assert!(!portfolio.projects.items.is_empty());
        assert!(!portfolio.experience.is_empty());
    }

    #[test]
    fn test_minimal_document_uses_defaults() {
        let portfolio = Portfolio::from_toml_str(MINIMAL).unwrap();
        assert_eq!(portfolio.hero.scroll_hint, "Scroll to explore");
        assert_eq!(portfolio.navigation.len(), 5);
        assert!(portfolio.projects.items.is_empty());
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Portfolio::from_toml_str("[hero]\nname = \"  \"\n").unwrap_err();
        assert!(matches!(err, Error::Content(_)));
    }

    #[test]
    fn test_navigation_must_start_at_home() {
        let src = r#"
[hero]
name = "Ada"

[[navigation]]
label = "About"
section = "about"
"#;
        assert!(matches!(Portfolio::from_toml_str(src), Err(Error::Content(_))));
    }

    #[test]
    fn test_navigation_out_of_order_rejected() {
        let src = r#"
[hero]
name = "Ada"

[[navigation]]
label = "Home"
section = "home"

[[navigation]]
label = "Contact"
section = "contact"

[[navigation]]
label = "About"
section = "about"
"#;
        assert!(matches!(Portfolio::from_toml_str(src), Err(Error::Content(_))));
    }

    #[test]
    fn test_duplicate_navigation_rejected() {
        let src = r#"
[hero]
name = "Ada"

[[navigation]]
label = "Home"
section = "home"

[[navigation]]
label = "Home again"
section = "home"
"#;
        assert!(matches!(Portfolio::from_toml_str(src), Err(Error::Content(_))));
    }

    #[test]
    fn test_empty_project_link_rejected() {
        let src = r#"
[hero]
name = "Ada"

[[projects.items]]
title = "Engine"
links = { github = "" }
"#;
        let err = Portfolio::from_toml_str(src).unwrap_err();
        assert!(err.to_string().contains("Engine"));
    }

    #[test]
    fn test_unknown_section_is_parse_error() {
        let src = r#"
[hero]
name = "Ada"

[[navigation]]
label = "Blog"
section = "blog"
"#;
        assert!(matches!(
            Portfolio::from_toml_str(src),
            Err(Error::ContentParse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();
        let portfolio = Portfolio::load(file.path()).unwrap();
        assert_eq!(portfolio.hero.name, "Ada");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Portfolio::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_export_skips_missing_links() {
        let portfolio = Portfolio::sample().unwrap();
        let json = portfolio.to_json(false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["hero"]["name"], portfolio.hero.name.as_str());
        assert!(value["navigation"].as_array().unwrap().len() == 5);
    }
}
