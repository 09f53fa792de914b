pub mod loader;
pub mod models;

pub use loader::SAMPLE_PORTFOLIO;
pub use models::{
    AboutContent, ContactContent, HeroContent, NavigationItem, Portfolio, Project, ProjectLinks,
    ProjectsContent, SectionKind, SectionQuotes, SocialLink, TimelineEntry,
};
