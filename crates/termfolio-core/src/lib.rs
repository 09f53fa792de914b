pub mod config;
pub mod content;
pub mod error;
pub mod hero;
pub mod nav;
pub mod reveal;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use content::{Portfolio, SectionKind};
pub use error::{Error, Result};
pub use hero::{ExpansionState, HeroGeometry, InputOutcome, MediaKind, ScrollExpansionController};
pub use nav::SectionTracker;
