pub mod tracker;

pub use tracker::{active_section, SectionTracker, SCROLLED_THRESHOLD_PX};
