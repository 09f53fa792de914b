//! Scroll-driven hero expansion
//!
//! The hero starts as a small framed media card over a backdrop. Wheel and
//! drag input grow it until it fills the viewport, at which point the page
//! below takes over scrolling. Scrolling back up at the top of the page hands
//! control back to the hero.
//!
//! - `state` - the progress value and its two flags
//! - `geometry` - layout scalars derived from progress
//! - `controller` - input handling and regime switching

pub mod controller;
pub mod geometry;
pub mod state;

pub use controller::{InputOutcome, ScrollExpansionController};
pub use geometry::HeroGeometry;
pub use state::{ExpansionState, MediaKind, ViewportClass};
