//! Layout scalars derived from hero progress
//!
//! Everything here is a pure function of `progress` and the viewport class.

use super::state::ViewportClass;

const MEDIA_BASE_WIDTH: f64 = 300.0;
const MEDIA_BASE_HEIGHT: f64 = 400.0;

/// Derived hero layout for one progress value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroGeometry {
    /// Media card width in pixels
    pub media_width: f64,
    /// Media card height in pixels
    pub media_height: f64,
    /// Horizontal offset of the split title, in percent of viewport width.
    /// The first word moves left by this amount, the rest moves right.
    pub text_offset: f64,
    /// Opacity of the backdrop behind the card
    pub backdrop_opacity: f64,
    /// Opacity of the dark overlay on the media itself
    pub media_dim: f64,
}

impl HeroGeometry {
    pub fn compute(progress: f64, viewport: ViewportClass) -> Self {
        let p = progress.clamp(0.0, 1.0);
        let (width_gain, height_gain, offset_gain) = match viewport {
            ViewportClass::Narrow => (650.0, 200.0, 180.0),
            ViewportClass::Wide => (1250.0, 400.0, 150.0),
        };

        Self {
            media_width: MEDIA_BASE_WIDTH + p * width_gain,
            media_height: MEDIA_BASE_HEIGHT + p * height_gain,
            text_offset: p * offset_gain,
            backdrop_opacity: 1.0 - p,
            media_dim: 0.7 - p * 0.3,
        }
    }

    /// Media size as a fraction of its fully expanded size
    pub fn scale(&self, viewport: ViewportClass) -> (f64, f64) {
        let full = Self::compute(1.0, viewport);
        (
            self.media_width / full.media_width,
            self.media_height / full.media_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_collapsed_geometry() {
        for class in [ViewportClass::Narrow, ViewportClass::Wide] {
            let g = HeroGeometry::compute(0.0, class);
            assert!(approx(g.media_width, 300.0));
            assert!(approx(g.media_height, 400.0));
            assert!(approx(g.text_offset, 0.0));
            assert!(approx(g.backdrop_opacity, 1.0));
            assert!(approx(g.media_dim, 0.7));
        }
    }

    #[test]
    fn test_expanded_geometry_by_class() {
        let wide = HeroGeometry::compute(1.0, ViewportClass::Wide);
        assert!(approx(wide.media_width, 1550.0));
        assert!(approx(wide.media_height, 800.0));
        assert!(approx(wide.text_offset, 150.0));

        let narrow = HeroGeometry::compute(1.0, ViewportClass::Narrow);
        assert!(approx(narrow.media_width, 950.0));
        assert!(approx(narrow.media_height, 600.0));
        assert!(approx(narrow.text_offset, 180.0));
        assert!(approx(narrow.backdrop_opacity, 0.0));
        assert!(approx(narrow.media_dim, 0.4));
    }

    #[test]
    fn test_linear_in_progress() {
        let g = HeroGeometry::compute(0.5, ViewportClass::Wide);
        assert!(approx(g.media_width, 925.0));
        assert!(approx(g.text_offset, 75.0));
    }

    #[test]
    fn test_scale_reaches_one() {
        let g = HeroGeometry::compute(1.0, ViewportClass::Narrow);
        let (sx, sy) = g.scale(ViewportClass::Narrow);
        assert!(approx(sx, 1.0));
        assert!(approx(sy, 1.0));
    }
}
