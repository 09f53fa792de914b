use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::hero::MediaKind;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Portfolio content file. The bundled sample is used when unset.
    #[serde(default)]
    pub content_path: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            content_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Width of one terminal cell in pixels, used to classify the viewport
    #[serde(default = "default_cell_width")]
    pub cell_width_px: f64,
    /// Height of one terminal cell in pixels, used for drag and scroll offsets
    #[serde(default = "default_cell_height")]
    pub cell_height_px: f64,
    /// Wheel delta reported for one mouse wheel notch or one line key press
    #[serde(default = "default_wheel_delta")]
    pub wheel_delta_px: f64,
    /// Disable text scrambles and smooth scrolling
    #[serde(default)]
    pub reduced_motion: bool,
    /// Initial hero media kind
    #[serde(default)]
    pub media: MediaKind,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Smooth page scrolling
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            cell_width_px: default_cell_width(),
            cell_height_px: default_cell_height(),
            wheel_delta_px: default_wheel_delta(),
            reduced_motion: false,
            media: MediaKind::default(),
            theme: ThemeConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Easing curve for page scroll animations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

/// Smooth scrolling configuration for the page below the hero
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Page lines moved by one wheel notch or step key
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Theme configuration. Either a bare theme name or a table with a
/// name and color overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ThemeConfigRepr")]
pub struct ThemeConfig {
    /// Theme name (e.g., "orbit", "nord")
    pub name: String,
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ThemeConfigRepr {
    Name(String),
    Table {
        #[serde(default = "default_theme_name")]
        name: String,
        #[serde(default)]
        colors: ThemeColorOverrides,
    },
}

impl From<ThemeConfigRepr> for ThemeConfig {
    fn from(repr: ThemeConfigRepr) -> Self {
        match repr {
            ThemeConfigRepr::Name(name) => Self {
                name,
                colors: ThemeColorOverrides::default(),
            },
            ThemeConfigRepr::Table { name, colors } => Self { name, colors },
        }
    }
}

fn default_theme_name() -> String {
    "orbit".to_string()
}

/// Optional color overrides, each a hex string ("#f8e45f" or "f8e45f")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    pub background: Option<String>,
    pub surface: Option<String>,
    pub text: Option<String>,
    pub muted: Option<String>,
    pub accent: Option<String>,
    pub glow: Option<String>,
    pub link: Option<String>,
    pub border: Option<String>,
}

/// Keymap configuration using Vim-style notation:
/// "j", "<C-d>" (Ctrl+d), "<S-Tab>" (Shift+Tab), "<CR>", "gg"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeymapConfig {
    pub quit: String,

    // Scrolling (drives the hero while it is collapsed)
    pub scroll_down: String,
    pub scroll_up: String,
    pub scroll_half_down: String,
    pub scroll_half_up: String,
    pub scroll_page_down: String,
    pub scroll_page_up: String,
    pub jump_to_top: String,
    pub jump_to_bottom: String,

    // Sections
    pub next_section: String,
    pub prev_section: String,

    // Links
    pub next_link: String,
    pub prev_link: String,
    pub open_link: String,

    // View
    pub toggle_media: String,
    pub toggle_nav: String,
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        let key = str::to_string;
        Self {
            quit: key("q"),
            scroll_down: key("j"),
            scroll_up: key("k"),
            scroll_half_down: key("<C-d>"),
            scroll_half_up: key("<C-u>"),
            scroll_page_down: key("<C-f>"),
            scroll_page_up: key("<C-b>"),
            jump_to_top: key("gg"),
            jump_to_bottom: key("G"),
            next_section: key("]"),
            prev_section: key("["),
            next_link: key("<Tab>"),
            prev_link: key("<S-Tab>"),
            open_link: key("o"),
            toggle_media: key("m"),
            toggle_nav: key("n"),
            help: key("?"),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("termfolio")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_cell_width() -> f64 {
    8.0
}

fn default_cell_height() -> f64 {
    16.0
}

fn default_wheel_delta() -> f64 {
    100.0 // one notch in most browsers
}

fn default_animation_duration() -> u64 {
    150
}

fn default_scroll_lines() -> u16 {
    3
}

fn default_animation_fps() -> u32 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default location or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults
    /// when the file does not exist
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration directory
    /// Always uses ~/.config/termfolio on all platforms
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("termfolio")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path used by the interactive viewer
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("termfolio.log")
    }

    /// Get the content file path (with tilde expansion), if configured
    pub fn content_path(&self) -> Option<PathBuf> {
        self.general.content_path.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_file() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.wheel_delta_px, 100.0);
        assert_eq!(config.ui.media, MediaKind::Image);
        assert_eq!(config.ui.theme.name, "orbit");
        assert_eq!(config.keymap.jump_to_top, "gg");
        assert!(config.ui.scroll.smooth_enabled);
    }

    #[test]
    fn test_theme_as_string() {
        let config: AppConfig = toml::from_str("[ui]\ntheme = \"nord\"\n").unwrap();
        assert_eq!(config.ui.theme.name, "nord");
        assert!(config.ui.theme.colors.accent.is_none());
    }

    #[test]
    fn test_theme_as_table() {
        let src = r##"
[ui.theme]
name = "dracula"
colors = { accent = "#ff0000" }
"##;
        let config: AppConfig = toml::from_str(src).unwrap();
        assert_eq!(config.ui.theme.name, "dracula");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_partial_keymap_keeps_defaults() {
        let config: AppConfig = toml::from_str("[keymap]\nquit = \"x\"\n").unwrap();
        assert_eq!(config.keymap.quit, "x");
        assert_eq!(config.keymap.toggle_media, "m");
        assert_eq!(config.keymap.prev_link, "<S-Tab>");
    }

    #[test]
    fn test_partial_ui_section() {
        let src = "[ui]\nmedia = \"video\"\nreduced_motion = true\n[ui.scroll]\neasing = \"ease_out\"\n";
        let config: AppConfig = toml::from_str(src).unwrap();
        assert_eq!(config.ui.media, MediaKind::Video);
        assert!(config.ui.reduced_motion);
        assert_eq!(config.ui.scroll.easing, EasingType::EaseOut);
        assert_eq!(config.ui.scroll.animation_fps, 60);
        assert_eq!(config.ui.cell_height_px, 16.0);
    }

    #[test]
    fn test_save_and_load_roundtrip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.general.log_level = "debug".to_string();
        config.keymap.quit = "x".to_string();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.general.log_level, "debug");
        assert_eq!(loaded.keymap.quit, "x");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ntick_rate_ms = \"fast\"\n").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(crate::Error::Config(_))
        ));
    }
}
