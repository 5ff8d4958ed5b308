use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
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
    /// Reviews file (.toml or .json); built-in samples are used when unset
    #[serde(default)]
    pub reviews_path: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            reviews_path: None,
        }
    }
}

/// Which offsets trigger a wrap-around snap at the edges of the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WrapRule {
    /// Snap once the last real card reaches the left edge:
    /// `offset >= end - pitch` jumps to `start`,
    /// `offset <= start - pitch` jumps to `end - pitch`.
    /// The last real card never rests at the left edge, so `len - 1`
    /// steps already complete a loop; use `FirstClone` for `len` steps.
    #[default]
    LastRealCard,
    /// Snap once the first clone reaches the left edge, shifting the
    /// offset by exactly one period (`len * pitch`).
    FirstClone,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Number of cards cloned onto each end of the strip
    #[serde(default = "default_clone_count")]
    pub clone_count: usize,
    /// Gap between cards in logical units
    #[serde(default = "default_gap")]
    pub gap: f64,
    /// How long the correction guard stays engaged after a scroll notification
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
    /// Edge thresholds used by the correction policy
    #[serde(default)]
    pub wrap_rule: WrapRule,
    /// Measure the card again when the viewport is resized
    #[serde(default)]
    pub remeasure_on_resize: bool,
    /// Logical units covered by one terminal column
    #[serde(default = "default_units_per_column")]
    pub units_per_column: f64,
    /// Cards visible at once (0 = pick from the viewport width)
    #[serde(default)]
    pub cards_per_view: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            clone_count: default_clone_count(),
            gap: default_gap(),
            settle_ms: default_settle_ms(),
            wrap_rule: WrapRule::default(),
            remeasure_on_resize: false,
            units_per_column: default_units_per_column(),
            cards_per_view: 0,
        }
    }
}

impl CarouselConfig {
    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

/// Light/dark styling flag handed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualMode {
    #[default]
    Dark,
    Light,
}

impl VisualMode {
    pub fn is_dark(self) -> bool {
        self == VisualMode::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            VisualMode::Dark => VisualMode::Light,
            VisualMode::Light => VisualMode::Dark,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Dark or light presentation
    #[serde(default)]
    pub mode: VisualMode,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Smooth scrolling configuration
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            mode: VisualMode::default(),
            theme: ThemeConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Easing curve used by animated scrolls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate relative scrolls instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Duration of one animated scroll
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme family) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme family (e.g., "gruvbox", "solarized"); `ui.mode` picks the variant
    pub name: String,
    /// Optional color overrides, applied on top of either variant
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

// Accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "gruvbox".to_string()
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Page background
    pub bg0: Option<String>,
    /// Raised background (status bar, popups)
    pub bg1: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Testimonial text
    pub fg1: Option<String>,
    /// Accent (company line, focused control)
    pub accent: Option<String>,
    /// Rating stars
    pub star: Option<String>,
    /// Card background
    pub card: Option<String>,
    /// Card border
    pub card_border: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "h", "<C-c>" (Ctrl+c), "<S-Tab>" (Shift+Tab), "<CR>" (Enter), "<Esc>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Scroll one card back
    #[serde(default = "default_key_previous")]
    pub previous: String,
    /// Scroll one card forward
    #[serde(default = "default_key_next")]
    pub next: String,
    /// Free scroll a quarter card back
    #[serde(default = "default_key_nudge_left")]
    pub nudge_left: String,
    /// Free scroll a quarter card forward
    #[serde(default = "default_key_nudge_right")]
    pub nudge_right: String,
    /// Move focus to the next control
    #[serde(default = "default_key_focus_next_control")]
    pub focus_next_control: String,
    /// Move focus to the previous control
    #[serde(default = "default_key_focus_prev_control")]
    pub focus_prev_control: String,
    /// Press the focused control
    #[serde(default = "default_key_activate")]
    pub activate: String,
    /// Switch between dark and light mode
    #[serde(default = "default_key_toggle_mode")]
    pub toggle_mode: String,
    /// Show key bindings
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            previous: default_key_previous(),
            next: default_key_next(),
            nudge_left: default_key_nudge_left(),
            nudge_right: default_key_nudge_right(),
            focus_next_control: default_key_focus_next_control(),
            focus_prev_control: default_key_focus_prev_control(),
            activate: default_key_activate(),
            toggle_mode: default_key_toggle_mode(),
            help: default_key_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_previous() -> String { "h".to_string() }
fn default_key_next() -> String { "l".to_string() }
fn default_key_nudge_left() -> String { "H".to_string() }
fn default_key_nudge_right() -> String { "L".to_string() }
fn default_key_focus_next_control() -> String { "<Tab>".to_string() }
fn default_key_focus_prev_control() -> String { "<S-Tab>".to_string() }
fn default_key_activate() -> String { "<CR>".to_string() }
fn default_key_toggle_mode() -> String { "t".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("revolve")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_clone_count() -> usize {
    3
}

fn default_gap() -> f64 {
    crate::carousel::CARD_GAP
}

fn default_settle_ms() -> u64 {
    50
}

fn default_units_per_column() -> f64 {
    8.0
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_duration() -> u64 {
    300
}

fn default_animation_fps() -> u32 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
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
    /// Load configuration from a specific file, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Write the configuration as pretty TOML, creating parent directories
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/revolve/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("revolve")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file used while the terminal UI owns the screen
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("revolve.log")
    }

    /// Get the configured reviews file (with tilde expansion)
    pub fn reviews_path(&self) -> Option<PathBuf> {
        self.general.reviews_path.as_deref().map(expand_tilde)
    }
}
