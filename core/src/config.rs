use std::fmt;

use serde::{Deserialize, Serialize};

pub const CONFIG_ELEMENT_ID: &str = "pullcord-config";

pub const THEME_COOLDOWN_MS: f64 = 200.0;
pub const THEME_MAX_PULL_PX: f64 = 8.0;
pub const THEME_COMMIT_PULL_PX: f64 = 1.0;
pub const THEME_WILL_TOGGLE_PROGRESS: f64 = 0.1;
pub const THEME_BULB_TILT_DEG: f64 = -5.0;
pub const THEME_TOGGLE_TILT_RATIO: f64 = 0.5;
pub const THEME_RESTING_LEN_FALLBACK_PX: f64 = 40.0;
pub const THEME_SWAY_DELAY_MS: u32 = 1000;
pub const THEME_SWAY_ANIMATION: &str = "hangingBulb 4s ease-in-out infinite";
pub const GALLERY_FADE_MS: u32 = 300;
pub const VIEW_COUNT_INTERVAL_MS: u32 = 5000;
pub const VIEW_COUNT_INITIAL: u64 = 1;
pub const UPTIME_INTERVAL_MS: u32 = 1000;
pub const EYE_MAX_OFFSET_PX: f64 = 4.0;
pub const EYE_DISTANCE_SCALE: f64 = 20.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub toggle_selector: String,
    pub chain_selector: String,
    pub bulb_selector: String,
    pub light_class: String,
    pub cooldown_ms: f64,
    pub max_pull_px: f64,
    pub commit_pull_px: f64,
    pub will_toggle_progress: f64,
    pub bulb_tilt_deg: f64,
    pub toggle_tilt_ratio: f64,
    pub resting_len_fallback_px: f64,
    pub sway_delay_ms: u32,
    pub sway_animation: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".theme-toggle".to_string(),
            chain_selector: ".chain".to_string(),
            bulb_selector: ".bulb".to_string(),
            light_class: "light-mode".to_string(),
            cooldown_ms: THEME_COOLDOWN_MS,
            max_pull_px: THEME_MAX_PULL_PX,
            commit_pull_px: THEME_COMMIT_PULL_PX,
            will_toggle_progress: THEME_WILL_TOGGLE_PROGRESS,
            bulb_tilt_deg: THEME_BULB_TILT_DEG,
            toggle_tilt_ratio: THEME_TOGGLE_TILT_RATIO,
            resting_len_fallback_px: THEME_RESTING_LEN_FALLBACK_PX,
            sway_delay_ms: THEME_SWAY_DELAY_MS,
            sway_animation: THEME_SWAY_ANIMATION.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub thumb_selector: String,
    pub main_image_id: String,
    pub full_src_attribute: String,
    pub page_id: String,
    pub fade_ms: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            thumb_selector: ".gallery-thumb".to_string(),
            main_image_id: "mainHackathonImage".to_string(),
            full_src_attribute: "data-full".to_string(),
            page_id: "events".to_string(),
            fade_ms: GALLERY_FADE_MS,
        }
    }
}

/// How a tab group marks its visible content element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStrategy {
    Class,
    Display,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabGroupConfig {
    pub trigger_selector: String,
    pub content_selector: String,
    pub id_attribute: String,
    pub content_id_suffix: String,
    pub markers: Vec<MarkerStrategy>,
}

impl Default for TabGroupConfig {
    fn default() -> Self {
        Self {
            trigger_selector: ".about-tab".to_string(),
            content_selector: ".about-content, .tab-content".to_string(),
            id_attribute: "data-tab".to_string(),
            content_id_suffix: "-content".to_string(),
            markers: vec![MarkerStrategy::Class, MarkerStrategy::Display],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub page_selector: String,
    pub link_selector: String,
    pub page_attribute: String,
    pub active_class: String,
    pub tab_groups: Vec<TabGroupConfig>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            page_selector: ".page".to_string(),
            link_selector: ".nav a".to_string(),
            page_attribute: "data-page".to_string(),
            active_class: "active".to_string(),
            tab_groups: vec![TabGroupConfig::default()],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypewriterLine {
    pub text_selector: String,
    pub cursor_selector: String,
    pub duration_ms: f64,
    #[serde(default)]
    pub delay_ms: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub lines: Vec<TypewriterLine>,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            lines: vec![
                TypewriterLine {
                    text_selector: ".first-line".to_string(),
                    cursor_selector: "#cursor1".to_string(),
                    duration_ms: 2000.0,
                    delay_ms: 0.0,
                },
                TypewriterLine {
                    text_selector: ".second-line".to_string(),
                    cursor_selector: "#cursor2".to_string(),
                    duration_ms: 3000.0,
                    delay_ms: 2000.0,
                },
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountersConfig {
    pub view_count_id: String,
    pub view_count_initial: u64,
    pub view_count_interval_ms: u32,
    pub uptime_id: String,
    pub uptime_interval_ms: u32,
}

impl Default for CountersConfig {
    fn default() -> Self {
        Self {
            view_count_id: "viewCount".to_string(),
            view_count_initial: VIEW_COUNT_INITIAL,
            view_count_interval_ms: VIEW_COUNT_INTERVAL_MS,
            uptime_id: "uptime".to_string(),
            uptime_interval_ms: UPTIME_INTERVAL_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EyesConfig {
    pub eye_selector: String,
    pub pupil_selector: String,
    pub max_offset_px: f64,
    pub distance_scale: f64,
}

impl Default for EyesConfig {
    fn default() -> Self {
        Self {
            eye_selector: ".eye".to_string(),
            pupil_selector: ".pupil".to_string(),
            max_offset_px: EYE_MAX_OFFSET_PX,
            distance_scale: EYE_DISTANCE_SCALE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub gallery: GalleryConfig,
    pub navigation: NavigationConfig,
    pub typewriter: TypewriterConfig,
    pub counters: CountersConfig,
    pub eyes: EyesConfig,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("theme.cooldown_ms", self.theme.cooldown_ms)?;
        positive("theme.max_pull_px", self.theme.max_pull_px)?;
        positive("theme.resting_len_fallback_px", self.theme.resting_len_fallback_px)?;
        if self.theme.commit_pull_px < 0.0 {
            return Err(ConfigError::Invalid {
                field: "theme.commit_pull_px",
                reason: "must not be negative",
            });
        }
        positive(
            "counters.view_count_interval_ms",
            self.counters.view_count_interval_ms as f64,
        )?;
        positive(
            "counters.uptime_interval_ms",
            self.counters.uptime_interval_ms as f64,
        )?;
        positive("eyes.distance_scale", self.eyes.distance_scale)?;
        if self.eyes.max_offset_px < 0.0 {
            return Err(ConfigError::Invalid {
                field: "eyes.max_offset_px",
                reason: "must not be negative",
            });
        }
        for line in &self.typewriter.lines {
            positive("typewriter.lines.duration_ms", line.duration_ms)?;
            if line.delay_ms < 0.0 {
                return Err(ConfigError::Invalid {
                    field: "typewriter.lines.delay_ms",
                    reason: "must not be negative",
                });
            }
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be greater than zero",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(detail) => write!(f, "config is not valid json: {detail}"),
            ConfigError::Invalid { field, reason } => write!(f, "config {field} {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = SiteConfig::from_json("{}").expect("defaults parse");
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.theme.cooldown_ms, 200.0);
        assert_eq!(config.navigation.tab_groups.len(), 1);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = SiteConfig::from_json(r#"{"gallery": {"page_id": "photos"}}"#)
            .expect("partial parse");
        assert_eq!(config.gallery.page_id, "photos");
        assert_eq!(config.gallery.fade_ms, GALLERY_FADE_MS);
        assert_eq!(config.gallery.thumb_selector, ".gallery-thumb");
    }

    #[test]
    fn marker_strategies_parse_lowercase() {
        let raw = r#"{"navigation": {"tab_groups": [{"markers": ["display"]}]}}"#;
        let config = SiteConfig::from_json(raw).expect("markers parse");
        assert_eq!(config.navigation.tab_groups[0].markers, vec![MarkerStrategy::Display]);
        assert_eq!(config.navigation.tab_groups[0].trigger_selector, ".about-tab");
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = SiteConfig::from_json(r#"{"counters": {"uptime_interval_ms": 0}}"#)
            .expect_err("zero interval");
        assert_eq!(
            err,
            ConfigError::Invalid {
                field: "counters.uptime_interval_ms",
                reason: "must be greater than zero",
            }
        );
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let err = SiteConfig::from_json("{theme").expect_err("malformed");
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config is not valid json"));
    }
}
