//! Pull-chain theme switch.
//!
//! The chain is a drag target that stretches up to `max_pull_px` below its
//! resting length. Releasing it past `commit_pull_px` flips the theme. Every
//! commit (drag or tap) opens a cooldown window during which new gestures are
//! refused.

use crate::config::ThemeConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_light(self) -> bool {
        self == Theme::Light
    }

    pub fn from_light(light: bool) -> Self {
        if light {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PullChainParams {
    pub cooldown_ms: f64,
    pub max_pull_px: f64,
    pub commit_pull_px: f64,
    pub will_toggle_progress: f64,
    pub bulb_tilt_deg: f64,
    pub toggle_tilt_ratio: f64,
}

impl Default for PullChainParams {
    fn default() -> Self {
        Self::from(&ThemeConfig::default())
    }
}

impl From<&ThemeConfig> for PullChainParams {
    fn from(config: &ThemeConfig) -> Self {
        Self {
            cooldown_ms: config.cooldown_ms,
            max_pull_px: config.max_pull_px,
            commit_pull_px: config.commit_pull_px,
            will_toggle_progress: config.will_toggle_progress,
            bulb_tilt_deg: config.bulb_tilt_deg,
            toggle_tilt_ratio: config.toggle_tilt_ratio,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub start_y: f64,
    pub resting_len: f64,
    pub len: f64,
    pub will_toggle: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragPhase {
    Idle,
    Dragging(DragSession),
}

/// Visual state of the chain for one pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChainPose {
    pub len: f64,
    pub progress: f64,
    pub bulb_rotation_deg: f64,
    pub toggle_rotation_deg: f64,
    pub will_toggle: bool,
    pub will_toggle_changed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    pub resting_len: f64,
    pub committed: bool,
    pub theme: Theme,
}

#[derive(Clone, Debug)]
pub struct PullChain {
    params: PullChainParams,
    phase: DragPhase,
    theme: Theme,
    last_toggle_ms: Option<f64>,
}

impl PullChain {
    pub fn new(params: PullChainParams) -> Self {
        Self::with_theme(params, Theme::default())
    }

    /// Starts from the theme the page already shows.
    pub fn with_theme(params: PullChainParams, theme: Theme) -> Self {
        Self {
            params,
            phase: DragPhase::Idle,
            theme,
            last_toggle_ms: None,
        }
    }

    pub fn params(&self) -> &PullChainParams {
        &self.params
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    pub fn in_cooldown(&self, now_ms: f64) -> bool {
        self.last_toggle_ms
            .map(|last| now_ms - last < self.params.cooldown_ms)
            .unwrap_or(false)
    }

    /// Starts a drag session. Returns false when a session is already running
    /// or the cooldown window is still open.
    pub fn begin(&mut self, y: f64, resting_len: f64, now_ms: f64) -> bool {
        if self.is_dragging() || self.in_cooldown(now_ms) {
            return false;
        }
        self.phase = DragPhase::Dragging(DragSession {
            start_y: y,
            resting_len,
            len: resting_len,
            will_toggle: false,
        });
        true
    }

    pub fn drag_to(&mut self, y: f64) -> Option<ChainPose> {
        let DragPhase::Dragging(session) = &mut self.phase else {
            return None;
        };
        let max_pull = self.params.max_pull_px;
        let pull = y - session.start_y;
        let len = (session.resting_len + pull)
            .clamp(session.resting_len, session.resting_len + max_pull);
        let progress = ((len - session.resting_len) / max_pull).clamp(0.0, 1.0);
        let bulb_rotation_deg = progress * self.params.bulb_tilt_deg;
        let toggle_rotation_deg = bulb_rotation_deg * self.params.toggle_tilt_ratio;
        let will_toggle = progress > self.params.will_toggle_progress;
        let will_toggle_changed = will_toggle != session.will_toggle;
        session.len = len;
        session.will_toggle = will_toggle;
        Some(ChainPose {
            len,
            progress,
            bulb_rotation_deg,
            toggle_rotation_deg,
            will_toggle,
            will_toggle_changed,
        })
    }

    /// Ends the running session on any gesture-ending event (up, cancel).
    pub fn release(&mut self, now_ms: f64) -> Option<Release> {
        let DragPhase::Dragging(session) = self.phase else {
            return None;
        };
        self.phase = DragPhase::Idle;
        let committed = session.len >= session.resting_len + self.params.commit_pull_px;
        if committed {
            self.commit(now_ms);
        }
        Some(Release {
            resting_len: session.resting_len,
            committed,
            theme: self.theme,
        })
    }

    /// Direct click on the bulb or chain. Returns true when the theme flipped.
    pub fn tap(&mut self, now_ms: f64) -> bool {
        if self.is_dragging() || self.in_cooldown(now_ms) {
            return false;
        }
        self.commit(now_ms);
        true
    }

    fn commit(&mut self, now_ms: f64) {
        self.theme = self.theme.toggled();
        self.last_toggle_ms = Some(now_ms);
    }
}

impl Default for PullChain {
    fn default() -> Self {
        Self::new(PullChainParams::default())
    }
}

/// Parses a computed CSS length such as `"40px"` the way `parseInt` would,
/// keeping only the integral pixel part.
pub fn parse_css_px(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    let parsed: f64 = number.parse().ok()?;
    if parsed.is_finite() {
        Some(parsed.trunc())
    } else {
        None
    }
}

pub fn rotate_transform(deg: f64) -> String {
    let deg = if deg == 0.0 { 0.0 } else { deg };
    format!("rotate({deg}deg)")
}

pub fn px(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}px")
}
