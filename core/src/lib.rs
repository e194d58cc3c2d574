pub mod active_group;
pub mod config;
pub mod counters;
pub mod eyes;
pub mod pull_chain;
pub mod report;
pub mod selection;
pub mod typewriter;

pub use active_group::{content_id, ActiveGroup};
pub use config::{
    ConfigError, CountersConfig, EyesConfig, GalleryConfig, MarkerStrategy, NavigationConfig,
    SiteConfig, TabGroupConfig, ThemeConfig, TypewriterConfig, TypewriterLine, CONFIG_ELEMENT_ID,
};
pub use counters::{format_uptime, UptimeClock, ViewCounter};
pub use eyes::{EyeTracking, PupilOffset, PUPIL_CENTERED};
pub use pull_chain::{
    parse_css_px, px, rotate_transform, ChainPose, DragPhase, DragSession, PullChain,
    PullChainParams, Release, Theme,
};
pub use report::{InstallReport, SkippedBehavior};
pub use selection::{Selection, Step};
pub use typewriter::{CursorSweep, SweepFrame};
