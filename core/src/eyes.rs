use crate::config::EyesConfig;

pub const PUPIL_CENTERED: &str = "translate(-50%, -50%)";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PupilOffset {
    pub x: f64,
    pub y: f64,
}

impl PupilOffset {
    pub const ZERO: PupilOffset = PupilOffset { x: 0.0, y: 0.0 };

    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Translation layered on the centering transform of the pupil.
    pub fn transform(&self) -> String {
        if *self == Self::ZERO {
            return PUPIL_CENTERED.to_string();
        }
        format!(
            "translate(calc(-50% + {}px), calc(-50% + {}px))",
            self.x, self.y
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EyeTracking {
    pub max_offset_px: f64,
    pub distance_scale: f64,
}

impl Default for EyeTracking {
    fn default() -> Self {
        Self::from(&EyesConfig::default())
    }
}

impl From<&EyesConfig> for EyeTracking {
    fn from(config: &EyesConfig) -> Self {
        Self {
            max_offset_px: config.max_offset_px,
            distance_scale: config.distance_scale,
        }
    }
}

impl EyeTracking {
    /// Offset for a pupil whose eye is centered at `center`, looking at
    /// `pointer`. Distance is the raw pixel distance scaled down and capped.
    pub fn pupil_offset(&self, center: (f64, f64), pointer: (f64, f64)) -> PupilOffset {
        let dx = pointer.0 - center.0;
        let dy = pointer.1 - center.1;
        let raw = dx.hypot(dy);
        if raw == 0.0 {
            return PupilOffset::ZERO;
        }
        let angle = dy.atan2(dx);
        let distance = (raw / self.distance_scale).min(self.max_offset_px);
        PupilOffset {
            x: angle.cos() * distance,
            y: angle.sin() * distance,
        }
    }
}
