use crate::config::TypewriterLine;

/// Sweeps a cursor from 0 to the full text width over `duration_ms`, after
/// holding at 0 for `delay_ms`. Frames are computed from elapsed time so the
/// sweep stays correct under frame-rate variation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorSweep {
    pub duration_ms: f64,
    pub delay_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepFrame {
    pub offset: f64,
    pub progress: f64,
    pub done: bool,
}

impl CursorSweep {
    pub fn new(duration_ms: f64, delay_ms: f64) -> Self {
        Self {
            duration_ms,
            delay_ms: delay_ms.max(0.0),
        }
    }

    pub fn frame(&self, elapsed_ms: f64, width: f64) -> SweepFrame {
        let running = elapsed_ms - self.delay_ms;
        if running < 0.0 {
            return SweepFrame {
                offset: 0.0,
                progress: 0.0,
                done: false,
            };
        }
        let progress = if self.duration_ms > 0.0 {
            (running / self.duration_ms).min(1.0)
        } else {
            1.0
        };
        let width = width.max(0.0);
        SweepFrame {
            offset: (width * progress).min(width),
            progress,
            done: progress >= 1.0,
        }
    }
}

impl From<&TypewriterLine> for CursorSweep {
    fn from(line: &TypewriterLine) -> Self {
        Self::new(line.duration_ms, line.delay_ms)
    }
}
