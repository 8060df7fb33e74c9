use thiserror::Error;

// Slider ranges for the background-music chain.
pub const CUTOFF_MIN_HZ: f32 = 40.0;
pub const CUTOFF_MAX_HZ: f32 = 20000.0;
pub const Q_MIN: f32 = 0.0001;
pub const Q_MAX: f32 = 30.0;
pub const VOLUME_MIN: f32 = 0.0;
pub const VOLUME_MAX: f32 = 1.0;

// Used when a slider is missing or holds something unparseable.
pub const DEFAULT_CUTOFF_HZ: f32 = 1200.0;
pub const DEFAULT_Q: f32 = 0.8;
pub const DEFAULT_VOLUME: f32 = 0.35;

// setTargetAtTime time constant for live slider tweaks (seconds).
pub const LIVE_TIME_CONSTANT: f64 = 0.03;

pub const STATUS_UNSUPPORTED: &str = "AudioContext not supported";
pub const STATUS_PLAYING: &str = "Playing";
pub const STATUS_BLOCKED: &str = "Click to start (autoplay blocked)";
pub const STATUS_FILTER_OPENED: &str = "Filter opened";

#[inline]
pub fn clamp_cutoff(hz: f32) -> f32 {
    hz.clamp(CUTOFF_MIN_HZ, CUTOFF_MAX_HZ)
}

#[inline]
pub fn clamp_q(q: f32) -> f32 {
    q.clamp(Q_MIN, Q_MAX)
}

#[inline]
pub fn clamp_volume(v: f32) -> f32 {
    v.clamp(VOLUME_MIN, VOLUME_MAX)
}

/// Parse a range input's text, falling back to `default` on missing or
/// non-numeric input.
pub fn parse_slider(raw: Option<&str>, default: f32) -> f32 {
    raw.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// A `cancelScheduledValues` + `setTargetAtTime` pair for one `AudioParam`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRamp {
    pub target: f32,
    pub time_constant: f64,
}

/// Clamped filter and volume targets derived from the three sliders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterSettings {
    pub cutoff_hz: f32,
    pub q: f32,
    pub volume: f32,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            cutoff_hz: DEFAULT_CUTOFF_HZ,
            q: DEFAULT_Q,
            volume: DEFAULT_VOLUME,
        }
    }
}

impl FilterSettings {
    pub fn from_sliders(cutoff: Option<&str>, q: Option<&str>, volume: Option<&str>) -> Self {
        Self {
            cutoff_hz: clamp_cutoff(parse_slider(cutoff, DEFAULT_CUTOFF_HZ)),
            q: clamp_q(parse_slider(q, DEFAULT_Q)),
            volume: clamp_volume(parse_slider(volume, DEFAULT_VOLUME)),
        }
    }

    pub fn cutoff_ramp(&self) -> ParamRamp {
        ParamRamp {
            target: self.cutoff_hz,
            time_constant: LIVE_TIME_CONSTANT,
        }
    }

    pub fn q_ramp(&self) -> ParamRamp {
        ParamRamp {
            target: self.q,
            time_constant: LIVE_TIME_CONSTANT,
        }
    }

    pub fn volume_ramp(&self) -> ParamRamp {
        ParamRamp {
            target: self.volume,
            time_constant: LIVE_TIME_CONSTANT,
        }
    }
}

/// Slow ramps that open the low-pass completely: `(cutoff, q)`.
pub fn open_filter_ramps(open_cutoff_hz: f32, time_constant: f64) -> (ParamRamp, ParamRamp) {
    (
        ParamRamp {
            target: clamp_cutoff(open_cutoff_hz),
            time_constant,
        },
        ParamRamp {
            target: Q_MIN,
            time_constant,
        },
    )
}

/// Lifecycle of the background-music graph.
///
/// The media-element source can only be created once, so a failed playback
/// start parks at `GraphReady` and later attempts only retry resume + play.
/// A graph that could not be built at all parks at `Unavailable` for good, so
/// gestures never stack up extra `AudioContext`s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AudioPhase {
    #[default]
    Uninitialized,
    GraphReady,
    Playing,
    Unavailable,
}

impl AudioPhase {
    #[inline]
    pub fn needs_graph(self) -> bool {
        self == AudioPhase::Uninitialized
    }

    #[cfg(test)]
    #[inline]
    pub fn is_playing(self) -> bool {
        self == AudioPhase::Playing
    }

    /// Whether a gesture should still try to start the music.
    #[inline]
    pub fn can_start(self) -> bool {
        matches!(self, AudioPhase::Uninitialized | AudioPhase::GraphReady)
    }

    pub fn after_graph_failed(self) -> Self {
        match self {
            AudioPhase::Uninitialized => AudioPhase::Unavailable,
            other => other,
        }
    }

    pub fn after_graph_built(self) -> Self {
        match self {
            AudioPhase::Uninitialized => AudioPhase::GraphReady,
            other => other,
        }
    }

    pub fn after_playback(self, result: &Result<(), AudioError>) -> Self {
        match (self, result) {
            (phase @ (AudioPhase::Uninitialized | AudioPhase::Unavailable), _) => phase,
            (_, Ok(())) => AudioPhase::Playing,
            (phase, Err(_)) => phase,
        }
    }
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("AudioContext unavailable: {0}")]
    Unsupported(String),
    #[error("audio graph construction failed: {0}")]
    Graph(String),
    #[error("playback start rejected: {0}")]
    Playback(String),
}

impl AudioError {
    /// Text for the `#audioStatus` element.
    pub fn status_text(&self) -> &'static str {
        match self {
            AudioError::Unsupported(_) | AudioError::Graph(_) => STATUS_UNSUPPORTED,
            AudioError::Playback(_) => STATUS_BLOCKED,
        }
    }
}
