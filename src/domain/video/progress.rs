// SPDX-License-Identifier: MPL-2.0
//! Playback position samples and their textual form.

/// Placeholder shown while the duration is not known yet.
pub const UNKNOWN_TIME: &str = "--:--";

/// Latest position/duration pair read from the external player.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressSample {
    current_secs: f64,
    duration_secs: Option<f64>,
}

impl ProgressSample {
    /// Builds a sample from raw player readings.
    ///
    /// Negative or NaN positions become 0. A duration that is not a
    /// positive number is treated as unknown.
    #[must_use]
    pub fn new(current_secs: f64, duration_secs: f64) -> Self {
        Self {
            current_secs: sanitize(current_secs),
            duration_secs: (duration_secs.is_finite() && duration_secs > 0.0)
                .then_some(duration_secs),
        }
    }

    #[must_use]
    pub fn current_secs(&self) -> f64 {
        self.current_secs
    }

    /// Duration in seconds, `None` while unknown.
    #[must_use]
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    /// Same duration, different position.
    #[must_use]
    pub fn with_position(self, current_secs: f64) -> Self {
        Self {
            current_secs: sanitize(current_secs),
            ..self
        }
    }

    /// Keeps the known duration when a newer reading has none.
    #[must_use]
    pub fn merge_duration(self, previous: Option<f64>) -> Self {
        Self {
            duration_secs: self.duration_secs.or(previous),
            ..self
        }
    }

    /// Fraction of the video played, in `[0, 1]`. Zero while unknown.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        match self.duration_secs {
            Some(duration) => (self.current_secs / duration).clamp(0.0, 1.0),
            None => 0.0,
        }
    }

    /// `"MM:SS / MM:SS"`, or `"MM:SS / --:--"` while duration is unknown.
    #[must_use]
    pub fn time_text(&self) -> String {
        let duration = self
            .duration_secs
            .map_or_else(|| UNKNOWN_TIME.to_string(), format_time);
        format!("{} / {}", format_time(self.current_secs), duration)
    }
}

fn sanitize(secs: f64) -> f64 {
    if secs.is_finite() && secs > 0.0 {
        secs
    } else {
        0.0
    }
}

/// Formats seconds as `MM:SS`.
///
/// Minutes keep counting past 59 (`75:03`). NaN and negative input
/// render as `00:00`.
#[must_use]
pub fn format_time(secs: f64) -> String {
    if !secs.is_finite() || secs < 0.0 {
        return "00:00".to_string();
    }
    let total = secs.floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
