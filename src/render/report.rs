use std::path::PathBuf;

use serde::Serialize;

/// A non-fatal condition hit while rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Degradation {
    /// Vertical text exceeded the column budget and was cut.
    TextTruncated {
        /// Characters drawn.
        kept: usize,
        /// Characters dropped.
        dropped: usize,
    },
    /// The background image could not be loaded; the step was skipped.
    BackgroundSkipped {
        /// Requested image path.
        path: PathBuf,
        /// Why loading failed.
        reason: String,
    },
    /// The user photo could not be used.
    UserPhotoSkipped {
        /// Requested photo path.
        path: PathBuf,
        /// Why it was skipped.
        reason: String,
    },
    /// No font file loaded; built-in glyphs without CJK coverage were used.
    FontFallback,
}

/// Degradations recorded during one render, in the order they occurred.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RenderReport {
    /// Recorded events.
    pub degradations: Vec<Degradation>,
}

impl RenderReport {
    /// Record `d` and log it.
    pub fn record(&mut self, d: Degradation) {
        match &d {
            Degradation::TextTruncated { kept, dropped } => {
                tracing::warn!(kept, dropped, "vertical text truncated");
            }
            Degradation::BackgroundSkipped { path, reason } => {
                tracing::warn!(path = %path.display(), reason = %reason, "background image skipped");
            }
            Degradation::UserPhotoSkipped { path, reason } => {
                tracing::warn!(path = %path.display(), reason = %reason, "user photo skipped");
            }
            Degradation::FontFallback => {
                tracing::warn!("rendered text with built-in glyphs");
            }
        }
        self.degradations.push(d);
    }

    /// `true` when nothing degraded.
    pub fn is_clean(&self) -> bool {
        self.degradations.is_empty()
    }

    /// Whether any recorded event matches `pred`.
    pub fn any(&self, pred: impl Fn(&Degradation) -> bool) -> bool {
        self.degradations.iter().any(pred)
    }
}
