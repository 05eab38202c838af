//! Viewport synchronization configuration types.

use serde::{Deserialize, Serialize};

/// What the secondary view does with the primary camera.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum SyncMode {
    /// Minimap: the secondary frames an enlarged copy of the primary
    /// footprint and draws that footprint as a translucent quad.
    #[default]
    Overview,
    /// Both views drive each other through pose copy or look-at locks.
    Mirror,
}

/// What to do with the footprint overlay when a tick yields a
/// zero or negative size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum StaleOverlayPolicy {
    /// Leave the previous overlay as it was.
    #[default]
    Keep,
    /// Hide the overlay until a valid footprint comes back.
    Hide,
}

/// Synchronizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SyncConfig {
    pub mode: SyncMode,
    /// Camera-change sensitivity applied to both views (valid range: (0, 1]).
    pub percentage_changed: f64,
    /// Overview expansion factor along longitude (valid range: 1-10).
    pub expand_width_factor: f64,
    /// Overview expansion factor along latitude (valid range: 1-10).
    pub expand_height_factor: f64,
    pub stale_overlay: StaleOverlayPolicy,
    /// Disable user camera input on the overview while synchronized.
    pub lock_overview_controls: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            mode: SyncMode::Overview,
            percentage_changed: 0.01,
            expand_width_factor: 2.0,
            expand_height_factor: 2.0,
            stale_overlay: StaleOverlayPolicy::Keep,
            lock_overview_controls: true,
        }
    }
}

/// Footprint quad appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OverlayConfig {
    /// Hex fill color, `#rrggbb` or `#rrggbbaa`.
    pub color: String,
    pub outline: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            color: "#ff000080".into(),
            outline: true,
        }
    }
}
