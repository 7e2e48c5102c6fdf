//! Site Configuration
//!
//! Interaction tuning, read from the optional `settings` block of the
//! content file. Every field has a default, so a partial block is fine.

use leptos_motion::{DragConfig, SpringConfig};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub scroll: ScrollConfig,
    pub menu: MenuConfig,
    pub gallery: GalleryConfig,
    pub series: SeriesConfig,
    pub drag: DragConfig,
    pub log_level: LevelFilter,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollConfig::default(),
            menu: MenuConfig::default(),
            gallery: GalleryConfig::default(),
            series: SeriesConfig::default(),
            drag: DragConfig::default(),
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollConfig {
    /// Header switches to its solid style past this offset (px)
    pub header_threshold: f64,
    /// Scroll-to-top button appears past this offset (px)
    pub top_button_threshold: f64,
    pub progress_spring: SpringConfig,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_threshold: 50.0,
            top_button_threshold: 300.0,
            progress_spring: SpringConfig::new(100.0, 30.0, 0.001, 0.01),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuConfig {
    /// Overlay fade/scale duration (s)
    pub panel_duration: f64,
    /// Link `i` enters after `link_delay_base + i * link_delay_step` seconds
    pub link_delay_base: f64,
    pub link_delay_step: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self { panel_duration: 0.2, link_delay_base: 0.2, link_delay_step: 0.1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryConfig {
    /// Backdrop fade (s)
    pub fade_duration: f64,
    /// Card/modal shared-element transition (s)
    pub layout_duration: f64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self { fade_duration: 0.3, layout_duration: 0.35 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeriesConfig {
    pub tick_ms: u32,
    pub capacity: usize,
    /// Sample values are drawn from `0..value_ceiling`
    pub value_ceiling: u32,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self { tick_ms: 1000, capacity: 6, value_ceiling: 30 }
    }
}

/// Seconds to whole milliseconds, for timers
pub fn secs_to_ms(secs: f64) -> u32 {
    if secs.is_finite() && secs > 0.0 {
        (secs * 1000.0).round() as u32
    } else {
        0
    }
}
