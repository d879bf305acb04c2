// File: crates/calwall-preview/src/state.rs
// Summary: Preview parameter state and the keyboard commands that edit it.
// Notes:
// - Every accepted command produces a new parameter set; the window re-renders
//   the whole frame from scratch.

use calwall_core::{parse_query, request_url, Insets, RenderParameters};

use crate::presets::{DEVICES, THEMES};

pub const COLUMNS_RANGE: (u32, u32) = (1, 30);
pub const DOT_RADIUS_RANGE: (f64, f64) = (0.5, 2.0);
pub const TIMEZONE_RANGE: (f64, f64) = (-12.0, 14.0);
/// Pixels added or removed per padding step.
pub const PADDING_STEP: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleMode,
    MoreColumns,
    FewerColumns,
    LargerDots,
    SmallerDots,
    TimezoneEast,
    TimezoneWest,
    MorePaddingTop,
    LessPaddingTop,
    MorePaddingBottom,
    LessPaddingBottom,
    NextTheme,
    NextDevice,
    Reset,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PreviewState {
    pub params: RenderParameters,
    theme: usize,
    device: usize,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self::new(initial_params())
    }
}

/// Parameters the preview opens with: server defaults shifted to UTC+5.
pub fn initial_params() -> RenderParameters {
    RenderParameters { timezone_offset_hours: 5.0, ..RenderParameters::default() }
}

/// "Reset to defaults": phone canvas with room for a lock-screen clock.
pub fn reset_params() -> RenderParameters {
    RenderParameters {
        padding: Insets::new(0, 0, 400, 100),
        ..initial_params()
    }
}

impl PreviewState {
    pub fn new(params: RenderParameters) -> Self {
        Self { params, theme: 0, device: 0 }
    }

    /// Seed the preview from a query string (`width=..&mode=..`) or a whole
    /// request URL, with the same lenient decoding the server applies.
    pub fn from_query(query: &str) -> Self {
        let query = query.split_once('?').map_or(query, |(_, q)| q);
        Self::new(parse_query(query))
    }

    pub fn theme_name(&self) -> &'static str {
        THEMES[self.theme].name
    }

    pub fn device_name(&self) -> &'static str {
        DEVICES[self.device].name
    }

    /// Apply `cmd`; returns whether the parameters changed.
    pub fn apply(&mut self, cmd: Command) -> bool {
        let before = self.params;
        let p = &mut self.params;
        match cmd {
            Command::ToggleMode => p.mode = p.mode.toggled(),
            Command::MoreColumns => p.columns = (p.columns + 1).min(COLUMNS_RANGE.1),
            Command::FewerColumns => p.columns = p.columns.saturating_sub(1).max(COLUMNS_RANGE.0),
            Command::LargerDots => p.dot_radius_multiplier = step(p.dot_radius_multiplier, 0.1, DOT_RADIUS_RANGE),
            Command::SmallerDots => p.dot_radius_multiplier = step(p.dot_radius_multiplier, -0.1, DOT_RADIUS_RANGE),
            Command::TimezoneEast => p.timezone_offset_hours = step(p.timezone_offset_hours, 0.5, TIMEZONE_RANGE),
            Command::TimezoneWest => p.timezone_offset_hours = step(p.timezone_offset_hours, -0.5, TIMEZONE_RANGE),
            Command::MorePaddingTop => p.padding.top = grow(p.padding.top, p.height),
            Command::LessPaddingTop => p.padding.top = p.padding.top.saturating_sub(PADDING_STEP),
            Command::MorePaddingBottom => p.padding.bottom = grow(p.padding.bottom, p.height),
            Command::LessPaddingBottom => p.padding.bottom = p.padding.bottom.saturating_sub(PADDING_STEP),
            Command::NextTheme => {
                self.theme = (self.theme + 1) % THEMES.len();
                p.palette = THEMES[self.theme].palette;
            }
            Command::NextDevice => {
                self.device = (self.device + 1) % DEVICES.len();
                let d = DEVICES[self.device];
                p.width = d.width;
                p.height = d.height;
            }
            Command::Reset => {
                *self = Self::new(reset_params());
            }
        }
        self.params != before
    }

    pub fn url(&self, base: &str) -> String {
        request_url(base, &self.params)
    }

    pub fn describe(&self) -> String {
        let p = &self.params;
        format!(
            "{}x{} {} tz={:+} pad={}/{} cols={} dots={:.1} theme={}",
            p.width,
            p.height,
            p.mode,
            p.timezone_offset_hours,
            p.padding.top,
            p.padding.bottom,
            p.columns,
            p.dot_radius_multiplier,
            self.theme_name(),
        )
    }
}

/// One padding step up, never past the canvas height.
fn grow(padding: u32, height: u32) -> u32 {
    padding.saturating_add(PADDING_STEP).min(height)
}

/// Add `delta` and clamp, rounding to one decimal so repeated steps stay exact.
fn step(value: f64, delta: f64, (lo, hi): (f64, f64)) -> f64 {
    ((value + delta) * 10.0).round().clamp(lo * 10.0, hi * 10.0) / 10.0
}
