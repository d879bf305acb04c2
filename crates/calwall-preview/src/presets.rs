// File: crates/calwall-preview/src/presets.rs
// Summary: Named device resolutions and color themes offered by the preview.

use calwall_core::{Palette, Rgb};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Device {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

pub const DEVICES: &[Device] = &[
    Device { name: "android-fhd", width: 1080, height: 2400 },
    Device { name: "iphone-15", width: 1179, height: 2556 },
    Device { name: "iphone-15-pro-max", width: 1290, height: 2796 },
    Device { name: "iphone-se", width: 750, height: 1334 },
    Device { name: "pixel-8-pro", width: 1344, height: 2992 },
    Device { name: "galaxy-s24", width: 1080, height: 2340 },
    Device { name: "desktop-1080p", width: 1920, height: 1080 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub palette: Palette,
}

const fn rgb(hex: u32) -> Rgb {
    Rgb::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

const fn theme(name: &'static str, bg: u32, past: u32, current: u32, future: u32, text: u32) -> Theme {
    Theme {
        name,
        palette: Palette {
            background: rgb(bg),
            past: rgb(past),
            current: rgb(current),
            future: rgb(future),
            text: rgb(text),
        },
    }
}

pub const THEMES: &[Theme] = &[
    theme("zinc", 0x71717a, 0xf97316, 0xfbbf24, 0x52525b, 0xffffff),
    theme("midnight", 0x0f172a, 0x38bdf8, 0xf0f9ff, 0x1e293b, 0xe2e8f0),
    theme("forest", 0x14261c, 0x4ade80, 0xfef08a, 0x29412f, 0xdcfce7),
    theme("rose", 0x2a1219, 0xfb7185, 0xfde68a, 0x4c1d2a, 0xffe4e6),
    theme("paper", 0xf5f5f4, 0x292524, 0xdc2626, 0xd6d3d1, 0x1c1917),
    // Pure black background for OLED panels.
    theme("oled", 0x000000, 0xa3a3a3, 0xffffff, 0x262626, 0xd4d4d4),
];

/// Find a theme by name, falling back to the first (default) theme.
pub fn find_theme(name: &str) -> Theme {
    THEMES.iter().copied().find(|t| t.name.eq_ignore_ascii_case(name)).unwrap_or(THEMES[0])
}

pub fn find_device(name: &str) -> Option<Device> {
    DEVICES.iter().copied().find(|d| d.name.eq_ignore_ascii_case(name))
}
