// File: crates/calwall-preview/tests/state.rs
// Purpose: Keyboard commands edit preview parameters within their ranges; reset and URL output.

use calwall_core::{parse_query, Insets, Mode, RenderParameters, Rgb};
use calwall_preview::presets::{DEVICES, THEMES};
use calwall_preview::state::{initial_params, reset_params, COLUMNS_RANGE, PADDING_STEP};
use calwall_preview::{Command, PreviewState};

#[test]
fn opens_unpadded_at_utc_plus_five() {
    let s = PreviewState::default();
    assert_eq!(s.params.timezone_offset_hours, 5.0);
    assert_eq!(s.params.padding, Insets::default());
    assert_eq!(s.params, initial_params());
    assert_eq!(s.theme_name(), "zinc");
    assert_eq!(s.device_name(), "android-fhd");
}

#[test]
fn toggle_mode_flips_back_and_forth() {
    let mut s = PreviewState::default();
    assert!(s.apply(Command::ToggleMode));
    assert_eq!(s.params.mode, Mode::Year);
    assert!(s.apply(Command::ToggleMode));
    assert_eq!(s.params.mode, Mode::Month);
}

#[test]
fn columns_clamp_at_both_ends() {
    let mut s = PreviewState::new(RenderParameters { columns: COLUMNS_RANGE.1, ..reset_params() });
    assert!(!s.apply(Command::MoreColumns), "already at the maximum");
    s.params.columns = COLUMNS_RANGE.0;
    assert!(!s.apply(Command::FewerColumns), "already at the minimum");
    assert!(s.apply(Command::MoreColumns));
    assert_eq!(s.params.columns, 2);
}

#[test]
fn dot_steps_stay_on_tenths() {
    let mut s = PreviewState::default();
    for _ in 0..3 {
        s.apply(Command::LargerDots);
    }
    assert_eq!(s.params.dot_radius_multiplier, 1.3);
    for _ in 0..20 {
        s.apply(Command::LargerDots);
    }
    assert_eq!(s.params.dot_radius_multiplier, 2.0);
    for _ in 0..30 {
        s.apply(Command::SmallerDots);
    }
    assert_eq!(s.params.dot_radius_multiplier, 0.5);
}

#[test]
fn timezone_moves_in_half_hours_and_clamps() {
    let mut s = PreviewState::default();
    s.apply(Command::TimezoneEast);
    assert_eq!(s.params.timezone_offset_hours, 5.5);
    for _ in 0..40 {
        s.apply(Command::TimezoneEast);
    }
    assert_eq!(s.params.timezone_offset_hours, 14.0);
    for _ in 0..80 {
        s.apply(Command::TimezoneWest);
    }
    assert_eq!(s.params.timezone_offset_hours, -12.0);
}

#[test]
fn themes_and_devices_cycle() {
    let mut s = PreviewState::default();
    s.apply(Command::NextTheme);
    assert_eq!(s.theme_name(), THEMES[1].name);
    assert_eq!(s.params.palette, THEMES[1].palette);

    s.apply(Command::NextDevice);
    assert_eq!((s.params.width, s.params.height), (DEVICES[1].width, DEVICES[1].height));
    for _ in 1..DEVICES.len() {
        s.apply(Command::NextDevice);
    }
    assert_eq!(s.device_name(), DEVICES[0].name);
}

#[test]
fn reset_reserves_room_for_the_clock() {
    let mut s = PreviewState::default();
    s.apply(Command::ToggleMode);
    s.apply(Command::NextTheme);
    s.apply(Command::NextDevice);
    assert!(s.apply(Command::Reset));
    assert_eq!(s.params.padding, Insets::new(0, 0, 400, 100));
    assert_eq!(s.params.timezone_offset_hours, 5.0);
    assert_eq!(s, PreviewState::new(reset_params()));
    assert_eq!((s.theme_name(), s.device_name()), ("zinc", "android-fhd"));
    assert!(!s.apply(Command::Reset), "a second reset changes nothing");
}

#[test]
fn padding_steps_clamp_to_canvas() {
    let mut s = PreviewState::default();
    assert!(!s.apply(Command::LessPaddingTop), "already at zero");
    assert!(s.apply(Command::MorePaddingTop));
    assert_eq!(s.params.padding.top, PADDING_STEP);
    s.apply(Command::MorePaddingBottom);
    s.apply(Command::MorePaddingBottom);
    assert_eq!(s.params.padding.bottom, 2 * PADDING_STEP);
    s.apply(Command::LessPaddingBottom);
    assert_eq!(s.params.padding.bottom, PADDING_STEP);

    for _ in 0..200 {
        s.apply(Command::MorePaddingTop);
    }
    assert_eq!(s.params.padding.top, s.params.height);
    assert_eq!((s.params.padding.left, s.params.padding.right), (0, 0));
}

#[test]
fn query_seeds_every_field() {
    let s = PreviewState::from_query(
        "width=720&height=1600&mode=year&timezone=-3.5&paddingtop=120&paddingbottom=40\
         &paddingleft=10&paddingright=30&bgcolor=%23000000&passedcolor=ffffff&currentcolor=ff0000\
         &futurecolor=333333&textcolor=eeeeee&cols=20&dotradius=1.3",
    );
    let p = s.params;
    assert_eq!((p.width, p.height, p.mode), (720, 1600, Mode::Year));
    assert_eq!(p.timezone_offset_hours, -3.5);
    assert_eq!(p.padding, Insets::new(10, 30, 120, 40));
    assert_eq!(p.palette.background, Rgb::new(0, 0, 0));
    assert_eq!(p.palette.current, Rgb::new(0xff, 0, 0));
    assert_eq!((p.columns, p.dot_radius_multiplier), (20, 1.3));
}

#[test]
fn query_accepts_a_whole_url() {
    let original = PreviewState::new(RenderParameters { columns: 9, ..reset_params() });
    let seeded = PreviewState::from_query(&original.url("http://localhost:3000"));
    assert_eq!(seeded.params, original.params);

    // Unknown and missing keys keep server defaults.
    assert_eq!(PreviewState::from_query("?bogus=1").params, RenderParameters::default());
}

#[test]
fn url_round_trips_through_the_query_parser() {
    let mut s = PreviewState::default();
    s.apply(Command::ToggleMode);
    s.apply(Command::TimezoneWest);
    let url = s.url("http://localhost:3000/");
    assert!(url.starts_with("http://localhost:3000/api/wallpaper/getCalWall?"), "{url}");

    let query = url.split_once('?').map(|(_, q)| q).unwrap_or_default();
    assert_eq!(parse_query(query), s.params);
}
