// File: crates/calwall-core/src/query.rs
// Summary: Query-string contract shared by the HTTP endpoint and the preview's URL generator.
// Notes:
// - Parsing never fails: each field falls back to its documented default when the
//   raw value is missing, malformed or out of range.

use url::form_urlencoded;

use crate::params::{Mode, Palette, RenderParameters, Rgb};

/// Path of the wallpaper endpoint.
pub const ENDPOINT_PATH: &str = "/api/wallpaper/getCalWall";

/// Accepted timezone offsets, in hours.
pub const TIMEZONE_RANGE: std::ops::RangeInclusive<f64> = -12.0..=14.0;

/// Query keys, in the order `to_query_string` emits them.
pub const KEYS: [&str; 15] = [
    "width", "height", "mode", "timezone", "paddingtop", "paddingbottom", "paddingleft",
    "paddingright", "bgcolor", "passedcolor", "currentcolor", "futurecolor", "textcolor", "cols",
    "dotradius",
];

/// Decode a raw query string (without the leading `?`) into render parameters.
pub fn parse_query(query: &str) -> RenderParameters {
    let mut p = RenderParameters::default();
    let defaults = Palette::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let key = key.as_ref();
        let raw = value.as_ref();
        match key {
            "width" => p.width = positive_int(key, raw, p.width),
            "height" => p.height = positive_int(key, raw, p.height),
            "cols" => p.columns = positive_int(key, raw, p.columns),
            "paddingtop" => p.padding.top = padding(key, raw),
            "paddingbottom" => p.padding.bottom = padding(key, raw),
            "paddingleft" => p.padding.left = padding(key, raw),
            "paddingright" => p.padding.right = padding(key, raw),
            "mode" => p.mode = mode(raw),
            "timezone" => p.timezone_offset_hours = timezone(raw),
            "dotradius" => p.dot_radius_multiplier = dot_radius(raw),
            "bgcolor" => p.palette.background = color(key, raw, defaults.background),
            "passedcolor" => p.palette.past = color(key, raw, defaults.past),
            "currentcolor" => p.palette.current = color(key, raw, defaults.current),
            "futurecolor" => p.palette.future = color(key, raw, defaults.future),
            "textcolor" => p.palette.text = color(key, raw, defaults.text),
            _ => tracing::trace!(key, "ignoring unknown query key"),
        }
    }
    p
}

/// Encode parameters with every key of [`KEYS`], colors without `#`.
pub fn to_query_string(p: &RenderParameters) -> String {
    let values = [
        p.width.to_string(),
        p.height.to_string(),
        p.mode.to_string(),
        p.timezone_offset_hours.to_string(),
        p.padding.top.to_string(),
        p.padding.bottom.to_string(),
        p.padding.left.to_string(),
        p.padding.right.to_string(),
        p.palette.background.to_string(),
        p.palette.past.to_string(),
        p.palette.current.to_string(),
        p.palette.future.to_string(),
        p.palette.text.to_string(),
        p.columns.to_string(),
        p.dot_radius_multiplier.to_string(),
    ];
    let mut ser = form_urlencoded::Serializer::new(String::new());
    for (key, value) in KEYS.iter().zip(values.iter()) {
        ser.append_pair(key, value);
    }
    ser.finish()
}

/// Full request URL for `p` against a server at `base` (e.g. `http://localhost:3000`).
pub fn request_url(base: &str, p: &RenderParameters) -> String {
    format!("{}{}?{}", base.trim_end_matches('/'), ENDPOINT_PATH, to_query_string(p))
}

// ---- coercion ---------------------------------------------------------------

fn positive_int(key: &str, raw: &str, default: u32) -> u32 {
    match leading_int(raw) {
        Some(v) if v > 0 && v <= u32::MAX as i64 => v as u32,
        _ => fallback(key, raw, default),
    }
}

fn padding(key: &str, raw: &str) -> u32 {
    match leading_int(raw) {
        Some(v) if v >= 0 && v <= u32::MAX as i64 => v as u32,
        _ => fallback(key, raw, 0),
    }
}

/// Anything but `month`/`year` means month, the documented default. Older
/// clients treated every non-`month` value as year; `mode=week` now renders a month.
fn mode(raw: &str) -> Mode {
    raw.parse().unwrap_or_else(|_| fallback("mode", raw, Mode::Month))
}

fn timezone(raw: &str) -> f64 {
    match leading_float(raw) {
        Some(v) if TIMEZONE_RANGE.contains(&v) => v,
        _ => fallback("timezone", raw, 0.0),
    }
}

fn dot_radius(raw: &str) -> f64 {
    match leading_float(raw) {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => fallback("dotradius", raw, 1.0),
    }
}

fn color(key: &str, raw: &str, default: Rgb) -> Rgb {
    Rgb::from_hex(raw).unwrap_or_else(|_| fallback(key, raw, default))
}

fn fallback<T: std::fmt::Display>(key: &str, raw: &str, default: T) -> T {
    tracing::warn!(key, raw, %default, "invalid query value, using default");
    default
}

/// Integer value of the longest `[+-]digits` prefix after leading whitespace.
fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

/// Float value of the longest decimal prefix (`[+-]digits[.digits][e[+-]digits]`).
fn leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let b = s.as_bytes();
    let mut end = usize::from(s.starts_with(['+', '-']));
    let int_digits = count_digits(&b[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if b.get(end) == Some(&b'.') {
        frac_digits = count_digits(&b[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    if matches!(b.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(b.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&b[exp_end.min(b.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }
    s[..end].parse().ok().filter(|v: &f64| v.is_finite())
}

fn count_digits(b: &[u8]) -> usize {
    b.iter().take_while(|c| c.is_ascii_digit()).count()
}
