/// Shared geometric and color primitives used by the switch renderer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl IconBounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    /// True when any part of the bounds overlaps `0..track_width`.
    pub const fn intersects_track(self, track_width: i32) -> bool {
        self.right() > 0 && self.x < track_width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    pub fn to_cairo_rgba(self) -> (f64, f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
            f64::from(self.a) / 255.0,
        )
    }
}

pub fn lerp(start: f64, end: f64, fraction: f64) -> f64 {
    start + (end - start) * fraction
}

/// Per-channel interpolation; the channel delta is truncated toward zero so
/// both endpoints are reproduced exactly.
pub fn lerp_color(start: Color, end: Color, fraction: f64) -> Color {
    let fraction = fraction.clamp(0.0, 1.0);
    let channel = |from: u8, to: u8| -> u8 {
        let delta = (fraction * (f64::from(to) - f64::from(from))) as i32;
        (i32::from(from) + delta).clamp(0, 255) as u8
    };
    Color {
        a: channel(start.a, end.a),
        r: channel(start.r, end.r),
        g: channel(start.g, end.g),
        b: channel(start.b, end.b),
    }
}
