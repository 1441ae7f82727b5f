use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::geometry::{lerp, lerp_color, Color, IconBounds};
use crate::state::SwitchVisualState;

use super::style::StyleTokens;

pub const LIGHT_SKY: Color = Color::from_argb(0xFF87_CEEB);
pub const NIGHT_SKY: Color = Color::from_argb(0xFF19_1970);
const BORDER: Color = Color::from_argb(0x33FF_FFFF);
const HALO: Color = Color::from_argb(0x1FFF_FFFF);
const SUN: Color = Color::from_argb(0xFFFF_C83D);
const SUN_CORE: Color = Color::from_argb(0xFFFF_E08A);
const MOON: Color = Color::from_argb(0xFFE8_E6D9);
const MOON_CRATER: Color = Color::from_argb(0xFFC9_C6B5);
const STAR: Color = Color::from_argb(0xFFFF_FFFF);

/// Everything the draw pass needs for one frame, resolved from the visual state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchLayout {
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub background: Color,
    pub progress: f64,
    pub glow: IconBounds,
    pub sun: IconBounds,
    pub moon: IconBounds,
}

/// Resolves icon and glow positions.
///
/// Which icon slides is chosen by `checked`, not by `progress`: while
/// unchecked the sun travels and the moon waits past the right edge, while
/// checked the sun is parked past the left edge and the moon travels. Icon
/// positions are only continuous in `progress` while `checked` matches the
/// direction of the running animation.
pub fn switch_layout(
    width: i32,
    height: i32,
    state: SwitchVisualState,
    tokens: StyleTokens,
) -> SwitchLayout {
    let progress = state.progress.clamp(0.0, 1.0);
    let switch_width = f64::from(width);
    let switch_height = f64::from(height);
    let handle_size = f64::from(tokens.handle_size(height));
    let handle_padding = f64::from(tokens.handle_padding);
    let travel = switch_width - handle_size - handle_padding * 2.0;
    let sliding_left = (handle_padding + travel * progress) as i32;

    let glow_left = lerp(
        -switch_width / 2.0 + handle_padding + handle_size / 2.0,
        switch_width / 2.0 - handle_padding - handle_size / 2.0,
        progress,
    ) as i32;

    let (sun_left, moon_left) = if state.checked {
        ((-handle_size - handle_padding) as i32, sliding_left)
    } else {
        (sliding_left, (switch_width + handle_padding) as i32)
    };
    let icon_top = tokens.handle_padding;
    let icon_size = handle_size as i32;

    SwitchLayout {
        width: switch_width,
        height: switch_height,
        corner_radius: switch_height / 2.0,
        background: lerp_color(LIGHT_SKY, NIGHT_SKY, progress),
        progress,
        glow: IconBounds::new(glow_left, 0, width, height),
        sun: IconBounds::new(sun_left, icon_top, icon_size, icon_size),
        moon: IconBounds::new(moon_left, icon_top, icon_size, icon_size),
    }
}

pub fn draw_switch(context: &gtk4::cairo::Context, layout: &SwitchLayout, border_width: f64) {
    if layout.width <= 0.0 || layout.height <= 0.0 {
        return;
    }

    context.save().ok();
    append_rounded_track_path(context, layout.width, layout.height, layout.corner_radius);
    context.clip();

    set_source_color(context, layout.background);
    append_rounded_track_path(context, layout.width, layout.height, layout.corner_radius);
    let _ = context.fill();

    set_source_color(context, BORDER);
    context.set_line_width(border_width);
    append_rounded_track_path(context, layout.width, layout.height, layout.corner_radius);
    let _ = context.stroke();

    draw_sky_decoration(context, layout);
    draw_glow(context, layout.glow);

    if layout.sun.intersects_track(layout.width as i32) {
        draw_sun(context, layout.sun);
    }
    if layout.moon.intersects_track(layout.width as i32) {
        draw_moon(context, layout.moon);
    }
    context.restore().ok();

    set_source_color(context, BORDER);
    context.set_line_width(border_width);
    append_rounded_track_path(context, layout.width, layout.height, layout.corner_radius);
    let _ = context.stroke();
}

fn set_source_color(context: &gtk4::cairo::Context, color: Color) {
    let (r, g, b, a) = color.to_cairo_rgba();
    context.set_source_rgba(r, g, b, a);
}

fn append_rounded_track_path(context: &gtk4::cairo::Context, width: f64, height: f64, radius: f64) {
    let radius = radius.clamp(0.0, width.min(height) / 2.0);
    context.new_path();
    if radius <= 0.0 {
        context.rectangle(0.0, 0.0, width, height);
        return;
    }
    context.new_sub_path();
    context.arc(width - radius, radius, radius, -FRAC_PI_2, 0.0);
    context.arc(width - radius, height - radius, radius, 0.0, FRAC_PI_2);
    context.arc(radius, height - radius, radius, FRAC_PI_2, PI);
    context.arc(radius, radius, radius, PI, PI * 1.5);
    context.close_path();
}

// Concentric halos stay put; stars fade in with the night sky.
fn draw_sky_decoration(context: &gtk4::cairo::Context, layout: &SwitchLayout) {
    let center_y = layout.height / 2.0;
    for ring in 1..=3 {
        set_source_color(context, HALO);
        context.new_path();
        context.arc(
            layout.height / 2.0,
            center_y,
            layout.height * (0.45 + 0.35 * f64::from(ring)),
            0.0,
            TAU,
        );
        let _ = context.fill();
    }

    let (r, g, b, a) = STAR.to_cairo_rgba();
    context.set_source_rgba(r, g, b, a * layout.progress);
    for (x, y, size) in [(0.18, 0.28, 1.6), (0.30, 0.62, 1.2), (0.42, 0.22, 1.0), (0.12, 0.70, 1.1)] {
        context.new_path();
        context.arc(layout.width * x, layout.height * y, size, 0.0, TAU);
        let _ = context.fill();
    }
}

fn draw_glow(context: &gtk4::cairo::Context, glow: IconBounds) {
    let center_x = f64::from(glow.x) + f64::from(glow.width) / 2.0;
    let center_y = f64::from(glow.height) / 2.0;
    let radius = f64::from(glow.height);
    let gradient =
        gtk4::cairo::RadialGradient::new(center_x, center_y, 0.0, center_x, center_y, radius);
    gradient.add_color_stop_rgba(0.0, 1.0, 1.0, 1.0, 0.35);
    gradient.add_color_stop_rgba(1.0, 1.0, 1.0, 1.0, 0.0);
    if context.set_source(&gradient).is_ok() {
        context.new_path();
        context.rectangle(
            f64::from(glow.x),
            f64::from(glow.y),
            f64::from(glow.width),
            f64::from(glow.height),
        );
        let _ = context.fill();
    }
}

fn draw_sun(context: &gtk4::cairo::Context, bounds: IconBounds) {
    let radius = f64::from(bounds.width) / 2.0;
    let center_x = f64::from(bounds.x) + radius;
    let center_y = f64::from(bounds.y) + radius;

    set_source_color(context, SUN);
    context.new_path();
    context.arc(center_x, center_y, radius, 0.0, TAU);
    let _ = context.fill();

    set_source_color(context, SUN_CORE);
    context.new_path();
    context.arc(center_x - radius * 0.2, center_y - radius * 0.2, radius * 0.55, 0.0, TAU);
    let _ = context.fill();
}

fn draw_moon(context: &gtk4::cairo::Context, bounds: IconBounds) {
    let radius = f64::from(bounds.width) / 2.0;
    let center_x = f64::from(bounds.x) + radius;
    let center_y = f64::from(bounds.y) + radius;

    set_source_color(context, MOON);
    context.new_path();
    context.arc(center_x, center_y, radius, 0.0, TAU);
    let _ = context.fill();

    set_source_color(context, MOON_CRATER);
    for (dx, dy, scale) in [(-0.3, -0.25, 0.22), (0.25, 0.1, 0.28), (-0.1, 0.4, 0.14)] {
        context.new_path();
        context.arc(
            center_x + radius * dx,
            center_y + radius * dy,
            radius * scale,
            0.0,
            TAU,
        );
        let _ = context.fill();
    }
}
