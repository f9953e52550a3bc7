//! RGBA colors as `[f32; 4]`, matching the vertex color layout

pub type Color = [f32; 4];

/// Opaque color from 8-bit channels
pub const fn rgb8(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Same color with a new alpha
#[inline]
pub const fn with_alpha(color: Color, alpha: f32) -> Color {
    [color[0], color[1], color[2], alpha]
}

/// CSS `rgba()` string for canvas fill styles
pub fn to_css(color: Color) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({},{},{},{})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}

/// Named colors used by the scene and HUD
pub mod colors {
    use super::{Color, rgb8};

    pub const BACKGROUND: Color = rgb8(0, 0, 0);
    pub const WHITE: Color = rgb8(255, 255, 255);
    pub const LIME: Color = rgb8(0, 255, 0);
    pub const RED: Color = rgb8(255, 0, 0);
    pub const SHIP_BODY: Color = rgb8(0, 100, 255);
    pub const SHIP_FLAME: Color = rgb8(255, 165, 0);
    pub const EXHAUST_THRUST: Color = rgb8(0xff, 0xdd, 0x88);
    pub const EXHAUST_COAST: Color = rgb8(0xbb, 0xdd, 0xff);
}
