//! Vector Template Engine
//!
//! Pure functions from size + palette to SVG markup. No I/O, no clocks:
//! the same inputs always give byte-identical output.
//!
//! Icons scale every dimension linearly with the edge length so each size is
//! self-similar. Launch screens place the logo and text at fixed offsets
//! from the vertical midpoint; at extreme aspect ratios the composition sits
//! off-center.

use crate::palette::ColorPalette;

pub const BRAND_MARK: &str = "BeYou";
pub const TAGLINE: &str = "LGBTQ+ Social Platform";

const FONT_FAMILY: &str = "Arial, sans-serif";
const ICON_GRADIENT_ID: &str = "prideGradient";
const BACKGROUND_GRADIENT_ID: &str = "backgroundGradient";

/// Heart glyph on a 24-unit box centered at the origin
const HEART_PATH: &str =
    "M0,-8 C-4,-12 -12,-12 -12,-4 C-12,4 0,12 0,12 C0,12 12,4 12,-4 C12,-12 4,-12 0,-8 Z";

/// Logo mark placement, in canvas units from the vertical midpoint
const LOGO_OFFSET_Y: f64 = -100.0;
const LOGO_OUTER_RADIUS: u32 = 80;
const LOGO_INNER_RADIUS: u32 = 60;
const MARK_OFFSET_Y: f64 = -80.0;
const TITLE_OFFSET_Y: f64 = 50.0;
const TAGLINE_OFFSET_Y: f64 = 90.0;
const INDICATOR_OFFSET_Y: f64 = 150.0;

fn svg_open(width: u32, height: u32) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">"#
    )
}

fn gradient_defs(id: &str, palette: &ColorPalette) -> String {
    let stops: String = palette
        .gradient_stops()
        .iter()
        .map(|(offset, color)| {
            format!(
                "\n      <stop offset=\"{offset}%\" style=\"stop-color:{color};stop-opacity:1\" />"
            )
        })
        .collect();

    format!(
        r#"
  <defs>
    <linearGradient id="{id}" x1="0%" y1="0%" x2="100%" y2="100%">{stops}
    </linearGradient>
  </defs>"#
    )
}

/// Render a square app icon with side `edge_length`.
///
/// Sizes too small to read still produce valid markup.
pub fn render_icon(edge_length: u32, palette: &ColorPalette) -> String {
    let size = f64::from(edge_length);
    let center = size / 2.0;
    let radius = size / 2.0 - 2.0;
    let text_y = center + size / 8.0;
    let font_size = size / 6.0;
    let heart_y = center - size / 6.0;
    let heart_scale = size / 200.0;

    format!(
        r#"{open}{defs}

  <!-- Background Circle -->
  <circle cx="{center}" cy="{center}" r="{radius}" fill="url(#{ICON_GRADIENT_ID})" />

  <!-- Brand Text -->
  <text x="{center}" y="{text_y}"
        font-family="{FONT_FAMILY}"
        font-size="{font_size}"
        font-weight="bold"
        text-anchor="middle"
        fill="white">{BRAND_MARK}</text>

  <!-- Heart -->
  <g transform="translate({center}, {heart_y})">
    <path d="{HEART_PATH}"
          fill="white"
          transform="scale({heart_scale})" />
  </g>
</svg>"#,
        open = svg_open(edge_length, edge_length),
        defs = gradient_defs(ICON_GRADIENT_ID, palette),
    )
}

/// Render a splash screen or feature graphic of `width` x `height`.
///
/// The loading indicator pulses through a declarative `<animate>` element.
pub fn render_launch_screen(width: u32, height: u32, palette: &ColorPalette) -> String {
    let cx = f64::from(width) / 2.0;
    let mid = f64::from(height) / 2.0;
    let logo_y = mid + LOGO_OFFSET_Y;
    let mark_y = mid + MARK_OFFSET_Y;
    let title_y = mid + TITLE_OFFSET_Y;
    let tagline_y = mid + TAGLINE_OFFSET_Y;
    let indicator_y = mid + INDICATOR_OFFSET_Y;

    format!(
        r#"{open}{defs}

  <!-- Background -->
  <rect width="{width}" height="{height}" fill="url(#{BACKGROUND_GRADIENT_ID})" />

  <!-- Logo Circle -->
  <circle cx="{cx}" cy="{logo_y}" r="{LOGO_OUTER_RADIUS}" fill="white" fill-opacity="0.2" />
  <circle cx="{cx}" cy="{logo_y}" r="{LOGO_INNER_RADIUS}" fill="white" />

  <!-- Brand Mark -->
  <text x="{cx}" y="{mark_y}"
        font-family="{FONT_FAMILY}"
        font-size="24"
        font-weight="bold"
        text-anchor="middle"
        fill="{primary}">{BRAND_MARK}</text>

  <!-- App Title -->
  <text x="{cx}" y="{title_y}"
        font-family="{FONT_FAMILY}"
        font-size="32"
        font-weight="bold"
        text-anchor="middle"
        fill="white">{BRAND_MARK}</text>

  <!-- Tagline -->
  <text x="{cx}" y="{tagline_y}"
        font-family="{FONT_FAMILY}"
        font-size="18"
        text-anchor="middle"
        fill="white"
        fill-opacity="0.9">{TAGLINE}</text>

  <!-- Loading indicator -->
  <circle cx="{cx}" cy="{indicator_y}" r="3" fill="white" fill-opacity="0.8">
    <animate attributeName="fill-opacity" values="0.8;0.3;0.8" dur="1.5s" repeatCount="indefinite" />
  </circle>
</svg>"#,
        open = svg_open(width, height),
        defs = gradient_defs(BACKGROUND_GRADIENT_ID, palette),
        primary = palette.primary,
    )
}
