//! Colors used by the painter, passed in explicitly at paint time.

use palette::{IntoColor, Oklch, Srgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

fn oklch(l: f32, c: f32, h: f32) -> Rgb {
    let srgb: Srgb = Oklch::new(l, c, h).into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    Rgb::new(r, g, b)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub border: Rgb,
    pub track: Rgb,
    pub track_hover: Rgb,
    pub thumb: Rgb,
    pub thumb_hover: Rgb,
    pub thumb_pressed: Rgb,
    pub button: Rgb,
    pub button_pressed: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: oklch(0.18, 0.01, 250.0),
            text: oklch(0.92, 0.01, 250.0),
            muted: oklch(0.65, 0.02, 250.0),
            border: oklch(0.5, 0.05, 250.0),
            track: oklch(0.25, 0.02, 250.0),
            track_hover: oklch(0.3, 0.03, 250.0),
            thumb: oklch(0.55, 0.06, 250.0),
            thumb_hover: oklch(0.65, 0.08, 250.0),
            thumb_pressed: oklch(0.75, 0.1, 250.0),
            button: oklch(0.45, 0.04, 250.0),
            button_pressed: oklch(0.7, 0.1, 200.0),
        }
    }
}
