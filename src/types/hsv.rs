//! Perceptual HSV color and its device translation.

use crate::command::MAX_BRIGHTNESS;

/// A hue/saturation/value color.
///
/// Hue is an angle in degrees in `[0, 360)`; saturation and value are
/// fractions in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use limitless_lights_rs::Hsv;
///
/// assert!(Hsv::create(0.0, 1.0, 1.0).is_some());   // Saturated red
/// assert!(Hsv::create(360.0, 1.0, 1.0).is_none()); // Hue out of range
/// assert!(Hsv::create(120.0, 1.5, 1.0).is_none()); // Saturation out of range
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    hue: f32,
    saturation: f32,
    value: f32,
}

impl Hsv {
    /// Create a color from components.
    ///
    /// Returns `None` if any component is outside its valid range.
    pub fn create(hue: f32, saturation: f32, value: f32) -> Option<Self> {
        if (0.0..360.0).contains(&hue)
            && (0.0..=1.0).contains(&saturation)
            && (0.0..=1.0).contains(&value)
        {
            Some(Hsv {
                hue,
                saturation,
                value,
            })
        } else {
            None
        }
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Convert from 8-bit RGB.
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        let r = f32::from(red) / 255.0;
        let g = f32::from(green) / 255.0;
        let b = f32::from(blue) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let value = max;
        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };
        let hue = if hue < 0.0 { hue + 360.0 } else { hue };

        Hsv {
            hue,
            saturation,
            value,
        }
    }

    /// Device hue byte.
    ///
    /// The device's hue wheel is reflected and rotated relative to HSV:
    /// 240 degrees maps to zero and the scale runs backwards, wrapping at
    /// the reflection point.
    pub fn device_hue(&self) -> u8 {
        let mut hue = 240.0 - self.hue;
        if hue < 0.0 {
            hue += 360.0;
        }
        (hue * 255.0 / 360.0).round() as u8
    }

    /// Device brightness level, scaled onto `0..=0x1B`.
    pub fn device_level(&self) -> u8 {
        (self.value * f32::from(MAX_BRIGHTNESS)).round() as u8
    }
}
