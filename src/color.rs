// src/color.rs
//
// Age → color. Hue stays fixed; the gradient runs from a bold, dark
// rendering for the newest listing to a faded, light one for the
// oldest. Pure functions, no state.

use crate::config::consts::{LIGHT_OLD, LIGHT_YOUNG, POINT_HUE, SAT_OLD, SAT_YOUNG};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub fn to_rgb(self) -> [u8; 3] {
        let h = self.h.rem_euclid(360.0);
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;
        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        [
            ((r + m) * 255.0).round() as u8,
            ((g + m) * 255.0).round() as u8,
            ((b + m) * 255.0).round() as u8,
        ]
    }

    /// CSS-style text form, for rows and logs.
    pub fn css(self) -> String {
        format!("hsl({:.0}, {:.1}%, {:.1}%)", self.h, self.s, self.l)
    }
}

/// Color for one listing given the age range of the plotted set.
/// `t` is the age's position in [min_age, max_age], clamped; an equal
/// range has no defined position, so the mid-gradient color is used.
pub fn age_color(age: i32, min_age: i32, max_age: i32) -> Hsl {
    let t = if min_age == max_age {
        0.5
    } else {
        let raw = (age - min_age) as f32 / (max_age - min_age) as f32;
        raw.clamp(0.0, 1.0)
    };
    Hsl {
        h: POINT_HUE,
        s: SAT_YOUNG + (SAT_OLD - SAT_YOUNG) * t,
        l: LIGHT_YOUNG + (LIGHT_OLD - LIGHT_YOUNG) * t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        let young = age_color(4, 4, 9);
        assert_eq!(young, Hsl { h: 234.0, s: 100.0, l: 33.0 });

        let old = age_color(9, 4, 9);
        assert_eq!(old, Hsl { h: 234.0, s: 79.0, l: 80.0 });
    }

    #[test]
    fn equal_range_yields_mid_color() {
        let mid = age_color(7, 7, 7);
        assert_eq!(mid, Hsl { h: 234.0, s: 89.5, l: 56.5 });
    }

    #[test]
    fn out_of_range_ages_clamp_to_endpoints() {
        assert_eq!(age_color(-3, 0, 10), age_color(0, 0, 10));
        assert_eq!(age_color(25, 0, 10), age_color(10, 0, 10));
    }

    #[test]
    fn saturation_falls_and_lightness_rises_with_age() {
        let mut prev = age_color(0, 0, 6);
        for age in 1..=6 {
            let c = age_color(age, 0, 6);
            assert!(c.s < prev.s, "saturation not falling at age {age}");
            assert!(c.l > prev.l, "lightness not rising at age {age}");
            prev = c;
        }
    }

    #[test]
    fn hue_never_moves() {
        for age in 0..=12 {
            assert_eq!(age_color(age, 0, 12).h, 234.0);
        }
    }

    #[test]
    fn rgb_conversion_spot_checks() {
        assert_eq!(Hsl { h: 0.0, s: 100.0, l: 50.0 }.to_rgb(), [255, 0, 0]);
        assert_eq!(Hsl { h: 120.0, s: 100.0, l: 50.0 }.to_rgb(), [0, 255, 0]);
        assert_eq!(Hsl { h: 0.0, s: 0.0, l: 0.0 }.to_rgb(), [0, 0, 0]);
        assert_eq!(Hsl { h: 0.0, s: 0.0, l: 100.0 }.to_rgb(), [255, 255, 255]);

        // hue 234 is in the blue sextant: blue dominates, no green excess
        let [r, g, b] = Hsl { h: 234.0, s: 100.0, l: 33.0 }.to_rgb();
        assert!(b > r && b > g);
    }

    #[test]
    fn css_text_form() {
        assert_eq!(
            Hsl { h: 234.0, s: 89.5, l: 56.5 }.css(),
            "hsl(234, 89.5%, 56.5%)"
        );
    }
}
