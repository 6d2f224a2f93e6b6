pub mod hsb;

use log::{debug, trace};

use crate::modifier::{Channel, Modifier, Scale};

/// A color held as normalized RGB floats.
///
/// Every channel stays inside `[0,1]`; constructors clamp out-of-range
/// values instead of rejecting them. HSB is derived on read and written
/// back through RGB.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

// NaN has no place in the unit interval; it collapses to zero.
fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

impl Color {
    pub fn from_rgb(r: f64, g: f64, b: f64) -> Self {
        Color {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
        }
    }

    /// Hue in turns, saturation and brightness in `[0,1]`.
    pub fn from_hsb(h: f64, s: f64, v: f64) -> Self {
        let (r, g, b) = hsb::hsb_to_rgb(hsb::normalize_hue(h), clamp_unit(s), clamp_unit(v));
        Color::from_rgb(r, g, b)
    }

    pub fn rgb(&self) -> (f64, f64, f64) {
        (self.r, self.g, self.b)
    }

    pub fn hsb(&self) -> (f64, f64, f64) {
        hsb::rgb_to_hsb(self.r, self.g, self.b)
    }

    /// Normalized value of a single channel.
    pub fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
            Channel::Hue => self.hsb().0,
            Channel::Saturation => self.hsb().1,
            Channel::Brightness => self.hsb().2,
        }
    }

    fn set_channel(&mut self, channel: Channel, value: f64) {
        if channel.is_hsb() {
            let (mut h, mut s, mut v) = self.hsb();
            match channel {
                Channel::Hue => h = value,
                Channel::Saturation => s = value,
                _ => v = value,
            }
            trace!("hsb write ({}, {}, {})", h, s, v);
            *self = Color::from_hsb(h, s, v);
            return;
        }
        let value = clamp_unit(value);
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            _ => self.b = value,
        }
    }

    /// Applies one modifier to the live color.
    ///
    /// The channel is read at `scale`, the operation is applied, and the
    /// result is normalized and committed. Hue wraps around the circle
    /// instead of being clamped, so `-120` from red lands on blue rather
    /// than sticking at zero; every other channel is clamped to `[0,1]`.
    pub fn modify(&mut self, modifier: &Modifier, scale: Scale) {
        let channel = modifier.channel;
        let max = channel.max(scale);
        let old = self.channel(channel) * max;
        let new = modifier.operation.apply(old, max);

        let normalized = new / max;
        let normalized = if channel == Channel::Hue {
            hsb::normalize_hue(normalized)
        } else {
            clamp_unit(normalized)
        };
        debug!("modify {}: {} -> {} ({:?})", channel, old, new, modifier.operation);
        self.set_channel(channel, normalized);
    }
}

#[cfg(test)]
mod tests {
    use super::Color;
    use crate::modifier::{Channel, Modifier, Operation, Scale};

    fn natural_rgb(c: &Color) -> (u8, u8, u8) {
        let (r, g, b) = c.rgb();
        let n = |v: f64| (v * 255.0).round() as u8;
        (n(r), n(g), n(b))
    }

    fn modifier(channel: Channel, operation: Operation) -> Modifier {
        Modifier { channel, operation }
    }

    #[test]
    fn test_constructors_clamp() {
        let c = Color::from_rgb(1.5, -0.2, 0.5);
        assert_eq!(c.rgb(), (1.0, 0.0, 0.5));
        let c = Color::from_hsb(0.0, 2.0, 1.0);
        assert_eq!(c.rgb(), (1.0, 0.0, 0.0));
    }

    #[test]
    fn test_add_red() {
        let mut c = Color::default();
        c.modify(&modifier(Channel::Red, Operation::Add(100.0)), Scale::Natural);
        assert_eq!(natural_rgb(&c), (100, 0, 0));
    }

    #[test]
    fn test_add_percent_red() {
        let mut c = Color::from_rgb(128.0 / 255.0, 0.0, 0.0);
        c.modify(
            &modifier(Channel::Red, Operation::AddPercent(10.0)),
            Scale::Natural,
        );
        assert!((c.rgb().0 * 255.0 - 140.8).abs() < 1e-9);
        assert_eq!(natural_rgb(&c), (141, 0, 0));
    }

    #[test]
    fn test_set_percent_uses_channel_max() {
        let mut c = Color::from_rgb(1.0, 1.0, 1.0);
        c.modify(
            &modifier(Channel::Green, Operation::SetPercent(10.0)),
            Scale::Natural,
        );
        assert!((c.rgb().1 * 255.0 - 25.5).abs() < 1e-9);
    }

    #[test]
    fn test_clamped_after_modify() {
        let mut c = Color::from_rgb(0.5, 0.5, 0.5);
        let ops = [
            modifier(Channel::Red, Operation::Add(1000.0)),
            modifier(Channel::Green, Operation::Sub(1000.0)),
            modifier(Channel::Brightness, Operation::AddPercent(500.0)),
            modifier(Channel::Saturation, Operation::Set(-20.0)),
            modifier(Channel::Blue, Operation::SubPercent(300.0)),
        ];
        for m in ops.iter() {
            c.modify(m, Scale::Natural);
            let (r, g, b) = c.rgb();
            for v in [r, g, b] {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_hue_wraps() {
        let mut c = Color::from_rgb(1.0, 0.0, 0.0);
        c.modify(&modifier(Channel::Hue, Operation::Sub(120.0)), Scale::Natural);
        let (h, s, v) = c.hsb();
        assert!((h * 360.0 - 240.0).abs() < 1e-9);
        assert_eq!((s, v), (1.0, 1.0));
        assert_eq!(natural_rgb(&c), (0, 0, 255));
    }

    #[test]
    fn test_mixed_modifiers_in_order() {
        let mut a = Color::from_rgb(1.0, 0.0, 0.0);
        a.modify(&modifier(Channel::Brightness, Operation::Set(50.0)), Scale::Natural);
        a.modify(&modifier(Channel::Red, Operation::Set(255.0)), Scale::Natural);
        assert_eq!(natural_rgb(&a), (255, 0, 0));

        let mut b = Color::from_rgb(1.0, 0.0, 0.0);
        b.modify(&modifier(Channel::Red, Operation::Set(255.0)), Scale::Natural);
        b.modify(&modifier(Channel::Brightness, Operation::Set(50.0)), Scale::Natural);
        assert_eq!(natural_rgb(&b), (128, 0, 0));
    }

    #[test]
    fn test_overflowing_amounts_stay_in_range() {
        let ops = [
            modifier(Channel::Red, Operation::AddPercent(f64::MAX)),
            modifier(Channel::Hue, Operation::Add(f64::MAX)),
            modifier(Channel::Green, Operation::Add(f64::INFINITY)),
            modifier(Channel::Hue, Operation::Sub(f64::INFINITY)),
            modifier(Channel::Brightness, Operation::SubPercent(f64::MAX)),
        ];
        for start in [Color::default(), Color::from_rgb(1.0, 0.0, 0.0)] {
            for m in ops.iter() {
                let mut c = start;
                c.modify(m, Scale::Natural);
                let (r, g, b) = c.rgb();
                for v in [r, g, b] {
                    assert!((0.0..=1.0).contains(&v), "{:?} gave {:?}", m, c);
                }
            }
        }
    }

    #[test]
    fn test_normalized_scale() {
        let mut c = Color::default();
        c.modify(&modifier(Channel::Blue, Operation::Add(0.5)), Scale::Normalized);
        assert_eq!(c.rgb(), (0.0, 0.0, 0.5));
    }
}
