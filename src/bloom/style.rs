use crate::config::{BloomConfig, Range};
use crate::random::RandomSource;

pub const DURATION_RANGE: Range = Range::new(8.0, 18.0);
pub const DELAY_RANGE: Range = Range::new(-5.0, 5.0);

/// Looping animation timing, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub duration: f64,
    pub delay: f64,
}

/// The randomized style tuple of a single bloom.
///
/// Values are stored already rounded to the precision they are rendered
/// at: whole pixels for size and blur, 3 decimals for opacity, 2 for
/// positions and timings.
#[derive(Debug, Clone, PartialEq)]
pub struct BloomStyle {
    pub size: f64,
    pub blur: f64,
    pub opacity: f64,
    pub color: String,
    pub left: f64,
    pub top: f64,
    pub animation: Option<Animation>,
}

impl BloomStyle {
    /// Draws one tuple from `config`. The palette must be non-empty.
    pub fn draw<R: RandomSource + ?Sized>(rng: &mut R, config: &BloomConfig) -> Self {
        let position = config.position_range();

        let size = quantize(rng.uniform(config.size_range), 0, config.size_range);
        let blur = quantize(rng.uniform(config.blur_range), 0, config.blur_range);
        let opacity = quantize(rng.uniform(config.opacity_range), 3, config.opacity_range);
        let left = quantize(rng.uniform(position), 2, position);
        let top = quantize(rng.uniform(position), 2, position);
        let color = config.palette[rng.pick(config.palette.len())].clone();

        let animation = config.animate.then(|| Animation {
            duration: quantize(rng.uniform(DURATION_RANGE), 2, DURATION_RANGE),
            delay: quantize(rng.uniform(DELAY_RANGE), 2, DELAY_RANGE),
        });

        Self {
            size,
            blur,
            opacity,
            color,
            left,
            top,
            animation,
        }
    }

    /// Inline style declarations for this bloom, in application order.
    pub fn properties(&self) -> Vec<(&'static str, String)> {
        let mut props = vec![
            ("--size", format!("{}px", self.size)),
            ("--blur", format!("{}px", self.blur)),
            ("--opacity", format!("{:.3}", self.opacity)),
            ("--color", self.color.clone()),
            ("left", format!("{:.2}%", self.left)),
            ("top", format!("{:.2}%", self.top)),
        ];
        if let Some(anim) = self.animation {
            props.push(("animation-duration", format!("{:.2}s", anim.duration)));
            props.push(("animation-delay", format!("{:.2}s", anim.delay)));
        }
        props
    }
}

/// Rounds to `decimals` places, keeps the result inside `range`, and
/// folds negative zero.
fn quantize(value: f64, decimals: i32, range: Range) -> f64 {
    let scale = 10f64.powi(decimals);
    range.clamp((value * scale).round() / scale) + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{Scripted, SeededRandom};

    #[test]
    fn draws_scale_into_each_range() {
        let config = BloomConfig::default().with_animate(true);
        // size, blur, opacity, left, top, color, duration, delay
        let mut rng = Scripted::new(&[0.0, 0.5, 0.25, 0.0, 0.5, 0.7, 0.5, 0.0]);
        let style = BloomStyle::draw(&mut rng, &config);

        assert_eq!(style.size, 200.0);
        assert_eq!(style.blur, 120.0);
        assert_eq!(style.opacity, 0.275);
        assert_eq!(style.left, -10.0);
        assert_eq!(style.top, 50.0);
        assert_eq!(style.color, "rgb(0, 200, 180)");
        assert_eq!(
            style.animation,
            Some(Animation {
                duration: 13.0,
                delay: -5.0
            })
        );
    }

    #[test]
    fn renders_custom_properties_and_positions() {
        let style = BloomStyle {
            size: 50.0,
            blur: 10.0,
            opacity: 0.5,
            color: "red".to_string(),
            left: 3.1,
            top: 0.0,
            animation: None,
        };
        let props = style.properties();
        assert_eq!(
            props,
            vec![
                ("--size", "50px".to_string()),
                ("--blur", "10px".to_string()),
                ("--opacity", "0.500".to_string()),
                ("--color", "red".to_string()),
                ("left", "3.10%".to_string()),
                ("top", "0.00%".to_string()),
            ]
        );
    }

    #[test]
    fn animated_blooms_render_timing_in_seconds() {
        let style = BloomStyle {
            size: 1.0,
            blur: 1.0,
            opacity: 1.0,
            color: "blue".to_string(),
            left: 0.0,
            top: 0.0,
            animation: Some(Animation {
                duration: 9.5,
                delay: -2.25,
            }),
        };
        let props = style.properties();
        assert_eq!(props[6], ("animation-duration", "9.50s".to_string()));
        assert_eq!(props[7], ("animation-delay", "-2.25s".to_string()));
    }

    #[test]
    fn quantize_clamps_and_folds_negative_zero() {
        assert_eq!(quantize(200.5, 0, Range::new(200.4, 200.6)), 200.6);
        assert_eq!(quantize(200.45, 0, Range::new(200.4, 200.6)), 200.4);
        assert_eq!(quantize(0.123_456, 3, Range::new(0.0, 1.0)), 0.123);
        let zero = quantize(-0.001, 2, Range::new(-1.0, 1.0));
        assert!(zero == 0.0 && zero.is_sign_positive());
    }

    #[test]
    fn seeded_draws_respect_every_interval() {
        let config = BloomConfig::default()
            .with_animate(true)
            .with_size_range(10.0, 20.0)
            .with_overflow_pct(25.0);
        let mut rng = SeededRandom::new(2024);
        for _ in 0..500 {
            let style = BloomStyle::draw(&mut rng, &config);
            assert!(config.size_range.contains(style.size));
            assert_eq!(style.size.fract(), 0.0);
            assert!(config.blur_range.contains(style.blur));
            assert!(config.opacity_range.contains(style.opacity));
            assert!((-25.0..=125.0).contains(&style.left));
            assert!((-25.0..=125.0).contains(&style.top));
            assert!(config.palette.contains(&style.color));
            let anim = style.animation.unwrap();
            assert!(DURATION_RANGE.contains(anim.duration));
            assert!(DELAY_RANGE.contains(anim.delay));
        }
    }
}
