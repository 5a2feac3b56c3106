use serde::Deserialize;

use super::range::Range;
use crate::error::BloomError;

pub const DEFAULT_SELECTOR: &str = ".bloomy-background";
pub const DEFAULT_COUNT: u32 = 6;
pub const DEFAULT_PALETTE: [&str; 5] = [
    "rgb(255, 105, 180)",
    "rgb(100, 149, 237)",
    "rgb(255, 200, 0)",
    "rgb(0, 200, 180)",
    "rgb(180, 100, 255)",
];
pub const DEFAULT_SIZE_RANGE: Range = Range::new(200.0, 600.0);
pub const DEFAULT_BLUR_RANGE: Range = Range::new(60.0, 180.0);
pub const DEFAULT_OPACITY_RANGE: Range = Range::new(0.2, 0.5);
pub const DEFAULT_OVERFLOW_PCT: f64 = 10.0;

/// Caller-supplied overrides. Any subset of fields may be set; unknown
/// fields are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BloomOptions {
    pub selector: Option<String>,
    pub count: Option<u32>,
    pub palette: Option<Vec<String>>,
    pub size_range: Option<Range>,
    pub blur_range: Option<Range>,
    pub opacity_range: Option<Range>,
    pub allow_overflow_pct: Option<f64>,
    pub animate: Option<bool>,
    pub clear_before: Option<bool>,
}

impl BloomOptions {
    /// Parses options from JSON text. `null` and empty input mean "no overrides".
    pub fn from_json(json: &str) -> Result<Self, BloomError> {
        let trimmed = json.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(Self::default());
        }
        serde_json::from_str(trimmed).map_err(|e| BloomError::InvalidOptions(e.to_string()))
    }
}

/// Fully resolved generator configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BloomConfig {
    pub selector: String,
    pub count: u32,
    pub palette: Vec<String>,
    pub size_range: Range,
    pub blur_range: Range,
    pub opacity_range: Range,
    pub allow_overflow_pct: f64,
    pub animate: bool,
    pub clear_before: bool,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            count: DEFAULT_COUNT,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            size_range: DEFAULT_SIZE_RANGE,
            blur_range: DEFAULT_BLUR_RANGE,
            opacity_range: DEFAULT_OPACITY_RANGE,
            allow_overflow_pct: DEFAULT_OVERFLOW_PCT,
            animate: false,
            clear_before: true,
        }
    }
}

impl BloomConfig {
    /// Defaults with `options` applied field by field.
    pub fn merged(options: BloomOptions) -> Self {
        let mut config = Self::default();
        config.apply(options);
        config
    }

    /// Shallow override: each supplied field replaces the current value
    /// wholesale (a palette is never merged entry-wise).
    pub fn apply(&mut self, options: BloomOptions) {
        let BloomOptions {
            selector,
            count,
            palette,
            size_range,
            blur_range,
            opacity_range,
            allow_overflow_pct,
            animate,
            clear_before,
        } = options;

        if let Some(selector) = selector {
            self.selector = selector;
        }
        if let Some(count) = count {
            self.count = count;
        }
        if let Some(palette) = palette {
            self.palette = palette;
        }
        if let Some(range) = size_range {
            self.size_range = range;
        }
        if let Some(range) = blur_range {
            self.blur_range = range;
        }
        if let Some(range) = opacity_range {
            self.opacity_range = range;
        }
        if let Some(pct) = allow_overflow_pct {
            self.allow_overflow_pct = pct;
        }
        if let Some(animate) = animate {
            self.animate = animate;
        }
        if let Some(clear) = clear_before {
            self.clear_before = clear;
        }
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_palette<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_size_range(mut self, min: f64, max: f64) -> Self {
        self.size_range = Range::new(min, max);
        self
    }

    pub fn with_blur_range(mut self, min: f64, max: f64) -> Self {
        self.blur_range = Range::new(min, max);
        self
    }

    pub fn with_opacity_range(mut self, min: f64, max: f64) -> Self {
        self.opacity_range = Range::new(min, max);
        self
    }

    pub fn with_overflow_pct(mut self, pct: f64) -> Self {
        self.allow_overflow_pct = pct;
        self
    }

    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn with_clear_before(mut self, clear_before: bool) -> Self {
        self.clear_before = clear_before;
        self
    }

    /// Horizontal and vertical placement interval, in percent.
    pub fn position_range(&self) -> Range {
        Range::new(-self.allow_overflow_pct, 100.0 + self.allow_overflow_pct)
    }

    pub fn validate(&self) -> Result<(), BloomError> {
        if self.palette.is_empty() {
            return Err(BloomError::invalid("palette must contain at least one color"));
        }
        if let Some(i) = self.palette.iter().position(|c| c.trim().is_empty()) {
            return Err(BloomError::invalid(format!("palette entry {} is blank", i)));
        }

        check_range("sizeRange", self.size_range)?;
        check_range("blurRange", self.blur_range)?;
        check_range("opacityRange", self.opacity_range)?;

        if self.size_range.min < 0.0 {
            return Err(BloomError::invalid("sizeRange must not be negative"));
        }
        if self.blur_range.min < 0.0 {
            return Err(BloomError::invalid("blurRange must not be negative"));
        }
        if self.opacity_range.min < 0.0 || self.opacity_range.max > 1.0 {
            return Err(BloomError::invalid(format!(
                "opacityRange must lie within [0, 1], got [{}, {}]",
                self.opacity_range.min, self.opacity_range.max
            )));
        }
        let span = 100.0 + 2.0 * self.allow_overflow_pct;
        if !span.is_finite() || self.allow_overflow_pct < 0.0 {
            return Err(BloomError::invalid(format!(
                "allowOverflowPct must be a finite number >= 0 with a finite placement span, got {}",
                self.allow_overflow_pct
            )));
        }
        Ok(())
    }
}

fn check_range(name: &str, range: Range) -> Result<(), BloomError> {
    if !range.is_finite() {
        return Err(BloomError::invalid(format!("{} bounds must be finite", name)));
    }
    if !range.is_ordered() {
        return Err(BloomError::invalid(format!(
            "{} is inverted: min {} > max {}",
            name, range.min, range.max
        )));
    }
    Ok(())
}
