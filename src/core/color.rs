use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const LIGHT_GRAY: Color = Color::rgb(200, 200, 200);

    /// Sets the alpha channel from an opacity in `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    /// Halves the brightness, keeping hue and saturation.
    pub fn darker(self) -> Self {
        self.scale(0.5)
    }

    /// Raises the HSV value by half. Once the value hits 255 the excess is
    /// taken from the saturation, so bright colors wash out towards white.
    pub fn lighter(self) -> Self {
        let max = f64::from(self.r.max(self.g).max(self.b));
        let min = f64::from(self.r.min(self.g).min(self.b));
        let value = max * 1.5;
        if value <= 255.0 {
            return self.scale(1.5);
        }

        let saturation = (max - min) / max * 255.0;
        let saturation = (saturation - (value - 255.0)).max(0.0);
        let floor = 255.0 - saturation;
        let span = max - min;
        let channel = |c: u8| {
            if span == 0.0 {
                255
            } else {
                (floor + (255.0 - floor) * (f64::from(c) - min) / span).round() as u8
            }
        };

        Self {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
            a: self.a,
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    fn scale(self, factor: f64) -> Self {
        let channel = |c: u8| (f64::from(c) * factor).round().clamp(0.0, 255.0) as u8;
        Self {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
            a: self.a,
        }
    }
}

/// Assigns a display color to an entity from an index.
///
/// Implementations must be deterministic: the same index always yields the
/// same color.
pub trait ColorPicker {
    fn pick(&self, index: usize) -> Color;
}

impl<F> ColorPicker for F
where
    F: Fn(usize) -> Color,
{
    fn pick(&self, index: usize) -> Color {
        self(index)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
    alpha: f64,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors, alpha: 1.0 }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(vec![
            Color::rgb(115, 0, 93),
            Color::rgb(230, 23, 190),
            Color::rgb(102, 80, 10),
            Color::rgb(230, 178, 11),
            Color::rgb(15, 153, 138),
            Color::rgb(102, 180, 10),
            Color::rgb(15, 253, 138),
        ])
    }
}

impl ColorPicker for Palette {
    fn pick(&self, index: usize) -> Color {
        let n = self.colors.len();
        if n == 0 {
            return Color::LIGHT_GRAY.with_alpha(self.alpha);
        }

        let base = self.colors[index % n];
        let color = if index > 2 * n {
            base.lighter()
        } else if index > n {
            base.darker()
        } else {
            base
        };

        color.with_alpha(self.alpha)
    }
}
