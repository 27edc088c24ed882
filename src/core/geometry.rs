use serde::Serialize;

/// Pixel extent of a page image or layout region.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        f64::from(self.width) * f64::from(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn computes_area() {
        let size = Size::new(20, 5);
        assert_eq!(size.area(), 100.0);
        assert!(!size.is_empty());
    }

    #[test]
    fn degenerate_extent_has_zero_area() {
        let size = Size::new(0, 40);
        assert_eq!(size.area(), 0.0);
        assert!(size.is_empty());
    }
}
