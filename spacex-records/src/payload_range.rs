/// Inclusive payload mass window in kilograms, as chosen on the range slider.
///
/// `low > high` is representable and selects nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }

    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }

    /// Move the lower thumb, never past the upper one.
    pub fn with_low(self, low: f64) -> Self {
        Self {
            low: low.min(self.high),
            high: self.high,
        }
    }

    /// Move the upper thumb, never below the lower one.
    pub fn with_high(self, high: f64) -> Self {
        Self {
            low: self.low,
            high: high.max(self.low),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PayloadRange;

    #[test]
    fn test_contains_is_inclusive() {
        let range = PayloadRange::new(1000.0, 5000.0);
        assert!(range.contains(1000.0));
        assert!(range.contains(5000.0));
        assert!(range.contains(2500.5));
        assert!(!range.contains(999.9));
        assert!(!range.contains(5000.1));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = PayloadRange::new(6000.0, 2000.0);
        assert!(range.is_empty());
        assert!(!range.contains(4000.0));
    }

    #[test]
    fn test_thumbs_do_not_cross() {
        let range = PayloadRange::new(2000.0, 6000.0);
        assert_eq!(range.with_low(8000.0), PayloadRange::new(6000.0, 6000.0));
        assert_eq!(range.with_high(1000.0), PayloadRange::new(2000.0, 2000.0));
        assert_eq!(range.with_low(0.0), PayloadRange::new(0.0, 6000.0));
    }
}
