use super::thresholds::Thresholds;
use crate::constants::chart::{LOWER_PADDING, UPPER_PADDING};

/// Vertical range of the inventory chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

/// Y-axis range covering every inventory level and all three thresholds,
/// padded 10% on each side and snapped outward to whole units.
///
/// The lower bound only considers the low threshold; medium and high are
/// never below it for non-negative parameters.
pub fn y_axis_bounds(levels: &[f64], thresholds: &Thresholds) -> Option<AxisBounds> {
    if levels.is_empty() {
        return None;
    }

    let min_level = levels.iter().copied().fold(f64::INFINITY, f64::min);
    let max_level = levels.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(AxisBounds {
        min: (min_level.min(thresholds.low) * LOWER_PADDING).floor(),
        max: (max_level.max(thresholds.max()) * UPPER_PADDING).ceil(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_example() {
        let thresholds = Thresholds { low: 100.0, medium: 120.0, high: 144.0 };
        let bounds = y_axis_bounds(&[50.0, 80.0, 65.0], &thresholds).unwrap();
        assert_eq!(bounds, AxisBounds { min: 45.0, max: 159.0 });
    }

    #[test]
    fn test_levels_above_thresholds() {
        let thresholds = Thresholds { low: 10.0, medium: 12.0, high: 14.0 };
        let bounds = y_axis_bounds(&[200.0, 500.0], &thresholds).unwrap();
        assert_eq!(bounds.min, 9.0);
        assert_eq!(bounds.max, 550.0);
    }

    #[test]
    fn test_no_levels() {
        let thresholds = Thresholds { low: 1.0, medium: 2.0, high: 3.0 };
        assert!(y_axis_bounds(&[], &thresholds).is_none());
    }
}
