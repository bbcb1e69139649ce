//! Per-leg distances for display.
//!
//! The map overlay shows leg lengths relative to a reference leg scaled to
//! 100, either the first leg or the mean leg.

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};
use crate::matrix::DistanceMatrix;

/// Scaled value the reference leg is displayed as.
pub const REFERENCE_VALUE: f64 = 100.0;

/// Which leg is displayed as [`REFERENCE_VALUE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Normalization {
    #[default]
    FirstLeg,
    MeanLeg,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Leg {
    pub from: usize,
    pub to: usize,
    pub distance: f64,
    /// Distance scaled against the reference leg.
    pub relative: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteAnnotation {
    pub legs: Vec<Leg>,
    pub total: f64,
    /// Raw distance of the reference leg. Zero when there are no legs.
    pub reference: f64,
    pub normalization: Normalization,
}

impl RouteAnnotation {
    pub fn distances(&self) -> Vec<f64> {
        self.legs.iter().map(|leg| leg.distance).collect()
    }

    pub fn relative(&self) -> Vec<f64> {
        self.legs.iter().map(|leg| leg.relative).collect()
    }

    /// Relative values rounded to integers, as drawn beside each leg.
    pub fn rounded_relative(&self) -> Vec<i64> {
        self.legs.iter().map(|leg| leg.relative.round() as i64).collect()
    }
}

/// Leg distances along `path` plus their normalized display values.
///
/// A zero-length or non-finite reference leg leaves every relative value
/// at 0.
pub fn annotate(
    path: &[usize],
    matrix: &DistanceMatrix,
    normalization: Normalization,
) -> PlannerResult<RouteAnnotation> {
    let n = matrix.len();
    if let Some(&bad) = path.iter().find(|&&i| i >= n) {
        return Err(PlannerError::invalid_input(format!(
            "path index {} out of range for {} points",
            bad, n
        )));
    }

    let distances: Vec<f64> = path.windows(2).map(|leg| matrix.get(leg[0], leg[1])).collect();
    let total: f64 = distances.iter().sum();

    let reference = match normalization {
        Normalization::FirstLeg => distances.first().copied().unwrap_or(0.0),
        Normalization::MeanLeg if distances.is_empty() => 0.0,
        Normalization::MeanLeg => total / distances.len() as f64,
    };

    let scale = if reference > 0.0 && reference.is_finite() {
        REFERENCE_VALUE / reference
    } else {
        0.0
    };

    let legs = path
        .windows(2)
        .zip(&distances)
        .map(|(leg, &distance)| Leg {
            from: leg[0],
            to: leg[1],
            distance,
            relative: distance * scale,
        })
        .collect();

    Ok(RouteAnnotation {
        legs,
        total,
        reference,
        normalization,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 3.0, 4.0, 5.0],
            vec![3.0, 0.0, 5.0, 4.0],
            vec![4.0, 5.0, 0.0, 3.0],
            vec![5.0, 4.0, 3.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_first_leg_is_100() {
        let annotation = annotate(&[0, 1, 2, 3], &matrix(), Normalization::FirstLeg).unwrap();

        assert_eq!(annotation.distances(), vec![3.0, 5.0, 3.0]);
        assert_eq!(annotation.legs[0].relative, 100.0);
        assert_eq!(annotation.rounded_relative(), vec![100, 167, 100]);
        assert_eq!(annotation.total, 11.0);
    }

    #[test]
    fn test_mean_leg_averages_100() {
        let annotation = annotate(&[0, 1, 2, 3], &matrix(), Normalization::MeanLeg).unwrap();
        let relative = annotation.relative();
        let mean = relative.iter().sum::<f64>() / relative.len() as f64;

        assert!((mean - 100.0).abs() < 1e-9, "mean was {}", mean);
        assert!((annotation.reference - 11.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_stop_has_no_legs() {
        let annotation = annotate(&[2], &matrix(), Normalization::MeanLeg).unwrap();
        assert!(annotation.legs.is_empty());
        assert_eq!(annotation.total, 0.0);
        assert_eq!(annotation.reference, 0.0);
    }

    #[test]
    fn test_zero_reference_leg() {
        let matrix = DistanceMatrix::from_rows(vec![
            vec![0.0, 0.0, 2.0],
            vec![0.0, 0.0, 2.0],
            vec![2.0, 2.0, 0.0],
        ])
        .unwrap();
        let annotation = annotate(&[0, 1, 2], &matrix, Normalization::FirstLeg).unwrap();

        assert_eq!(annotation.relative(), vec![0.0, 0.0]);
        assert_eq!(annotation.distances(), vec![0.0, 2.0]);
    }

    #[test]
    fn test_out_of_range_index() {
        assert!(annotate(&[0, 9], &matrix(), Normalization::FirstLeg).is_err());
    }
}
