//! Resampling of a signal onto a uniformly spaced target axis.
//!
//! The conversion routines in [`crate::record`] build their target axis in
//! the destination coordinate, pull it back into the source coordinate with
//! the inverse conversion, and evaluate a linear interpolant of the original
//! (axis, signal) pair at the pulled-back locations. Pulled-back endpoints
//! can land marginally outside the source range through floating-point
//! roundoff, so the interpolant extrapolates linearly from the outermost
//! segment instead of substituting a fill value that would leave zero-value
//! artifacts at the spectral edges.

use num_traits::Float;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResampleError {
    #[error("An axis needs at least two points to interpolate over, got {0}")]
    TooFewPoints(usize),
    #[error("Axis length {0} does not match signal length {1}")]
    LengthMismatch(usize, usize),
}

/// Generate `n` uniformly spaced points covering `[start, stop]` inclusive.
///
/// The final point is pinned to `stop` exactly. `n == 1` yields `[start]`,
/// `n == 0` an empty vector. `start` may exceed `stop`, giving a descending
/// grid.
pub fn linspace<F: Float>(start: F, stop: F, n: usize) -> Vec<F> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / F::from(n - 1).unwrap();
            let mut points: Vec<F> = (0..n).map(|i| start + F::from(i).unwrap() * step).collect();
            points[n - 1] = stop;
            points
        }
    }
}

/// A piecewise-linear interpolant over a monotonic axis, extrapolating
/// linearly from the outermost segment beyond either end.
///
/// The axis may be ascending or descending. Monotonicity is a precondition,
/// not something that is checked; a non-monotonic axis gives meaningless
/// results rather than an error.
#[derive(Debug, Clone)]
pub struct LinearInterpolant<'a, F: Float> {
    xs: &'a [F],
    ys: &'a [F],
    ascending: bool,
}

impl<'a, F: Float> LinearInterpolant<'a, F> {
    pub fn new(xs: &'a [F], ys: &'a [F]) -> Result<Self, ResampleError> {
        if xs.len() != ys.len() {
            return Err(ResampleError::LengthMismatch(xs.len(), ys.len()));
        }
        if xs.len() < 2 {
            return Err(ResampleError::TooFewPoints(xs.len()));
        }
        let ascending = xs[xs.len() - 1] >= xs[0];
        Ok(Self { xs, ys, ascending })
    }

    /// Find the segment whose span is used for `x`, clamped to the first or
    /// last segment when `x` lies outside the covered range.
    fn segment_for(&self, x: F) -> usize {
        let partition = if self.ascending {
            self.xs.partition_point(|v| *v <= x)
        } else {
            self.xs.partition_point(|v| *v >= x)
        };
        partition.saturating_sub(1).min(self.xs.len() - 2)
    }

    /// Evaluate the interpolant at `x`, extrapolating if `x` is outside the
    /// axis range.
    pub fn evaluate(&self, x: F) -> F {
        let i = self.segment_for(x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        let t = (x - x0) / (x1 - x0);
        y0 + (y1 - y0) * t
    }

    /// Evaluate the interpolant at each point of `locations`.
    pub fn evaluate_many(&self, locations: &[F]) -> Vec<F> {
        locations.iter().map(|x| self.evaluate(*x)).collect()
    }
}

/// Resample `signal` onto a uniformly spaced axis in the coordinate system
/// defined by the `forward` conversion, returning the new axis and signal.
///
/// The target axis spans `forward(axis.last())` to `forward(axis.first())`
/// with as many points as the source axis. Each target point is pulled back
/// into the source coordinate with `inverse` and the source signal is
/// linearly interpolated there. `inverse` must be the algebraic inverse of
/// `forward` for the output to be meaningful.
pub fn resample_axis<F, G>(
    axis: &[f64],
    signal: &[f64],
    forward: F,
    inverse: G,
) -> Result<(Vec<f64>, Vec<f64>), ResampleError>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    let interpolant = LinearInterpolant::new(axis, signal)?;
    let new_axis = linspace(forward(axis[axis.len() - 1]), forward(axis[0]), axis.len());
    let pulled_back: Vec<f64> = new_axis.iter().map(|v| inverse(*v)).collect();
    let new_signal = interpolant.evaluate_many(&pulled_back);
    Ok((new_axis, new_signal))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::convert::{frequency_to_wavelength, wavelength_to_frequency};

    #[test]
    fn test_linspace() {
        let points = linspace(0.0, 1.0, 5);
        assert_eq!(points, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

        let descending = linspace(10.0f64, 2.0, 3);
        assert_eq!(descending, vec![10.0, 6.0, 2.0]);

        assert_eq!(linspace(3.0f64, 7.0, 1), vec![3.0]);
        assert!(linspace(3.0f64, 7.0, 0).is_empty());

        // endpoints are exact even when the step does not divide evenly
        let awkward = linspace(0.1f64, 0.7, 7);
        assert_eq!(awkward[0], 0.1);
        assert_eq!(awkward[6], 0.7);
    }

    #[test]
    fn test_linspace_uniform_spacing() {
        let points = linspace(428.0, 599.0, 101);
        let step = points[1] - points[0];
        for window in points.windows(2) {
            assert!((window[1] - window[0] - step).abs() < 1e-9);
        }
    }

    #[test]
    fn test_interpolation_interior() {
        let xs = [0.0, 1.0, 3.0];
        let ys = [0.0, 10.0, 30.0];
        let interp = LinearInterpolant::new(&xs, &ys).unwrap();
        assert!((interp.evaluate(0.5) - 5.0).abs() < 1e-12);
        assert!((interp.evaluate(2.0) - 20.0).abs() < 1e-12);
        assert_eq!(interp.evaluate(1.0), 10.0);
        assert_eq!(interp.evaluate(3.0), 30.0);
    }

    #[test]
    fn test_extrapolation_beyond_edges() {
        let xs = [1.0, 2.0, 4.0];
        let ys = [2.0, 4.0, 4.0];
        let interp = LinearInterpolant::new(&xs, &ys).unwrap();
        // left of the axis: extend the first segment's slope
        assert!((interp.evaluate(0.5) - 1.0).abs() < 1e-12);
        // right of the axis: the last segment is flat
        assert!((interp.evaluate(5.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_descending_axis() {
        let xs = [4.0, 2.0, 1.0];
        let ys = [40.0, 20.0, 10.0];
        let interp = LinearInterpolant::new(&xs, &ys).unwrap();
        assert!((interp.evaluate(3.0) - 30.0).abs() < 1e-12);
        assert!((interp.evaluate(1.5) - 15.0).abs() < 1e-12);
        assert!((interp.evaluate(0.5) - 5.0).abs() < 1e-12);
        assert!((interp.evaluate(5.0) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_inputs() {
        let xs = [1.0];
        let ys = [2.0];
        assert_eq!(
            LinearInterpolant::new(&xs, &ys).unwrap_err(),
            ResampleError::TooFewPoints(1)
        );
        let ys2 = [1.0, 2.0, 3.0];
        assert_eq!(
            LinearInterpolant::new(&xs, &ys2).unwrap_err(),
            ResampleError::LengthMismatch(1, 3)
        );
    }

    #[test]
    fn test_resample_invariants() {
        let axis = [500.0, 580.0, 600.0, 700.0];
        let signal = [1.0, 1.5, 2.0, 3.0];
        let (new_axis, new_signal) =
            resample_axis(&axis, &signal, wavelength_to_frequency, frequency_to_wavelength)
                .unwrap();
        assert_eq!(new_axis.len(), axis.len());
        assert_eq!(new_signal.len(), axis.len());
        // exact endpoint coverage in the converted coordinate
        assert_eq!(new_axis[0], wavelength_to_frequency(700.0));
        assert_eq!(new_axis[3], wavelength_to_frequency(500.0));
        // uniform spacing
        let step = new_axis[1] - new_axis[0];
        for window in new_axis.windows(2) {
            assert!((window[1] - window[0] - step).abs() < 1e-9);
        }
    }

    #[test]
    fn test_resample_against_known_values() {
        // [500, 600, 700] nm maps to [c/700, c/600, c/500] THz
        let axis = [500.0, 600.0, 700.0];
        let signal = [1.0, 2.0, 3.0];
        let (new_axis, new_signal) =
            resample_axis(&axis, &signal, wavelength_to_frequency, frequency_to_wavelength)
                .unwrap();
        assert!((new_axis[0] - 428.274940).abs() < 1e-6);
        assert!((new_axis[1] - 513.929928).abs() < 1e-6);
        assert!((new_axis[2] - 599.584916).abs() < 1e-6);

        // endpoints pull back onto the original endpoints
        assert!((new_signal[0] - 3.0).abs() < 1e-9);
        assert!((new_signal[2] - 1.0).abs() < 1e-9);
        // the midpoint pulls back to a wavelength between 500 and 600 nm,
        // where the original signal is 1 + (nm - 500) / 100
        let mid_nm = frequency_to_wavelength(new_axis[1]);
        assert!((500.0..600.0).contains(&mid_nm));
        let expected = 1.0 + (mid_nm - 500.0) / 100.0;
        assert!((new_signal[1] - expected).abs() < 1e-12);
    }
}
