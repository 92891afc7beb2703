//! Linear interpolation helpers shared by the load query engine
//!
//! The central routine is [`multi_interp`]: repeated 1-D interpolation of
//! several dependent series over one shared x-axis. This is NOT 2-D
//! interpolation - each row of y-values is interpolated independently
//! against the same axis.

use crate::error::{BeamError, BeamResult};

/// How to handle query values outside the stored x-axis span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extrapolate {
    /// Hold the first/last y-value (the `np.interp` behavior).
    Clamp,
    /// Extend the nearest bracketing segment linearly.
    Linear,
}

/// Interpolate a single query value against one series.
///
/// `xp` must be non-decreasing and at least one point long; `fp` must be
/// parallel to `xp`. Duplicated axis values model a jump: queries left of
/// the duplicate interpolate against the pre-jump value, queries right of
/// it against the post-jump value, and an exact hit returns the first
/// stored value.
pub fn interp_one(x: f64, xp: &[f64], fp: &[f64], extrapolate: Extrapolate) -> BeamResult<f64> {
    check_axis(xp)?;
    if fp.len() != xp.len() {
        return Err(BeamError::EmptyInterpolation("matching y-series"));
    }

    Ok(interp_unchecked(x, xp, fp, extrapolate))
}

/// Interpolate a set of query values against several parallel y-series.
///
/// Each row of `fp` is a y-series sharing the `xp` axis; the return value
/// preserves the row structure, one interpolated value per query per row.
/// The axis must be non-decreasing; duplicated values carry the jump
/// semantics described on [`interp_one`].
pub fn multi_interp(
    x: &[f64],
    xp: &[f64],
    fp: &[Vec<f64>],
    extrapolate: Extrapolate,
) -> BeamResult<Vec<Vec<f64>>> {
    if x.is_empty() {
        return Err(BeamError::EmptyInterpolation("query set"));
    }
    check_axis(xp)?;
    if fp.is_empty() {
        return Err(BeamError::EmptyInterpolation("y-series set"));
    }
    for row in fp {
        if row.len() != xp.len() {
            return Err(BeamError::EmptyInterpolation("matching y-series"));
        }
    }

    Ok(fp
        .iter()
        .map(|row| {
            x.iter()
                .map(|&q| interp_unchecked(q, xp, row, extrapolate))
                .collect()
        })
        .collect())
}

/// Evenly spaced values from `start` to `end` inclusive.
///
/// Follows numpy endpoint semantics: `n == 0` gives an empty vec and
/// `n == 1` gives `[start]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

fn check_axis(xp: &[f64]) -> BeamResult<()> {
    if xp.is_empty() {
        return Err(BeamError::EmptyInterpolation("x-axis"));
    }
    for (i, pair) in xp.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(BeamError::AxisNotIncreasing(i + 1));
        }
    }
    Ok(())
}

/// Core lookup over a validated non-decreasing axis: the bracket for a
/// query strictly between two distinct values is (last point <= x, first
/// point > x), which is what gives duplicated axis values their jump
/// semantics.
fn interp_unchecked(x: f64, xp: &[f64], fp: &[f64], extrapolate: Extrapolate) -> f64 {
    let n = xp.len();
    if n == 1 {
        return fp[0];
    }

    // exact hits short-circuit so duplicated axis values stay unambiguous
    if let Some(i) = xp.iter().position(|&v| v == x) {
        return fp[i];
    }

    // first index with xp[hi] > x
    let hi = xp.partition_point(|&v| v <= x);

    if hi == 0 {
        return match extrapolate {
            Extrapolate::Clamp => fp[0],
            Extrapolate::Linear => edge_extrapolate(x, xp, fp, true),
        };
    }
    if hi == n {
        return match extrapolate {
            Extrapolate::Clamp => fp[n - 1],
            Extrapolate::Linear => edge_extrapolate(x, xp, fp, false),
        };
    }

    let (x0, x1) = (xp[hi - 1], xp[hi]);
    let (y0, y1) = (fp[hi - 1], fp[hi]);

    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// Linear extension of the nearest distinct segment at either end.
fn edge_extrapolate(x: f64, xp: &[f64], fp: &[f64], low_end: bool) -> f64 {
    let n = xp.len();
    let (i0, i1) = if low_end {
        match xp.iter().position(|&v| v > xp[0]) {
            Some(j) => (0, j),
            None => return fp[0],
        }
    } else {
        match xp.iter().rposition(|&v| v < xp[n - 1]) {
            Some(j) => (j, n - 1),
            None => return fp[n - 1],
        }
    };

    let slope = (fp[i1] - fp[i0]) / (xp[i1] - xp[i0]);
    fp[i0] + slope * (x - xp[i0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interp_one_midpoint() {
        let y = interp_one(0.5, &[0.0, 1.0], &[0.0, 10.0], Extrapolate::Clamp).unwrap();
        assert_relative_eq!(y, 5.0);
    }

    #[test]
    fn test_interp_one_exact_hit() {
        let y = interp_one(1.0, &[0.0, 1.0, 2.0], &[1.0, 3.0, 9.0], Extrapolate::Clamp).unwrap();
        assert_relative_eq!(y, 3.0);
    }

    #[test]
    fn test_multi_interp_rows_preserved() {
        let xp = vec![0.0, 1.0, 2.0];
        let fp = vec![vec![0.0, 10.0, 20.0], vec![5.0, 5.0, 5.0]];
        let out = multi_interp(&[0.5, 1.5], &xp, &fp, Extrapolate::Clamp).unwrap();

        assert_eq!(out.len(), 2);
        assert_relative_eq!(out[0][0], 5.0);
        assert_relative_eq!(out[0][1], 15.0);
        assert_relative_eq!(out[1][0], 5.0);
        assert_relative_eq!(out[1][1], 5.0);
    }

    #[test]
    fn test_unsorted_axis_rejected() {
        let err = multi_interp(
            &[0.5],
            &[0.0, 2.0, 1.0],
            &[vec![0.0, 1.0, 2.0]],
            Extrapolate::Clamp,
        )
        .unwrap_err();
        assert!(matches!(err, BeamError::AxisNotIncreasing(2)));
    }

    #[test]
    fn test_clamp_outside_span() {
        let xp = [1.0, 2.0];
        let fp = [10.0, 20.0];
        assert_relative_eq!(
            interp_one(0.0, &xp, &fp, Extrapolate::Clamp).unwrap(),
            10.0
        );
        assert_relative_eq!(
            interp_one(3.0, &xp, &fp, Extrapolate::Clamp).unwrap(),
            20.0
        );
    }

    #[test]
    fn test_linear_outside_span() {
        let xp = [1.0, 2.0];
        let fp = [10.0, 20.0];
        assert_relative_eq!(
            interp_one(0.0, &xp, &fp, Extrapolate::Linear).unwrap(),
            0.0
        );
        assert_relative_eq!(
            interp_one(3.0, &xp, &fp, Extrapolate::Linear).unwrap(),
            30.0
        );
    }

    #[test]
    fn test_duplicate_axis_jump_sides() {
        // a jump from 10 to 30 at x = 1.0
        let xp = [0.0, 1.0, 1.0, 2.0];
        let fp = [0.0, 10.0, 30.0, 40.0];

        // left of the jump interpolates to the pre-jump value
        assert_relative_eq!(
            interp_one(0.5, &xp, &fp, Extrapolate::Clamp).unwrap(),
            5.0
        );
        // right of the jump interpolates from the post-jump value
        assert_relative_eq!(
            interp_one(1.5, &xp, &fp, Extrapolate::Clamp).unwrap(),
            35.0
        );
        // an exact hit returns the first stored value
        assert_relative_eq!(
            interp_one(1.0, &xp, &fp, Extrapolate::Clamp).unwrap(),
            10.0
        );
    }

    #[test]
    fn test_multi_interp_duplicate_axis() {
        let xp = vec![0.0, 0.5, 0.5, 1.0];
        let fp = vec![vec![0.0, 2.0, 6.0, 8.0], vec![1.0, 1.0, 1.0, 1.0]];

        let out = multi_interp(&[0.25, 0.75], &xp, &fp, Extrapolate::Clamp).unwrap();

        assert_relative_eq!(out[0][0], 1.0);
        assert_relative_eq!(out[0][1], 7.0);
        assert_relative_eq!(out[1][0], 1.0);
        assert_relative_eq!(out[1][1], 1.0);
    }

    #[test]
    fn test_single_point_axis() {
        assert_relative_eq!(
            interp_one(0.7, &[0.0], &[4.0], Extrapolate::Clamp).unwrap(),
            4.0
        );
    }

    #[test]
    fn test_linspace_endpoints() {
        let pts = linspace(0.0, 1.0, 5);
        assert_eq!(pts.len(), 5);
        assert_relative_eq!(pts[0], 0.0);
        assert_relative_eq!(pts[2], 0.5);
        assert_relative_eq!(pts[4], 1.0);

        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }
}
