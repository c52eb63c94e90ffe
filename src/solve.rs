//! Bracketed root finding and table interpolation for property inversions.
//!
//! The property correlations are all "forward" functions; recovering
//! temperature from (p, h) or density from (p, T) means solving
//! `f(x, fixed) = target` for `x` inside a known bracket. The solver is the
//! Brent–Dekker scheme: bisection combined with linear or inverse-quadratic
//! interpolation, keeping three abscissae (best estimate `b`, previous
//! estimate `a`, and counterpoint `c` with `f(c)` of opposite sign), so the
//! bracket width shrinks by at least a constant factor each step.

use crate::error::PropertyError;

/// Convergence tolerance used by every inversion in the crate.
pub(crate) const TOLERANCE: f64 = 1e-18;

/// Iteration budget for a single root search.
///
/// With a valid bracket the search converges in well under a hundred
/// iterations; running out means the function is pathological and the
/// requested tolerance cannot be met.
const MAX_ITERATIONS: usize = 1000;

/// Solves `f(x, fixed) = target` for `x` in `[low, high]`.
///
/// # Errors
///
/// Returns [`PropertyError::NotBracketed`] if `f(low, fixed)` and
/// `f(high, fixed)` are on the same side of `target`, or
/// [`PropertyError::ToleranceUnreachable`] if the iteration budget runs out.
pub(crate) fn solve_first<F>(
    f: F,
    fixed: f64,
    low: f64,
    high: f64,
    target: f64,
    tolerance: f64,
) -> Result<f64, PropertyError>
where
    F: Fn(f64, f64) -> Result<f64, PropertyError>,
{
    brent(|x| f(x, fixed), low, high, target, tolerance)
}

/// Solves `f(fixed, x) = target` for `x` in `[low, high]`.
///
/// Same contract as [`solve_first`] with the argument roles swapped;
/// different inversions hold different variables fixed.
pub(crate) fn solve_second<F>(
    f: F,
    fixed: f64,
    low: f64,
    high: f64,
    target: f64,
    tolerance: f64,
) -> Result<f64, PropertyError>
where
    F: Fn(f64, f64) -> Result<f64, PropertyError>,
{
    brent(|x| f(fixed, x), low, high, target, tolerance)
}

fn brent<F>(f: F, low: f64, high: f64, target: f64, tolerance: f64) -> Result<f64, PropertyError>
where
    F: Fn(f64) -> Result<f64, PropertyError>,
{
    let mut a = low;
    let mut b = high;
    let mut fa = f(a)? - target;
    let mut fb = f(b)? - target;

    if fa * fb > 0.0 {
        return Err(PropertyError::NotBracketed { low, high });
    }

    // c is the earlier approximation with f(c) opposite in sign to f(b),
    // so [b, c] always confines the root.
    let mut c = a;
    let mut fc = fa;

    for _ in 0..MAX_ITERATIONS {
        let prev_step = b - a;

        if fc.abs() < fb.abs() {
            // Swap so that b stays the best approximation.
            a = b;
            fa = fb;
            b = c;
            fb = fc;
            c = a;
            fc = fa;
        }

        let tol_act = 2.0 * f64::EPSILON * b.abs() + tolerance / 2.0;
        let mut new_step = (c - b) / 2.0;

        if new_step.abs() <= tol_act || fb == 0.0 {
            return Ok(b);
        }

        // Try interpolation if the previous step was large enough and moved
        // in the true direction.
        if prev_step.abs() >= tol_act && fa.abs() > fb.abs() {
            let cb = c - b;
            let mut p;
            let mut q;
            if a == c {
                // Only two distinct points: linear interpolation.
                let t1 = fb / fa;
                p = cb * t1;
                q = 1.0 - t1;
            } else {
                // Inverse quadratic interpolation.
                let r = fa / fc;
                let t1 = fb / fc;
                let t2 = fb / fa;
                p = t2 * (cb * r * (r - t1) - (b - a) * (t1 - 1.0));
                q = (r - 1.0) * (t1 - 1.0) * (t2 - 1.0);
            }
            // Normalize so p is positive and q carries the sign.
            if p > 0.0 {
                q = -q;
            } else {
                p = -p;
            }
            // Accept the interpolated step only if b + p/q falls within
            // [b, c] away from the endpoints and is less than half the
            // previous step; otherwise bisection shrinks the bracket more.
            if p < 0.75 * cb * q - (tol_act * q).abs() / 2.0 && p < (prev_step * q / 2.0).abs() {
                new_step = p / q;
            }
        }

        // Never step by less than the tolerance.
        if new_step.abs() < tol_act {
            new_step = if new_step > 0.0 { tol_act } else { -tol_act };
        }

        a = b;
        fa = fb;
        b += new_step;
        fb = f(b)? - target;
        if (fb > 0.0 && fc > 0.0) || (fb < 0.0 && fc < 0.0) {
            // Restore c so that b and c bracket the root again.
            c = a;
            fc = fa;
        }
    }

    Err(PropertyError::ToleranceUnreachable)
}

/// Piecewise-linear interpolation over an increasing abscissa table.
///
/// `xs` must be sorted ascending and match `ys` in length. Values of
/// `given` beyond either end extrapolate from the outermost segment.
pub(crate) fn interpolate(xs: &[f64], ys: &[f64], given: f64) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    let mut i = xs.len() - 1;
    for k in 1..xs.len() - 1 {
        if given <= xs[k] {
            i = k;
            break;
        }
    }
    (given - xs[i - 1]) / (xs[i] - xs[i - 1]) * (ys[i] - ys[i - 1]) + ys[i - 1]
}
