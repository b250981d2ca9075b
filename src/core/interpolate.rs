//! Piecewise-linear interpolation over matched input/output stops.

/// Behavior outside the input range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extrapolate {
    /// Continue the slope of the nearest segment.
    Extend,
    /// Pin to the nearest output stop.
    Clamp,
}

/// Maps `x` through the polyline defined by `input`/`output` stops.
///
/// `input` must be monotonically increasing and the slices equal length.
/// With fewer than two stops the single output (or 0.0) is returned.
pub fn interpolate(x: f32, input: &[f32], output: &[f32], extrapolate: Extrapolate) -> f32 {
    let n = input.len().min(output.len());
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return output[0];
    }

    // Pick the segment containing x, or the end segment when out of range.
    let last = n - 1;
    let seg = if x <= input[0] {
        0
    } else if x >= input[last] {
        last - 1
    } else {
        // input is sorted, so the first stop above x ends the segment.
        let mut seg = last - 1;
        for i in 1..n {
            if x < input[i] {
                seg = i - 1;
                break;
            }
        }
        seg
    };

    if extrapolate == Extrapolate::Clamp {
        if x <= input[0] {
            return output[0];
        }
        if x >= input[last] {
            return output[last];
        }
    }

    let (x0, x1) = (input[seg], input[seg + 1]);
    let (y0, y1) = (output[seg], output[seg + 1]);
    let span = x1 - x0;
    if span == 0.0 {
        return y0;
    }
    y0 + (y1 - y0) * ((x - x0) / span)
}
