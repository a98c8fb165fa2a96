use crate::{
    animation::ease::Ease,
    foundation::color::Rgba8,
    foundation::error::{PromoError, PromoResult},
};

/// Behavior for inputs outside the breakpoint range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Continue the slope of the outermost segment.
    #[default]
    Extend,
    /// Hold the outermost output.
    Clamp,
    /// Return the input unchanged.
    Identity,
    /// Wrap the input back into the outermost segment.
    Wrap,
}

/// Options for [`interpolate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InterpolateOpts {
    /// Easing applied to the normalized position within a segment.
    pub ease: Ease,
    /// Extrapolation below the first breakpoint.
    pub left: Extrapolate,
    /// Extrapolation above the last breakpoint.
    pub right: Extrapolate,
}

impl InterpolateOpts {
    /// Extend on both sides, linear.
    pub const EXTEND: Self = Self {
        ease: Ease::Linear,
        left: Extrapolate::Extend,
        right: Extrapolate::Extend,
    };

    /// Clamp on both sides, linear.
    pub const CLAMP: Self = Self {
        ease: Ease::Linear,
        left: Extrapolate::Clamp,
        right: Extrapolate::Clamp,
    };

    /// Extend on the left, clamp on the right, linear.
    pub const CLAMP_RIGHT: Self = Self {
        ease: Ease::Linear,
        left: Extrapolate::Extend,
        right: Extrapolate::Clamp,
    };

    /// Same options with a different easing curve.
    pub fn with_ease(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }
}

/// Piecewise-linear mapping of `value` through `(input[i], output[i])` breakpoints.
///
/// `input` is expected to be strictly increasing; use [`try_interpolate`] when the breakpoints
/// come from outside the crate. Extra entries in the longer slice are ignored.
pub fn interpolate(value: f64, input: &[f64], output: &[f64], opts: InterpolateOpts) -> f64 {
    let n = input.len().min(output.len());
    match n {
        0 => return value,
        1 => return output[0],
        _ => {}
    }

    let seg = find_segment(value, &input[..n]);
    match normalized(value, input[seg], input[seg + 1], opts) {
        Position::Identity(v) => v,
        Position::Within(t) => {
            let (out_min, out_max) = (output[seg], output[seg + 1]);
            if out_min == out_max {
                return out_min;
            }
            out_min + t * (out_max - out_min)
        }
    }
}

/// [`interpolate`] with breakpoint validation.
pub fn try_interpolate(
    value: f64,
    input: &[f64],
    output: &[f64],
    opts: InterpolateOpts,
) -> PromoResult<f64> {
    validate_breakpoints(input, output)?;
    Ok(interpolate(value, input, output, opts))
}

/// Check that breakpoints are usable: equal lengths, at least two, finite, strictly increasing.
pub fn validate_breakpoints(input: &[f64], output: &[f64]) -> PromoResult<()> {
    if input.len() != output.len() {
        return Err(PromoError::animation(format!(
            "input and output breakpoints must have the same length (got {} and {})",
            input.len(),
            output.len()
        )));
    }
    if input.len() < 2 {
        return Err(PromoError::animation(
            "interpolation needs at least two breakpoints",
        ));
    }
    if !input.iter().chain(output).all(|v| v.is_finite()) {
        return Err(PromoError::animation("breakpoints must be finite"));
    }
    if !input.windows(2).all(|w| w[0] < w[1]) {
        return Err(PromoError::animation(
            "input breakpoints must be strictly increasing",
        ));
    }
    Ok(())
}

/// Blend colors across breakpoints. Inputs outside the range hold the outermost color.
pub fn interpolate_color(value: f64, input: &[f64], colors: &[Rgba8], ease: Ease) -> Rgba8 {
    let n = input.len().min(colors.len());
    match n {
        0 => return Rgba8::TRANSPARENT,
        1 => return colors[0],
        _ => {}
    }

    let seg = find_segment(value, &input[..n]);
    let opts = InterpolateOpts::CLAMP.with_ease(ease);
    match normalized(value, input[seg], input[seg + 1], opts) {
        Position::Identity(_) => colors[seg],
        Position::Within(t) => Rgba8::lerp(colors[seg], colors[seg + 1], t),
    }
}

/// Index `i` of the segment `[input[i], input[i + 1]]` used for `value`.
fn find_segment(value: f64, input: &[f64]) -> usize {
    let mut i = 1;
    while i < input.len() - 1 {
        if input[i] >= value {
            break;
        }
        i += 1;
    }
    i - 1
}

enum Position {
    Identity(f64),
    Within(f64),
}

fn normalized(value: f64, in_min: f64, in_max: f64, opts: InterpolateOpts) -> Position {
    let mut x = value;
    if x < in_min {
        match opts.left {
            Extrapolate::Identity => return Position::Identity(x),
            Extrapolate::Clamp => x = in_min,
            Extrapolate::Wrap => x = wrap(x, in_min, in_max),
            Extrapolate::Extend => {}
        }
    }
    if x > in_max {
        match opts.right {
            Extrapolate::Identity => return Position::Identity(x),
            Extrapolate::Clamp => x = in_max,
            Extrapolate::Wrap => x = wrap(x, in_min, in_max),
            Extrapolate::Extend => {}
        }
    }

    let span = in_max - in_min;
    if span == 0.0 {
        return Position::Within(if x >= in_max { 1.0 } else { 0.0 });
    }

    Position::Within(opts.ease.eval((x - in_min) / span))
}

fn wrap(x: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range == 0.0 {
        return min;
    }
    (x - min).rem_euclid(range) + min
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
