//! Piecewise-linear mapping of an input range onto an output range.

/// Policy for inputs that fall outside the input range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extrapolate {
    /// Continue the edge segment's line beyond the range.
    Extend,
    /// Pin to the edge output value.
    Clamp,
}

/// Multi-stop linear interpolation with per-side extrapolation policies.
///
/// Stops are fixed at construction; evaluation is a pure function of the
/// input, so one instance can be shared and sampled every frame.
pub struct Interpolation {
    input: Vec<f32>,
    output: Vec<f32>,
    extrapolate_left: Extrapolate,
    extrapolate_right: Extrapolate,
}

impl Interpolation {
    /// Build a mapping from matching input/output stops. Both sides
    /// extrapolate linearly unless overridden.
    ///
    /// # Panics
    ///
    /// Panics when fewer than two stops are given, the ranges differ in
    /// length, or the input stops decrease. Ranges are static programmer
    /// input, so a bad range is a bug at the call site.
    pub fn new(input: Vec<f32>, output: Vec<f32>) -> Self {
        assert!(input.len() >= 2, "interpolation needs at least two stops");
        assert_eq!(
            input.len(),
            output.len(),
            "input and output ranges must have the same length"
        );
        assert!(
            input.windows(2).all(|pair| pair[0] <= pair[1]),
            "input stops must be non-decreasing"
        );
        Self {
            input,
            output,
            extrapolate_left: Extrapolate::Extend,
            extrapolate_right: Extrapolate::Extend,
        }
    }

    /// Clamp both sides to the edge outputs.
    pub fn with_clamp(self) -> Self {
        self.with_extrapolate_left(Extrapolate::Clamp)
            .with_extrapolate_right(Extrapolate::Clamp)
    }

    pub fn with_extrapolate_left(mut self, policy: Extrapolate) -> Self {
        self.extrapolate_left = policy;
        self
    }

    pub fn with_extrapolate_right(mut self, policy: Extrapolate) -> Self {
        self.extrapolate_right = policy;
        self
    }

    /// Map `value` through the stops.
    pub fn eval(&self, value: f32) -> f32 {
        // Pick the last segment whose start is at or below the value;
        // inputs outside the range land on the edge segments.
        let mut segment = self.input.len() - 2;
        for i in 1..self.input.len() - 1 {
            if self.input[i] >= value {
                segment = i - 1;
                break;
            }
        }

        let in_start = self.input[segment];
        let in_end = self.input[segment + 1];
        let out_start = self.output[segment];
        let out_end = self.output[segment + 1];

        if value < in_start && self.extrapolate_left == Extrapolate::Clamp {
            return out_start;
        }
        if value > in_end && self.extrapolate_right == Extrapolate::Clamp {
            return out_end;
        }
        // A zero-width segment has no usable slope.
        if in_start == in_end {
            return out_start;
        }

        let fraction = (value - in_start) / (in_end - in_start);
        out_start + (out_end - out_start) * fraction
    }
}
