use super::Error;

/// How a bracket may grow when its endpoints do not straddle a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    /// The bracket is a hard physical limit and never grows.
    Fixed,
    /// Only the upper endpoint moves; the lower endpoint is a hard limit.
    Upper,
    /// Both endpoints move away from each other.
    ///
    /// When both endpoints are positive the growth is geometric, so the
    /// lower endpoint approaches zero without ever reaching it.
    Outward,
}

/// A search interval together with its expansion policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    lower: f64,
    upper: f64,
    expansion: Expansion,
}

impl Bracket {
    /// Creates a bracket that is never widened.
    #[must_use]
    pub fn fixed(lower: f64, upper: f64) -> Self {
        Self::new(lower, upper, Expansion::Fixed)
    }

    /// Creates a bracket whose upper endpoint may be pushed outward.
    #[must_use]
    pub fn expand_upper(lower: f64, upper: f64) -> Self {
        Self::new(lower, upper, Expansion::Upper)
    }

    /// Creates a bracket that may grow in both directions.
    #[must_use]
    pub fn expand_outward(lower: f64, upper: f64) -> Self {
        Self::new(lower, upper, Expansion::Outward)
    }

    /// Creates an outward-expanding bracket spanning a factor of two on
    /// either side of a positive initial guess.
    #[must_use]
    pub fn around(guess: f64) -> Self {
        Self::expand_outward(0.5 * guess, 2.0 * guess)
    }

    /// Creates a bracket with an explicit expansion policy.
    #[must_use]
    pub fn new(lower: f64, upper: f64, expansion: Expansion) -> Self {
        Self {
            lower,
            upper,
            expansion,
        }
    }

    /// Returns the bracket endpoints as `[lower, upper]`.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }

    /// Validates the endpoints and orders them so that `lower < upper`.
    pub(super) fn normalized(self) -> Result<Self, Error> {
        let Self {
            lower,
            upper,
            expansion,
        } = self;

        if !lower.is_finite() || !upper.is_finite() {
            return Err(Error::InvalidBracket { lower, upper });
        }

        #[allow(clippy::float_cmp)]
        if lower == upper {
            return Err(Error::InvalidBracket { lower, upper });
        }

        if lower < upper {
            Ok(self)
        } else {
            Ok(Self {
                lower: upper,
                upper: lower,
                expansion,
            })
        }
    }

    /// Widens the bracket by `factor` according to its policy.
    ///
    /// Returns `false` if the policy forbids growth or the new endpoints
    /// would no longer be finite.
    pub(super) fn widen(&mut self, factor: f64) -> bool {
        let (lower, upper) = match self.expansion {
            Expansion::Fixed => return false,
            Expansion::Upper => (self.lower, self.lower + (self.upper - self.lower) * factor),
            Expansion::Outward if self.lower > 0.0 => (self.lower / factor, self.upper * factor),
            Expansion::Outward => {
                let mid = 0.5 * (self.lower + self.upper);
                let half = 0.5 * (self.upper - self.lower) * factor;
                (mid - half, mid + half)
            }
        };

        if !lower.is_finite() || !upper.is_finite() {
            return false;
        }

        self.lower = lower;
        self.upper = upper;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn normalizes_reversed_endpoints() {
        let bracket = Bracket::fixed(3.0, 1.0).normalized().expect("valid bracket");
        assert_eq!(bracket.as_array(), [1.0, 3.0]);
    }

    #[test]
    fn rejects_degenerate_endpoints() {
        assert!(matches!(
            Bracket::fixed(2.0, 2.0).normalized(),
            Err(Error::InvalidBracket { .. })
        ));
        assert!(matches!(
            Bracket::fixed(f64::NAN, 2.0).normalized(),
            Err(Error::InvalidBracket { .. })
        ));
        assert!(matches!(
            Bracket::expand_upper(0.0, f64::INFINITY).normalized(),
            Err(Error::InvalidBracket { .. })
        ));
    }

    #[test]
    fn fixed_never_widens() {
        let mut bracket = Bracket::fixed(0.0, 1.0);
        assert!(!bracket.widen(2.0));
        assert_eq!(bracket.as_array(), [0.0, 1.0]);
    }

    #[test]
    fn upper_keeps_lower_endpoint() {
        let mut bracket = Bracket::expand_upper(1.0, 3.0);
        assert!(bracket.widen(2.0));
        assert_eq!(bracket.as_array(), [1.0, 5.0]);
    }

    #[test]
    fn outward_is_geometric_for_positive_brackets() {
        let mut bracket = Bracket::around(4.0);
        assert_eq!(bracket.as_array(), [2.0, 8.0]);

        assert!(bracket.widen(2.0));
        let [lower, upper] = bracket.as_array();
        assert_relative_eq!(lower, 1.0);
        assert_relative_eq!(upper, 16.0);
    }

    #[test]
    fn outward_is_symmetric_when_straddling_zero() {
        let mut bracket = Bracket::expand_outward(-1.0, 1.0);
        assert!(bracket.widen(3.0));
        let [lower, upper] = bracket.as_array();
        assert_relative_eq!(lower, -3.0);
        assert_relative_eq!(upper, 3.0);
    }
}
