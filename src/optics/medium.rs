use crate::error::{OpticsError, Result};

/// Which side of the drop boundary a ray currently travels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medium {
    /// Surrounding medium (air).
    Outside,
    /// Drop medium (water).
    Inside,
}

/// Refractive indices of the medium around the drop and inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediumPair {
    outside: f64,
    inside: f64,
}

impl MediumPair {
    /// Creates a medium pair.
    ///
    /// Any finite positive indices are accepted; `outside > inside` is valid
    /// and simply swaps where total internal reflection can happen.
    ///
    /// # Errors
    ///
    /// Returns [`OpticsError::InvalidRefractiveIndex`] if either index is not
    /// finite or not strictly positive.
    pub fn new(outside: f64, inside: f64) -> Result<Self> {
        check_index("outside", outside)?;
        check_index("inside", inside)?;
        Ok(Self { outside, inside })
    }

    /// Air around a water drop (1.0 / 1.333).
    #[must_use]
    pub fn air_water() -> Self {
        Self {
            outside: 1.0,
            inside: 1.333,
        }
    }

    /// Index of the surrounding medium.
    #[must_use]
    pub fn outside(&self) -> f64 {
        self.outside
    }

    /// Index of the drop medium.
    #[must_use]
    pub fn inside(&self) -> f64 {
        self.inside
    }

    /// `(n1, n2)` for a ray crossing the boundary out of `from`.
    #[must_use]
    pub fn crossing(&self, from: Medium) -> (f64, f64) {
        match from {
            Medium::Outside => (self.outside, self.inside),
            Medium::Inside => (self.inside, self.outside),
        }
    }
}

fn check_index(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(OpticsError::InvalidRefractiveIndex { name, value }.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::DropletError;

    #[test]
    fn crossing_order() {
        let media = MediumPair::new(1.0, 1.33).unwrap();
        assert_eq!(media.crossing(Medium::Outside), (1.0, 1.33));
        assert_eq!(media.crossing(Medium::Inside), (1.33, 1.0));
        assert_eq!(media.inside(), 1.33);
    }

    #[test]
    fn accepts_any_positive() {
        assert!(MediumPair::new(2.4, 0.5).is_ok());
        assert!(MediumPair::new(1.0, 1.0).is_ok());
    }

    #[test]
    fn rejects_non_positive() {
        for (outside, inside) in [(0.0, 1.33), (1.0, -1.33), (f64::NAN, 1.0), (1.0, f64::INFINITY)] {
            let err = MediumPair::new(outside, inside).unwrap_err();
            assert!(matches!(
                err,
                DropletError::Optics(OpticsError::InvalidRefractiveIndex { .. })
            ));
        }
    }

    #[test]
    fn error_names_the_index() {
        let err = MediumPair::new(1.0, 0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "refractive index inside = 0 must be finite and positive"
        );
    }
}
