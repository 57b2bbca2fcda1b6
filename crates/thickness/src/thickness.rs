use derive_more::Display;

/// A layer count together with how much it can be trusted
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Thickness {
    /// Certified minimum
    #[display("{_0}")]
    Exact(usize),

    /// Achievable layer count that may not be minimal
    #[display("<= {_0}")]
    UpperBound(usize),
}

impl Thickness {
    /// The layer count, regardless of certification
    pub fn value(self) -> usize {
        match self {
            Thickness::Exact(n) | Thickness::UpperBound(n) => n,
        }
    }

    pub fn is_exact(self) -> bool {
        matches!(self, Thickness::Exact(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn display_marks_bounds() {
        assert_eq!(Thickness::Exact(2).to_string(), "2");
        assert_eq!(Thickness::UpperBound(3).to_string(), "<= 3");
        assert_eq!(Thickness::UpperBound(3).value(), 3);
        assert!(!Thickness::UpperBound(3).is_exact());
    }
}
