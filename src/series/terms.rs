use crate::error::{InputError, Result, SeriesError};

/// How many harmonics a query should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Terms {
    /// Every computed harmonic.
    #[default]
    All,
    /// Only the first `n` harmonics.
    First(usize),
}

impl Terms {
    /// Interprets a signed term count where `-1` selects every harmonic.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidTermCount` for negative counts other than `-1`.
    pub fn from_signed(terms: i64) -> Result<Self> {
        match terms {
            -1 => Ok(Self::All),
            n => usize::try_from(n)
                .map(Self::First)
                .map_err(|_| InputError::InvalidTermCount(n).into()),
        }
    }

    /// Resolves to a concrete count given `available` computed harmonics.
    ///
    /// # Errors
    ///
    /// Returns `SeriesError::TermCountOutOfRange` if more terms are requested
    /// than were computed.
    pub fn resolve(self, available: usize) -> Result<usize> {
        match self {
            Self::All => Ok(available),
            Self::First(requested) if requested > available => {
                Err(SeriesError::TermCountOutOfRange {
                    requested,
                    available,
                }
                .into())
            }
            Self::First(requested) => Ok(requested),
        }
    }
}

impl From<usize> for Terms {
    fn from(n: usize) -> Self {
        Self::First(n)
    }
}
