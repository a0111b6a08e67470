#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `x = 3` when `x` is known to be `3`
    SubstituteKnown,

    /// `2+3 = 5`
    /// `2*3 = 6`
    FoldConstants,

    /// `a+(b+c) = a+b+c`
    /// `a*(b*c) = a*b*c`
    Flatten,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a+a = 2a`
    /// `a+a+a = 3a`
    /// `2a+3a = 5a`
    /// etc.
    CombineLikeTerms,

    /// `2a+(-2)a = 0`
    CancelTerms,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,
}
