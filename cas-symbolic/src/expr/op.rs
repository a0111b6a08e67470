use cas_error::Error;
use crate::error::ArityError;
use crate::knowns::Knowns;
use super::Expr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kinds of n-ary operators an [`Op`] can apply.
///
/// Each kind carries its display symbol, arity bounds, identity element, and numeric fold rule.
/// Both kinds are commutative, but the order of arguments is preserved for display and for
/// [strict equality](super#strict-equality).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OpKind {
    /// Addition of two or more terms.
    Add,

    /// Multiplication of two or more factors.
    Mul,
}

impl OpKind {
    /// The minimum number of arguments accepted by every operator.
    pub const MIN_ARGS: usize = 2;

    /// The maximum number of arguments accepted by every operator.
    pub const MAX_ARGS: usize = 200;

    /// Returns the symbol used to display the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Mul => "*",
        }
    }

    /// Returns the minimum number of arguments accepted by the operator.
    pub fn min_args(self) -> usize {
        Self::MIN_ARGS
    }

    /// Returns the maximum number of arguments accepted by the operator.
    pub fn max_args(self) -> usize {
        Self::MAX_ARGS
    }

    /// Returns true if the operator is commutative.
    pub fn is_commutative(self) -> bool {
        match self {
            Self::Add | Self::Mul => true,
        }
    }

    /// Returns the identity element of the operator: `0` for addition, and `1` for
    /// multiplication.
    pub fn identity(self) -> f64 {
        match self {
            Self::Add => 0.0,
            Self::Mul => 1.0,
        }
    }

    /// Applies the operator to two numbers.
    pub fn fold(self, acc: f64, value: f64) -> f64 {
        match self {
            Self::Add => acc + value,
            Self::Mul => acc * value,
        }
    }
}

impl std::fmt::Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An n-ary operator applied to an ordered list of arguments.
///
/// The number of arguments is validated when the operator is created with [`Op::new`].
// a derived `Deserialize` would build nodes without the arity check in `Op::new`, so only
// serialization is supported
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Op {
    /// The operator to apply.
    kind: OpKind,

    /// The arguments of the operator, in display order.
    args: Vec<Expr>,
}

impl Op {
    /// Creates a new operator node, checking that the number of arguments is within the
    /// operator's bounds.
    pub fn new(kind: OpKind, args: Vec<Expr>) -> Result<Self, Error> {
        if args.len() < kind.min_args() || args.len() > kind.max_args() {
            return Err(Error::new(Vec::new(), ArityError {
                symbol: kind.symbol(),
                min: kind.min_args(),
                max: kind.max_args(),
                given: args.len(),
            }));
        }

        Ok(Self { kind, args })
    }

    /// Creates a new operator node without checking its arity.
    ///
    /// Used for nodes whose arity follows from an already validated node (derivatives), and for
    /// the single-term sum produced by simplification.
    pub(crate) fn new_unchecked(kind: OpKind, args: Vec<Expr>) -> Self {
        Self { kind, args }
    }

    /// Returns the kind of operator.
    pub fn kind(&self) -> OpKind {
        self.kind
    }

    /// Returns the symbol used to display the operator.
    pub fn symbol(&self) -> &'static str {
        self.kind.symbol()
    }

    /// Returns the arguments of the operator.
    pub fn args(&self) -> &[Expr] {
        &self.args
    }

    /// Consumes the operator, returning its arguments.
    pub fn into_args(self) -> Vec<Expr> {
        self.args
    }

    /// Returns true if any variable in the arguments is absent from `knowns`.
    pub fn has_unknowns(&self, knowns: &Knowns) -> bool {
        self.args.iter().any(|arg| arg.has_unknowns(knowns))
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        let mut iter = self.args.iter();
        if let Some(arg) = iter.next() {
            write!(f, "{}", arg)?;
            for arg in iter {
                write!(f, " {} {}", self.kind, arg)?;
            }
        }
        write!(f, ")")
    }
}
