//! The representation of expression trees.
//!
//! An [`Expr`] is either a [`Primary`] leaf (a numeric constant or a named variable), or an
//! [`Op`] node applying one of the n-ary [`OpKind`]s to an ordered list of arguments. Trees are
//! never mutated once built; every transformation in this crate returns a new tree.
//!
//! Unlike a parser's AST, nested operators of the same kind are **not** flattened when a tree is
//! built. `x + (y + z)` is an [`OpKind::Add`] node with two arguments, the second of which is
//! another [`OpKind::Add`] node. Flattening happens while simplifying.
//!
//! # Strict equality
//!
//! Grouping like terms requires deciding whether two subtrees are "the same". Deciding semantic
//! equality in general requires simplification, which in turn requires grouping, so instead we
//! use a much cheaper subset of it, **strict equality**. Two expressions are strictly equal if:
//!
//! - They are both [`Primary::Constant`]s with equal values.
//! - They are both [`Primary::Variable`]s with equal names.
//! - They are both [`Op`]s of the same [`OpKind`], with pairwise strictly equal arguments **in
//! the same order**.
//!
//! Note that argument order matters, even though both operators are commutative: `x * y` and
//! `y * x` are **not** strictly equal. The [`PartialEq`], [`Eq`], and [`Hash`] implementations
//! of [`Expr`] implement strict equality, which is what [`ExprMap`] is keyed by.
//!
//! Constants are compared by value, so `0` and `-0` are strictly equal and hash identically.
//! This module **must never** be given `NaN` constants, which would make [`Eq`] unsound.

mod iter;
mod map;
mod op;

pub use iter::ExprIter;
pub use map::ExprMap;
pub use op::{Op, OpKind};

use cas_error::Error;
use crate::error::UndefinedVariable;
use crate::knowns::Knowns;
use crate::simplify::{self, split::Split};
use std::ops::{Add, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The constant `0`.
pub const ZERO: Expr = Expr::Primary(Primary::Constant(0.0));

/// The constant `1`.
pub const ONE: Expr = Expr::Primary(Primary::Constant(1.0));

/// A leaf of the expression tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primary {
    /// A numeric constant, such as `2` or `0.5`.
    Constant(f64),

    /// A named variable, such as `x` or `y`.
    Variable(String),
}

/// [`Eq`] is implemented manually to allow [`Primary::Constant`]s. This module **must never**
/// produce `NaN` constants! Report any bugs that cause this to happen.
impl Eq for Primary {}

/// [`Hash`] is implemented manually to hash [`Primary::Constant`]s by value. `-0` is normalized
/// to `0` so that the two hash identically, as they compare equal.
impl std::hash::Hash for Primary {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Constant(value) => {
                let normalized = if *value == 0.0 { 0.0 } else { *value };
                normalized.to_bits().hash(state);
            },
            Self::Variable(name) => name.hash(state),
        }
    }
}

impl std::fmt::Display for Primary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{}", value),
            Self::Variable(name) => write!(f, "{}", name),
        }
    }
}

/// A node in an expression tree.
///
/// For more information about this type, see the [module-level documentation](self).
// serialize only: `Op` cannot be deserialized without bypassing its arity check
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Expr {
    /// A constant or variable.
    Primary(Primary),

    /// An operator applied to two or more arguments.
    Op(Op),
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary(primary) => write!(f, "{}", primary),
            Self::Op(op) => write!(f, "{}", op),
        }
    }
}

impl Expr {
    /// Creates a constant.
    pub fn constant(value: f64) -> Self {
        Self::Primary(Primary::Constant(value))
    }

    /// Creates a variable.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Primary(Primary::Variable(name.into()))
    }

    /// If the expression is a [`Primary::Constant`], returns the contained value.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Primary(Primary::Constant(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Primary::Constant`].
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Primary(Primary::Constant(_)))
    }

    /// If the expression is a [`Primary::Variable`], returns a reference to its name.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Primary(Primary::Variable(name)) => Some(name),
            _ => None,
        }
    }

    /// If the expression is an [`Op`], returns a reference to it.
    pub fn as_op(&self) -> Option<&Op> {
        match self {
            Self::Op(op) => Some(op),
            _ => None,
        }
    }

    /// If the expression is an [`Op`] of the given kind, returns a reference to it.
    pub fn as_op_of(&self, kind: OpKind) -> Option<&Op> {
        self.as_op().filter(|op| op.kind() == kind)
    }

    /// Returns true if any variable in the expression is absent from `knowns`.
    pub fn has_unknowns(&self, knowns: &Knowns) -> bool {
        self.post_order_iter()
            .filter_map(Expr::as_variable)
            .any(|name| !knowns.contains(name))
    }

    /// Numerically evaluates the expression, substituting the values in `knowns`.
    ///
    /// Returns an [`UndefinedVariable`] error for the first variable that has no known value.
    pub fn evaluate(&self, knowns: &Knowns) -> Result<f64, Error> {
        match self {
            Self::Primary(Primary::Constant(value)) => Ok(*value),
            Self::Primary(Primary::Variable(name)) => knowns.get_var(name)
                .ok_or_else(|| Error::new(Vec::new(), UndefinedVariable { name: name.clone() })),
            Self::Op(op) => op.args()
                .iter()
                .try_fold(op.kind().identity(), |acc, arg| {
                    Ok(op.kind().fold(acc, arg.evaluate(knowns)?))
                }),
        }
    }

    /// Returns the derivative of the expression with respect to the given variable. No
    /// simplification is done.
    ///
    /// See [`crate::derivative`] for the rules used.
    pub fn derivative(&self, var: &str) -> Expr {
        crate::derivative::derivative(self, var)
    }

    /// Simplifies the expression, treating variables in `knowns` as their bound values.
    ///
    /// See [`crate::simplify`] for details.
    pub fn simplify(&self, knowns: &Knowns) -> Result<Expr, Error> {
        simplify::simplify(self, knowns)
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }
}

impl Op {
    /// Splits this operator into the numeric fold of its constant arguments and the list of its
    /// remaining, simplified arguments, flattening nested operators of the same kind.
    ///
    /// See [`crate::simplify::split`] for details.
    pub fn split(&self, knowns: &Knowns) -> Result<Split, Error> {
        simplify::split::split(self, knowns, &mut ())
    }

    /// Simplifies this operator. See [`Expr::simplify`].
    pub fn simplify(&self, knowns: &Knowns) -> Result<Expr, Error> {
        simplify::simplify_op(self, knowns)
    }

    /// Returns the derivative of this operator. See [`Expr::derivative`].
    pub fn derivative(&self, var: &str) -> Expr {
        crate::derivative::derivative_op(self, var)
    }
}

impl From<Op> for Expr {
    fn from(op: Op) -> Self {
        Self::Op(op)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

/// Creates a constant.
pub fn constant(value: f64) -> Expr {
    Expr::constant(value)
}

/// Creates a variable.
pub fn variable(name: impl Into<String>) -> Expr {
    Expr::variable(name)
}

/// Creates an [`OpKind::Add`] node with the given terms.
///
/// Returns an [`ArityError`](crate::error::ArityError) if there are fewer than
/// [`OpKind::MIN_ARGS`] or more than [`OpKind::MAX_ARGS`] terms.
pub fn add(terms: Vec<Expr>) -> Result<Expr, Error> {
    Op::new(OpKind::Add, terms).map(Expr::Op)
}

/// Creates an [`OpKind::Mul`] node with the given factors.
///
/// Returns an [`ArityError`](crate::error::ArityError) if there are fewer than
/// [`OpKind::MIN_ARGS`] or more than [`OpKind::MAX_ARGS`] factors.
pub fn multiply(factors: Vec<Expr>) -> Result<Expr, Error> {
    Op::new(OpKind::Mul, factors).map(Expr::Op)
}

/// Adds two [`Expr`]s together, producing a two-term [`OpKind::Add`] node. No simplification
/// or flattening is done.
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Op(Op::new_unchecked(OpKind::Add, vec![self, rhs]))
    }
}

/// Multiplies two [`Expr`]s together, producing a two-factor [`OpKind::Mul`] node. No
/// simplification or flattening is done.
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::Op(Op::new_unchecked(OpKind::Mul, vec![self, rhs]))
    }
}
