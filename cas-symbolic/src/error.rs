//! Kinds of errors that can occur while building or simplifying expressions.

use ariadne::Fmt;
use cas_attrs::ErrorKind;
use cas_error::EXPR;

/// An operator was constructed with too few or too many arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!(
        "the `{}` operator cannot be applied to {} argument(s)",
        self.symbol,
        self.given,
    ),
    labels = ["this operator"],
    help = format!(
        "the `{}` operator takes between {} and {} arguments",
        self.symbol.fg(EXPR),
        self.min,
        self.max,
    ),
)]
pub struct ArityError {
    /// The symbol of the operator that was constructed.
    pub symbol: &'static str,

    /// The minimum number of arguments the operator accepts.
    pub min: usize,

    /// The maximum number of arguments the operator accepts.
    pub max: usize,

    /// The number of arguments that were given.
    pub given: usize,
}

/// A subtree with no unknown variables did not simplify to a constant.
///
/// This is a bug in the simplifier, not in the input expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expected a constant while folding `{}`", self.op),
    labels = ["this expression"],
    help = format!(
        "`{}` has no unknown variables, so it must simplify to a constant; please report this",
        self.found,
    ),
)]
pub struct InternalInvariant {
    /// The operator whose arguments were being folded.
    pub op: String,

    /// The argument that was not a constant.
    pub found: String,
}

/// The variable has no known value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` has no known value", self.name),
    labels = ["this variable"],
    help = format!("bind it before evaluating, e.g. `Knowns::new().with({:?}, 0.0)`", self.name),
)]
pub struct UndefinedVariable {
    /// The name of the variable.
    pub name: String,
}
