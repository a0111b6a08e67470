//! Module to simplify expressions.
//!
//! Simplification is a single recursive rewrite, bottom-up. For an operator node:
//!
//! 1. Every argument is simplified, except arguments that are operators of the **same** kind,
//!    which are left alone until they are flattened in step 3.
//! 2. If no variable in the result is unknown, every argument is a constant (or a deferred
//!    operator that simplifies to one), and the whole node folds into a single constant.
//! 3. Otherwise, the node is [split](split::split) into the fold of its constant arguments and
//!    the flat list of its symbolic arguments.
//! 4. The operator-specific rules in [`add`] and [`multiply`] rebuild the node from the split,
//!    eliding identity elements and combining like terms.
//!
//! Leaves simplify to themselves, except for variables with a known value, which become
//! constants.
//!
//! The result is deterministic for a given tree and set of knowns, but the order of arguments
//! in the result is **not** part of the contract. Compare results with [`Expr::evaluate`] or
//! strict equality of expected shapes, not argument positions.

pub mod add;
pub mod multiply;
pub mod split;
pub mod step;

use cas_error::Error;
use crate::error::InternalInvariant;
use crate::expr::{Expr, Op, OpKind, Primary};
use crate::knowns::Knowns;
use crate::step_collector::StepCollector;
use log::debug;
use step::Step;

/// Base implementation of the simplification algorithm, dispatching on the kind of node.
pub(crate) fn simplify_with(
    expr: &Expr,
    knowns: &Knowns,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    match expr {
        Expr::Primary(Primary::Constant(_)) => Ok(expr.clone()),
        Expr::Primary(Primary::Variable(name)) => match knowns.get_var(name) {
            Some(value) => {
                step_collector.push(Step::SubstituteKnown);
                Ok(Expr::constant(value))
            },
            None => Ok(expr.clone()),
        },
        Expr::Op(op) => match op.kind() {
            OpKind::Add => add::simplify(op, knowns, step_collector),
            OpKind::Mul => multiply::simplify(op, knowns, step_collector),
        },
    }
}

/// Simplifies every argument of the operator, except arguments that are operators of the same
/// kind. Those are flattened later by [`split::split`], so simplifying them now would be wasted
/// work.
pub(crate) fn simplify_args(
    op: &Op,
    knowns: &Knowns,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Op, Error> {
    let args = op.args()
        .iter()
        .map(|arg| match arg.as_op_of(op.kind()) {
            Some(_) => Ok(arg.clone()),
            None => simplify_with(arg, knowns, step_collector),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Op::new_unchecked(op.kind(), args))
}

/// Folds every argument of an operator with no unknown variables into a single constant.
///
/// The arguments must already have been processed by [`simplify_args`]. Every argument is then
/// expected to be a constant, or a deferred operator of the same kind that simplifies to one.
/// Anything else is a bug in the simplifier, and is reported as an [`InternalInvariant`] error.
pub(crate) fn fold_constants(
    op: &Op,
    knowns: &Knowns,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let kind = op.kind();
    let mut acc = kind.identity();
    for arg in op.args() {
        let value = match arg.as_op_of(kind) {
            Some(_) => constant_value(op, &simplify_with(arg, knowns, step_collector)?)?,
            None => constant_value(op, arg)?,
        };
        acc = kind.fold(acc, value);
    }

    debug!("folded {} into {}", op, acc);
    step_collector.push(Step::FoldConstants);
    Ok(Expr::constant(acc))
}

/// Extracts the value of a constant argument of `op`.
fn constant_value(op: &Op, arg: &Expr) -> Result<f64, Error> {
    arg.as_constant().ok_or_else(|| Error::new(Vec::new(), InternalInvariant {
        op: op.to_string(),
        found: arg.to_string(),
    }))
}

/// Simplify the given expression, treating the variables in `knowns` as their bound values.
///
/// ```
/// use cas_symbolic::{add, constant, variable, Knowns};
///
/// // x + x + x = 3x
/// let expr = add(vec![variable("x"), variable("x"), variable("x")]).unwrap();
/// let simplified = expr.simplify(&Knowns::new()).unwrap();
/// assert_eq!(simplified.to_string(), "((3 * x))");
///
/// // with x = 4, x + 1 = 5
/// let expr = add(vec![variable("x"), constant(1.0)]).unwrap();
/// let simplified = expr.simplify(&Knowns::new().with("x", 4.0)).unwrap();
/// assert_eq!(simplified, constant(5.0));
/// ```
pub fn simplify(expr: &Expr, knowns: &Knowns) -> Result<Expr, Error> {
    simplify_with(expr, knowns, &mut ())
}

/// Simplify the given operator node. See [`simplify`].
pub fn simplify_op(op: &Op, knowns: &Knowns) -> Result<Expr, Error> {
    match op.kind() {
        OpKind::Add => add::simplify(op, knowns, &mut ()),
        OpKind::Mul => multiply::simplify(op, knowns, &mut ()),
    }
}

/// Simplify the given expression. The steps taken by the simplifier will also be collected and
/// returned. This is useful for debugging, and also for displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr, knowns: &Knowns) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let expr = simplify_with(expr, knowns, &mut steps)?;
    Ok((expr, steps))
}
