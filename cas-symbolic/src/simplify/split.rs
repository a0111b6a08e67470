//! Flattening of nested operators into a numeric part and a symbolic part.

use cas_error::Error;
use crate::expr::{Expr, Op, OpKind, Primary};
use crate::knowns::Knowns;
use crate::step_collector::StepCollector;
use super::{simplify_with, step::Step};

/// The result of [splitting](split) an operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    /// The fold of every constant argument, starting from the operator's identity element: the
    /// sum of the constant terms of an [`OpKind::Add`], or the product of the constant factors
    /// of an [`OpKind::Mul`].
    pub numeric: f64,

    /// The remaining symbolic arguments, simplified, in order of appearance.
    pub symbolic: Vec<Expr>,

    /// The number of constants that were folded into `numeric`.
    pub folded: usize,
}

impl Split {
    /// Creates an empty split for the given operator.
    fn identity(kind: OpKind) -> Self {
        Self {
            numeric: kind.identity(),
            symbolic: Vec::new(),
            folded: 0,
        }
    }

    /// Folds a constant into the numeric part.
    fn fold(&mut self, kind: OpKind, value: f64) {
        self.numeric = kind.fold(self.numeric, value);
        self.folded += 1;
    }

    /// Merges the split of a nested operator of the same kind into this one.
    fn merge(&mut self, kind: OpKind, other: Split) {
        self.numeric = kind.fold(self.numeric, other.numeric);
        self.symbolic.extend(other.symbolic);
        self.folded += other.folded;
    }

    /// Adds one argument of an operator of the given kind to the split, simplifying it first.
    fn absorb(
        &mut self,
        kind: OpKind,
        arg: &Expr,
        knowns: &Knowns,
        step_collector: &mut dyn StepCollector<Step>,
    ) -> Result<(), Error> {
        match arg {
            Expr::Primary(Primary::Constant(value)) => self.fold(kind, *value),
            Expr::Op(op) if op.kind() == kind => {
                step_collector.push(Step::Flatten);
                self.merge(kind, split(op, knowns, step_collector)?);
            },
            _ => {
                // an argument can simplify into a constant or into the same kind of operator,
                // e.g. a known variable, or `1*(a+b)` inside of a sum
                let simplified = simplify_with(arg, knowns, step_collector)?;
                self.absorb_simplified(kind, simplified, knowns, step_collector)?;
            },
        }

        Ok(())
    }

    /// Adds one argument that is already simplified to the split.
    ///
    /// A simplified operator of the same kind only has simplified arguments, so it is flattened
    /// with [`split_simplified`] instead of being simplified again.
    fn absorb_simplified(
        &mut self,
        kind: OpKind,
        arg: Expr,
        knowns: &Knowns,
        step_collector: &mut dyn StepCollector<Step>,
    ) -> Result<(), Error> {
        match arg {
            Expr::Primary(Primary::Constant(value)) => self.fold(kind, value),
            Expr::Op(op) if op.kind() == kind => {
                step_collector.push(Step::Flatten);
                self.merge(kind, split_simplified(&op, &op, knowns, step_collector)?);
            },
            other => self.symbolic.push(other),
        }

        Ok(())
    }
}

/// Splits an operator into the fold of its constant arguments and the list of its symbolic
/// arguments.
///
/// Only operators of the same kind are flattened: splitting `2 + x + (3 + y*(1 + z))` gives
/// the numeric part `5`, and the symbolic part `[x, y*(1 + z)]`. Symbolic arguments are
/// simplified before being added to the list, so operators of another kind are only
/// simplified, not split.
pub fn split(
    op: &Op,
    knowns: &Knowns,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Split, Error> {
    let kind = op.kind();
    let mut split = Split::identity(kind);
    for arg in op.args() {
        split.absorb(kind, arg, knowns, step_collector)?;
    }
    Ok(split)
}

/// Splits an operator whose arguments were already simplified.
///
/// `original` is the operator as it was before [`simplify_args`](super::simplify_args)
/// produced `simplified` from it. Arguments that were operators of the same kind in
/// `original` were deferred, and are split (and simplified) here. Every other argument of
/// `simplified` is taken as-is. To split an operator that is the result of a simplification,
/// pass it as both `original` and `simplified`.
pub(crate) fn split_simplified(
    original: &Op,
    simplified: &Op,
    knowns: &Knowns,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Split, Error> {
    let kind = simplified.kind();
    let mut split = Split::identity(kind);
    for (before, after) in original.args().iter().zip(simplified.args()) {
        if before.as_op_of(kind).is_some() {
            split.absorb(kind, after, knowns, step_collector)?;
        } else {
            split.absorb_simplified(kind, after.clone(), knowns, step_collector)?;
        }
    }
    Ok(split)
}
