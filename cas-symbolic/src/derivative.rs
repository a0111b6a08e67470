//! Symbolic differentiation.
//!
//! Derivatives are built structurally and are **not** simplified; the derivative of `x*y` with
//! respect to `x` is `1*y + x*0`. Pass the result to [`Expr::simplify`] to reduce it.

use crate::expr::{Expr, Op, OpKind, Primary, ONE, ZERO};

/// `(f + g + h)' = f' + g' + h'`
fn sum_rule(terms: &[Expr], var: &str) -> Expr {
    let terms = terms.iter()
        .map(|term| derivative(term, var))
        .collect();
    Expr::Op(Op::new_unchecked(OpKind::Add, terms))
}

/// `(f*g*h)' = f'*g*h + f*g'*h + f*g*h'`
fn product_rule(factors: &[Expr], var: &str) -> Expr {
    let terms = (0..factors.len())
        .map(|derivative_index| {
            let factors = factors.iter()
                .enumerate()
                .map(|(factor_index, factor)| {
                    if factor_index == derivative_index {
                        derivative(factor, var)
                    } else {
                        factor.clone()
                    }
                })
                .collect();
            Expr::Op(Op::new_unchecked(OpKind::Mul, factors))
        })
        .collect();
    Expr::Op(Op::new_unchecked(OpKind::Add, terms))
}

/// Returns the derivative of the operator with respect to the given variable.
pub fn derivative_op(op: &Op, var: &str) -> Expr {
    // the result has as many arguments as `op`, so its arity is already valid
    match op.kind() {
        OpKind::Add => sum_rule(op.args(), var),
        OpKind::Mul => product_rule(op.args(), var),
    }
}

/// Returns the derivative of the expression with respect to the given variable.
pub fn derivative(f: &Expr, var: &str) -> Expr {
    match f {
        Expr::Primary(Primary::Constant(_)) => ZERO,
        Expr::Primary(Primary::Variable(name)) => {
            if name == var {
                ONE
            } else {
                ZERO
            }
        },
        Expr::Op(op) => derivative_op(op, var),
    }
}
