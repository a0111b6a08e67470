//! Simplification rules for expressions involving addition, including combining like terms.

use cas_error::Error;
use crate::expr::{Expr, ExprMap, Op, OpKind, ZERO, ONE};
use crate::knowns::Knowns;
use crate::step_collector::StepCollector;
use log::{debug, trace};
use super::{
    fold_constants,
    multiply,
    simplify_args,
    split::{split_simplified, Split},
    step::Step,
};

/// Builds a sum from the given terms.
///
/// A sum of one term is kept as a one-term [`OpKind::Add`] node, rather than being unwrapped
/// into the term itself. A sum of no terms is `0`.
fn make_sum(mut terms: Vec<Expr>) -> Result<Expr, Error> {
    match terms.len() {
        0 => Ok(ZERO),
        1 => Ok(Expr::Op(Op::new_unchecked(OpKind::Add, vec![terms.remove(0)]))),
        _ => Op::new(OpKind::Add, terms).map(Expr::Op),
    }
}

/// Builds a product from the given factors, without a coefficient.
fn make_product(mut factors: Vec<Expr>) -> Result<Expr, Error> {
    match factors.len() {
        0 => Ok(ONE),
        1 => Ok(factors.remove(0)),
        _ => Op::new(OpKind::Mul, factors).map(Expr::Op),
    }
}

/// Counts the occurrences of each distinct term, and replaces repeated terms with a product of
/// the count and the term. The terms must already be simplified.
///
/// `a+a = 2a`
/// `a+a+a = 3a`
fn count_like_terms(
    terms: Vec<Expr>,
    knowns: &Knowns,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Vec<Expr>, Error> {
    let mut counts = ExprMap::<Expr, usize>::new();
    for term in terms {
        *counts.get_or_insert(term, 0) += 1;
    }

    counts.into_iter()
        .map(|(term, count)| {
            if count == 1 {
                Ok(term)
            } else {
                debug!("combining {} occurrences of {}", count, term);
                step_collector.push(Step::CombineLikeTerms);
                multiply::scale(term, count as f64, knowns, step_collector)
            }
        })
        .collect()
}

/// Combines like terms that are products, by summing the coefficients of products with the
/// same factors.
///
/// `2a+3a = 5a`
/// `2ab+(-2)ab = 0`
///
/// The factors must be strictly equal **in the same order**; `2ab` and `3ba` are not combined.
/// Terms that are not products are kept as-is, after the combined products.
///
/// The terms must already be simplified; they are not simplified again.
pub fn combine_like_terms(
    terms: Vec<Expr>,
    knowns: &Knowns,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let mut coefficients = ExprMap::<Vec<Expr>, f64>::new();
    let mut products = 0;
    let mut others = Vec::new();

    for term in terms {
        match term.as_op_of(OpKind::Mul) {
            Some(product) => {
                let Split { numeric, symbolic, .. } =
                    split_simplified(product, product, knowns, step_collector)?;
                *coefficients.get_or_insert(symbolic, 0.0) += numeric;
                products += 1;
            },
            None => others.push(term),
        }
    }

    if coefficients.len() < products {
        debug!("combined {} products into {} terms", products, coefficients.len());
        step_collector.push(Step::CombineLikeTerms);
    }

    let mut new_terms = Vec::with_capacity(coefficients.len() + others.len());
    for (factors, coefficient) in coefficients {
        if coefficient == 0.0 {
            debug!("cancelled terms with factors {:?}", factors);
            step_collector.push(Step::CancelTerms);
        } else if coefficient == 1.0 {
            new_terms.push(make_product(factors)?);
        } else if factors.is_empty() {
            new_terms.push(Expr::constant(coefficient));
        } else {
            let mut args = Vec::with_capacity(factors.len() + 1);
            args.push(Expr::constant(coefficient));
            args.extend(factors);
            new_terms.push(Expr::Op(Op::new(OpKind::Mul, args)?));
        }
    }
    new_terms.extend(others);

    make_sum(new_terms)
}

/// Simplifies an [`OpKind::Add`] node.
///
/// After folding the constant terms and flattening nested sums, repeated terms are counted
/// (`a+a = 2a`), a zero constant term is dropped (`a+0 = a`), and products with the same
/// factors are combined (`2a+3a = 5a`).
///
/// If one term remains, the result is still a one-term sum.
pub fn simplify(
    op: &Op,
    knowns: &Knowns,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    trace!("simplifying sum {}", op);
    let simplified = simplify_args(op, knowns, step_collector)?;
    if !simplified.has_unknowns(knowns) {
        return fold_constants(&simplified, knowns, step_collector);
    }

    let Split { numeric, symbolic, folded } =
        split_simplified(op, &simplified, knowns, step_collector)?;
    let mut terms = count_like_terms(symbolic, knowns, step_collector)?;
    if terms.is_empty() {
        return Ok(Expr::constant(numeric));
    }

    if numeric != 0.0 {
        terms.push(Expr::constant(numeric));
    } else if folded > 0 {
        debug!("dropped zero term from {}", op);
        step_collector.push(Step::AddZero);
    }

    combine_like_terms(terms, knowns, step_collector)
}
