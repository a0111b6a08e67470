//! Simplification rules for expressions involving multiplication.

use cas_error::Error;
use crate::expr::{Expr, Op, OpKind, ZERO};
use crate::knowns::Knowns;
use crate::step_collector::StepCollector;
use log::{debug, trace};
use super::{fold_constants, simplify_args, split::{split_simplified, Split}, step::Step};

/// Rebuilds a product from its split.
fn from_split(
    split: Split,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let Split { numeric, mut symbolic, folded } = split;
    if numeric == 0.0 {
        debug!("product of {} factors is annihilated by zero", symbolic.len());
        step_collector.push(Step::MultiplyZero);
        return Ok(ZERO);
    }

    if numeric == 1.0 && folded > 0 {
        step_collector.push(Step::MultiplyOne);
    }

    match symbolic.len() {
        0 => Ok(Expr::constant(numeric)),
        1 if numeric == 1.0 => Ok(symbolic.remove(0)),
        _ => {
            if numeric != 1.0 {
                symbolic.push(Expr::constant(numeric));
            }
            Op::new(OpKind::Mul, symbolic).map(Expr::Op)
        },
    }
}

/// Simplifies the product of an already simplified, non-constant term and a coefficient.
///
/// The result is the same as simplifying `term*coefficient`, without simplifying `term` again.
pub(crate) fn scale(
    term: Expr,
    coefficient: f64,
    knowns: &Knowns,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let mut split = match term.as_op_of(OpKind::Mul) {
        Some(product) => {
            step_collector.push(Step::Flatten);
            split_simplified(product, product, knowns, step_collector)?
        },
        None => Split { numeric: 1.0, symbolic: vec![term], folded: 0 },
    };
    split.numeric *= coefficient;
    split.folded += 1;
    from_split(split, step_collector)
}

/// Simplifies an [`OpKind::Mul`] node.
///
/// After folding the constant factors and flattening nested products:
///
/// - `0*a = 0`, even if `a` is unknown
/// - `1*a = a`
/// - otherwise, the product of the constant factors is placed after the symbolic factors:
/// `2*a*3 = a*6`
pub fn simplify(
    op: &Op,
    knowns: &Knowns,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    trace!("simplifying product {}", op);
    let simplified = simplify_args(op, knowns, step_collector)?;
    if !simplified.has_unknowns(knowns) {
        return fold_constants(&simplified, knowns, step_collector);
    }

    let split = split_simplified(op, &simplified, knowns, step_collector)?;
    from_split(split, step_collector)
}

#[cfg(test)]
mod tests {
    use crate::{add, constant, error::ArityError, multiply, simplify::simplify as simplify_expr, variable};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn multiply_zero() {
        let expr = multiply(vec![variable("x"), constant(0.0)]).unwrap();
        assert_eq!(simplify_expr(&expr, &Knowns::new()).unwrap(), constant(0.0));
        assert_eq!(simplify_expr(&expr, &Knowns::new().with("x", 3.0)).unwrap(), constant(0.0));
    }

    #[test]
    fn multiply_zero_nested() {
        // zero dominates anything symbolic, however deep
        let expr = multiply(vec![
            add(vec![variable("x"), variable("y")]).unwrap(),
            multiply(vec![variable("z"), constant(0.0)]).unwrap(),
        ]).unwrap();
        assert_eq!(simplify_expr(&expr, &Knowns::new()).unwrap(), constant(0.0));
    }

    #[test]
    fn multiply_one() {
        let expr = multiply(vec![constant(1.0), variable("x")]).unwrap();
        assert_eq!(simplify_expr(&expr, &Knowns::new()).unwrap(), variable("x"));

        let expr = multiply(vec![constant(0.5), variable("x"), variable("y"), constant(2.0)]).unwrap();
        assert_eq!(
            simplify_expr(&expr, &Knowns::new()).unwrap(),
            multiply(vec![variable("x"), variable("y")]).unwrap(),
        );
    }

    #[test]
    fn coefficient_goes_last() {
        let expr = multiply(vec![
            constant(2.0),
            variable("x"),
            multiply(vec![constant(3.0), variable("y")]).unwrap(),
        ]).unwrap();
        assert_eq!(
            simplify_expr(&expr, &Knowns::new()).unwrap(),
            multiply(vec![variable("x"), variable("y"), constant(6.0)]).unwrap(),
        );

        let expr = multiply(vec![constant(2.0), variable("x")]).unwrap();
        assert_eq!(
            simplify_expr(&expr, &Knowns::new()).unwrap(),
            multiply(vec![variable("x"), constant(2.0)]).unwrap(),
        );
    }

    #[test]
    fn fold_product() {
        let expr = multiply(vec![constant(2.0), constant(3.0), constant(4.0)]).unwrap();
        assert_eq!(simplify_expr(&expr, &Knowns::new()).unwrap(), constant(24.0));
    }

    #[test]
    fn partially_known() {
        let expr = multiply(vec![variable("x"), variable("y"), constant(2.0)]).unwrap();
        assert_eq!(
            simplify_expr(&expr, &Knowns::new().with("x", 5.0)).unwrap(),
            multiply(vec![variable("y"), constant(10.0)]).unwrap(),
        );
    }

    #[test]
    fn sum_factor_is_simplified() {
        // (x + x) * y = (2x) * y
        let expr = multiply(vec![
            add(vec![variable("x"), variable("x")]).unwrap(),
            variable("y"),
        ]).unwrap();
        let simplified = simplify_expr(&expr, &Knowns::new()).unwrap();
        let factors = simplified.as_op_of(OpKind::Mul).unwrap().args();
        assert_eq!(factors.len(), 2);
        assert_eq!(factors[1], variable("y"));
        assert_eq!(factors[0].as_op().map(Op::kind), Some(OpKind::Add));
    }

    #[test]
    fn flattening_past_max_factors() {
        // each product is valid on its own, but flattening them gives 300 factors
        let product = |prefix: &str| {
            multiply((0..150).map(|i| variable(format!("{prefix}{i}"))).collect()).unwrap()
        };
        let expr = multiply(vec![product("x"), product("y")]).unwrap();
        let err = simplify_expr(&expr, &Knowns::new()).unwrap_err();
        assert_eq!(err.kind_as::<ArityError>(), Some(&ArityError {
            symbol: "*",
            min: 2,
            max: 200,
            given: 300,
        }));
    }

    #[test]
    fn scale_simplified_term() {
        let term = multiply(vec![variable("x"), variable("y"), constant(0.5)]).unwrap();
        assert_eq!(
            scale(term.clone(), 4.0, &Knowns::new(), &mut ()).unwrap(),
            multiply(vec![variable("x"), variable("y"), constant(2.0)]).unwrap(),
        );
        assert_eq!(
            scale(term, 2.0, &Knowns::new(), &mut ()).unwrap(),
            multiply(vec![variable("x"), variable("y")]).unwrap(),
        );
        assert_eq!(
            scale(variable("x"), 3.0, &Knowns::new(), &mut ()).unwrap(),
            multiply(vec![variable("x"), constant(3.0)]).unwrap(),
        );
    }
}
