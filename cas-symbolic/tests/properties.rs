use cas_symbolic::{
    add,
    constant,
    error::ArityError,
    multiply,
    variable,
    Expr,
    Knowns,
    OpKind,
};
use pretty_assertions::assert_eq;

/// Sample points to compare expressions at.
const POINTS: [(f64, f64, f64); 4] = [
    (0.0, 0.0, 0.0),
    (1.0, -2.0, 0.5),
    (-3.5, 4.0, 2.0),
    (2.25, 0.75, -1.0),
];

/// Asserts that the two expressions evaluate to the same value at every sample point. Argument
/// order of the simplified result is not part of its contract, so this is how results with more
/// than one term are compared.
fn assert_semantic_eq(a: &Expr, b: &Expr) {
    for (x, y, z) in POINTS {
        let knowns = Knowns::new().with("x", x).with("y", y).with("z", z);
        let (lhs, rhs) = (a.evaluate(&knowns).unwrap(), b.evaluate(&knowns).unwrap());
        assert!(
            (lhs - rhs).abs() < 1e-9,
            "{a} = {lhs} but {b} = {rhs} at x={x}, y={y}, z={z}",
        );
    }
}

/// Expressions exercising every rule of the simplifier.
fn corpus() -> Vec<Expr> {
    let x = || variable("x");
    let y = || variable("y");
    let z = || variable("z");
    vec![
        add(vec![x(), constant(0.0)]).unwrap(),
        add(vec![x(), x(), x()]).unwrap(),
        add(vec![constant(2.0), constant(3.0), x()]).unwrap(),
        multiply(vec![x(), constant(0.0)]).unwrap(),
        multiply(vec![constant(2.0), x(), multiply(vec![constant(3.0), y()]).unwrap()]).unwrap(),
        add(vec![
            multiply(vec![constant(2.0), x(), y()]).unwrap(),
            multiply(vec![constant(3.0), x(), y()]).unwrap(),
            z(),
            constant(-1.0),
        ]).unwrap(),
        add(vec![
            x(),
            add(vec![y(), add(vec![x(), constant(4.0)]).unwrap()]).unwrap(),
            multiply(vec![constant(1.0), add(vec![y(), z()]).unwrap()]).unwrap(),
        ]).unwrap(),
        multiply(vec![
            add(vec![x(), x()]).unwrap(),
            add(vec![y(), constant(1.0)]).unwrap(),
            multiply(vec![z(), constant(0.5), constant(2.0)]).unwrap(),
        ]).unwrap(),
        add(vec![
            multiply(vec![x(), y()]).unwrap(),
            multiply(vec![y(), x()]).unwrap(),
            multiply(vec![constant(-1.0), x(), y()]).unwrap(),
        ]).unwrap(),
        multiply(vec![x(), y(), z()]).unwrap().derivative("x"),
        add(vec![
            multiply(vec![x(), x(), x()]).unwrap(),
            multiply(vec![constant(5.0), x()]).unwrap(),
            constant(6.0),
        ]).unwrap().derivative("x"),
    ]
}

#[test]
fn arity() {
    for len in [0, 1, 201] {
        assert!(add(vec![constant(1.0); len]).unwrap_err().is::<ArityError>());
        assert!(multiply(vec![constant(1.0); len]).unwrap_err().is::<ArityError>());
    }
    for len in [2, 200] {
        assert!(add(vec![constant(1.0); len]).is_ok());
        assert!(multiply(vec![constant(1.0); len]).is_ok());
    }
}

#[test]
fn full_numeric_reduction() {
    let values = [1.5, -2.0, 4.0, 0.25];
    let constants = values.iter().map(|&v| constant(v)).collect::<Vec<_>>();

    let sum = add(constants.clone()).unwrap().simplify(&Knowns::new()).unwrap();
    assert_eq!(sum, constant(values.iter().sum()));

    let product = multiply(constants).unwrap().simplify(&Knowns::new()).unwrap();
    assert_eq!(product, constant(values.iter().product()));
}

#[test]
fn sum_rule() {
    let a = multiply(vec![variable("x"), variable("y")]).unwrap();
    let b = add(vec![variable("x"), variable("z")]).unwrap();
    let derivative = add(vec![a.clone(), b.clone()]).unwrap().derivative("x");
    let expected = add(vec![a.derivative("x"), b.derivative("x")]).unwrap();
    assert_semantic_eq(
        &derivative.simplify(&Knowns::new()).unwrap(),
        &expected.simplify(&Knowns::new()).unwrap(),
    );
}

#[test]
fn product_rule() {
    let a = add(vec![variable("x"), constant(2.0)]).unwrap();
    let b = multiply(vec![variable("x"), variable("y")]).unwrap();
    let derivative = multiply(vec![a.clone(), b.clone()]).unwrap().derivative("x");
    let expected = add(vec![
        multiply(vec![a.derivative("x"), b.clone()]).unwrap(),
        multiply(vec![a, b.derivative("x")]).unwrap(),
    ]).unwrap();
    assert_semantic_eq(
        &derivative.simplify(&Knowns::new()).unwrap(),
        &expected.simplify(&Knowns::new()).unwrap(),
    );
}

#[test]
fn additive_identity_elision() {
    let simplified = add(vec![variable("x"), constant(0.0)]).unwrap()
        .simplify(&Knowns::new())
        .unwrap();
    assert_semantic_eq(&simplified, &variable("x"));
    assert!(simplified.post_order_iter().all(|expr| expr.as_constant().is_none()));
}

#[test]
fn multiplicative_annihilation() {
    let expr = multiply(vec![variable("x"), constant(0.0)]).unwrap();
    assert_eq!(expr.simplify(&Knowns::new()).unwrap(), constant(0.0));
    assert_eq!(expr.simplify(&Knowns::new().with("x", 7.0)).unwrap(), constant(0.0));
}

#[test]
fn like_term_collapse() {
    let simplified = add(vec![variable("x"), variable("x"), variable("x")]).unwrap()
        .simplify(&Knowns::new())
        .unwrap();
    assert_semantic_eq(&simplified, &multiply(vec![constant(3.0), variable("x")]).unwrap());

    // the only remaining term is the product itself
    let terms = simplified.as_op_of(OpKind::Add).unwrap().args();
    assert_eq!(terms, &[multiply(vec![constant(3.0), variable("x")]).unwrap()]);
}

#[test]
fn split_correctness() {
    let expr = add(vec![constant(2.0), constant(3.0), variable("x")]).unwrap();
    let split = expr.as_op().unwrap().split(&Knowns::new()).unwrap();
    assert_eq!(split.numeric, 5.0);
    assert_eq!(split.symbolic, vec![variable("x")]);
}

#[test]
fn idempotence() {
    let knowns_list = [Knowns::new(), Knowns::new().with("y", 2.0)];
    for expr in corpus() {
        for knowns in &knowns_list {
            let once = expr.simplify(knowns).unwrap();
            let twice = once.simplify(knowns).unwrap();
            assert_semantic_eq(&once, &twice);
        }
    }
}

#[test]
fn simplification_preserves_value() {
    for expr in corpus() {
        assert_semantic_eq(&expr, &expr.simplify(&Knowns::new()).unwrap());
    }
}

#[test]
fn known_binding_substitution() {
    let expr = add(vec![variable("x"), constant(1.0)]).unwrap();
    assert_eq!(expr.simplify(&Knowns::new().with("x", 4.0)).unwrap(), constant(5.0));
}

#[test]
fn deterministic() {
    for expr in corpus() {
        let knowns = Knowns::new();
        assert_eq!(expr.simplify(&knowns).unwrap(), expr.simplify(&knowns).unwrap());
    }
}

#[test]
fn input_is_not_modified() {
    for expr in corpus() {
        let copy = expr.clone();
        let _ = expr.simplify(&Knowns::new()).unwrap();
        let _ = expr.derivative("x");
        assert_eq!(expr, copy);
    }
}
