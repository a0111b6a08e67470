//! Simplification and differentiation of symbolic expression trees built from constants,
//! variables, and the n-ary addition and multiplication operators.
//!
//! # Building expressions
//!
//! Expressions are [`Expr`] trees. Leaves are created with [`constant`] and [`variable`], and
//! operator nodes with [`add`] and [`multiply`], which check that the operator is given between
//! [`OpKind::MIN_ARGS`] and [`OpKind::MAX_ARGS`] arguments.
//!
//! ```
//! use cas_symbolic::{add, constant, multiply, variable};
//!
//! // 2x + y + 1
//! let expr = add(vec![
//!     multiply(vec![constant(2.0), variable("x")]).unwrap(),
//!     variable("y"),
//!     constant(1.0),
//! ]).unwrap();
//! assert_eq!(expr.to_string(), "((2 * x) + y + 1)");
//!
//! assert!(add(vec![variable("x")]).is_err());
//! ```
//!
//! # Simplification
//!
//! [`Expr::simplify`] reduces an expression, given the values of any [`Knowns`] variables.
//! Constants are folded, nested sums and products are flattened, identity elements are dropped,
//! multiplication by zero annihilates the product, and like terms are combined. See the
//! [`mod@simplify`] module for the full algorithm.
//!
//! ```
//! use cas_symbolic::{add, constant, multiply, variable, Knowns};
//!
//! // x * 0 = 0, even though x is unknown
//! let expr = multiply(vec![variable("x"), constant(0.0)]).unwrap();
//! assert_eq!(expr.simplify(&Knowns::new()).unwrap(), constant(0.0));
//!
//! // with x = 4, x + 1 = 5
//! let expr = add(vec![variable("x"), constant(1.0)]).unwrap();
//! assert_eq!(expr.simplify(&Knowns::new().with("x", 4.0)).unwrap(), constant(5.0));
//! ```
//!
//! # Differentiation
//!
//! [`Expr::derivative`] applies the sum and product rules structurally, without simplifying.
//!
//! ```
//! use cas_symbolic::{multiply, variable, Knowns};
//!
//! // d/dx (x * y) = 1*y + x*0
//! let expr = multiply(vec![variable("x"), variable("y")]).unwrap();
//! let derivative = expr.derivative("x");
//! assert_eq!(derivative.to_string(), "((1 * y) + (x * 0))");
//! assert_eq!(derivative.simplify(&Knowns::new()).unwrap().to_string(), "(y)");
//! ```

pub mod derivative;
pub mod error;
pub mod expr;
pub mod knowns;
pub mod simplify;
pub mod step_collector;

pub use expr::{add, constant, multiply, variable, Expr, ExprMap, Op, OpKind, Primary, ONE, ZERO};
pub use knowns::Knowns;
pub use simplify::{simplify, simplify_with_steps, split::Split, step::Step};
pub use step_collector::StepCollector;
