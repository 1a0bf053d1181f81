/// Error kinds shared by the whole symbolic core and the crate-wide `Result`
/// alias. Every failure is synchronous and propagates straight to the caller.
pub mod errors;
/// a module turns a String expression into a symbolic expression
///# Example
/// ```
/// use RustedCAS::symbolic::symbolic_engine::Expr;
/// let parsed_expression = Expr::parse_expression("(x^2 + 1) / x").unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// assert!(parsed_expression.contains_variable("x"));
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) defines the expression tree and its structural (commutative-aware) equality
/// 2) provides operator overloads and constructors for building trees in code
/// 3) renders trees into a string form for printing and control of results
///# Example#
/// ```
/// use RustedCAS::symbolic::symbolic_engine::Expr;
/// use RustedCAS::symbolic::symbolic_engine::Number;
/// let x = Expr::Variable("x".to_string());
/// let expr = x + Expr::Number(Number::Int(2));
/// println!("built expression: {}", expr);
/// // addition compares equal regardless of operand order
/// let mirrored = Expr::Number(Number::Int(2)) + Expr::Variable("x".to_string());
/// assert_eq!(expr, mirrored);
/// ```
pub mod symbolic_engine;
///________________________________________________________________________________________________________________________________________________
/// evaluation of expression trees down to numbers and analytical differentiation
///# Example#
/// ```
/// use RustedCAS::symbolic::symbolic_engine::Expr;
/// use RustedCAS::symbolic::variable_map::VariableMap;
/// let f = Expr::parse_expression("2 + 3 * 4").unwrap();
/// assert_eq!(f.evaluate(None).unwrap(), 14.0);
/// // differentiate with respect to x and evaluate the derivative at x = 3
/// let f = Expr::parse_expression("x^2").unwrap();
/// let df_dx = f.diff("x", None).unwrap().simplify_fully();
/// let mut vm = VariableMap::new();
/// vm.set("x", Expr::Number(3.into()));
/// assert_eq!(df_dx.evaluate(Some(&vm)).unwrap(), 6.0);
/// ```
pub mod symbolic_engine_derivatives;
///________________________________________________________________________________________________________________________________________________
/// bottom-up algebraic simplification of expression trees
///# Example#
/// ```
/// use RustedCAS::symbolic::symbolic_engine::Expr;
/// let e = Expr::parse_expression("0 * x + 2 * 3").unwrap();
/// assert_eq!(e.simplify(), Expr::Number(6.into()));
/// ```
pub mod symbolic_simplify;
///______________________________________________________________________________________________________________________________________________
/// the collection of utility functions mainly for bracket parsing and proceeding
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;
///______________________________________________________________________________________________________________________________________________
/// name -> expression bindings consulted when evaluating or differentiating variables
///# Example#
/// ```
/// use RustedCAS::symbolic::symbolic_engine::Expr;
/// use RustedCAS::symbolic::variable_map::VariableMap;
/// let mut vm = VariableMap::new();
/// vm.set("x", Expr::Number(2.into()));
/// vm.set("y", Expr::parse_expression("x + 1").unwrap());
/// // bindings may refer to other bindings
/// assert_eq!(vm.evaluate("y").unwrap(), 3.0);
/// ```
pub mod variable_map;
