//! # Evaluation and Derivatives Module
//!
//! This module extends the expression tree with the two environment-aware
//! recursive operations: direct numeric evaluation and analytical
//! differentiation.
//!
//! ## Key Methods
//!
//! - `evaluate(vm)` - recursive numeric reduction of a tree, resolving
//!   variables through the supplied [`VariableMap`]
//! - `diff(var, vm)` - analytical derivative with respect to a variable,
//!   built purely syntactically; the result is NOT simplified (call
//!   `simplify`/`simplify_fully` separately if reduction is desired)
//!
//! ## Interesting Code Features
//!
//! 1. **Recursive Differentiation Rules**: exhaustive match statements
//!    implement the product rule, quotient rule and chain rule for every
//!    supported node
//!
//! 2. **Environment Recursion**: a variable other than the differentiation
//!    variable is differentiated through its binding, so bindings defined in
//!    terms of other bindings work transparently; a missing binding is a
//!    `SymbolicError::UnboundVariable`, propagated through every call site
//!
//! 3. **Constant-Exponent Power Rule**: `d(base^exp)` treats the exponent as
//!    differentiation-invariant. The formula is only correct when the
//!    exponent does not depend on the differentiation variable; this is not
//!    detected and e.g. `x^x` silently produces a wrong derivative

use crate::symbolic::errors::{Result, SymbolicError};
use crate::symbolic::symbolic_engine::{Expr, Number};
use crate::symbolic::variable_map::VariableMap;

impl Expr {
    /// DIRECT EXPRESSION EVALUATION

    /// Evaluates the expression tree down to a number.
    ///
    /// Variables are looked up in the supplied environment and their bound
    /// expressions are evaluated recursively in the same environment, so a
    /// binding may refer to other bindings. Division is always real division
    /// and exponentiation goes through `powf`, permitting fractional and
    /// negative exponents.
    ///
    /// # Errors
    /// [`SymbolicError::UnboundVariable`] if a variable is reached and no
    /// environment was supplied, or the environment has no binding for it.
    ///
    /// # Examples
    /// ```rust
    /// use RustedCAS::symbolic::symbolic_engine::Expr;
    /// let f = Expr::parse_expression("2 + 3 * 4").unwrap();
    /// assert_eq!(f.evaluate(None).unwrap(), 14.0);
    /// ```
    pub fn evaluate(&self, vm: Option<&VariableMap>) -> Result<f64> {
        match self {
            Expr::Number(n) => Ok(n.value()),
            Expr::Variable(name) => match vm {
                Some(map) => map.get(name)?.evaluate(vm),
                None => Err(SymbolicError::UnboundVariable(name.clone())),
            },
            Expr::Addition(lhs, rhs) => Ok(lhs.evaluate(vm)? + rhs.evaluate(vm)?),
            Expr::Subtraction(lhs, rhs) => Ok(lhs.evaluate(vm)? - rhs.evaluate(vm)?),
            Expr::Multiplication(lhs, rhs) => Ok(lhs.evaluate(vm)? * rhs.evaluate(vm)?),
            Expr::Division(lhs, rhs) => Ok(lhs.evaluate(vm)? / rhs.evaluate(vm)?),
            Expr::Exponent(base, exp) => Ok(base.evaluate(vm)?.powf(exp.evaluate(vm)?)),
            Expr::AbsoluteValue(value) => Ok(value.evaluate(vm)?.abs()),
            Expr::Sine(value) => Ok(value.evaluate(vm)?.sin()),
            Expr::Cosine(value) => Ok(value.evaluate(vm)?.cos()),
        }
    }

    /// DIFFERENTIATION

    /// Computes the analytical derivative of the expression with respect to a
    /// variable.
    ///
    /// Implements the standard differentiation rules:
    /// - Power rule: d/dx(u^n) = n*u^(n-1)*u' (n treated as a constant)
    /// - Product rule: d/dx(f*g) = f*g' + g*f'
    /// - Quotient rule: d/dx(f/g) = (f'*g - f*g')/g^2
    /// - Chain rule for the unary functions
    ///
    /// The result is purely structural and NOT simplified.
    ///
    /// A variable other than `var` is differentiated through its binding in
    /// the environment; with no environment or no binding this fails with
    /// [`SymbolicError::UnboundVariable`]. Free variables are deliberately
    /// not treated as constants.
    ///
    /// # Examples
    /// ```rust
    /// use RustedCAS::symbolic::symbolic_engine::Expr;
    /// let f = Expr::parse_expression("x^2").unwrap();
    /// let df_dx = f.diff("x", None).unwrap();
    /// println!("df_dx = {}", df_dx);
    /// ```
    pub fn diff(&self, var: &str, vm: Option<&VariableMap>) -> Result<Expr> {
        match self {
            Expr::Number(_) => Ok(Expr::Number(Number::Int(0))),
            Expr::Variable(name) => {
                if name == var {
                    Ok(Expr::Number(Number::Int(1)))
                } else {
                    match vm {
                        Some(map) => map.get(name)?.diff(var, vm),
                        None => Err(SymbolicError::UnboundVariable(name.clone())),
                    }
                }
            }
            Expr::Addition(lhs, rhs) => Ok(Expr::Addition(
                Box::new(lhs.diff(var, vm)?),
                Box::new(rhs.diff(var, vm)?),
            )),
            Expr::Subtraction(lhs, rhs) => Ok(Expr::Subtraction(
                Box::new(lhs.diff(var, vm)?),
                Box::new(rhs.diff(var, vm)?),
            )),
            Expr::Multiplication(lhs, rhs) => Ok(Expr::Addition(
                Box::new(Expr::Multiplication(
                    lhs.clone(),
                    Box::new(rhs.diff(var, vm)?),
                )),
                Box::new(Expr::Multiplication(
                    rhs.clone(),
                    Box::new(lhs.diff(var, vm)?),
                )),
            )),
            Expr::Division(lhs, rhs) => Ok(Expr::Division(
                Box::new(Expr::Subtraction(
                    Box::new(Expr::Multiplication(
                        Box::new(lhs.diff(var, vm)?),
                        rhs.clone(),
                    )),
                    Box::new(Expr::Multiplication(
                        lhs.clone(),
                        Box::new(rhs.diff(var, vm)?),
                    )),
                )),
                Box::new(Expr::Exponent(
                    rhs.clone(),
                    Box::new(Expr::Number(Number::Int(2))),
                )),
            )),
            // generalized power rule restricted to the constant-exponent
            // case: wrong (and undetected) when the exponent depends on `var`
            Expr::Exponent(base, exp) => Ok(Expr::Multiplication(
                Box::new(Expr::Multiplication(
                    exp.clone(),
                    Box::new(Expr::Exponent(
                        base.clone(),
                        Box::new(Expr::Subtraction(
                            exp.clone(),
                            Box::new(Expr::Number(Number::Int(1))),
                        )),
                    )),
                )),
                Box::new(base.diff(var, vm)?),
            )),
            // d|v| = |v|/v * v', undefined at v = 0
            Expr::AbsoluteValue(value) => Ok(Expr::Multiplication(
                Box::new(Expr::Division(
                    Box::new(Expr::AbsoluteValue(value.clone())),
                    value.clone(),
                )),
                Box::new(value.diff(var, vm)?),
            )),
            Expr::Sine(value) => Ok(Expr::Multiplication(
                Box::new(Expr::Cosine(value.clone())),
                Box::new(value.diff(var, vm)?),
            )),
            Expr::Cosine(value) => Ok(Expr::Subtraction(
                Box::new(Expr::Number(Number::Int(0))),
                Box::new(Expr::Multiplication(
                    Box::new(Expr::Sine(value.clone())),
                    Box::new(value.diff(var, vm)?),
                )),
            )),
        }
    } // end of diff
}
