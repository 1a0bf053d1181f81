//! # Symbolic Engine Module
//!
//! This module defines the expression tree at the heart of the crate and the
//! operations that do not need an environment: construction, structural
//! equality, rendering and introspection.
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! The core symbolic expression type supporting:
//! - **Variables**: `Variable(String)` - symbolic variables like "x", "y"
//! - **Constants**: `Number(Number)` - integer or floating constants
//! - **Operations**: `Addition`, `Subtraction`, `Multiplication`, `Division`,
//!   `Exponent` - binary arithmetic with two boxed children
//! - **Functions**: `AbsoluteValue`, `Sine`, `Cosine` - unary functions with
//!   one boxed child
//!
//! ### Key Methods
//! - `Symbols(symbols: &str)` - Create multiple variables from comma-separated string
//! - `evaluate(vm)` - numeric reduction (see symbolic_engine_derivatives)
//! - `diff(var, vm)` - analytical differentiation (same module)
//! - `simplify()` / `simplify_fully()` - algebraic simplification
//! - `substitute_variable()` - replace a variable with an expression
//!
//! ## Interesting Code Features
//!
//! 1. **Recursive Expression Tree**: Uses Box<Expr> for nested expressions,
//!    enabling arbitrarily deep mathematical structures; recursion depth of
//!    every tree walk equals tree depth
//!
//! 2. **Operator Overloading**: Implements std::ops traits (Add, Sub, Mul, Div)
//!    for natural mathematical syntax: `x + y * z`
//!
//! 3. **Commutative Equality**: `Addition` and `Multiplication` compare equal
//!    regardless of operand order, and `Number` nodes compare equal to bare
//!    numeric literals, which the simplification rules rely on
//!
//! 4. **Integer/Float Duality**: the `Number` payload keeps integer constants
//!    as integers through folding, falling back to floats where the host
//!    arithmetic demands it (division, overflow, fractional exponents)

use std::fmt;

/// Numeric payload of [`Expr::Number`]: an integer or a floating value.
///
/// Equality is by magnitude across the two representations, so
/// `Int(2) == Float(2.0)`, and both compare equal to bare `i64`/`f64` values.
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Numeric value of the constant regardless of representation.
    pub fn value(&self) -> f64 {
        match self {
            Number::Int(n) => *n as f64,
            Number::Float(x) => *x,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    pub fn is_non_negative(&self) -> bool {
        self.value() >= 0.0
    }

    /// True for even integer-valued constants, `4` as well as `4.0`.
    pub fn is_even(&self) -> bool {
        let v = self.value();
        v.fract() == 0.0 && (v as i64) % 2 == 0
    }

    /// Raises self to the power of `rhs`. Non-negative integer exponents on
    /// integer bases stay integer when the result fits, everything else goes
    /// through `f64::powf`.
    pub fn pow(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) if b >= 0 => u32::try_from(b)
                .ok()
                .and_then(|e| a.checked_pow(e))
                .map(Number::Int)
                .unwrap_or(Number::Float((a as f64).powf(b as f64))),
            _ => Number::Float(self.value().powf(rhs.value())),
        }
    }
}

impl std::ops::Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_add(b)
                .map(Number::Int)
                .unwrap_or(Number::Float(a as f64 + b as f64)),
            _ => Number::Float(self.value() + rhs.value()),
        }
    }
}

impl std::ops::Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_sub(b)
                .map(Number::Int)
                .unwrap_or(Number::Float(a as f64 - b as f64)),
            _ => Number::Float(self.value() - rhs.value()),
        }
    }
}

impl std::ops::Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_mul(b)
                .map(Number::Int)
                .unwrap_or(Number::Float(a as f64 * b as f64)),
            _ => Number::Float(self.value() * rhs.value()),
        }
    }
}

impl std::ops::Div for Number {
    type Output = Number;

    // always real division, never truncating integer division
    fn div(self, rhs: Number) -> Number {
        Number::Float(self.value() / rhs.value())
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            _ => self.value() == other.value(),
        }
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        self.value() == *other
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Number::Int(n) => n == other,
            Number::Float(x) => *x == *other as f64,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

/// Core symbolic expression enum representing mathematical expressions as an
/// abstract syntax tree.
///
/// Each variant represents a different type of mathematical construct, from
/// constants and variables to nested operations. The enum uses Box<Expr> for
/// recursive structures, allowing arbitrarily deep expression trees. Trees own
/// their children exclusively; every operation that rewrites a tree returns a
/// new one and never mutates nodes another reference observes.
///
/// # Examples
/// ```rust
/// use RustedCAS::symbolic::symbolic_engine::{Expr, Number};
/// let x = Expr::Variable("x".to_string());
/// let expr = Expr::Addition(Box::new(x), Box::new(Expr::Number(Number::Int(2))));
/// ```
#[derive(Clone, Debug)]
pub enum Expr {
    /// Numerical constant, integer or floating
    Number(Number),
    /// Symbolic variable with a name (e.g., "x", "y", "velocity")
    Variable(String),
    /// Addition operation: left + right
    Addition(Box<Expr>, Box<Expr>),
    /// Subtraction operation: left - right
    Subtraction(Box<Expr>, Box<Expr>),
    /// Multiplication operation: left * right
    Multiplication(Box<Expr>, Box<Expr>),
    /// Division operation: left / right
    Division(Box<Expr>, Box<Expr>),
    /// Power operation: base ^ exponent
    Exponent(Box<Expr>, Box<Expr>),
    /// Absolute value: |x|
    AbsoluteValue(Box<Expr>),
    /// Sine function: sin(x)
    Sine(Box<Expr>),
    /// Cosine function: cos(x)
    Cosine(Box<Expr>),
}

/// Structural equality. Two nodes are equal iff they are the same variant with
/// pairwise-equal children; for the commutative `Addition` and
/// `Multiplication` the unordered pair of operands must match.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Expr::Number(a), Expr::Number(b)) => a == b,
            (Expr::Variable(a), Expr::Variable(b)) => a == b,
            (Expr::Addition(l1, r1), Expr::Addition(l2, r2))
            | (Expr::Multiplication(l1, r1), Expr::Multiplication(l2, r2)) => {
                (l1 == l2 && r1 == r2) || (l1 == r2 && r1 == l2)
            }
            (Expr::Subtraction(l1, r1), Expr::Subtraction(l2, r2))
            | (Expr::Division(l1, r1), Expr::Division(l2, r2))
            | (Expr::Exponent(l1, r1), Expr::Exponent(l2, r2)) => l1 == l2 && r1 == r2,
            (Expr::AbsoluteValue(a), Expr::AbsoluteValue(b))
            | (Expr::Sine(a), Expr::Sine(b))
            | (Expr::Cosine(a), Expr::Cosine(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq<f64> for Expr {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Expr::Number(n) if *n == *other)
    }
}

impl PartialEq<i64> for Expr {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Expr::Number(n) if *n == *other)
    }
}

/// Display implementation for rendering symbolic expressions.
///
/// Leaves render bare (a `Number` as its value, a `Variable` as its name),
/// every other node as `VariantName(children...)`, except `AbsoluteValue`
/// which renders as `|child|`. Meant for debugging and test fixtures, not for
/// re-parsing.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Addition(lhs, rhs) => write!(f, "Addition({}, {})", lhs, rhs),
            Expr::Subtraction(lhs, rhs) => write!(f, "Subtraction({}, {})", lhs, rhs),
            Expr::Multiplication(lhs, rhs) => write!(f, "Multiplication({}, {})", lhs, rhs),
            Expr::Division(lhs, rhs) => write!(f, "Division({}, {})", lhs, rhs),
            Expr::Exponent(base, exp) => write!(f, "Exponent({}, {})", base, exp),
            Expr::AbsoluteValue(value) => write!(f, "|{}|", value),
            Expr::Sine(value) => write!(f, "Sine({})", value),
            Expr::Cosine(value) => write!(f, "Cosine({})", value),
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Addition(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Subtraction(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Multiplication(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Division(self.boxed(), rhs.boxed())
    }
}

impl std::ops::AddAssign for Expr {
    fn add_assign(&mut self, rhs: Self) {
        *self = Expr::Addition(Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::SubAssign for Expr {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Expr::Subtraction(Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::MulAssign for Expr {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Expr::Multiplication(Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::DivAssign for Expr {
    fn div_assign(&mut self, rhs: Self) {
        *self = Expr::Division(Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Multiplication(Box::new(Expr::Number(Number::Int(-1))), Box::new(self))
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Number(Number::Int(value))
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Number(Number::Float(value))
    }
}

impl Expr {
    /// BASIC FEATURES

    /// Creates multiple symbolic variables from a comma-separated string.
    ///
    /// Parses a string containing variable names separated by commas and
    /// returns a vector of Expr::Variable instances. Whitespace is trimmed.
    ///
    /// # Examples
    /// ```rust
    /// use RustedCAS::symbolic::symbolic_engine::Expr;
    /// let vars = Expr::Symbols("x, y, z");
    /// assert_eq!(vars.len(), 3);
    /// ```
    pub fn Symbols(symbols: &str) -> Vec<Expr> {
        symbols
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| Expr::Variable(s.to_string()))
            .collect()
    }

    /// Convenience method to wrap expression in Box for recursive structures.
    ///
    /// Essential for creating nested expressions since Expr variants use Box<Expr>.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Creates power expression self^rhs.
    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Exponent(self.boxed(), rhs.boxed())
    }

    /// Creates absolute value |self|.
    pub fn abs(self) -> Expr {
        Expr::AbsoluteValue(self.boxed())
    }

    /// Creates sine sin(self).
    pub fn sin(self) -> Expr {
        Expr::Sine(self.boxed())
    }

    /// Creates cosine cos(self).
    pub fn cos(self) -> Expr {
        Expr::Cosine(self.boxed())
    }

    /// Checks if expression is the constant zero (any numeric representation).
    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Number(n) if *n == 0.0)
    }

    /// Checks if expression is the constant one (any numeric representation).
    pub fn is_one(&self) -> bool {
        matches!(self, Expr::Number(n) if *n == 1.0)
    }

    /// check if the expression contains a variable
    pub fn contains_variable(&self, var_name: &str) -> bool {
        match self {
            Expr::Variable(name) => name == var_name,
            Expr::Number(_) => false,
            Expr::Addition(left, right)
            | Expr::Subtraction(left, right)
            | Expr::Multiplication(left, right)
            | Expr::Division(left, right)
            | Expr::Exponent(left, right) => {
                left.contains_variable(var_name) || right.contains_variable(var_name)
            }
            Expr::AbsoluteValue(value) | Expr::Sine(value) | Expr::Cosine(value) => {
                value.contains_variable(var_name)
            }
        }
    }

    /// All variable names appearing in the expression, sorted and deduplicated.
    pub fn variables(&self) -> Vec<String> {
        fn walk(expr: &Expr, out: &mut Vec<String>) {
            match expr {
                Expr::Number(_) => {}
                Expr::Variable(name) => out.push(name.clone()),
                Expr::Addition(left, right)
                | Expr::Subtraction(left, right)
                | Expr::Multiplication(left, right)
                | Expr::Division(left, right)
                | Expr::Exponent(left, right) => {
                    walk(left, out);
                    walk(right, out);
                }
                Expr::AbsoluteValue(value) | Expr::Sine(value) | Expr::Cosine(value) => {
                    walk(value, out)
                }
            }
        }
        let mut vars = Vec::new();
        walk(self, &mut vars);
        vars.sort();
        vars.dedup();
        vars
    }

    /// substitute a variable with an expression
    ///
    /// Recursively replaces every occurrence of `var` with `replacement` and
    /// returns the new tree; the original is left untouched.
    pub fn substitute_variable(&self, var: &str, replacement: &Expr) -> Expr {
        match self {
            Expr::Variable(name) if name == var => replacement.clone(),
            Expr::Number(_) | Expr::Variable(_) => self.clone(),
            Expr::Addition(left, right) => Expr::Addition(
                left.substitute_variable(var, replacement).boxed(),
                right.substitute_variable(var, replacement).boxed(),
            ),
            Expr::Subtraction(left, right) => Expr::Subtraction(
                left.substitute_variable(var, replacement).boxed(),
                right.substitute_variable(var, replacement).boxed(),
            ),
            Expr::Multiplication(left, right) => Expr::Multiplication(
                left.substitute_variable(var, replacement).boxed(),
                right.substitute_variable(var, replacement).boxed(),
            ),
            Expr::Division(left, right) => Expr::Division(
                left.substitute_variable(var, replacement).boxed(),
                right.substitute_variable(var, replacement).boxed(),
            ),
            Expr::Exponent(base, exp) => Expr::Exponent(
                base.substitute_variable(var, replacement).boxed(),
                exp.substitute_variable(var, replacement).boxed(),
            ),
            Expr::AbsoluteValue(value) => {
                Expr::AbsoluteValue(value.substitute_variable(var, replacement).boxed())
            }
            Expr::Sine(value) => Expr::Sine(value.substitute_variable(var, replacement).boxed()),
            Expr::Cosine(value) => {
                Expr::Cosine(value.substitute_variable(var, replacement).boxed())
            }
        }
    }
}

//___________________________________MACROS____________________________________

/// Macro to create symbolic variables from a comma-separated list
/// Usage: symbols!(x, y, z) -> creates variables x, y, z
#[macro_export]
macro_rules! symbols {
    ($($var:ident),+ $(,)?) => {
        {
            let var_names = stringify!($($var),+);
            let vars = Expr::Symbols(var_names);
            let mut iter = vars.into_iter();
            ($(
                {
                    let $var = iter.next().unwrap();
                    $var
                }
            ),+)
        }
    };
}
