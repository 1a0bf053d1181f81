//! # Symbolic Expression Simplification Module
//!
//! Algebraic simplification of expression trees by local rewrite rules.
//!
//! ## Simplification Strategy
//!
//! `simplify` is a single bottom-up pass: children are simplified first, then
//! the node's own rules are applied once. The result is NOT iterated to a
//! fixed point automatically; a rule may expose a new folding opportunity
//! (e.g. `x^2 * x^3` becomes `x^(2+3)`, whose exponent only folds on the next
//! pass). Callers wanting maximal reduction use `simplify_fully`, which
//! repeats the pass until the tree stops changing.
//!
//! ## Rules applied per node
//!
//! 1. **Constant Folding**: arithmetic between two constants is evaluated,
//!    keeping integers integer where possible
//! 2. **Identities**: `0 * x = 0`, `1 * x = x`, `0 / x = 0`, `x / 1 = x`,
//!    `x^0 = 1`, `x^1 = x`, `0^x = 0`
//! 3. **Fraction Rules**: `x/a + y/a = (x+y)/a` (and for subtraction),
//!    `y * (x/y) = x`, `(x*y)/y = x`
//! 4. **Power Rules**: `x^a * x^b = x^(a+b)`, `x^a / x^b = x^(a-b)`,
//!    `(x^a)^b = x^(a*b)`
//! 5. **Absolute Values**: `|c| = c` for non-negative constants and
//!    `|x^even| = x^even`; negative constants are left alone
//!
//! Sine and cosine have no rewrite rules of their own; only their children
//! are simplified.
//!
//! Rewriting is purely functional: a new tree is returned and the input is
//! never mutated, so simplifying one reference can not change the observable
//! value of another reference that happens to share structure.

use crate::symbolic::symbolic_engine::Expr;
use log::trace;

/// Operand matching used by the fraction and power rules: structural equality
/// first, then a numeric fallback when both sides evaluate without an
/// environment. An unbound variable on either side means "no match", never an
/// error, since simplification is total.
fn operands_match(a: &Expr, b: &Expr) -> bool {
    if a == b {
        return true;
    }
    match (a.evaluate(None), b.evaluate(None)) {
        (Ok(x), Ok(y)) => x == y,
        _ => false,
    }
}

impl Expr {
    //___________________________________SIMPLIFICATION____________________________________

    /// One bottom-up simplification pass.
    ///
    /// Children are simplified first, then this node's rewrite rules are
    /// applied once. Returns a new tree; the receiver is left untouched.
    /// Not guaranteed to reach a fixed point in a single call - see
    /// [`Expr::simplify_fully`].
    pub fn simplify(&self) -> Expr {
        match self {
            Expr::Number(_) | Expr::Variable(_) => self.clone(),
            Expr::Addition(lhs, rhs) => {
                let lhs = lhs.simplify();
                let rhs = rhs.simplify();
                match (&lhs, &rhs) {
                    // (a) + (b) = (a + b)
                    (Expr::Number(a), Expr::Number(b)) => Expr::Number(*a + *b),
                    // x/a + y/a = (x + y)/a
                    (Expr::Division(n1, d1), Expr::Division(n2, d2))
                        if operands_match(d1, d2) =>
                    {
                        Expr::Division(
                            Box::new(Expr::Addition(n1.clone(), n2.clone())),
                            d1.clone(),
                        )
                    }
                    _ => Expr::Addition(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Subtraction(lhs, rhs) => {
                let lhs = lhs.simplify();
                let rhs = rhs.simplify();
                match (&lhs, &rhs) {
                    // (a) - (b) = (a - b)
                    (Expr::Number(a), Expr::Number(b)) => Expr::Number(*a - *b),
                    // x/a - y/a = (x - y)/a
                    (Expr::Division(n1, d1), Expr::Division(n2, d2))
                        if operands_match(d1, d2) =>
                    {
                        Expr::Division(
                            Box::new(Expr::Subtraction(n1.clone(), n2.clone())),
                            d1.clone(),
                        )
                    }
                    _ => Expr::Subtraction(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Multiplication(lhs, rhs) => {
                let lhs = lhs.simplify();
                let rhs = rhs.simplify();
                match (&lhs, &rhs) {
                    // 0 * x = 0, x * 0 = 0
                    _ if lhs == 0.0 || rhs == 0.0 => Expr::Number(0.into()),
                    // 1 * x = x, x * 1 = x
                    _ if lhs == 1.0 => rhs,
                    _ if rhs == 1.0 => lhs,
                    // (a) * (b) = (a * b)
                    (Expr::Number(a), Expr::Number(b)) => Expr::Number(*a * *b),
                    // y * (x/y) = x, checked both orderings
                    (Expr::Division(num, den), other) | (other, Expr::Division(num, den))
                        if operands_match(den, other) =>
                    {
                        (**num).clone()
                    }
                    // x^a * x^b = x^(a+b)
                    (Expr::Exponent(b1, e1), Expr::Exponent(b2, e2))
                        if operands_match(b1, b2) =>
                    {
                        Expr::Exponent(b1.clone(), Box::new(Expr::Addition(e1.clone(), e2.clone())))
                    }
                    _ => Expr::Multiplication(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Division(lhs, rhs) => {
                let lhs = lhs.simplify();
                let rhs = rhs.simplify();
                match (&lhs, &rhs) {
                    // 0 / x = 0
                    _ if lhs == 0.0 => Expr::Number(0.into()),
                    // x / 1 = x
                    _ if rhs == 1.0 => lhs,
                    // (a) / (b) = (a / b); division by a constant zero stays symbolic
                    (Expr::Number(a), Expr::Number(b)) if *b != 0.0 => Expr::Number(*a / *b),
                    // (x*y)/y = x, whichever factor matches
                    (Expr::Multiplication(f1, f2), den) if operands_match(f1, den) => {
                        (**f2).clone()
                    }
                    (Expr::Multiplication(f1, f2), den) if operands_match(f2, den) => {
                        (**f1).clone()
                    }
                    // x^a / x^b = x^(a-b)
                    (Expr::Exponent(b1, e1), Expr::Exponent(b2, e2))
                        if operands_match(b1, b2) =>
                    {
                        Expr::Exponent(
                            b1.clone(),
                            Box::new(Expr::Subtraction(e1.clone(), e2.clone())),
                        )
                    }
                    _ => Expr::Division(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Exponent(base, exp) => {
                let base = base.simplify();
                let exp = exp.simplify();
                match (&base, &exp) {
                    // 0 ^ x = 0
                    _ if base == 0.0 => Expr::Number(0.into()),
                    // x ^ 0 = 1
                    _ if exp == 0.0 => Expr::Number(1.into()),
                    // x ^ 1 = x
                    _ if exp == 1.0 => base,
                    // (a) ^ (b) = (a ^ b)
                    (Expr::Number(a), Expr::Number(b)) => Expr::Number(a.pow(*b)),
                    // (x^a)^b = x^(a*b)
                    (Expr::Exponent(inner_base, inner_exp), _) => Expr::Exponent(
                        inner_base.clone(),
                        Box::new(Expr::Multiplication(inner_exp.clone(), Box::new(exp))),
                    ),
                    _ => Expr::Exponent(Box::new(base), Box::new(exp)),
                }
            }
            Expr::AbsoluteValue(value) => {
                let value = value.simplify();
                // |c| = c for non-negative constants; even powers are never
                // negative, so the wrapper drops there too
                let collapses = match &value {
                    Expr::Number(n) => n.is_non_negative(),
                    Expr::Exponent(_, exp) => {
                        matches!(exp.as_ref(), Expr::Number(n) if n.is_even())
                    }
                    _ => false,
                };
                if collapses {
                    value
                } else {
                    Expr::AbsoluteValue(Box::new(value))
                }
            }
            Expr::Sine(value) => Expr::Sine(Box::new(value.simplify())),
            Expr::Cosine(value) => Expr::Cosine(Box::new(value.simplify())),
        }
    }

    /// Repeats [`Expr::simplify`] until the tree stops changing.
    ///
    /// Every rewrite rule either folds constants or removes structure, so the
    /// fixed point is reached after a small number of passes for any tree the
    /// rules make progress on.
    pub fn simplify_fully(&self) -> Expr {
        let mut current = self.simplify();
        loop {
            let next = current.simplify();
            if next == current {
                return current;
            }
            trace!("extra simplification pass: {} -> {}", current, next);
            current = next;
        }
    }
}
