use crate::symbolic::errors::{Result, SymbolicError};
use crate::symbolic::symbolic_engine::{Expr, Number};
use crate::symbolic::utils::{find_tier_split, strip_whitespace, wrapped_in_parens};
use log::{debug, trace};

/// a module turns a String expression into a symbolic expression
///# Example
/// ```
/// use RustedCAS::symbolic::symbolic_engine::Expr;
/// let input = "(x + y) * z";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// ```
//                  search recursion diagram
//                "y^2+x*3-1"                       |
//                |       left  | right            |
//                |________________________________|
//                |           split by  +          |
//                |________________________________|
//                |       y^2   |     x*3-1        |
//                |       |     |          |       |
//                |_____ \|/    |          |       |
//                |     split by^          |       |
//                |_______________________\|/______|
//                |       y  |  2  | split by -    |
//                |_________Ok_____|_______________|
//                |             x*3     |   1      |
//                |__________________________Ok____|
//                  etc...
//
// Each precedence tier is scanned left to right at bracket depth zero and the
// string is split at the FIRST operator character of that tier. This makes a
// same-tier chain group to the right: "2-3+4" parses as 2 - (3 + 4). The
// grouping is kept for compatibility with existing callers and fixtures; the
// consequences for '-' and '/' chains are pinned down by tests.

/// Operator sets in reverse order of operation precedence: the loosest
/// binding tier is split first.
const OPERATOR_TIERS: [&[char]; 3] = [&['+', '-'], &['*', '/'], &['^']];

pub fn parse_expression_func(input: &str) -> Result<Expr> {
    let text = strip_whitespace(input);
    parse_fragment(&text)
}

fn parse_fragment(text: &str) -> Result<Expr> {
    if text.is_empty() {
        return Err(SymbolicError::MalformedExpression(text.to_string()));
    }

    // A literal wins before any operator scan so that signed numbers like
    // "-5" are not split at their sign.
    if let Some(number) = parse_number(text) {
        trace!("found constant: {}", number);
        return Ok(Expr::Number(number));
    }

    for operators in OPERATOR_TIERS {
        if let Some((pos, op)) = find_tier_split(text, operators) {
            let left = &text[..pos];
            let right = &text[pos + 1..];
            debug!("SIGN '{}' found at position {}: left: {}, right: {}", op, pos, left, right);
            let lhs = parse_fragment(left)?;
            let rhs = parse_fragment(right)?;
            return Ok(match op {
                '+' => Expr::Addition(lhs.boxed(), rhs.boxed()),
                '-' => Expr::Subtraction(lhs.boxed(), rhs.boxed()),
                '*' => Expr::Multiplication(lhs.boxed(), rhs.boxed()),
                '/' => Expr::Division(lhs.boxed(), rhs.boxed()),
                '^' => Expr::Exponent(lhs.boxed(), rhs.boxed()),
                _ => unreachable!(),
            });
        }
    }

    if wrapped_in_parens(text) {
        trace!("found expression that is all in brackets: {}", text);
        return parse_fragment(&text[1..text.len() - 1]);
    }

    if text.chars().all(|c| c.is_ascii_alphabetic()) {
        trace!("found variable: {}", text);
        return Ok(Expr::Variable(text.to_string()));
    }

    Err(SymbolicError::MalformedExpression(text.to_string()))
}

// integer representation iff the text itself is an integer literal, so "2"
// stays an integer while "2.0" becomes a float
fn parse_number(text: &str) -> Option<Number> {
    if let Ok(n) = text.parse::<i64>() {
        return Some(Number::Int(n));
    }
    text.parse::<f64>().ok().map(Number::Float)
}

impl Expr {
    /// Parses a mathematical expression from string representation.
    ///
    /// Converts infix arithmetic notation into a symbolic expression tree.
    /// Whitespace is insignificant. Supports `+ - * / ^` with parentheses
    /// overriding precedence; a run of alphabetic characters is a variable
    /// name; a numeric literal (optionally signed, optionally with a decimal
    /// point) is a constant. Anything else fails with
    /// [`SymbolicError::MalformedExpression`].
    pub fn parse_expression(input: &str) -> Result<Expr> {
        parse_expression_func(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_constant() {
        let expr = parse_expression_func("42").unwrap();
        assert_eq!(expr, Expr::Number(Number::Int(42)));
    }

    #[test]
    fn test_parse_integer_vs_float_representation() {
        assert!(matches!(
            parse_expression_func("2").unwrap(),
            Expr::Number(Number::Int(2))
        ));
        assert!(matches!(
            parse_expression_func("2.0").unwrap(),
            Expr::Number(Number::Float(_))
        ));
        assert_eq!(parse_expression_func("2.5").unwrap(), Expr::Number(Number::Float(2.5)));
    }

    #[test]
    fn test_parse_signed_number() {
        let expr = parse_expression_func("-5").unwrap();
        assert_eq!(expr, Expr::Number(Number::Int(-5)));
    }

    #[test]
    fn test_parse_variable() {
        let expr = parse_expression_func("x").unwrap();
        assert_eq!(expr, Expr::Variable("x".to_string()));
    }

    #[test]
    fn test_parse_multi_letter_variable() {
        let expr = parse_expression_func("velocity").unwrap();
        assert_eq!(expr, Expr::Variable("velocity".to_string()));
    }

    #[test]
    fn test_parse_addition() {
        let expr = parse_expression_func("x + 2").unwrap();
        assert_eq!(
            expr,
            Expr::Addition(
                Box::new(Expr::Variable("x".to_string())),
                Box::new(Expr::Number(Number::Int(2)))
            )
        );
    }

    #[test]
    fn test_parse_subtraction() {
        let expr = parse_expression_func("x - 2").unwrap();
        assert_eq!(
            expr,
            Expr::Subtraction(
                Box::new(Expr::Variable("x".to_string())),
                Box::new(Expr::Number(Number::Int(2)))
            )
        );
    }

    #[test]
    fn test_parse_multiplication() {
        let expr = parse_expression_func("x * 2").unwrap();
        assert_eq!(
            expr,
            Expr::Multiplication(
                Box::new(Expr::Variable("x".to_string())),
                Box::new(Expr::Number(Number::Int(2)))
            )
        );
    }

    #[test]
    fn test_parse_division() {
        let expr = parse_expression_func("x / 2").unwrap();
        assert_eq!(
            expr,
            Expr::Division(
                Box::new(Expr::Variable("x".to_string())),
                Box::new(Expr::Number(Number::Int(2)))
            )
        );
    }

    #[test]
    fn test_parse_power() {
        let expr = parse_expression_func("x^2").unwrap();
        assert_eq!(
            expr,
            Expr::Exponent(
                Box::new(Expr::Variable("x".to_string())),
                Box::new(Expr::Number(Number::Int(2)))
            )
        );
    }

    #[test]
    fn test_precedence_tiers() {
        // the additive tier splits before the multiplicative one
        let expr = parse_expression_func("2+3*4").unwrap();
        assert_eq!(
            expr,
            Expr::Addition(
                Box::new(Expr::Number(Number::Int(2))),
                Box::new(Expr::Multiplication(
                    Box::new(Expr::Number(Number::Int(3))),
                    Box::new(Expr::Number(Number::Int(4)))
                ))
            )
        );
    }

    #[test]
    fn test_parse_expression_with_brackets() {
        let expr = parse_expression_func("(x + y) * z").unwrap();
        assert_eq!(
            expr,
            Expr::Multiplication(
                Box::new(Expr::Addition(
                    Box::new(Expr::Variable("x".to_string())),
                    Box::new(Expr::Variable("y".to_string()))
                )),
                Box::new(Expr::Variable("z".to_string()))
            )
        );
    }

    #[test]
    fn test_parse_complex_expression() {
        let expr = parse_expression_func("(x + y) * (z - 2) / w").unwrap();
        let x = Box::new(Expr::Variable("x".to_string()));
        let y = Box::new(Expr::Variable("y".to_string()));
        let z = Box::new(Expr::Variable("z".to_string()));
        let w = Box::new(Expr::Variable("w".to_string()));
        let c = Box::new(Expr::Number(Number::Int(2)));
        // the first '*' at depth zero splits before the '/'
        let z_minus_c = Box::new(Expr::Subtraction(z, c));
        let z_minus_c_div_w = Box::new(Expr::Division(z_minus_c, w));
        let x_plus_y = Box::new(Expr::Addition(x, y));
        let expected = Expr::Multiplication(x_plus_y, z_minus_c_div_w);
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_leftmost_split_grouping() {
        // a same-tier chain groups to the right: 2+3-4 is 2 + (3 - 4)
        let expr = parse_expression_func("2+3-4").unwrap();
        assert_eq!(
            expr,
            Expr::Addition(
                Box::new(Expr::Number(Number::Int(2))),
                Box::new(Expr::Subtraction(
                    Box::new(Expr::Number(Number::Int(3))),
                    Box::new(Expr::Number(Number::Int(4)))
                ))
            )
        );
    }

    #[test]
    fn test_nested_brackets() {
        let expr = parse_expression_func("((x))").unwrap();
        assert_eq!(expr, Expr::Variable("x".to_string()));
    }

    #[test]
    fn test_whitespace_is_insignificant() {
        let spaced = parse_expression_func(" x +\t2 ").unwrap();
        let dense = parse_expression_func("x+2").unwrap();
        assert_eq!(spaced, dense);
    }

    #[test]
    fn test_invalid_expression() {
        let result = parse_expression_func("(x +");
        assert!(result.is_err());
    }

    #[test]
    fn test_unmatched_brackets() {
        let result = parse_expression_func("(x + y");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            parse_expression_func(""),
            Err(SymbolicError::MalformedExpression(String::new()))
        );
    }

    #[test]
    fn test_garbage_input() {
        let result = parse_expression_func("2$3");
        assert!(matches!(result, Err(SymbolicError::MalformedExpression(_))));
    }

    #[test]
    fn test_function_syntax_is_not_part_of_the_grammar() {
        // sine nodes are built through the API; "sin(x)" as text is not a
        // number, variable, bracketed group or operator expression
        let result = parse_expression_func("sin(x)");
        assert!(matches!(result, Err(SymbolicError::MalformedExpression(_))));
    }

    #[test]
    fn test_multiple_operators() {
        let result = parse_expression_func("x^2 - x - 1").unwrap();
        let x = Box::new(Expr::Variable("x".to_string()));
        // first '-' at depth zero splits the whole chain
        let to_check = Expr::Subtraction(
            Box::new(Expr::Exponent(x.clone(), Box::new(Expr::Number(Number::Int(2))))),
            Box::new(Expr::Subtraction(x, Box::new(Expr::Number(Number::Int(1))))),
        );
        assert_eq!(result, to_check);
    }
}
