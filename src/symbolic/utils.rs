// the collection of utility functions for bracket-aware string scanning

/// Removes every whitespace character; whitespace is insignificant to the
/// parser and is stripped before any scanning happens.
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

// find the position of the first char outside brackets that belongs to the
// given operator set
pub fn find_tier_split(input: &str, operators: &[char]) -> Option<(usize, char)> {
    let mut depth: i32 = 0;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ if depth == 0 && operators.contains(&c) => return Some((i, c)),
            _ => {}
        }
    }
    None
}

/// Whether the whole string is wrapped in one matching pair of outer
/// parentheses. "(a)+(b)" starts with '(' and ends with ')' but the opening
/// bracket closes early, so it does not count.
pub fn wrapped_in_parens(input: &str) -> bool {
    if !(input.starts_with('(') && input.ends_with(')')) {
        return false;
    }
    let mut depth: i32 = 0;
    for (i, c) in input.char_indices() {
        if c == '(' {
            depth += 1;
        } else if c == ')' {
            depth -= 1;
            if depth == 0 {
                return i == input.len() - 1;
            }
        }
    }
    false
}
