//! `--bind NAME=VALUE` argument handling.

use tally::Bindings;

/// Parse one `--bind` entry of the form `x=42`.
///
/// Used as a clap value parser, so the error type is a plain message.
pub fn parse_binding(s: &str) -> Result<(char, i64), String> {
    let Some((name, value)) = s.split_once('=') else {
        return Err(format!("expected NAME=VALUE, got '{s}'"));
    };
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err("variable name is empty".to_string());
    };
    if chars.next().is_some() {
        return Err(format!(
            "variable name must be a single character, got '{name}'"
        ));
    }
    if first == '+' || first == '-' {
        return Err(format!("'{first}' is an operator, not a variable name"));
    }
    let value = value
        .parse::<i64>()
        .map_err(|e| format!("invalid integer '{value}': {e}"))?;
    Ok((first, value))
}

/// Assemble the binding table, rejecting duplicate names.
pub fn build_bindings(pairs: &[(char, i64)]) -> Result<Bindings, String> {
    let mut bindings = Bindings::new();
    for &(name, value) in pairs {
        if bindings.insert(name, value).is_some() {
            return Err(format!("variable '{name}' is bound more than once"));
        }
    }
    Ok(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_bindings() {
        assert_eq!(parse_binding("a=5"), Ok(('a', 5)));
        assert_eq!(parse_binding("Z=-12"), Ok(('Z', -12)));
        assert_eq!(parse_binding("1=10"), Ok(('1', 10)));
    }

    #[test]
    fn rejects_malformed_entries() {
        assert!(parse_binding("a").is_err());
        assert!(parse_binding("=5").is_err());
        assert!(parse_binding("ab=5").is_err());
        assert!(parse_binding("+=1").is_err());
        assert!(parse_binding("a=x").is_err());
    }

    #[test]
    fn rejects_duplicate_names() {
        assert!(build_bindings(&[('a', 1), ('a', 2)]).is_err());
        assert!(build_bindings(&[('a', 1), ('b', 2)]).is_ok());
    }
}
