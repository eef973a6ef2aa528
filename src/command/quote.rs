//! Display quoting for the command preview. The launcher never sees these
//! strings; it gets the raw token array.

/// Quote a token for the current platform's shell display.
pub fn quote(token: &str) -> String {
    #[cfg(windows)]
    {
        quote_windows(token)
    }
    #[cfg(not(windows))]
    {
        quote_unix(token)
    }
}

/// POSIX single-quote style. Tokens made of safe characters pass through
/// bare; everything else is single-quoted with embedded quotes escaped.
pub fn quote_unix(token: &str) -> String {
    if token.is_empty() {
        return "''".to_string();
    }
    if token.chars().all(is_safe_unix) {
        return token.to_string();
    }
    format!("'{}'", token.replace('\'', "'\\''"))
}

fn is_safe_unix(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '-' | '_' | '~' | ':' | '=' | '@' | '%' | '+' | ',')
}

/// cmd.exe style: double quotes when the token contains whitespace, quotes,
/// or cmd metacharacters, with embedded `"` escaped.
pub fn quote_windows(token: &str) -> String {
    if token.is_empty() {
        return "\"\"".to_string();
    }
    let needs_quotes = token
        .chars()
        .any(|c| matches!(c, ' ' | '\t' | '\n' | '"' | '&' | '|' | '<' | '>' | '^'));
    if needs_quotes {
        format!("\"{}\"", token.replace('"', "\\\""))
    } else {
        token.to_string()
    }
}
