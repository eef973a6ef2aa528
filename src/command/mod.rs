pub mod quote;

use std::fmt;

use crate::form::FormState;
use crate::form::spec::{OPTIONS, OptionKind, OptionValue};

/// Ordered argv token sequence for one session launch. Tokens are stored
/// unquoted so they can be handed to the process spawner as-is; quoting is
/// applied only by the [`fmt::Display`] preview rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    tokens: Vec<String>,
}

impl CommandLine {
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Token 0, the executable path. `build` always emits it, so the
    /// sequence is never empty.
    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", quote::quote(token))?;
        }
        Ok(())
    }
}

/// Render the form to a command line. Pure and deterministic: the executable
/// first, the trimmed prompt next if present, then every set option in the
/// fixed order of [`OPTIONS`].
pub fn build(executable: &str, form: &FormState) -> CommandLine {
    let mut tokens = vec![executable.to_string()];

    for spec in OPTIONS {
        match (spec.kind, form.value_of(spec.name)) {
            (OptionKind::Positional, OptionValue::Text(value)) => {
                let prompt = value.trim();
                if !prompt.is_empty() {
                    tokens.push(prompt.to_string());
                }
            }
            (OptionKind::Flag, OptionValue::Bool(true)) => {
                tokens.push(spec.flag.to_string());
            }
            (OptionKind::Valued, OptionValue::Text(value)) => {
                tokens.push(spec.flag.to_string());
                tokens.push(value);
            }
            (OptionKind::Valued, OptionValue::List(values)) => {
                for value in values {
                    tokens.push(spec.flag.to_string());
                    tokens.push(value);
                }
            }
            _ => {}
        }
    }

    CommandLine { tokens }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_is_just_the_executable() {
        let command = build("claude", &FormState::default());
        assert_eq!(command.tokens(), ["claude"]);
    }

    #[test]
    fn prompt_precedes_flags() {
        let form = FormState {
            prompt: "fix bug".to_string(),
            model: "opus".to_string(),
            continue_session: true,
            ..FormState::default()
        };
        let command = build("claude", &form);
        assert_eq!(
            command.tokens(),
            ["claude", "fix bug", "--model", "opus", "-c"]
        );
    }

    #[test]
    fn whitespace_only_prompt_is_dropped() {
        let form = FormState {
            prompt: "   ".to_string(),
            ..FormState::default()
        };
        assert_eq!(build("claude", &form).tokens(), ["claude"]);
    }

    #[test]
    fn repeatable_options_emit_one_pair_per_element() {
        let form = FormState {
            add_dirs: vec!["/a".to_string(), "/b".to_string()],
            ..FormState::default()
        };
        let command = build("claude", &form);
        assert_eq!(
            command.tokens(),
            ["claude", "--add-dir", "/a", "--add-dir", "/b"]
        );
    }

    #[test]
    fn preview_quotes_only_tokens_that_need_it() {
        let form = FormState {
            prompt: "hello world".to_string(),
            model: "opus".to_string(),
            ..FormState::default()
        };
        let command = build("claude", &form);
        #[cfg(not(windows))]
        assert_eq!(command.to_string(), "claude 'hello world' --model opus");
        #[cfg(windows)]
        assert_eq!(command.to_string(), "claude \"hello world\" --model opus");
    }
}
