use super::{ChromeMode, FormState, InputFormat, OutputFormat, PermissionMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Bare argument, no leading flag. Emitted directly after the executable.
    Positional,
    /// Boolean switch; the flag token alone.
    Flag,
    /// Flag followed by a value token. List values repeat the pair.
    Valued,
}

#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub name: &'static str,
    pub flag: &'static str,
    pub kind: OptionKind,
}

const fn opt(name: &'static str, flag: &'static str, kind: OptionKind) -> OptionSpec {
    OptionSpec { name, flag, kind }
}

/// Canonical option table. Emission order is table order, so the preview is
/// reproducible no matter how the form was filled in.
pub const OPTIONS: &[OptionSpec] = &[
    opt("prompt", "", OptionKind::Positional),
    opt("model", "--model", OptionKind::Valued),
    opt("fallback-model", "--fallback-model", OptionKind::Valued),
    opt("continue", "-c", OptionKind::Flag),
    opt("resume", "-r", OptionKind::Valued),
    opt("fork-session", "--fork-session", OptionKind::Flag),
    opt("session-id", "--session-id", OptionKind::Valued),
    opt("agent", "--agent", OptionKind::Valued),
    opt("agents", "--agents", OptionKind::Valued),
    opt("tools", "--tools", OptionKind::Valued),
    opt("allowed-tools", "--allowedTools", OptionKind::Valued),
    opt("disallowed-tools", "--disallowedTools", OptionKind::Valued),
    opt(
        "disable-slash-commands",
        "--disable-slash-commands",
        OptionKind::Flag,
    ),
    opt("system-prompt", "--system-prompt", OptionKind::Valued),
    opt(
        "append-system-prompt",
        "--append-system-prompt",
        OptionKind::Valued,
    ),
    opt("print", "-p", OptionKind::Flag),
    opt("input-format", "--input-format", OptionKind::Valued),
    opt("output-format", "--output-format", OptionKind::Valued),
    opt("json-schema", "--json-schema", OptionKind::Valued),
    opt(
        "include-partial-messages",
        "--include-partial-messages",
        OptionKind::Flag,
    ),
    opt(
        "replay-user-messages",
        "--replay-user-messages",
        OptionKind::Flag,
    ),
    opt("mcp-config", "--mcp-config", OptionKind::Valued),
    opt("strict-mcp-config", "--strict-mcp-config", OptionKind::Flag),
    opt("plugin-dir", "--plugin-dir", OptionKind::Valued),
    opt("permission-mode", "--permission-mode", OptionKind::Valued),
    opt(
        "allow-dangerously-skip-permissions",
        "--allow-dangerously-skip-permissions",
        OptionKind::Flag,
    ),
    opt(
        "dangerously-skip-permissions",
        "--dangerously-skip-permissions",
        OptionKind::Flag,
    ),
    opt("add-dir", "--add-dir", OptionKind::Valued),
    opt("file", "--file", OptionKind::Valued),
    opt("max-budget-usd", "--max-budget-usd", OptionKind::Valued),
    opt("debug", "--debug", OptionKind::Valued),
    opt("debug-file", "--debug-file", OptionKind::Valued),
    opt("verbose", "--verbose", OptionKind::Flag),
    opt("chrome", "--chrome", OptionKind::Flag),
    opt("no-chrome", "--no-chrome", OptionKind::Flag),
    opt("ide", "--ide", OptionKind::Flag),
    opt("settings", "--settings", OptionKind::Valued),
    opt("setting-sources", "--setting-sources", OptionKind::Valued),
    opt("betas", "--betas", OptionKind::Valued),
    opt(
        "no-session-persistence",
        "--no-session-persistence",
        OptionKind::Flag,
    ),
];

/// Current value of one table row. `Unset` covers empty strings and
/// enumerations sitting at their default; those rows emit nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Unset,
    Bool(bool),
    Text(String),
    List(Vec<String>),
}

fn text(value: &str) -> OptionValue {
    if value.is_empty() {
        OptionValue::Unset
    } else {
        OptionValue::Text(value.to_string())
    }
}

impl FormState {
    /// Look up the current value for a row of [`OPTIONS`]. Per-option policy
    /// (default suppression, list joining, enum spelling) lives here so the
    /// builder itself stays a plain loop over the table.
    pub fn value_of(&self, name: &str) -> OptionValue {
        match name {
            "prompt" => text(&self.prompt),
            "model" => text(&self.model),
            "fallback-model" => text(&self.fallback_model),
            "continue" => OptionValue::Bool(self.continue_session),
            "resume" => text(&self.resume),
            "fork-session" => OptionValue::Bool(self.fork_session),
            "session-id" => text(&self.session_id),
            "agent" => text(&self.agent),
            "agents" => text(&self.agents),
            "tools" => text(&self.tools),
            "allowed-tools" => text(&self.allowed_tools),
            "disallowed-tools" => text(&self.disallowed_tools),
            "disable-slash-commands" => OptionValue::Bool(self.disable_slash_commands),
            "system-prompt" => text(&self.system_prompt),
            "append-system-prompt" => text(&self.append_system_prompt),
            "print" => OptionValue::Bool(self.print_mode),
            "input-format" => match self.input_format {
                InputFormat::Text => OptionValue::Unset,
                other => OptionValue::Text(other.to_string()),
            },
            "output-format" => match self.output_format {
                OutputFormat::Text => OptionValue::Unset,
                other => OptionValue::Text(other.to_string()),
            },
            "json-schema" => text(&self.json_schema),
            "include-partial-messages" => OptionValue::Bool(self.include_partial_messages),
            "replay-user-messages" => OptionValue::Bool(self.replay_user_messages),
            "mcp-config" => text(&self.mcp_config),
            "strict-mcp-config" => OptionValue::Bool(self.strict_mcp_config),
            "plugin-dir" => OptionValue::List(self.plugin_dirs.clone()),
            "permission-mode" => match self.permission_mode {
                PermissionMode::Default => OptionValue::Unset,
                other => OptionValue::Text(other.to_string()),
            },
            "allow-dangerously-skip-permissions" => {
                OptionValue::Bool(self.allow_skip_permissions)
            }
            "dangerously-skip-permissions" => OptionValue::Bool(self.skip_permissions),
            "add-dir" => OptionValue::List(self.add_dirs.clone()),
            "file" => text(&self.file_specs),
            "max-budget-usd" => text(&self.max_budget_usd),
            "debug" => text(&self.debug_filter),
            "debug-file" => text(&self.debug_file),
            "verbose" => OptionValue::Bool(self.verbose),
            "chrome" => OptionValue::Bool(self.chrome == ChromeMode::Enabled),
            "no-chrome" => OptionValue::Bool(self.chrome == ChromeMode::Disabled),
            "ide" => OptionValue::Bool(self.ide),
            "settings" => text(&self.settings),
            "setting-sources" => {
                if self.setting_sources.is_empty() {
                    OptionValue::Unset
                } else {
                    let joined = self
                        .setting_sources
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(",");
                    OptionValue::Text(joined)
                }
            }
            "betas" => text(&self.betas),
            "no-session-persistence" => OptionValue::Bool(self.no_session_persistence),
            _ => OptionValue::Unset,
        }
    }
}
