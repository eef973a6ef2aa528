pub mod args;
pub mod spec;

use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

/// Snapshot of every session option the user can set. Field defaults are all
/// empty/false so that an untouched form renders to nothing but the
/// executable. The builder in [`crate::command`] only ever reads this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub prompt: String,
    pub model: String,
    pub fallback_model: String,
    #[serde(rename = "continue")]
    pub continue_session: bool,
    pub resume: String,
    pub fork_session: bool,
    pub session_id: String,
    pub agent: String,
    pub agents: String,
    pub tools: String,
    pub allowed_tools: String,
    pub disallowed_tools: String,
    pub disable_slash_commands: bool,
    pub system_prompt: String,
    pub append_system_prompt: String,
    pub print_mode: bool,
    pub input_format: InputFormat,
    pub output_format: OutputFormat,
    pub json_schema: String,
    pub include_partial_messages: bool,
    pub replay_user_messages: bool,
    pub mcp_config: String,
    pub strict_mcp_config: bool,
    pub plugin_dirs: Vec<String>,
    pub permission_mode: PermissionMode,
    pub allow_skip_permissions: bool,
    pub skip_permissions: bool,
    pub add_dirs: Vec<String>,
    pub file_specs: String,
    pub max_budget_usd: String,
    pub debug_filter: String,
    pub debug_file: String,
    pub verbose: bool,
    pub chrome: ChromeMode,
    pub ide: bool,
    pub settings: String,
    pub setting_sources: Vec<SettingSource>,
    pub betas: String,
    pub no_session_persistence: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum InputFormat {
    #[default]
    Text,
    StreamJson,
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Text => write!(f, "text"),
            InputFormat::StreamJson => write!(f, "stream-json"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    StreamJson,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::StreamJson => write!(f, "stream-json"),
        }
    }
}

// Value spellings follow the target tool (camelCase), both in profiles and
// on the claunch command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum PermissionMode {
    #[default]
    #[value(name = "default")]
    Default,
    #[value(name = "acceptEdits")]
    AcceptEdits,
    #[value(name = "bypassPermissions")]
    BypassPermissions,
    #[value(name = "delegate")]
    Delegate,
    #[value(name = "dontAsk")]
    DontAsk,
    #[value(name = "plan")]
    Plan,
}

impl fmt::Display for PermissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PermissionMode::Default => "default",
            PermissionMode::AcceptEdits => "acceptEdits",
            PermissionMode::BypassPermissions => "bypassPermissions",
            PermissionMode::Delegate => "delegate",
            PermissionMode::DontAsk => "dontAsk",
            PermissionMode::Plan => "plan",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChromeMode {
    #[default]
    Default,
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SettingSource {
    User,
    Project,
    Local,
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SettingSource::User => "user",
            SettingSource::Project => "project",
            SettingSource::Local => "local",
        };
        write!(f, "{s}")
    }
}
