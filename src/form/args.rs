use clap::Args;

use super::{ChromeMode, FormState, InputFormat, OutputFormat, PermissionMode, SettingSource};

/// Command-line half of the form. Every option mirrors a [`FormState`] field
/// and overrides the profile-loaded value when given; switches can only turn
/// a setting on (profiles turn them off by omission).
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    #[arg(value_name = "PROMPT", help = "Positional prompt for the session")]
    pub prompt: Option<String>,

    #[arg(long, value_name = "NAME", help = "Model alias or full model name")]
    pub model: Option<String>,

    #[arg(long, value_name = "NAME", help = "Fallback model when overloaded")]
    pub fallback_model: Option<String>,

    #[arg(
        short = 'c',
        long = "continue",
        help = "Continue the most recent session"
    )]
    pub continue_session: bool,

    #[arg(short = 'r', long, value_name = "SESSION", help = "Resume a session by ID")]
    pub resume: Option<String>,

    #[arg(long, help = "Fork the session being continued or resumed")]
    pub fork_session: bool,

    #[arg(long, value_name = "UUID", help = "Use a specific session ID")]
    pub session_id: Option<String>,

    #[arg(long, value_name = "NAME", help = "Agent to run the session as")]
    pub agent: Option<String>,

    #[arg(long, value_name = "JSON", help = "Custom agents definition")]
    pub agents: Option<String>,

    #[arg(long, value_name = "LIST", help = "Tool set: \"\", \"default\", or a list")]
    pub tools: Option<String>,

    #[arg(long, value_name = "LIST", help = "Tools allowed without prompting")]
    pub allowed_tools: Option<String>,

    #[arg(long, value_name = "LIST", help = "Tools denied without prompting")]
    pub disallowed_tools: Option<String>,

    #[arg(long, help = "Disable slash commands")]
    pub disable_slash_commands: bool,

    #[arg(long, value_name = "TEXT", help = "Replace the system prompt")]
    pub system_prompt: Option<String>,

    #[arg(long, value_name = "TEXT", help = "Append to the system prompt")]
    pub append_system_prompt: Option<String>,

    #[arg(short = 'p', long = "print", help = "Non-interactive print mode")]
    pub print_mode: bool,

    #[arg(long, value_name = "FORMAT", help = "Input format (print mode)")]
    pub input_format: Option<InputFormat>,

    #[arg(long, value_name = "FORMAT", help = "Output format (print mode)")]
    pub output_format: Option<OutputFormat>,

    #[arg(long, value_name = "JSON", help = "JSON schema for structured output")]
    pub json_schema: Option<String>,

    #[arg(long, help = "Include partial streaming events")]
    pub include_partial_messages: bool,

    #[arg(long, help = "Replay user messages on stdout")]
    pub replay_user_messages: bool,

    #[arg(long, value_name = "FILE", help = "MCP server config file or JSON")]
    pub mcp_config: Option<String>,

    #[arg(long, help = "Only use MCP servers from --mcp-config")]
    pub strict_mcp_config: bool,

    #[arg(long = "plugin-dir", value_name = "DIR", help = "Plugin directory (repeatable)")]
    pub plugin_dirs: Vec<String>,

    #[arg(long, value_name = "MODE", help = "Permission mode for the session")]
    pub permission_mode: Option<PermissionMode>,

    #[arg(long, help = "Allow --dangerously-skip-permissions")]
    pub allow_dangerously_skip_permissions: bool,

    #[arg(long, help = "Bypass all permission checks")]
    pub dangerously_skip_permissions: bool,

    #[arg(long = "add-dir", value_name = "DIR", help = "Additional allowed directory (repeatable)")]
    pub add_dirs: Vec<String>,

    #[arg(long = "file", value_name = "SPEC", help = "File specs to attach")]
    pub file_specs: Option<String>,

    #[arg(long, value_name = "USD", help = "Maximum session budget in USD")]
    pub max_budget_usd: Option<String>,

    #[arg(long = "debug", value_name = "FILTER", help = "Debug mode with optional category filter")]
    pub debug_filter: Option<String>,

    #[arg(long, value_name = "FILE", help = "Write debug output to a file")]
    pub debug_file: Option<String>,

    #[arg(long, help = "Verbose output")]
    pub verbose: bool,

    #[arg(long, value_name = "MODE", help = "Chrome integration: default, enabled, disabled")]
    pub chrome: Option<ChromeMode>,

    #[arg(long, help = "Auto-connect to the IDE")]
    pub ide: bool,

    #[arg(long, value_name = "FILE", help = "Settings file or JSON string")]
    pub settings: Option<String>,

    #[arg(
        long,
        value_name = "LIST",
        value_delimiter = ',',
        help = "Setting sources to load (user, project, local)"
    )]
    pub setting_sources: Vec<SettingSource>,

    #[arg(long, value_name = "LIST", help = "Beta features to enable")]
    pub betas: Option<String>,

    #[arg(long, help = "Do not persist the session")]
    pub no_session_persistence: bool,
}

impl FormArgs {
    /// Overlay the given flags onto a profile-loaded form. Options replace,
    /// switches OR in, list options replace the whole list.
    pub fn apply(&self, form: &mut FormState) {
        fn set(target: &mut String, value: &Option<String>) {
            if let Some(v) = value {
                *target = v.clone();
            }
        }

        set(&mut form.prompt, &self.prompt);
        set(&mut form.model, &self.model);
        set(&mut form.fallback_model, &self.fallback_model);
        set(&mut form.resume, &self.resume);
        set(&mut form.session_id, &self.session_id);
        set(&mut form.agent, &self.agent);
        set(&mut form.agents, &self.agents);
        set(&mut form.tools, &self.tools);
        set(&mut form.allowed_tools, &self.allowed_tools);
        set(&mut form.disallowed_tools, &self.disallowed_tools);
        set(&mut form.system_prompt, &self.system_prompt);
        set(&mut form.append_system_prompt, &self.append_system_prompt);
        set(&mut form.json_schema, &self.json_schema);
        set(&mut form.mcp_config, &self.mcp_config);
        set(&mut form.file_specs, &self.file_specs);
        set(&mut form.max_budget_usd, &self.max_budget_usd);
        set(&mut form.debug_filter, &self.debug_filter);
        set(&mut form.debug_file, &self.debug_file);
        set(&mut form.settings, &self.settings);
        set(&mut form.betas, &self.betas);

        form.continue_session |= self.continue_session;
        form.fork_session |= self.fork_session;
        form.disable_slash_commands |= self.disable_slash_commands;
        form.print_mode |= self.print_mode;
        form.include_partial_messages |= self.include_partial_messages;
        form.replay_user_messages |= self.replay_user_messages;
        form.strict_mcp_config |= self.strict_mcp_config;
        form.allow_skip_permissions |= self.allow_dangerously_skip_permissions;
        form.skip_permissions |= self.dangerously_skip_permissions;
        form.verbose |= self.verbose;
        form.ide |= self.ide;
        form.no_session_persistence |= self.no_session_persistence;

        if let Some(v) = self.input_format {
            form.input_format = v;
        }
        if let Some(v) = self.output_format {
            form.output_format = v;
        }
        if let Some(v) = self.permission_mode {
            form.permission_mode = v;
        }
        if let Some(v) = self.chrome {
            form.chrome = v;
        }
        if !self.plugin_dirs.is_empty() {
            form.plugin_dirs = self.plugin_dirs.clone();
        }
        if !self.add_dirs.is_empty() {
            form.add_dirs = self.add_dirs.clone();
        }
        if !self.setting_sources.is_empty() {
            form.setting_sources = self.setting_sources.clone();
        }
    }
}
