#![allow(dead_code)]

use claunch::form::{
    ChromeMode, FormState, InputFormat, OutputFormat, PermissionMode, SettingSource,
};

/// A form with every option set away from its default. Used to check that no
/// option table row is silently dropped by the builder.
pub fn full_form() -> FormState {
    FormState {
        prompt: "ship it".to_string(),
        model: "opus".to_string(),
        fallback_model: "sonnet".to_string(),
        continue_session: true,
        resume: "abc123".to_string(),
        fork_session: true,
        session_id: "00000000-0000-0000-0000-000000000000".to_string(),
        agent: "reviewer".to_string(),
        agents: "{\"reviewer\":{\"description\":\"Reviews code\"}}".to_string(),
        tools: "Bash,Edit,Read".to_string(),
        allowed_tools: "Bash(git:*) Edit".to_string(),
        disallowed_tools: "WebSearch".to_string(),
        disable_slash_commands: true,
        system_prompt: "be terse".to_string(),
        append_system_prompt: "and kind".to_string(),
        print_mode: true,
        input_format: InputFormat::StreamJson,
        output_format: OutputFormat::Json,
        json_schema: "{\"type\":\"object\"}".to_string(),
        include_partial_messages: true,
        replay_user_messages: true,
        mcp_config: "mcp.json".to_string(),
        strict_mcp_config: true,
        plugin_dirs: vec!["/plugins/a".to_string()],
        permission_mode: PermissionMode::AcceptEdits,
        allow_skip_permissions: true,
        skip_permissions: true,
        add_dirs: vec!["/src".to_string(), "/docs".to_string()],
        file_specs: "README.md".to_string(),
        max_budget_usd: "5".to_string(),
        debug_filter: "api".to_string(),
        debug_file: "debug.log".to_string(),
        verbose: true,
        chrome: ChromeMode::Enabled,
        ide: true,
        settings: "settings.json".to_string(),
        setting_sources: vec![SettingSource::User, SettingSource::Local],
        betas: "interleaved-thinking".to_string(),
        no_session_persistence: true,
    }
}
