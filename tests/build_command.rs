use claunch::command::build;
use claunch::form::spec::{OPTIONS, OptionKind};
use claunch::form::{ChromeMode, FormState, SettingSource};

#[path = "common/mod.rs"]
mod common;

#[test]
fn empty_form_renders_to_the_executable_alone() {
    let command = build("claude", &FormState::default());
    assert_eq!(command.tokens(), ["claude"]);
}

#[test]
fn build_is_deterministic() {
    let form = common::full_form();
    let first = build("claude", &form).into_tokens();
    let second = build("claude", &form).into_tokens();
    assert_eq!(first, second);
}

#[test]
fn boolean_flags_contribute_the_flag_token_only() {
    let form = FormState {
        continue_session: true,
        ..FormState::default()
    };
    assert_eq!(build("claude", &form).tokens(), ["claude", "-c"]);
}

#[test]
fn valued_flags_are_absent_when_empty() {
    let form = FormState {
        resume: String::new(),
        model: "opus".to_string(),
        ..FormState::default()
    };
    let tokens = build("claude", &form).into_tokens();
    assert_eq!(tokens, ["claude", "--model", "opus"]);
    assert!(!tokens.contains(&"-r".to_string()));
}

#[test]
fn prompt_with_spaces_stays_one_token() {
    let form = FormState {
        prompt: "hello world".to_string(),
        ..FormState::default()
    };
    let tokens = build("claude", &form).into_tokens();
    assert_eq!(tokens, ["claude", "hello world"]);
}

#[test]
fn documented_example() {
    let form = FormState {
        model: "opus".to_string(),
        continue_session: true,
        prompt: "fix bug".to_string(),
        ..FormState::default()
    };
    assert_eq!(
        build("claude", &form).tokens(),
        ["claude", "fix bug", "--model", "opus", "-c"]
    );
}

#[test]
fn flag_order_follows_the_option_table() {
    let form = common::full_form();
    let tokens = build("claude", &form).into_tokens();

    // chrome=enabled means --no-chrome must not appear; everything else
    // should, in table order.
    let mut last_index = 0usize;
    for spec in OPTIONS {
        if spec.kind == OptionKind::Positional || spec.name == "no-chrome" {
            continue;
        }
        let index = tokens
            .iter()
            .position(|t| t == spec.flag)
            .unwrap_or_else(|| panic!("flag {} missing from full form output", spec.flag));
        assert!(
            index > last_index,
            "flag {} out of order (index {index}, previous {last_index})",
            spec.flag
        );
        last_index = index;
    }
    assert!(!tokens.contains(&"--no-chrome".to_string()));
}

#[test]
fn flag_order_is_independent_of_edit_order() {
    // Same values arrived at through different mutation orders.
    let mut first = FormState::default();
    first.model = "opus".to_string();
    first.verbose = true;
    first.resume = "abc".to_string();

    let mut second = FormState::default();
    second.resume = "abc".to_string();
    second.verbose = true;
    second.model = "opus".to_string();

    assert_eq!(
        build("claude", &first).into_tokens(),
        build("claude", &second).into_tokens()
    );
}

#[test]
fn setting_sources_join_into_one_value() {
    let form = FormState {
        setting_sources: vec![SettingSource::User, SettingSource::Project],
        ..FormState::default()
    };
    assert_eq!(
        build("claude", &form).tokens(),
        ["claude", "--setting-sources", "user,project"]
    );
}

#[test]
fn chrome_disabled_emits_the_negative_switch() {
    let form = FormState {
        chrome: ChromeMode::Disabled,
        ..FormState::default()
    };
    assert_eq!(build("claude", &form).tokens(), ["claude", "--no-chrome"]);
}

#[test]
fn executable_path_is_passed_through_verbatim() {
    let form = FormState::default();
    let command = build("/opt/tools/claude v2/claude", &form);
    assert_eq!(command.program(), "/opt/tools/claude v2/claude");
    assert_eq!(command.args().len(), 0);
}
