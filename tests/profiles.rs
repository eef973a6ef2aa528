use claunch::form::{PermissionMode, SettingSource};
use claunch::profile::args::parse_profile_arg;
use claunch::profile::errors::ProfileError;
use claunch::profile::load_profile;

#[test]
fn same_session_loads_identically_from_all_formats() {
    let toml = load_profile("profiles/session.toml").expect("toml profile loads");
    let yaml = load_profile("profiles/session.yaml").expect("yaml profile loads");
    let json = load_profile("profiles/session.json").expect("json profile loads");

    let from_toml = toml.session(Some("work"), "profiles/session.toml").unwrap();
    let from_yaml = yaml.session(Some("work"), "profiles/session.yaml").unwrap();
    let from_json = json.session(Some("work"), "profiles/session.json").unwrap();

    assert_eq!(from_toml, from_yaml);
    assert_eq!(from_toml, from_json);
    assert_eq!(from_toml.model, "opus");
    assert!(from_toml.continue_session);
    assert_eq!(from_toml.prompt, "fix the parser");
}

#[test]
fn first_session_is_used_when_no_name_is_given() {
    let profile = load_profile("profiles/session.toml").expect("profile loads");
    let session = profile.session(None, "profiles/session.toml").unwrap();
    assert_eq!(session.model, "opus");
}

#[test]
fn named_session_fields_deserialize() {
    let profile = load_profile("profiles/session.toml").expect("profile loads");
    let review = profile
        .session(Some("review"), "profiles/session.toml")
        .unwrap();
    assert_eq!(review.model, "sonnet");
    assert_eq!(review.permission_mode, PermissionMode::Plan);
    assert_eq!(review.allowed_tools, "Read Grep");
    assert_eq!(
        review.setting_sources,
        vec![SettingSource::User, SettingSource::Project]
    );
}

#[test]
fn settings_supply_path_and_working_dir() {
    let profile = load_profile("profiles/session.toml").expect("profile loads");
    assert_eq!(
        profile.settings.claude_path.as_deref(),
        Some("/usr/local/bin/claude")
    );
    assert_eq!(profile.settings.working_dir.as_deref(), Some("/tmp"));
}

#[test]
fn unknown_session_is_an_error() {
    let profile = load_profile("profiles/session.toml").expect("profile loads");
    let err = profile
        .session(Some("nope"), "profiles/session.toml")
        .unwrap_err();
    assert!(matches!(err, ProfileError::SessionNotFound(_)));
    assert!(format!("{err}").contains("nope"));
}

#[test]
fn unsupported_extension_is_an_error() {
    std::fs::create_dir_all("out").unwrap();
    std::fs::write("out/profile.ini", "[session.work]\n").unwrap();
    let err = load_profile("out/profile.ini").unwrap_err();
    assert!(matches!(err, ProfileError::UnsupportedFormat(_)));
}

#[test]
fn missing_file_is_an_error() {
    let err = load_profile("profiles/does_not_exist.toml").unwrap_err();
    assert!(matches!(err, ProfileError::FileError(_)));
}

#[test]
fn selector_with_session_name() {
    let selector = parse_profile_arg("work@profiles/session.toml").expect("selector parses");
    assert_eq!(selector.session.as_deref(), Some("work"));
    assert_eq!(selector.file, "profiles/session.toml");
}

#[test]
fn selector_without_session_name() {
    let selector = parse_profile_arg("profiles/session.toml").expect("selector parses");
    assert!(selector.session.is_none());
    assert_eq!(selector.file, "profiles/session.toml");
}

#[test]
fn selector_with_empty_half_is_rejected() {
    assert!(parse_profile_arg("@profiles/session.toml").is_err());
    assert!(parse_profile_arg("work@").is_err());
}
