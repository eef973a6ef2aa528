use clap::Args;

use super::errors::ProfileError;

/// Parsed `[SESSION@]FILE` selector.
#[derive(Debug, Clone)]
pub struct ProfileRef {
    pub session: Option<String>,
    pub file: String,
}

pub fn parse_profile_arg(value: &str) -> Result<ProfileRef, ProfileError> {
    match value.split_once('@') {
        Some((session, file)) if !session.is_empty() && !file.is_empty() => Ok(ProfileRef {
            session: Some(session.to_string()),
            file: file.to_string(),
        }),
        Some(_) => Err(ProfileError::InvalidArgument(format!(
            "failed to unpack selector {}",
            value
        ))),
        None => Ok(ProfileRef {
            session: None,
            file: value.to_string(),
        }),
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    #[arg(
        short = 'P',
        long = "profile",
        value_name = "[SESSION@]FILE",
        value_parser = parse_profile_arg,
        help = "Session profile (toml/yaml/json), optionally prefixed with a session name"
    )]
    pub profile: Option<ProfileRef>,
}
