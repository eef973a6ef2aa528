use thiserror::Error;

use crate::clip::ClipError;
use crate::launch::errors::LaunchError;
use crate::profile::errors::ProfileError;

#[derive(Debug, Error)]
pub enum ClaunchError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error(transparent)]
    Clip(#[from] ClipError),
}
