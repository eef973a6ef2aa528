use clap::Parser;

use crate::form::args::FormArgs;
use crate::launch::args::LaunchArgs;
use crate::profile::args::ProfileArgs;

// Top-level CLI parser. Sub-sections are flattened from sub-Args structs.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Configure, preview, and launch Claude CLI sessions"
)]
pub struct Args {
    #[command(flatten)]
    pub profile: ProfileArgs,

    #[command(flatten)]
    pub form: FormArgs,

    #[command(flatten)]
    pub launch: LaunchArgs,
}
