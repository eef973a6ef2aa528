use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct LaunchArgs {
    #[arg(
        long,
        value_name = "PATH",
        help = "Claude CLI executable (default: auto-detect)"
    )]
    pub claude_path: Option<String>,

    #[arg(
        long,
        value_name = "DIR",
        help = "Working directory for the launched session"
    )]
    pub working_dir: Option<String>,

    #[arg(short = 'l', long, help = "Launch the command in a new console window")]
    pub launch: bool,

    #[arg(long, help = "Copy the assembled command to the clipboard")]
    pub copy: bool,

    #[arg(long, help = "Print the option reference table and exit")]
    pub show_options: bool,

    #[arg(short = 'q', long, help = "Suppress the command preview")]
    pub quiet: bool,
}
