use std::path::PathBuf;

use crate::args::Args;
use crate::command::{self, CommandLine};
use crate::error::ClaunchError;
use crate::form::FormState;
use crate::launch::{self, LaunchOutcome};
use crate::profile::{self, ProfileSettings};
use crate::{clip, locate, visuals};

/// Resolved inputs for one invocation: the assembled command plus the
/// directory it should run in.
pub struct Session {
    pub command: CommandLine,
    pub working_dir: PathBuf,
}

pub fn resolve_session(args: &Args) -> Result<Session, ClaunchError> {
    let (mut form, settings) = match &args.profile.profile {
        Some(selector) => {
            let profile = profile::load_profile(&selector.file)?;
            let form = profile
                .session(selector.session.as_deref(), &selector.file)?
                .clone();
            (form, profile.settings)
        }
        None => (FormState::default(), ProfileSettings::default()),
    };
    args.form.apply(&mut form);

    let executable = args
        .launch
        .claude_path
        .clone()
        .or(settings.claude_path)
        .unwrap_or_else(locate::find_claude);

    let working_dir = args
        .launch
        .working_dir
        .clone()
        .or(settings.working_dir)
        .map(PathBuf::from)
        .unwrap_or_else(locate::safe_working_dir);

    Ok(Session {
        command: command::build(&executable, &form),
        working_dir,
    })
}

pub fn run(args: &Args) -> Result<(), ClaunchError> {
    if args.launch.show_options {
        visuals::print_option_table();
        return Ok(());
    }

    let session = resolve_session(args)?;
    let preview = session.command.to_string();

    if !args.launch.quiet {
        println!("{preview}");
    }

    if args.launch.copy {
        clip::copy(&preview)?;
        if !args.launch.quiet {
            eprintln!("copied to clipboard");
        }
    }

    if args.launch.launch {
        match launch::spawn_console(&session.command, &session.working_dir)? {
            LaunchOutcome::Console => {
                if !args.launch.quiet {
                    eprintln!(
                        "launched in a new console window (cwd: {})",
                        session.working_dir.display()
                    );
                }
            }
            LaunchOutcome::Background => {
                eprintln!(
                    "warning: no terminal emulator found; session started in the background"
                );
            }
        }
    }

    Ok(())
}
