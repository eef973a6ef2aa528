pub mod args;
pub mod errors;

use std::path::Path;
use std::process::Command;

use crate::command::CommandLine;
use crate::locate;
use errors::LaunchError;

/// How the session ended up running. `Background` is the Unix fallback when
/// no terminal emulator could be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    Console,
    Background,
}

/// Spawn the command in a new console window, fire-and-forget. The working
/// directory and executable are probed up front so a bad path fails here
/// instead of surfacing as an opaque spawn error.
pub fn spawn_console(
    command: &CommandLine,
    working_dir: &Path,
) -> Result<LaunchOutcome, LaunchError> {
    if !working_dir.is_dir() {
        return Err(LaunchError::MissingWorkingDir(
            working_dir.display().to_string(),
        ));
    }
    if locate::resolve(command.program()).is_none() {
        return Err(LaunchError::ExecutableNotFound(
            command.program().to_string(),
        ));
    }
    spawn_platform(command, working_dir)
}

#[cfg(windows)]
fn spawn_platform(
    command: &CommandLine,
    working_dir: &Path,
) -> Result<LaunchOutcome, LaunchError> {
    use std::os::windows::process::CommandExt;

    const CREATE_NEW_CONSOLE: u32 = 0x0000_0010;

    Command::new(command.program())
        .args(command.args())
        .current_dir(working_dir)
        .creation_flags(CREATE_NEW_CONSOLE)
        .spawn()
        .map_err(|e| LaunchError::SpawnFailed(e.to_string()))?;
    Ok(LaunchOutcome::Console)
}

#[cfg(unix)]
fn spawn_platform(
    command: &CommandLine,
    working_dir: &Path,
) -> Result<LaunchOutcome, LaunchError> {
    let script = write_launch_script(command, working_dir)?;

    for argv in terminal_launchers(&script) {
        if locate::resolve(&argv[0]).is_none() {
            continue;
        }
        match Command::new(&argv[0]).args(&argv[1..]).spawn() {
            Ok(_) => return Ok(LaunchOutcome::Console),
            Err(_) => continue,
        }
    }

    // No terminal emulator available. Run detached instead; the script is
    // ours to clean up since nothing will execute its self-delete line.
    let result = Command::new(command.program())
        .args(command.args())
        .current_dir(working_dir)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn();
    let _ = std::fs::remove_file(&script);
    result.map_err(|e| LaunchError::SpawnFailed(e.to_string()))?;
    Ok(LaunchOutcome::Background)
}

/// One-shot `#!/bin/sh` script that cds to the working directory, runs the
/// command, and removes itself. Terminal emulators differ too much in how
/// they pass argv for a direct exec to be portable.
#[cfg(unix)]
fn write_launch_script(
    command: &CommandLine,
    working_dir: &Path,
) -> Result<std::path::PathBuf, LaunchError> {
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;

    use crate::command::quote::quote_unix;

    let mut file = tempfile::Builder::new()
        .prefix("claunch_")
        .suffix(".sh")
        .tempfile()
        .map_err(|e| LaunchError::ScriptError(e.to_string()))?;
    let path = file.path().to_path_buf();

    let argv = command
        .tokens()
        .iter()
        .map(|t| quote_unix(t))
        .collect::<Vec<_>>()
        .join(" ");
    let script = format!(
        "#!/bin/sh\ncd {} && {}\nrm -f {}\n",
        quote_unix(&working_dir.display().to_string()),
        argv,
        quote_unix(&path.display().to_string()),
    );

    file.write_all(script.as_bytes())
        .map_err(|e| LaunchError::ScriptError(e.to_string()))?;
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o700))
        .map_err(|e| LaunchError::ScriptError(e.to_string()))?;

    // Keep the file past this scope; the script deletes itself when run.
    let (_, path) = file
        .keep()
        .map_err(|e| LaunchError::ScriptError(e.to_string()))?;
    Ok(path)
}

#[cfg(unix)]
fn terminal_launchers(script: &Path) -> Vec<Vec<String>> {
    use crate::command::quote::quote_unix;

    let script_str = script.display().to_string();
    let run = format!("sh {}", quote_unix(&script_str));
    let mut launchers: Vec<Vec<String>> = Vec::new();

    if cfg!(target_os = "macos") {
        // Terminal.app via osascript; `open -a` does not pass args reliably.
        let escaped = script_str.replace('\\', "\\\\").replace('"', "\\\"");
        launchers.push(vec![
            "osascript".to_string(),
            "-e".to_string(),
            format!("tell application \"Terminal\" to do script \"sh {}\"", escaped),
        ]);
    }

    launchers.push(vec![
        "x-terminal-emulator".to_string(),
        "-e".to_string(),
        format!("{run}; exec sh"),
    ]);
    launchers.push(vec![
        "gnome-terminal".to_string(),
        "--".to_string(),
        "sh".to_string(),
        "-c".to_string(),
        format!("{run}; exec bash"),
    ]);
    launchers.push(vec![
        "xterm".to_string(),
        "-e".to_string(),
        format!("{run}; exec sh"),
    ]);
    launchers.push(vec![
        "konsole".to_string(),
        "-e".to_string(),
        "sh".to_string(),
        script_str.clone(),
    ]);
    launchers.push(vec![
        "xfce4-terminal".to_string(),
        "-e".to_string(),
        format!("{run}; exec sh"),
    ]);

    launchers
}
