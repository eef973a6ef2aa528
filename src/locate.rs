//! Finding the Claude CLI executable and a sensible working directory.

use std::env;
use std::path::{Path, PathBuf};

/// Locate the Claude CLI: PATH first, then well-known install locations,
/// falling back to the bare name so PATH resolution happens at launch.
pub fn find_claude() -> String {
    if let Some(hit) = find_in_path("claude") {
        return hit.display().to_string();
    }
    for candidate in install_candidates() {
        if candidate.is_file() {
            return candidate.display().to_string();
        }
    }
    "claude".to_string()
}

/// Existence probe used before spawning. Paths are checked directly; bare
/// names are searched on PATH.
pub fn resolve(command: &str) -> Option<PathBuf> {
    let path = Path::new(command);
    if path.components().count() > 1 {
        return path.is_file().then(|| path.to_path_buf());
    }
    find_in_path(command)
}

/// Default working directory: the current one, unless that is a system path
/// (launched elevated, or from a system context), in which case home.
pub fn safe_working_dir() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    if is_system_dir(&cwd) {
        if let Some(home) = home_dir() {
            return home;
        }
    }
    cwd
}

pub fn find_in_path(name: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    for dir in env::split_paths(&path_var) {
        if dir.as_os_str().is_empty() {
            continue;
        }
        for file_name in executable_names(name) {
            let candidate = dir.join(&file_name);
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

fn home_dir() -> Option<PathBuf> {
    let var = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
    env::var_os(var).map(PathBuf::from)
}

#[cfg(windows)]
fn install_candidates() -> Vec<PathBuf> {
    let Some(home) = home_dir() else {
        return Vec::new();
    };
    vec![
        home.join(".local").join("bin").join("claude.exe"),
        home.join(".local").join("bin").join("claude"),
        home.join("AppData")
            .join("Local")
            .join("Programs")
            .join("claude")
            .join("claude.exe"),
        home.join("AppData").join("Roaming").join("npm").join("claude.cmd"),
    ]
}

#[cfg(not(windows))]
fn install_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(home) = home_dir() {
        candidates.push(home.join(".local/bin/claude"));
        candidates.push(home.join(".nvm/current/bin/claude"));
    }
    candidates.push(PathBuf::from("/usr/local/bin/claude"));
    candidates.push(PathBuf::from("/opt/homebrew/bin/claude"));
    candidates
}

#[cfg(windows)]
fn executable_names(name: &str) -> Vec<String> {
    vec![
        format!("{name}.exe"),
        format!("{name}.cmd"),
        format!("{name}.bat"),
        name.to_string(),
    ]
}

#[cfg(not(windows))]
fn executable_names(name: &str) -> Vec<String> {
    vec![name.to_string()]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(windows)]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(windows)]
fn is_system_dir(path: &Path) -> bool {
    let lower = path.display().to_string().to_lowercase();
    lower.contains("system32") || lower.contains("syswow64") || path.parent().is_none()
}

#[cfg(not(windows))]
fn is_system_dir(path: &Path) -> bool {
    path == Path::new("/")
}
