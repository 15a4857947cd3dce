// Locating the external extraction tools

use std::path::Path;
use std::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolType {
    YtDlp,
    Python,
}

impl ToolType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolType::YtDlp => "yt-dlp",
            ToolType::Python => "python3",
        }
    }
}

/// Resolve the tool binary: explicit override, then common install paths, then `which`.
pub fn locate(tool: ToolType, override_path: Option<&str>) -> String {
    if let Some(path) = override_path.filter(|p| !p.trim().is_empty()) {
        return path.to_string();
    }

    let binary_name = tool.as_str();
    let common_paths = [
        format!("/opt/homebrew/bin/{}", binary_name),
        format!("/usr/local/bin/{}", binary_name),
        format!("/usr/bin/{}", binary_name),
    ];

    for path in common_paths {
        if Path::new(&path).exists() {
            return path;
        }
    }

    if let Ok(output) = Command::new("which").arg(binary_name).output() {
        if output.status.success() {
            let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if !path.is_empty() {
                return path;
            }
        }
    }

    // Let the OS resolve it at spawn time
    binary_name.to_string()
}

/// Run `<program> <args>` and report whether it exited successfully.
pub fn probe(program: &str, args: &[&str]) -> bool {
    match Command::new(program).args(args).output() {
        Ok(out) => out.status.success(),
        Err(_) => false,
    }
}
