use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Render DOT source to an image by piping it through Graphviz `dot`.
pub fn render(dot: &str, format: &str, output: &Path) -> Result<()> {
    debug!(format, output = %output.display(), "rendering with graphviz");

    let mut child = Command::new("dot")
        .arg(format!("-T{}", format))
        .arg("-o")
        .arg(output)
        .stdin(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("Failed to execute 'dot'. Is Graphviz installed?")?;

    // The child is reaped even when the write fails; dropping stdin closes it.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(dot.as_bytes()),
        None => Ok(()),
    };

    let result = child
        .wait_with_output()
        .context("Failed to wait for Graphviz")?;
    check_exit(&result)?;
    written.context("Failed to send graph to Graphviz")
}

fn check_exit(result: &std::process::Output) -> Result<()> {
    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        bail!("dot failed ({}): {}", result.status, stderr.trim());
    }
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_failed_exit_reports_stderr() {
        let result = Command::new("sh")
            .args(["-c", "echo 'syntax error in line 1' >&2; exit 2"])
            .output()
            .unwrap();
        let err = check_exit(&result).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("syntax error in line 1"), "{}", message);
        assert!(message.starts_with("dot failed"));
    }

    #[test]
    fn test_successful_exit_passes() {
        let result = Command::new("sh").args(["-c", "exit 0"]).output().unwrap();
        assert!(check_exit(&result).is_ok());
    }
}
