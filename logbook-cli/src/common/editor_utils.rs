use anyhow::{Context, Result};
use std::{fs, io::Write, path::Path, process::Command};

pub fn resolve_editor(editor: &Option<String>) -> String {
    let usable = |e: &String| !e.trim().is_empty();
    editor
        .clone()
        .filter(usable)
        .or_else(|| std::env::var("VISUAL").ok().filter(usable))
        .or_else(|| std::env::var("EDITOR").ok().filter(usable))
        .unwrap_or_else(|| "vim".into())
}

/// Writes `initial` to a temporary file, lets the user edit it and returns the result.
pub fn create_editor_buffer(editor_cmd: &str, initial: &str) -> Result<String> {
    let mut file = tempfile::Builder::new()
        .prefix("logbook")
        .suffix(".txt")
        .tempfile()?;
    file.write_all(initial.as_bytes())
        .context("writing form to temporary file")?;
    file.flush()?;

    let path = file.path().to_path_buf();
    open_file_in_editor(editor_cmd, &path)?;
    Ok(fs::read_to_string(&path)?)
}

/// Runs the editor on `path`. `editor_cmd` may carry arguments, e.g. `code --wait`.
pub fn open_file_in_editor(editor_cmd: &str, path: &Path) -> Result<()> {
    let mut parts = editor_cmd.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| anyhow::anyhow!("no editor configured"))?;
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .with_context(|| format!("launching editor '{editor_cmd}'"))?;
    if !status.success() {
        anyhow::bail!("Editor exited with status {}", status);
    }
    Ok(())
}
