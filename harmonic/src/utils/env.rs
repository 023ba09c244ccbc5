use std::path::{Path, PathBuf};

pub fn workspace_dir() -> anyhow::Result<PathBuf> {
  let output = std::process::Command::new(env!("CARGO"))
    .arg("locate-project")
    .arg("--workspace")
    .arg("--message-format=plain")
    .output()?
    .stdout;
  let cargo_path = Path::new(std::str::from_utf8(&output)?.trim()).to_path_buf();
  cargo_path
    .parent()
    .map(Path::to_path_buf)
    .ok_or(anyhow::anyhow!("No parent for {}", cargo_path.display()))
}

/// Absolute paths pass through, relative ones are joined to the workspace root.
pub fn workspace_path(suffix: &str) -> anyhow::Result<PathBuf> {
  let path = Path::new(suffix);
  if path.is_absolute() {
    return Ok(path.to_path_buf());
  }
  Ok(workspace_dir()?.join(path))
}
