use std::path::Path;
use std::process::Command;
use thiserror::Error;

/// Failure detail from a git operation
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct GitError(pub String);

/// Seam over the two git operations the acquirer needs.
///
/// Tests inject failing implementations; production uses [`SystemGit`].
pub trait GitClient {
    /// Clone `url` into `dest`, which must not yet exist
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), GitError>;

    /// Bring the working copy at `workdir` up to date
    fn update(&self, workdir: &Path) -> Result<(), GitError>;
}

/// Git client shelling out to the `git` binary
#[derive(Debug, Default)]
pub struct SystemGit;

impl GitClient for SystemGit {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), GitError> {
        run_git(command(&["clone", "--quiet", url]).arg(dest))
    }

    fn update(&self, workdir: &Path) -> Result<(), GitError> {
        run_git(
            Command::new("git")
                .arg("-C")
                .arg(workdir)
                .args(["pull", "--ff-only", "--quiet"]),
        )
    }
}

fn command(args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.args(args);
    cmd
}

fn run_git(cmd: &mut Command) -> Result<(), GitError> {
    let output = cmd
        .output()
        .map_err(|e| GitError(format!("failed to run git: {e}")))?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(GitError(stderr.trim().to_string()))
    }
}
