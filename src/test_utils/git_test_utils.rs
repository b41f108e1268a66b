use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary git repository for tests that need real `git branch` output.
///
/// The directory is removed when the value is dropped.
pub struct TestGitRepository {
    #[allow(dead_code)] // Keeps the TempDir alive for the lifetime of the repository
    temp_dir: TempDir,
    repo_path: PathBuf,
}

impl TestGitRepository {
    /// Creates an empty temporary directory. Call `init_with_commit()` to make it a repository.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temp dir")?;
        let repo_path = temp_dir.path().to_path_buf();

        Ok(Self {
            temp_dir,
            repo_path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.repo_path
    }

    /// Initializes a repository on `main` with one commit.
    pub fn init_with_commit(&self) -> Result<()> {
        self.run_git_command(&["init"])
            .context("Failed to initialize git repository")?;
        self.run_git_command(&["symbolic-ref", "HEAD", "refs/heads/main"])?;

        // Local config only, so the host's global settings cannot interfere
        self.run_git_command(&["config", "user.email", "test@example.com"])?;
        self.run_git_command(&["config", "user.name", "Test User"])?;
        self.run_git_command(&["config", "commit.gpgsign", "false"])?;

        self.create_file("README.md", "# Test Repository\n")?;
        self.run_git_command(&["add", "-A"])?;
        self.run_git_command(&["commit", "-m", "Initial commit"])
            .context("Failed to create commit")?;
        Ok(())
    }

    pub fn create_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.repo_path.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create parent directories for {}", path))?;
        }
        fs::write(&file_path, content).with_context(|| format!("Failed to write file {}", path))
    }

    /// Creates local branches at HEAD without checking them out.
    pub fn create_branches(&self, names: &[&str]) -> Result<()> {
        for name in names {
            self.run_git_command(&["branch", name])
                .with_context(|| format!("Failed to create branch {}", name))?;
        }
        Ok(())
    }

    /// Creates a remote-tracking ref such as `refs/remotes/origin/dev` at HEAD.
    pub fn create_remote_branch(&self, remote: &str, name: &str) -> Result<()> {
        let refname = format!("refs/remotes/{remote}/{name}");
        self.run_git_command(&["update-ref", refname.as_str(), "HEAD"])
            .with_context(|| format!("Failed to create {}", refname))?;
        Ok(())
    }

    pub fn current_branch(&self) -> Result<String> {
        let output = self
            .run_git_command(&["branch", "--show-current"])
            .context("Failed to get current branch")?;
        Ok(output.trim().to_string())
    }

    /// Runs a git command in the repository directory and returns stdout.
    pub fn run_git_command(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .context("Failed to execute git command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Git command failed: {}", stderr);
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_with_commit_uses_main() -> Result<()> {
        let repo = TestGitRepository::new()?;
        repo.init_with_commit()?;

        assert!(repo.path().join(".git").exists());
        assert_eq!(repo.current_branch()?, "main");
        Ok(())
    }

    #[test]
    fn test_create_branches() -> Result<()> {
        let repo = TestGitRepository::new()?;
        repo.init_with_commit()?;
        repo.create_branches(&["dev", "feature/x"])?;
        repo.create_remote_branch("origin", "release")?;

        let output = repo.run_git_command(&["branch", "-a"])?;
        assert!(output.contains("* main"));
        assert!(output.contains("  dev"));
        assert!(output.contains("  feature/x"));
        assert!(output.contains("  remotes/origin/release"));
        Ok(())
    }
}
