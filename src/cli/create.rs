use std::path::{Path, PathBuf};
use crate::services::prompter::Prompter;
use crate::services::scaffolder::{ask_project_location, scaffold, ScaffoldReport};
use crate::utils::error::{Result, ScaffoldError};

/// Interactive TypeScript project creation
#[derive(Debug)]
pub struct CreateCommand {
    /// Directory the project is created in
    pub cwd: PathBuf,
}

impl CreateCommand {
    /// Command rooted at the process working directory
    pub fn from_env() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| ScaffoldError::io(".", e))?;
        Ok(Self { cwd })
    }

    /// Execute the create command
    pub async fn run(&self) -> Result<()> {
        let location = {
            let mut prompter = Prompter::stdio();
            ask_project_location(&mut prompter, &self.cwd)?
        };
        let report = scaffold(&location).await?;

        print!("{}", render_summary(&report, &self.cwd));
        Ok(())
    }
}

/// Success message with the commands to run next
fn render_summary(report: &ScaffoldReport, cwd: &Path) -> String {
    let target = report.target_dir();
    let mut summary = format!(
        "\nCreated {} in {}\n\nNext steps:\n",
        report.location.name,
        target.display()
    );

    if target != cwd {
        let relative = target.strip_prefix(cwd).unwrap_or(&target);
        summary.push_str(&format!("  cd {}\n", shell_quote(&relative.display().to_string())));
    }
    summary.push_str("  npm install\n  npm run build\n");
    summary
}

/// Quote a path for pasting into a POSIX shell when it needs it
fn shell_quote(path: &str) -> String {
    let plain = !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '+' | '@' | ':'));
    if plain {
        path.to_string()
    } else {
        format!("'{}'", path.replace('\'', "'\\''"))
    }
}
