// Project name validation and target directory resolution

use std::path::{Component, Path, PathBuf};
use crate::utils::error::{Result, ScaffoldError};

/// Name that means "scaffold into the current directory"
pub const CURRENT_DIR_TOKEN: &str = ".";

/// Where a project will be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLocation {
    /// Existing directory the project lives in
    pub parent_dir: PathBuf,
    /// Project name, also the final segment of the target directory
    pub name: String,
}

impl ProjectLocation {
    pub fn target_dir(&self) -> PathBuf {
        self.parent_dir.join(&self.name)
    }
}

/// Turn the answer to "what is the project called" into a location.
///
/// `.` picks the working directory itself: its base name becomes the
/// project name and its parent the container. Any other name must come back
/// out of the joined path as the final segment unchanged, which rejects
/// separators, `..` and empty names.
pub fn resolve_location(cwd: &Path, project_name: &str) -> Result<ProjectLocation> {
    let (parent_dir, name) = if project_name == CURRENT_DIR_TOKEN {
        let base = cwd
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ScaffoldError::InvalidName(project_name.to_string()))?;
        let parent = cwd
            .parent()
            .ok_or_else(|| ScaffoldError::InvalidName(project_name.to_string()))?;
        (parent.to_path_buf(), base.to_string())
    } else {
        (cwd.to_path_buf(), project_name.to_string())
    };

    let location = ProjectLocation { parent_dir, name };
    validate_simple_name(&location.target_dir(), &location.name)?;
    Ok(location)
}

/// Check that `name` is exactly the last normal component of `dir`
fn validate_simple_name(dir: &Path, name: &str) -> Result<()> {
    let last = match dir.components().next_back() {
        Some(Component::Normal(segment)) => segment.to_str(),
        _ => None,
    };

    if name.is_empty() || last != Some(name) {
        return Err(ScaffoldError::InvalidName(name.to_string()));
    }
    Ok(())
}
