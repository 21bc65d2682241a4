use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::task::JoinSet;
use tracing::{debug, error, info};
use crate::models::template::{
    self, PackageManifest, DEFAULT_PROJECT_NAME, GITIGNORE, GITIGNORE_TEMPLATE, PACKAGE_JSON,
    SOURCE_DIR, TSCONFIG_JSON,
};
use crate::services::prompter::Prompter;
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::validation::{resolve_location, ProjectLocation};

pub const PROJECT_NAME_QUESTION: &str = "What would you like to name your project?";

/// What a scaffolding run produced
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub location: ProjectLocation,
    /// Files and directories created inside the target directory
    pub created: Vec<PathBuf>,
}

impl ScaffoldReport {
    pub fn target_dir(&self) -> PathBuf {
        self.location.target_dir()
    }
}

/// One independent filesystem operation inside the target directory
#[derive(Debug)]
enum Entry {
    File { path: PathBuf, contents: String },
    Dir { path: PathBuf },
}

impl Entry {
    fn file(dir: &Path, name: &str, contents: String) -> Self {
        Self::File {
            path: dir.join(name),
            contents,
        }
    }

    async fn create(self) -> Result<PathBuf> {
        match self {
            Self::File { path, contents } => {
                fs::write(&path, contents)
                    .await
                    .map_err(|e| ScaffoldError::io(&path, e))?;
                debug!(path = %path.display(), "wrote file");
                Ok(path)
            }
            Self::Dir { path } => {
                fs::create_dir(&path)
                    .await
                    .map_err(|e| ScaffoldError::io(&path, e))?;
                debug!(path = %path.display(), "created directory");
                Ok(path)
            }
        }
    }
}

/// Ask for the project name and resolve where it goes.
///
/// Synchronous so the terminal can be released before any `.await`.
/// `cwd` is the directory new projects are created in (and the one `.`
/// refers to).
pub fn ask_project_location<R, W, E>(
    prompter: &mut Prompter<R, W, E>,
    cwd: &Path,
) -> Result<ProjectLocation>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let answer = prompter.ask_string(PROJECT_NAME_QUESTION, Some(DEFAULT_PROJECT_NAME))?;
    let location = resolve_location(cwd, &answer)?;
    debug!(name = %location.name, parent = %location.parent_dir.display(), "resolved project location");
    Ok(location)
}

/// Ask for a project name and scaffold the TypeScript starter.
///
/// The returned future borrows the prompter, so it is only `Send` when the
/// prompter's handles are. A prompter over `Stdin` locks is not; callers
/// that need to spawn should use [`ask_project_location`] then [`scaffold`].
pub async fn create_project<R, W, E>(
    prompter: &mut Prompter<R, W, E>,
    cwd: &Path,
) -> Result<ScaffoldReport>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let location = ask_project_location(prompter, cwd)?;
    scaffold(&location).await
}

/// Create the target directory and write the starter files into it
pub async fn scaffold(location: &ProjectLocation) -> Result<ScaffoldReport> {
    let target = location.target_dir();

    let package_json = PackageManifest::typescript_starter(&location.name)
        .render()
        .map_err(|source| ScaffoldError::Json { file: PACKAGE_JSON, source })?;
    let tsconfig = template::render_tsconfig()
        .map_err(|source| ScaffoldError::Json { file: TSCONFIG_JSON, source })?;

    prepare_target_dir(&target).await?;

    let entries = vec![
        Entry::file(&target, PACKAGE_JSON, package_json),
        Entry::file(&target, TSCONFIG_JSON, tsconfig),
        Entry::Dir { path: target.join(SOURCE_DIR) },
        Entry::file(&target, GITIGNORE, GITIGNORE_TEMPLATE.to_string()),
    ];
    let created = create_all(entries).await?;

    info!(dir = %target.display(), entries = created.len(), "project scaffolded");
    Ok(ScaffoldReport {
        location: location.clone(),
        created,
    })
}

/// Make sure `target` exists and holds nothing yet
async fn prepare_target_dir(target: &Path) -> Result<()> {
    match fs::create_dir(target).await {
        Ok(()) => {
            debug!(path = %target.display(), "created target directory");
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            let mut entries = fs::read_dir(target)
                .await
                .map_err(|e| ScaffoldError::io(target, e))?;
            let occupied = entries
                .next_entry()
                .await
                .map_err(|e| ScaffoldError::io(target, e))?
                .is_some();

            if occupied {
                return Err(ScaffoldError::TargetNotEmpty(target.to_path_buf()));
            }
            debug!(path = %target.display(), "reusing empty target directory");
            Ok(())
        }
        Err(err) => Err(ScaffoldError::io(target, err)),
    }
}

/// Run every entry concurrently and wait for all of them.
///
/// Siblings are never cancelled. Every failure is logged and the first one
/// in entry order is returned; whatever already succeeded stays on disk.
async fn create_all(entries: Vec<Entry>) -> Result<Vec<PathBuf>> {
    let count = entries.len();
    let mut join_set = JoinSet::new();

    for (index, entry) in entries.into_iter().enumerate() {
        join_set.spawn(async move { (index, entry.create().await) });
    }

    let mut created: Vec<Option<PathBuf>> = vec![None; count];
    let mut failures: Vec<(usize, ScaffoldError)> = Vec::new();

    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((index, Ok(path))) => created[index] = Some(path),
            Ok((index, Err(err))) => {
                error!(error = %err, "scaffolding step failed");
                failures.push((index, err));
            }
            Err(join_err) => {
                error!(error = %join_err, "scaffolding task did not complete");
                failures.push((count, ScaffoldError::Task(join_err)));
            }
        }
    }

    failures.sort_by_key(|(index, _)| *index);
    if let Some((_, err)) = failures.into_iter().next() {
        return Err(err);
    }

    Ok(created.into_iter().flatten().collect())
}
