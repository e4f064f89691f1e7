use anyhow::{Context, Result};
use log::{debug, info};
use semver::Version;
use std::path::Path;
use thiserror::Error;

use crate::patterns::{
    VersionPattern,
    juce_version_string::JuceVersionString,
    project_declaration::{ProjectDeclaration, ProjectVersion},
};

#[derive(Debug, Error)]
pub enum BumpError {
    #[error("Version pattern not found in {path}")]
    PatternNotFound { path: String },
    #[error("Invalid {component} version component: {value}")]
    InvalidComponent { component: &'static str, value: String },
    #[error("Patch component of {version} cannot be incremented")]
    PatchOverflow { version: Version },
}

/// Result of bumping a build configuration held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bump {
    pub project_name: String,
    pub previous: Version,
    pub version: Version,
    pub contents: String,
}

/// Reads the version of the first `project(...)` declaration without touching the file.
pub fn current_version(path: impl AsRef<Path>) -> Result<ProjectVersion> {
    let path = path.as_ref();
    let contents = read_contents(path)?;
    ProjectDeclaration::find_version(&contents)?
        .ok_or_else(|| {
            BumpError::PatternNotFound {
                path: path.display().to_string(),
            }
            .into()
        })
}

/// Increments the patch version in `contents` and rewrites every declaration
/// and every `JucePlugin_VersionString` to match. `source` only names the file
/// in errors.
pub fn bump_contents(contents: &str, source: impl AsRef<Path>) -> Result<Bump> {
    let ProjectVersion {
        project_name,
        version: previous,
    } = ProjectDeclaration::find_version(contents)?
        .ok_or_else(|| BumpError::PatternNotFound {
            path: source.as_ref().display().to_string(),
        })?;

    let patch = previous
        .patch
        .checked_add(1)
        .ok_or_else(|| BumpError::PatchOverflow {
            version: previous.clone(),
        })?;
    let version = Version::new(previous.major, previous.minor, patch);
    debug!("Incrementing version from {} -> {}", previous, version);

    debug!(
        "Rewriting {} project declaration(s) and {} JucePlugin_VersionString(s)",
        ProjectDeclaration::count_matches(contents)?,
        JuceVersionString::count_matches(contents)?
    );

    let contents = ProjectDeclaration::replace_all(contents, &version)?;
    let contents = JuceVersionString::replace_all(&contents, &version)?;

    Ok(Bump {
        project_name,
        previous,
        version,
        contents,
    })
}

/// Bumps the patch version of the build configuration at `path` and returns
/// the new version. The file is truncated and rewritten as a whole.
pub fn bump_version(path: impl AsRef<Path>) -> Result<Version> {
    let path = path.as_ref();
    let contents = read_contents(path)?;
    let bump = bump_contents(&contents, path)?;

    std::fs::write(path, &bump.contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(
        "Bumped {} from {} to {} in {}",
        bump.project_name,
        bump.previous,
        bump.version,
        path.display()
    );

    Ok(bump.version)
}

fn read_contents(path: &Path) -> Result<String> {
    debug!("Reading '{}'", path.display());
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
