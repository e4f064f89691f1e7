use crate::bumper::BumpError;
use crate::patterns::VersionPattern;
use anyhow::Result;
use log::debug;
use regex::Regex;
use semver::Version;
use std::sync::LazyLock;

static PROJECT_DECLARATION_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r#"project\(([\w-]+)\s+VERSION\s+([0-9]+)\.([0-9]+)\.([0-9]+)\)"#));

/// The project name and version read from a `project(<name> VERSION x.y.z)` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectVersion {
    pub project_name: String,
    pub version: Version,
}

pub struct ProjectDeclaration;

impl ProjectDeclaration {
    /// Reads the first declaration in `contents`, or `None` when there is none.
    pub fn find_version(contents: &str) -> Result<Option<ProjectVersion>> {
        let captures = match Self::version_match_regex()?.captures(contents) {
            Some(captures) => captures,
            None => return Ok(None),
        };

        let project_name = captures[1].to_string();
        let version = Version::new(
            parse_component("major", &captures[2])?,
            parse_component("minor", &captures[3])?,
            parse_component("patch", &captures[4])?,
        );
        debug!("Found project '{}' at version {}", project_name, version);

        Ok(Some(ProjectVersion { project_name, version }))
    }
}

impl VersionPattern for ProjectDeclaration {
    fn version_match_regex() -> Result<&'static Regex> {
        Ok(PROJECT_DECLARATION_REGEX.as_ref().map_err(Clone::clone)?)
    }

    // Each declaration keeps its own project name through `${1}`.
    fn version_line_format(version: &Version) -> String {
        format!(
            "project(${{1}} VERSION {}.{}.{})",
            version.major, version.minor, version.patch
        )
    }
}

fn parse_component(component: &'static str, value: &str) -> Result<u64> {
    value.parse::<u64>().map_err(|_| {
        BumpError::InvalidComponent {
            component,
            value: value.to_string(),
        }
        .into()
    })
}
