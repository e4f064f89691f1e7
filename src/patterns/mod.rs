use anyhow::Result;
use log::debug;
use regex::Regex;
use semver::Version;

pub mod juce_version_string;
pub mod project_declaration;

/// A textual occurrence of the project version inside a build configuration file.
pub trait VersionPattern {
    fn replace_all(contents: &str, version: &Version) -> Result<String> {
        let version_regex = Self::version_match_regex()?;
        debug!("Rewriting occurrences of '{}'", version_regex.as_str());
        Ok(version_regex
            .replace_all(contents, Self::version_line_format(version).as_str())
            .into_owned())
    }

    fn count_matches(contents: &str) -> Result<usize> {
        Ok(Self::version_match_regex()?.find_iter(contents).count())
    }

    fn version_match_regex() -> Result<&'static Regex>;
    fn version_line_format(version: &Version) -> String;
}
