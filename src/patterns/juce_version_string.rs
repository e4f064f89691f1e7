use crate::patterns::VersionPattern;
use regex::Regex;
use semver::Version;
use std::sync::LazyLock;

static JUCE_VERSION_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r#"JucePlugin_VersionString="([0-9]+)\.([0-9]+)\.([0-9]+)""#));

pub struct JuceVersionString;

impl VersionPattern for JuceVersionString {
    fn version_match_regex() -> anyhow::Result<&'static Regex> {
        Ok(JUCE_VERSION_REGEX.as_ref().map_err(Clone::clone)?)
    }

    fn version_line_format(version: &Version) -> String {
        format!(
            r#"JucePlugin_VersionString="{}.{}.{}""#,
            version.major, version.minor, version.patch
        )
    }
}
