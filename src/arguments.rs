use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about, bin_name = "cmake-bump")]
pub struct Arguments {
    /// Build configuration file holding the `project(... VERSION x.y.z)` declaration
    #[arg(default_value = "CMakeLists.txt")]
    pub path: PathBuf,
    #[arg(long, short)]
    pub verbose: bool,
    /// Print the current version without modifying the file
    #[arg(long, short)]
    pub current: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let args = Arguments::parse_from(["cmake-bump"]);
        assert_eq!(args.path, PathBuf::from("CMakeLists.txt"));
        assert!(!args.verbose);
        assert!(!args.current);
    }

    #[test]
    fn test_parse_path() {
        let args = Arguments::parse_from(["cmake-bump", "plugin/CMakeLists.txt"]);
        assert_eq!(args.path, PathBuf::from("plugin/CMakeLists.txt"));
    }

    #[test]
    fn test_parse_verbose() {
        let args = Arguments::parse_from(["cmake-bump", "-v"]);
        assert!(args.verbose);
    }

    #[test]
    fn test_parse_current() {
        let args = Arguments::parse_from(["cmake-bump", "-c"]);
        assert!(args.current);
    }

    #[test]
    fn test_parse_long_flags() {
        let args = Arguments::parse_from(["cmake-bump", "--verbose", "--current", "/test/CMakeLists.txt"]);
        assert!(args.verbose);
        assert!(args.current);
        assert_eq!(args.path, PathBuf::from("/test/CMakeLists.txt"));
    }

    #[test]
    fn test_rejects_unknown_flag() {
        let result = Arguments::try_parse_from(["cmake-bump", "--git-mode", "commit"]);
        assert!(result.is_err());
    }
}
