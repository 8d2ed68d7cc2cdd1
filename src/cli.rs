//! Command line flags accepted at launch.

use std::path::PathBuf;

use anyhow::{Result, anyhow};

/// Per-run overrides that are never written back to settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// `--media <dir>`: directory holding the `media/` folder.
    pub media_dir: Option<PathBuf>,
    /// `--tour`: start cycling features immediately.
    pub start_tour: bool,
}

impl LaunchOptions {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut options = LaunchOptions::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--media" => {
                    let dir = args
                        .next()
                        .ok_or_else(|| anyhow!("--media requires a directory"))?;
                    options.media_dir = Some(PathBuf::from(dir));
                }
                "--tour" => options.start_tour = true,
                other => log::warn!("ignoring unknown argument {other}"),
            }
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_means_defaults() {
        assert_eq!(LaunchOptions::parse(args(&[])).unwrap(), LaunchOptions::default());
    }

    #[test]
    fn media_and_tour_flags() {
        let options = LaunchOptions::parse(args(&["--tour", "--media", "/srv/wike"])).unwrap();
        assert!(options.start_tour);
        assert_eq!(options.media_dir, Some(PathBuf::from("/srv/wike")));
    }

    #[test]
    fn media_without_value_is_an_error() {
        assert!(LaunchOptions::parse(args(&["--media"])).is_err());
    }

    #[test]
    fn unknown_arguments_are_ignored() {
        let options = LaunchOptions::parse(args(&["--startup", "--tour"])).unwrap();
        assert!(options.start_tour);
    }
}
