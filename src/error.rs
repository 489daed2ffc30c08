use std::fmt;
use std::io;
use std::path::PathBuf;

pub(crate) type PreviewResult<T> = Result<T, Error>;

/// Errors that can occur while building a preview page
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// No theme file was given on the command line.
    MissingArgument,

    /// The theme file does not exist.
    FileNotFound(PathBuf),

    /// The theme file exists but could not be read, e.g. it is a directory.
    #[allow(missing_docs)]
    Read { path: PathBuf, source: io::Error },

    /// Any other I/O error, e.g. when resolving the output path.
    Io(io::Error),

    /// The theme file is not valid JSON or does not look like a theme document.
    #[allow(missing_docs)]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The preview page could not be written, or its directory could not be created.
    #[allow(missing_docs)]
    Write { path: PathBuf, source: io::Error },
}

impl Error {
    /// Whether the binary should print its usage line alongside this error.
    /// Only input problems are usage errors: a failed write is not the caller's fault.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Error::MissingArgument
                | Error::FileNotFound(_)
                | Error::Read { .. }
                | Error::InvalidJson { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingArgument => write!(f, "missing theme file argument"),
            Error::FileNotFound(path) => write!(f, "theme file '{}' not found", path.display()),
            Error::Read { path, source } => {
                write!(f, "failed to read '{}': {}", path.display(), source)
            }
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::InvalidJson { path, source } => {
                write!(f, "invalid JSON in '{}': {}", path.display(), source)
            }
            Error::Write { path, source } => {
                write!(f, "failed to write '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Read { source, .. } => Some(source),
            Error::InvalidJson { source, .. } => Some(source),
            Error::Write { source, .. } => Some(source),
            Error::MissingArgument | Error::FileNotFound(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors() {
        assert!(Error::MissingArgument.is_usage_error());
        assert!(Error::FileNotFound(PathBuf::from("theme.json")).is_usage_error());
        let read = Error::Read {
            path: PathBuf::from("themes"),
            source: io::Error::other("is a directory"),
        };
        assert!(read.is_usage_error());
        assert!(!Error::Io(io::Error::other("no cwd")).is_usage_error());
        let write = Error::Write {
            path: PathBuf::from("out.html"),
            source: io::Error::other("disk full"),
        };
        assert!(!write.is_usage_error());
    }

    #[test]
    fn test_display_mentions_path() {
        let err = Error::FileNotFound(PathBuf::from("missing/theme.json"));
        assert_eq!(err.to_string(), "theme file 'missing/theme.json' not found");
    }
}
