use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Opens a file in whatever the platform considers its default viewer
pub trait Opener {
    fn open(&self, path: &Path) -> io::Result<()>;
}

/// Runs the platform "open" command. The child is spawned detached and never waited on:
/// we only know whether it could be started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemOpener {
    program: &'static str,
    leading_args: &'static [&'static str],
}

impl SystemOpener {
    pub fn for_current_platform() -> Self {
        if cfg!(target_os = "macos") {
            Self {
                program: "open",
                leading_args: &[],
            }
        } else if cfg!(windows) {
            // `start` is a cmd builtin and treats its first quoted argument as a window title
            Self {
                program: "cmd",
                leading_args: &["/C", "start", ""],
            }
        } else {
            Self {
                program: "xdg-open",
                leading_args: &[],
            }
        }
    }

    pub fn program(&self) -> &str {
        self.program
    }

    fn command(&self, path: &Path) -> Command {
        let mut command = Command::new(self.program);
        command
            .args(self.leading_args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl Default for SystemOpener {
    fn default() -> Self {
        Self::for_current_platform()
    }
}

impl Opener for SystemOpener {
    fn open(&self, path: &Path) -> io::Result<()> {
        let child = self.command(path).spawn()?;
        log::debug!("started {} with pid {}", self.program, child.id());
        Ok(())
    }
}

/// Does nothing, for when the page should not be opened
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopOpener;

impl Opener for NoopOpener {
    fn open(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_platform_program() {
        let opener = SystemOpener::for_current_platform();
        let expected = if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(windows) {
            "cmd"
        } else {
            "xdg-open"
        };
        assert_eq!(opener.program(), expected);
    }

    #[test]
    fn test_path_is_last_argument() {
        let opener = SystemOpener::for_current_platform();
        let command = opener.command(Path::new("/tmp/preview-theme.html"));
        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(args.last(), Some(&OsStr::new("/tmp/preview-theme.html")));
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let opener = SystemOpener {
            program: "theme-preview-no-such-opener",
            leading_args: &[],
        };
        assert!(opener.open(Path::new("page.html")).is_err());
    }
}
