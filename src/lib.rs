mod error;
mod length;
mod opener;
mod output;
mod renderers;
mod tokens;

use std::path::PathBuf;

pub use error::Error;
pub use length::{
    ClampExpr, ROOT_FONT_SIZE_PX, VIEWPORT_WIDTH_PX, length_to_approx_pixels, parse_length_px,
};
pub use opener::{NoopOpener, Opener, SystemOpener};
pub use output::{DEFAULT_OUTPUT_FILE, resolve_output_path, write_page};
pub use renderers::html::{
    HtmlRenderer, render_color_swatches, render_font_families, render_font_sizes, render_spacing,
};
pub use renderers::{Category, DEFAULT_NAMESPACE, Labels, Locale, RenderOptions};
pub use tokens::{
    ColorSettings, ColorToken, FontFamilyToken, FontSizeToken, Settings, ThemeDocument,
    Typography, display_value,
};

pub const PREVIEW_CSS: &str = r#"body { font-family: sans-serif; padding: 2rem; max-width: 900px; margin: auto; }
h1 { text-align: center; }
h2 { margin-top: 3rem; border-bottom: 2px solid #ccc; padding-bottom: .5rem; }
.copyable {
  cursor: pointer;
  user-select: all;
  background: #f0f0f0;
  padding: 2px 4px;
  border-radius: 3px;
  display: inline-block;
}
.copyable:hover {
  background: #ddd;
}
.color-swatch {
  display: flex;
  align-items: center;
  margin-bottom: 10px;
}
.color-box {
  width: 40px; height: 40px; border-radius: 4px; margin-right: 10px; border: 1px solid #ccc;
}
.color-info > div {
  margin: 2px 0;
}
.font-sample {
  margin-bottom: 20px;
}
.sample-text {
  margin-top: 5px;
  border: 1px solid #ddd;
  padding: 5px;
  background: #fafafa;
}
.font-size-sample, .spacing-sample {
  margin-bottom: 20px;
}
.font-size-demo {
  border: 1px solid #ddd;
  padding: 4px;
  margin-top: 4px;
}
.spacing-bar {
  background: #eee;
  height: 20px;
  margin-top: 4px;
  border: 1px solid #ccc;
}
"#;

/// Everything a single run needs, usually built from the command line
#[derive(Debug, Clone, Default)]
pub struct PreviewArgs {
    /// The theme JSON file. `None` is an error, kept optional so the caller gets
    /// [`Error::MissingArgument`] instead of a parser-specific failure.
    pub input: Option<PathBuf>,
    /// Defaults to [`DEFAULT_OUTPUT_FILE`] in the working directory
    pub output: Option<PathBuf>,
    /// Open the page once written
    pub open: bool,
    pub options: RenderOptions,
}

/// What a successful run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOutcome {
    /// Absolute path of the written page
    pub path: PathBuf,
    /// Whether an opener was started. `false` if not requested or if it failed to start.
    pub opened: bool,
}

/// Loads the theme, renders it and writes the page. Nothing is written if loading fails.
/// A failure to start the opener is logged and otherwise ignored.
pub fn run(args: &PreviewArgs, opener: &dyn Opener) -> Result<PreviewOutcome, Error> {
    let input = args.input.as_deref().ok_or(Error::MissingArgument)?;
    let document = ThemeDocument::load_from_file(input)?;
    log::info!("loaded theme tokens from {}", input.display());

    let html = HtmlRenderer::new(args.options.clone()).render_page(&document);
    let path = resolve_output_path(args.output.as_deref())?;
    write_page(&path, &html)?;
    log::info!("wrote {} bytes to {}", html.len(), path.display());

    let opened = if args.open {
        match opener.open(&path) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("could not open {}: {}", path.display(), err);
                false
            }
        }
    } else {
        false
    };

    Ok(PreviewOutcome { path, opened })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use std::io;
    use std::path::Path;

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<PathBuf>>,
    }

    impl Opener for RecordingOpener {
        fn open(&self, path: &Path) -> io::Result<()> {
            self.opened.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    struct FailingOpener;

    impl Opener for FailingOpener {
        fn open(&self, _path: &Path) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no opener"))
        }
    }

    const THEME: &str = r##"{
        "settings": {
            "typography": {
                "fontSizes": [{"name": "Medium", "slug": "medium", "size": "clamp(1rem, 20px, 2vw)"}]
            },
            "color": {"palette": [{"name": "Primary", "color": "#112233"}]}
        }
    }"##;

    fn write_theme(dir: &Path) -> PathBuf {
        let path = dir.join("theme.json");
        fs::write(&path, THEME).unwrap();
        path
    }

    #[test]
    fn test_missing_argument_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.html");
        let args = PreviewArgs {
            output: Some(output.clone()),
            ..Default::default()
        };
        let err = run(&args, &NoopOpener).unwrap_err();
        assert!(matches!(err, Error::MissingArgument));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_file_leaves_existing_output_alone() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.html");
        fs::write(&output, "previous").unwrap();
        let args = PreviewArgs {
            input: Some(dir.path().join("missing.json")),
            output: Some(output.clone()),
            ..Default::default()
        };
        let err = run(&args, &NoopOpener).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
        assert!(err.is_usage_error());
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn test_writes_page() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("site/preview.html");
        let args = PreviewArgs {
            input: Some(write_theme(dir.path())),
            output: Some(output.clone()),
            ..Default::default()
        };
        let outcome = run(&args, &NoopOpener).unwrap();
        assert_eq!(outcome.path, output);
        assert!(!outcome.opened);

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("~25px"));
        assert!(html.contains("var(--wp--preset--font-size--medium)"));
    }

    #[test]
    fn test_runs_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("preview.html");
        let args = PreviewArgs {
            input: Some(write_theme(dir.path())),
            output: Some(output.clone()),
            ..Default::default()
        };
        run(&args, &NoopOpener).unwrap();
        let first = fs::read(&output).unwrap();
        run(&args, &NoopOpener).unwrap();
        assert_eq!(first, fs::read(&output).unwrap());
    }

    #[test]
    fn test_open_uses_written_path() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("preview.html");
        let args = PreviewArgs {
            input: Some(write_theme(dir.path())),
            output: Some(output.clone()),
            open: true,
            ..Default::default()
        };
        let opener = RecordingOpener::default();
        let outcome = run(&args, &opener).unwrap();
        assert!(outcome.opened);
        assert_eq!(*opener.opened.borrow(), vec![output]);
    }

    #[test]
    fn test_opener_failure_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("preview.html");
        let args = PreviewArgs {
            input: Some(write_theme(dir.path())),
            output: Some(output.clone()),
            open: true,
            ..Default::default()
        };
        let outcome = run(&args, &FailingOpener).unwrap();
        assert!(!outcome.opened);
        assert!(output.exists());
    }
}
