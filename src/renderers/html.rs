use std::fmt;
use std::fmt::Write;

use serde_json::{Map, Value};

use crate::PREVIEW_CSS;
use crate::length::length_to_approx_pixels;
use crate::renderers::{Category, Labels, RenderOptions};
use crate::tokens::{ColorToken, FontFamilyToken, FontSizeToken, ThemeDocument, display_value};

#[derive(Debug, PartialEq, Eq, Clone, Default)]
/// A renderer that will output a complete, self-contained HTML page
pub struct HtmlRenderer {
    pub options: RenderOptions,
}

impl HtmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Renders the whole preview page. Sections always come in the same order and a category
    /// that is missing or empty gets no section at all.
    pub fn render_page(&self, document: &ThemeDocument) -> String {
        let options = &self.options;
        let labels = options.labels();
        let mut sections = String::new();

        if let Some(families) = document.font_families().filter(|f| !f.is_empty()) {
            log::debug!("rendering {} font families", families.len());
            push_section(
                &mut sections,
                labels.font_families,
                &render_font_families(families, options),
            );
        }
        if let Some(sizes) = document.font_sizes().filter(|s| !s.is_empty()) {
            log::debug!("rendering {} font sizes", sizes.len());
            push_section(
                &mut sections,
                labels.font_sizes,
                &render_font_sizes(sizes, options),
            );
        }
        if let Some(spacing) = document.spacing().filter(|s| !s.is_empty()) {
            log::debug!("rendering {} spacing values", spacing.len());
            push_section(
                &mut sections,
                labels.spacing,
                &render_spacing(spacing, options),
            );
        }
        if let Some(palette) = document.palette().filter(|p| !p.is_empty()) {
            log::debug!("rendering {} colors", palette.len());
            push_section(
                &mut sections,
                labels.palette,
                &render_color_swatches(palette, options),
            );
        }

        let lang = options.locale.code();
        let title = HtmlEscaped(labels.title);
        let heading = HtmlEscaped(labels.heading);
        let script = copy_script(labels);

        format!(
            r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="UTF-8" />
<title>{title}</title>
<style>
{PREVIEW_CSS}</style>
<script>
{script}</script>
</head>
<body>
<h1>{heading}</h1>
{sections}</body>
</html>
"#
        )
    }
}

fn push_section(out: &mut String, heading: &str, body: &str) {
    let _ = writeln!(out, "<h2>{}</h2>", HtmlEscaped(heading));
    out.push_str(body);
}

/// The clipboard helper called by every copyable variable. Alert messages are JSON-encoded,
/// which makes them valid JS string literals.
fn copy_script(labels: &Labels) -> String {
    let copied = Value::from(labels.copied);
    let unsupported = Value::from(labels.copy_unsupported);
    format!(
        r#"function copyToClipboard(text) {{
  if (navigator.clipboard) {{
    navigator.clipboard.writeText(text).then(() => {{
      alert({copied} + text);
    }});
  }} else {{
    alert({unsupported});
  }}
}}
"#
    )
}

/// A clickable `<code>` that copies the variable name. The value travels in `data-copy`
/// so nothing in it ends up inside JS source.
fn copyable_variable(variable: &str, labels: &Labels) -> String {
    let variable = HtmlEscaped(variable);
    format!(
        r#"<code class="copyable" title="{}" data-copy="{variable}" onclick="copyToClipboard(this.dataset.copy)">{variable}</code>"#,
        HtmlEscaped(labels.copy_title)
    )
}

/// ` — <copyable>` or nothing
fn copyable_suffix(options: &RenderOptions, category: Category, slug: &str) -> String {
    options
        .css_variable(category, slug)
        .map(|var| format!(" — {}", copyable_variable(&var, options.labels())))
        .unwrap_or_default()
}

/// ` — ~Npx` or nothing
fn approx_px_suffix(value: &str) -> String {
    length_to_approx_pixels(value)
        .map(|px| format!(" — ~{px}px"))
        .unwrap_or_default()
}

pub fn render_font_families(families: &[FontFamilyToken], options: &RenderOptions) -> String {
    let labels = options.labels();
    let mut out = String::new();

    for family in families {
        let weight = HtmlEscaped(family.font_weight());
        let _ = write!(
            out,
            r#"<div class="font-sample" style="font-family:{}; font-weight:{weight}">
<div><strong>{}</strong> — {}: {weight}{}</div>
<div class="sample-text">{}</div>
</div>
"#,
            HtmlEscaped(&family.font_family),
            HtmlEscaped(&family.name),
            HtmlEscaped(labels.weight),
            copyable_suffix(options, Category::FontFamily, &family.slug),
            HtmlEscaped(labels.sample_text),
        );
    }

    out
}

pub fn render_font_sizes(sizes: &[FontSizeToken], options: &RenderOptions) -> String {
    let labels = options.labels();
    let mut out = String::new();

    for font_size in sizes {
        let size = HtmlEscaped(&font_size.size);
        let _ = write!(
            out,
            r#"<div class="font-size-sample">
<div><strong>{}</strong> — {}: {size}{}{}</div>
<div class="font-size-demo" style="font-size:{size}">{}</div>
</div>
"#,
            HtmlEscaped(&font_size.name),
            HtmlEscaped(labels.css_size),
            approx_px_suffix(&font_size.size),
            copyable_suffix(options, Category::FontSize, &font_size.slug),
            HtmlEscaped(labels.sample_text),
        );
    }

    out
}

/// Spacing entries are rendered in document order. The bar uses the pixel estimate when there
/// is one and the raw CSS value otherwise.
pub fn render_spacing(spacing: &Map<String, Value>, options: &RenderOptions) -> String {
    let labels = options.labels();
    let mut out = String::new();

    for (key, value) in spacing {
        let raw = display_value(value);
        let width = match (length_to_approx_pixels(&raw), value) {
            (Some(px), _) => format!("{px}px"),
            (None, Value::String(s)) => s.clone(),
            (None, _) => "0".to_string(),
        };
        let _ = write!(
            out,
            r#"<div class="spacing-sample">
<div><strong>{}</strong> — {}: {}{}{}</div>
<div class="spacing-bar" style="width:{}"></div>
</div>
"#,
            HtmlEscaped(key),
            HtmlEscaped(labels.css_value),
            HtmlEscaped(&raw),
            approx_px_suffix(&raw),
            copyable_suffix(options, Category::Spacing, key),
            HtmlEscaped(&width),
        );
    }

    out
}

pub fn render_color_swatches(colors: &[ColorToken], options: &RenderOptions) -> String {
    let mut out = String::new();

    for color in colors {
        let value = HtmlEscaped(&color.color);
        let _ = writeln!(
            out,
            r#"<div class="color-swatch">
<div class="color-box" style="background:{value}"></div>
<div class="color-info">
<div><strong>{}</strong></div>"#,
            HtmlEscaped(&color.name)
        );
        if let Some(var) = options.css_variable(Category::Color, &color.slug) {
            let _ = writeln!(out, "<div>{}</div>", copyable_variable(&var, options.labels()));
        }
        let _ = write!(
            out,
            r#"<div>{value}</div>
</div>
</div>
"#
        );
    }

    out
}

// From syntect
pub(crate) struct HtmlEscaped<'a>(pub &'a str);
impl fmt::Display for HtmlEscaped<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(s) = *self;
        let mut last = 0;
        for (i, ch) in s.bytes().enumerate() {
            let escaped = match ch {
                b'>' => "&gt;",
                b'<' => "&lt;",
                b'&' => "&amp;",
                b'\'' => "&#39;",
                b'"' => "&quot;",
                _ => continue,
            };
            fmt.write_str(&s[last..i])?;
            fmt.write_str(escaped)?;
            last = i + 1;
        }

        if last < s.len() {
            fmt.write_str(&s[last..])?;
        }
        Ok(())
    }
}
