use std::fmt;
use std::str::FromStr;

pub mod html;

/// Default prefix of the generated CSS custom properties, as used by WordPress presets
pub const DEFAULT_NAMESPACE: &str = "wp--preset";

/// The language of the text written in the preview page
#[derive(Default, Copy, Clone, Eq, PartialEq, Debug)]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::Fr => &FRENCH,
            Locale::En => &ENGLISH,
        }
    }

    /// Value of the `lang` attribute of the page
    pub fn code(self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fr" => Ok(Locale::Fr),
            "en" => Ok(Locale::En),
            other => Err(format!("unknown language '{other}', expected 'fr' or 'en'")),
        }
    }
}

/// Every piece of text the page shows
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub heading: &'static str,
    pub font_families: &'static str,
    pub font_sizes: &'static str,
    pub spacing: &'static str,
    pub palette: &'static str,
    pub weight: &'static str,
    pub css_size: &'static str,
    pub css_value: &'static str,
    pub sample_text: &'static str,
    pub copy_title: &'static str,
    pub copied: &'static str,
    pub copy_unsupported: &'static str,
    /// Console messages of the binary
    pub generated: &'static str,
    pub opening: &'static str,
    pub usage: &'static str,
}

static FRENCH: Labels = Labels {
    title: "Preview theme.json",
    heading: "Preview du theme.json",
    font_families: "Typographies",
    font_sizes: "Tailles de police",
    spacing: "Espacements",
    palette: "Palette de couleurs",
    weight: "poids",
    css_size: "taille CSS",
    css_value: "valeur CSS",
    sample_text: "Le vif renard brun saute par-dessus le chien paresseux.",
    copy_title: "Copier la variable CSS",
    copied: "Copié dans le presse-papiers : ",
    copy_unsupported: "Impossible de copier (fonction non supportée)",
    generated: "Fichier généré :",
    opening: "Ouverture dans le navigateur...",
    usage: "Usage : theme-preview ./theme.json [chemin/de/sortie.html] [--open]",
};

static ENGLISH: Labels = Labels {
    title: "Preview theme.json",
    heading: "theme.json preview",
    font_families: "Font families",
    font_sizes: "Font sizes",
    spacing: "Spacing",
    palette: "Color palette",
    weight: "weight",
    css_size: "CSS size",
    css_value: "CSS value",
    sample_text: "The quick brown fox jumps over the lazy dog.",
    copy_title: "Copy the CSS variable",
    copied: "Copied to clipboard: ",
    copy_unsupported: "Unable to copy (not supported)",
    generated: "Generated:",
    opening: "Opening in browser...",
    usage: "Usage: theme-preview ./theme.json [path/to/output.html] [--open]",
};

/// The token categories, as they appear in the CSS variable names
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Category {
    Color,
    FontFamily,
    FontSize,
    Spacing,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Color => "color",
            Category::FontFamily => "font-family",
            Category::FontSize => "font-size",
            Category::Spacing => "spacing",
        }
    }
}

/// The options we can set for rendering a preview page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub(crate) namespace: String,
    pub(crate) locale: Locale,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            locale: Locale::default(),
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix of the CSS variables, without the leading `--`
    pub fn namespace(mut self, value: impl Into<String>) -> Self {
        self.namespace = value.into();
        self
    }

    pub fn locale(mut self, value: Locale) -> Self {
        self.locale = value;
        self
    }

    pub fn labels(&self) -> &'static Labels {
        self.locale.labels()
    }

    /// `var(--<namespace>--<category>--<slug>)`, or nothing if there is no slug to build it from
    pub fn css_variable(&self, category: Category, slug: &str) -> Option<String> {
        if slug.is_empty() {
            return None;
        }
        Some(format!(
            "var(--{}--{}--{})",
            self.namespace,
            category.as_str(),
            slug
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_variable() {
        let options = RenderOptions::default();
        assert_eq!(
            options.css_variable(Category::FontSize, "large"),
            Some("var(--wp--preset--font-size--large)".to_string())
        );
        assert_eq!(options.css_variable(Category::Color, ""), None);
    }

    #[test]
    fn test_custom_namespace() {
        let options = RenderOptions::new().namespace("ds");
        assert_eq!(
            options.css_variable(Category::Spacing, "40"),
            Some("var(--ds--spacing--40)".to_string())
        );
    }

    #[test]
    fn test_console_messages_follow_locale() {
        let fr = Locale::Fr.labels();
        let en = Locale::En.labels();
        assert_eq!(fr.generated, "Fichier généré :");
        assert!(fr.usage.starts_with("Usage : theme-preview"));
        assert_eq!(en.opening, "Opening in browser...");
        assert_ne!(fr.usage, en.usage);
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("fr".parse::<Locale>(), Ok(Locale::Fr));
        assert!("de".parse::<Locale>().is_err());
    }
}
