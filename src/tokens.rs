use std::fs;
use std::io;
use std::path::Path;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::{Error, PreviewResult};

/// A theme token document, as found in a WordPress `theme.json`.
/// Only the parts we render are kept, everything else is ignored.
///
/// Every level is read leniently: a category with the wrong shape is treated as absent and a
/// list entry that isn't an object is skipped, so one bad token never hides the others.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeDocument {
    #[serde(deserialize_with = "deserialize_lenient", default)]
    pub settings: Option<Settings>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(deserialize_with = "deserialize_lenient", default)]
    pub typography: Option<Typography>,
    /// Kept as a raw JSON object: values are usually lengths but themes also put
    /// `units`, `spacingSizes` and such in there.
    #[serde(deserialize_with = "deserialize_lenient", default)]
    pub spacing: Option<Map<String, Value>>,
    #[serde(deserialize_with = "deserialize_lenient", default)]
    pub color: Option<ColorSettings>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Typography {
    #[serde(
        rename = "fontFamilies",
        deserialize_with = "deserialize_lenient_list",
        default
    )]
    pub font_families: Option<Vec<FontFamilyToken>>,
    #[serde(
        rename = "fontSizes",
        deserialize_with = "deserialize_lenient_list",
        default
    )]
    pub font_sizes: Option<Vec<FontSizeToken>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorSettings {
    #[serde(deserialize_with = "deserialize_lenient_list", default)]
    pub palette: Option<Vec<ColorToken>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ColorToken {
    #[serde(deserialize_with = "deserialize_lenient_string", default)]
    pub name: String,
    #[serde(deserialize_with = "deserialize_lenient_string", default)]
    pub slug: String,
    #[serde(deserialize_with = "deserialize_lenient_string", default)]
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FontFamilyToken {
    #[serde(deserialize_with = "deserialize_lenient_string", default)]
    pub name: String,
    #[serde(deserialize_with = "deserialize_lenient_string", default)]
    pub slug: String,
    #[serde(
        rename = "fontFamily",
        deserialize_with = "deserialize_lenient_string",
        default
    )]
    pub font_family: String,
    #[serde(
        rename = "fontWeight",
        deserialize_with = "deserialize_lenient_string",
        default
    )]
    font_weight: String,
}

impl FontFamilyToken {
    pub const DEFAULT_FONT_WEIGHT: &'static str = "normal";

    pub fn font_weight(&self) -> &str {
        if self.font_weight.is_empty() {
            Self::DEFAULT_FONT_WEIGHT
        } else {
            &self.font_weight
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FontSizeToken {
    #[serde(deserialize_with = "deserialize_lenient_string", default)]
    pub name: String,
    #[serde(deserialize_with = "deserialize_lenient_string", default)]
    pub slug: String,
    #[serde(deserialize_with = "deserialize_lenient_string", default)]
    pub size: String,
}

impl ThemeDocument {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PreviewResult<Self> {
        let path = path.as_ref();
        let content = fs::read(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let invalid_json = |source| Error::InvalidJson {
            path: path.to_path_buf(),
            source,
        };

        let value: Value = serde_json::from_slice(&content).map_err(invalid_json)?;
        if !value.is_object() {
            return Err(invalid_json(de::Error::custom(
                "expected a JSON object at the top level",
            )));
        }
        serde_json::from_value(value).map_err(invalid_json)
    }

    fn settings(&self) -> Option<&Settings> {
        self.settings.as_ref()
    }

    pub fn font_families(&self) -> Option<&[FontFamilyToken]> {
        self.settings()?
            .typography
            .as_ref()
            .and_then(|t| t.font_families.as_deref())
    }

    pub fn font_sizes(&self) -> Option<&[FontSizeToken]> {
        self.settings()?
            .typography
            .as_ref()
            .and_then(|t| t.font_sizes.as_deref())
    }

    pub fn spacing(&self) -> Option<&Map<String, Value>> {
        self.settings()?.spacing.as_ref()
    }

    pub fn palette(&self) -> Option<&[ColorToken]> {
        self.settings()?
            .color
            .as_ref()
            .and_then(|c| c.palette.as_deref())
    }
}

/// How a scalar JSON value shows up in the page: strings as-is, `null` as nothing,
/// anything else as its compact JSON text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Accepts any JSON value for a text field so one odd token doesn't make the whole
/// document unreadable.
fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(display_value(&value))
}

/// A value of the wrong shape reads as absent instead of failing the document.
fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            log::warn!("ignoring malformed theme setting: {err}");
            Ok(None)
        }
    }
}

/// A token list: anything but an array is absent and entries that aren't objects are skipped.
fn deserialize_lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };

    let mut tokens = Vec::with_capacity(items.len());
    for item in items {
        if !item.is_object() {
            log::warn!("skipping token entry that is not an object: {item}");
            continue;
        }
        match serde_json::from_value(item) {
            Ok(token) => tokens.push(token),
            Err(err) => log::warn!("skipping malformed token entry: {err}"),
        }
    }
    Ok(Some(tokens))
}
