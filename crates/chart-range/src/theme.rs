// File: crates/chart-range/src/theme.rs
// Summary: Theme registry (named style option trees with inheritance and aliases) and the iOS theme.

use std::collections::HashMap;

use log::{debug, warn};
use serde_json::{json, Map, Value};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
    #[error("theme '{theme}' derives from unregistered base '{base}'")]
    UnknownBase { theme: String, base: String },
    #[error("options for theme '{0}' must be an object")]
    InvalidOptions(String),
    #[error("theme '{theme}' has no option '{path}'")]
    MissingKey { theme: String, path: String },
    #[error("option '{path}' is not a #rgb/#rrggbb color: {value}")]
    InvalidColor { path: String, value: String },
    #[error("option '{path}' is not a number")]
    NotANumber { path: String },
}

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb` or `#rrggbb` (opaque).
    pub fn parse_hex(text: &str) -> Option<Self> {
        let hex = text.trim().strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => {
                let mut it = hex.chars().map(|c| channel(&c.to_string()).map(|v| v * 17));
                Some(Self::from_argb(255, it.next()??, it.next()??, it.next()??))
            }
            6 => Some(Self::from_argb(255, channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            _ => None,
        }
    }
}

/// A registered theme with its base options already merged in.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: String,
    pub base: Option<String>,
    pub options: Value,
}

impl Theme {
    /// Option at a dot-separated path, e.g. `"legend.font.color"`.
    pub fn get(&self, path: &str) -> Result<&Value, ThemeError> {
        path.split('.')
            .try_fold(&self.options, |node, key| node.get(key))
            .ok_or_else(|| ThemeError::MissingKey { theme: self.name.clone(), path: path.to_string() })
    }

    pub fn color(&self, path: &str) -> Result<Rgba, ThemeError> {
        let value = self.get(path)?;
        value
            .as_str()
            .and_then(Rgba::parse_hex)
            .ok_or_else(|| ThemeError::InvalidColor { path: path.to_string(), value: value.to_string() })
    }

    pub fn number(&self, path: &str) -> Result<f64, ThemeError> {
        self.get(path)?
            .as_f64()
            .ok_or_else(|| ThemeError::NotANumber { path: path.to_string() })
    }
}

/// Registration interface handed to theme definitions by the composition root.
pub trait ThemeSink {
    fn register_theme(&mut self, name: &str, options: Value, base: Option<&str>) -> Result<(), ThemeError>;
    fn register_theme_alias(&mut self, alias: &str, target: &str) -> Result<(), ThemeError>;
}

/// Name-keyed theme store. Names are case-insensitive; a theme's base must be
/// registered before the theme itself.
#[derive(Clone, Debug, Default)]
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    aliases: HashMap<String, String>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Look a theme up by name or alias.
    pub fn find(&self, name: &str) -> Option<&Theme> {
        let key = normalize(name);
        self.themes
            .get(&key)
            .or_else(|| self.aliases.get(&key).and_then(|target| self.themes.get(target)))
    }

    pub fn theme(&self, name: &str) -> Result<&Theme, ThemeError> {
        self.find(name).ok_or_else(|| ThemeError::UnknownTheme(name.to_string()))
    }

    /// Registered theme names (aliases excluded), sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl ThemeSink for ThemeRegistry {
    fn register_theme(&mut self, name: &str, options: Value, base: Option<&str>) -> Result<(), ThemeError> {
        let key = normalize(name);
        if !options.is_object() {
            return Err(ThemeError::InvalidOptions(key));
        }
        let merged = match base {
            Some(base) => {
                let parent = self.find(base).ok_or_else(|| ThemeError::UnknownBase {
                    theme: key.clone(),
                    base: base.to_string(),
                })?;
                deep_merge(&parent.options, &options)
            }
            None => options,
        };
        if self.themes.contains_key(&key) {
            warn!("theme '{key}' registered twice; replacing previous definition");
        }
        debug!("registered theme '{key}' (base: {:?})", base);
        self.aliases.remove(&key);
        self.themes.insert(
            key.clone(),
            Theme { name: key, base: base.map(normalize), options: merged },
        );
        Ok(())
    }

    fn register_theme_alias(&mut self, alias: &str, target: &str) -> Result<(), ThemeError> {
        let resolved = self.theme(target)?.name.clone();
        let alias = normalize(alias);
        debug!("registered theme alias '{alias}' -> '{resolved}'");
        self.aliases.insert(alias, resolved);
        Ok(())
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Recursive object merge; `over` wins on scalar conflicts.
fn deep_merge(base: &Value, over: &Value) -> Value {
    match (base, over) {
        (Value::Object(b), Value::Object(o)) => {
            let mut out: Map<String, Value> = b.clone();
            for (key, value) in o {
                let merged = match b.get(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value.clone(),
                };
                out.insert(key.clone(), merged);
            }
            Value::Object(out)
        }
        _ => over.clone(),
    }
}

pub const IOS7_DEFAULT: &str = "ios7.default";
pub const IOS_ALIAS: &str = "ios";
pub const GENERIC_LIGHT: &str = "generic.light";

const SECONDARY_TEXT_COLOR: &str = "#767676";
const BORDER_COLOR: &str = "#d3d3d3";
const BLACK: &str = "#000000";

/// Register "ios7.default" on top of "generic.light", plus the "ios" alias.
/// The base theme has to be registered first.
pub fn register_ios_theme<S: ThemeSink + ?Sized>(sink: &mut S) -> Result<(), ThemeError> {
    let options = json!({
        "backgroundColor": "#ffffff",
        "primaryTitleColor": BLACK,
        "secondaryTitleColor": SECONDARY_TEXT_COLOR,
        "axisColor": "#ececec",
        "axisLabelColor": SECONDARY_TEXT_COLOR,
        "legend": { "font": { "color": BLACK } },
        "tooltip": { "font": { "color": SECONDARY_TEXT_COLOR } },
        "chart:common": {
            "commonSeriesSettings": { "label": { "border": { "color": BORDER_COLOR } } }
        },
        "chart": {
            "commonPaneSettings": { "border": { "color": BORDER_COLOR } }
        },
        "rangeSelector": {
            "scale": {
                "tick": { "color": BLACK, "opacity": 0.1 },
                "minorTick": { "color": BLACK, "opacity": 0.03 }
            }
        }
    });
    sink.register_theme(IOS7_DEFAULT, options, Some(GENERIC_LIGHT))?;
    sink.register_theme_alias(IOS_ALIAS, IOS7_DEFAULT)
}
