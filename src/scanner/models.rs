//! Data models for extracted classes.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::constants::{is_private_name, RESOURCE_SCHEME};

/// A field or parameter: name, written type and default expression text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub name: String,
    /// Type as written in source; `None` means inferred.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    /// Default expression kept as source text, never evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl Meta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

/// A non-exported class-level variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    #[serde(flatten)]
    pub meta: Meta,
    pub is_private: bool,
}

impl From<Meta> for Variable {
    fn from(meta: Meta) -> Self {
        let is_private = is_private_name(&meta.name);
        Self { meta, is_private }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    /// In declaration order.
    pub parameters: Vec<Meta>,
}

/// The public surface of one script class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInfo {
    /// `None` for scripts without a `class_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends_class: Option<String>,
    pub exports: Vec<Meta>,
    pub variables: Vec<Variable>,
    pub functions: Vec<Function>,
}

impl ClassInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// `res://` path of a script, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ResourcePath(String);

impl ResourcePath {
    /// Build from a path relative to the scanned root; separators become `/`.
    pub fn from_relative(rel: &Path) -> Self {
        let joined: Vec<_> = rel
            .components()
            .filter_map(|c| match c {
                std::path::Component::Normal(s) => Some(s.to_string_lossy()),
                _ => None,
            })
            .collect();
        Self(format!("{}{}", RESOURCE_SCHEME, joined.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name without its extension (`res://a/b/player.gd` -> `player`).
    pub fn stem(&self) -> &str {
        let file = self.0.rsplit('/').next().unwrap_or(&self.0);
        match file.rfind('.') {
            Some(0) | None => file,
            Some(dot) => &file[..dot],
        }
    }
}

impl std::fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classes extracted from one script, tagged with where they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptClasses {
    #[serde(skip)]
    pub file: PathBuf,
    pub resource_path: ResourcePath,
    pub classes: Vec<ClassInfo>,
}

/// A script dropped from the aggregate, with the reason.
#[derive(Debug)]
pub struct ScanFailure {
    pub file: PathBuf,
    pub error: crate::Error,
}

/// Result of scanning a project.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub scripts: Vec<ScriptClasses>,
    pub failures: Vec<ScanFailure>,
}

impl ScanResult {
    pub fn class_count(&self) -> usize {
        self.scripts.iter().map(|s| s.classes.len()).sum()
    }
}
