//! Tipos de parámetro: declaración (`ParameterSpec`) y valor explícito
//! (`ParameterValue`).
//!
//! El valor de un parámetro es un string escalar o una lista ordenada de
//! strings. En JSON se representa sin tag: `"x"` o `["a", "b"]`.

use serde::{Deserialize, Serialize};

/// Valor escalar o arreglo de strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ArrayOrString {
    String(String),
    Array(Vec<String>),
}

impl ArrayOrString {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn array<I, S>(values: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self::Array(values.into_iter().map(Into::into).collect())
    }

    /// Devuelve el string si el valor es escalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&[String]> {
        match self {
            Self::String(_) => None,
            Self::Array(items) => Some(items.as_slice()),
        }
    }
}

impl From<&str> for ArrayOrString {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ArrayOrString {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<String>> for ArrayOrString {
    fn from(values: Vec<String>) -> Self {
        Self::Array(values)
    }
}

/// Declaración de un parámetro. La identidad es `name`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<ArrayOrString>,
}

impl ParameterSpec {
    /// Parámetro sin descripción ni default.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               ..Self::default() }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_default(mut self, default: impl Into<ArrayOrString>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Override explícito del valor de un parámetro.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParameterValue {
    pub name: String,
    pub value: ArrayOrString,
}

impl ParameterValue {
    pub fn new(name: impl Into<String>, value: impl Into<ArrayOrString>) -> Self {
        Self { name: name.into(),
               value: value.into() }
    }
}
