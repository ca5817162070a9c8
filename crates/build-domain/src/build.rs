//! Definición concreta de un build.
//!
//! Además de la lista de valores de parámetros, expone campos abreviados
//! (`dockerfile`, `builder`, `source.context_dir`) que el resolver traduce a
//! parámetros bien conocidos.

use serde::{Deserialize, Serialize};

use crate::param::ParameterValue;

/// Repositorio fuente del build.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceSpec {
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    /// Subdirectorio del repositorio usado como contexto del build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_dir: Option<String>,
}

/// Imagen con las herramientas del build.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuilderImage {
    pub image: String,
}

/// Imagen de salida producida por el build.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputImage {
    pub image: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildDefinition {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub source: SourceSpec,
    /// Ruta al archivo de receta (Dockerfile).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dockerfile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builder: Option<BuilderImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub parameters: Vec<ParameterValue>,
}

impl BuildDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               ..Self::default() }
    }

    pub fn with_parameter(mut self, value: ParameterValue) -> Self {
        self.parameters.push(value);
        self
    }

    /// Contexto declarado en `source`, si existe.
    pub fn context_dir(&self) -> Option<&str> {
        self.source.context_dir.as_deref()
    }

    pub fn builder_image(&self) -> Option<&str> {
        self.builder.as_ref().map(|b| b.image.as_str())
    }
}
