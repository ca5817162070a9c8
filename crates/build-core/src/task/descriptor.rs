//! `TaskDescriptor`: salida lista para el motor de ejecución.

use build_domain::{ArrayOrString, ParameterSpec, ParameterValue, StrategyKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::hashing::hash_value;

/// Referencia a la estrategia usada.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StrategyRef {
    pub name: String,
    pub kind: StrategyKind,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskDescriptor {
    /// Prefijo de nombre para la tarea generada (`<run>-`).
    pub generate_name: String,
    pub namespace: String,
    pub service_account_name: String,
    pub strategy: StrategyRef,
    pub labels: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_image: Option<String>,
    /// Esquema: estándar, estrategia y abreviados, sin nombres repetidos.
    pub param_specs: Vec<ParameterSpec>,
    /// Sólo parámetros con override explícito.
    pub param_values: Vec<ParameterValue>,
}

impl TaskDescriptor {
    pub fn param_spec(&self, name: &str) -> Option<&ParameterSpec> {
        self.param_specs.iter().find(|s| s.name == name)
    }

    pub fn param_value(&self, name: &str) -> Option<&ArrayOrString> {
        self.param_values.iter().find(|v| v.name == name).map(|v| &v.value)
    }

    /// Valor con el que se ejecutará `name`: el override si existe, si no el
    /// default del esquema.
    pub fn effective_value(&self, name: &str) -> Option<&ArrayOrString> {
        self.param_value(name)
            .or_else(|| self.param_spec(name).and_then(|s| s.default.as_ref()))
    }

    /// Hash blake3 del JSON canónico del descriptor (64 caracteres hex).
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        let v = serde_json::to_value(self)?;
        Ok(hash_value(&v))
    }
}
