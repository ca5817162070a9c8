//! Contrato para fuentes de valores de parámetros.
//!
//! Una `ValueSource` recibe las entradas de la resolución y devuelve los
//! overrides que aporta. Las fuentes deben ser deterministas y sin efectos
//! secundarios; la precedencia la decide su posición en `ValueSources`.

use build_domain::{BuildDefinition, ParameterValue, RunRequest, Strategy};

use crate::shorthand::map_shorthand_fields;

/// Entradas inmutables de una resolución.
#[derive(Clone, Copy, Debug)]
pub struct ResolutionInputs<'a> {
    pub strategy: &'a Strategy,
    pub build: &'a BuildDefinition,
    pub run: &'a RunRequest,
}

impl<'a> ResolutionInputs<'a> {
    pub fn new(strategy: &'a Strategy, build: &'a BuildDefinition, run: &'a RunRequest) -> Self {
        Self { strategy, build, run }
    }
}

/// Trait para fuentes de overrides.
pub trait ValueSource: Send + Sync + std::fmt::Debug {
    /// Nombre corto para logs.
    fn name(&self) -> &'static str;

    /// Overrides aportados por esta fuente, en su orden propio.
    fn values(&self, inputs: &ResolutionInputs<'_>) -> Vec<ParameterValue>;
}

/// Valores derivados de los campos abreviados del build.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShorthandValues;

impl ValueSource for ShorthandValues {
    fn name(&self) -> &'static str {
        "shorthand"
    }

    fn values(&self, inputs: &ResolutionInputs<'_>) -> Vec<ParameterValue> {
        map_shorthand_fields(inputs.build).into_iter().map(|e| e.value).collect()
    }
}

/// Lista `parameters` del build.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildValues;

impl ValueSource for BuildValues {
    fn name(&self) -> &'static str {
        "build"
    }

    fn values(&self, inputs: &ResolutionInputs<'_>) -> Vec<ParameterValue> {
        inputs.build.parameters.clone()
    }
}

/// Lista `parameters` del run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunValues;

impl ValueSource for RunValues {
    fn name(&self) -> &'static str {
        "run"
    }

    fn values(&self, inputs: &ResolutionInputs<'_>) -> Vec<ParameterValue> {
        inputs.run.parameters.clone()
    }
}
