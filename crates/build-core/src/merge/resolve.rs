//! Resolución de parámetros de la tarea: esquema + overrides.

use build_domain::{BuildDefinition, ParameterSpec, ParameterValue, RunRequest, Strategy};
use log::debug;

use super::composite::ValueSources;
use super::schema::merge_schema;
use super::source::ResolutionInputs;
use crate::shorthand::map_shorthand_fields;

/// Salida del motor de merge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedParameters {
    pub param_specs: Vec<ParameterSpec>,
    pub param_values: Vec<ParameterValue>,
}

/// Resuelve con la cadena estándar de fuentes (abreviados < build < run).
pub fn resolve_task_parameters(strategy: &Strategy, build: &BuildDefinition, run: &RunRequest) -> ResolvedParameters {
    resolve_with_sources(&ResolutionInputs::new(strategy, build, run), &ValueSources::standard())
}

/// Resuelve con una cadena de fuentes arbitraria.
///
/// Los defaults de la estrategia sólo viven en el esquema: un parámetro sin
/// override no aparece en `param_values`. Los nombres no declarados se
/// propagan tal cual, después de los declarados; validarlos no es
/// responsabilidad del core.
pub fn resolve_with_sources(inputs: &ResolutionInputs<'_>, sources: &ValueSources) -> ResolvedParameters {
    debug!("resolve:start strategy={} build={} run={} sources={:?}",
           inputs.strategy.name,
           inputs.build.name,
           inputs.run.name,
           sources.names());

    let shorthand = map_shorthand_fields(inputs.build);
    let param_specs = merge_schema(inputs.strategy, &shorthand);
    let mut values = sources.apply(inputs);

    // Orden de salida: nombres declarados en el orden del esquema, luego los no
    // declarados en el orden en que aparecieron.
    let mut param_values: Vec<ParameterValue> = Vec::with_capacity(values.len());
    for spec in &param_specs {
        if let Some(value) = values.shift_remove(spec.name.as_str()) {
            param_values.push(ParameterValue { name: spec.name.clone(),
                                               value });
        }
    }
    for (name, value) in values {
        debug!("resolve:undeclared param={name} build={}", inputs.build.name);
        param_values.push(ParameterValue { name, value });
    }

    debug!("resolve:done specs={} values={}", param_specs.len(), param_values.len());
    ResolvedParameters { param_specs, param_values }
}
