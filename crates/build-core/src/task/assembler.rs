//! Ensamblador de tareas.
//!
//! Combina los parámetros resueltos con los campos estructurales (identidad,
//! labels, timeout, imagen de salida). Los campos estructurales se copian de
//! las entradas sin transformación. El único error posible es la falta de
//! identidad de ejecución; se valida antes de resolver, así que nunca se
//! devuelve un descriptor parcial.

use build_domain::{BuildDefinition, RunRequest, Strategy};
use indexmap::IndexMap;
use log::{debug, warn};

use super::descriptor::{StrategyRef, TaskDescriptor};
use crate::constants::DEFAULT_LABEL_PREFIX;
use crate::errors::ConstructionError;
use crate::merge::{resolve_with_sources, ResolutionInputs, ValueSources};

/// Ajustes del ensamblador (normalmente cargados desde el entorno).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssemblerSettings {
    /// Dominio de las labels: `<prefix>/build`, `<prefix>/build-run`, ...
    pub label_prefix: String,
    /// Timeout cuando ni el run ni el build declaran uno.
    pub default_timeout_seconds: Option<u64>,
    /// Identidad usada cuando el run no declara service account.
    pub default_service_account: Option<String>,
}

impl Default for AssemblerSettings {
    fn default() -> Self {
        Self { label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
               default_timeout_seconds: None,
               default_service_account: None }
    }
}

#[derive(Debug)]
pub struct TaskAssembler {
    settings: AssemblerSettings,
    sources: ValueSources,
}

impl TaskAssembler {
    pub fn new(settings: AssemblerSettings) -> Self {
        Self { settings,
               sources: ValueSources::standard() }
    }

    /// Ensamblador con una cadena de fuentes de valores propia.
    pub fn with_sources(settings: AssemblerSettings, sources: ValueSources) -> Self {
        Self { settings, sources }
    }

    pub fn assemble(&self,
                    strategy: &Strategy,
                    build: &BuildDefinition,
                    run: &RunRequest)
                    -> Result<TaskDescriptor, ConstructionError> {
        let service_account_name = match self.service_account(run) {
            Some(sa) => sa,
            None => {
                warn!("assemble:missing service_account build={} run={}", build.name, run.name);
                return Err(ConstructionError::MissingField("service_account"));
            }
        };

        let inputs = ResolutionInputs::new(strategy, build, run);
        let resolved = resolve_with_sources(&inputs, &self.sources);

        let descriptor = TaskDescriptor { generate_name: generate_name(build, run),
                                          namespace: build.namespace.clone(),
                                          service_account_name,
                                          strategy: StrategyRef { name: strategy.name.clone(),
                                                                  kind: strategy.kind },
                                          labels: self.labels(strategy, build, run),
                                          timeout_seconds: run.timeout_seconds
                                                              .or(build.timeout_seconds)
                                                              .or(self.settings.default_timeout_seconds),
                                          output_image: run.output
                                                           .as_ref()
                                                           .or(build.output.as_ref())
                                                           .map(|o| o.image.clone()),
                                          param_specs: resolved.param_specs,
                                          param_values: resolved.param_values };
        debug!("assemble:done generate_name={} service_account={}",
               descriptor.generate_name,
               descriptor.service_account_name);
        Ok(descriptor)
    }

    fn service_account(&self, run: &RunRequest) -> Option<String> {
        non_blank(run.service_account.as_deref())
            .or_else(|| non_blank(self.settings.default_service_account.as_deref()))
            .map(str::to_string)
    }

    fn labels(&self, strategy: &Strategy, build: &BuildDefinition, run: &RunRequest) -> IndexMap<String, String> {
        let prefix = &self.settings.label_prefix;
        [("build", &build.name), ("build-run", &run.name), ("strategy", &strategy.name)]
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (format!("{prefix}/{key}"), value.clone()))
            .collect()
    }
}

impl Default for TaskAssembler {
    fn default() -> Self {
        Self::new(AssemblerSettings::default())
    }
}

/// Atajo con ajustes por defecto: la identidad debe venir en el run.
pub fn generate_task(strategy: &Strategy,
                     build: &BuildDefinition,
                     run: &RunRequest)
                     -> Result<TaskDescriptor, ConstructionError> {
    TaskAssembler::default().assemble(strategy, build, run)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn generate_name(build: &BuildDefinition, run: &RunRequest) -> String {
    if !run.name.is_empty() {
        format!("{}-", run.name)
    } else if !build.name.is_empty() {
        format!("{}-", build.name)
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_identity_is_missing() {
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(" bot ")), Some("bot"));
    }

    #[test]
    fn generate_name_falls_back_to_build() {
        let build = BuildDefinition::new("app");
        assert_eq!(generate_name(&build, &RunRequest::new("app-run-1")), "app-run-1-");
        assert_eq!(generate_name(&build, &RunRequest::default()), "app-");
        assert_eq!(generate_name(&BuildDefinition::default(), &RunRequest::default()), "");
    }
}
