//! Carga de las entradas de resolución desde archivos JSON.

use std::fs;
use std::path::Path;

use build_core::{TaskAssembler, TaskDescriptor};
use build_domain::{BuildDefinition, RunRequest, Strategy};
use log::debug;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::errors::CoreError;

/// Las tres capas de entrada de una resolución.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionRequest {
    pub strategy: Strategy,
    pub build: BuildDefinition,
    pub run: RunRequest,
}

impl ResolutionRequest {
    /// Lee estrategia, build y (opcionalmente) run. Sin archivo de run se usa
    /// un run vacío.
    pub fn load(strategy: &Path, build: &Path, run: Option<&Path>) -> Result<Self, CoreError> {
        let run = match run {
            Some(path) => load_json(path)?,
            None => RunRequest::default(),
        };
        Ok(Self { strategy: load_json(strategy)?,
                  build: load_json(build)?,
                  run })
    }

    /// Reemplaza la identidad de ejecución del run.
    pub fn with_service_account(mut self, account: Option<String>) -> Self {
        if account.is_some() {
            self.run.service_account = account;
        }
        self
    }

    pub fn assemble(&self, config: &AppConfig) -> Result<TaskDescriptor, CoreError> {
        let assembler = TaskAssembler::new(config.assembler_settings());
        Ok(assembler.assemble(&self.strategy, &self.build, &self.run)?)
    }
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, CoreError> {
    debug!("load_json:start path={}", path.display());
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| CoreError::Input { path: path.display().to_string(),
                                                              message: e.to_string() })
}
