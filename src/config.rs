//! Configuración de la aplicación.
//! Carga variables de entorno (.env una sola vez) y las traduce a los ajustes
//! del ensamblador de tareas.
//!
//! Variables:
//! - `BUILDFLOW_LABEL_PREFIX`: dominio de las labels (default `buildflow.dev`).
//! - `BUILDFLOW_DEFAULT_TIMEOUT_SECS`: timeout si ni run ni build declaran uno.
//! - `BUILDFLOW_DEFAULT_SERVICE_ACCOUNT`: identidad si el run no declara una.

use std::env;

use build_core::constants::DEFAULT_LABEL_PREFIX;
use build_core::AssemblerSettings;
use dotenvy::dotenv;
use once_cell::sync::Lazy;

use crate::errors::CoreError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

pub const LABEL_PREFIX_VAR: &str = "BUILDFLOW_LABEL_PREFIX";
pub const DEFAULT_TIMEOUT_VAR: &str = "BUILDFLOW_DEFAULT_TIMEOUT_SECS";
pub const DEFAULT_SERVICE_ACCOUNT_VAR: &str = "BUILDFLOW_DEFAULT_SERVICE_ACCOUNT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub label_prefix: String,
    pub default_timeout_seconds: Option<u64>,
    pub default_service_account: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
               default_timeout_seconds: None,
               default_service_account: None }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, CoreError> {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de una función de búsqueda; permite
    /// testear sin tocar el entorno del proceso.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
        where F: Fn(&str) -> Option<String>
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let label_prefix = non_empty(LABEL_PREFIX_VAR).unwrap_or_else(|| DEFAULT_LABEL_PREFIX.to_string());
        let default_timeout_seconds = match non_empty(DEFAULT_TIMEOUT_VAR) {
            Some(raw) => Some(raw.parse::<u64>()
                                 .map_err(|e| CoreError::Config(format!("{DEFAULT_TIMEOUT_VAR}={raw}: {e}")))?),
            None => None,
        };
        let default_service_account = non_empty(DEFAULT_SERVICE_ACCOUNT_VAR);

        Ok(Self { label_prefix,
                  default_timeout_seconds,
                  default_service_account })
    }

    pub fn assembler_settings(&self) -> AssemblerSettings {
        AssemblerSettings { label_prefix: self.label_prefix.clone(),
                            default_timeout_seconds: self.default_timeout_seconds,
                            default_service_account: self.default_service_account.clone() }
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
