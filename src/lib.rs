//! Buildflow Rust Library
//!
//! Capa exterior del resolver de parámetros de tareas de build:
//! - Expone `config` para leer los ajustes del ensamblador desde el entorno.
//! - Expone `errors` para errores de configuración, entrada y construcción.
//! - Expone `inputs` para cargar estrategia, build y run desde JSON.
//!
//! La lógica de resolución vive en `build-core`; los contratos de datos en
//! `build-domain`.

pub mod config;
pub mod errors;
pub mod inputs;

pub use config::AppConfig;
pub use errors::CoreError;
pub use inputs::{load_json, ResolutionRequest};
