use build_core::ConstructionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Entrada inválida en {path}: {message}")]
    Input { path: String, message: String },
    #[error("No se pudo construir la tarea: {0}")]
    Construction(#[from] ConstructionError),
}

impl CoreError {
    /// Código de salida para la CLI: 4 entrada/config, 5 construcción.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Construction(_) => 5,
            _ => 4,
        }
    }
}
