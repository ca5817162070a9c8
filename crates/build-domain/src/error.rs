use thiserror::Error;

/// Errores del dominio de builds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Tipo de estrategia desconocido: {0}")]
    UnknownStrategyKind(String),
}
