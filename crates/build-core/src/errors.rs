//! Errores del core. La resolución de parámetros es total; el único fallo
//! posible es la ausencia de un campo estructural requerido al ensamblar.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConstructionError {
    #[error("missing required field: {0}")] MissingField(&'static str),
}
