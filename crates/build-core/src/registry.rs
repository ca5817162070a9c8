//! Registro de parámetros estándar.
//!
//! Toda tarea generada expone estos parámetros, los use o no la estrategia.
//! Es una función pura: cada llamada construye una lista nueva, sin estado
//! global compartido.

use build_domain::ParameterSpec;

use crate::constants::{CONTEXT_DIR_DEFAULT, CONTEXT_DIR_DESCRIPTION, CONTEXT_DIR_PARAM, DOCKERFILE_DEFAULT,
                       DOCKERFILE_DESCRIPTION, DOCKERFILE_PARAM};

/// Parámetros estándar en orden fijo: `DOCKERFILE`, `CONTEXT_DIR`.
pub fn standard_parameters() -> Vec<ParameterSpec> {
    vec![ParameterSpec::named(DOCKERFILE_PARAM).with_description(DOCKERFILE_DESCRIPTION)
                                               .with_default(DOCKERFILE_DEFAULT),
         ParameterSpec::named(CONTEXT_DIR_PARAM).with_description(CONTEXT_DIR_DESCRIPTION)
                                                .with_default(CONTEXT_DIR_DEFAULT),]
}
