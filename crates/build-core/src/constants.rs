//! Nombres y textos de los parámetros bien conocidos.
//!
//! Estos valores forman parte del contrato con el motor de ejecución: las
//! estrategias los referencian por nombre, así que no deben cambiar.

/// Ruta al archivo de receta (Dockerfile).
pub const DOCKERFILE_PARAM: &str = "DOCKERFILE";
pub const DOCKERFILE_DESCRIPTION: &str = "Path to the Dockerfile";
pub const DOCKERFILE_DEFAULT: &str = "Dockerfile";

/// Directorio de contexto del build.
pub const CONTEXT_DIR_PARAM: &str = "CONTEXT_DIR";
pub const CONTEXT_DIR_DESCRIPTION: &str = "The root of the code";
pub const CONTEXT_DIR_DEFAULT: &str = ".";

/// Imagen con las herramientas del build (sólo si el build la declara).
pub const BUILDER_IMAGE_PARAM: &str = "BUILDER_IMAGE";
pub const BUILDER_IMAGE_DESCRIPTION: &str = "Image containing the build tools/logic";

/// Prefijo por defecto de las labels del descriptor.
pub const DEFAULT_LABEL_PREFIX: &str = "buildflow.dev";
