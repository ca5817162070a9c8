//! Traducción de campos abreviados del build a parámetros bien conocidos.
//!
//! - `dockerfile` -> valor de `DOCKERFILE` (el spec estándar no cambia).
//! - `source.context_dir` -> valor de `CONTEXT_DIR` (el spec estándar no cambia).
//! - `builder.image` -> spec nuevo `BUILDER_IMAGE` con default = imagen, y
//!   además el valor explícito con la misma imagen.
//!
//! El orden de emisión es fijo (receta, contexto, builder) para que la salida
//! sea determinista.

use build_domain::{BuildDefinition, ParameterSpec, ParameterValue};

use crate::constants::{BUILDER_IMAGE_DESCRIPTION, BUILDER_IMAGE_PARAM, CONTEXT_DIR_PARAM, DOCKERFILE_PARAM};

/// Entrada derivada de un campo abreviado. `spec` es `None` cuando el
/// parámetro ya existe en el registro estándar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShorthandEntry {
    pub spec: Option<ParameterSpec>,
    pub value: ParameterValue,
}

pub fn map_shorthand_fields(build: &BuildDefinition) -> Vec<ShorthandEntry> {
    let mut out = Vec::new();
    if let Some(dockerfile) = &build.dockerfile {
        out.push(ShorthandEntry { spec: None,
                                  value: ParameterValue::new(DOCKERFILE_PARAM, dockerfile.as_str()) });
    }
    if let Some(context_dir) = build.context_dir() {
        out.push(ShorthandEntry { spec: None,
                                  value: ParameterValue::new(CONTEXT_DIR_PARAM, context_dir) });
    }
    if let Some(image) = build.builder_image() {
        let spec = ParameterSpec::named(BUILDER_IMAGE_PARAM).with_description(BUILDER_IMAGE_DESCRIPTION)
                                                            .with_default(image);
        out.push(ShorthandEntry { spec: Some(spec),
                                  value: ParameterValue::new(BUILDER_IMAGE_PARAM, image) });
    }
    out
}
