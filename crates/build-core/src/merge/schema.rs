//! Merge del esquema de parámetros.
//!
//! Se construye como mapa ordenado por nombre: primero los parámetros
//! estándar, luego los de la estrategia en orden de declaración y por último
//! los specs derivados de campos abreviados. Cada inserción es un upsert: un
//! nombre repetido reemplaza el spec en su posición original.

use build_domain::{ParameterSpec, Strategy};
use indexmap::IndexMap;

use crate::registry::standard_parameters;
use crate::shorthand::ShorthandEntry;

pub fn merge_schema(strategy: &Strategy, shorthand: &[ShorthandEntry]) -> Vec<ParameterSpec> {
    let mut schema: IndexMap<String, ParameterSpec> = IndexMap::new();
    let declared = standard_parameters().into_iter()
                                        .chain(strategy.parameters.iter().cloned())
                                        .chain(shorthand.iter().filter_map(|e| e.spec.clone()));
    for spec in declared {
        schema.insert(spec.name.clone(), spec);
    }
    schema.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use build_domain::ParameterValue;

    fn names(specs: &[ParameterSpec]) -> Vec<&str> {
        specs.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn strategy_override_of_standard_param_stays_in_place() {
        let strategy = Strategy::new("s").with_parameter(ParameterSpec::named("extra"))
                                         .with_parameter(ParameterSpec::named("DOCKERFILE").with_default("Containerfile"));
        let specs = merge_schema(&strategy, &[]);
        assert_eq!(names(&specs), vec!["DOCKERFILE", "CONTEXT_DIR", "extra"]);
        assert_eq!(specs[0].default.as_ref().and_then(|d| d.as_str()), Some("Containerfile"));
        // el spec se reemplaza entero, incluida la descripción
        assert_eq!(specs[0].description, "");
    }

    #[test]
    fn shorthand_spec_replaces_matching_strategy_spec() {
        let strategy = Strategy::new("s").with_parameter(ParameterSpec::named("BUILDER_IMAGE"))
                                         .with_parameter(ParameterSpec::named("after"));
        let entry = ShorthandEntry { spec: Some(ParameterSpec::named("BUILDER_IMAGE").with_default("img")),
                                     value: ParameterValue::new("BUILDER_IMAGE", "img") };
        let specs = merge_schema(&strategy, &[entry]);
        assert_eq!(names(&specs), vec!["DOCKERFILE", "CONTEXT_DIR", "BUILDER_IMAGE", "after"]);
        assert_eq!(specs[2].default.as_ref().and_then(|d| d.as_str()), Some("img"));
    }
}
