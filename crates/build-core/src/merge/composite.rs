//! `ValueSources`: aplica una secuencia de `ValueSource` de forma
//! determinista. El orden del vector es la precedencia ascendente: la última
//! fuente que aporta un nombre gana.

use build_domain::{ArrayOrString, ParameterValue};
use indexmap::IndexMap;

use super::source::{BuildValues, ResolutionInputs, RunValues, ShorthandValues, ValueSource};

/// Merge por nombre: los valores de `values` reemplazan a los de `acc`. Un
/// nombre ya presente conserva su posición; uno nuevo se agrega al final.
pub fn merge_values(acc: &mut IndexMap<String, ArrayOrString>, values: Vec<ParameterValue>) {
    for v in values {
        acc.insert(v.name, v.value);
    }
}

#[derive(Debug)]
pub struct ValueSources {
    pub sources: Vec<Box<dyn ValueSource>>,
}

impl ValueSources {
    /// Cadena vacía: ninguna fuente, ningún override.
    pub fn empty() -> Self {
        Self { sources: vec![] }
    }

    pub fn with_sources(sources: Vec<Box<dyn ValueSource>>) -> Self {
        Self { sources }
    }

    /// Cadena estándar: abreviados < build < run.
    pub fn standard() -> Self {
        Self::with_sources(vec![Box::new(ShorthandValues), Box::new(BuildValues), Box::new(RunValues)])
    }

    /// Agrega una fuente por encima de la de mayor precedencia actual.
    pub fn push(mut self, source: Box<dyn ValueSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Pliega las fuentes de menor a mayor precedencia.
    pub fn apply(&self, inputs: &ResolutionInputs<'_>) -> IndexMap<String, ArrayOrString> {
        let mut accumulated = IndexMap::new();
        for source in self.sources.iter() {
            merge_values(&mut accumulated, source.values(inputs));
        }
        accumulated
    }
}

impl Default for ValueSources {
    fn default() -> Self {
        Self::standard()
    }
}
