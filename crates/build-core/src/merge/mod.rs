//! Motor de merge de parámetros.
//!
//! - `schema`: esquema final (estándar -> estrategia -> abreviados) como upserts
//!   que conservan la posición original.
//! - `source` / `composite`: fuentes de valores en orden ascendente de
//!   precedencia (abreviados < build < run), plegadas sobre un mapa ordenado.
//! - `resolve`: punto de entrada `resolve_task_parameters`.

pub mod composite;
pub mod resolve;
pub mod schema;
pub mod source;

pub use composite::{merge_values, ValueSources};
pub use resolve::{resolve_task_parameters, resolve_with_sources, ResolvedParameters};
pub use schema::merge_schema;
pub use source::{BuildValues, ResolutionInputs, RunValues, ShorthandValues, ValueSource};
