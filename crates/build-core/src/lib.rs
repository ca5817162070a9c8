//! build-core: resolución determinista de parámetros de tareas de build.
//!
//! Combina tres capas de entrada (estrategia, build, run) en un
//! `TaskDescriptor` con el esquema final de parámetros y los overrides
//! efectivos. Es cómputo puro: sin I/O ni estado compartido.
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod merge;
pub mod registry;
pub mod shorthand;
pub mod task;

pub use errors::ConstructionError;
pub use merge::{resolve_task_parameters, resolve_with_sources, ResolutionInputs, ResolvedParameters, ValueSource,
                ValueSources};
pub use registry::standard_parameters;
pub use shorthand::{map_shorthand_fields, ShorthandEntry};
pub use task::{generate_task, AssemblerSettings, StrategyRef, TaskAssembler, TaskDescriptor};
