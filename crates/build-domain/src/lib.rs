// build-domain library entry point
//
// Contratos de datos consumidos por el resolver: Strategy, BuildDefinition y
// RunRequest, más los tipos de parámetro compartidos.
pub mod build;
pub mod error;
pub mod param;
pub mod run;
pub mod strategy;
pub use build::{BuildDefinition, BuilderImage, OutputImage, SourceSpec};
pub use error::DomainError;
pub use param::{ArrayOrString, ParameterSpec, ParameterValue};
pub use run::RunRequest;
pub use strategy::{Strategy, StrategyKind};
