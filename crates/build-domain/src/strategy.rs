//! Plantilla reutilizable de build: declara el esquema de parámetros.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::param::ParameterSpec;

/// Alcance de la estrategia: namespaced o de cluster.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum StrategyKind {
    #[default]
    BuildStrategy,
    ClusterBuildStrategy,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuildStrategy => write!(f, "BuildStrategy"),
            Self::ClusterBuildStrategy => write!(f, "ClusterBuildStrategy"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BuildStrategy" => Ok(Self::BuildStrategy),
            "ClusterBuildStrategy" => Ok(Self::ClusterBuildStrategy),
            other => Err(DomainError::UnknownStrategyKind(other.to_string())),
        }
    }
}

/// Estrategia de build. `parameters` conserva el orden de declaración.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Strategy {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: StrategyKind,
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
}

impl Strategy {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               ..Self::default() }
    }

    pub fn with_parameter(mut self, spec: ParameterSpec) -> Self {
        self.parameters.push(spec);
        self
    }
}
