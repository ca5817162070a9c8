//! Solicitud de ejecución de un build: overrides de mayor precedencia.

use serde::{Deserialize, Serialize};

use crate::build::OutputImage;
use crate::param::ParameterValue;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunRequest {
    #[serde(default)]
    pub name: String,
    /// Identidad de ejecución (service account).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub parameters: Vec<ParameterValue>,
}

impl RunRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               ..Self::default() }
    }

    pub fn with_parameter(mut self, value: ParameterValue) -> Self {
        self.parameters.push(value);
        self
    }

    pub fn with_service_account(mut self, account: impl Into<String>) -> Self {
        self.service_account = Some(account.into());
        self
    }
}
