use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::{EngineConfig, ValidationResult};

pub const ENGINE_CONFIG_JSON_SCHEMA_V1: u32 = 1;
pub const VALIDATION_RESULT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: EngineConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResultJsonContractV1 {
    pub schema_version: u32,
    pub result: ValidationResult,
}

impl EngineConfig {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = EngineConfigJsonContractV1 {
            schema_version: ENGINE_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize engine config contract v1: {e}"))
        })
    }

    /// Accepts either a bare config object or a versioned contract payload.
    ///
    /// A payload carrying `schema_version` is only ever read as a contract.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse engine config json: {e}"))
        })?;

        let Some(schema_version) = value.get("schema_version") else {
            let config: EngineConfig = serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse engine config json: {e}"))
            })?;
            return config.validate();
        };
        if schema_version.as_u64() != Some(u64::from(ENGINE_CONFIG_JSON_SCHEMA_V1)) {
            return Err(ChartError::InvalidData(format!(
                "unsupported engine config schema version: {schema_version}"
            )));
        }

        let payload: EngineConfigJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse engine config contract v1: {e}"))
        })?;
        payload.config.validate()
    }
}

impl ValidationResult {
    pub fn to_json_contract_v1_pretty(self) -> ChartResult<String> {
        let payload = ValidationResultJsonContractV1 {
            schema_version: VALIDATION_RESULT_JSON_SCHEMA_V1,
            result: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize validation result contract v1: {e}"))
        })
    }
}
