//! Machine configuration.
//!
//! Defaults run without a step limit and without tracing. [`MachineConfig::from_env`]
//! overrides them from the process environment:
//!
//! - `SML_STEP_LIMIT`: maximum number of executed instructions per run
//! - `SML_TRACE`: `1`/`true` logs every executed instruction
//! - `SML_LOG`: minimum log level (`debug`, `info`, `warn`, `error`)

use crate::utils::log::Level;
use crate::virtual_machine::errors::VMError;
use std::env;

pub const STEP_LIMIT_VAR: &str = "SML_STEP_LIMIT";
pub const TRACE_VAR: &str = "SML_TRACE";
pub const LOG_VAR: &str = "SML_LOG";

/// Run-loop settings for a [`Machine`](super::vm::Machine).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MachineConfig {
    /// Maximum number of instructions a single run may execute.
    pub step_limit: Option<u64>,
    /// Log each instruction as it executes.
    pub trace: bool,
    /// Minimum level written by the logging macros.
    pub log_level: Level,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            step_limit: None,
            trace: false,
            log_level: Level::Info,
        }
    }
}

impl MachineConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, VMError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup. Unset keys keep
    /// their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, VMError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(STEP_LIMIT_VAR) {
            let limit = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| VMError::InvalidConfig {
                    key: STEP_LIMIT_VAR,
                    value: raw.clone(),
                })?;
            config.step_limit = Some(limit);
        }

        if let Some(raw) = lookup(TRACE_VAR) {
            config.trace = parse_flag(&raw).ok_or(VMError::InvalidConfig {
                key: TRACE_VAR,
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = lookup(LOG_VAR) {
            config.log_level = raw.trim().parse().map_err(|_| VMError::InvalidConfig {
                key: LOG_VAR,
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }

    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
