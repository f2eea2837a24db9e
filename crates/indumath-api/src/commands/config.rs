//! Configuration commands.

use tracing::debug;

use crate::config::{CalculatorConfig, FormDefaults};

/// Initial values for every input form.
pub fn get_form_defaults(config: &CalculatorConfig) -> FormDefaults {
    debug!("get_form_defaults command");
    config.defaults
}
