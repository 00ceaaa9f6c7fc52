//! Full configuration validation.
//!
//! Each section has its own check; errors from all of them are collected
//! into a single `ConfigError`.

mod helpers;


use crate::schema::{ButtonRegion, TetherConfig};
use tether_common::ConfigError;

use helpers::{validate_range, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TetherConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_opener(&mut errors, config);
    validate_popup(&mut errors, config);
    validate_move_events(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_opener(errors: &mut Vec<String>, config: &TetherConfig) {
    validate_range(errors, "opener.width", config.opener.width, 100, 8192);
    validate_range(errors, "opener.height", config.opener.height, 100, 8192);
    validate_button(errors, "opener.show_button", &config.opener.show_button);
    validate_button(errors, "opener.hide_button", &config.opener.hide_button);
}

fn validate_button(errors: &mut Vec<String>, name: &str, button: &ButtonRegion) {
    validate_range_f64(errors, &format!("{name}.width"), button.width, 1.0, 8192.0);
    validate_range_f64(errors, &format!("{name}.height"), button.height, 1.0, 8192.0);
    if button.x < 0.0 || button.y < 0.0 {
        errors.push(format!("{name} must not start at a negative offset"));
    }
}

fn validate_popup(errors: &mut Vec<String>, config: &TetherConfig) {
    validate_range(errors, "popup.width", config.popup.width, 1, 4096);
    validate_range(errors, "popup.height", config.popup.height, 1, 4096);
    if config.popup.name.trim().is_empty() {
        errors.push("popup.name must not be empty".into());
    }
}

fn validate_move_events(errors: &mut Vec<String>, config: &TetherConfig) {
    validate_range(
        errors,
        "move_events.frame_interval_ms",
        config.move_events.frame_interval_ms,
        1,
        1000,
    );
}
