//! Opener buttons: hit regions and keyboard shortcuts.

use tether_config::OpenerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum OpenerButton {
    Show,
    Hide,
}

/// Which button, if any, covers a point in the opener's content area.
pub(super) fn hit_test(config: &OpenerConfig, x: f64, y: f64) -> Option<OpenerButton> {
    if config.show_button.rect().contains(x, y) {
        Some(OpenerButton::Show)
    } else if config.hide_button.rect().contains(x, y) {
        Some(OpenerButton::Hide)
    } else {
        None
    }
}

pub(super) fn button_for_key(key: &str) -> Option<OpenerButton> {
    match key {
        "s" | "S" => Some(OpenerButton::Show),
        "h" | "H" => Some(OpenerButton::Hide),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_default_layout() {
        let config = OpenerConfig::default();
        assert_eq!(hit_test(&config, 170.0, 130.0), Some(OpenerButton::Show));
        assert_eq!(hit_test(&config, 170.0, 180.0), Some(OpenerButton::Hide));
        assert_eq!(hit_test(&config, 5.0, 5.0), None);
        // Gap between the two buttons
        assert_eq!(hit_test(&config, 170.0, 160.0), None);
    }

    #[test]
    fn show_wins_when_regions_overlap() {
        let mut config = OpenerConfig::default();
        config.hide_button = config.show_button;
        assert_eq!(hit_test(&config, 170.0, 130.0), Some(OpenerButton::Show));
    }

    #[test]
    fn keyboard_shortcuts() {
        assert_eq!(button_for_key("s"), Some(OpenerButton::Show));
        assert_eq!(button_for_key("H"), Some(OpenerButton::Hide));
        assert_eq!(button_for_key("x"), None);
    }
}
