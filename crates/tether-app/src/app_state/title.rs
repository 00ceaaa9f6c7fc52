//! Opener title: carries the move-event status text.

use tether_platform::MoveSource;

use super::core::TetherApp;

/// Format: "{title} - onmove: {status}"
pub(super) fn opener_title(base: &str, source: MoveSource) -> String {
    format!("{base} - onmove: {}", source.status_text())
}

impl TetherApp {
    pub(super) fn update_window_title(&self) {
        let Some(ref window) = self.opener_window else {
            return;
        };
        window.set_title(&opener_title(&self.config.opener.title, self.move_source));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_reports_native_support() {
        assert_eq!(
            opener_title("Tether", MoveSource::Native),
            "Tether - onmove: Implemented"
        );
    }

    #[test]
    fn title_reports_polyfill() {
        assert_eq!(
            opener_title("Demo", MoveSource::Polyfill),
            "Demo - onmove: Polyfill"
        );
    }
}
