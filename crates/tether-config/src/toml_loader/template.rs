//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Tether Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[opener]
# title = "Tether"
# width = 480
# height = 320

# [opener.show_button]
# x = 160.0
# y = 120.0
# width = 120.0
# height = 32.0

# [opener.hide_button]
# x = 160.0
# y = 168.0
# width = 120.0
# height = 32.0

[popup]
# name = "popupDemo"
# title = "Popup"
# width = 100                # 1-4096
# height = 100               # 1-4096
# anchor_offset = 100        # popup left = anchor left - anchor_offset
# chrome_compensation = 100  # popup left -= outer width - chrome_compensation

[move_events]
# mode = "auto"              # auto, native, polyfill
# frame_interval_ms = 16     # 1-1000, polyfill only

[logging]
# level = "INFO"             # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
