//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# globekit configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

schema_version = 1

[sync]
# mode = "overview"            # overview, mirror
# percentage_changed = 0.01    # (0.0, 1.0], lower = more eager sync
# expand_width_factor = 2.0    # 1.0-10.0
# expand_height_factor = 2.0   # 1.0-10.0
# stale_overlay = "keep"       # keep, hide
# lock_overview_controls = true

[overlay]
# color = "#ff000080"
# outline = true

[measure]
# units = "kilometers"         # meters, kilometers, miles, nauticalmiles, feet, yards
# decimals = 2                 # 0-6
# line_color = "#ffff00"
# line_width = 2               # 1-32

[logging]
# level = "INFO"               # TRACE, DEBUG, INFO, WARN, ERROR
"##
}
