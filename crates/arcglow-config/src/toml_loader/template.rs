//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# arcglow configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# This file is watched while `arcglow animate` runs; edits apply on the next frame.

[animation]
# Length of one palette rotation in milliseconds (100-60000).
# The speed selector presets are 3000, 6000, 9000, 12000 and 15000.
duration_ms = 9000

[palette]
# Ordered base colors. Entries that are not #RRGGBB are ignored; a list with
# no valid entries leaves the current palette in place.
colors = [
    "#8B5CF6", "#B464C8", "#DC2626", "#FA8072",
    "#FF9A66", "#FF8C50", "#3B82F6", "#87CEFA",
]

[adjust]
# hue_offset = 0         # degrees, wraps modulo 360
# saturation = 100       # percent, 0-200
# lightness = 100        # percent, 0-200

[surface]
# width = 1280           # 1-8192; widths under 768 use the wider mobile arc
# height = 320           # 1-8192

[output]
# fps = 60               # 1-240
# directory = "frames"

[logging]
# level = "INFO"         # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
