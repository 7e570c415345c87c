//! ANSI terminal palette.
//!
//! Named escape-sequence constants for text attributes and the 16-color
//! palette, plus parametric builders for the 256-color palette and
//! truecolor. Consumers compose these directly into output strings; no
//! terminal capability detection is performed.

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";
/// Bold / increased intensity.
pub const BRIGHT: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const ITALIC: &str = "\x1b[3m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const BLINK: &str = "\x1b[5m";
pub const REVERSE: &str = "\x1b[7m";
pub const HIDDEN: &str = "\x1b[8m";
pub const STRIKETHROUGH: &str = "\x1b[9m";

pub const FG_BLACK: &str = "\x1b[30m";
pub const FG_RED: &str = "\x1b[31m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_YELLOW: &str = "\x1b[33m";
pub const FG_BLUE: &str = "\x1b[34m";
pub const FG_MAGENTA: &str = "\x1b[35m";
pub const FG_CYAN: &str = "\x1b[36m";
pub const FG_WHITE: &str = "\x1b[37m";

pub const FG_BRIGHT_BLACK: &str = "\x1b[90m";
pub const FG_BRIGHT_RED: &str = "\x1b[91m";
pub const FG_BRIGHT_GREEN: &str = "\x1b[92m";
pub const FG_BRIGHT_YELLOW: &str = "\x1b[93m";
pub const FG_BRIGHT_BLUE: &str = "\x1b[94m";
pub const FG_BRIGHT_MAGENTA: &str = "\x1b[95m";
pub const FG_BRIGHT_CYAN: &str = "\x1b[96m";
pub const FG_BRIGHT_WHITE: &str = "\x1b[97m";

pub const BG_BLACK: &str = "\x1b[40m";
pub const BG_RED: &str = "\x1b[41m";
pub const BG_GREEN: &str = "\x1b[42m";
pub const BG_YELLOW: &str = "\x1b[43m";
pub const BG_BLUE: &str = "\x1b[44m";
pub const BG_MAGENTA: &str = "\x1b[45m";
pub const BG_CYAN: &str = "\x1b[46m";
pub const BG_WHITE: &str = "\x1b[47m";

pub const BG_BRIGHT_BLACK: &str = "\x1b[100m";
pub const BG_BRIGHT_RED: &str = "\x1b[101m";
pub const BG_BRIGHT_GREEN: &str = "\x1b[102m";
pub const BG_BRIGHT_YELLOW: &str = "\x1b[103m";
pub const BG_BRIGHT_BLUE: &str = "\x1b[104m";
pub const BG_BRIGHT_MAGENTA: &str = "\x1b[105m";
pub const BG_BRIGHT_CYAN: &str = "\x1b[106m";
pub const BG_BRIGHT_WHITE: &str = "\x1b[107m";

/// Foreground color from the 256-color palette.
pub fn fg_256(index: u8) -> String {
    format!("\x1b[38;5;{}m", index)
}

/// Background color from the 256-color palette.
pub fn bg_256(index: u8) -> String {
    format!("\x1b[48;5;{}m", index)
}

/// Truecolor foreground from RGB channels.
pub fn fg_rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Truecolor background from RGB channels.
pub fn bg_rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[48;2;{};{};{}m", r, g, b)
}

/// Look up a foreground color constant by name.
///
/// Names are matched case-insensitively; bright variants use a
/// `"bright-"` prefix (e.g. `"bright-yellow"`).
pub fn fg_by_name(name: &str) -> Option<&'static str> {
    let color = match name.to_ascii_lowercase().as_str() {
        "black" => FG_BLACK,
        "red" => FG_RED,
        "green" => FG_GREEN,
        "yellow" => FG_YELLOW,
        "blue" => FG_BLUE,
        "magenta" => FG_MAGENTA,
        "cyan" => FG_CYAN,
        "white" => FG_WHITE,
        "bright-black" | "gray" | "grey" => FG_BRIGHT_BLACK,
        "bright-red" => FG_BRIGHT_RED,
        "bright-green" => FG_BRIGHT_GREEN,
        "bright-yellow" => FG_BRIGHT_YELLOW,
        "bright-blue" => FG_BRIGHT_BLUE,
        "bright-magenta" => FG_BRIGHT_MAGENTA,
        "bright-cyan" => FG_BRIGHT_CYAN,
        "bright-white" => FG_BRIGHT_WHITE,
        _ => return None,
    };
    Some(color)
}
