//! Application-wide constants
//!
//! Magic numbers and string literals used throughout the application.

/// Configuration file location
pub mod config {
    /// Directory under the user's config dir
    pub const APP_DIR: &str = "portfolio-view";

    /// Default config file name
    pub const FILENAME: &str = "portfolio.toml";

    /// Extension that selects the JSON loader instead of TOML
    pub const JSON_EXTENSION: &str = "json";
}

/// Profile record constants
pub mod profile {
    /// Family details key rendered as trailing prose instead of a list row
    pub const DESCRIPTION_KEY: &str = "Description";

    /// Number of placeholder slides in the reference profile
    pub const DEFAULT_SLIDE_COUNT: usize = 4;

    /// Header line shown above the profile
    pub const DEFAULT_INVOCATION: &str = "ॐ श्री गणपतये नमः";
}

/// Validation limits applied after loading config
pub mod validation {
    /// Smallest usable window width
    pub const MIN_WINDOW_WIDTH: u16 = 480;

    /// Smallest usable window height
    pub const MIN_WINDOW_HEIGHT: u16 = 600;
}

/// Font discovery
pub mod fonts {
    /// fontconfig language tag used to find a font with Devanagari coverage
    pub const SCRIPT_LANGUAGE: &str = "hi";

    /// Key the discovered font is registered under in egui
    pub const SCRIPT_FONT_KEY: &str = "script-fallback";
}

/// Logging
pub mod logging {
    /// Environment variable holding the log level
    pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
}
