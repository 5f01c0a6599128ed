pub const DEFAULT_PROJECT: &str = "gemini-flights-415718";
pub const DEFAULT_LOCATION: &str = "us-central1";
pub const DEFAULT_MODEL: &str = "gemini-pro";
pub const DEFAULT_TEMPERATURE: f32 = 0.4;

// Dates the user types without a year are read against this one.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2024;

pub fn default_clear_screen() -> bool {
    true
}

pub fn is_default_clear_screen(value: &bool) -> bool {
    *value == default_clear_screen()
}
