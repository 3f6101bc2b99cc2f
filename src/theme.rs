//! Application-wide theme system
//!
//! Two built-in themes (dark and light). Topic cards bring their own accent
//! colors; everything else on the page reads from [`AppTheme`].

use ratatui::style::Color;
use std::collections::HashMap;

/// Complete application theme defining all UI colors
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub name: String,
    pub description: String,

    // Page
    pub background: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub heading: Color,

    // Hero banner
    pub hero_background: Color,
    pub hero_title: Color,
    pub hero_subtitle: Color,

    // Badges
    pub badge_text: Color,
    pub badge_background: Color,

    // Cards and panels
    pub card_border: Color,
    pub focus_border: Color,
    pub panel_border: Color,

    // Tip panel
    pub tip_border: Color,
    pub tip_heading: Color,
    pub tip_text: Color,
    pub good_label: Color,
    pub avoid_label: Color,

    // Example entry
    pub example_rule: Color,
    pub example_entry: Color,

    // Buttons
    pub button_text: Color,
    pub button_background: Color,
    pub button_focused_text: Color,
    pub button_focused_background: Color,

    // Practice input
    pub input_text: Color,
    pub input_background: Color,
    pub input_placeholder: Color,
    pub input_cursor: Color,

    // Status bar and toasts
    pub status_text: Color,
    pub status_background: Color,
    pub toast_success: Color,
    pub toast_error: Color,
    pub toast_text: Color,
}

fn color_to_rgb_components(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black | Color::Reset => (0, 0, 0),
        Color::Red => (205, 0, 0),
        Color::Green => (0, 205, 0),
        Color::Yellow => (205, 205, 0),
        Color::Blue => (0, 0, 238),
        Color::Magenta => (205, 0, 205),
        Color::Cyan => (0, 205, 205),
        Color::Gray => (229, 229, 229),
        Color::DarkGray => (127, 127, 127),
        Color::LightRed => (255, 102, 102),
        Color::LightGreen => (102, 255, 102),
        Color::LightYellow => (255, 255, 102),
        Color::LightBlue => (173, 216, 230),
        Color::LightMagenta => (255, 119, 255),
        Color::LightCyan => (224, 255, 255),
        Color::White => (255, 255, 255),
        Color::Indexed(_) => (128, 128, 128),
    }
}

/// Mix `other` into `base` by `ratio` (0.0 = base, 1.0 = other)
pub fn blend_colors(base: Color, other: Color, ratio: f32) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    let (br, bg, bb) = color_to_rgb_components(base);
    let (or, og, ob) = color_to_rgb_components(other);
    let blend_component = |a: u8, b: u8| -> u8 {
        let value = (a as f32) * (1.0 - ratio) + (b as f32) * ratio;
        value.round().clamp(0.0, 255.0) as u8
    };

    Color::Rgb(
        blend_component(br, or),
        blend_component(bg, og),
        blend_component(bb, ob),
    )
}

/// Parse "#rrggbb" into a color
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    if hex.starts_with('#') && hex.len() == 7 {
        let r = u8::from_str_radix(&hex[1..3], 16).ok()?;
        let g = u8::from_str_radix(&hex[3..5], 16).ok()?;
        let b = u8::from_str_radix(&hex[5..7], 16).ok()?;
        Some(Color::Rgb(r, g, b))
    } else {
        None
    }
}

/// Built-in themes
pub struct ThemePresets;

impl ThemePresets {
    pub fn all() -> HashMap<String, AppTheme> {
        let mut themes = HashMap::new();
        themes.insert("dark".to_string(), Self::dark());
        themes.insert("light".to_string(), Self::light());
        themes
    }

    /// Look up a theme by config name, falling back to dark
    pub fn by_name(name: &str) -> AppTheme {
        Self::all().remove(name).unwrap_or_else(Self::dark)
    }

    pub fn dark() -> AppTheme {
        AppTheme {
            name: "Dark".to_string(),
            description: "Slate background with blue and purple accents".to_string(),

            background: Color::Rgb(15, 23, 42),
            text_primary: Color::Rgb(226, 232, 240),
            text_secondary: Color::Rgb(148, 163, 184),
            heading: Color::White,

            hero_background: Color::Rgb(67, 56, 202),
            hero_title: Color::White,
            hero_subtitle: Color::Rgb(191, 219, 254),

            badge_text: Color::White,
            badge_background: Color::Rgb(71, 85, 105),

            card_border: Color::Rgb(71, 85, 105),
            focus_border: Color::Rgb(255, 215, 0), // Gold
            panel_border: Color::Rgb(71, 85, 105),

            tip_border: Color::Rgb(202, 138, 4),
            tip_heading: Color::Rgb(250, 204, 21),
            tip_text: Color::Rgb(254, 240, 138),
            good_label: Color::Rgb(34, 197, 94),
            avoid_label: Color::Rgb(239, 68, 68),

            example_rule: Color::Rgb(59, 130, 246),
            example_entry: Color::Rgb(226, 232, 240),

            button_text: Color::Rgb(226, 232, 240),
            button_background: Color::Rgb(51, 65, 85),
            button_focused_text: Color::Black,
            button_focused_background: Color::Rgb(255, 215, 0),

            input_text: Color::White,
            input_background: Color::Rgb(30, 41, 59),
            input_placeholder: Color::Rgb(100, 116, 139),
            input_cursor: Color::Rgb(255, 215, 0),

            status_text: Color::Rgb(203, 213, 225),
            status_background: Color::Rgb(30, 41, 59),
            toast_success: Color::Rgb(22, 163, 74),
            toast_error: Color::Rgb(220, 38, 38),
            toast_text: Color::White,
        }
    }

    /// Light theme for daytime use
    pub fn light() -> AppTheme {
        AppTheme {
            name: "Light".to_string(),
            description: "Soft blue-gray page like a printed handout".to_string(),

            background: Color::Rgb(241, 245, 249),
            text_primary: Color::Rgb(31, 41, 55),
            text_secondary: Color::Rgb(75, 85, 99),
            heading: Color::Rgb(17, 24, 39),

            hero_background: Color::Rgb(37, 99, 235),
            hero_title: Color::White,
            hero_subtitle: Color::Rgb(219, 234, 254),

            badge_text: Color::Rgb(31, 41, 55),
            badge_background: Color::Rgb(226, 232, 240),

            card_border: Color::Rgb(203, 213, 225),
            focus_border: Color::Rgb(37, 99, 235),
            panel_border: Color::Rgb(203, 213, 225),

            tip_border: Color::Rgb(253, 224, 71),
            tip_heading: Color::Rgb(113, 63, 18),
            tip_text: Color::Rgb(133, 77, 14),
            good_label: Color::Rgb(21, 128, 61),
            avoid_label: Color::Rgb(185, 28, 28),

            example_rule: Color::Rgb(59, 130, 246),
            example_entry: Color::Rgb(31, 41, 55),

            button_text: Color::Rgb(161, 98, 7),
            button_background: Color::Rgb(254, 249, 195),
            button_focused_text: Color::White,
            button_focused_background: Color::Rgb(37, 99, 235),

            input_text: Color::Rgb(17, 24, 39),
            input_background: Color::White,
            input_placeholder: Color::Rgb(156, 163, 175),
            input_cursor: Color::Rgb(37, 99, 235),

            status_text: Color::Rgb(51, 65, 85),
            status_background: Color::Rgb(226, 232, 240),
            toast_success: Color::Rgb(22, 163, 74),
            toast_error: Color::Rgb(220, 38, 38),
            toast_text: Color::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#3b82f6"), Some(Color::Rgb(59, 130, 246)));
        assert_eq!(parse_hex_color("3b82f6"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn test_blend_endpoints() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);
        assert_eq!(blend_colors(a, b, 0.0), a);
        assert_eq!(blend_colors(a, b, 1.0), b);
        assert_eq!(blend_colors(a, b, 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn test_unknown_theme_falls_back_to_dark() {
        assert_eq!(ThemePresets::by_name("light").name, "Light");
        assert_eq!(ThemePresets::by_name("nope").name, "Dark");
    }
}
