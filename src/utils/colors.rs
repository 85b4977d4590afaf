/// ANSI color helper utilities for terminal output.
use crate::models::Category;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Stable color per category, used by the terminal tables.
pub fn category_color(cat: Category) -> &'static str {
    match cat {
        Category::EducationCareer => BLUE,
        Category::SocialEntertainment => MAGENTA,
        Category::Shopping => YELLOW,
        Category::Finance => GREEN,
        Category::Travel => CYAN,
        Category::GeneralSearch => RED,
        Category::Miscellaneous => GREY,
    }
}

/// Wrap `value` in the color of `cat`.
pub fn colorize_category(value: &str, cat: Category) -> String {
    format!("{}{value}{RESET}", category_color(cat))
}
