use console::Style;
use once_cell::sync::Lazy;
use snipcat::catalog::{assign_tag_color, PALETTE_SIZE};

/// Tag chip colors, indexed by `assign_tag_color`: blue, green, yellow,
/// red, purple, pink, indigo, gray.
pub static TAG_PALETTE: Lazy<[Style; PALETTE_SIZE]> = Lazy::new(|| {
    [
        Style::new().blue(),
        Style::new().green(),
        Style::new().yellow(),
        Style::new().red(),
        Style::new().magenta(),
        Style::new().color256(213),
        Style::new().color256(63),
        Style::new().color256(245),
    ]
});

pub static CATEGORY_ID: Lazy<Style> = Lazy::new(|| Style::new().color256(245).italic());

pub fn tag_style(tag: &str) -> &'static Style {
    &TAG_PALETTE[assign_tag_color(tag)]
}
