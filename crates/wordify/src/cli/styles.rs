//! Styles for the wordify CLI.
//!
//! Templates refer to semantic style names only (see [`names`]). Each name is
//! defined twice, once per palette, and the palette is picked from the saved theme
//! preference rather than from terminal detection, so `wordify theme light`
//! takes effect on the next command.
//!
//! Both themes are built once through `once_cell::sync::Lazy`.

use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, Theme};

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const MUTED: &str = "muted";
    pub const TITLE: &str = "title";
    pub const LABEL: &str = "label";
    pub const ERROR: &str = "error";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    // Record styles
    pub const WORD: &str = "word";
    pub const PHONETIC: &str = "phonetic";
    pub const PART_OF_SPEECH: &str = "part-of-speech";
    pub const EXAMPLE: &str = "example";
    pub const LINK: &str = "link";
    pub const FAVORITE: &str = "favorite";
    // List styles
    pub const LIST_INDEX: &str = "list-index";
    pub const LIST_WORD: &str = "list-word";
}

pub static LIGHT_THEME: Lazy<Theme> = Lazy::new(build_light_theme);
pub static DARK_THEME: Lazy<Theme> = Lazy::new(build_dark_theme);

pub fn theme_for(dark: bool) -> &'static Theme {
    if dark {
        &DARK_THEME
    } else {
        &LIGHT_THEME
    }
}

fn build_light_theme() -> Theme {
    let regular = Style::new().black();
    let muted = Style::new().color256(rgb_to_ansi256((115, 115, 115)));
    let accent = Style::new().color256(rgb_to_ansi256((79, 70, 229)));
    let favorite = Style::new().color256(rgb_to_ansi256((196, 140, 0))).bold();

    Theme::new()
        .add(names::MUTED, muted.clone())
        .add(names::TITLE, regular.clone().bold())
        .add(names::LABEL, regular.clone().bold())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted.clone())
        .add(names::WORD, accent.clone().bold())
        .add(names::PHONETIC, muted.clone().italic())
        .add(names::PART_OF_SPEECH, accent.clone().italic())
        .add(names::EXAMPLE, muted.clone().italic())
        .add(names::LINK, Style::new().blue().underlined())
        .add(names::FAVORITE, favorite)
        .add(names::LIST_INDEX, accent)
        .add(names::LIST_WORD, regular)
}

fn build_dark_theme() -> Theme {
    let regular = Style::new().white();
    let muted = Style::new().color256(rgb_to_ansi256((180, 180, 180)));
    let accent = Style::new().color256(rgb_to_ansi256((129, 140, 248)));
    let favorite = Style::new().color256(rgb_to_ansi256((255, 214, 10))).bold();

    Theme::new()
        .add(names::MUTED, muted.clone())
        .add(names::TITLE, regular.clone().bold())
        .add(names::LABEL, regular.clone().bold())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted.clone())
        .add(names::WORD, accent.clone().bold())
        .add(names::PHONETIC, muted.clone().italic())
        .add(names::PART_OF_SPEECH, accent.clone().italic())
        .add(names::EXAMPLE, muted.clone().italic())
        .add(names::LINK, Style::new().cyan().underlined())
        .add(names::FAVORITE, favorite)
        .add(names::LIST_INDEX, accent)
        .add(names::LIST_WORD, regular)
}
