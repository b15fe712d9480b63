//! # Word of the Day
//!
//! Picks one word per local calendar day from a fixed curated list. The pick is a
//! pure function of the date, so every user sees the same word on the same day and
//! the word only changes at local midnight.
//!
//! The date is keyed as `"{year}-{month_index}-{day}"` with a **zero-based** month
//! and no padding (1 January 2024 is `"2024-0-1"`). The character codes of that
//! key are summed and reduced modulo the list length.

use chrono::{Datelike, Local, NaiveDate};

pub const DAILY_WORDS: [&str; 10] = [
    "serendipity",
    "ephemeral",
    "luminous",
    "mellifluous",
    "eloquent",
    "resplendent",
    "ethereal",
    "serene",
    "quintessential",
    "pernicious",
];

pub fn date_key(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month0(), date.day())
}

pub fn date_hash(key: &str) -> u32 {
    key.chars().map(|c| c as u32).sum()
}

/// Index into a list of `len` candidates for `key`. None when `len` is zero.
pub fn select_index(key: &str, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(date_hash(key) as usize % len)
}

pub fn select<'a>(words: &[&'a str], date: NaiveDate) -> Option<&'a str> {
    select_index(&date_key(date), words.len()).map(|i| words[i])
}

pub fn word_of_the_day(date: NaiveDate) -> &'static str {
    let index = select_index(&date_key(date), DAILY_WORDS.len()).unwrap_or(0);
    DAILY_WORDS[index]
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
