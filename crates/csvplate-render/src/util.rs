//! Text helpers behind the template functions.
//!
//! Widths are display widths (terminal columns), so wide CJK characters
//! count as two and combining marks as zero.

use convert_case::{Case, Casing};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Returns the display width of a string.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Right-aligns `s` in a field of `width` columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(pad), s)
}

/// Left-aligns `s` in a field of `width` columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Centers `s` in a field of `width` columns. Odd padding goes right.
pub fn pad_center(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(pad - left))
}

/// Keeps the start of `s`, ending with `ellipsis`, within `max_width`.
///
/// ```
/// use csvplate_render::util::truncate_end;
///
/// assert_eq!(truncate_end("Hello", 10, "…"), "Hello");
/// assert_eq!(truncate_end("Hello World", 6, "…"), "Hello…");
/// ```
pub fn truncate_end(s: &str, max_width: usize, ellipsis: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(display_width(ellipsis));
    let mut out = take_width(s.chars(), budget);
    out.push_str(ellipsis);
    out
}

/// Keeps the end of `s`, starting with `ellipsis`, within `max_width`.
pub fn truncate_start(s: &str, max_width: usize, ellipsis: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(display_width(ellipsis));
    let tail: String = take_width(s.chars().rev(), budget).chars().rev().collect();
    format!("{}{}", ellipsis, tail)
}

/// Keeps both ends of `s` with `ellipsis` in the middle, within `max_width`.
pub fn truncate_middle(s: &str, max_width: usize, ellipsis: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(display_width(ellipsis));
    let right_budget = budget / 2;
    let left = take_width(s.chars(), budget - right_budget);
    let right: String = take_width(s.chars().rev(), right_budget)
        .chars()
        .rev()
        .collect();
    format!("{}{}{}", left, ellipsis, right)
}

fn take_width(chars: impl Iterator<Item = char>, budget: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in chars {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out
}

/// `"First Name"` → `"first_name"`, `"HTTPServer"` → `"http_server"`
pub fn snake_case(s: &str) -> String {
    s.to_case(Case::Snake)
}

/// `"First Name"` → `"first-name"`
pub fn kebab_case(s: &str) -> String {
    s.to_case(Case::Kebab)
}

/// `"first name"` → `"FirstName"`
pub fn pascal_case(s: &str) -> String {
    s.to_case(Case::Pascal)
}

/// `"First Name"` → `"firstName"`
pub fn camel_case(s: &str) -> String {
    s.to_case(Case::Camel)
}

/// Transliterates to ASCII, then keeps lowercase alphanumerics joined by `-`.
///
/// ```
/// use csvplate_render::util::slugify;
///
/// assert_eq!(slugify("Crème Brûlée (2024)"), "creme-brulee-2024");
/// ```
pub fn slugify(s: &str) -> String {
    slug::slugify(s)
}
