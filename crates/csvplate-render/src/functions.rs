//! Helper filters available in every template.
//!
//! These complement MiniJinja's builtins (`upper`, `lower`, `title`, `trim`,
//! `replace`, `default`, `join`, `int`, `float`, `length`, ...).
//!
//! ## Layout
//!
//! - `nl` - Append a newline
//! - `pad_left(width)`, `pad_right(width)`, `pad_center(width)`
//! - `truncate_at(width, pos="end", ellipsis="…")`
//! - `display_width`
//!
//! ## Case and transliteration
//!
//! - `snakecase`, `kebabcase`, `camelcase`, `pascalcase`
//! - `ascii`, `slugify`
//!
//! ## Strings and numbers
//!
//! - `repeat(n)`, `substr(start, end=?)`
//! - `has_prefix(p)`, `has_suffix(p)`, `contains(s)`
//! - `atoi` - Parse an integer, `0` when the text is not a number
//!
//! ### Example
//!
//! ```jinja
//! {{ Name | slugify }}.md
//! {{ Price | pad_left(10) }} {{ Label | truncate_at(20) }}
//! ```

use minijinja::{Environment, Error, ErrorKind, Value};

use crate::util::{
    camel_case, display_width, kebab_case, pad_center, pad_left, pad_right, pascal_case, slugify,
    snake_case, truncate_end, truncate_middle, truncate_start,
};

/// Upper bound on the text `repeat` may produce.
const MAX_REPEAT_BYTES: usize = 64 * 1024 * 1024;

/// Registers all helper filters on a MiniJinja environment.
pub fn register_functions(env: &mut Environment<'static>) {
    // {{ content | nl }} outputs content followed by \n
    env.add_filter("nl", |value: Value| -> String { format!("{}\n", value) });

    env.add_filter("pad_left", |value: Value, width: usize| -> String {
        pad_left(&value.to_string(), width)
    });
    env.add_filter("pad_right", |value: Value, width: usize| -> String {
        pad_right(&value.to_string(), width)
    });
    env.add_filter("pad_center", |value: Value, width: usize| -> String {
        pad_center(&value.to_string(), width)
    });

    // {{ value | truncate_at(width, "middle") }}
    env.add_filter(
        "truncate_at",
        |value: Value, width: usize, position: Option<String>, ellipsis: Option<String>| -> String {
            let text = value.to_string();
            let ell = ellipsis.as_deref().unwrap_or("…");
            match position.as_deref().unwrap_or("end") {
                "start" => truncate_start(&text, width, ell),
                "middle" => truncate_middle(&text, width, ell),
                _ => truncate_end(&text, width, ell),
            }
        },
    );

    env.add_filter("display_width", |value: Value| -> usize {
        display_width(&value.to_string())
    });

    env.add_filter("snakecase", |value: Value| -> String {
        snake_case(&value.to_string())
    });
    env.add_filter("kebabcase", |value: Value| -> String {
        kebab_case(&value.to_string())
    });
    env.add_filter("camelcase", |value: Value| -> String {
        camel_case(&value.to_string())
    });
    env.add_filter("pascalcase", |value: Value| -> String {
        pascal_case(&value.to_string())
    });

    env.add_filter("ascii", |value: Value| -> String {
        deunicode::deunicode(&value.to_string())
    });
    env.add_filter("slugify", |value: Value| -> String {
        slugify(&value.to_string())
    });

    env.add_filter(
        "repeat",
        |value: Value, count: usize| -> Result<String, Error> {
            let text = value.to_string();
            match text.len().checked_mul(count) {
                Some(total) if total <= MAX_REPEAT_BYTES => Ok(text.repeat(count)),
                _ => Err(Error::new(
                    ErrorKind::InvalidOperation,
                    format!("repeat count {count} is too large"),
                )),
            }
        },
    );

    // Character offsets; negative values count from the end.
    env.add_filter(
        "substr",
        |value: Value, start: i64, end: Option<i64>| -> String {
            let chars: Vec<char> = value.to_string().chars().collect();
            let len = chars.len() as i64;
            let clamp = |i: i64| -> usize {
                let i = if i < 0 { len + i } else { i };
                i.clamp(0, len) as usize
            };
            let from = clamp(start);
            let to = clamp(end.unwrap_or(len));
            if from >= to {
                return String::new();
            }
            chars[from..to].iter().collect()
        },
    );

    env.add_filter("has_prefix", |value: Value, prefix: String| -> bool {
        value.to_string().starts_with(&prefix)
    });
    env.add_filter("has_suffix", |value: Value, suffix: String| -> bool {
        value.to_string().ends_with(&suffix)
    });
    env.add_filter("contains", |value: Value, needle: String| -> bool {
        value.to_string().contains(&needle)
    });

    env.add_filter("atoi", |value: Value| -> i64 {
        value.to_string().trim().parse::<i64>().unwrap_or(0)
    });
}
