//! Identifier casing conversions.
//!
//! Every conversion first splits the input into word tokens with
//! [`split_words`] and then reassembles them in the target convention, so
//! names that mix conventions (`a-B-HiHo-merryOh_yes_no_XYZ`) normalize the
//! same way as names that follow one.

use std::fmt;

/// Character classes seen by the word scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    /// Uppercase letter.
    Upper,
    /// Lowercase letter, digit, a letter without case, or a non-ASCII
    /// mark such as the combining dot left by lowercasing `İ`.
    Lower,
    /// Anything else; always a word boundary and never part of a word.
    Delimiter,
}

impl Class {
    fn of(c: char) -> Self {
        if c.is_uppercase() {
            Self::Upper
        } else if c.is_alphanumeric() || (!c.is_ascii() && !c.is_whitespace()) {
            Self::Lower
        } else {
            Self::Delimiter
        }
    }
}

/// Split an identifier into word tokens, preserving the original case.
///
/// Boundaries are delimiters (`-`, `_`, `/` or any other non-alphanumeric
/// character), a lowercase letter or digit followed by an uppercase letter,
/// and the last letter of an uppercase run that is followed by a lowercase
/// letter or digit.
///
/// ```
/// use penman_core::split_words;
///
/// assert_eq!(split_words("XMLHttpRequest"), ["XML", "Http", "Request"]);
/// assert_eq!(split_words("get_file-name"), ["get", "file", "name"]);
/// assert_eq!(split_words("XYZa"), ["XY", "Za"]);
/// ```
pub fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev = Class::Delimiter;

    for (i, &c) in chars.iter().enumerate() {
        let class = Class::of(c);
        let next = chars.get(i + 1).map_or(Class::Delimiter, |&n| Class::of(n));

        let boundary = match (prev, class) {
            (_, Class::Delimiter) => true,
            (Class::Lower, Class::Upper) => true,
            // Acronym end: the last capital belongs to the next word.
            (Class::Upper, Class::Upper) => next == Class::Lower,
            _ => false,
        };

        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        if class != Class::Delimiter {
            current.push(c);
        }
        prev = class;
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

fn join_lowercase(name: &str, sep: &str) -> String {
    split_words(name)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Convert to lower camel case (e.g., "hello_world" -> "helloWorld").
pub fn to_camel_case(name: &str) -> String {
    let mut words = split_words(name).into_iter();
    let Some(first) = words.next() else {
        return String::new();
    };
    let mut result = first.to_lowercase();
    for word in words {
        result.push_str(&capitalize(&word));
    }
    result
}

/// Convert to PascalCase (e.g., "hello_world" -> "HelloWorld").
pub fn to_pascal_case(name: &str) -> String {
    split_words(name).iter().map(|w| capitalize(w)).collect()
}

/// Convert to kebab-case (e.g., "HelloWorld" -> "hello-world").
pub fn to_kebab_case(name: &str) -> String {
    join_lowercase(name, "-")
}

/// Convert to snake_case (e.g., "HelloWorld" -> "hello_world").
pub fn to_snake_case(name: &str) -> String {
    join_lowercase(name, "_")
}

/// An identifier convention, for callers that pick one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    /// `helloWorld`
    Camel,
    /// `HelloWorld`
    Pascal,
    /// `hello-world`
    Kebab,
    /// `hello_world`
    Snake,
}

impl Case {
    /// Convert `name` into this convention.
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Camel => to_camel_case(name),
            Self::Pascal => to_pascal_case(name),
            Self::Kebab => to_kebab_case(name),
            Self::Snake => to_snake_case(name),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Camel => "camelCase",
            Self::Pascal => "PascalCase",
            Self::Kebab => "kebab-case",
            Self::Snake => "snake_case",
        };
        f.write_str(name)
    }
}
