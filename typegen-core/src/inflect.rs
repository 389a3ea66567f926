//! English singularization for collection name tokens.
//!
//! Collection names are usually plural nouns ("posts", "categories") while
//! the generated types describe a single row ("Post", "Category").

/// Words that are identical in singular and plural form.
const UNCOUNTABLE: &[&str] = &[
    "audio",
    "data",
    "equipment",
    "feedback",
    "information",
    "media",
    "metadata",
    "money",
    "news",
    "series",
    "sheep",
    "species",
    "staff",
    "status",
    "analytics",
    "settings",
];

/// Plural forms that do not follow the suffix rules.
const IRREGULAR: &[(&str, &str)] = &[
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("teeth", "tooth"),
    ("feet", "foot"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("oxen", "ox"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("heroes", "hero"),
    ("potatoes", "potato"),
    ("tomatoes", "tomato"),
    ("quizzes", "quiz"),
    ("statuses", "status"),
    ("buses", "bus"),
    ("viruses", "virus"),
    ("campuses", "campus"),
    ("analyses", "analysis"),
    ("aliases", "alias"),
    ("caches", "cache"),
    ("niches", "niche"),
    ("lenses", "lens"),
    ("canvases", "canvas"),
    ("gases", "gas"),
];

/// Endings of words that are already singular.
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is"];

/// Suffix rules, checked in order. The first matching suffix wins.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("xes", "x"),
    ("zzes", "zz"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("lves", "lf"),
    ("ies", "y"),
    ("ouses", "ouse"),
    ("auses", "ause"),
    ("uses", "us"),
    ("ses", "se"),
    ("s", ""),
];

/// Convert a plural English word to its singular form.
///
/// The casing of the untouched prefix is preserved, so `"Categories"`
/// becomes `"Category"`. Words that are already singular are returned
/// unchanged.
pub fn singularize(word: &str) -> String {
    let lower = word.to_lowercase();

    if !word.is_ascii() || UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    for (plural, singular) in IRREGULAR {
        if lower == *plural {
            return replace_suffix(word, plural.len(), singular);
        }
    }

    if SINGULAR_ENDINGS.iter().any(|ending| lower.ends_with(ending)) {
        return word.to_string();
    }

    for (suffix, replacement) in SUFFIX_RULES {
        // Leave at least one character of stem in place ("ties", "bus").
        if lower.ends_with(suffix) && lower.len() > suffix.len() + 1 {
            return replace_suffix(word, suffix.len(), replacement);
        }
    }

    word.to_string()
}

fn replace_suffix(word: &str, suffix_len: usize, replacement: &str) -> String {
    let stem = &word[..word.len() - suffix_len];
    let capitalize = stem.is_empty() && word.starts_with(|c: char| c.is_uppercase());

    if capitalize {
        let mut chars = replacement.chars();
        match chars.next() {
            Some(c) => c.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        format!("{stem}{replacement}")
    }
}
