//! Naming convention utilities for code generation.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `geometry_msgs` | [`to_namespace`] | `GeometryMsgs` |
//! | `PointCloud2` | [`to_snake_case`] | `point_cloud2` |
//! | `type` | [`field_ident`] | `r#type` |
//! | any text | [`raw_string_literal`] | `r#"..."#` |

/// Rust keywords that can be used as raw identifiers
const RAW_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
    "where", "while", "abstract", "become", "box", "do", "final", "macro", "override", "priv",
    "try", "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be raw identifiers
const RESERVED_PATH_KEYWORDS: &[&str] = &["self", "Self", "super", "crate"];

/// Convert a package name to the alias its units are imported under.
///
/// # Examples
///
/// ```
/// use msgbridge_cli::codegen::naming::to_namespace;
///
/// assert_eq!(to_namespace("geometry_msgs"), "GeometryMsgs");
/// assert_eq!(to_namespace("std_msgs"), "StdMsgs");
/// assert_eq!(to_namespace("tf2"), "Tf2");
/// ```
pub fn to_namespace(package: &str) -> String {
    package
        .split(['-', '_'])
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a PascalCase type name to a snake_case module name.
///
/// A run of capitals is kept together as one word.
///
/// # Examples
///
/// ```
/// use msgbridge_cli::codegen::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("AddTwoInts"), "add_two_ints");
/// assert_eq!(to_snake_case("PointCloud2"), "point_cloud2");
/// assert_eq!(to_snake_case("HTTPRequest"), "http_request");
/// ```
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let starts_word = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower);
            if starts_word && prev != '_' {
                result.push('_');
            }
        }
        result.push(c.to_ascii_lowercase());
    }

    result
}

/// Escape a schema member name into a valid Rust identifier.
///
/// Keywords become raw identifiers; `self`, `Self`, `super` and `crate`
/// cannot be raw and get a trailing underscore instead.
pub fn field_ident(name: &str) -> String {
    if RESERVED_PATH_KEYWORDS.contains(&name) {
        format!("{name}_")
    } else if RAW_KEYWORDS.contains(&name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}

/// Module identifier for a type's unit, e.g. `r#type` for a type named `Type`
pub fn module_ident(type_name: &str) -> String {
    field_ident(&to_snake_case(type_name))
}

/// File name of a type's unit, e.g. `add_two_ints.rs`
pub fn unit_file_name(type_name: &str) -> String {
    let ident = module_ident(type_name);
    format!("{}.rs", ident.trim_start_matches("r#"))
}

/// Quote `text` as a raw string literal with enough `#`s to contain it.
///
/// # Examples
///
/// ```
/// use msgbridge_cli::codegen::naming::raw_string_literal;
///
/// assert_eq!(raw_string_literal("int32 x\n"), "r#\"int32 x\n\"#");
/// assert_eq!(raw_string_literal("string s=\"#\""), "r##\"string s=\"#\"\"##");
/// ```
pub fn raw_string_literal(text: &str) -> String {
    let mut longest = 0;
    let mut run: Option<usize> = None;
    for c in text.chars() {
        run = match (c, run) {
            ('"', _) => Some(0),
            ('#', Some(n)) => Some(n + 1),
            _ => None,
        };
        if let Some(n) = run {
            longest = longest.max(n);
        }
    }
    let hashes = "#".repeat(longest + 1);
    format!("r{hashes}\"{text}\"{hashes}")
}

/// Quote `text` as an escaped string literal
pub fn string_literal(text: &str) -> String {
    format!("{text:?}")
}
