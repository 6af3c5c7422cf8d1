//! Classification of schema type tokens
//!
//! A token is a base type optionally followed by array suffixes, e.g.
//! `int16`, `string[]`, `geometry_msgs/Point[4]` or `int16[3][]`. Suffixes are
//! stripped right to left, so `int16[3][]` is an unbounded array of 3-bounded
//! arrays. The base is a builtin, the reserved header type, or a registered
//! message name (bare names are qualified with the owning package).

use crate::error::{GenError, GenResult};
use crate::types::TypeDescriptor;
use std::collections::{BTreeSet, HashSet};

/// Name of the reserved header type within its package
pub const HEADER_TYPE: &str = "Header";

/// Source of registered message names
pub trait TypeLookup {
    /// Whether `full_name` (`package/Name`) is a known message type
    fn contains(&self, full_name: &str) -> bool;
}

impl TypeLookup for BTreeSet<String> {
    fn contains(&self, full_name: &str) -> bool {
        BTreeSet::contains(self, full_name)
    }
}

impl TypeLookup for HashSet<String> {
    fn contains(&self, full_name: &str) -> bool {
        HashSet::contains(self, full_name)
    }
}

/// Classifies type tokens against a [`TypeLookup`]
pub struct TypeResolver<'a, L: TypeLookup + ?Sized> {
    lookup: &'a L,
    header_package: &'a str,
}

impl<'a, L: TypeLookup + ?Sized> TypeResolver<'a, L> {
    pub fn new(lookup: &'a L, header_package: &'a str) -> Self {
        Self {
            lookup,
            header_package,
        }
    }

    /// Classify `token` as seen from a schema owned by `context_package`
    pub fn classify(&self, token: &str, context_package: &str) -> GenResult<TypeDescriptor> {
        if let Some((base, fixed_length)) = split_array_suffix(token)? {
            let element = self.classify(base, context_package)?;
            return Ok(TypeDescriptor::array(element, fixed_length));
        }
        self.classify_base(token, context_package)
    }

    fn classify_base(&self, token: &str, context_package: &str) -> GenResult<TypeDescriptor> {
        if let Some(desc) = TypeDescriptor::builtin(token) {
            return Ok(desc);
        }
        if self.is_header(token) {
            return Ok(TypeDescriptor::Header);
        }

        let (package, name) = match token.split_once('/') {
            Some((package, name)) => (package, name),
            None => {
                if !token.starts_with(|c: char| c.is_ascii_uppercase()) {
                    return Err(unsupported(token, "not a builtin type"));
                }
                (context_package, token)
            }
        };
        if !is_identifier(package) || !is_identifier(name) {
            return Err(unsupported(token, "malformed type name"));
        }

        let full_name = format!("{package}/{name}");
        if !self.lookup.contains(&full_name) {
            return Err(GenError::SchemaResolution { token: full_name });
        }
        Ok(TypeDescriptor::registered(package, name))
    }

    fn is_header(&self, token: &str) -> bool {
        token == HEADER_TYPE
            || token
                .strip_prefix(self.header_package)
                .and_then(|rest| rest.strip_prefix('/'))
                == Some(HEADER_TYPE)
    }
}

/// Split one trailing `[]` or `[N]` off `token`
fn split_array_suffix(token: &str) -> GenResult<Option<(&str, Option<u32>)>> {
    let Some(rest) = token.strip_suffix(']') else {
        if token.contains(['[', ']']) {
            return Err(unsupported(token, "malformed array suffix"));
        }
        return Ok(None);
    };
    let Some(open) = rest.rfind('[') else {
        return Err(unsupported(token, "malformed array suffix"));
    };
    let (base, bound) = (&rest[..open], &rest[open + 1..]);
    if base.is_empty() {
        return Err(unsupported(token, "array suffix without element type"));
    }

    let fixed_length = if bound.is_empty() {
        None
    } else if bound.bytes().all(|b| b.is_ascii_digit()) {
        let n = bound
            .parse::<u32>()
            .map_err(|_| unsupported(token, "array bound out of range"))?;
        Some(n)
    } else {
        return Err(unsupported(token, "array bound is not a non-negative integer"));
    };
    Ok(Some((base, fixed_length)))
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn unsupported(token: &str, reason: &str) -> GenError {
    GenError::UnsupportedType {
        token: token.to_string(),
        reason: reason.to_string(),
    }
}
