//! String-level scanning of .NET type names.
//!
//! This module turns a type-name string into a [`ParsedTypeName`] tree of owned
//! strings. It never touches runtime type metadata; every decision is made from
//! the characters of the input alone. The resulting tree is handed to
//! [`crate::typename::TypeName`], which builds the shared, immutable representation
//! with parent back-references.
//!
//! # Grammar
//!
//! ```text
//! typeName        := simpleOrGeneric suffix* (',' assemblyName)?
//! simpleOrGeneric := declareName ('[' argList ']')?
//! argList         := arg (',' arg)*
//! arg             := '[' typeName ']' | typeName
//! suffix          := arraySuffix | '*' | '&'
//! arraySuffix     := '[' (',' | '*')* ']'
//! ```
//!
//! Generic argument lists and array suffixes both use square brackets. They are
//! told apart by scanning the name backwards from its end: only complete groups made
//! of `[`, `]`, `,`, `*` and spaces count as array suffixes, together with `*` and `&`
//! markers between or after them. The first other character ends the suffix run.
//! Whatever precedes it may still end in a generic argument group.
//!
//! All delimiters are ASCII, so byte indices found while scanning are always valid
//! `char` boundaries for slicing.

use crate::{typename::suffix::TypeSuffix, Error, Result};

/// Maximum nesting depth of generic argument lists accepted by the parser
pub const MAX_NESTING_DEPTH: usize = 64;

/// Owned result of scanning one type name, before it is turned into a [`crate::TypeName`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedTypeName {
    pub assembly_qualified_name: String,
    pub full_name: String,
    pub declare_name: String,
    pub namespace: Option<String>,
    pub name: String,
    pub assembly_name: Option<String>,
    pub generic_arguments: Vec<ParsedTypeName>,
    pub suffixes: Vec<TypeSuffix>,
}

/// Scan `input` into a [`ParsedTypeName`] tree.
///
/// ## Arguments
/// * 'input' - A type name as produced by `Type.ToString()` or `Type.AssemblyQualifiedName`
///
/// # Errors
/// Returns [`Error::InvalidTypeNameFormat`] for empty or structurally malformed input and
/// [`Error::RecursionLimit`] if generic arguments nest deeper than [`MAX_NESTING_DEPTH`].
pub(crate) fn parse(input: &str) -> Result<ParsedTypeName> {
    parse_nested(input, 0)
}

fn parse_nested(input: &str, depth: usize) -> Result<ParsedTypeName> {
    if depth > MAX_NESTING_DEPTH {
        return Err(Error::RecursionLimit(MAX_NESTING_DEPTH));
    }

    let qualified = normalize(input)?;
    let (full_name, assembly_name) = split_assembly(qualified)?;
    let (declare_end, suffixes) = scan_suffixes(full_name);
    let (declare_name, arguments) =
        split_generic_arguments(full_name[..declare_end].trim_end(), qualified)?;

    if declare_name.is_empty() {
        return Err(invalid_type_name!(qualified, "missing declare name"));
    }

    let mut generic_arguments = Vec::new();
    if let Some(arguments) = arguments {
        for argument in split_root_commas(arguments) {
            if argument.trim().is_empty() {
                return Err(invalid_type_name!(qualified, "empty generic argument"));
            }
            generic_arguments.push(parse_nested(argument, depth + 1)?);
        }
    }

    let (namespace, name) = split_namespace(declare_name);
    if name.is_empty() {
        return Err(invalid_type_name!(qualified, "missing simple name"));
    }

    Ok(ParsedTypeName {
        assembly_qualified_name: qualified.to_string(),
        full_name: full_name.to_string(),
        declare_name: declare_name.to_string(),
        namespace: namespace.map(str::to_string),
        name: name.to_string(),
        assembly_name: assembly_name.map(str::to_string),
        generic_arguments,
        suffixes,
    })
}

/// Trim `input`, verify its brackets and strip one enclosing `[` `]` pair.
///
/// # Errors
/// Returns [`Error::InvalidTypeNameFormat`] for empty input or unbalanced brackets.
fn normalize(input: &str) -> Result<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid_type_name!(trimmed, "type name is empty"));
    }

    check_balanced(trimmed)?;

    let enclosed = trimmed.starts_with('[') && matching_close(trimmed, 0) == Some(trimmed.len() - 1);
    let stripped = if enclosed {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };

    if stripped.trim().is_empty() {
        return Err(invalid_type_name!(trimmed, "type name is empty"));
    }

    Ok(stripped)
}

fn check_balanced(name: &str) -> Result<()> {
    let mut depth = 0_usize;
    for (index, byte) in name.bytes().enumerate() {
        match byte {
            b'[' => depth += 1,
            b']' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| invalid_type_name!(name, "unexpected ']' at {}", index))?;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(invalid_type_name!(name, "{} unclosed '['", depth));
    }

    Ok(())
}

/// Index of the `]` closing the `[` at `open`
fn matching_close(name: &str, open: usize) -> Option<usize> {
    let mut depth = 0_usize;
    for (index, byte) in name.bytes().enumerate().skip(open) {
        match byte {
            b'[' => depth += 1,
            b']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }

    None
}

/// Byte indices of every comma at bracket depth zero
fn root_commas(name: &str) -> impl Iterator<Item = usize> + '_ {
    let mut depth = 0_usize;
    name.bytes().enumerate().filter_map(move |(index, byte)| {
        match byte {
            b'[' => depth += 1,
            b']' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => return Some(index),
            _ => {}
        }
        None
    })
}

/// Split `name` at its first root-depth comma into full name and assembly name.
///
/// # Errors
/// Returns [`Error::InvalidTypeNameFormat`] if either side of the comma is empty, or
/// if the simple assembly name (up to the assembly's own first comma) is empty or
/// has unbalanced brackets.
fn split_assembly(name: &str) -> Result<(&str, Option<&str>)> {
    let Some(comma) = root_commas(name).next() else {
        return Ok((name.trim(), None));
    };

    let full_name = name[..comma].trim();
    if full_name.is_empty() {
        return Err(invalid_type_name!(name, "missing type name before assembly name"));
    }

    let assembly_name = name[comma + 1..].trim();
    if assembly_name.is_empty() {
        return Err(invalid_type_name!(name, "empty assembly name"));
    }

    let simple = assembly_name
        .split_once(',')
        .map_or(assembly_name, |(simple, _)| simple)
        .trim();
    if simple.is_empty() {
        return Err(invalid_type_name!(name, "empty simple assembly name"));
    }
    check_balanced(simple)
        .map_err(|_| invalid_type_name!(name, "unbalanced simple assembly name '{}'", simple))?;

    Ok((full_name, Some(assembly_name)))
}

/// Scan `full_name` backwards for trailing array groups and pointer or by-ref markers.
///
/// Returns the index where the declaration (including any generic argument group)
/// ends, and the suffixes in declaration order. A group whose opening bracket is not
/// reached before a non-array character belongs to the generic argument list and is
/// left untouched.
fn scan_suffixes(full_name: &str) -> (usize, Vec<TypeSuffix>) {
    let mut declare_end = full_name.len();
    let mut suffixes = Vec::new();
    // Commas seen inside the group currently being read, if any
    let mut group: Option<usize> = None;

    for (index, byte) in full_name.bytes().enumerate().rev() {
        match (group, byte) {
            (None, b']') => group = Some(0),
            (None, b'*') => {
                suffixes.push(TypeSuffix::Pointer);
                declare_end = index;
            }
            (None, b'&') => {
                suffixes.push(TypeSuffix::ByRef);
                declare_end = index;
            }
            (None, b' ') | (Some(_), b' ' | b'*') => {}
            (Some(commas), b',') => group = Some(commas + 1),
            (Some(commas), b'[') => {
                suffixes.push(TypeSuffix::Array(commas + 1));
                declare_end = index;
                group = None;
            }
            _ => break,
        }
    }

    suffixes.reverse();
    (declare_end, suffixes)
}

/// Split the part of a name before its array suffixes into declare name and the
/// interior of the generic argument group, if there is one.
///
/// # Errors
/// Returns [`Error::InvalidTypeNameFormat`] if the group is empty or followed by more text.
fn split_generic_arguments<'a>(name: &'a str, context: &str) -> Result<(&'a str, Option<&'a str>)> {
    let Some(open) = name.find('[') else {
        return Ok((name, None));
    };

    let close = matching_close(name, open)
        .ok_or_else(|| invalid_type_name!(context, "unclosed generic argument list"))?;

    if !name[close + 1..].trim().is_empty() {
        return Err(invalid_type_name!(
            context,
            "unexpected '{}' after bracket group",
            name[close + 1..].trim()
        ));
    }

    let arguments = &name[open + 1..close];
    if arguments.trim().is_empty() {
        return Err(invalid_type_name!(context, "empty generic argument list"));
    }

    Ok((name[..open].trim_end(), Some(arguments)))
}

/// Split a generic argument list at its root-depth commas
fn split_root_commas(arguments: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for comma in root_commas(arguments) {
        parts.push(&arguments[start..comma]);
        start = comma + 1;
    }
    parts.push(&arguments[start..]);
    parts
}

/// Split a declare name into its namespace and final simple name.
///
/// The namespace is everything before the last `.`; the simple name is the last
/// `+`-separated nesting segment of what follows it. Both are trimmed.
fn split_namespace(declare_name: &str) -> (Option<&str>, &str) {
    let (namespace, last) = match declare_name.rsplit_once('.') {
        Some((namespace, last)) => (Some(namespace.trim()).filter(|ns| !ns.is_empty()), last),
        None => (None, declare_name),
    };

    let name = last.rsplit_once('+').map_or(last, |(_, nested)| nested);
    (namespace, name.trim())
}
