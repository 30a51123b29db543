use std::collections::HashMap;

use crate::error::{ProcessingError, Result};
use crate::types::FieldDecl;

/// Builds the canonical EIP-712 type string for `type_name`: its own
/// primary definition first, followed by the primaries of every other
/// struct type transitively referenced from it, sorted lexicographically.
pub fn encode_type(types: &HashMap<String, Vec<FieldDecl>>, type_name: &str) -> Result<String> {
    if !types.contains_key(type_name) {
        return Err(ProcessingError::UnknownType(type_name.to_string()));
    }
    let mut found = Vec::new();
    collect_referenced_types(types, type_name, &mut found);

    let mut others: Vec<&str> =
        found.iter().map(String::as_str).filter(|&t| t != type_name).collect();
    others.sort_unstable();

    let mut out = primary_type_string(types, type_name)?;
    for other in others {
        out.push_str(&primary_type_string(types, other)?);
    }
    Ok(out)
}

/// Walks the transitive set of struct types referenced from `type_name`
/// (including `type_name` itself), adding each to `found` *before*
/// recursing into its fields so cycles terminate safely.
fn collect_referenced_types(types: &HashMap<String, Vec<FieldDecl>>, type_name: &str, found: &mut Vec<String>) {
    if found.iter().any(|t| t == type_name) {
        return;
    }
    found.push(type_name.to_string());
    let Some(fields) = types.get(type_name) else {
        return;
    };
    for field in fields {
        let base = strip_array_suffixes(&field.type_);
        if types.contains_key(base) {
            collect_referenced_types(types, base, found);
        }
    }
}

/// Formats a single type's primary definition: `Name(type1 name1,type2
/// name2,...)`, no whitespace, declared field order preserved.
fn primary_type_string(types: &HashMap<String, Vec<FieldDecl>>, type_name: &str) -> Result<String> {
    let fields = types.get(type_name).ok_or_else(|| ProcessingError::UnknownType(type_name.to_string()))?;
    let body = fields.iter().map(|f| format!("{} {}", f.type_, f.name)).collect::<Vec<_>>().join(",");
    Ok(format!("{type_name}({body})"))
}

/// Strips every trailing `[]`/`[N]` array suffix, returning the underlying
/// type name (atomic or user-defined).
pub(crate) fn strip_array_suffixes(type_expr: &str) -> &str {
    let mut rest = type_expr;
    while let Some(idx) = rest.rfind('[') {
        if rest.ends_with(']') {
            rest = &rest[..idx];
        } else {
            break;
        }
    }
    rest
}

/// Strips exactly one trailing `[]`/`[N]` array suffix, returning the
/// element type if `type_expr` is an array type at all.
pub(crate) fn strip_one_array_suffix(type_expr: &str) -> Option<&str> {
    if !type_expr.ends_with(']') {
        return None;
    }
    let idx = type_expr.rfind('[')?;
    Some(&type_expr[..idx])
}
