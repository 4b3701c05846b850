//! Naming conventions for relation and key inference.
//!
//! Every function here is a pure, deterministic string transformation.
//! Downstream schema naming depends on bit-exact reproducibility, so the
//! rules are fixed and explicit rather than configurable.

use crate::error::RelationError;

/// Convert string to snake_case
pub fn snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_lowercase().next().unwrap_or(c));
    }
    result
}

/// Conventional foreign-key column name for a relation or entity name:
/// `snake_case(name) + "_id"`.
pub fn foreign_key(name: &str) -> String {
    format!("{}_id", snake_case(name))
}

/// Strip any schema qualifier from a table name (`"public.users"` -> `"users"`).
pub fn table_basename(table: &str) -> &str {
    table.rsplit('.').next().unwrap_or(table)
}

/// Singular form of a conventional (plural) table basename.
///
/// Rules, applied in order:
/// - `*ies` -> `*y` (`categories` -> `category`)
/// - `*ses`, `*xes`, `*zes`, `*ches`, `*shes` -> strip `es` (`statuses` -> `status`)
/// - `*s` (but not `*ss`) -> strip `s` (`users` -> `user`)
/// - anything else is returned unchanged
pub fn singularize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    for suffix in ["ses", "xes", "zes", "ches", "shes"] {
        if let Some(stem) = name.strip_suffix(suffix) {
            let keep = &suffix[..suffix.len() - 2];
            return format!("{stem}{keep}");
        }
    }
    if name.len() > 1 && name.ends_with('s') && !name.ends_with("ss") {
        return name[..name.len() - 1].to_string();
    }
    name.to_string()
}

/// Canonical join table name for a many-to-many relation.
///
/// Both table basenames are singular-snake-cased, sorted lexicographically,
/// and joined with an underscore, so either side of the relation computes
/// the same name.
pub fn join_table(table_a: &str, table_b: &str) -> Result<String, RelationError> {
    let mut segments = [
        singularize(&snake_case(table_basename(table_a))),
        singularize(&snake_case(table_basename(table_b))),
    ];
    for segment in &segments {
        if segment.is_empty() {
            return Err(RelationError::naming(format!(
                "join table segment derived from `{table_a}`/`{table_b}` is empty"
            )));
        }
    }
    segments.sort();
    Ok(segments.join("_"))
}

/// Extract the accessor name from a `type_name` probe path.
///
/// `accessor_name!` plants a probe function inside the calling accessor and
/// reads its fully qualified type name, e.g.
/// `my_app::entities::author::probe`. The trailing probe segment is dropped,
/// as is any `{{closure}}` frame between the probe and the accessor, so the
/// result is the name of the user-facing accessor rather than an internal
/// dispatch frame. Returns an empty string if no accessor frame remains;
/// callers must treat that as a naming-inference failure.
pub fn accessor_basename(probe_path: &str) -> &str {
    let mut path = match probe_path.rfind("::") {
        Some(idx) => &probe_path[..idx],
        None => return "",
    };
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    if path.ends_with("{{closure}}") {
        return "";
    }
    path.rsplit("::").next().unwrap_or(path)
}

/// Validate an inferred or caller-supplied identifier.
pub(crate) fn ensure_ident(name: &str, what: &str) -> Result<String, RelationError> {
    if name.trim().is_empty() {
        return Err(RelationError::naming(format!("{what} is empty")));
    }
    Ok(name.to_string())
}
