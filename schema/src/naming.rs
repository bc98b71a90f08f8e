//! Name formatting between schema-side and model-side conventions.
//!
//! Schema names are lowercase words separated by spaces or underscores
//! ("phenotypic feature", "related to"). The emitted model uses
//! UpperCamelCase for classes and snake_case for fields.

/// Format a schema name as an UpperCamelCase type name.
///
/// "phenotypic feature" becomes "PhenotypicFeature". Already-camel names
/// pass through unchanged.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for word in name.split([' ', '_']) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Format a schema name as a snake_case field name.
///
/// "related to" becomes "related_to". Uppercase letters are lowered with an
/// underscore inserted at each word boundary, so "GeneProduct" becomes
/// "gene_product".
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_lower = false;
    for ch in name.chars() {
        if ch == ' ' || ch == '_' {
            if !out.ends_with('_') {
                out.push('_');
            }
            prev_lower = false;
        } else if ch.is_uppercase() {
            if prev_lower && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
            prev_lower = false;
        } else {
            out.push(ch);
            prev_lower = true;
        }
    }
    out
}
