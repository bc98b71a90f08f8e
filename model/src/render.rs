//! Deterministic text rendering of a model artifact.
//!
//! Output layout: fixed support prelude, header comment, type aliases,
//! enums, class blocks in dependency-sorted order, predicate block. The
//! same artifact always renders to the same bytes.

use crate::ModelArtifact;
use std::fmt::Write;

/// Fixed support definitions printed ahead of every generated model. Not
/// derived from the schema.
pub const PRELUDE: &str = "\
// ==================== Support definitions ====================
// Shared by every generated model; independent of the source schema.
type Curie = str matching \"^[a-zA-Z_]?[a-zA-Z_0-9-]*:[A-Za-z0-9_][A-Za-z0-9_.-]*[A-Za-z0-9_]*$\"
type Iri = str matching \"^http\"
// validate <field>: coerce_to_list wraps scalars into one-element sequences
// validate <field>: namespace(...) restricts identifier prefixes
// on_construct: infer_category fills unset categories from ancestor tags
";

/// Accumulates generated lines. Adapted for flat, brace-delimited blocks;
/// indentation is written into the line content.
struct ModelWriter {
    buf: String,
}

impl ModelWriter {
    fn new() -> Self {
        Self { buf: String::new() }
    }

    fn line(&mut self, content: &str) {
        self.buf.push_str(content);
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// Render the artifact with the support prelude in front.
pub fn render(artifact: &ModelArtifact) -> String {
    format!("{}\n{}", PRELUDE, render_body(artifact))
}

/// Render the artifact body: header, aliases, enums, classes, predicates.
pub fn render_body(artifact: &ModelArtifact) -> String {
    let mut w = ModelWriter::new();

    w.line("// Generated data model. Do not edit by hand.");
    match artifact.version() {
        Some(version) => w.line(&format!(
            "// schema: {} ({})",
            artifact.schema_name(),
            version
        )),
        None => w.line(&format!("// schema: {}", artifact.schema_name())),
    }
    w.line(&format!("// fingerprint: {}", artifact.fingerprint()));
    if let Some(title) = artifact.metadata_title() {
        w.line(&format!("// dataset: {}", title));
    }

    if !artifact.aliases().is_empty() {
        w.blank();
        for alias in artifact.aliases() {
            w.line(&format!("alias {} = {}", alias.name, alias.base));
        }
    }

    for en in artifact.enums() {
        w.blank();
        w.line(&format!("enum {} {{", en.name));
        for value in &en.values {
            w.line(&format!("    {}", value));
        }
        w.line("}");
    }

    for class in artifact.classes() {
        w.blank();
        if let Some(description) = &class.description {
            for line in description.lines() {
                w.line(&format!("// {}", line));
            }
        }
        let mut header = String::new();
        if class.is_abstract {
            header.push_str("abstract ");
        }
        if class.is_mixin {
            header.push_str("mixin ");
        }
        let _ = write!(header, "class {}", class.name);
        if !class.parents.is_empty() {
            let _ = write!(header, " : {}", class.parents.join(", "));
        }

        let mut body: Vec<String> = Vec::new();
        if let Some(category) = &class.category {
            body.push(format!("category = \"{}\"", category));
        }
        if !class.required.is_empty() {
            body.push(format!("requires {}", class.required.join(", ")));
        }
        for field in &class.fields {
            body.push(field.to_string());
        }
        for rule in &class.validators {
            body.push(rule.to_string());
        }
        if class.infers_category {
            body.push("on_construct: infer_category".to_string());
        }

        if body.is_empty() {
            w.line(&format!("{} {{}}", header));
        } else {
            w.line(&format!("{} {{", header));
            for entry in body {
                w.line(&format!("    {}", entry));
            }
            w.line("}");
        }
    }

    if !artifact.predicates().is_empty() {
        w.blank();
        w.line("predicates {");
        for curie in artifact.predicates().curies() {
            w.line(&format!("    {}", curie));
        }
        w.line("}");
    }

    w.finish()
}
