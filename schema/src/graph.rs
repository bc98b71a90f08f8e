//! The schema graph - immutable input to the generator.

use crate::{camel_case, ClassDef, EnumDef, SlotDef, TypeDef};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Name of the root entity class. Its attached `id`/`type`/`category` slots
/// form the fixed field group and it alone carries the category-inference
/// hook.
pub const ENTITY_CLASS: &str = "entity";

/// Dataset-level provenance attached to a schema. Not part of the
/// fingerprint: two schemas differing only in description generate the same
/// model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

/// The read-only container of class, slot, type and enum definitions.
///
/// Definitions keep their insertion order; lookups go through name indexes.
/// Adding a definition under an existing name replaces it in place, so the
/// order of first appearance is stable.
#[derive(Debug, Clone)]
pub struct SchemaGraph {
    name: String,
    version: Option<String>,
    description: Option<String>,
    metadata: Option<SchemaMetadata>,
    classes: Vec<ClassDef>,
    class_index: HashMap<String, usize>,
    slots: Vec<SlotDef>,
    slot_index: HashMap<String, usize>,
    types: Vec<TypeDef>,
    type_index: HashMap<String, usize>,
    enums: Vec<EnumDef>,
    enum_index: HashMap<String, usize>,
}

impl SchemaGraph {
    /// Create an empty graph seeded with the builtin primitive types.
    pub fn new(name: impl Into<String>) -> Self {
        let mut graph = Self {
            name: name.into(),
            version: None,
            description: None,
            metadata: None,
            classes: Vec::new(),
            class_index: HashMap::new(),
            slots: Vec::new(),
            slot_index: HashMap::new(),
            types: Vec::new(),
            type_index: HashMap::new(),
            enums: Vec::new(),
            enum_index: HashMap::new(),
        };
        for ty in TypeDef::builtins() {
            graph.add_type(ty);
        }
        graph
    }

    // ==================== Construction ====================

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = Some(version.into());
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.set_version(version);
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn set_metadata(&mut self, metadata: SchemaMetadata) {
        self.metadata = Some(metadata);
    }

    pub fn with_metadata(mut self, metadata: SchemaMetadata) -> Self {
        self.set_metadata(metadata);
        self
    }

    pub fn add_class(&mut self, class: ClassDef) {
        match self.class_index.get(&class.name) {
            Some(&i) => self.classes[i] = class,
            None => {
                self.class_index.insert(class.name.clone(), self.classes.len());
                self.classes.push(class);
            }
        }
    }

    pub fn with_class(mut self, class: ClassDef) -> Self {
        self.add_class(class);
        self
    }

    pub fn add_slot(&mut self, slot: SlotDef) {
        match self.slot_index.get(&slot.name) {
            Some(&i) => self.slots[i] = slot,
            None => {
                self.slot_index.insert(slot.name.clone(), self.slots.len());
                self.slots.push(slot);
            }
        }
    }

    pub fn with_slot(mut self, slot: SlotDef) -> Self {
        self.add_slot(slot);
        self
    }

    pub fn add_type(&mut self, ty: TypeDef) {
        match self.type_index.get(&ty.name) {
            Some(&i) => self.types[i] = ty,
            None => {
                self.type_index.insert(ty.name.clone(), self.types.len());
                self.types.push(ty);
            }
        }
    }

    pub fn with_type(mut self, ty: TypeDef) -> Self {
        self.add_type(ty);
        self
    }

    pub fn add_enum(&mut self, en: EnumDef) {
        match self.enum_index.get(&en.name) {
            Some(&i) => self.enums[i] = en,
            None => {
                self.enum_index.insert(en.name.clone(), self.enums.len());
                self.enums.push(en);
            }
        }
    }

    pub fn with_enum(mut self, en: EnumDef) -> Self {
        self.add_enum(en);
        self
    }

    // ==================== Lookups ====================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn metadata(&self) -> Option<&SchemaMetadata> {
        self.metadata.as_ref()
    }

    /// All classes in insertion order.
    pub fn classes(&self) -> &[ClassDef] {
        &self.classes
    }

    pub fn class(&self, name: &str) -> Option<&ClassDef> {
        self.class_index.get(name).map(|&i| &self.classes[i])
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.class_index.contains_key(name)
    }

    /// All slots in insertion order.
    pub fn slots(&self) -> &[SlotDef] {
        &self.slots
    }

    pub fn slot(&self, name: &str) -> Option<&SlotDef> {
        self.slot_index.get(name).map(|&i| &self.slots[i])
    }

    pub fn types(&self) -> &[TypeDef] {
        &self.types
    }

    pub fn type_def(&self, name: &str) -> Option<&TypeDef> {
        self.type_index.get(name).map(|&i| &self.types[i])
    }

    pub fn enums(&self) -> &[EnumDef] {
        &self.enums
    }

    pub fn enum_def(&self, name: &str) -> Option<&EnumDef> {
        self.enum_index.get(name).map(|&i| &self.enums[i])
    }

    // ==================== Class ancestry ====================

    /// The `is_a` chain starting at `name` (self first). Stops at the root
    /// or at the first repeated name.
    pub fn is_a_chain(&self, name: &str) -> Vec<&ClassDef> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = self.class(name);
        while let Some(class) = current {
            if !seen.insert(class.name.as_str()) {
                break;
            }
            chain.push(class);
            current = class.is_a.as_deref().and_then(|p| self.class(p));
        }
        chain
    }

    /// Ancestor linearization: self first, then the `is_a` chain, then
    /// mixins, depth-first left-to-right with first occurrence kept. This is
    /// the order category inference walks at runtime, so most-derived names
    /// come first.
    pub fn linearization(&self, name: &str) -> Vec<&ClassDef> {
        let mut out = Vec::new();
        let mut seen = HashSet::new();
        self.linearize_into(name, &mut out, &mut seen);
        out
    }

    fn linearize_into<'a>(
        &'a self,
        name: &str,
        out: &mut Vec<&'a ClassDef>,
        seen: &mut HashSet<&'a str>,
    ) {
        let Some(class) = self.class(name) else {
            return;
        };
        if !seen.insert(class.name.as_str()) {
            return;
        }
        out.push(class);
        if let Some(parent) = class.is_a.as_deref() {
            self.linearize_into(parent, out, seen);
        }
        for mixin in &class.mixins {
            self.linearize_into(mixin, out, seen);
        }
    }

    /// Whether the class descends from the root entity class (or is it).
    pub fn entity_rooted(&self, name: &str) -> bool {
        self.linearization(name)
            .iter()
            .any(|c| c.name == ENTITY_CLASS)
    }

    /// The identifier slot of a class: the first attached slot carrying the
    /// identifier or key marker, else the nearest `is_a` ancestor's.
    pub fn identifier_slot(&self, name: &str) -> Option<&SlotDef> {
        for class in self.is_a_chain(name) {
            for slot_name in &class.slots {
                if let Some(slot) = self.slot(slot_name) {
                    if slot.is_identifying() {
                        return Some(slot);
                    }
                }
            }
        }
        None
    }

    // ==================== Range paths ====================

    /// The identifier path of a class: how a reference to it spells out,
    /// most-distal type first, ending in the class's own formatted name.
    ///
    /// While the `is_a` parent also resolves an identifier the parent's path
    /// is extended, so every ancestor down from the class that introduces the
    /// identifier appears. At the introducing class the identifier slot's
    /// range path forms the head. A class resolving no identifier at all
    /// contributes `[str, Name]` without consulting its parent.
    pub fn identifier_path(&self, name: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.identifier_path_inner(name, &mut seen)
    }

    fn identifier_path_inner(&self, name: &str, seen: &mut HashSet<String>) -> Vec<String> {
        let formatted = camel_case(name);
        if !seen.insert(name.to_string()) {
            return vec![formatted];
        }
        let Some(class) = self.class(name) else {
            return vec!["str".to_string(), formatted];
        };
        let Some(id_slot) = self.identifier_slot(name) else {
            return vec!["str".to_string(), formatted];
        };
        if let Some(parent) = class.is_a.as_deref() {
            if self.identifier_slot(parent).is_some() {
                let mut path = self.identifier_path_inner(parent, seen);
                path.push(formatted);
                return path;
            }
        }
        let mut path = if self.has_class(&id_slot.range) {
            self.identifier_path_inner(&id_slot.range, seen)
        } else {
            self.type_chain(&id_slot.range)
        };
        path.push(formatted);
        path
    }

    /// The refinement chain of a scalar type, root primitive first:
    /// `Iri` yields `[str, UriOrCurie, Iri]`.
    pub fn type_chain(&self, name: &str) -> Vec<String> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = Some(name.to_string());
        while let Some(ty_name) = current {
            if !seen.insert(ty_name.clone()) {
                break;
            }
            current = self.type_def(&ty_name).and_then(|t| t.typeof_.clone());
            chain.push(ty_name);
        }
        chain.reverse();
        chain
    }

    /// The range path of a slot: the marker-bearing type sequence the
    /// classifier inspects. `None` when the range resolves to nothing known.
    pub fn range_path(&self, slot: &SlotDef) -> Option<Vec<String>> {
        if self.has_class(&slot.range) {
            Some(self.identifier_path(&slot.range))
        } else if self.type_index.contains_key(&slot.range) {
            Some(self.type_chain(&slot.range))
        } else if self.enum_index.contains_key(&slot.range) {
            Some(vec![camel_case(&slot.range)])
        } else {
            None
        }
    }

    // ==================== Slot ancestry ====================

    /// The root of a slot's `is_a` chain, and the name it is emitted under.
    pub fn slot_root_name<'a>(&'a self, slot: &'a SlotDef) -> &'a str {
        let mut seen = HashSet::new();
        let mut current = slot;
        while let Some(parent) = current
            .is_a
            .as_deref()
            .filter(|p| seen.insert(p.to_string()))
            .and_then(|p| self.slot(p))
        {
            current = parent;
        }
        current.effective_name()
    }

    /// Every slot name reachable from `name` over slot `is_a` and mixins,
    /// self included, depth-first with first occurrence kept.
    pub fn slot_ancestor_closure(&self, name: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let mut seen = HashSet::new();
        self.slot_closure_into(name, &mut out, &mut seen);
        out
    }

    fn slot_closure_into<'a>(
        &'a self,
        name: &str,
        out: &mut Vec<&'a str>,
        seen: &mut HashSet<&'a str>,
    ) {
        let Some(slot) = self.slot(name) else {
            return;
        };
        if !seen.insert(slot.name.as_str()) {
            return;
        }
        out.push(slot.name.as_str());
        if let Some(parent) = slot.is_a.as_deref() {
            self.slot_closure_into(parent, out, seen);
        }
        for mixin in &slot.mixins {
            self.slot_closure_into(mixin, out, seen);
        }
    }

    // ==================== Fingerprint ====================

    /// Content hash of the graph's structure. Stable across runs; metadata
    /// and descriptions do not contribute.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hash_str(&mut hasher, &self.name);
        hash_opt(&mut hasher, self.version.as_deref());
        for class in &self.classes {
            hash_str(&mut hasher, &class.name);
            hash_opt(&mut hasher, class.is_a.as_deref());
            hash_list(&mut hasher, &class.mixins);
            hasher.update(&[class.is_abstract as u8, class.is_mixin as u8]);
            hash_list(&mut hasher, &class.slots);
            hash_list(&mut hasher, &class.id_prefixes);
        }
        for slot in &self.slots {
            hash_str(&mut hasher, &slot.name);
            hash_opt(&mut hasher, slot.alias.as_deref());
            hash_opt(&mut hasher, slot.is_a.as_deref());
            hash_list(&mut hasher, &slot.mixins);
            hash_list(&mut hasher, &slot.domain_of);
            hash_str(&mut hasher, &slot.range);
            hasher.update(&[
                slot.required as u8,
                slot.multivalued as u8,
                slot.inlined as u8,
                slot.identifier as u8,
                slot.key as u8,
            ]);
        }
        for ty in &self.types {
            hash_str(&mut hasher, &ty.name);
            hash_opt(&mut hasher, ty.typeof_.as_deref());
        }
        for en in &self.enums {
            hash_str(&mut hasher, &en.name);
            hash_list(&mut hasher, &en.values);
        }
        hasher.finalize().to_hex().to_string()
    }
}

// Length-prefixed so adjacent fields cannot collide.
fn hash_str(hasher: &mut blake3::Hasher, s: &str) {
    hasher.update(&(s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

fn hash_opt(hasher: &mut blake3::Hasher, s: Option<&str>) {
    hasher.update(&[s.is_some() as u8]);
    if let Some(s) = s {
        hash_str(hasher, s);
    }
}

fn hash_list(hasher: &mut blake3::Hasher, items: &[String]) {
    hasher.update(&(items.len() as u64).to_le_bytes());
    for item in items {
        hash_str(hasher, item);
    }
}
