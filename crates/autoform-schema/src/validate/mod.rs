//! Schema validation orchestration and shared helpers.

pub mod naming;

use crate::{
    MAX_SCHEMA_DEPTH, err,
    error::ErrorTree,
    node::{ObjectNode, SchemaNode, ValidateNode},
    visit::{Segment, ValidateVisitor, Visitor},
};

/// Run full schema validation in a staged, deterministic order.
pub fn validate(root: &SchemaNode) -> Result<(), ErrorTree> {
    // Phase 1: validate each node (structural + local invariants).
    let mut errors = validate_nodes(root);

    // Phase 2: enforce tree-wide invariants.
    validate_depth(root, &mut errors);

    errors.result()
}

/// Validate a top-level object schema without re-wrapping it.
pub fn validate_object(root: &ObjectNode) -> Result<(), ErrorTree> {
    let mut visitor = ValidateVisitor::new();

    // Root invariants live at the empty route.
    if let Err(errs) = root.validate() {
        visitor.errors.merge_at("", errs);
    }
    let mut max_depth = 0;
    for field in &root.shape {
        visitor.path.push(Segment::Field(field.ident.clone()));
        field.value.accept(&mut visitor);
        visitor.path.pop();

        max_depth = max_depth.max(1 + depth_of(&field.value));
    }

    let mut errors = visitor.errors;
    check_depth(max_depth, &mut errors);

    errors.result()
}

// Validate all nodes via a visitor to retain route-aware error aggregation.
fn validate_nodes(root: &SchemaNode) -> ErrorTree {
    let mut visitor = ValidateVisitor::new();
    root.accept(&mut visitor);

    visitor.errors
}

fn validate_depth(root: &SchemaNode, errors: &mut ErrorTree) {
    check_depth(depth_of(root), errors);
}

fn check_depth(depth: usize, errors: &mut ErrorTree) {
    if depth > MAX_SCHEMA_DEPTH {
        err!(
            errors,
            "schema nesting depth {depth} exceeds maximum {MAX_SCHEMA_DEPTH}"
        );
    }
}

fn depth_of(root: &SchemaNode) -> usize {
    let mut visitor = DepthVisitor::default();
    root.accept(&mut visitor);

    visitor.max
}

///
/// DepthVisitor
///

#[derive(Default)]
struct DepthVisitor {
    current: usize,
    max: usize,
}

impl Visitor for DepthVisitor {
    fn push(&mut self, _seg: Segment) {
        self.current += 1;
        self.max = self.max.max(self.current);
    }

    fn pop(&mut self) {
        self.current -= 1;
    }
}

///
/// TESTS
///
