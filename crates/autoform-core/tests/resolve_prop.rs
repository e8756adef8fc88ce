//! Property tests over resolver totality and stability.

use autoform_core::prelude::*;
use autoform_schema::node::{EnumNode, ObjectNode, SchemaNode, StringNode};
use proptest::prelude::*;

// Idents the object strategy draws from; distinct so shapes never collide.
const IDENTS: &[&str] = &["alpha", "beta", "gamma", "delta", "epsilon"];

fn enum_values() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}", 1..5).prop_map(|mut values| {
        values.sort();
        values.dedup();
        values
    })
}

/// Every shape the resolver promises to classify.
fn supported_leaf() -> impl Strategy<Value = SchemaNode> {
    prop_oneof![
        Just(SchemaNode::string()),
        Just(SchemaNode::from(StringNode::new().email())),
        Just(SchemaNode::from(StringNode::new().url())),
        Just(SchemaNode::date()),
        Just(SchemaNode::date().nullable()),
        Just(SchemaNode::number()),
        Just(SchemaNode::number().optional()),
        Just(SchemaNode::number().or(SchemaNode::nan())),
        Just(SchemaNode::number().optional().or(SchemaNode::nan())),
        enum_values().prop_map(|values| SchemaNode::from(EnumNode::new(values))),
        enum_values().prop_map(|values| SchemaNode::from(EnumNode::new(values)).nullable()),
        enum_values().prop_map(|values| SchemaNode::from(EnumNode::new(values)).array()),
        enum_values().prop_map(|values| {
            SchemaNode::from(EnumNode::new(values))
                .array()
                .or(SchemaNode::literal("none"))
        }),
    ]
}

fn supported_node() -> impl Strategy<Value = SchemaNode> {
    supported_leaf().prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec(inner, 1..4).prop_map(|children| {
            let mut object = ObjectNode::new();
            for (i, child) in children.into_iter().enumerate() {
                object = object.field(IDENTS[i], child);
            }
            SchemaNode::from(object)
        })
    })
}

proptest! {
    // Every supported shape resolves, at any field name.
    #[test]
    fn resolver_is_total_over_supported_shapes(
        node in supported_node(),
        name in "[a-z][a-z_]{0,12}",
    ) {
        prop_assert!(resolve(&node, &name).is_ok());
    }

    // Same inputs, same plan; resolution never consults hidden state.
    #[test]
    fn resolver_is_deterministic(node in supported_node()) {
        let first = resolve(&node, "field");
        let second = resolve(&node, "field");
        prop_assert_eq!(first, second);
    }

    // Leaf plans always carry a required flag, fieldsets never do.
    #[test]
    fn required_flag_is_leaf_only(node in supported_node()) {
        let plan = resolve(&node, "field").unwrap();

        fn check(plan: &WidgetPlan) {
            match plan {
                WidgetPlan::Fieldset { fields } => {
                    assert_eq!(plan.required(), None);
                    for field in fields {
                        check(&field.plan);
                    }
                }
                _ => assert!(plan.required().is_some()),
            }
        }
        check(&plan);
    }

    // Nested field names are dot-joined under the parent name.
    #[test]
    fn fieldset_children_are_dot_prefixed(node in supported_node()) {
        let plan = resolve(&node, "root").unwrap();

        fn check(name: &str, plan: &WidgetPlan) {
            if let WidgetPlan::Fieldset { fields } = plan {
                for field in fields {
                    assert!(field.name.starts_with(&format!("{name}.")));
                    check(&field.name, &field.plan);
                }
            }
        }
        check("root", &plan);
    }
}
