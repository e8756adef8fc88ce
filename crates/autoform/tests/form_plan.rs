//! End-to-end planning scenarios.

use autoform::prelude::*;
use serde_json::json;

fn widget(plan: &FormPlan, name: &str) -> WidgetPlan {
    plan.get(name).unwrap().plan.clone()
}

#[test]
fn create_user_form() {
    let schema = ObjectNode::new()
        .field("email", StringNode::new().min(1).email())
        .field("name", StringNode::new().min(1));

    let plan = plan_form(&schema, &Overrides::new()).unwrap();

    assert_eq!(
        widget(&plan, "email"),
        WidgetPlan::Input {
            widget: InputWidget::Email,
            required: true
        }
    );
    assert_eq!(
        widget(&plan, "name"),
        WidgetPlan::Input {
            widget: InputWidget::Text,
            required: true
        }
    );
}

#[test]
fn demo_form_with_nested_name_and_flavor() {
    let flavors = [
        "Chocolate",
        "Vanilla",
        "Strawberry",
        "Mint Chip",
        "Rocky Road",
    ];
    let schema = ObjectNode::new()
        .field("email", StringNode::new().min(1).email())
        .field(
            "name",
            ObjectNode::new()
                .field("first", StringNode::new().min(1))
                .field("last", StringNode::new().min(1)),
        )
        .field("ice_cream_flavor", EnumNode::new(flavors));

    let plan = plan_form(&schema, &Overrides::new()).unwrap();

    let WidgetPlan::Fieldset { fields } = widget(&plan, "name") else {
        panic!("expected a fieldset for 'name'");
    };
    let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["name.first", "name.last"]);

    assert_eq!(
        widget(&plan, "ice_cream_flavor"),
        WidgetPlan::Input {
            widget: InputWidget::RadioGroup {
                values: flavors.iter().map(ToString::to_string).collect()
            },
            required: true,
        }
    );
}

#[test]
fn optional_and_nullable_wrappers_clear_required() {
    let schema = ObjectNode::new()
        .field("age", SchemaNode::number().optional())
        .field("score", SchemaNode::number().or(SchemaNode::nan()))
        .field("birthday", SchemaNode::date().nullable())
        .field(
            "flavor",
            SchemaNode::from(EnumNode::new(["a", "b"])).nullable(),
        );

    let plan = plan_form(&schema, &Overrides::new()).unwrap();

    for name in ["age", "score", "birthday", "flavor"] {
        assert_eq!(
            widget(&plan, name).required(),
            Some(false),
            "field {name} should be optional"
        );
    }
}

#[test]
fn checkbox_group_from_enum_array() {
    let schema = ObjectNode::new()
        .field("toppings", SchemaNode::from(EnumNode::new(["nuts", "fudge"])).array())
        .field(
            "extras",
            SchemaNode::from(EnumNode::new(["whip", "cherry"]))
                .array()
                .or(SchemaNode::literal("none")),
        );

    let plan = plan_form(&schema, &Overrides::new()).unwrap();

    assert_eq!(
        widget(&plan, "toppings"),
        WidgetPlan::Input {
            widget: InputWidget::CheckboxGroup {
                values: vec!["nuts".to_string(), "fudge".to_string()]
            },
            required: true,
        }
    );
    // the literal branch is a sentinel for "nothing selected"
    assert_eq!(widget(&plan, "extras").required(), Some(false));
}

#[test]
fn password_override_bypasses_schema() {
    let schema = ObjectNode::new()
        .field("username", StringNode::new().min(1))
        .field("password", StringNode::new().min(8));

    let plan = FormBuilder::new()
        .override_field("password", "password")
        .build(&schema)
        .unwrap();

    assert_eq!(
        widget(&plan, "password"),
        WidgetPlan::Html {
            input_type: "password".to_string()
        }
    );
}

#[test]
fn override_wins_over_unsupported_shape() {
    // Array<String> has no schema-derived widget, but the override
    // means the resolver never sees it.
    let schema = ObjectNode::new().field("tags", SchemaNode::string().array());
    let mut overrides = Overrides::new();
    overrides.insert("tags".to_string(), Override::from("select"));

    let plan = plan_form(&schema, &overrides).unwrap();
    assert_eq!(
        widget(&plan, "tags"),
        WidgetPlan::Html {
            input_type: "select".to_string()
        }
    );
}

#[test]
fn missing_override_target_fails() {
    let schema = ObjectNode::new().field("email", StringNode::new().email());
    let mut overrides = Overrides::new();
    overrides.insert("emial".to_string(), Override::from("text"));

    let err = plan_form(&schema, &overrides).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Form);
    assert!(err.message.contains("emial"));
}

#[test]
fn invalid_schema_fails_before_planning() {
    let schema = ObjectNode::new().field("flavor", EnumNode::new(Vec::<String>::new()));

    let err = plan_form(&schema, &Overrides::new()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Schema);
    assert!(err.message.contains("flavor"));
}

#[test]
fn unsupported_shape_names_the_field_and_shape() {
    let schema = ObjectNode::new().field("flag", SchemaNode::literal(true));

    let err = plan_form(&schema, &Overrides::new()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Resolve);
    assert!(err.message.contains("flag"));
    assert!(err.message.contains("Literal"));
}

#[test]
fn fieldset_nesting_is_bounded_below_schema_nesting() {
    let mut node = ObjectNode::new().field("leaf", SchemaNode::string());
    for _ in 0..=autoform::plan::MAX_FIELDSET_DEPTH {
        node = ObjectNode::new().field("nest", node);
    }

    // structurally sound, so validation accepts it
    assert!(autoform::schema::validate::validate_object(&node).is_ok());

    // but the resolver bounds rendered fieldset nesting
    let err = plan_form(&node, &Overrides::new()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Resolve);
    assert!(err.message.contains("fieldset levels"));
}

#[test]
fn plan_feeds_blueprint() {
    let schema = ObjectNode::new()
        .field("email", StringNode::new().email())
        .field("render_me", SchemaNode::date());

    let render = RenderFn::new(|props| json!({ "component": "calendar", "for": props.name }));
    let plan = FormBuilder::new()
        .override_field("render_me", render)
        .build(&schema)
        .unwrap();

    let blueprint = form_blueprint(&plan, &RenderOptions::default());
    assert_eq!(blueprint["fields"][0]["widget"]["type"], "email");
    assert_eq!(blueprint["fields"][1]["widget"]["component"], "calendar");
}
