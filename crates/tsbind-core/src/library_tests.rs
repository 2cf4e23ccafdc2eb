use crate::{Class, Interface, Library, Property, Type};

fn library() -> Library {
    let mut library = Library::new();
    library.classes.push(Class::new("Node"));
    library.classes.push(Class::new("Mesh"));
    let mut animatable = Interface::new("IAnimatable");
    animatable
        .properties
        .push(Property::new("animations", Type::named("Animation")));
    library.interfaces.push(animatable);
    library
}

#[test]
fn lookups_by_name() {
    let library = library();

    assert_eq!(library.class_by_name("Mesh").map(|c| c.name.as_str()), Some("Mesh"));
    assert_eq!(library.class_index("Mesh"), Some(1));
    assert!(library.class_by_name("Light").is_none());
    assert!(library.interface_by_name("IAnimatable").is_some());
    assert!(library.interface_by_name("Node").is_none());
}

#[test]
fn extend_keeps_declaration_order() {
    let mut first = library();
    let mut second = Library::new();
    second.classes.push(Class::new("Light"));
    first.extend(second);

    let names: Vec<_> = first.classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Node", "Mesh", "Light"]);
}

#[test]
fn serializes_types_with_kind_tag() {
    let json = serde_json::to_value(Type::named("Vector3")).unwrap();

    assert_eq!(json["kind"], "named");
    assert_eq!(json["name"], "Vector3");
    assert_eq!(json["is_array"], false);
}
