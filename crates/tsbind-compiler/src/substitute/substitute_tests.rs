use indexmap::IndexMap;

use tsbind_core::{
    FunctionType, NamedType, Parameter, Property, Scope, ScopeKind, Type, TypeLiteral,
    parse_type_expr,
};

use super::{TypeMapper, is_matching, type_of_placeholder};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

fn mapper(rules: &[(&str, &str)]) -> TypeMapper {
    let table: IndexMap<String, String> = rules
        .iter()
        .map(|(p, t)| (p.to_string(), t.to_string()))
        .collect();
    TypeMapper::new(&table, &mut Diagnostics::new()).unwrap()
}

fn named(expr: &str) -> Type {
    Type::Named(parse_type_expr(expr))
}

#[test]
fn array_pattern_renders_list() {
    let mapper = mapper(&[("Array<#1>", "List<#1>")]);
    let scope = Scope::root(ScopeKind::Class, "Mesh");

    insta::assert_snapshot!(mapper.render(&named("Array<Texture>"), &scope), @"List<Texture>");
}

#[test]
fn placeholder_unwraps_and_inner_rule_applies() {
    let mapper = mapper(&[("Nullable<#1>", "#1"), ("number", "num")]);
    let scope = Scope::root(ScopeKind::Class, "Mesh");

    insta::assert_snapshot!(mapper.render(&named("Nullable<number>"), &scope), @"num");
}

#[test]
fn array_flag_survives_rewrite() {
    let mapper = mapper(&[("Nullable<#1>", "#1"), ("number", "num")]);
    let scope = Scope::root(ScopeKind::Class, "Mesh");

    insta::assert_snapshot!(mapper.render(&named("Nullable<number>[]"), &scope), @"List<num>");
}

#[test]
fn first_matching_rule_wins() {
    let mapper = mapper(&[("Map<string, #1>", "JsMap<#1>"), ("Map<#1, #2>", "Object")]);
    let scope = Scope::root(ScopeKind::Class, "A");

    insta::assert_snapshot!(mapper.render(&named("Map<string, Bone>"), &scope), @"JsMap<Bone>");
    insta::assert_snapshot!(mapper.render(&named("Map<int, Bone>"), &scope), @"Object");
}

#[test]
fn arity_mismatch_is_no_match() {
    let pattern = parse_type_expr("Array<#1>");

    assert!(!is_matching(&parse_type_expr("Array"), &pattern));
    assert!(!is_matching(&parse_type_expr("Array<A, B>"), &pattern));
    assert!(is_matching(&parse_type_expr("Array<A>[]"), &pattern));
}

#[test]
fn placeholder_on_candidate_side_matches() {
    assert!(is_matching(
        &parse_type_expr("#9"),
        &parse_type_expr("Array<X>")
    ));
}

#[test]
fn placeholder_binding_is_positional() {
    let candidate = named("Map<Key, List<Value>>");
    let pattern = parse_type_expr("Map<#1, List<#2>>");

    assert_eq!(
        type_of_placeholder(&candidate, &pattern, "#2"),
        Some(&named("Value"))
    );
    assert_eq!(
        type_of_placeholder(&candidate, &pattern, "#1"),
        Some(&named("Key"))
    );
    assert_eq!(type_of_placeholder(&candidate, &pattern, "#3"), None);
}

#[test]
fn no_match_leaves_type_untouched() {
    let mapper = mapper(&[("Array<#1>", "List<#1>")]);
    let scope = Scope::root(ScopeKind::Class, "A");
    let ty = named("Vector3[]");

    assert_eq!(mapper.replace(&ty, &scope), ty);
    insta::assert_snapshot!(mapper.render(&ty, &scope), @"List<Vector3>");
}

#[test]
fn unknown_placeholder_reported_and_kept() {
    let mut table = IndexMap::new();
    table.insert("Array<#1>".to_string(), "List<#2>".to_string());
    let mut diagnostics = Diagnostics::new();

    let mapper = TypeMapper::new(&table, &mut diagnostics).unwrap();
    let scope = Scope::root(ScopeKind::Class, "A");

    assert_eq!(diagnostics.kinds(), vec![DiagnosticKind::UnresolvedPlaceholder]);
    insta::assert_snapshot!(mapper.render(&named("Array<B>"), &scope), @"List<#2>");
}

#[test]
fn rewritten_type_is_final() {
    let scope = Scope::root(ScopeKind::Class, "A");

    let same = mapper(&[("Array<#1>", "Array<#1>")]);
    insta::assert_snapshot!(same.render(&named("Array<B>"), &scope), @"Array<B>");

    let chained = mapper(&[("Vector", "Point"), ("Point", "Coords")]);
    insta::assert_snapshot!(chained.render(&named("Vector"), &scope), @"Point");
    insta::assert_snapshot!(chained.render(&named("Point"), &scope), @"Coords");
}

#[test]
fn placeholder_argument_of_rewrite_stays_verbatim() {
    let mapper = mapper(&[("Array<#1>", "List<#1>"), ("Map<#1>", "JsMap<#2>")]);
    let scope = Scope::root(ScopeKind::Class, "A");

    insta::assert_snapshot!(mapper.render(&named("Map<Array<B>>"), &scope), @"JsMap<#2>");
}

#[test]
fn catch_all_pattern_is_ignored() {
    let mapper = mapper(&[("#1", "dynamic"), ("number", "num")]);
    assert_eq!(mapper.len(), 1);
}

#[test]
fn self_type_renders_enclosing_class() {
    let mapper = TypeMapper::identity().unwrap();
    let class = Scope::root(ScopeKind::Class, "Mesh");
    let method = class.child(ScopeKind::Method, "clone");
    let result = method.result();

    insta::assert_snapshot!(mapper.render(&named("this"), &result), @"Mesh");
}

#[test]
fn function_type_rendering() {
    let mapper = mapper(&[("number", "num"), ("void", "void")]);
    let scope = Scope::root(ScopeKind::Class, "Scene");
    let ty = Type::Function(FunctionType::new(
        Type::named("void"),
        vec![
            Parameter::new("delta", Type::named("number")),
            Parameter::new("scene", Type::named("Scene")),
        ],
    ));

    insta::assert_snapshot!(mapper.render(&ty, &scope), @"void Function(num delta, Scene scene)");
}

#[test]
fn literal_renders_scope_name() {
    let mapper = TypeMapper::identity().unwrap();
    let class = Scope::root(ScopeKind::Class, "engine");
    let method = class.child(ScopeKind::Method, "getCaps");
    let result = method.result();
    let ty = Type::Literal(TypeLiteral {
        properties: vec![Property::new("maxSize", Type::named("number"))],
        call_signatures: vec![],
    });

    insta::assert_snapshot!(mapper.render(&ty, &result), @"EngineGetCapsResult");
}

#[test]
fn literal_bound_to_placeholder_uses_scope_name() {
    let mapper = mapper(&[("Nullable<#1>", "#1")]);
    let class = Scope::root(ScopeKind::Class, "Mesh");
    let method = class.child(ScopeKind::Method, "setOptions");
    let param = method.child(ScopeKind::Parameter, "options");
    let ty = Type::Named(NamedType::new("Nullable").with_args([Type::Literal(TypeLiteral::default())]));

    insta::assert_snapshot!(mapper.render(&ty, &param), @"MeshSetOptionsOptions");
}
