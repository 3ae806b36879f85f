//! Render an outline, index the text with the verse indexer, assemble it again and compare

use decl::decl::assembling::{assemble, assemble_with};
use decl::decl::indexing::{SourceIndexer, VerseIndexer};
use decl::decl::model::{
    Accessibility, AnnotationLookup, ArgumentDescription, CallableKind, EnumCase,
    EnumDescription, ExtensibleDescription, ExtensibleKind, FunctionDescription, Outline,
    PropertyDescription, PropertyKind, TypeDescription as T,
};
use decl::decl::verse::ToVerse;
use rstest::rstest;

fn reparse(outline: &Outline) -> Outline {
    let text = outline.to_verse();
    let assembly = assemble_with("Model.swift", &text, &VerseIndexer::new()).unwrap();
    assert!(assembly.is_clean(), "failures: {:?}", assembly.failures);
    assembly.outline.as_template()
}

fn single(extensible: ExtensibleDescription) -> Outline {
    let mut outline = Outline::new();
    outline.push_extensible(extensible);
    outline
}

fn person() -> ExtensibleDescription {
    ExtensibleDescription::template(ExtensibleKind::Class, "Person")
        .with_comment("Person record\n\n@model\n@realm DBPerson")
        .with_accessibility(Accessibility::Public)
        .with_inherited_types(["Codable", "Equatable"])
        .with_properties(vec![
            PropertyDescription::template("id", T::Integer).constant(),
            PropertyDescription::template("name", T::optional(T::String))
                .with_comment("@key full_name")
                .with_default("nil"),
            PropertyDescription::template("tags", T::map(T::String, T::array(T::Integer)))
                .with_accessibility(Accessibility::Private)
                .with_default("[:]"),
            PropertyDescription::template(
                "pending",
                T::optional(T::generic("ServiceCall", vec![T::object("Person")])),
            ),
            PropertyDescription::template("shared", T::object("Person"))
                .with_kind(PropertyKind::ClassLevel)
                .with_body("Person(id: 0)"),
        ])
        .with_methods(vec![
            FunctionDescription::template("init(id:)", CallableKind::Initializer)
                .unwrap()
                .with_arguments(vec![ArgumentDescription::template("id", "id", T::Integer)])
                .with_body("self.id = id"),
            FunctionDescription::template("greet(with:times:)", CallableKind::Instance)
                .unwrap()
                .with_comment("Says hello")
                .with_arguments(vec![
                    ArgumentDescription::template("with", "greeting", T::String)
                        .with_default("\"Hi, there\"")
                        .with_comment("@param greeting"),
                    ArgumentDescription::template("times", "times", T::Integer).with_default("1"),
                ])
                .with_return_type(T::array(T::String))
                .with_body("let line = greeting // {\n\nreturn [line]"),
            FunctionDescription::template("make()", CallableKind::Static)
                .unwrap()
                .with_return_type(T::object("Person"))
                .with_body(""),
        ])
}

fn service() -> ExtensibleDescription {
    ExtensibleDescription::template(ExtensibleKind::Protocol, "PersonService").with_methods(vec![
        FunctionDescription::template("get(personId:fullPayload:)", CallableKind::Instance)
            .unwrap()
            .with_accessibility(Accessibility::Public)
            .with_arguments(vec![
                ArgumentDescription::template("personId", "id", T::Integer)
                    .with_comment("@url person_id"),
                ArgumentDescription::template("fullPayload", "fullPayload", T::Integer)
                    .with_default("0")
                    .with_comment("@query full_payload"),
            ])
            .with_return_type(T::generic("ServiceCall", vec![T::object("Person")])),
    ])
}

fn kind() -> EnumDescription {
    EnumDescription::template("Kind")
        .with_comment("@persisted")
        .with_inherited_types(["String"])
        .with_cases(vec![
            EnumCase::template("first").with_comment("First kind").with_default("\"a\""),
            EnumCase::template("second"),
        ])
        .with_properties(vec![PropertyDescription::template("all", T::array(T::object("Kind")))
            .with_kind(PropertyKind::Static)
            .constant()
            .with_default("[]")])
}

fn handlers() -> ExtensibleDescription {
    ExtensibleDescription::template(ExtensibleKind::Struct, "Handlers").with_properties(vec![
        PropertyDescription::template("h", T::object("Handler")).with_default("{ }"),
        PropertyDescription::template("check", T::object("Check"))
            .constant()
            .with_default("{ value in value > 0 }"),
        PropertyDescription::template("count", T::Integer).with_body("0"),
    ])
}

#[rstest]
#[case::class(single(person()))]
#[case::protocol(single(service()))]
#[case::empty_struct(single(ExtensibleDescription::template(ExtensibleKind::Struct, "Empty")))]
#[case::closure_defaults(single(handlers()))]
#[case::doc_trailing_whitespace(single(
    ExtensibleDescription::template(ExtensibleKind::Struct, "Padded").with_comment("Doc  \n\nEnd ")
))]
fn test_container_round_trip(#[case] outline: Outline) {
    assert_eq!(reparse(&outline), outline);
}

#[test]
fn test_whole_outline_round_trip() {
    let mut outline = single(person());
    outline.push_extensible(service());
    outline.enums.push(kind());
    outline.functions.push(
        FunctionDescription::template("log(_:)", CallableKind::Free)
            .unwrap()
            .with_arguments(vec![ArgumentDescription::template("_", "message", T::String)])
            .with_return_type(T::Void)
            .with_body("print(message)"),
    );

    let reparsed = reparse(&outline);
    assert_eq!(reparsed, outline);
    assert_eq!(reparsed.to_verse(), outline.to_verse());
}

#[test]
fn test_reparsed_annotations_are_available() {
    let reparsed = reparse(&single(person()));
    let class = &reparsed.classes[0];
    assert!(class.annotations.has("model"));
    assert_eq!(
        class.annotations.find("realm").and_then(|a| a.value.as_deref()),
        Some("DBPerson")
    );
    assert!(class.properties[1].annotations.has("key"));
}

#[test]
fn test_positions_point_at_declarations() {
    let text = single(service()).to_verse();
    let assembly = assemble_with("Api.swift", &text, &VerseIndexer::new()).unwrap();

    let protocol = &assembly.outline.protocols[0];
    assert_eq!(protocol.declaration.path, "Api.swift");
    assert_eq!(protocol.declaration.line, Some(1));
    assert_eq!(protocol.declaration.column, Some(1));

    let method = &protocol.methods[0];
    assert_eq!(method.declaration.line, Some(2));
    assert_eq!(method.declaration.column, Some(5));
    assert!(method.declaration.raw_text.starts_with("public func get("));
}

#[test]
fn test_unknown_text_is_ignored() {
    let text = "import Foundation\n\nlet global = 1\n\nstruct Point {\n    var x: Double = 0.0\n}\n";
    let records = VerseIndexer::new().index(text).unwrap();
    let assembly = assemble("Point.swift", text, &records);

    assert!(assembly.is_clean());
    assert_eq!(assembly.outline.structs.len(), 1);
    assert_eq!(
        assembly.outline.structs[0].properties[0].type_description,
        T::DoublePrecision
    );
    assert!(assembly.outline.classes.is_empty());
    assert!(assembly.outline.functions.is_empty());
}

#[test]
fn test_case_list_split_across_lines() {
    let text = "enum Flag {\n    case a = 2,\n         b\n\n    case c\n}\n";
    let records = VerseIndexer::new().index(text).unwrap();
    let assembly = assemble("Flag.swift", text, &records);

    assert!(assembly.is_clean());
    let cases: Vec<(&str, Option<&str>)> = assembly.outline.enums[0]
        .cases
        .iter()
        .map(|case| (case.name.as_str(), case.default_value.as_deref()))
        .collect();
    assert_eq!(cases, vec![("a", Some("2")), ("b", None), ("c", None)]);
    assert_eq!(assembly.outline.enums[0].cases[1].declaration.line, Some(3));
}
