use wrapgen_core::classmodel::build_model;
use wrapgen_core::emit::table::{emit_table, TableKind, TableOptions};
use wrapgen_core::emit::wrapper::{emit_wrappers, WrapperOptions, DEFAULT_CALL_TEMPLATE};
use wrapgen_core::model::FunctionRecord;

fn example_records() -> Vec<FunctionRecord> {
    vec![
        FunctionRecord::new("Foo", 0x1000, "void Run(Foo* this)", "Run"),
        FunctionRecord::new("Foo", 0x2000, "int Add(int a, int b)", "Add"),
    ]
}

/// End-to-end shape of the canonical example: one instance method and one
/// static method on class Foo.
#[test]
fn emits_expected_unit_for_example_records() {
    let model = build_model(&example_records());
    let units = emit_wrappers(&model, &WrapperOptions::default());

    assert_eq!(units.len(), 1);
    let unit = &units[0];
    assert_eq!(unit.file_name, "Foo.cs");

    assert!(unit.source.contains("public class Foo"));
    // Instance method: receiver dropped, no remaining parameters.
    assert!(unit.source.contains("public void Run()"));
    assert!(unit.source.contains("public delegate void _Run_1000();"));
    assert!(unit.source.contains("NativeCall.Invoke<_Run_1000>(0x1000)()"));
    // Static method: full parameter list, args joined in order.
    assert!(unit.source.contains("public static int Add(int a, int b)"));
    assert!(unit.source.contains("public delegate int _Add_2000(int a, int b);"));
    assert!(unit.source.contains("NativeCall.Invoke<_Add_2000>(0x2000)(a, b)"));
}

/// Buckets whose sanitized name starts with `_` or a lowercase letter never
/// reach the output, even when they own methods.
#[test]
fn filters_lowercase_and_underscore_classes() {
    let records = vec![
        FunctionRecord::new("x", 0x1000, "void Poke(lowercase* this)", "Poke"),
        FunctionRecord::new("x", 0x2000, "void Prod(_Hidden* this)", "Prod"),
        FunctionRecord::new("x", 0x3000, "void Tick(Visible* this)", "Tick"),
    ];

    let model = build_model(&records);
    let units = emit_wrappers(&model, &WrapperOptions::default());

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].file_name, "Visible.cs");
}

/// Buckets that received no functions are not rendered.
#[test]
fn skips_empty_buckets() {
    // "Result" and "Alpha" buckets exist but nothing attaches (label is
    // unknown), so nothing is emitted.
    let records = vec![FunctionRecord::new("X", 0x1000, "Result Mix(Alpha a)", "Mix")];

    let model = build_model(&records);
    let units = emit_wrappers(&model, &WrapperOptions::default());

    assert!(units.is_empty());
}

/// The call template is a caller contract: all three placeholders
/// interpolate.
#[test]
fn custom_call_template_interpolates_all_placeholders() {
    let model = build_model(&example_records());
    let options = WrapperOptions {
        namespace: None,
        call_template: "Dll.Call(\"{delegate}\", {address}, new object[] {{args}});".to_string(),
    };
    let units = emit_wrappers(&model, &options);

    assert!(units[0].source.contains("Dll.Call(\"_Add_2000\", 0x2000, new object[] {a, b});"));
}

#[test]
fn namespace_option_wraps_the_class() {
    let model = build_model(&example_records());
    let options = WrapperOptions {
        namespace: Some("Game.Natives".to_string()),
        call_template: DEFAULT_CALL_TEMPLATE.to_string(),
    };
    let units = emit_wrappers(&model, &options);

    assert!(units[0].source.starts_with("namespace Game.Natives\n{"));
    assert!(units[0].source.trim_end().ends_with('}'));
}

/// Primitive tokens map through the fixed table; the mangled std::string
/// spelling maps to `string`; unknown tokens pass through sanitized.
#[test]
fn primitive_substitution_table() {
    let records = vec![FunctionRecord::new(
        "Hud",
        0x4000,
        "basic_string_char_struct_std_char_traits_char_class_std_allocator_char_ Title(Hud* this, MyType tag)",
        "Title",
    )];

    let model = build_model(&records);
    let units = emit_wrappers(&model, &WrapperOptions::default());

    let hud = units.iter().find(|u| u.file_name == "Hud.cs").expect("Hud unit");
    assert!(hud.source.contains("public string Title(MyType tag)"));
}

#[test]
fn table_const_mode_renders_fields_with_doc_comments() {
    let options = TableOptions::new("GameFuncs");
    let unit = emit_table(&example_records(), &options);

    assert_eq!(unit.file_name, "GameFuncs.cs");
    assert!(unit.source.contains("public class GameFuncs"));
    assert!(unit.source.contains("public const long Run_1000 = 0x1000;"));
    assert!(unit.source.contains("public const long Add_2000 = 0x2000;"));
    // Raw signature in the doc comment, XML-escaped.
    assert!(unit.source.contains("/// <summary>void Run(Foo* this)</summary>"));
}

#[test]
fn table_enum_mode_renders_members() {
    let mut options = TableOptions::new("GameFuncs");
    options.kind = TableKind::Enum;
    options.signature_docs = false;

    let unit = emit_table(&example_records(), &options);

    assert!(unit.source.contains("public enum GameFuncs : long"));
    assert!(unit.source.contains("Run_1000 = 0x1000,"));
    assert!(!unit.source.contains("<summary>"));
}

#[test]
fn table_doc_comments_escape_xml_metacharacters() {
    let records =
        vec![FunctionRecord::new("L", 0x5000, "List<Foo> Get(Bar& b, char 'c')", "Get")];

    let options = TableOptions::new("T");
    let unit = emit_table(&records, &options);

    assert!(unit.source.contains("List&lt;Foo&gt; Get(Bar&amp; b, char &apos;c&apos;)"));
}
