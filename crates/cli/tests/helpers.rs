use std::fs;

use ghidra_wrapgen::{ensure_out_dir, write_unit};
use tempfile::tempdir;
use wrapgen_core::emit::GeneratedUnit;

#[test]
fn ensure_out_dir_creates_nested_directories() {
    let tmp = tempdir().expect("tempdir");
    let nested = tmp.path().join("a").join("b").join("c");

    let created = ensure_out_dir(nested.to_str().expect("utf8 path")).expect("ensure dir");

    assert!(created.is_dir());
    assert_eq!(created, nested);
}

#[test]
fn ensure_out_dir_accepts_existing_directory() {
    let tmp = tempdir().expect("tempdir");
    let result = ensure_out_dir(tmp.path().to_str().expect("utf8 path"));
    assert!(result.is_ok());
}

#[test]
fn write_unit_places_file_and_content() {
    let tmp = tempdir().expect("tempdir");
    let unit = GeneratedUnit {
        file_name: "Foo.cs".to_string(),
        source: "public class Foo\n{\n}\n".to_string(),
    };

    let path = write_unit(tmp.path(), &unit).expect("write unit");

    assert_eq!(path, tmp.path().join("Foo.cs"));
    assert_eq!(fs::read_to_string(&path).expect("read back"), unit.source);
}
