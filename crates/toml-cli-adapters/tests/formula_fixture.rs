//! The checked-in `Formula/toml.rb` must be exactly what the built-in
//! template produces for its release.

use std::path::Path;

use toml_cli_adapters::{FieldsFormat, LocalFilesystem, TemplateRenderer, fields_loader};
use toml_cli_core::{application::FormulaService, domain::FormulaFields};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../Formula/toml.rb");

const RELEASE: &str = r#"
NAME = "Toml"
DESCRIPTION = "A command line utility written in Rust download, inspect and compare Substrate based chains WASM Runtimes"
SITE = "https://github.com/chevdor"
REPO = "toml-cli"
VERSION = "0.2.1"
SHA256 = "f3cbf7c4c8c8d0f346080815cc8fe756b1d43977b51bbe7db81eec6b37d2f088"
"#;

fn release_fields() -> FormulaFields {
    fields_loader::parse(RELEASE, FieldsFormat::Toml, Path::new("release.toml")).unwrap()
}

#[test]
fn builtin_template_regenerates_checked_in_formula() {
    let expected = std::fs::read_to_string(FIXTURE).unwrap();
    let service = FormulaService::new(
        Box::new(TemplateRenderer::builtin()),
        Box::new(LocalFilesystem::new()),
    );

    let (record, text) = service.generate(&release_fields()).unwrap();
    assert_eq!(record.file_name(), "toml.rb");
    assert_eq!(text, expected);
}

#[test]
fn written_formula_matches_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("Formula").join("toml.rb");
    let service = FormulaService::new(
        Box::new(TemplateRenderer::builtin()),
        Box::new(LocalFilesystem::new()),
    );

    service.write(&release_fields(), &out, false).unwrap();
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        std::fs::read_to_string(FIXTURE).unwrap()
    );
    assert!(service.write(&release_fields(), &out, false).is_err());
}
