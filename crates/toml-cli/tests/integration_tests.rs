//! End-to-end tests for the `toml` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const BODY: &str = r#"[a]
b = "c"
[x]
y = "z""#;

const CARGO: &str = r#"[package]
name = "toml-cli"
version = "0.2.4"

[[bin]]
name = "toml"
path = "src/main.rs"
"#;

const FORMULA_FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../Formula/toml.rb");

/// A scratch directory holding `test.toml`.
struct Fixture {
    dir: TempDir,
    file: PathBuf,
}

impl Fixture {
    fn new(contents: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("test.toml");
        fs::write(&file, contents).unwrap();
        Self { dir, file }
    }

    fn file(&self) -> &str {
        self.file.to_str().unwrap()
    }

    fn read(&self) -> String {
        fs::read_to_string(&self.file).unwrap()
    }

    fn entries(&self) -> Vec<PathBuf> {
        let mut entries: Vec<_> = fs::read_dir(self.dir.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        entries.sort();
        entries
    }

    fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = cargo::cargo_bin_cmd!("toml");
        cmd.current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.dir.path().join("config.toml"));
        fs::write(self.dir.path().join("config.toml"), "").unwrap();
        cmd
    }
}

fn toml_cmd() -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("toml");
    cmd.env_remove("RUST_LOG");
    cmd
}

// ── usage ─────────────────────────────────────────────────────────────────────

#[test]
fn help_if_no_args() {
    toml_cmd()
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("-h, --help"));
}

#[test]
fn formula_help_describes_template_syntax() {
    toml_cmd()
        .args(["formula", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("placeholders"))
        .stdout(predicate::str::contains("{%"))
        .stdout(predicate::str::contains("default(...)"));
}

#[test]
fn help_flag_succeeds() {
    toml_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("formula"));
}

#[test]
fn version_flag() {
    toml_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── get ───────────────────────────────────────────────────────────────────────

#[test]
fn get_string() {
    let f = Fixture::new(BODY);
    f.cmd()
        .args(["get", f.file(), "x.y"])
        .assert()
        .success()
        .stdout("\"z\"\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn get_string_raw() {
    let f = Fixture::new(BODY);
    f.cmd()
        .args(["get", "--raw", f.file(), "x.y"])
        .assert()
        .success()
        .stdout("z\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn get_table_as_json() {
    let f = Fixture::new(CARGO);
    f.cmd()
        .args(["get", f.file(), "bin"])
        .assert()
        .success()
        .stdout("[{\"name\":\"toml\",\"path\":\"src/main.rs\"}]\n");
}

#[test]
fn get_output_toml() {
    let f = Fixture::new(BODY);
    f.cmd()
        .args(["get", "--output-toml", f.file(), "x.y"])
        .assert()
        .success()
        .stdout("[x]\ny = \"z\"\n");
}

#[test]
fn get_missing() {
    let f = Fixture::new(BODY);
    f.cmd()
        .args(["get", f.file(), "x.z"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("x.z"));
}

#[test]
fn get_missing_file() {
    let f = Fixture::new(BODY);
    f.cmd()
        .args(["get", "does-not-exist.toml", "a"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("does-not-exist.toml"));
}

#[test]
fn get_bad_query() {
    let f = Fixture::new(BODY);
    f.cmd()
        .args(["get", f.file(), "a[b]"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

// ── set ───────────────────────────────────────────────────────────────────────

#[test]
fn set_string_existing() {
    let f = Fixture::new(BODY);
    f.cmd()
        .args(["set", f.file(), "x.y", "new"])
        .assert()
        .success()
        .stdout("[a]\nb = \"c\"\n[x]\ny = \"new\"\n")
        .stderr(predicate::str::is_empty());
    assert_eq!(f.read(), BODY);
}

#[test]
fn set_detects_integers() {
    let f = Fixture::new(BODY);
    f.cmd()
        .args(["set", f.file(), "x.z", "123"])
        .assert()
        .success()
        .stdout("[a]\nb = \"c\"\n[x]\ny = \"z\"\nz = 123\n");
}

#[test]
fn set_forced_string() {
    let f = Fixture::new(BODY);
    f.cmd()
        .args(["set", f.file(), "x.z", "123", "--type", "string"])
        .assert()
        .success()
        .stdout("[a]\nb = \"c\"\n[x]\ny = \"z\"\nz = \"123\"\n");
}

#[test]
fn set_invalid_typed_value() {
    let f = Fixture::new(BODY);
    f.cmd()
        .args(["set", f.file(), "x.z", "abc", "--type", "integer"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--type string"));
}

#[test]
fn set_overwrite_prints_nothing() {
    let f = Fixture::new(CARGO);
    f.cmd()
        .args(["set", f.file(), "package.version", "0.3.0", "--overwrite"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert_eq!(f.read(), CARGO.replace("0.2.4", "0.3.0"));
}

#[test]
fn set_overwrite_with_backup() {
    let f = Fixture::new(CARGO);
    f.cmd()
        .args(["set", f.file(), "bin[0].name", "tq", "--overwrite", "--backup"])
        .assert()
        .success();

    let backups: Vec<_> = f
        .entries()
        .into_iter()
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("test.toml."))
        })
        .collect();
    assert_eq!(backups.len(), 1);
    assert_eq!(fs::read_to_string(&backups[0]).unwrap(), CARGO);
    assert!(f.read().contains("name = \"tq\""));
}

#[test]
fn set_index_out_of_bounds() {
    let f = Fixture::new(CARGO);
    f.cmd()
        .args(["set", f.file(), "bin[3].name", "x"])
        .assert()
        .code(2);
}

// ── check ─────────────────────────────────────────────────────────────────────

#[test]
fn check_existing_key() {
    let f = Fixture::new(BODY);
    f.cmd()
        .args(["check", f.file(), "x.y"])
        .assert()
        .success()
        .stdout("true\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn check_missing_key() {
    let f = Fixture::new(BODY);
    f.cmd()
        .args(["check", f.file(), "x.z"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("false\n");
}

#[test]
fn check_unreadable_file_is_false() {
    let f = Fixture::new(BODY);
    f.cmd()
        .args(["check", "missing.toml", "x"])
        .assert()
        .code(1)
        .stderr("false\n");
}

// ── formula ───────────────────────────────────────────────────────────────────

const DESCRIPTION: &str = "A command line utility written in Rust download, inspect and compare Substrate based chains WASM Runtimes";
const SHA256: &str = "f3cbf7c4c8c8d0f346080815cc8fe756b1d43977b51bbe7db81eec6b37d2f088";

fn release_flags(version: &str) -> Vec<String> {
    [
        "--name",
        "Toml",
        "--description",
        DESCRIPTION,
        "--site",
        "https://github.com/chevdor",
        "--repo",
        "toml-cli",
        "--release",
        version,
        "--sha256",
        SHA256,
    ]
    .map(String::from)
    .to_vec()
}

#[test]
fn formula_to_stdout_matches_checked_in_file() {
    let f = Fixture::new(BODY);
    let expected = fs::read_to_string(FORMULA_FIXTURE).unwrap();
    f.cmd()
        .arg("formula")
        .args(release_flags("0.2.1"))
        .assert()
        .success()
        .stdout(expected)
        .stderr(predicate::str::is_empty());
}

#[test]
fn formula_missing_field() {
    let f = Fixture::new(BODY);
    f.cmd()
        .args(["formula", "--name", "Toml"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Required field missing"));
}

#[test]
fn formula_write_and_force() {
    let f = Fixture::new(BODY);
    let target = f.dir.path().join("Formula").join("toml.rb");

    f.cmd()
        .arg("formula")
        .args(release_flags("0.2.1"))
        .arg("--write")
        .assert()
        .success()
        .stdout(predicate::str::contains("Formula"));
    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        fs::read_to_string(FORMULA_FIXTURE).unwrap()
    );

    f.cmd()
        .arg("formula")
        .args(release_flags("0.2.1"))
        .arg("--write")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    f.cmd()
        .arg("formula")
        .args(release_flags("0.2.4"))
        .args(["--write", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&target).unwrap().contains("version \"0.2.4\""));
}

#[test]
fn formula_vars_file_and_output() {
    let f = Fixture::new(BODY);
    let vars = f.dir.path().join("release.json");
    fs::write(
        &vars,
        r#"{
  "NAME": "Toml",
  "DESCRIPTION": "d",
  "SITE": "https://github.com/chevdor",
  "REPO": "toml-cli",
  "VERSION": "0.2.4",
  "SHA256": "abc",
  "BIN": "tq"
}"#,
    )
    .unwrap();
    let out = f.dir.path().join("out.rb");

    f.cmd()
        .arg("formula")
        .arg("--vars")
        .arg(&vars)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("bin.install \"tq\""));
    assert!(text.contains("/v0.2.4/tq_macos_v0.2.4.tar.gz"));
}

#[test]
fn formula_json_record() {
    let f = Fixture::new(BODY);
    let assert = f
        .cmd()
        .args(["--output-format", "json", "formula"])
        .args(release_flags("0.2.1"))
        .assert()
        .success();

    let record: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(record["binary_name"], "toml");
    assert_eq!(
        record["download_url"],
        "https://github.com/chevdor/toml-cli/releases/download/v0.2.1/toml_macos_v0.2.1.tar.gz"
    );
}

#[test]
fn formula_custom_template() {
    let f = Fixture::new(BODY);
    let template = f.dir.path().join("tpl.rb");
    fs::write(&template, "{{ BIN }} {{ URL }}\n").unwrap();

    f.cmd()
        .arg("formula")
        .args(release_flags("0.2.1"))
        .arg("--template")
        .arg(&template)
        .assert()
        .success()
        .stdout(
            "toml https://github.com/chevdor/toml-cli/releases/download/v0.2.1/toml_macos_v0.2.1.tar.gz\n",
        );
}

#[test]
fn formula_site_and_repo_from_config() {
    let f = Fixture::new(BODY);
    let config = f.dir.path().join("custom.toml");
    fs::write(
        &config,
        "[formula]\nsite = \"https://example.org\"\nrepo = \"tool\"\n",
    )
    .unwrap();

    toml_cmd()
        .current_dir(f.dir.path())
        .arg("--config")
        .arg(&config)
        .args([
            "formula", "--name", "Tool", "--description", "d", "--release", "1.0.0",
            "--sha256", "abc",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "url \"https://example.org/tool/releases/download/v1.0.0/tool_macos_v1.0.0.tar.gz\"",
        ));
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn config_get_reads_file_and_env() {
    let f = Fixture::new(BODY);
    fs::write(f.dir.path().join("custom.toml"), "[formula]\nrepo = \"file-repo\"\n").unwrap();

    toml_cmd()
        .arg("--config")
        .arg(f.dir.path().join("custom.toml"))
        .env("TOML_CLI__FORMULA__SITE", "https://env")
        .args(["config", "get", "formula.site"])
        .assert()
        .success()
        .stdout("https://env\n");

    toml_cmd()
        .arg("--config")
        .arg(f.dir.path().join("custom.toml"))
        .args(["config", "get", "formula.repo"])
        .assert()
        .success()
        .stdout("file-repo\n");
}

#[test]
fn config_missing_explicit_file() {
    toml_cmd()
        .args(["--config", "/definitely/not/here.toml", "config", "path"])
        .assert()
        .code(4);
}

#[test]
fn completions_bash() {
    toml_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("toml"));
}
