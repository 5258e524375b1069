//! End-to-end runs of the app generator into a temporary directory.

use rwg_codegen::{WritePolicy, generate_app, write_app};
use rwg_core::prompt::default_prompts;
use rwg_core::{Answers, ConfigStore};
use serde_json::{Map, Value, json};
use std::path::Path;
use tempfile::TempDir;

/// Answers built from every prompt's default, with `overrides` applied.
fn prompt_defaults(overrides: Value) -> Answers {
    let mut values = Map::new();
    for prompt in default_prompts("generated-app") {
        values.insert(prompt.name.to_string(), prompt.default);
    }
    if let Value::Object(extra) = overrides {
        values.extend(extra);
    }
    Answers::from_values(&values, "generated-app").unwrap()
}

fn run(answers: &Answers) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let project = generate_app(answers).unwrap();
    write_app(&project, dir.path(), WritePolicy::Abort).unwrap();
    dir
}

fn assert_files(root: &Path, files: &[&str]) {
    for file in files {
        assert!(root.join(file).is_file(), "expected {} to be generated", file);
    }
}

fn assert_file_content(root: &Path, file: &str, needle: &str) {
    let content = std::fs::read_to_string(root.join(file)).unwrap();
    assert!(content.contains(needle), "{} does not contain {:?}", file, needle);
}

const DOT_FILES: &[&str] = &[".babelrc", ".editorconfig", ".eslintrc", ".gitignore", ".yo-rc.json"];

const WEBPACK_FILES: &[&str] = &[
    "cfg/base.js",
    "cfg/defaults.js",
    "cfg/dev.js",
    "cfg/dist.js",
    "cfg/test.js",
    "server.js",
    "webpack.config.js",
];

const SOURCE_FILES: &[&str] = &[
    "src/actions/README.md",
    "src/index.js",
    "src/components/Main.js",
    "src/favicon.ico",
    "src/images/yeoman.png",
    "src/index.html",
    "src/sources/README.md",
    "src/stores/README.md",
    "src/styles/App.css",
];

const TEST_FILES: &[&str] = &[
    "karma.conf.js",
    "test/components/MainTest.js",
    "test/helpers/shallowRenderHelper.js",
    "test/loadtests.js",
];

fn assert_skeleton(root: &Path) {
    assert_files(root, DOT_FILES);
    assert_files(root, &["package.json"]);
    assert_files(root, WEBPACK_FILES);
    assert_files(root, SOURCE_FILES);
    assert_files(root, TEST_FILES);
}

#[test]
fn test_default_answers_config() {
    let dir = run(&prompt_defaults(json!({})));
    let config = ConfigStore::open(dir.path()).unwrap();

    assert_eq!(config.get("generatedWithVersion"), Some(&json!(3)));
    assert_eq!(config.get("style"), Some(&json!("css")));
    assert_eq!(config.get("postcss"), Some(&json!(false)));
}

#[test]
fn test_default_answers_create_files() {
    let dir = run(&prompt_defaults(json!({})));
    assert_skeleton(dir.path());

    let defaults = std::fs::read_to_string(dir.path().join("cfg/defaults.js")).unwrap();
    assert!(!defaults.contains("postcss"));
}

#[test]
fn test_postcss_config() {
    let dir = run(&prompt_defaults(json!({ "postcss": true })));
    let config = ConfigStore::open(dir.path()).unwrap();

    assert_eq!(config.get("generatedWithVersion"), Some(&json!(3)));
    assert_eq!(config.get("style"), Some(&json!("css")));
    assert_eq!(config.get("postcss"), Some(&json!(true)));
}

#[test]
fn test_postcss_create_files() {
    let dir = run(&prompt_defaults(json!({ "postcss": true })));
    assert_skeleton(dir.path());
}

#[test]
fn test_postcss_loader_in_style_pipes() {
    let dir = run(&prompt_defaults(json!({ "postcss": true })));
    let root = dir.path();

    assert_file_content(root, "cfg/defaults.js", "loader: 'style-loader!css-loader!postcss-loader'");
    assert_file_content(
        root,
        "cfg/defaults.js",
        "loader: 'style-loader!css-loader!postcss-loader!sass-loader?outputStyle=expanded&indentedSyntax'",
    );
    assert_file_content(
        root,
        "cfg/defaults.js",
        "loader: 'style-loader!css-loader!postcss-loader!sass-loader?outputStyle=expanded'",
    );
    assert_file_content(root, "cfg/defaults.js", "loader: 'style-loader!css-loader!postcss-loader!less-loader'");
    assert_file_content(root, "cfg/defaults.js", "loader: 'style-loader!css-loader!postcss-loader!stylus-loader'");
}

#[test]
fn test_postcss_function_appended_to_base_config() {
    let dir = run(&prompt_defaults(json!({ "postcss": true })));
    assert_file_content(
        dir.path(),
        "cfg/defaults.js",
        ",\n  postcss: function () {\n    return [];\n  }",
    );
    assert_file_content(dir.path(), "package.json", "\"postcss-loader\"");
}

#[test]
fn test_regenerating_is_identical() {
    let answers = prompt_defaults(json!({ "postcss": true, "style": "scss" }));
    let dir = run(&answers);

    let project = generate_app(&answers).unwrap();
    let report = write_app(&project, dir.path(), WritePolicy::Abort).unwrap();
    assert_eq!(report.identical.len(), project.files.len() + 1);
    assert!(report.identical.contains(&std::path::PathBuf::from(".yo-rc.json")));
    assert!(report.overwritten.is_empty());
    assert!(report.created.is_empty());

    let config = ConfigStore::open(dir.path()).unwrap();
    assert_eq!(config.get("style"), Some(&json!("scss")));
}
