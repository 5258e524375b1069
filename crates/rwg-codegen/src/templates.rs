//! Embedded template table.
//!
//! Every file of the app skeleton is compiled into the binary. Dot files are
//! stored without their leading dot so they stay visible in the source tree.

/// Where a generated file's content comes from.
#[derive(Debug, Clone, Copy)]
pub enum TemplateSource {
    /// Copied verbatim.
    Static(&'static str),
    /// Rendered with tera, registered under the destination path.
    Tera(&'static str),
    /// Copied byte for byte.
    Binary(&'static [u8]),
}

/// One file of the app skeleton.
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    /// Path relative to the project root.
    pub dest: &'static str,
    pub source: TemplateSource,
}

const fn file(dest: &'static str, source: TemplateSource) -> TemplateFile {
    TemplateFile { dest, source }
}

use TemplateSource::{Binary, Static, Tera};

/// The app skeleton, in generation order.
pub static APP_TEMPLATES: &[TemplateFile] = &[
    // ── Dot files ───────────────────────────────────────────────────────────
    file(".babelrc", Static(include_str!("templates/app/babelrc"))),
    file(".editorconfig", Static(include_str!("templates/app/editorconfig"))),
    file(".eslintrc", Static(include_str!("templates/app/eslintrc"))),
    file(".gitignore", Static(include_str!("templates/app/gitignore"))),
    // ── Project configuration ───────────────────────────────────────────────
    file("package.json", Tera(include_str!("templates/app/package.json.tera"))),
    // ── Webpack ─────────────────────────────────────────────────────────────
    file("cfg/base.js", Static(include_str!("templates/app/cfg/base.js"))),
    file("cfg/defaults.js", Static(include_str!("templates/app/cfg/defaults.js"))),
    file("cfg/dev.js", Static(include_str!("templates/app/cfg/dev.js"))),
    file("cfg/dist.js", Static(include_str!("templates/app/cfg/dist.js"))),
    file("cfg/test.js", Static(include_str!("templates/app/cfg/test.js"))),
    file("server.js", Static(include_str!("templates/app/server.js"))),
    file("webpack.config.js", Static(include_str!("templates/app/webpack.config.js"))),
    // ── Sources ─────────────────────────────────────────────────────────────
    file("src/actions/README.md", Static(include_str!("templates/app/src/actions/README.md"))),
    file("src/index.js", Static(include_str!("templates/app/src/index.js"))),
    file("src/components/Main.js", Static(include_str!("templates/app/src/components/Main.js"))),
    file("src/config/base.js", Static(include_str!("templates/app/src/config/base.js"))),
    file("src/config/dev.js", Static(include_str!("templates/app/src/config/dev.js"))),
    file("src/config/dist.js", Static(include_str!("templates/app/src/config/dist.js"))),
    file("src/config/test.js", Static(include_str!("templates/app/src/config/test.js"))),
    file("src/favicon.ico", Binary(include_bytes!("templates/app/src/favicon.ico"))),
    file("src/images/yeoman.png", Binary(include_bytes!("templates/app/src/images/yeoman.png"))),
    file("src/index.html", Tera(include_str!("templates/app/src/index.html.tera"))),
    file("src/sources/README.md", Static(include_str!("templates/app/src/sources/README.md"))),
    file("src/stores/README.md", Static(include_str!("templates/app/src/stores/README.md"))),
    file("src/styles/App.css", Static(include_str!("templates/app/src/styles/App.css"))),
    // ── Tests ───────────────────────────────────────────────────────────────
    file("karma.conf.js", Static(include_str!("templates/app/karma.conf.js"))),
    file("test/components/MainTest.js", Static(include_str!("templates/app/test/components/MainTest.js"))),
    file(
        "test/helpers/shallowRenderHelper.js",
        Static(include_str!("templates/app/test/helpers/shallowRenderHelper.js")),
    ),
    file("test/loadtests.js", Static(include_str!("templates/app/test/loadtests.js"))),
];

pub const COMPONENT: &str = "component/Component.js";
pub const COMPONENT_TEST: &str = "component/ComponentTest.js";

/// Tera name of the stylesheet template for a file extension.
pub fn component_style(extension: &str) -> String {
    format!("component/style.{}", extension)
}

/// Component subgenerator templates as (name, body) pairs.
pub static COMPONENT_TEMPLATES: &[(&str, &str)] = &[
    (COMPONENT, include_str!("templates/component/Component.js.tera")),
    (COMPONENT_TEST, include_str!("templates/component/ComponentTest.js.tera")),
    ("component/style.css", include_str!("templates/component/style.css.tera")),
    ("component/style.sass", include_str!("templates/component/style.sass.tera")),
    ("component/style.scss", include_str!("templates/component/style.scss.tera")),
    ("component/style.less", include_str!("templates/component/style.less.tera")),
    ("component/style.styl", include_str!("templates/component/style.styl.tera")),
];
