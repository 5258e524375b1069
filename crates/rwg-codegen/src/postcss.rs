//! PostCSS support for generated projects.
//!
//! Rewrites the rendered webpack defaults so every style pipe runs through
//! `postcss-loader`, exposes a `postcss` plugin hook on the exported
//! defaults, and adds the loader to the dev dependencies. All rewrites are
//! idempotent.

use rwg_core::{GenResult, GeneratorError};
use serde_json::{Map, Value};
use std::path::Path;

use crate::output::GeneratedFile;

pub const DEFAULTS_FILE: &str = "cfg/defaults.js";
pub const PACKAGE_FILE: &str = "package.json";
pub const POSTCSS_LOADER_VERSION: &str = "^0.9.1";

const STYLE_CHAIN: &str = "style-loader!css-loader";
const POSTCSS_SEGMENT: &str = "!postcss-loader";
const POSTCSS_PROPERTY: &str = "postcss: function () {\n    return [];\n  }";

/// Apply every PostCSS rewrite to a rendered project.
pub fn apply(files: &mut [GeneratedFile]) -> GenResult<()> {
    let mut saw_defaults = false;

    for file in files.iter_mut() {
        let is_defaults = file.path == Path::new(DEFAULTS_FILE);
        if !is_defaults && file.path != Path::new(PACKAGE_FILE) {
            continue;
        }

        let source = file
            .text()
            .ok_or_else(|| GeneratorError::transform(file.path.display().to_string(), "not UTF-8"))?;
        let rewritten = if is_defaults {
            saw_defaults = true;
            append_postcss_hook(&insert_postcss_loader(source)?)?
        } else {
            add_postcss_dependency(source)?
        };
        file.contents = rewritten.into_bytes();
    }

    if !saw_defaults {
        return Err(GeneratorError::TemplateMissing(DEFAULTS_FILE.to_string()));
    }
    Ok(())
}

/// Insert `postcss-loader` after `css-loader` in every quoted style chain.
pub fn insert_postcss_loader(source: &str) -> GenResult<String> {
    let mut out = String::with_capacity(source.len() + 128);
    let mut copied = 0;
    let mut chains = 0;

    for (idx, _) in source.match_indices(STYLE_CHAIN) {
        if !source[..idx].ends_with(['\'', '"']) {
            continue;
        }
        let end = idx + STYLE_CHAIN.len();
        let rest = &source[end..];
        if !rest.starts_with(['!', '\'', '"']) {
            continue;
        }
        chains += 1;
        if rest.starts_with(POSTCSS_SEGMENT) {
            continue;
        }
        out.push_str(&source[copied..end]);
        out.push_str(POSTCSS_SEGMENT);
        copied = end;
    }

    if chains == 0 {
        return Err(GeneratorError::transform(DEFAULTS_FILE, "no style loader chains found"));
    }

    out.push_str(&source[copied..]);
    Ok(out)
}

/// Append a `postcss` property to the `module.exports` object literal.
pub fn append_postcss_hook(source: &str) -> GenResult<String> {
    let open = exports_object_start(source)
        .ok_or_else(|| GeneratorError::transform(DEFAULTS_FILE, "no module.exports object literal"))?;
    let close = matching_brace(source, open)
        .ok_or_else(|| GeneratorError::transform(DEFAULTS_FILE, "unbalanced module.exports object"))?;

    if source[open..close].contains("postcss:") {
        return Ok(source.to_string());
    }

    let insert_at = source[..close].trim_end().len();
    let separator = match source[..insert_at].chars().last() {
        Some('{') | Some(',') => "\n  ",
        _ => ",\n  ",
    };

    let mut out = String::with_capacity(source.len() + POSTCSS_PROPERTY.len() + 4);
    out.push_str(&source[..insert_at]);
    out.push_str(separator);
    out.push_str(POSTCSS_PROPERTY);
    out.push_str(&source[insert_at..]);
    Ok(out)
}

/// Add `postcss-loader` to `devDependencies`, keeping them sorted.
pub fn add_postcss_dependency(package_json: &str) -> GenResult<String> {
    let mut package: Value = serde_json::from_str(package_json)?;
    let root = package
        .as_object_mut()
        .ok_or_else(|| GeneratorError::transform(PACKAGE_FILE, "not a JSON object"))?;

    let dev = root
        .entry("devDependencies")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| GeneratorError::transform(PACKAGE_FILE, "devDependencies is not an object"))?;

    if !dev.contains_key("postcss-loader") {
        dev.insert("postcss-loader".into(), Value::String(POSTCSS_LOADER_VERSION.into()));
        let mut entries: Vec<(String, Value)> = std::mem::take(dev).into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        dev.extend(entries);
    }

    let mut body = serde_json::to_string_pretty(&package)?;
    body.push('\n');
    Ok(body)
}

/// Byte offset of the `{` opening the `module.exports = {` literal.
fn exports_object_start(source: &str) -> Option<usize> {
    let start = source.find("module.exports")? + "module.exports".len();
    let rest = source[start..].trim_start();
    let rest = rest.strip_prefix('=')?.trim_start();
    if !rest.starts_with('{') {
        return None;
    }
    Some(source.len() - rest.len())
}

/// Offset of the brace closing the one at `open`, skipping strings and comments.
fn matching_brace(source: &str, open: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut i = open;

    while i < bytes.len() {
        match bytes[i] {
            quote @ (b'\'' | b'"' | b'`') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2;
                while i + 1 < bytes.len() && !(bytes[i] == b'*' && bytes[i + 1] == b'/') {
                    i += 1;
                }
                i += 1;
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}
