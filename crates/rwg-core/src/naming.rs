//! Naming rules for packages and components.

use crate::error::{GenResult, GeneratorError};

/// npm-safe package name derived from an application name.
pub fn package_name(app_name: &str) -> String {
    let mut slug = String::with_capacity(app_name.len());
    let mut pending_dash = false;

    for c in app_name.trim().chars() {
        if c.is_whitespace() || c == '_' || c == '-' {
            pending_dash = true;
            continue;
        }
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() || c == '.' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        }
    }

    if slug.is_empty() {
        "app".to_string()
    } else {
        slug
    }
}

/// A component path such as `my/namespaced/components/name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentName {
    /// Directory segments below `components/`, `styles/` and `test/components/`.
    pub dirs: Vec<String>,
    /// PascalCase base name (`Name`).
    pub base: String,
}

impl ComponentName {
    pub fn parse(raw: &str) -> GenResult<Self> {
        let raw = raw.trim().trim_matches('/');
        if raw.is_empty() {
            return Err(GeneratorError::InvalidName("component name is empty".into()));
        }

        let segments: Vec<&str> = raw.split('/').collect();
        if let Some(bad) = segments.iter().find(|s| s.trim().is_empty() || **s == "." || **s == "..") {
            return Err(GeneratorError::InvalidName(format!(
                "'{}' has an invalid path segment '{}'",
                raw, bad
            )));
        }

        let Some((last, dirs)) = segments.split_last() else {
            return Err(GeneratorError::InvalidName(raw.to_string()));
        };
        let base = pascal_case(last);
        if base.is_empty() {
            return Err(GeneratorError::InvalidName(format!(
                "'{}' has no usable characters",
                raw
            )));
        }
        if !base.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(GeneratorError::InvalidName(format!(
                "'{}' must start with a letter",
                last
            )));
        }

        Ok(Self {
            dirs: dirs.iter().map(|s| s.to_string()).collect(),
            base,
        })
    }

    /// React class name, e.g. `NameComponent`.
    pub fn class_name(&self) -> String {
        format!("{}Component", self.base)
    }

    /// CSS class on the component's root element, e.g. `name-component`.
    pub fn css_class(&self) -> String {
        format!("{}-component", kebab_case(&self.base))
    }

    /// Fully qualified display name, e.g. `MyNamespacedComponentsNameComponent`.
    pub fn display_name(&self) -> String {
        let mut name: String = self.dirs.iter().map(|d| pascal_case(d)).collect();
        name.push_str(&self.class_name());
        name
    }

    /// Directory prefix with a trailing slash, or empty.
    pub fn dir_prefix(&self) -> String {
        if self.dirs.is_empty() {
            String::new()
        } else {
            format!("{}/", self.dirs.join("/"))
        }
    }
}

fn pascal_case(s: &str) -> String {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// `TodoList` -> `todo-list`; an uppercase run stays one word (`HTMLParser` -> `html-parser`).
fn kebab_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase() || prev.is_ascii_digit() || (prev.is_ascii_uppercase() && next_lower) {
                out.push('-');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}
