use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::core::errors::{JaegerError, Result};

/// What `render` does when the template names a property the mapping
/// does not contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingKeyPolicy {
    /// Fail with every unresolved placeholder listed. The default.
    Fail,
    /// Substitute the empty string.
    Empty,
}

/// Flat placeholder substitution: `{{Name}}` is replaced by the mapped
/// plaintext, verbatim.
///
/// No control flow, no escaping; callers quote for themselves when the
/// output is itself a structured format.
pub struct TemplateRenderer {
    missing: MissingKeyPolicy,
}

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").expect("placeholder pattern is valid")
    })
}

impl TemplateRenderer {
    pub fn new(missing: MissingKeyPolicy) -> Self {
        Self { missing }
    }

    /// Substitute every placeholder in `template` from `mapping`.
    ///
    /// Under `MissingKeyPolicy::Fail`, all unresolved names are
    /// collected before erroring so the operator sees the full list in
    /// one pass.
    pub fn render(&self, template: &str, mapping: &HashMap<String, String>) -> Result<String> {
        let re = placeholder_regex();

        if self.missing == MissingKeyPolicy::Fail {
            let mut missing: Vec<&str> = Vec::new();
            for caps in re.captures_iter(template) {
                let name = caps.get(1).map_or("", |m| m.as_str());
                if !mapping.contains_key(name) && !missing.contains(&name) {
                    missing.push(name);
                }
            }

            if !missing.is_empty() {
                return Err(JaegerError::MissingPlaceholder {
                    names: missing.join(", "),
                });
            }
        }

        let rendered = re.replace_all(template, |caps: &regex::Captures| {
            let name = caps.get(1).map_or("", |m| m.as_str());
            mapping.get(name).map(String::as_str).unwrap_or("")
        });

        Ok(rendered.into_owned())
    }
}
