// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! String templates and HTML attribute rendering.
//!
//! Widgets build their markup from a small set of `{{placeholder}}`
//! templates instead of hard-coded tags, so callers can restyle the
//! output without touching widget logic.

use std::borrow::Cow;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Escape a value for use inside an HTML attribute or text node.
pub fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// HTML attributes rendered in insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as ` name="value"` pairs, one leading space each.
    ///
    /// Empty attribute sets render as an empty string so templates can
    /// splice `{{attrs}}` directly after the tag name.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.0 {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }
        out
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(n, v)| (n.into(), v.into())).collect())
    }
}

/// Deserialized from a map so configs can carry attributes as inline keys,
/// e.g. `{"data-foo": "test"}`. Entries keep document order.
impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttributesVisitor;

        impl<'de> Visitor<'de> for AttributesVisitor {
            type Value = Attributes;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of attribute names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Attributes, A::Error> {
                let mut attrs = Attributes::new();
                while let Some((name, value)) = map.next_entry::<String, String>()? {
                    attrs.push(name, value);
                }
                Ok(attrs)
            }
        }

        deserializer.deserialize_map(AttributesVisitor)
    }
}

/// The tag templates shared by every widget.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TemplateSet {
    /// Template for a `<select>` element.
    pub select: String,
    /// Template for a single `<option>`.
    pub option: String,
    /// Concatenation order for the composite date widget's fields.
    pub date_widget: String,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self {
            select: r#"<select name="{{name}}"{{attrs}}>{{content}}</select>"#.to_string(),
            option: r#"<option value="{{value}}"{{attrs}}>{{text}}</option>"#.to_string(),
            date_widget: "{{year}}{{month}}{{day}}{{hour}}{{minute}}{{second}}{{meridian}}"
                .to_string(),
        }
    }
}

impl TemplateSet {
    /// Substitute `{{key}}` placeholders from `vars`.
    ///
    /// Unknown placeholders render as empty rather than failing, per the
    /// leniency policy for widget output.
    pub fn format(template: &str, vars: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(template.len() + 32);
        let mut rest = template;
        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) => {
                    let key = &after[..end];
                    if let Some((_, value)) = vars.iter().find(|(name, _)| *name == key) {
                        out.push_str(value);
                    }
                    rest = &after[end + 2..];
                }
                None => {
                    // Unterminated placeholder, emit verbatim
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }

    /// Render a `<select>` tag. `content` is markup and passes through
    /// unescaped; the name is escaped.
    pub fn select_tag(&self, name: &str, attrs: &Attributes, content: &str) -> String {
        let name = escape(name);
        let attrs = attrs.render();
        Self::format(
            &self.select,
            &[("name", &name), ("attrs", &attrs), ("content", content)],
        )
    }

    /// Render a single `<option>` tag, escaping both value and label.
    pub fn option_tag(&self, value: &str, attrs: &Attributes, text: &str) -> String {
        let value = escape(value);
        let attrs = attrs.render();
        let text = escape(text);
        Self::format(
            &self.option,
            &[("value", &value), ("attrs", &attrs), ("text", &text)],
        )
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
