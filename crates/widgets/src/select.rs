// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single `<select>` element renderer.

use crate::template::{Attributes, TemplateSet};

/// One option in a select box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Renders `<select>` elements from an option list.
#[derive(Debug, Clone, Default)]
pub struct SelectBox {
    templates: TemplateSet,
}

impl SelectBox {
    pub fn new(templates: TemplateSet) -> Self {
        Self { templates }
    }

    /// Render one select element.
    ///
    /// `selected` marks the option whose value matches it. An `empty` label
    /// prepends a blank-value option, which is force-selected when no other
    /// selection applies.
    pub fn render(
        &self,
        name: &str,
        attrs: &Attributes,
        options: &[SelectOption],
        selected: Option<&str>,
        empty: Option<&str>,
    ) -> String {
        let mut content = String::with_capacity(options.len() * 40 + 64);
        if let Some(label) = empty {
            let mut empty_attrs = Attributes::new();
            if selected.is_none() {
                empty_attrs.push("selected", "selected");
            }
            content.push_str(&self.templates.option_tag("", &empty_attrs, label));
        }
        for option in options {
            let mut option_attrs = Attributes::new();
            if selected == Some(option.value.as_str()) {
                option_attrs.push("selected", "selected");
            }
            content.push_str(&self.templates.option_tag(&option.value, &option_attrs, &option.label));
        }
        self.templates.select_tag(name, attrs, &content)
    }
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;
