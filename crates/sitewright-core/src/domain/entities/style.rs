//! Typed stylesheet model.
//!
//! Like the markup tree, stylesheets are data until the final render: a list
//! of class rules (optionally with a pseudo-state) plus media blocks. Every
//! rule names the class it covers, so [`Stylesheet::class_names`] is exact:
//! no selector parsing, no text scanning.

use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    property: String,
    value: String,
}

/// One rule block covering exactly one class.
#[derive(Debug, Clone)]
pub struct Rule {
    class: String,
    state: Option<String>,
    declarations: Vec<Declaration>,
}

impl Rule {
    /// A plain class rule: `.name { … }`.
    pub fn for_class(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            state: None,
            declarations: Vec::new(),
        }
    }

    /// A pseudo-state rule: `.name:hover { … }`. Still covers `name`.
    pub fn for_class_state(class: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            state: Some(state.into()),
            declarations: Vec::new(),
        }
    }

    pub fn decl(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration {
            property: property.into(),
            value: value.into(),
        });
        self
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn selector(&self) -> String {
        match &self.state {
            Some(state) => format!(".{}{}", self.class, state),
            None => format!(".{}", self.class),
        }
    }

    fn render_into(&self, out: &mut String, indent: usize) {
        let pad = "  ".repeat(indent);
        out.push_str(&pad);
        out.push_str(&self.selector());
        out.push_str(" {\n");
        for decl in &self.declarations {
            out.push_str(&pad);
            out.push_str("  ");
            out.push_str(&decl.property);
            out.push_str(": ");
            out.push_str(&decl.value);
            out.push_str(";\n");
        }
        out.push_str(&pad);
        out.push_str("}\n");
    }
}

/// An `@media` block with its own rule list.
#[derive(Debug, Clone)]
pub struct MediaBlock {
    condition: String,
    rules: Vec<Rule>,
}

impl MediaBlock {
    /// `condition` is the parenthesized part: `max-width: 768px`.
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }
}

/// A complete stylesheet file.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    rules: Vec<Rule>,
    media: Vec<MediaBlock>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn media(mut self, block: MediaBlock) -> Self {
        self.media.push(block);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.media.is_empty()
    }

    /// Every class that has at least one rule block, media blocks included.
    pub fn class_names(&self) -> BTreeSet<String> {
        let mut classes = BTreeSet::new();
        for rule in &self.rules {
            classes.insert(rule.class.clone());
        }
        for block in &self.media {
            for rule in &block.rules {
                classes.insert(rule.class.clone());
            }
        }
        classes
    }

    pub fn covers(&self, class: &str) -> bool {
        self.rules.iter().any(|r| r.class == class)
            || self
                .media
                .iter()
                .any(|b| b.rules.iter().any(|r| r.class == class))
    }

    /// Render the full `.css` file text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            rule.render_into(&mut out, 0);
        }
        for block in &self.media {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("@media ({}) {{\n", block.condition));
            for (i, rule) in block.rules.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                rule.render_into(&mut out, 1);
            }
            out.push_str("}\n");
        }
        out
    }
}
