//! Typed JSX markup model.
//!
//! Components are assembled as a tree of [`Element`]s and rendered to JSX
//! text only at the end. Building a tree instead of concatenating strings is
//! what lets the generator prove, before anything touches disk, that every
//! class the markup references has a stylesheet rule: [`Component::class_names`]
//! feeds that check.
//!
//! The model is deliberately small, just what the page builders in
//! `compose.rs` need. It is not a general HTML library.

use std::collections::BTreeSet;

/// An attribute value: a quoted string or a braced JSX expression.
///
/// `to="/about"` uses [`AttrValue::Str`]; `element={<Home />}` uses
/// [`AttrValue::Expr`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Str(String),
    Expr(String),
}

/// One node in the markup tree.
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element: tag (HTML or component), class list, attributes, children.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, AttrValue)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add one class name. Multiple calls render space-separated.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add a string attribute (`name="value"`).
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), AttrValue::Str(value.into())));
        self
    }

    /// Add an expression attribute (`name={value}`).
    pub fn attr_expr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), AttrValue::Expr(value.into())));
        self
    }

    pub fn child(mut self, element: Element) -> Self {
        self.children.push(Node::Element(element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Append children from an iterator; keeps builder chains flat when a
    /// section is built from content lists.
    pub fn children(mut self, elements: impl IntoIterator<Item = Element>) -> Self {
        for element in elements {
            self.children.push(Node::Element(element));
        }
        self
    }

    /// Collect every class token referenced in this subtree.
    pub fn class_names(&self, into: &mut BTreeSet<String>) {
        for class in &self.classes {
            into.insert(class.clone());
        }
        for child in &self.children {
            if let Node::Element(element) = child {
                element.class_names(into);
            }
        }
    }

    fn render_into(&self, out: &mut String, indent: usize) {
        let pad = "  ".repeat(indent);
        out.push_str(&pad);
        out.push('<');
        out.push_str(&self.tag);

        if !self.classes.is_empty() {
            out.push_str(" className=\"");
            out.push_str(&self.classes.join(" "));
            out.push('"');
        }
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            match value {
                AttrValue::Str(v) => {
                    out.push_str("=\"");
                    out.push_str(v);
                    out.push('"');
                }
                AttrValue::Expr(v) => {
                    out.push_str("={");
                    out.push_str(v);
                    out.push('}');
                }
            }
        }

        match self.children.as_slice() {
            [] => out.push_str(" />"),
            [Node::Text(text)] => {
                out.push('>');
                out.push_str(&escape_jsx_text(text));
                out.push_str("</");
                out.push_str(&self.tag);
                out.push('>');
            }
            children => {
                out.push_str(">\n");
                for child in children {
                    match child {
                        Node::Element(element) => element.render_into(out, indent + 1),
                        Node::Text(text) => {
                            out.push_str(&"  ".repeat(indent + 1));
                            out.push_str(&escape_jsx_text(text));
                        }
                    }
                    out.push('\n');
                }
                out.push_str(&pad);
                out.push_str("</");
                out.push_str(&self.tag);
                out.push('>');
            }
        }
    }

    /// Render this subtree starting at the given indent level.
    pub fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        self.render_into(&mut out, indent);
        out
    }
}

/// Characters that would terminate JSX text or open an expression are
/// entity-escaped. Business copy is arbitrary user text, so this is a
/// correctness concern, not cosmetics.
fn escape_jsx_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            other => out.push(other),
        }
    }
    out
}

// ── Imports ──────────────────────────────────────────────────────────────────

/// One import line at the top of a component file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Import {
    /// `import Name from 'module';`
    Default { name: String, from: String },
    /// `import { A, B } from 'module';`
    Named { names: Vec<String>, from: String },
    /// `import 'module';`, the form stylesheet references use.
    SideEffect { from: String },
}

impl Import {
    pub fn default_import(name: impl Into<String>, from: impl Into<String>) -> Self {
        Self::Default {
            name: name.into(),
            from: from.into(),
        }
    }

    pub fn named(names: &[&str], from: impl Into<String>) -> Self {
        Self::Named {
            names: names.iter().map(|n| n.to_string()).collect(),
            from: from.into(),
        }
    }

    pub fn side_effect(from: impl Into<String>) -> Self {
        Self::SideEffect { from: from.into() }
    }

    fn render(&self) -> String {
        match self {
            Self::Default { name, from } => format!("import {name} from '{from}';"),
            Self::Named { names, from } => {
                format!("import {{ {} }} from '{from}';", names.join(", "))
            }
            Self::SideEffect { from } => format!("import '{from}';"),
        }
    }
}

// ── Component ────────────────────────────────────────────────────────────────

/// A complete component file: imports, one function, default export.
#[derive(Debug, Clone)]
pub struct Component {
    name: String,
    imports: Vec<Import>,
    root: Element,
}

impl Component {
    pub fn new(name: impl Into<String>, root: Element) -> Self {
        Self {
            name: name.into(),
            imports: Vec::new(),
            root,
        }
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stylesheet this component references, if any.
    pub fn stylesheet_import(&self) -> Option<&str> {
        self.imports.iter().find_map(|import| match import {
            Import::SideEffect { from } if from.ends_with(".css") => Some(from.as_str()),
            _ => None,
        })
    }

    /// Every class token referenced anywhere in the component's markup.
    pub fn class_names(&self) -> BTreeSet<String> {
        let mut classes = BTreeSet::new();
        self.root.class_names(&mut classes);
        classes
    }

    /// Render the full `.jsx` file text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for import in &self.imports {
            out.push_str(&import.render());
            out.push('\n');
        }
        if !self.imports.is_empty() {
            out.push('\n');
        }

        out.push_str(&format!("function {}() {{\n", self.name));
        out.push_str("  return (\n");
        out.push_str(&self.root.render(2));
        out.push_str("\n  );\n");
        out.push_str("}\n\n");
        out.push_str(&format!("export default {};\n", self.name));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn childless_elements_self_close() {
        let el = Element::new("input")
            .class("form-input")
            .attr("type", "email");
        assert_eq!(
            el.render(0),
            r#"<input className="form-input" type="email" />"#
        );
    }

    #[test]
    fn single_text_child_stays_inline() {
        let el = Element::new("h1").class("hero-title").text("Welcome");
        assert_eq!(el.render(0), r#"<h1 className="hero-title">Welcome</h1>"#);
    }

    #[test]
    fn nested_children_indent_by_two() {
        let el = Element::new("div")
            .class("hero")
            .child(Element::new("p").class("hero-subtitle").text("Hello"));
        let expected = "<div className=\"hero\">\n  <p className=\"hero-subtitle\">Hello</p>\n</div>";
        assert_eq!(el.render(0), expected);
    }

    #[test]
    fn multiple_classes_join_with_spaces() {
        let el = Element::new("div").class("page").class("about-page");
        assert_eq!(el.render(0), r#"<div className="page about-page" />"#);
    }

    #[test]
    fn expression_attributes_use_braces() {
        let el = Element::new("Route")
            .attr("path", "/")
            .attr_expr("element", "<Home />");
        assert_eq!(el.render(0), r#"<Route path="/" element={<Home />} />"#);
    }

    #[test]
    fn jsx_breaking_characters_are_escaped() {
        let el = Element::new("p").text("Deals < 50% off {today}");
        let rendered = el.render(0);
        assert!(rendered.contains("&lt;"));
        assert!(rendered.contains("&#123;today&#125;"));
        assert!(!rendered.contains("{today}"));
    }

    #[test]
    fn class_names_walk_the_whole_tree() {
        let el = Element::new("div")
            .class("hero")
            .child(
                Element::new("div")
                    .class("hero-content")
                    .child(Element::new("h1").class("hero-title").text("Hi")),
            );
        let mut classes = BTreeSet::new();
        el.class_names(&mut classes);
        let collected: Vec<_> = classes.into_iter().collect();
        assert_eq!(collected, vec!["hero", "hero-content", "hero-title"]);
    }

    #[test]
    fn imports_render_all_three_forms() {
        assert_eq!(
            Import::default_import("React", "react").render(),
            "import React from 'react';"
        );
        assert_eq!(
            Import::named(&["Routes", "Route"], "react-router-dom").render(),
            "import { Routes, Route } from 'react-router-dom';"
        );
        assert_eq!(
            Import::side_effect("./Home.css").render(),
            "import './Home.css';"
        );
    }

    #[test]
    fn component_renders_function_and_export() {
        let component = Component::new("Home", Element::new("div").class("home"))
            .import(Import::default_import("React", "react"))
            .import(Import::side_effect("./Home.css"));

        let text = component.render();
        assert!(text.starts_with("import React from 'react';\nimport './Home.css';\n\n"));
        assert!(text.contains("function Home() {"));
        assert!(text.contains("  return (\n"));
        assert!(text.contains(r#"    <div className="home" />"#));
        assert!(text.ends_with("export default Home;\n"));
    }

    #[test]
    fn stylesheet_import_is_discoverable() {
        let component = Component::new("Home", Element::new("div"))
            .import(Import::default_import("React", "react"))
            .import(Import::side_effect("./Home.css"));
        assert_eq!(component.stylesheet_import(), Some("./Home.css"));

        let bare = Component::new("App", Element::new("div"));
        assert_eq!(bare.stylesheet_import(), None);
    }
}
