//! Page, navigation and router composition.
//!
//! This module turns resolved content into typed artifacts: a [`Component`]
//! tree per page, its stylesheet (own or shared), the navbar, and the router
//! table. Markup and CSS for one layout are built side by side here, which is
//! what makes the class-coverage guarantee enforceable: the validator can
//! diff the two before anything is rendered to text.
//!
//! Layouts:
//!
//! - `home`: hero banner plus highlight/card sections, own stylesheet
//! - `contact`: enquiry form with a details sidebar, own stylesheet
//! - `gallery` / `testimonials`: grid layouts, own stylesheets
//! - `login` / `register`: centered auth card, own stylesheets
//! - everything else: the standard page layout sharing `pages.css`

use crate::domain::{
    entities::{
        content::{ContentCard, PageContent},
        markup::{Component, Element, Import},
        navigation::NavigationModel,
        style::{MediaBlock, Rule, Stylesheet},
    },
    value_objects::{MarkupFlavor, Page},
};

// ── Artifacts ────────────────────────────────────────────────────────────────

/// One page's composed output: the component plus its own stylesheet, if the
/// layout carries one. `None` means the page imports the shared `pages.css`.
#[derive(Debug, Clone)]
pub struct PageArtifact {
    pub page: Page,
    pub component: Component,
    pub stylesheet: Option<Stylesheet>,
}

impl PageArtifact {
    pub fn uses_shared_stylesheet(&self) -> bool {
        self.stylesheet.is_none()
    }
}

// ── Composition API ──────────────────────────────────────────────────────────

/// Compose one page from its resolved content.
///
/// The navigation model is consulted so intra-page links (the hero
/// call-to-action) only ever target pages that exist in this run.
pub fn compose_page(
    page: Page,
    content: &PageContent,
    nav: &NavigationModel,
    flavor: MarkupFlavor,
) -> PageArtifact {
    let (root, stylesheet, uses_link) = match page {
        Page::Home => (home_page(content, nav), Some(home_stylesheet()), true),
        Page::Contact => (contact_page(content), Some(contact_stylesheet()), false),
        Page::Gallery => (gallery_page(content), Some(gallery_stylesheet()), false),
        Page::Testimonials => (
            testimonials_page(content),
            Some(testimonials_stylesheet()),
            false,
        ),
        Page::Login | Page::Register => (auth_page(page, content), Some(auth_stylesheet(page)), true),
        _ => (standard_page(content), None, false),
    };

    let css = flavor.stylesheet_extension();
    let style_ref = match &stylesheet {
        Some(_) => format!("./{}.{css}", page.component_name()),
        None => format!("./pages.{css}"),
    };

    let mut component =
        Component::new(page.component_name(), root).import(Import::default_import("React", "react"));
    if uses_link {
        component = component.import(Import::named(&["Link"], "react-router-dom"));
    }
    component = component.import(Import::side_effect(style_ref));

    PageArtifact {
        page,
        component,
        stylesheet,
    }
}

/// The navigation bar and its stylesheet.
pub fn compose_navbar(
    nav: &NavigationModel,
    business_name: &str,
    flavor: MarkupFlavor,
) -> (Component, Stylesheet) {
    let links = Element::new("ul")
        .class("navbar-links")
        .children(nav.entries().iter().map(|entry| {
            Element::new("li").class("navbar-item").child(
                Element::new("NavLink")
                    .class("navbar-link")
                    .attr("to", entry.path)
                    .text(entry.label),
            )
        }));

    let root = Element::new("nav")
        .class("navbar")
        .child(
            Element::new("NavLink")
                .class("navbar-brand")
                .attr("to", "/")
                .text(business_name),
        )
        .child(links);

    let component = Component::new("Navbar", root)
        .import(Import::default_import("React", "react"))
        .import(Import::named(&["NavLink"], "react-router-dom"))
        .import(Import::side_effect(format!(
            "./Navbar.{}",
            flavor.stylesheet_extension()
        )));

    (component, navbar_stylesheet())
}

/// The router table (`App`) and its stylesheet.
///
/// Routes are walked off the same [`NavigationModel`] the navbar uses, so the
/// two cannot diverge.
pub fn compose_router(nav: &NavigationModel, flavor: MarkupFlavor) -> (Component, Stylesheet) {
    let routes = Element::new("Routes").children(nav.entries().iter().map(|entry| {
        Element::new("Route")
            .attr("path", entry.path)
            .attr_expr("element", format!("<{} />", entry.page.component_name()))
    }));

    let root = Element::new("BrowserRouter").child(
        Element::new("div")
            .class("app")
            .child(Element::new("Navbar"))
            .child(Element::new("main").class("app-main").child(routes)),
    );

    let mut component = Component::new("App", root)
        .import(Import::default_import("React", "react"))
        .import(Import::named(
            &["BrowserRouter", "Routes", "Route"],
            "react-router-dom",
        ))
        .import(Import::default_import("Navbar", "./components/Navbar"));
    for entry in nav.entries() {
        component = component.import(Import::default_import(
            entry.page.component_name(),
            format!("./pages/{}", entry.page.component_name()),
        ));
    }
    component = component.import(Import::side_effect(format!(
        "./App.{}",
        flavor.stylesheet_extension()
    )));

    (component, app_stylesheet())
}

// ── Page layouts ─────────────────────────────────────────────────────────────

fn home_page(content: &PageContent, nav: &NavigationModel) -> Element {
    let has_contact = nav.pages().any(|page| page == Page::Contact);
    let (cta_label, cta_path) = if has_contact {
        ("Get in Touch", Page::Contact.route_path())
    } else {
        ("Learn More", Page::About.route_path())
    };

    let mut root = Element::new("div").class("home").child(
        Element::new("section").class("hero").child(
            Element::new("div")
                .class("hero-content")
                .child(Element::new("h1").class("hero-title").text(content.title.as_str()))
                .child(
                    Element::new("p")
                        .class("hero-subtitle")
                        .text(content.subtitle.as_str()),
                )
                .child(
                    Element::new("Link")
                        .class("hero-cta")
                        .attr("to", cta_path)
                        .text(cta_label),
                ),
        ),
    );

    if !content.items.is_empty() {
        root = root.child(
            Element::new("section")
                .class("highlights")
                .child(
                    Element::new("h2")
                        .class("section-heading")
                        .text("What We Offer"),
                )
                .child(
                    Element::new("ul").class("highlight-list").children(
                        content
                            .items
                            .iter()
                            .map(|item| Element::new("li").class("highlight-item").text(item.as_str())),
                    ),
                ),
        );
    }

    if !content.cards.is_empty() {
        root = root.child(
            Element::new("section")
                .class("features")
                .child(
                    Element::new("h2")
                        .class("section-heading")
                        .text("Why Choose Us"),
                )
                .child(card_grid(&content.cards)),
        );
    }

    root
}

fn contact_page(content: &PageContent) -> Element {
    let form = Element::new("form")
        .class("contact-form")
        .child(form_field("name", "Name", "text", "Your name"))
        .child(form_field("email", "Email", "email", "you@example.com"))
        .child(
            Element::new("div")
                .class("form-field")
                .child(
                    Element::new("label")
                        .class("form-label")
                        .attr("htmlFor", "message")
                        .text("Message"),
                )
                .child(
                    Element::new("textarea")
                        .class("form-textarea")
                        .attr("id", "message")
                        .attr("rows", "5")
                        .attr("placeholder", "How can we help?"),
                ),
        )
        .child(
            Element::new("button")
                .class("form-submit")
                .attr("type", "submit")
                .text("Send Message"),
        );

    let mut layout = Element::new("div").class("contact-layout").child(form);

    if !content.items.is_empty() {
        layout = layout.child(
            Element::new("aside")
                .class("contact-details")
                .child(Element::new("h2").class("section-heading").text("Details"))
                .child(detail_list(&content.items)),
        );
    }

    Element::new("div")
        .class("contact")
        .child(page_header(content))
        .child(layout)
}

fn gallery_page(content: &PageContent) -> Element {
    let grid = if content.items.is_empty() {
        Element::new("div").class("gallery-grid").child(
            Element::new("p")
                .class("gallery-empty")
                .text("New work coming soon."),
        )
    } else {
        Element::new("div")
            .class("gallery-grid")
            .children(content.items.iter().map(|caption| {
                Element::new("figure")
                    .class("gallery-item")
                    .child(Element::new("div").class("gallery-placeholder"))
                    .child(
                        Element::new("figcaption")
                            .class("gallery-caption")
                            .text(caption.as_str()),
                    )
            }))
    };

    Element::new("div")
        .class("gallery")
        .child(page_header(content))
        .child(grid)
}

fn testimonials_page(content: &PageContent) -> Element {
    let grid = if content.cards.is_empty() {
        Element::new("div").class("testimonial-grid").child(
            Element::new("p")
                .class("testimonial-empty")
                .text("Customer stories are on their way."),
        )
    } else {
        Element::new("div")
            .class("testimonial-grid")
            .children(content.cards.iter().map(|card| {
                Element::new("blockquote")
                    .class("testimonial-card")
                    .child(
                        Element::new("p")
                            .class("testimonial-quote")
                            .text(card.body.as_str()),
                    )
                    .child(
                        Element::new("footer")
                            .class("testimonial-author")
                            .text(card.title.as_str()),
                    )
            }))
    };

    Element::new("div")
        .class("testimonials")
        .child(page_header(content))
        .child(grid)
}

fn auth_page(page: Page, content: &PageContent) -> Element {
    let (submit_label, alt_text, alt_label, alt_path) = if page == Page::Login {
        ("Sign In", "Need an account?", "Register", Page::Register.route_path())
    } else {
        (
            "Create Account",
            "Already have an account?",
            "Sign In",
            Page::Login.route_path(),
        )
    };

    let mut form = Element::new("form").class("auth-form");
    if page == Page::Register {
        form = form.child(form_field("name", "Name", "text", "Your name"));
    }
    form = form
        .child(form_field("email", "Email", "email", "you@example.com"))
        .child(form_field(
            "password",
            "Password",
            "password",
            "Enter your password",
        ))
        .child(
            Element::new("button")
                .class("auth-submit")
                .attr("type", "submit")
                .text(submit_label),
        );

    Element::new("div").class(page.as_str()).child(
        Element::new("div")
            .class("auth-card")
            .child(Element::new("h1").class("auth-title").text(content.title.as_str()))
            .child(
                Element::new("p")
                    .class("auth-intro")
                    .text(content.subtitle.as_str()),
            )
            .child(form)
            .child(
                Element::new("p")
                    .class("auth-alt")
                    .text(alt_text)
                    .child(
                        Element::new("Link")
                            .class("auth-link")
                            .attr("to", alt_path)
                            .text(alt_label),
                    ),
            ),
    )
}

/// The standard layout every `pages.css` page uses: header, then an optional
/// list section and an optional card section.
fn standard_page(content: &PageContent) -> Element {
    let mut root = Element::new("div").class("page").child(page_header(content));

    if !content.items.is_empty() {
        root = root.child(
            Element::new("section")
                .class("page-section")
                .child(detail_list(&content.items)),
        );
    }
    if !content.cards.is_empty() {
        root = root.child(
            Element::new("section")
                .class("page-section")
                .child(card_grid(&content.cards)),
        );
    }

    root
}

// ── Shared markup fragments ──────────────────────────────────────────────────

fn page_header(content: &PageContent) -> Element {
    Element::new("header")
        .class("page-header")
        .child(Element::new("h1").class("page-title").text(content.title.as_str()))
        .child(
            Element::new("p")
                .class("page-intro")
                .text(content.subtitle.as_str()),
        )
}

fn card_grid(cards: &[ContentCard]) -> Element {
    Element::new("div")
        .class("card-grid")
        .children(cards.iter().map(|card| {
            Element::new("div")
                .class("card")
                .child(Element::new("h3").class("card-title").text(card.title.as_str()))
                .child(Element::new("p").class("card-body").text(card.body.as_str()))
        }))
}

fn detail_list(items: &[String]) -> Element {
    Element::new("ul")
        .class("detail-list")
        .children(
            items
                .iter()
                .map(|item| Element::new("li").class("detail-item").text(item.as_str())),
        )
}

fn form_field(id: &str, label: &str, input_type: &str, placeholder: &str) -> Element {
    Element::new("div")
        .class("form-field")
        .child(
            Element::new("label")
                .class("form-label")
                .attr("htmlFor", id)
                .text(label),
        )
        .child(
            Element::new("input")
                .class("form-input")
                .attr("id", id)
                .attr("type", input_type)
                .attr("placeholder", placeholder),
        )
}

// ── Stylesheets ──────────────────────────────────────────────────────────────
//
// Each layout's stylesheet is authored next to its markup builder. Rules may
// be a superset of what a given run references (conditional sections), but
// never less: the coverage validator enforces the floor.

/// The shared standard-layout stylesheet, emitted once as `pages.css` when
/// any page uses it.
pub fn shared_stylesheet() -> Stylesheet {
    let mut sheet = Stylesheet::new().rule(
        Rule::for_class("page")
            .decl("max-width", "960px")
            .decl("margin", "0 auto")
            .decl("padding", "3rem 2rem"),
    );
    for rule in page_header_rules() {
        sheet.add_rule(rule);
    }
    sheet.add_rule(Rule::for_class("page-section").decl("margin-bottom", "2.5rem"));
    for rule in detail_rules() {
        sheet.add_rule(rule);
    }
    for rule in card_rules() {
        sheet.add_rule(rule);
    }
    sheet.media(
        MediaBlock::new("max-width: 768px")
            .rule(Rule::for_class("page").decl("padding", "2rem 1rem"))
            .rule(Rule::for_class("page-title").decl("font-size", "1.75rem")),
    )
}

fn home_stylesheet() -> Stylesheet {
    let mut sheet = Stylesheet::new()
        .rule(
            Rule::for_class("home")
                .decl("display", "flex")
                .decl("flex-direction", "column")
                .decl("gap", "4rem")
                .decl("padding-bottom", "4rem"),
        )
        .rule(
            Rule::for_class("hero")
                .decl("display", "flex")
                .decl("align-items", "center")
                .decl("justify-content", "center")
                .decl("min-height", "60vh")
                .decl("padding", "4rem 2rem")
                .decl("background", "linear-gradient(135deg, #1f2937 0%, #374151 100%)")
                .decl("color", "#f9fafb"),
        )
        .rule(
            Rule::for_class("hero-content")
                .decl("max-width", "720px")
                .decl("text-align", "center"),
        )
        .rule(
            Rule::for_class("hero-title")
                .decl("font-size", "3rem")
                .decl("line-height", "1.2")
                .decl("margin-bottom", "1rem"),
        )
        .rule(
            Rule::for_class("hero-subtitle")
                .decl("font-size", "1.25rem")
                .decl("opacity", "0.9")
                .decl("margin-bottom", "2rem"),
        )
        .rule(
            Rule::for_class("hero-cta")
                .decl("display", "inline-block")
                .decl("padding", "0.75rem 2rem")
                .decl("border-radius", "9999px")
                .decl("background", "#2563eb")
                .decl("color", "#ffffff")
                .decl("text-decoration", "none")
                .decl("font-weight", "600"),
        )
        .rule(Rule::for_class_state("hero-cta", ":hover").decl("background", "#1d4ed8"))
        .rule(Rule::for_class("highlights").decl("padding", "0 2rem"))
        .rule(
            Rule::for_class("section-heading")
                .decl("font-size", "2rem")
                .decl("text-align", "center")
                .decl("margin-bottom", "2rem"),
        )
        .rule(
            Rule::for_class("highlight-list")
                .decl("list-style", "none")
                .decl("max-width", "640px")
                .decl("margin", "0 auto")
                .decl("padding", "0"),
        )
        .rule(
            Rule::for_class("highlight-item")
                .decl("padding", "0.75rem 1rem")
                .decl("border-left", "3px solid #2563eb")
                .decl("margin-bottom", "0.5rem")
                .decl("background", "#f3f4f6"),
        )
        .rule(Rule::for_class("features").decl("padding", "0 2rem"));

    for rule in card_rules() {
        sheet.add_rule(rule);
    }
    sheet.media(
        MediaBlock::new("max-width: 768px")
            .rule(
                Rule::for_class("hero")
                    .decl("min-height", "40vh")
                    .decl("padding", "3rem 1rem"),
            )
            .rule(Rule::for_class("hero-title").decl("font-size", "2rem")),
    )
}

fn contact_stylesheet() -> Stylesheet {
    let mut sheet = Stylesheet::new().rule(
        Rule::for_class("contact")
            .decl("max-width", "960px")
            .decl("margin", "0 auto")
            .decl("padding", "3rem 2rem"),
    );
    for rule in page_header_rules() {
        sheet.add_rule(rule);
    }
    sheet.add_rule(
        Rule::for_class("contact-layout")
            .decl("display", "grid")
            .decl("grid-template-columns", "2fr 1fr")
            .decl("gap", "2rem"),
    );
    sheet.add_rule(
        Rule::for_class("contact-form")
            .decl("display", "flex")
            .decl("flex-direction", "column")
            .decl("gap", "1rem"),
    );
    for rule in form_rules() {
        sheet.add_rule(rule);
    }
    sheet.add_rule(
        Rule::for_class("form-textarea")
            .decl("padding", "0.625rem 0.75rem")
            .decl("border", "1px solid #d1d5db")
            .decl("border-radius", "0.375rem")
            .decl("font-size", "1rem")
            .decl("resize", "vertical")
            .decl("min-height", "8rem"),
    );
    sheet.add_rule(
        Rule::for_class("form-submit")
            .decl("padding", "0.75rem 1.5rem")
            .decl("background", "#2563eb")
            .decl("color", "#ffffff")
            .decl("border", "none")
            .decl("border-radius", "0.375rem")
            .decl("font-weight", "600")
            .decl("cursor", "pointer"),
    );
    sheet.add_rule(Rule::for_class_state("form-submit", ":hover").decl("background", "#1d4ed8"));
    sheet.add_rule(
        Rule::for_class("contact-details")
            .decl("padding", "1.5rem")
            .decl("background", "#f9fafb")
            .decl("border-radius", "0.5rem")
            .decl("align-self", "start"),
    );
    sheet.add_rule(
        Rule::for_class("section-heading")
            .decl("font-size", "1.25rem")
            .decl("margin-bottom", "1rem"),
    );
    for rule in detail_rules() {
        sheet.add_rule(rule);
    }
    sheet.media(
        MediaBlock::new("max-width: 768px")
            .rule(Rule::for_class("contact-layout").decl("grid-template-columns", "1fr")),
    )
}

fn gallery_stylesheet() -> Stylesheet {
    let mut sheet = Stylesheet::new().rule(
        Rule::for_class("gallery")
            .decl("max-width", "1080px")
            .decl("margin", "0 auto")
            .decl("padding", "3rem 2rem"),
    );
    for rule in page_header_rules() {
        sheet.add_rule(rule);
    }
    sheet.add_rule(
        Rule::for_class("gallery-grid")
            .decl("display", "grid")
            .decl("grid-template-columns", "repeat(auto-fill, minmax(220px, 1fr))")
            .decl("gap", "1rem"),
    );
    sheet.add_rule(
        Rule::for_class("gallery-item")
            .decl("margin", "0")
            .decl("border", "1px solid #e5e7eb")
            .decl("border-radius", "0.5rem")
            .decl("overflow", "hidden"),
    );
    sheet.add_rule(
        Rule::for_class("gallery-placeholder")
            .decl("aspect-ratio", "4 / 3")
            .decl("background", "linear-gradient(135deg, #e5e7eb 0%, #d1d5db 100%)"),
    );
    sheet.add_rule(
        Rule::for_class("gallery-caption")
            .decl("padding", "0.625rem 0.75rem")
            .decl("font-size", "0.875rem")
            .decl("color", "#374151"),
    );
    sheet.add_rule(
        Rule::for_class("gallery-empty")
            .decl("grid-column", "1 / -1")
            .decl("text-align", "center")
            .decl("color", "#6b7280")
            .decl("padding", "3rem 0"),
    );
    sheet
}

fn testimonials_stylesheet() -> Stylesheet {
    let mut sheet = Stylesheet::new().rule(
        Rule::for_class("testimonials")
            .decl("max-width", "960px")
            .decl("margin", "0 auto")
            .decl("padding", "3rem 2rem"),
    );
    for rule in page_header_rules() {
        sheet.add_rule(rule);
    }
    sheet.add_rule(
        Rule::for_class("testimonial-grid")
            .decl("display", "grid")
            .decl("grid-template-columns", "repeat(auto-fit, minmax(280px, 1fr))")
            .decl("gap", "1.5rem"),
    );
    sheet.add_rule(
        Rule::for_class("testimonial-card")
            .decl("margin", "0")
            .decl("padding", "1.5rem")
            .decl("background", "#f9fafb")
            .decl("border", "1px solid #e5e7eb")
            .decl("border-radius", "0.5rem"),
    );
    sheet.add_rule(
        Rule::for_class("testimonial-quote")
            .decl("font-style", "italic")
            .decl("line-height", "1.6")
            .decl("margin-bottom", "1rem"),
    );
    sheet.add_rule(
        Rule::for_class("testimonial-author")
            .decl("font-weight", "600")
            .decl("color", "#374151"),
    );
    sheet.add_rule(
        Rule::for_class("testimonial-empty")
            .decl("text-align", "center")
            .decl("color", "#6b7280")
            .decl("padding", "3rem 0"),
    );
    sheet
}

fn auth_stylesheet(page: Page) -> Stylesheet {
    let mut sheet = Stylesheet::new().rule(
        Rule::for_class(page.as_str())
            .decl("display", "flex")
            .decl("justify-content", "center")
            .decl("padding", "4rem 2rem"),
    );
    sheet.add_rule(
        Rule::for_class("auth-card")
            .decl("width", "100%")
            .decl("max-width", "420px")
            .decl("padding", "2rem")
            .decl("border", "1px solid #e5e7eb")
            .decl("border-radius", "0.75rem")
            .decl("background", "#ffffff")
            .decl("box-shadow", "0 4px 16px rgba(0, 0, 0, 0.06)"),
    );
    sheet.add_rule(
        Rule::for_class("auth-title")
            .decl("font-size", "1.75rem")
            .decl("margin-bottom", "0.5rem"),
    );
    sheet.add_rule(
        Rule::for_class("auth-intro")
            .decl("color", "#4b5563")
            .decl("margin-bottom", "1.5rem"),
    );
    sheet.add_rule(
        Rule::for_class("auth-form")
            .decl("display", "flex")
            .decl("flex-direction", "column")
            .decl("gap", "1rem"),
    );
    for rule in form_rules() {
        sheet.add_rule(rule);
    }
    sheet.add_rule(
        Rule::for_class("auth-submit")
            .decl("padding", "0.75rem 1.5rem")
            .decl("background", "#2563eb")
            .decl("color", "#ffffff")
            .decl("border", "none")
            .decl("border-radius", "0.375rem")
            .decl("font-weight", "600")
            .decl("cursor", "pointer"),
    );
    sheet.add_rule(Rule::for_class_state("auth-submit", ":hover").decl("background", "#1d4ed8"));
    sheet.add_rule(
        Rule::for_class("auth-alt")
            .decl("margin-top", "1.25rem")
            .decl("font-size", "0.875rem")
            .decl("color", "#4b5563")
            .decl("text-align", "center"),
    );
    sheet.add_rule(
        Rule::for_class("auth-link")
            .decl("color", "#2563eb")
            .decl("font-weight", "600")
            .decl("text-decoration", "none"),
    );
    sheet
}

fn navbar_stylesheet() -> Stylesheet {
    Stylesheet::new()
        .rule(
            Rule::for_class("navbar")
                .decl("display", "flex")
                .decl("align-items", "center")
                .decl("justify-content", "space-between")
                .decl("padding", "1rem 2rem")
                .decl("background", "#111827"),
        )
        .rule(
            Rule::for_class("navbar-brand")
                .decl("color", "#f9fafb")
                .decl("font-size", "1.25rem")
                .decl("font-weight", "700")
                .decl("text-decoration", "none"),
        )
        .rule(
            Rule::for_class("navbar-links")
                .decl("display", "flex")
                .decl("gap", "1.5rem")
                .decl("list-style", "none")
                .decl("margin", "0")
                .decl("padding", "0"),
        )
        .rule(Rule::for_class("navbar-item").decl("margin", "0"))
        .rule(
            Rule::for_class("navbar-link")
                .decl("color", "#d1d5db")
                .decl("text-decoration", "none")
                .decl("font-size", "0.9375rem"),
        )
        .rule(Rule::for_class_state("navbar-link", ":hover").decl("color", "#ffffff"))
        .media(
            MediaBlock::new("max-width: 768px")
                .rule(
                    Rule::for_class("navbar")
                        .decl("flex-direction", "column")
                        .decl("gap", "0.75rem"),
                )
                .rule(
                    Rule::for_class("navbar-links")
                        .decl("flex-wrap", "wrap")
                        .decl("justify-content", "center")
                        .decl("gap", "1rem"),
                ),
        )
}

fn app_stylesheet() -> Stylesheet {
    Stylesheet::new()
        .rule(
            Rule::for_class("app")
                .decl("min-height", "100vh")
                .decl("display", "flex")
                .decl("flex-direction", "column")
                .decl("background", "#ffffff")
                .decl("color", "#111827")
                .decl(
                    "font-family",
                    "'Segoe UI', 'Helvetica Neue', Arial, sans-serif",
                ),
        )
        .rule(Rule::for_class("app-main").decl("flex", "1"))
}

// ── Shared rule fragments ────────────────────────────────────────────────────

fn page_header_rules() -> Vec<Rule> {
    vec![
        Rule::for_class("page-header")
            .decl("text-align", "center")
            .decl("margin-bottom", "2.5rem"),
        Rule::for_class("page-title")
            .decl("font-size", "2.25rem")
            .decl("margin-bottom", "0.75rem"),
        Rule::for_class("page-intro")
            .decl("font-size", "1.125rem")
            .decl("color", "#4b5563")
            .decl("max-width", "640px")
            .decl("margin", "0 auto")
            .decl("line-height", "1.6"),
    ]
}

fn card_rules() -> Vec<Rule> {
    vec![
        Rule::for_class("card-grid")
            .decl("display", "grid")
            .decl("grid-template-columns", "repeat(auto-fit, minmax(240px, 1fr))")
            .decl("gap", "1.5rem")
            .decl("max-width", "960px")
            .decl("margin", "0 auto"),
        Rule::for_class("card")
            .decl("padding", "1.5rem")
            .decl("border", "1px solid #e5e7eb")
            .decl("border-radius", "0.5rem")
            .decl("background", "#ffffff")
            .decl("box-shadow", "0 1px 2px rgba(0, 0, 0, 0.05)"),
        Rule::for_class_state("card", ":hover").decl("box-shadow", "0 4px 12px rgba(0, 0, 0, 0.08)"),
        Rule::for_class("card-title")
            .decl("font-size", "1.125rem")
            .decl("margin-bottom", "0.5rem"),
        Rule::for_class("card-body")
            .decl("color", "#4b5563")
            .decl("line-height", "1.6"),
    ]
}

fn detail_rules() -> Vec<Rule> {
    vec![
        Rule::for_class("detail-list")
            .decl("list-style", "none")
            .decl("padding", "0"),
        Rule::for_class("detail-item")
            .decl("padding", "0.75rem 1rem")
            .decl("border-left", "3px solid #2563eb")
            .decl("margin-bottom", "0.5rem")
            .decl("background", "#f3f4f6"),
    ]
}

fn form_rules() -> Vec<Rule> {
    vec![
        Rule::for_class("form-field")
            .decl("display", "flex")
            .decl("flex-direction", "column")
            .decl("gap", "0.375rem"),
        Rule::for_class("form-label")
            .decl("font-weight", "600")
            .decl("font-size", "0.875rem"),
        Rule::for_class("form-input")
            .decl("padding", "0.625rem 0.75rem")
            .decl("border", "1px solid #d1d5db")
            .decl("border-radius", "0.375rem")
            .decl("font-size", "1rem"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registry::{self, StyleSource};
    use crate::domain::validation::DomainValidator;

    const ALL_PAGES: [Page; 16] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Contact,
        Page::Gallery,
        Page::Testimonials,
        Page::Login,
        Page::Register,
        Page::Profile,
        Page::Reviews,
        Page::Chat,
        Page::Search,
        Page::Payments,
        Page::Booking,
        Page::Analytics,
        Page::Locations,
    ];

    fn sample_content() -> PageContent {
        PageContent {
            title: "Sample Title".into(),
            subtitle: "A subtitle with enough words to look real.".into(),
            items: vec!["First point".into(), "Second point".into()],
            cards: vec![
                ContentCard {
                    title: "Card One".into(),
                    body: "Body one.".into(),
                },
                ContentCard {
                    title: "Card Two".into(),
                    body: "Body two.".into(),
                },
            ],
        }
    }

    fn full_nav() -> NavigationModel {
        NavigationModel::from_pages(&ALL_PAGES)
    }

    // ── coverage: the load-bearing property ──────────────────────────────────

    #[test]
    fn every_page_layout_is_fully_styled() {
        let nav = full_nav();
        let shared = shared_stylesheet();
        for page in ALL_PAGES {
            let artifact = compose_page(page, &sample_content(), &nav, MarkupFlavor::React);
            let sheet = artifact.stylesheet.as_ref().unwrap_or(&shared);
            DomainValidator::validate_coverage(&artifact.component, sheet)
                .unwrap_or_else(|e| panic!("{page}: {e}"));
        }
    }

    #[test]
    fn empty_state_layouts_are_fully_styled_too() {
        let nav = NavigationModel::from_pages(&[Page::Home, Page::About, Page::Services]);
        let bare = PageContent {
            title: "T".into(),
            subtitle: "S".into(),
            items: vec![],
            cards: vec![],
        };
        for page in ALL_PAGES {
            let artifact = compose_page(page, &bare, &nav, MarkupFlavor::React);
            let shared = shared_stylesheet();
            let sheet = artifact.stylesheet.as_ref().unwrap_or(&shared);
            DomainValidator::validate_coverage(&artifact.component, sheet)
                .unwrap_or_else(|e| panic!("{page}: {e}"));
        }
    }

    #[test]
    fn navbar_and_router_are_fully_styled() {
        let nav = full_nav();
        let (navbar, navbar_css) = compose_navbar(&nav, "Acme", MarkupFlavor::React);
        DomainValidator::validate_coverage(&navbar, &navbar_css).unwrap();

        let (app, app_css) = compose_router(&nav, MarkupFlavor::React);
        DomainValidator::validate_coverage(&app, &app_css).unwrap();
    }

    // ── stylesheet wiring ────────────────────────────────────────────────────

    #[test]
    fn own_stylesheet_pages_match_the_registry() {
        let nav = full_nav();
        for page in ALL_PAGES {
            let artifact = compose_page(page, &sample_content(), &nav, MarkupFlavor::React);
            let expect_own = registry::style_source(page) == StyleSource::Own;
            assert_eq!(
                artifact.stylesheet.is_some(),
                expect_own,
                "{page} disagrees with the registry about its style source"
            );
        }
    }

    #[test]
    fn pages_import_the_stylesheet_they_are_checked_against() {
        let nav = full_nav();
        let home = compose_page(Page::Home, &sample_content(), &nav, MarkupFlavor::React);
        assert_eq!(home.component.stylesheet_import(), Some("./Home.css"));

        let about = compose_page(Page::About, &sample_content(), &nav, MarkupFlavor::React);
        assert_eq!(about.component.stylesheet_import(), Some("./pages.css"));
        assert!(about.uses_shared_stylesheet());
    }

    // ── hero call-to-action ──────────────────────────────────────────────────

    #[test]
    fn hero_cta_targets_contact_when_present() {
        let nav = NavigationModel::from_pages(&[Page::Home, Page::About, Page::Contact]);
        let artifact = compose_page(Page::Home, &sample_content(), &nav, MarkupFlavor::React);
        let text = artifact.component.render();
        assert!(text.contains(r#"to="/contact""#));
        assert!(text.contains("Get in Touch"));
    }

    #[test]
    fn hero_cta_falls_back_to_about() {
        let nav = NavigationModel::from_pages(&[Page::Home, Page::About, Page::Services]);
        let artifact = compose_page(Page::Home, &sample_content(), &nav, MarkupFlavor::React);
        let text = artifact.component.render();
        assert!(text.contains(r#"to="/about""#));
        assert!(text.contains("Learn More"));
    }

    // ── navbar ───────────────────────────────────────────────────────────────

    #[test]
    fn navbar_renders_one_link_per_page_plus_brand() {
        let nav = NavigationModel::from_pages(&[
            Page::Home,
            Page::About,
            Page::Services,
            Page::Contact,
            Page::Gallery,
        ]);
        let (navbar, _) = compose_navbar(&nav, "Corner Bakery", MarkupFlavor::React);
        let text = navbar.render();
        assert_eq!(text.matches("navbar-link\"").count(), 5);
        assert!(text.contains("Corner Bakery"));
        assert!(text.contains(r#"to="/gallery""#));
    }

    // ── router ───────────────────────────────────────────────────────────────

    #[test]
    fn router_renders_one_route_per_page() {
        let nav = NavigationModel::from_pages(&[
            Page::Home,
            Page::About,
            Page::Services,
            Page::Contact,
            Page::Gallery,
        ]);
        let (app, _) = compose_router(&nav, MarkupFlavor::React);
        let text = app.render();
        assert_eq!(text.matches("<Route ").count(), 5);
        assert!(text.contains(r#"<Route path="/" element={<Home />} />"#));
        assert!(text.contains(r#"<Route path="/gallery" element={<Gallery />} />"#));
        assert!(text.contains("import Gallery from './pages/Gallery';"));
        assert!(text.contains("import Navbar from './components/Navbar';"));
    }

    #[test]
    fn router_and_navbar_walk_the_same_entries() {
        let nav = NavigationModel::from_pages(&[Page::Home, Page::About, Page::Locations]);
        let (navbar, _) = compose_navbar(&nav, "Acme", MarkupFlavor::React);
        let (app, _) = compose_router(&nav, MarkupFlavor::React);
        let navbar_text = navbar.render();
        let app_text = app.render();
        for entry in nav.entries() {
            assert!(navbar_text.contains(&format!(r#"to="{}""#, entry.path)));
            assert!(app_text.contains(&format!(r#"path="{}""#, entry.path)));
        }
    }

    // ── auth pages ───────────────────────────────────────────────────────────

    #[test]
    fn auth_pages_cross_link_each_other() {
        let nav = full_nav();
        let login = compose_page(Page::Login, &sample_content(), &nav, MarkupFlavor::React);
        assert!(login.component.render().contains(r#"to="/register""#));

        let register = compose_page(Page::Register, &sample_content(), &nav, MarkupFlavor::React);
        let text = register.component.render();
        assert!(text.contains(r#"to="/login""#));
        assert!(text.contains(r#"id="name""#));
    }

    // ── business copy placement ──────────────────────────────────────────────

    #[test]
    fn resolved_copy_lands_in_the_markup() {
        let nav = full_nav();
        let artifact = compose_page(Page::Home, &sample_content(), &nav, MarkupFlavor::React);
        let text = artifact.component.render();
        assert!(text.contains("Sample Title"));
        assert!(text.contains("A subtitle with enough words to look real."));
        assert!(text.contains("First point"));
        assert!(text.contains("Card Two"));
    }

    #[test]
    fn component_names_follow_the_page() {
        let nav = full_nav();
        for page in [Page::Home, Page::Reviews, Page::Locations] {
            let artifact = compose_page(page, &sample_content(), &nav, MarkupFlavor::React);
            assert_eq!(artifact.component.name(), page.component_name());
            assert!(
                artifact
                    .component
                    .render()
                    .contains(&format!("export default {};", page.component_name()))
            );
        }
    }
}
