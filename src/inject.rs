//! HTML fragment injection.
//!
//! Converted pages are plain converter output. Before they are published each
//! page goes through an ordered list of text rewrite [`Rule`]s:
//!
//! | Rule | Target | Effect |
//! |---|---|---|
//! | [`Rule::CrossReferences`] | every `{{Name}}` | `<a href="Name.html">Name</a>` |
//! | [`Rule::SiteFavicon`] | first `<head …>` | link to `favicon.svg` |
//! | [`Rule::InlineFavicon`] | first `<head …>` | favicon as a data URI |
//! | [`Rule::InlineStylesheet`] | `<link rel="stylesheet" href="style.css">` | `<style>…</style>` |
//! | [`Rule::Navigation`] | first `<nav …>` | Home / List links + TOC heading |
//! | [`Rule::Footer`] | first `</body>` | "generated by" footer |
//!
//! Wiki pages use [`SITE_RULES`], standalone files use [`STANDALONE_RULES`].
//! A rule whose target is missing leaves the text unchanged, and applying a
//! rule set twice gives the same text as applying it once.
//!
//! Fragments are rendered with [maud](https://maud.lambda.xyz/), so the
//! visible link text of a cross reference is escaped like any other content.

use crate::assets::{FAVICON_FILE, STYLESHEET, favicon_data_uri};
use maud::{Markup, PreEscaped, html};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Generated page list, always written next to the other pages.
pub const LIST_PAGE: &str = "list.html";

const REPOSITORY: &str = env!("CARGO_PKG_REPOSITORY");
const VERSION: &str = env!("CARGO_PKG_VERSION");

static CROSS_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([a-zA-Z0-9_ ]+)\}\}").unwrap());
static HEAD_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<head(?:\s[^>]*)?>").unwrap());
static NAV_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<nav(?:\s[^>]*)?>").unwrap());
static BODY_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</body\s*>").unwrap());
static STYLESHEET_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<link\s+rel="stylesheet"\s+href="style\.css"\s*/?>"#).unwrap()
});

/// A single rewrite applied to a page's HTML text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    CrossReferences,
    SiteFavicon,
    InlineFavicon,
    InlineStylesheet,
    Navigation,
    Footer,
}

/// Rules for pages in a wiki output root.
pub const SITE_RULES: &[Rule] = &[
    Rule::CrossReferences,
    Rule::SiteFavicon,
    Rule::Navigation,
    Rule::Footer,
];

/// Rules for a single self-contained file. There is no site to navigate.
pub const STANDALONE_RULES: &[Rule] = &[Rule::InlineFavicon, Rule::InlineStylesheet, Rule::Footer];

/// Applies rule sets to page text.
#[derive(Debug, Clone)]
pub struct Injector {
    home_href: String,
}

impl Default for Injector {
    fn default() -> Self {
        Self::new("index.html")
    }
}

impl Injector {
    /// `home_page` is the output file name the "Home" link points at.
    pub fn new(home_page: &str) -> Self {
        Self {
            home_href: urlencoding::encode(home_page).into_owned(),
        }
    }

    /// Apply `rules` left to right.
    pub fn apply(&self, rules: &[Rule], html: &str) -> String {
        rules
            .iter()
            .fold(html.to_string(), |text, rule| self.apply_rule(*rule, &text))
    }

    pub fn apply_rule(&self, rule: Rule, html: &str) -> String {
        match rule {
            Rule::CrossReferences => resolve_cross_references(html),
            Rule::SiteFavicon => {
                insert_after_first(html, &HEAD_OPEN, &favicon_link(FAVICON_FILE).into_string())
            }
            Rule::InlineFavicon => insert_after_first(
                html,
                &HEAD_OPEN,
                &favicon_link(&favicon_data_uri()).into_string(),
            ),
            Rule::InlineStylesheet => inline_stylesheet(html),
            Rule::Navigation => {
                insert_after_first(html, &NAV_OPEN, &self.navigation().into_string())
            }
            Rule::Footer => insert_before_first(html, &BODY_CLOSE, &footer().into_string()),
        }
    }

    fn navigation(&self) -> Markup {
        html! {
            div.links {
                ul {
                    li { a href=(self.home_href) { "🏠 Home" } }
                    li { a href=(LIST_PAGE) { "📁 List" } }
                }
            }
            h4 { "Table of Contents" }
        }
    }
}

/// Rewrite every `{{Name}}` into a link to `Name.html`.
///
/// Only names made of ASCII letters, digits, underscores and spaces qualify;
/// anything else (nested braces, punctuation, empty names) is left as is.
pub fn resolve_cross_references(html: &str) -> String {
    CROSS_REFERENCE
        .replace_all(html, |caps: &Captures| cross_reference_link(&caps[1]).into_string())
        .into_owned()
}

fn cross_reference_link(name: &str) -> Markup {
    let href = format!("{}.html", urlencoding::encode(name));
    html! {
        a href=(href) { (name) }
    }
}

fn favicon_link(href: &str) -> Markup {
    html! {
        link rel="icon" href=(href) type="image/svg+xml";
    }
}

fn footer() -> Markup {
    html! {
        footer {
            p {
                "generated by "
                a href=(REPOSITORY) { "mdwi" }
                " "
                small { (VERSION) }
            }
        }
    }
}

fn inline_stylesheet(html: &str) -> String {
    let style = html! { style { (PreEscaped(STYLESHEET)) } }.into_string();
    STYLESHEET_LINK
        .replace_all(html, regex::NoExpand(&style))
        .into_owned()
}

/// Insert `fragment` right after the first match, unless it is already there.
fn insert_after_first(html: &str, target: &Regex, fragment: &str) -> String {
    match target.find(html) {
        Some(m) if !html[m.end()..].starts_with(fragment) => {
            let mut out = String::with_capacity(html.len() + fragment.len());
            out.push_str(&html[..m.end()]);
            out.push_str(fragment);
            out.push_str(&html[m.end()..]);
            out
        }
        _ => html.to_string(),
    }
}

/// Insert `fragment` right before the first match, unless it is already there.
fn insert_before_first(html: &str, target: &Regex, fragment: &str) -> String {
    match target.find(html) {
        Some(m) if !html[..m.start()].ends_with(fragment) => {
            let mut out = String::with_capacity(html.len() + fragment.len());
            out.push_str(&html[..m.start()]);
            out.push_str(fragment);
            out.push_str(&html[m.start()..]);
            out
        }
        _ => html.to_string(),
    }
}
