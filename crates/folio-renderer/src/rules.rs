//! Rendering rules, one per registered section type.
//!
//! Each rule writes the inner markup of its section container. Rules never
//! fail: absent fields simply produce no markup.

use folio_content::{LEGAL_INDEX_PATH, Section};

use crate::escape::escape_html;
use crate::html::{push_element, push_label, push_link, push_optional, push_pair};

/// Default call-to-action destination when a `link` section has no `url`.
const DEFAULT_LINK_URL: &str = "#";

/// Default label of a `back-link` section.
const DEFAULT_BACK_LABEL: &str = "Back";

pub(crate) fn hero(section: &Section, out: &mut String) {
    heading_block(section, "hero", out);
}

pub(crate) fn page_header(section: &Section, out: &mut String) {
    heading_block(section, "page-header", out);
}

/// Heading plus optional subheading, classed by `block`.
fn heading_block(section: &Section, block: &str, out: &mut String) {
    push_optional(
        out,
        "h1",
        &format!("{block}__heading"),
        section.text("heading").as_deref(),
    );
    push_optional(
        out,
        "p",
        &format!("{block}__subheading"),
        section.text("subheading").as_deref(),
    );
}

pub(crate) fn summary(section: &Section, out: &mut String) {
    push_label(out, section.label().as_deref());
    pairs(section, "summary", "label", "value", out);
}

pub(crate) fn definition_list(section: &Section, out: &mut String) {
    push_label(out, section.label().as_deref());
    pairs(section, "definition-list", "term", "definition", out);
}

/// `<dl>` of escaped term/description pairs taken from `items`.
fn pairs(section: &Section, block: &str, term_key: &str, desc_key: &str, out: &mut String) {
    let mut items = section.items().peekable();
    if items.peek().is_none() {
        return;
    }

    out.push_str(r#"<dl class=""#);
    out.push_str(block);
    out.push_str(r#"__list">"#);
    for item in items {
        let desc = escape_html(&item.text(desc_key).unwrap_or_default());
        push_pair(
            out,
            &format!("{block}__item"),
            item.text(term_key).as_deref(),
            &desc,
        );
    }
    out.push_str("</dl>");
}

pub(crate) fn statement(section: &Section, out: &mut String) {
    push_optional(out, "p", "statement__body", section.text("body").as_deref());
}

pub(crate) fn text_block(section: &Section, out: &mut String) {
    push_label(out, section.label().as_deref());
    if let Some(body) = section.text("body") {
        let escaped = escape_html(body.trim_end_matches('\n'));
        out.push_str(r#"<p class="text-block__body">"#);
        out.push_str(&escaped.replace('\n', "<br>"));
        out.push_str("</p>");
    }
}

pub(crate) fn activity_list(section: &Section, out: &mut String) {
    push_label(out, section.label().as_deref());
    let mut items = section.items().peekable();
    if items.peek().is_none() {
        return;
    }

    out.push_str(r#"<div class="activity-list__items">"#);
    for item in items {
        out.push_str(r#"<article class="activity">"#);
        push_optional(out, "h3", "activity__heading", item.text("heading").as_deref());
        push_optional(
            out,
            "p",
            "activity__description",
            item.text("description").as_deref(),
        );
        out.push_str("</article>");
    }
    out.push_str("</div>");
}

pub(crate) fn persons(section: &Section, out: &mut String) {
    push_label(out, section.label().as_deref());
    let mut items = section.items().peekable();
    if items.peek().is_none() {
        return;
    }

    out.push_str(r#"<div class="persons__items">"#);
    for item in items {
        out.push_str(r#"<article class="person">"#);
        push_optional(out, "h3", "person__name", item.text("name").as_deref());
        push_optional(out, "p", "person__title", item.text("title").as_deref());
        push_optional(out, "p", "person__bio", item.text("bio").as_deref());
        out.push_str("</article>");
    }
    out.push_str("</div>");
}

pub(crate) fn contact_block(section: &Section, out: &mut String) {
    push_label(out, section.label().as_deref());
    let mut items = section.items().peekable();
    if items.peek().is_none() {
        return;
    }

    out.push_str(r#"<dl class="contact-block__list">"#);
    for item in items {
        let value = item.text("value").unwrap_or_default();
        let mut dd = String::new();
        match item.text("href") {
            Some(href) => push_link(&mut dd, None, &href, &value, false),
            None => dd.push_str(&escape_html(&value)),
        }
        push_pair(out, "contact-block__item", item.text("method").as_deref(), &dd);
    }
    out.push_str("</dl>");
}

pub(crate) fn link(section: &Section, out: &mut String) {
    let url = section
        .text("url")
        .unwrap_or_else(|| DEFAULT_LINK_URL.to_owned());
    let label = section.label().unwrap_or_else(|| url.clone());

    out.push_str(r#"<p class="link__wrapper">"#);
    push_link(
        out,
        Some("link__anchor"),
        &url,
        &label,
        section.flag("external"),
    );
    out.push_str("</p>");
}

pub(crate) fn back_link(section: &Section, out: &mut String) {
    let url = section
        .text("url")
        .unwrap_or_else(|| LEGAL_INDEX_PATH.to_owned());
    let label = section
        .label()
        .unwrap_or_else(|| DEFAULT_BACK_LABEL.to_owned());

    push_link(out, Some("back-link__anchor"), &url, &label, false);
}

pub(crate) fn legal_nav(section: &Section, out: &mut String) {
    push_label(out, section.label().as_deref());
    let mut items = section.items().peekable();
    if items.peek().is_none() {
        return;
    }

    out.push_str(r#"<ul class="legal-nav__list">"#);
    for item in items {
        let url = item
            .text("url")
            .unwrap_or_else(|| DEFAULT_LINK_URL.to_owned());
        let label = item.text("label").unwrap_or_else(|| url.clone());
        out.push_str("<li>");
        push_link(out, None, &url, &label, false);
        out.push_str("</li>");
    }
    out.push_str("</ul>");
}

pub(crate) fn legal_document(section: &Section, out: &mut String) {
    if let Some(updated) = section.text("last_updated") {
        push_element(
            out,
            "p",
            "legal-document__updated",
            &format!("Last updated: {updated}"),
        );
    }
    if let Some(body) = section.text("body") {
        // Authored legal markup is emitted as-is.
        out.push_str(r#"<div class="legal-document__body">"#);
        out.push_str(&body);
        out.push_str("</div>");
    }
}

/// Generic rendering for unregistered types: escaped `body` or nothing.
pub(crate) fn fallback(section: &Section, out: &mut String) {
    push_optional(out, "p", "section__body", section.text("body").as_deref());
}
