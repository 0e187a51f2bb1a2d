//! Markup building blocks shared by the section rules.
//!
//! Helpers take already-trusted class names and tag names; every piece of
//! document text passes through [`escape_html`] unless the caller uses
//! [`push_link`]'s verbatim `href`.

use crate::escape::escape_html;

/// Open a section container with its type-derived class and optional id.
pub(crate) fn open_container(out: &mut String, kind: &str, id: Option<&str>) {
    out.push_str(r#"<section class="section section--"#);
    out.push_str(&escape_html(kind));
    out.push('"');
    if let Some(id) = id {
        out.push_str(r#" id=""#);
        out.push_str(&escape_html(id));
        out.push('"');
    }
    out.push('>');
}

/// Close a section container.
pub(crate) fn close_container(out: &mut String) {
    out.push_str("</section>\n");
}

/// Write `<tag class="class">text</tag>` with escaped text.
pub(crate) fn push_element(out: &mut String, tag: &str, class: &str, text: &str) {
    out.push('<');
    out.push_str(tag);
    out.push_str(r#" class=""#);
    out.push_str(class);
    out.push_str(r#"">"#);
    out.push_str(&escape_html(text));
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Write the element only when `text` is present.
pub(crate) fn push_optional(out: &mut String, tag: &str, class: &str, text: Option<&str>) {
    if let Some(text) = text {
        push_element(out, tag, class, text);
    }
}

/// Write a section label heading.
pub(crate) fn push_label(out: &mut String, label: Option<&str>) {
    push_optional(out, "h2", "section__label", label);
}

/// Write a `<dt>`/`<dd>` pair wrapped in a `<div>` item.
///
/// `dd_html` is inserted verbatim; callers escape it.
pub(crate) fn push_pair(out: &mut String, class: &str, term: Option<&str>, dd_html: &str) {
    out.push_str(r#"<div class=""#);
    out.push_str(class);
    out.push_str(r#""><dt>"#);
    out.push_str(&escape_html(term.unwrap_or_default()));
    out.push_str("</dt><dd>");
    out.push_str(dd_html);
    out.push_str("</dd></div>");
}

/// Write an anchor. The `href` is a link destination and is not escaped.
pub(crate) fn push_link(
    out: &mut String,
    class: Option<&str>,
    href: &str,
    label: &str,
    external: bool,
) {
    out.push_str("<a");
    if let Some(class) = class {
        out.push_str(r#" class=""#);
        out.push_str(class);
        out.push('"');
    }
    out.push_str(r#" href=""#);
    out.push_str(href);
    out.push('"');
    if external {
        out.push_str(r#" target="_blank" rel="noopener noreferrer""#);
    }
    out.push('>');
    out.push_str(&escape_html(label));
    out.push_str("</a>");
}
