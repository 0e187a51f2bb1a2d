//! Page shell: serializes a [`PageView`] into a complete HTML document.

use std::fmt::Write as _;

use folio_renderer::escape_html;

use crate::view::{Footer, PageView};

impl PageView {
    /// Complete HTML document for this view.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(self.content.html.len() + 1024);

        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        let _ = writeln!(out, "<title>{}</title>", escape_html(&self.title));
        if let Some(description) = &self.description {
            let _ = writeln!(
                out,
                r#"<meta name="description" content="{}">"#,
                escape_html(description)
            );
        }
        out.push_str("<link rel=\"stylesheet\" href=\"/assets/site.css\">\n");
        out.push_str("</head>\n<body>\n");

        self.write_nav(&mut out);

        let _ = writeln!(
            out,
            r#"<main id="content" aria-busy="{}">"#,
            self.content.busy
        );
        out.push_str(&self.content.html);
        out.push_str("</main>\n");

        write_footer(&self.footer, &mut out);

        out.push_str("</body>\n</html>\n");
        out
    }

    fn write_nav(&self, out: &mut String) {
        out.push_str("<header class=\"site-header\">\n<nav class=\"site-nav\">\n");
        for link in &self.nav_links {
            if link.active {
                let _ = writeln!(
                    out,
                    r#"<a class="nav-link is-active" href="{}" aria-current="page">{}</a>"#,
                    escape_html(&link.href),
                    escape_html(&link.label)
                );
            } else {
                let _ = writeln!(
                    out,
                    r#"<a class="nav-link" href="{}">{}</a>"#,
                    escape_html(&link.href),
                    escape_html(&link.label)
                );
            }
        }
        out.push_str("</nav>\n</header>\n");
    }
}

fn write_footer(footer: &Footer, out: &mut String) {
    out.push_str("<footer class=\"site-footer\">\n");
    let _ = writeln!(
        out,
        r#"<p class="footer-entity-name">{}</p>"#,
        escape_html(&footer.entity_name)
    );
    if let Some(state) = &footer.state {
        let _ = writeln!(out, r#"<p class="footer-state">{}</p>"#, escape_html(state));
    }
    if let Some(email) = &footer.email {
        let email = escape_html(email);
        let _ = writeln!(
            out,
            r#"<a class="footer-email" href="mailto:{email}">{email}</a>"#
        );
    }
    if let Some(copyright) = &footer.copyright {
        let _ = writeln!(
            out,
            r#"<p class="footer-copyright">{}</p>"#,
            escape_html(copyright)
        );
    }
    out.push_str("</footer>\n");
}
