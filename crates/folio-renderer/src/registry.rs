//! Section renderer registry.
//!
//! Dispatch from a section's declared `type` to its rendering rule. The set
//! of types is closed ([`SectionKind`]); anything else goes to the fallback
//! rule, so every section produces some markup.

use folio_content::Section;

use crate::html::{close_container, open_container};
use crate::rules;

/// Class suffix of the fallback container when a section has no `type`.
const UNKNOWN_KIND: &str = "unknown";

/// Rendering rule: writes the inner markup of a section container.
type Rule = fn(&Section, &mut String);

/// Registered section types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    PageHeader,
    Summary,
    Statement,
    TextBlock,
    DefinitionList,
    ActivityList,
    Persons,
    ContactBlock,
    Link,
    BackLink,
    LegalNav,
    LegalDocument,
}

impl SectionKind {
    /// Every registered kind, in table order.
    pub const ALL: [Self; 13] = [
        Self::Hero,
        Self::PageHeader,
        Self::Summary,
        Self::Statement,
        Self::TextBlock,
        Self::DefinitionList,
        Self::ActivityList,
        Self::Persons,
        Self::ContactBlock,
        Self::Link,
        Self::BackLink,
        Self::LegalNav,
        Self::LegalDocument,
    ];

    /// Type name as written in content documents.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::PageHeader => "page-header",
            Self::Summary => "summary",
            Self::Statement => "statement",
            Self::TextBlock => "text-block",
            Self::DefinitionList => "definition-list",
            Self::ActivityList => "activity-list",
            Self::Persons => "persons",
            Self::ContactBlock => "contact-block",
            Self::Link => "link",
            Self::BackLink => "back-link",
            Self::LegalNav => "legal-nav",
            Self::LegalDocument => "legal-document",
        }
    }

    /// Look up a kind by exact type name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    fn rule(self) -> Rule {
        match self {
            Self::Hero => rules::hero,
            Self::PageHeader => rules::page_header,
            Self::Summary => rules::summary,
            Self::Statement => rules::statement,
            Self::TextBlock => rules::text_block,
            Self::DefinitionList => rules::definition_list,
            Self::ActivityList => rules::activity_list,
            Self::Persons => rules::persons,
            Self::ContactBlock => rules::contact_block,
            Self::Link => rules::link,
            Self::BackLink => rules::back_link,
            Self::LegalNav => rules::legal_nav,
            Self::LegalDocument => rules::legal_document,
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Render one section into a markup fragment.
pub fn render_section(section: &Section) -> String {
    let mut out = String::new();
    write_section(section, &mut out);
    out
}

/// Render sections in order into one fragment.
pub fn render_sections<'a>(sections: impl IntoIterator<Item = &'a Section>) -> String {
    let mut out = String::new();
    for section in sections {
        write_section(section, &mut out);
    }
    out
}

fn write_section(section: &Section, out: &mut String) {
    let id = section.id();
    let declared = section.kind();

    match declared.and_then(SectionKind::from_name) {
        Some(kind) => {
            open_container(out, kind.name(), id.as_deref());
            (kind.rule())(section, out);
        }
        None => {
            let class_kind = declared.filter(|k| !k.is_empty()).unwrap_or(UNKNOWN_KIND);
            open_container(out, class_kind, id.as_deref());
            rules::fallback(section, out);
        }
    }

    close_container(out);
}
