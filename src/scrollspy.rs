//! Scroll-spy: derive the active section from the scroll offset and
//! reflect it on the navigation links.
//!
//! A section is "entered" once the scroll offset passes its top minus a
//! third of its height; the lowest entered section wins. At most one nav
//! link carries the active class at any time.

use crate::config::SiteConfig;
use crate::dom::{Document, ElementId};

/// Document-relative placement of one tracked section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionMetrics {
    pub top: f32,
    pub height: f32,
}

struct SpySection {
    element: ElementId,
    /// Sections without an id still participate in the active computation
    /// but can never match a link.
    id: Option<String>,
}

struct SpyLink {
    element: ElementId,
    href: String,
}

pub struct ScrollSpy {
    sections: Vec<SpySection>,
    links: Vec<SpyLink>,
    active_class: String,
}

impl ScrollSpy {
    pub fn register(config: &SiteConfig, doc: &dyn Document) -> Self {
        let sections = doc
            .query_all(&config.spy_sections)
            .into_iter()
            .map(|element| SpySection {
                element,
                id: doc.attribute(element, "id"),
            })
            .collect();
        let links = doc
            .query_all(&config.nav_links)
            .into_iter()
            .map(|element| SpyLink {
                element,
                href: doc.attribute(element, "href").unwrap_or_default(),
            })
            .collect();

        Self {
            sections,
            links,
            active_class: config.active_class.clone(),
        }
    }

    pub fn handle_scroll(&self, doc: &mut dyn Document) {
        let metrics: Vec<SectionMetrics> = self
            .sections
            .iter()
            .map(|s| SectionMetrics {
                top: doc.offset_top(s.element),
                height: doc.client_height(s.element),
            })
            .collect();

        let active_id = active_index(&metrics, doc.scroll_y())
            .and_then(|index| self.sections[index].id.as_deref());

        for link in &self.links {
            let active = active_id.is_some_and(|id| href_references(&link.href, id));
            if active {
                doc.add_class(link.element, &self.active_class);
            } else {
                doc.remove_class(link.element, &self.active_class);
            }
        }
    }
}

/// Index of the active section: the last one (top to bottom) whose
/// threshold `top - height / 3` the scroll offset has reached.
pub fn active_index(sections: &[SectionMetrics], scroll_y: f32) -> Option<usize> {
    let mut active = None;
    for (index, section) in sections.iter().enumerate() {
        if scroll_y >= section.top - section.height / 3.0 {
            active = Some(index);
        }
    }
    active
}

/// Whether a link's href targets the given section id (fragment match).
fn href_references(href: &str, id: &str) -> bool {
    match href.rsplit_once('#') {
        Some((_, fragment)) => fragment == id,
        None => false,
    }
}
