//! Scroll-spy selection: which page section is "current" for a scroll
//! offset, and which nav links point at it.

use crate::constants::SCROLL_ACTIVATE_OFFSET;

/// Index of the section the viewport is currently in.
///
/// A section counts as entered once the scroll offset passes
/// [`SCROLL_ACTIVATE_OFFSET`] px above its top; the last entered section in
/// document order wins. `None` when the offset is above every threshold.
pub fn current_section(scroll_y: f64, section_tops: &[f64]) -> Option<usize> {
    let mut current = None;
    for (i, top) in section_tops.iter().enumerate() {
        if scroll_y >= top - SCROLL_ACTIVATE_OFFSET {
            current = Some(i);
        }
    }
    current
}

/// Whether a nav link's href targets the given section id.
///
/// Deliberately loose: plain substring containment, so `#about-me` also
/// matches id `about`, and an empty id matches every link.
pub fn link_targets(href: &str, section_id: &str) -> bool {
    href.contains(section_id)
}
