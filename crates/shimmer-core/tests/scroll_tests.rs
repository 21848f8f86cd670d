// Host-side tests for scroll-spy section selection and nav link matching.

use shimmer_core::{current_section, link_targets};

#[test]
fn picks_the_last_entered_section() {
    let tops = [0.0, 800.0, 1600.0];
    // 850 is past 800 - 200 but short of 1600 - 200.
    assert_eq!(current_section(850.0, &tops), Some(1));
}

#[test]
fn top_of_page_selects_the_first_section() {
    let tops = [0.0, 800.0, 1600.0];
    assert_eq!(current_section(0.0, &tops), Some(0));
}

#[test]
fn deep_scroll_selects_the_final_section() {
    let tops = [0.0, 800.0, 1600.0];
    assert_eq!(current_section(5000.0, &tops), Some(2));
}

#[test]
fn nothing_selected_above_every_threshold() {
    let tops = [300.0, 900.0];
    assert_eq!(current_section(50.0, &tops), None);
    assert_eq!(current_section(0.0, &[]), None);
}

#[test]
fn activation_threshold_is_200px_early() {
    let tops = [800.0];
    assert_eq!(current_section(599.0, &tops), None);
    assert_eq!(current_section(600.0, &tops), Some(0));
}

#[test]
fn later_sections_override_earlier_ones_in_document_order() {
    // Offsets are taken in document order, not sorted; a later section that
    // sits higher on the page still wins once entered.
    let tops = [500.0, 100.0];
    assert_eq!(current_section(450.0, &tops), Some(1));
}

#[test]
fn link_matching_is_substring_containment() {
    assert!(link_targets("#about", "about"));
    assert!(link_targets("/home#contact", "contact"));
    assert!(!link_targets("#contact", "about"));
    // Loose on purpose: overlapping ids cross-match.
    assert!(link_targets("#about-me", "about"));
    // And an empty id matches every link.
    assert!(link_targets("#anything", ""));
}
