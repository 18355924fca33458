use super::*;

// =============================================================
// ProjectFilter
// =============================================================

#[test]
fn all_filter_admits_every_category() {
    for category in [
        ProjectCategory::Web,
        ProjectCategory::Mobile,
        ProjectCategory::Design,
    ] {
        assert!(ProjectFilter::All.admits(category));
    }
}

#[test]
fn category_filters_admit_only_their_own() {
    assert!(ProjectFilter::Web.admits(ProjectCategory::Web));
    assert!(!ProjectFilter::Web.admits(ProjectCategory::Mobile));
    assert!(!ProjectFilter::Mobile.admits(ProjectCategory::Design));
    assert!(ProjectFilter::Design.admits(ProjectCategory::Design));
}

#[test]
fn default_filter_is_all() {
    assert_eq!(ProjectFilter::default(), ProjectFilter::All);
}

#[test]
fn filter_labels_are_distinct() {
    let labels: Vec<_> = ProjectFilter::ALL.iter().map(|f| f.label()).collect();
    for (i, a) in labels.iter().enumerate() {
        for b in labels.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

// =============================================================
// FlipCard
// =============================================================

#[test]
fn card_starts_front_side_up() {
    let card = FlipCard::default();
    assert!(!card.flipped);
}

#[test]
fn flip_to_back_then_front_round_trips() {
    let mut card = FlipCard::default();
    assert!(card.flip_to_back());
    assert!(card.flipped);
    card.settle();
    assert!(card.flip_to_front());
    assert!(!card.flipped);
}

#[test]
fn flips_are_locked_while_animating() {
    let mut card = FlipCard::default();
    assert!(card.flip_to_back());
    // Still turning: the return flip must be refused.
    assert!(!card.flip_to_front());
    assert!(card.flipped);
    card.settle();
    assert!(card.flip_to_front());
}

#[test]
fn flip_to_current_face_is_refused() {
    let mut card = FlipCard::default();
    assert!(!card.flip_to_front());
    assert!(card.flip_to_back());
    card.settle();
    assert!(!card.flip_to_back());
}
