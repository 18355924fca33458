use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_defaults() {
    let state = UiState::default();
    assert!(!state.header_scrolled);
    assert!(!state.nav_open);
    assert_eq!(state.preloader, PreloaderPhase::Loading);
    assert_eq!(state.active_section, None);
}

// =============================================================
// Header scroll threshold
// =============================================================

#[test]
fn header_compacts_past_the_threshold() {
    let mut state = UiState::default();
    assert!(state.on_scroll(51.0));
    assert!(state.header_scrolled);
}

#[test]
fn header_stays_expanded_at_the_threshold() {
    let mut state = UiState::default();
    assert!(!state.on_scroll(50.0));
    assert!(!state.header_scrolled);
    assert!(!state.on_scroll(0.0));
}

#[test]
fn on_scroll_reports_only_transitions() {
    let mut state = UiState::default();
    assert!(state.on_scroll(120.0));
    assert!(!state.on_scroll(300.0));
    assert!(state.on_scroll(10.0));
    assert!(!state.header_scrolled);
}

// =============================================================
// Mobile navigation
// =============================================================

#[test]
fn toggle_nav_flips_the_menu() {
    let mut state = UiState::default();
    state.toggle_nav();
    assert!(state.nav_open);
    state.toggle_nav();
    assert!(!state.nav_open);
}

#[test]
fn follow_link_activates_section_and_closes_menu() {
    let mut state = UiState::default();
    state.toggle_nav();
    state.follow_link("projects");
    assert_eq!(state.active_section, Some("projects"));
    assert!(!state.nav_open);
}

// =============================================================
// Preloader phases
// =============================================================

#[test]
fn preloader_advances_through_hiding_to_hidden() {
    let phase = PreloaderPhase::Loading;
    let phase = phase.advance();
    assert_eq!(phase, PreloaderPhase::Hiding);
    let phase = phase.advance();
    assert_eq!(phase, PreloaderPhase::Hidden);
    assert_eq!(phase.advance(), PreloaderPhase::Hidden);
}

// =============================================================
// Reveal zone
// =============================================================

#[test]
fn element_below_the_band_is_not_revealed() {
    // Viewport 1000px: band ends at 800px.
    assert!(!in_reveal_zone(801.0, 1200.0, 1000.0));
}

#[test]
fn element_inside_the_band_is_revealed() {
    assert!(in_reveal_zone(800.0, 1100.0, 1000.0));
    assert!(in_reveal_zone(100.0, 400.0, 1000.0));
}

#[test]
fn element_scrolled_fully_past_is_not_revealed() {
    assert!(!in_reveal_zone(-500.0, -10.0, 1000.0));
}

#[test]
fn element_straddling_the_viewport_top_is_revealed() {
    assert!(in_reveal_zone(-200.0, 300.0, 1000.0));
}
