use super::*;

// =============================================================
// ThemePreference boundary decode
// =============================================================

#[test]
fn preference_decodes_dark_and_light() {
    assert_eq!(
        ThemePreference::from_stored(Some("dark")),
        ThemePreference::Dark
    );
    assert_eq!(
        ThemePreference::from_stored(Some("light")),
        ThemePreference::Light
    );
}

#[test]
fn preference_decodes_absent_as_unset() {
    assert_eq!(ThemePreference::from_stored(None), ThemePreference::Unset);
}

#[test]
fn preference_decodes_garbage_as_unset() {
    assert_eq!(
        ThemePreference::from_stored(Some("solarized")),
        ThemePreference::Unset
    );
    assert_eq!(
        ThemePreference::from_stored(Some("")),
        ThemePreference::Unset
    );
    assert_eq!(
        ThemePreference::from_stored(Some("DARK")),
        ThemePreference::Unset
    );
}

#[test]
fn preference_round_trips_through_storage_literal() {
    for pref in [ThemePreference::Dark, ThemePreference::Light] {
        assert_eq!(ThemePreference::from_stored(pref.as_stored()), pref);
    }
    assert_eq!(ThemePreference::Unset.as_stored(), None);
}

// =============================================================
// EffectiveTheme markers
// =============================================================

#[test]
fn marker_classes_are_mutually_exclusive() {
    for theme in [EffectiveTheme::Dark, EffectiveTheme::Light] {
        assert_ne!(theme.marker_class(), theme.cleared_class());
    }
    assert_eq!(EffectiveTheme::Dark.marker_class(), "dark-mode");
    assert_eq!(EffectiveTheme::Light.marker_class(), "light-mode");
}

#[test]
fn cleared_class_is_the_inverse_marker() {
    assert_eq!(
        EffectiveTheme::Dark.cleared_class(),
        EffectiveTheme::Light.marker_class()
    );
    assert_eq!(
        EffectiveTheme::Light.cleared_class(),
        EffectiveTheme::Dark.marker_class()
    );
}

#[test]
fn toggle_label_names_the_target_mode() {
    assert_eq!(EffectiveTheme::Dark.toggle_label(), "Switch to light mode");
    assert_eq!(EffectiveTheme::Light.toggle_label(), "Switch to dark mode");
}

// =============================================================
// initialize: precedence order
// =============================================================

#[test]
fn initialize_stored_dark_wins_over_light_system() {
    let c = ThemeController::initialize(Some("dark"), false);
    assert_eq!(c.effective(), EffectiveTheme::Dark);
    assert_eq!(c.preference(), ThemePreference::Dark);
}

#[test]
fn initialize_stored_light_wins_over_dark_system() {
    let c = ThemeController::initialize(Some("light"), true);
    assert_eq!(c.effective(), EffectiveTheme::Light);
    assert_eq!(c.preference(), ThemePreference::Light);
}

#[test]
fn initialize_unset_follows_system_dark() {
    let c = ThemeController::initialize(None, true);
    assert_eq!(c.effective(), EffectiveTheme::Dark);
    assert_eq!(c.preference(), ThemePreference::Unset);
}

#[test]
fn initialize_unset_defaults_light() {
    let c = ThemeController::initialize(None, false);
    assert_eq!(c.effective(), EffectiveTheme::Light);
}

#[test]
fn initialize_is_idempotent_and_never_persists() {
    let first = ThemeController::initialize(Some("dark"), false);
    let second = ThemeController::initialize(Some("dark"), false);
    assert_eq!(first, second);
    // No explicit choice ever produces a write out of initialize: the only
    // storage value the machine emits comes from toggle().
    let unset = ThemeController::initialize(None, true);
    assert_eq!(unset.preference().as_stored(), None);
}

// =============================================================
// toggle: inverse law and pinning
// =============================================================

#[test]
fn toggle_inverts_and_round_trips() {
    for (stored, system_dark) in [(None, false), (None, true), (Some("dark"), false)] {
        let mut c = ThemeController::initialize(stored, system_dark);
        let start = c.effective();
        c.toggle();
        assert_eq!(c.effective(), start.inverse());
        c.toggle();
        assert_eq!(c.effective(), start);
    }
}

#[test]
fn toggle_persists_the_new_theme() {
    let mut c = ThemeController::initialize(None, false);
    assert_eq!(c.toggle(), "dark");
    assert_eq!(c.preference(), ThemePreference::Dark);
    assert_eq!(c.toggle(), "light");
    assert_eq!(c.preference(), ThemePreference::Light);
}

#[test]
fn toggle_pins_out_the_system_signal() {
    let mut c = ThemeController::initialize(None, false);
    c.toggle();
    assert!(c.is_pinned());
    let pinned = c.effective();
    for is_dark in [true, false, true] {
        assert!(!c.on_system_preference_change(is_dark));
        assert_eq!(c.effective(), pinned);
    }
}

// =============================================================
// on_system_preference_change while unpinned
// =============================================================

#[test]
fn system_change_applies_while_unpinned() {
    let mut c = ThemeController::initialize(None, false);
    assert!(c.on_system_preference_change(true));
    assert_eq!(c.effective(), EffectiveTheme::Dark);
    assert!(c.on_system_preference_change(false));
    assert_eq!(c.effective(), EffectiveTheme::Light);
}

#[test]
fn system_change_to_current_theme_is_a_no_op() {
    let mut c = ThemeController::initialize(None, true);
    assert!(!c.on_system_preference_change(true));
    assert_eq!(c.effective(), EffectiveTheme::Dark);
}

#[test]
fn system_change_never_sets_a_preference() {
    let mut c = ThemeController::initialize(None, false);
    c.on_system_preference_change(true);
    assert_eq!(c.preference(), ThemePreference::Unset);
}

#[test]
fn stored_preference_ignores_system_changes_from_startup() {
    let mut c = ThemeController::initialize(Some("light"), true);
    assert!(!c.on_system_preference_change(true));
    assert_eq!(c.effective(), EffectiveTheme::Light);
}

// =============================================================
// persistence round-trip (simulated reload)
// =============================================================

#[test]
fn persisted_toggle_survives_reload_without_consulting_the_system() {
    let mut c = ThemeController::initialize(None, false);
    let written = c.toggle();
    assert_eq!(written, "dark");

    // Fresh initialize with the written value; the system signal flips to
    // light and must not matter.
    let reloaded = ThemeController::initialize(Some(written), false);
    assert_eq!(reloaded.effective(), EffectiveTheme::Dark);
    assert!(reloaded.is_pinned());
}

// =============================================================
// end-to-end scenario
// =============================================================

#[test]
fn stored_dark_toggles_to_light_end_to_end() {
    let mut c = ThemeController::initialize(Some("dark"), false);
    assert_eq!(c.effective(), EffectiveTheme::Dark);
    assert_eq!(c.effective().toggle_label(), "Switch to light mode");

    let written = c.toggle();
    assert_eq!(c.effective(), EffectiveTheme::Light);
    assert_eq!(written, "light");
    assert_eq!(c.effective().toggle_label(), "Switch to dark mode");
}
