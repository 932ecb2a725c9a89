//! Tests for the suggestion selector component.

use super::*;
use crate::choice::Choice;
use crate::debounce::ElapsedMsg;
use crate::native::{NativeSelect, OptionEntry};
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

fn pool_selector() -> Model {
    let control = NativeSelect::from_entries(vec![
        OptionEntry::new("a", "Apple"),
        OptionEntry::new("b", "Banana"),
        OptionEntry::new("c", "Cherry"),
    ]);
    let mut selector = Model::new(Duration::from_millis(50));
    selector.load_from(&control, &[]);
    selector
}

fn type_char(selector: &mut Model, c: char) -> Option<bubbletea_rs::Cmd> {
    selector.update(key(KeyCode::Char(c)))
}

#[test]
fn load_from_takes_only_unselected_entries() {
    let control = NativeSelect::from_entries(vec![
        OptionEntry::new("a", "Apple").with_selected(true),
        OptionEntry::new("b", "Banana"),
    ]);
    let mut selector = Model::new(Duration::from_millis(50));
    selector.load_from(&control, &[]);
    assert!(!selector.contains("a"));
    assert!(selector.contains("b"));
}

#[test]
fn select_removes_the_candidate_and_closes_the_dropdown() {
    let mut selector = pool_selector();
    let _ = selector.focus();
    assert!(selector.is_open());

    let choice = selector.select("b");
    assert_eq!(choice.map(|c| c.name), Some("Banana".to_string()));
    assert!(!selector.contains("b"));
    assert!(!selector.is_open());
}

#[test]
fn select_round_trips_field_data() {
    let control = NativeSelect::from_entries(vec![OptionEntry::new("a", "Apple")
        .with_dataset("origin", "orchard")]);
    let mut selector = Model::new(Duration::from_millis(50));
    selector.load_from(&control, &["origin".to_string()]);

    let choice = selector.select("a").expect("candidate present");
    assert_eq!(
        choice.data.get("origin").map(String::as_str),
        Some("orchard")
    );
}

#[test]
fn enter_selects_the_highlighted_candidate() {
    let mut selector = pool_selector();
    let _ = selector.focus();
    selector.update(key(KeyCode::Down));
    selector.update(key(KeyCode::Enter));

    let chosen = selector.drain_selected();
    assert_eq!(chosen.len(), 1);
    assert_eq!(chosen[0].id, "b");
    assert!(!selector.contains("b"));
}

#[test]
fn enter_with_a_closed_dropdown_selects_nothing() {
    let mut selector = pool_selector();
    let _ = selector.focus();
    selector.update(Box::new(DismissMsg) as Msg);
    selector.update(key(KeyCode::Enter));
    assert!(selector.drain_selected().is_empty());
    assert_eq!(selector.len(), 3);
}

#[test]
fn typing_schedules_the_debounced_lookup() {
    let lookup: Lookup = Arc::new(|_query| vec![Choice::new("x", "Xylophone")]);
    let mut selector = pool_selector().with_lookup(lookup);
    let _ = selector.focus();

    let cmd = type_char(&mut selector, 'x');
    assert!(cmd.is_some(), "keystroke should arm the debounce timer");
    assert!(!selector.is_loading(), "lookup must wait for the quiet period");
}

#[test]
fn stale_debounce_generations_do_not_fire() {
    let lookup: Lookup = Arc::new(|_query| Vec::new());
    let mut selector = pool_selector().with_lookup(lookup);
    let _ = selector.focus();

    let _ = type_char(&mut selector, 'x');
    let _ = type_char(&mut selector, 'y');

    // The first keystroke's quiet period elapses, but a second keystroke
    // already superseded it.
    let stale = ElapsedMsg {
        id: selector.instance_id(),
        generation: 1,
    };
    assert!(selector.update(Box::new(stale) as Msg).is_none());
    assert!(!selector.is_loading());

    let current = ElapsedMsg {
        id: selector.instance_id(),
        generation: 2,
    };
    assert!(selector.update(Box::new(current) as Msg).is_some());
    assert!(selector.is_loading());
}

#[test]
fn results_replace_the_pool_and_open_the_dropdown() {
    let mut selector = pool_selector();
    selector.apply_results("xy", vec![Choice::new(10, "Xylophone")]);
    assert_eq!(selector.len(), 1);
    assert!(selector.contains("10"));
    assert!(selector.is_open());
    assert!(!selector.is_loading());
}

#[test]
fn empty_results_close_the_dropdown() {
    let mut selector = pool_selector();
    let _ = selector.focus();
    assert!(selector.is_open());
    selector.apply_results("zz", Vec::new());
    assert!(!selector.is_open());
}

#[test]
fn results_are_applied_in_completion_order() {
    // Two overlapping lookups: the later completion wins, whichever query.
    let mut selector = pool_selector();
    selector.apply_results("second", vec![Choice::new(2, "Two")]);
    selector.apply_results("first", vec![Choice::new(1, "One")]);
    assert!(selector.contains("1"));
    assert!(!selector.contains("2"));
}

#[test]
fn admission_predicate_filters_results() {
    let mut selector = pool_selector().with_admit(Box::new(|c: &Choice| c.id != "banned"));
    selector.apply_results(
        "q",
        vec![Choice::new("ok", "Fine"), Choice::new("banned", "Nope")],
    );
    assert!(selector.contains("ok"));
    assert!(!selector.contains("banned"));
}

#[test]
fn results_from_another_instance_are_ignored() {
    let mut selector = pool_selector();
    let foreign = LookupResultsMsg {
        id: selector.instance_id() + 1000,
        query: "q".to_string(),
        results: vec![Choice::new("x", "X")],
    };
    selector.update(Box::new(foreign) as Msg);
    assert!(!selector.contains("x"));
    assert_eq!(selector.len(), 3);
}

#[test]
fn local_filter_narrows_without_mutating_the_pool() {
    let mut selector = pool_selector();
    let _ = selector.focus();
    let cmd = type_char(&mut selector, 'a');
    assert!(cmd.is_none(), "no lookup installed, filtering is local");

    // "a" fuzzy-matches Apple and Banana, not Cherry.
    let visible: Vec<&str> = selector
        .visible()
        .iter()
        .map(|(c, _)| c.id.as_str())
        .collect();
    assert_eq!(visible, ["a", "b"]);
    assert_eq!(selector.len(), 3, "the pool itself is untouched");
}

#[test]
fn clearing_the_query_clears_the_local_filter() {
    let mut selector = pool_selector();
    let _ = selector.focus();
    let _ = type_char(&mut selector, 'a');
    selector.update(key(KeyCode::Backspace));
    assert_eq!(selector.visible().len(), 3);
}

#[test]
fn empty_query_search_is_a_noop() {
    let mut selector = pool_selector();
    assert!(selector.search("").is_none());
    assert_eq!(selector.visible().len(), 3);
}

#[test]
fn disable_closes_the_dropdown_and_surfaces_the_reason() {
    let mut selector = pool_selector();
    let _ = selector.focus();
    assert!(selector.is_open());

    selector.disable("Selection limit reached.");
    assert!(!selector.is_enabled());
    assert!(!selector.is_open());
    assert!(!selector.focused());
    assert_eq!(selector.disabled_reason(), Some("Selection limit reached."));
    assert!(selector.view().contains("Selection limit reached."));

    selector.enable();
    assert!(selector.is_enabled());
    assert!(selector.disabled_reason().is_none());
}

#[test]
fn disabled_selector_ignores_input() {
    let mut selector = pool_selector();
    selector.disable("nope");
    assert!(selector.focus().is_none());
    assert!(type_char(&mut selector, 'a').is_none());
    assert_eq!(selector.query(), "");
}

#[test]
fn focus_opens_the_dropdown_only_when_candidates_exist() {
    let mut empty = Model::new(Duration::from_millis(50));
    let _ = empty.focus();
    assert!(!empty.is_open());

    let mut selector = pool_selector();
    let _ = selector.focus();
    assert!(selector.is_open());
}

#[test]
fn add_overwrites_by_id() {
    let mut selector = pool_selector();
    selector.add(Choice::new("a", "Apricot"));
    assert_eq!(selector.len(), 3);
    let names: Vec<&str> = selector.candidates().map(|c| c.name.as_str()).collect();
    assert!(names.contains(&"Apricot"));
    assert!(!names.contains(&"Apple"));
}

#[test]
fn reset_restores_the_load_snapshot() {
    let mut selector = pool_selector();
    selector.select("a");
    selector.add(Choice::new("z", "Zucchini"));
    selector.reset();

    let ids: Vec<&str> = selector.candidates().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
    assert_eq!(selector.query(), "");
}
