// End-to-end key sequences through an InputSession.

use std::sync::Arc;
use typeahead_core::{Config, InputSession, KeyEvent, KeyResult, NGramModel};

fn model(corpus: &str) -> Arc<NGramModel> {
    Arc::new(NGramModel::train(corpus, 3).unwrap())
}

fn keys(text: &str) -> Vec<KeyEvent> {
    text.chars()
        .map(|c| if c == ' ' { KeyEvent::Space } else { KeyEvent::Char(c) })
        .collect()
}

#[test]
fn cursor_stays_within_buffer() {
    let mut s = InputSession::new(model("sleep well sleepy wellness"), "sleep well");
    let mut events = keys("sl we");
    events.extend([
        KeyEvent::Left,
        KeyEvent::Left,
        KeyEvent::Left,
        KeyEvent::Left,
        KeyEvent::Left,
        KeyEvent::Left,
        KeyEvent::Left,
        KeyEvent::Backspace,
        KeyEvent::Backspace,
        KeyEvent::Right,
        KeyEvent::Right,
        KeyEvent::Right,
        KeyEvent::Right,
        KeyEvent::Right,
        KeyEvent::Right,
        KeyEvent::Tab,
        KeyEvent::Enter,
        KeyEvent::Backspace,
        KeyEvent::Resize,
        KeyEvent::Unknown(4242),
    ]);

    for ev in events {
        assert_eq!(s.handle(ev), KeyResult::Continue);
        let ctx = s.content();
        assert!(ctx.cursor <= ctx.buffer.chars().count(), "{:?} after {:?}", ctx, ev);
        assert!(ctx.suggestions.is_empty() || ctx.selected_index < ctx.suggestions.len());
    }
}

#[test]
fn letters_return_after_matching_backspaces() {
    let mut s = InputSession::new(model("sleep well"), "sleep well");
    for ev in keys("sleep ") {
        s.handle(ev);
    }
    let before = s.stats().letters_typed();

    for ev in keys("wel!") {
        s.handle(ev);
    }
    assert_eq!(s.stats().letters_typed(), before + 4);

    for _ in 0..4 {
        s.handle(KeyEvent::Backspace);
    }
    assert_eq!(s.stats().letters_typed(), before);
    assert_eq!(s.buffer(), "sleep ");
}

#[test]
fn tab_cycles_between_two_suggestions() {
    let mut s = InputSession::new(model("sleep sleep sleepy"), "sleep well");
    for ev in keys("sl") {
        s.handle(ev);
    }
    let mut shown = s.content().suggestions.clone();
    shown.sort();
    assert_eq!(shown, vec!["sleep", "sleepy"]);

    assert_eq!(s.content().selected_index, 0);
    s.handle(KeyEvent::Tab);
    assert_eq!(s.content().selected_index, 1);
    s.handle(KeyEvent::Tab);
    assert_eq!(s.content().selected_index, 0);
}

#[test]
fn accept_then_continue_typing() {
    let mut s = InputSession::new(model("quality sleep helps improve memory"), "quality sleep");
    for ev in keys("qu") {
        s.handle(ev);
    }
    s.handle(KeyEvent::Enter);
    s.handle(KeyEvent::Space);
    for ev in keys("sl") {
        s.handle(ev);
    }
    s.handle(KeyEvent::Enter);

    assert_eq!(s.buffer(), "quality sleep");
    assert_eq!(s.cursor(), s.buffer().chars().count());
    assert_eq!(s.stats().letters_typed(), 4);
}

#[test]
fn accept_in_the_middle_of_the_buffer() {
    let mut s = InputSession::new(model("sleep well"), "sleep well");
    for ev in keys("sl well") {
        s.handle(ev);
    }
    for _ in 0..5 {
        s.handle(KeyEvent::Left);
    }
    assert_eq!(s.current_word(), "sl");
    s.handle(KeyEvent::Enter);

    assert_eq!(s.buffer(), "sleep well");
    assert_eq!(s.cursor(), 5);
}

#[test]
fn accepted_multibyte_word_reports_char_cursor() {
    let mut s = InputSession::new(model("café"), "café");
    for ev in keys("ca") {
        s.handle(ev);
    }
    assert_eq!(s.content().suggestions, vec!["café"]);
    s.handle(KeyEvent::Enter);

    let ctx = s.content();
    assert_eq!(ctx.buffer, "café");
    assert_eq!(ctx.cursor, 4);
    assert_eq!(s.cursor(), 4);
    assert_eq!(s.current_word_bounds(), 0..4);

    s.handle(KeyEvent::Space);
    s.handle(KeyEvent::Left);
    s.handle(KeyEvent::Left);
    assert_eq!(s.content().cursor, 3);
    assert_eq!(s.current_word(), "caf");
    assert_eq!(s.current_word_bounds(), 0..3);
}

#[test]
fn escape_terminates() {
    let mut s = InputSession::new(model("sleep"), "sleep");
    assert!(s.handle(KeyEvent::Char('s')).should_continue());
    assert!(!s.handle(KeyEvent::Escape).should_continue());
}

#[test]
fn key_codes_drive_a_session() {
    let mut s = InputSession::new(model("sleep"), "sleep");
    for code in [115u32, 108, 9, 10] {
        s.handle(KeyEvent::from_key_code(code));
    }
    assert_eq!(s.buffer(), "sleep");
    assert_eq!(s.handle(KeyEvent::from_key_code(27)), KeyResult::Exit);
}

#[test]
fn one_model_shared_by_sessions() {
    let shared = model("sleep well");
    let mut a = InputSession::new(Arc::clone(&shared), "sleep");
    let mut b = InputSession::with_config(Arc::clone(&shared), "well", &Config::default());

    a.handle(KeyEvent::Char('s'));
    b.handle(KeyEvent::Char('w'));

    assert_eq!(a.content().suggestions, vec!["sleep"]);
    assert_eq!(b.content().suggestions, vec!["well"]);
    assert_eq!(Arc::strong_count(&shared), 3);
}

#[test]
fn content_model_serializes() {
    let mut s = InputSession::new(model("sleep"), "sleep");
    s.handle(KeyEvent::Char('s'));
    let json = serde_json::to_value(s.content()).unwrap();
    assert_eq!(json["buffer"], "s");
    assert_eq!(json["cursor"], 1);
    assert_eq!(json["suggestions"][0], "sleep");
    assert_eq!(json["stats"]["letters_typed"], 1);
}
