use std::sync::Arc;
use typeahead::{
    feed_keys, parse_key_script, render_panels, InputSession, KeyEvent, KeyResult, NGramModel,
};

fn session(reference: &str) -> InputSession {
    let model = NGramModel::train("sleep sleep sleepy well", 3).expect("train");
    InputSession::new(Arc::new(model), reference)
}

fn replay(session: &mut InputSession, script: &str) -> KeyResult {
    let keys = parse_key_script(script).expect("valid script");
    feed_keys(session, &keys)
}

#[test]
fn test_typed_prefix_offers_ranked_suggestions() {
    let mut s = session("sleep well");
    assert_eq!(replay(&mut s, "sl"), KeyResult::Continue);

    let content = s.content();
    assert_eq!(content.buffer, "sl");
    assert_eq!(content.suggestions, vec!["sleep", "sleepy"]);
    assert_eq!(content.selected_index, 0);
}

#[test]
fn test_tab_cycles_and_enter_accepts() {
    let mut s = session("sleep well");
    replay(&mut s, "sl<tab>");
    assert_eq!(s.content().selected_index, 1);

    replay(&mut s, "<enter>");
    assert_eq!(s.content().buffer, "sleepy");
    assert_eq!(s.content().cursor, 6);
    assert_eq!(s.content().stats.tab_presses, 1);
}

#[test]
fn test_space_then_next_word() {
    let mut s = session("sleep well");
    replay(&mut s, "sl<enter> we");

    let content = s.content();
    assert_eq!(content.buffer, "sleep we");
    assert_eq!(content.suggestions, vec!["well"]);
    assert_eq!(content.stats.letters_typed, 4);
}

#[test]
fn test_escape_stops_replay() {
    let mut s = session("sleep");
    assert_eq!(replay(&mut s, "ab<esc>cd"), KeyResult::Exit);
    assert_eq!(s.content().buffer, "ab");
}

#[test]
fn test_backspace_and_arrows() {
    let mut s = session("sleep");
    replay(&mut s, "slx<bs><left>");
    let content = s.content();
    assert_eq!(content.buffer, "sl");
    assert_eq!(content.cursor, 1);
    assert_eq!(content.stats.letters_typed, 2);

    replay(&mut s, "<right><resize>");
    assert_eq!(s.content().cursor, 2);
}

#[test]
fn test_rendered_panels() {
    let mut s = session("sleep well");
    replay(&mut s, "sl<tab>");
    let out = render_panels(s.content(), s.reference_text(), 80);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[1], "sleep [sleepy]");
    assert_eq!(lines[2], " Text Content ");
    assert_eq!(lines[3], "sleep well");
    assert_eq!(lines[5], "> sl|");
    // tab presses are counted but only published by the next edit
    assert!(lines[7].starts_with("Letters Typed: 2 | Total Tabs: 0 |"));
}

#[test]
fn test_bad_script_is_rejected() {
    assert!(parse_key_script("sl<tba>").is_err());
    assert!(parse_key_script("sl<tab").is_err());
}

#[test]
fn test_literal_events_match_key_codes() {
    let keys = parse_key_script("a <<").unwrap();
    assert_eq!(
        keys,
        vec![
            KeyEvent::from_key_code(97),
            KeyEvent::from_key_code(32),
            KeyEvent::from_key_code(60),
        ]
    );
}
