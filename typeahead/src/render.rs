//! Plain-text rendering of a `ContentModel`.
//!
//! Four panels are drawn, top to bottom: suggestions, the reference text,
//! input and scores. Each panel is a title line followed by its content.

use typeahead_core::{ContentModel, StatsSnapshot};

/// Column width used when the caller has no terminal size to offer.
pub const DEFAULT_PANEL_WIDTH: usize = 80;

/// Suggestions separated by spaces, the highlighted one in brackets.
pub fn render_suggestion_line(content: &ContentModel) -> String {
    let Some(selected) = content.selected_suggestion() else {
        return "No suggestions".to_string();
    };
    content
        .suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| {
            if i == content.selected_index {
                format!("[{}]", selected)
            } else {
                s.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Word-wrap `reference` into lines of at most `width` characters.
///
/// Words are never split; a word longer than `width` gets a line of its own.
pub fn render_text_panel(reference: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in reference.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// The buffer behind a `> ` prompt with `|` marking the cursor.
///
/// `content.cursor` counts characters, so the split happens on the byte
/// offset of that character.
pub fn render_input_line(content: &ContentModel) -> String {
    let split = content
        .buffer
        .char_indices()
        .nth(content.cursor)
        .map(|(i, _)| i)
        .unwrap_or(content.buffer.len());
    let (before, after) = content.buffer.split_at(split);
    format!("> {}|{}", before, after)
}

pub fn render_score_line(stats: &StatsSnapshot) -> String {
    format!(
        "Letters Typed: {} | Total Tabs: {} | Avg Letters/Word: {:.2} | Avg Tabs/Word: {:.2}",
        stats.letters_typed, stats.tab_presses, stats.running_letter_accuracy, stats.avg_tabs_per_word
    )
}

/// All four panels, newline separated, without a trailing newline.
pub fn render_panels(content: &ContentModel, reference: &str, width: usize) -> String {
    let mut lines = vec![" Suggestions ".to_string(), render_suggestion_line(content)];
    lines.push(" Text Content ".to_string());
    lines.extend(render_text_panel(reference, width));
    lines.push(" Input ".to_string());
    lines.push(render_input_line(content));
    lines.push(" Scores ".to_string());
    lines.push(render_score_line(&content.stats));
    lines.join("\n")
}
