//! typeahead
//!
//! Terminal front end for `typeahead-core`: corpus loading, configuration,
//! the key script language used by `replay` and `repl`, and plain-text
//! rendering of the session's content model.
//!
//! Public API:
//! - `AppConfig` - Core config plus the reference text source
//! - `load_corpus` / `load_reference` - Read training and reference text
//! - `parse_key_script` / `feed_keys` - Turn a script line into `KeyEvent`s and replay them
//! - `render_panels` - Draw a `ContentModel` and the reference text as panels

pub mod config;
pub mod corpus;
pub mod keys;
pub mod render;

pub use config::AppConfig;
pub use corpus::{load_corpus, load_reference};
pub use keys::{feed_keys, parse_key_script};
pub use render::{
    render_input_line, render_panels, render_score_line, render_suggestion_line,
    render_text_panel, DEFAULT_PANEL_WIDTH,
};

// Re-export core types for convenience
pub use typeahead_core::{
    Config, ContentModel, InputSession, KeyEvent, KeyResult, NGramModel, StatsSnapshot,
};

/// Reference paragraph the typing statistics are measured against when no
/// other text is configured.
pub const DEFAULT_REFERENCE_TEXT: &str = "Sleep is essential for overall health and well-being, yet many people underestimate its importance. Quality sleep helps improve memory, cognitive function, and emotional stability. During sleep, the body repairs tissues, strengthens the immune system, and regulates hormones. Lack of sleep can lead to serious health issues, including heart disease, obesity, and weakened immunity. Poor sleep also affects concentration, productivity, and mood, making daily tasks more challenging. Developing good sleep habits, such as maintaining a consistent schedule, reducing screen time before bed, and creating a comfortable sleeping environment, can significantly enhance sleep quality and overall health. Prioritizing rest leads to a healthier life.";
