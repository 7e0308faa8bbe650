pub mod matcher;
pub mod synthesizer;

pub use matcher::{fold_index, match_headers, squash};
pub use synthesizer::{PLACEHOLDER_ASSOCIATION, Synthesis, synthesize, write_mapping};
