pub mod formatter;

pub use formatter::{
    format_json, format_pairing_detail, format_score, format_scored_table, format_timestamp,
    format_tsv, should_use_colors,
};
