pub mod formatter;

pub use formatter::{
    format_json, format_ranking_table, format_result_detail, format_score, format_tsv,
    should_use_colors, write_report,
};
