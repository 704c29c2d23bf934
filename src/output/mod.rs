pub mod formatter;

pub use formatter::{
    format_breakdown_table, format_max_table, format_percent, format_points, format_submission,
    format_tsv, should_use_colors,
};
