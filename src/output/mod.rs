pub mod formatter;

pub use formatter::{
    format_breakdown, format_factor_list, format_factor_reduction, format_json, format_multiplier,
    format_reduction, format_summary, format_tsv, format_weight, should_use_colors,
};
