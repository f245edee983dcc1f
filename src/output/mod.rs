pub mod export;
pub mod formatter;

pub use export::{default_export_file_name, export_entries_csv, write_entries_csv};
pub use formatter::{
    format_age, format_entries_table, format_leaderboard, format_share_message,
    format_sport_list, format_tsv, ordinal, should_use_colors,
};
