//! Terminal output formatting
//!
//! Display utilities for the line-mode client and one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_definition, print_keyboard, print_rejection,
    print_stats, print_summary, print_warning,
};
