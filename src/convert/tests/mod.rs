mod format_tests;
mod selection_tests;
