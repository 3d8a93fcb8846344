// Utility functions
// Helper functions for common operations

pub mod clipboard;
pub mod data_state;
pub mod format;
pub mod loading_logo;

pub use data_state::DataState;
