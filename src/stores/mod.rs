// State management
// Stores own the state the page renders

pub mod shortener;
