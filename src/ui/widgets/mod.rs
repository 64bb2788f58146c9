// src/ui/widgets/mod.rs

pub mod analysis_view; // Findings of the latest scan with explanations.
pub mod footer;        // Key hints for the current state.
pub mod input;         // URL entry box.
pub mod summary;       // Session score, counters and recent scans.
