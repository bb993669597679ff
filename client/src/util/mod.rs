//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (console, clock,
//! task spawning) from component logic to improve reuse and testability.

pub mod copy;
pub mod load_task;
pub mod logger;
pub mod time_format;
