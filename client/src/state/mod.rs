//! Application state modules.
//!
//! ARCHITECTURE
//! ============
//! Plain data types with no Leptos dependencies; components wrap them in
//! signals. `load` is the fetch lifecycle both loaders share, `selection`
//! is the shell's selected chat, `config` is the locale/density choice.

pub mod config;
pub mod load;
pub mod selection;
