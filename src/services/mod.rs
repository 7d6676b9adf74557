// Tabflow services
// Supporting services around the engine: preference persistence, the options
// surface, and preference-gated debug logging.

pub mod debug_log;
pub mod options_form;
pub mod preference_store;
