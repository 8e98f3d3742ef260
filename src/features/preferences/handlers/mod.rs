pub mod preference_handler;

pub use preference_handler::{__path_get_language, __path_update_language, get_language, update_language};
