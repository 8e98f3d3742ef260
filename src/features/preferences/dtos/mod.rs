mod preference_dto;

pub use preference_dto::*;
