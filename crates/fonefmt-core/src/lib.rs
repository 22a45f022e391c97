pub mod domain;
pub mod dto;
pub mod rules;

pub use domain::*;
pub use dto::*;
pub use rules::*;
