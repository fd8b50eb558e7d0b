pub mod catalog;
pub mod errors;
pub mod game;
pub mod roster;
pub mod validation;

pub use errors::Result;
