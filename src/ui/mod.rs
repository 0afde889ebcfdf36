//! Interactive prompts for the dlhub CLI

pub mod form;
pub mod theme;

pub use form::{FormOption, HubForm};
