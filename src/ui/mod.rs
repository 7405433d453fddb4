pub mod language;
pub mod mvi;
