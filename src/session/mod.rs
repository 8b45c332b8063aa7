pub mod attempt;
pub mod events;
pub mod policy;
pub mod transcript;
