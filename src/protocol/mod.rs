pub mod command;
pub mod decoder;
pub mod session;
pub mod settings;
