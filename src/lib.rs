pub mod cli;
pub mod commands;
pub mod notebooks;
pub mod template;
pub mod version;
