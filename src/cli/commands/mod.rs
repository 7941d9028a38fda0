pub mod dump;
pub mod init;
pub mod languages;
pub mod translate;
