pub mod generate;
pub mod init;
pub mod list_models;
pub mod quiz;
pub mod serve;
