pub mod checkpoint;
pub mod cli;
pub mod deployer;
pub mod env;
pub mod manifest;
