pub mod cli;
pub mod run;
pub mod run_discover;
pub mod run_generate;
