pub mod cli;
mod cli_directive;
mod cli_generate;
