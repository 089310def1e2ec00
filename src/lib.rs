pub mod brush;
pub mod cli;
pub mod compare;
pub mod config;
pub mod formats;
pub mod geometry;
pub mod gesture;
pub mod history;
pub mod script;
pub mod session;
pub mod viewport;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
