mod cli;
mod commands;
mod render;

use maid_match::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
