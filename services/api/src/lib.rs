mod assess;
mod cli;
mod infra;
mod routes;
mod server;

use placement_eligibility::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
