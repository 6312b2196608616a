use aws_vpc_summary::aws::Ec2NetworkApi;
use aws_vpc_summary::config::ReportConfig;
use aws_vpc_summary::{logging, run_report};
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = ReportConfig::from_env();
    let _log_handle = logging::init(&config)?;
    log::info!("#Start main()");

    let api = Ec2NetworkApi::from_env().await;
    let stdout = std::io::stdout();
    run_report(&api, &mut stdout.lock()).await?;

    Ok(())
}
