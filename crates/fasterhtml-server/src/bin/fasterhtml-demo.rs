use fasterhtml_server::settings::{load_dotenv, report_env_file};
use fasterhtml_server::{Settings, run};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let env_file = load_dotenv();
	let settings = Settings::from_process_env()?;

	let default_level = if settings.debug { "debug" } else { "info" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	tracing_subscriber::fmt().with_env_filter(filter).init();

	report_env_file(env_file.as_deref());
	tracing::debug!("Loaded settings: {:?}", settings);
	run(settings).await?;
	Ok(())
}
