use std::{fs, path::PathBuf, sync::Arc};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use typeahead_service::{Backends, CompleteRequest, Registry};

#[derive(Debug, Parser)]
#[command(version, rename_all = "kebab")]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// JSON file the in-memory store is seeded from.
	#[arg(long, short = 'd', value_name = "FILE")]
	pub data: PathBuf,
	/// Endpoint to invoke; omit to list the registered endpoints.
	#[arg(long, short = 'e')]
	pub endpoint: Option<String>,
	#[arg(long, short = 'q', default_value = "")]
	pub query: String,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = typeahead_config::load(&args.config)?;

	init_tracing(&config)?;

	let seed = serde_json::from_str(&fs::read_to_string(&args.data)?)?;
	let store = Arc::new(typeahead_storage::seed::store_from_json(&seed)?);
	let registry = Registry::from_config(&config, Backends::memory(store))?;

	match args.endpoint {
		Some(endpoint) => {
			tracing::info!(%endpoint, query = %args.query, "Running completion.");

			let resp = registry.complete(CompleteRequest { endpoint, query: args.query }).await?;

			println!("{}", resp.body);
		},
		None =>
			for name in registry.endpoint_names() {
				println!("{name}");
			},
	}

	Ok(())
}

fn init_tracing(config: &typeahead_config::Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.engine.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();

	Ok(())
}
