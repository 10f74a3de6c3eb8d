use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = typeahead_cli::Args::parse();

	typeahead_cli::run(args).await
}
