use clap::Parser;
use tracing_subscriber::EnvFilter;

use schema_types::cli::Args;
use schema_types::commands::Session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Diagnostics go to stderr so stdout stays pure generated source
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let session = Session::new(args.db, args.schema)?;
    let output = args.command.run(&session, args.format)?;
    println!("{}", output);
    Ok(())
}
