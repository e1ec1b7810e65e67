use gwtrun::cli::commands::{CliArgs, Commands};
use gwtrun::cli::handlers::{handle_codeserver, handle_devmode};
use gwtrun::util::logging;
use gwtrun::VERSION;

use clap::Parser;
use tracing::debug;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    logging::init_from_args(args.log_level.as_deref(), args.verbose, args.quiet);

    debug!("gwtrun v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Devmode(devmode_args) => handle_devmode(devmode_args).await,
        Commands::Codeserver(codeserver_args) => handle_codeserver(codeserver_args).await,
    };

    std::process::exit(exit_code);
}
