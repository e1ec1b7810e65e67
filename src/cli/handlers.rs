//! Command handlers
//!
//! Each handler loads the reactor graph, builds the matching launcher, and
//! runs the launch to completion, mapping failures onto the process exit
//! code. A non-zero child status is propagated as-is so callers can react
//! to the GWT process's own exit code.

use tracing::error;

use crate::cli::commands::{CodeserverArgs, DevmodeArgs, LaunchArgs};
use crate::graph::ProjectGraph;
use crate::launch::{self, CodeServer, DevMode, LaunchError, Launcher};

pub async fn handle_devmode(args: &DevmodeArgs) -> i32 {
    let launcher = DevMode::new(args.war.clone(), args.startup_urls.clone());
    run(&args.launch, &launcher).await
}

pub async fn handle_codeserver(args: &CodeserverArgs) -> i32 {
    let launcher = CodeServer::new(args.launcher_dir.clone());
    run(&args.launch, &launcher).await
}

async fn run(args: &LaunchArgs, launcher: &dyn Launcher) -> i32 {
    let graph = match ProjectGraph::from_file(&args.graph) {
        Ok(graph) => graph,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };

    match launch::launch(&graph, &args.to_options(), launcher).await {
        Ok(()) => 0,
        Err(LaunchError::ExitStatus(code)) => {
            error!("GWT exited with status {}", code);
            code
        }
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}
