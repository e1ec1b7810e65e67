use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{LaunchOptions, LogLevel};
use crate::graph::ScopeFilter;

/// Reactor-aware launcher for GWT DevMode and CodeServer
#[derive(Parser, Debug)]
#[command(
    name = "gwtrun",
    about = "Reactor-aware launcher for GWT DevMode and CodeServer",
    version,
    author,
    long_about = "gwtrun reads a reactor graph file describing a multi-module build, \
                  resolves the target projects and GWT modules, assembles the classpath \
                  and source path from the reactor metadata, and forks the GWT DevMode \
                  or CodeServer JVM with the derived arguments."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(
        short = 'v',
        long,
        global = true,
        help = "Increase verbosity (can be used multiple times)"
    )]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Run GWT development mode",
        long_about = "Forks com.google.gwt.dev.DevMode for the selected reactor projects.\n\n\
                      Examples:\n  \
                      gwtrun devmode\n  \
                      gwtrun devmode target/reactor.json --projects app\n  \
                      gwtrun devmode --modules com.example.App --startup-url index.html"
    )]
    Devmode(DevmodeArgs),

    #[command(
        about = "Run the GWT incremental code server",
        long_about = "Forks com.google.gwt.codeserver.CodeServer for the selected reactor \
                      projects, passing each collected source root as a -src argument.\n\n\
                      Examples:\n  \
                      gwtrun codeserver\n  \
                      gwtrun codeserver --projects com.example:app --launcher-dir target/launcher"
    )]
    Codeserver(CodeserverArgs),
}

/// Options shared by both launch subcommands.
#[derive(Parser, Debug, Clone)]
pub struct LaunchArgs {
    #[arg(
        value_name = "GRAPH",
        default_value = "reactor.json",
        help = "Path to the reactor graph file"
    )]
    pub graph: PathBuf,

    #[arg(
        long,
        value_name = "IDS",
        help = "Comma-delimited list of the reactor projects to run (defaults to the gwt-app projects)"
    )]
    pub projects: Option<String>,

    #[arg(
        long,
        value_name = "MODULES",
        help = "Comma-delimited list of the modules to run (defaults to the declared module names)"
    )]
    pub modules: Option<String>,

    #[arg(
        long,
        value_name = "SCOPE",
        default_value = "runtime",
        help = "Dependency scope to use for the classpath"
    )]
    pub classpath_scope: ScopeFilter,

    #[arg(
        long,
        value_name = "LEVEL",
        help = "GWT tree-logger level (defaults to the tool's own verbosity)"
    )]
    pub gwt_log_level: Option<LogLevel>,

    #[arg(
        long,
        value_name = "VERSION",
        help = "Java source level passed to the GWT compiler"
    )]
    pub source_level: Option<String>,

    #[arg(
        long = "jvm-arg",
        value_name = "ARG",
        allow_hyphen_values = true,
        help = "Argument for the forked JVM, e.g. -Xmx1g (repeatable)"
    )]
    pub jvm_args: Vec<String>,

    #[arg(
        short = 'D',
        value_name = "KEY=VALUE",
        value_parser = parse_property,
        help = "System property for the forked JVM (repeatable)"
    )]
    pub system_properties: Vec<(String, String)>,
}

impl LaunchArgs {
    pub fn to_options(&self) -> LaunchOptions {
        LaunchOptions {
            log_level: self.gwt_log_level,
            modules: self.modules.clone(),
            projects: self.projects.clone(),
            classpath_scope: self.classpath_scope,
            source_level: self.source_level.clone(),
            jvm_args: self.jvm_args.clone(),
            system_properties: self.system_properties.clone(),
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct DevmodeArgs {
    #[command(flatten)]
    pub launch: LaunchArgs,

    #[arg(
        long,
        value_name = "DIR",
        help = "The directory into which deployable output files will be written"
    )]
    pub war: Option<PathBuf>,

    #[arg(
        long = "startup-url",
        value_name = "URL",
        help = "URL that should be opened automatically in development mode (repeatable)"
    )]
    pub startup_urls: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CodeserverArgs {
    #[command(flatten)]
    pub launch: LaunchArgs,

    #[arg(
        long,
        value_name = "DIR",
        help = "Directory where the code server writes its launcher stubs"
    )]
    pub launcher_dir: Option<PathBuf>,
}

fn parse_property(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!(
            "Invalid system property: {}. Expected KEY=VALUE",
            s
        )),
    }
}
