use std::{
    net::IpAddr,
    path::{Path, PathBuf},
    sync::Arc,
};

use clap::{Parser, Subcommand};
use launchdash::{
    DashboardConfig, DashboardController, FilterSelection, LaunchDashError, PayloadRange,
    load_launch_csv,
    server::{self, ServerState},
    writer,
};
use log::info;
use snafu::Report;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the dashboard over HTTP (default)
    Serve {
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(long)]
        host: Option<IpAddr>,

        #[arg(short, long)]
        port: Option<u16>,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Render both charts for one selection and write them as JSON lines
    Snapshot {
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(short, long, default_value = "ALL")]
        site: String,

        #[arg(long)]
        low: Option<f64>,

        #[arg(long)]
        high: Option<f64>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the default config to the user's config directory
    InitConfig {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn load_config(explicit: Option<&Path>) -> Result<DashboardConfig, LaunchDashError> {
    match explicit {
        Some(path) => DashboardConfig::from_file(path),
        None => Ok(DashboardConfig::from_local_file()?.unwrap_or_default()),
    }
}

fn load_controller(dataset_path: &Path) -> Result<DashboardController, LaunchDashError> {
    let dataset = load_launch_csv(dataset_path)?;
    DashboardController::new(Arc::new(dataset))
}

fn serve(
    input: Option<PathBuf>,
    host: Option<IpAddr>,
    port: Option<u16>,
    config: Option<PathBuf>,
) -> Result<(), LaunchDashError> {
    let mut app_config = load_config(config.as_deref())?;
    if let Some(input) = input {
        app_config.dataset_path = input;
    }
    if let Some(host) = host {
        app_config.host = host;
    }
    if let Some(port) = port {
        app_config.port = port;
    }

    let controller = load_controller(&app_config.dataset_path)?;
    let state = Arc::new(ServerState::new(controller, app_config.payload_step));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| LaunchDashError::RuntimeError { source: e })?;
    runtime.block_on(server::serve(state, app_config.socket_addr()))
}

fn snapshot(
    input: Option<PathBuf>,
    site: &str,
    low: Option<f64>,
    high: Option<f64>,
    output: Option<&Path>,
) -> Result<(), LaunchDashError> {
    let dataset_path = match input {
        Some(input) => input,
        None => load_config(None)?.dataset_path,
    };
    let controller = load_controller(&dataset_path)?;

    let defaults = controller.default_selection().payload_range;
    let selection = FilterSelection::new(
        site,
        PayloadRange::new(low.unwrap_or(defaults.low), high.unwrap_or(defaults.high)),
    );
    let updates = controller.render_all(&selection);
    writer::write_snapshot(output, &updates)
}

fn init_config(output: Option<PathBuf>) -> Result<(), LaunchDashError> {
    let path = match output {
        Some(path) => path,
        None => DashboardConfig::default_path()?,
    };
    DashboardConfig::default().save(&path)?;
    info!("Wrote default config to {:?}", path);
    Ok(())
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let cli = Args::parse();
    ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    })
    .expect("Could not set Ctrl-C handler");

    let result = match cli.command {
        None => serve(None, None, None, None),
        Some(Commands::Serve {
            input,
            host,
            port,
            config,
        }) => serve(input, host, port, config),
        Some(Commands::Snapshot {
            input,
            site,
            low,
            high,
            output,
        }) => snapshot(input, &site, low, high, output.as_deref()),
        Some(Commands::InitConfig { output }) => init_config(output),
    };

    if let Err(e) = result {
        eprintln!("{}", Report::from_error(e));
        std::process::exit(1);
    }
}
