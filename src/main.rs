#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use yearend_dashboard::config::{ANALYSIS, APP_STATE_PATH};
use yearend_dashboard::{Cli, DashboardModel, fetch_price_series, report, run_app};

fn main() -> eframe::Result {
    use clap::Parser;
    use eframe::NativeOptions;
    use std::path::PathBuf;
    use tokio::runtime::Runtime;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args.clone().redacted());

    // C. Data Loading (Blocking, single shot)
    let loaded = match Runtime::new() {
        Ok(rt) => rt.block_on(fetch_price_series(&args)),
        Err(e) => {
            eprintln!("Failed to create Tokio runtime: {}", e);
            std::process::exit(1);
        }
    };
    let dashboard = loaded.map(|series| DashboardModel::build(&args.symbol, series, &ANALYSIS));

    // D. Text report instead of the GUI
    if args.no_gui {
        match &dashboard {
            Ok(model) => print!("{}", report::render(model)),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    // E. Run Native App (a load failure is shown inline)
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    let title = format!("{} Year-End Close Dashboard", args.symbol);
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(run_app(cc, dashboard))),
    )
}
