//! Main application entry point (native).

use inkboard_app::{AppError, AppResult, SessionSummary, load_script, run_session};
use inkboard_core::BoardConfig;

fn run(args: &[String]) -> AppResult<String> {
    let (config, script) = match args {
        [script] => (BoardConfig::default(), script),
        [config, script] => (BoardConfig::load(config)?, script),
        _ => return Err(AppError::Usage),
    };

    let events = load_script(script)?;
    let board = run_session(&config, events);
    let summary = SessionSummary::of(&board);

    #[cfg(feature = "vello-renderer")]
    let report = format!("{summary}, {} scene paths", inkboard_app::scene_paths(&board)?);
    #[cfg(not(feature = "vello-renderer"))]
    let report = summary.to_string();

    Ok(report)
}

fn main() {
    env_logger::init();
    log::info!("Starting Inkboard");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
