mod app;
mod args;
mod dump;

use std::str::FromStr;

use anyhow::{Context, anyhow};
use clap::Parser;
use log::{LevelFilter, debug, info};

use graph_playground::{Session, generate};

use crate::args::Args;

fn init_logging(level: &str) {
    let level = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);
    debug!(args:?; "Parsed arguments");

    let params = args.generate_params();
    let mut rng = args.rng();

    if let Some(path) = &args.dump {
        let graph = generate(&params, &mut rng).context("failed to generate graph")?;
        return dump::write_graph_json(&graph, path);
    }

    let session = Session::generate(params, rng).context("failed to generate graph")?;
    info!(
        nodes = session.graph().node_count(),
        edges = session.graph().edge_count();
        "Opening viewer",
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "graph-playground",
        options,
        Box::new(move |cc| Ok(Box::new(app::PlaygroundApp::new(cc, session)))),
    )
    .map_err(|error| anyhow!("viewer failed: {error}"))
}
