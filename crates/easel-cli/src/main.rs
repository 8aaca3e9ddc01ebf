//! easel-replay: drive the canvas engine headlessly.
//!
//! Loads a JSON step script, replays it through an `Editor` and prints the
//! resulting scene surface as JSON on stdout.

mod script;

use anyhow::Context;
use clap::Parser;
use easel_editor::{Editor, EditorConfig};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "easel-replay", version, about)]
struct Args {
    /// Step script (JSON array).
    script: PathBuf,

    /// Editor configuration (JSON). Missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EditorConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EditorConfig::default(),
    };

    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("reading script {}", args.script.display()))?;
    let steps = script::parse(&text)
        .with_context(|| format!("parsing script {}", args.script.display()))?;
    log::info!("replaying {} steps", steps.len());

    let mut editor = Editor::new(config);
    script::replay(&mut editor, &steps);

    let surface = editor.surface();
    let json = if args.pretty {
        surface.to_json_pretty()
    } else {
        surface.to_json()
    }
    .context("serializing scene surface")?;
    println!("{json}");
    Ok(())
}
