use despeckle::FilterKind;
use despeckle::config::{RunConfig, load_config};
use despeckle::pipeline::run as run_pipeline;
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = match args.as_slice() {
        [config_path] => load_config(Path::new(config_path)).map_err(|e| e.to_string())?,
        [input, output, rest @ ..] if rest.len() <= 2 => {
            let kind = match rest.first() {
                Some(token) => token.parse().map_err(|e| format!("{e}"))?,
                None => FilterKind::Arithmetic,
            };
            let mask_size = match rest.get(1) {
                Some(token) => token
                    .parse()
                    .map_err(|_| format!("invalid mask size: {token}"))?,
                None => 3,
            };
            RunConfig::new(input, output, kind, mask_size)
        }
        _ => return Err(usage()),
    };

    let summary = run_pipeline(&config).map_err(|e| e.to_string())?;
    println!(
        "{}x{} {} (mask {}) -> {}",
        summary.width,
        summary.height,
        summary.kind,
        summary.mask_size,
        config.output.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: despeckle <config.json>\n       despeckle <input> <output> [kind] [mask_size]\n\
     kinds: arithmetic, contraharmonic_black, contraharmonic_white"
        .to_string()
}
