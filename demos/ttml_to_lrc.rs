use std::{env, fs};

use ttml_lyrics::{LrcGenerationOptions, LrcMode, generate_lrc, parse_ttml};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let input_path = args
        .next()
        .unwrap_or_else(|| "tests/test_data/real_world.ttml".to_string());
    let mode = match args.next() {
        Some(mode) => mode.parse::<LrcMode>()?,
        None => LrcMode::default(),
    };

    let ttml_content = fs::read_to_string(&input_path)?;
    let model = parse_ttml(&ttml_content)?;

    for warning in &model.warnings {
        eprintln!("警告: {warning}");
    }

    let lrc = generate_lrc(&model, &LrcGenerationOptions { mode });
    println!("{lrc}");

    Ok(())
}
