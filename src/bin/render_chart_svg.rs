use price_chart::api::{ChartEngine, ChartEngineConfig};
use price_chart::core::Series;
use price_chart::feed::{DEFAULT_RECORD_LIMIT, parse_time_series};
use price_chart::interaction::ChartKind;
use price_chart::render::SvgRenderer;
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: render_chart_svg --input <path> [--output <path>] [--kind line|bar|candlestick] [--grid] [--config <path>] [--limit <n>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    kind: ChartKind,
    grid: bool,
    limit: usize,
}

fn main() {
    let _ = price_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let series = load_series(&raw, args.limit)?;

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ChartEngineConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartEngineConfig::default(),
    }
    .with_auto_render(false);

    let renderer = SvgRenderer::new(config.viewport);
    let mut engine = ChartEngine::new(renderer, config).map_err(|err| err.to_string())?;
    engine.set_series(series);
    engine.set_chart_kind(args.kind);
    engine.set_grid_visible(args.grid);
    engine.render().map_err(|err| err.to_string())?;

    let document = engine.into_renderer().into_document();
    match &args.output {
        Some(path) => fs::write(path, document)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{document}");
            Ok(())
        }
    }
}

/// Records array (`[...]`) or provider payload (`{...}`).
fn load_series(raw: &str, limit: usize) -> Result<Series, String> {
    let result = if raw.trim_start().starts_with('[') {
        Series::from_json_str(raw)
    } else {
        parse_time_series(raw, limit)
    };
    result.map_err(|err| err.to_string())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut kind = ChartKind::default();
    let mut grid = false;
    let mut limit = DEFAULT_RECORD_LIMIT;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--kind" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --kind".to_owned())?;
                kind = value.parse().map_err(|err: price_chart::ChartError| err.to_string())?;
            }
            "--limit" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --limit".to_owned())?;
                limit = value
                    .parse()
                    .map_err(|err| format!("invalid --limit `{value}`: {err}"))?;
            }
            "--grid" => grid = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    let input = input.ok_or_else(|| USAGE.to_owned())?;
    Ok(CliArgs {
        input,
        output,
        config,
        kind,
        grid,
        limit,
    })
}
