use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use analysis::{signal_counts, EngineConfig, IndicatorEngine, ScreenResult, Screener};
use common::{Config, LogFormat};
use feed::FileSource;

/// Technical analysis over daily bar files.
#[derive(Debug, Parser)]
#[command(name = "analyst", version, about)]
struct Cli {
    /// Tickers to analyze, e.g. EQNR.OL AAPL BTC-USD
    #[arg(required = true)]
    tickers: Vec<String>,

    /// Directory holding `<TICKER>.json` bar files (overrides ANALYST_DATA_DIR)
    #[arg(long)]
    data_dir: Option<String>,

    /// Engine TOML file (overrides ANALYST_ENGINE_CONFIG)
    #[arg(long)]
    config: Option<String>,

    /// Index ticker for relative strength (overrides ANALYST_BENCHMARK)
    #[arg(long)]
    benchmark: Option<String>,

    /// Bars to request per ticker (overrides ANALYST_LOOKBACK_BARS)
    #[arg(long)]
    lookback: Option<usize>,

    /// Print one JSON object per ticker instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ── Config ────────────────────────────────────────────────────────────────
    let cfg = Config::from_env().context("invalid environment configuration")?;
    init_logging(cfg.log_format);

    let data_dir = cli.data_dir.clone().unwrap_or(cfg.data_dir);
    let engine_path = cli.config.clone().unwrap_or(cfg.engine_config_path);
    let benchmark = cli.benchmark.clone().or(cfg.benchmark);
    let lookback = cli.lookback.unwrap_or(cfg.lookback_bars);
    anyhow::ensure!(lookback > 0, "--lookback must be greater than zero");

    let engine_cfg = EngineConfig::load_or_default(&engine_path)
        .with_context(|| format!("failed to load engine config '{engine_path}'"))?;
    let engine = IndicatorEngine::new(engine_cfg)?;
    info!(
        data_dir = %data_dir,
        engine_config = %engine_path,
        required_bars = engine.required_bars(),
        "Analyst starting"
    );

    // ── Screening ─────────────────────────────────────────────────────────────
    let source = Arc::new(FileSource::new(&data_dir));
    let mut screener = Screener::new(source, engine, lookback);
    if let Some(index) = benchmark {
        screener = screener.with_benchmark(index);
    }

    let result = screener.screen(&cli.tickers).await;

    if cli.json {
        print_json(&result)?;
    } else {
        print_text(&result);
    }
    Ok(())
}

/// Logs go to stderr so stdout carries only reports.
fn init_logging(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init(),
    }
}

fn print_text(result: &ScreenResult) {
    for outcome in &result.outcomes {
        match &outcome.result {
            Ok(report) => {
                let rs = report
                    .relative_strength
                    .map_or_else(String::new, |v| format!(" rs={v:+.2}"));
                println!(
                    "{:<10} last={:.2} change={:+.2}% {}{}",
                    report.ticker,
                    report.quote.last_price,
                    report.quote.change_percent,
                    report.technical,
                    rs,
                );
            }
            Err(e) => println!("{:<10} error: {e}", outcome.ticker),
        }
    }

    let (buy, sell, hold) = signal_counts(result.reports());
    let failed = result.failures().count();
    println!(
        "Sentiment: {} (buy={buy} sell={sell} hold={hold} failed={failed})",
        result.sentiment
    );
}

fn print_json(result: &ScreenResult) -> anyhow::Result<()> {
    for outcome in &result.outcomes {
        let line = match &outcome.result {
            Ok(report) => serde_json::to_string(report)?,
            Err(e) => serde_json::json!({
                "ticker": outcome.ticker,
                "error": e.to_string(),
            })
            .to_string(),
        };
        println!("{line}");
    }
    println!(
        "{}",
        serde_json::json!({ "sentiment": result.sentiment.to_string() })
    );
    Ok(())
}
