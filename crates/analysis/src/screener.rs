use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use common::{Error, PriceSeries, PriceSource, Result, Sentiment, Signal};

use crate::engine::IndicatorEngine;
use crate::quote::QuoteSummary;
use crate::report::TechnicalReport;
use crate::snapshot::Analysis;

/// Everything computed for one ticker.
#[derive(Debug, Clone, Serialize)]
pub struct TickerReport {
    pub ticker: String,
    pub quote: QuoteSummary,
    pub technical: TechnicalReport,
    pub analysis: Analysis,
    /// Outperformance against the benchmark, in percentage points.
    pub relative_strength: Option<f64>,
}

/// Result for one requested ticker; failures stay local to that ticker.
#[derive(Debug)]
pub struct TickerOutcome {
    pub ticker: String,
    pub result: Result<TickerReport>,
}

/// Outcomes in request order plus the mood across successful tickers.
#[derive(Debug)]
pub struct ScreenResult {
    pub outcomes: Vec<TickerOutcome>,
    pub sentiment: Sentiment,
}

impl ScreenResult {
    pub fn reports(&self) -> impl Iterator<Item = &TickerReport> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &Error)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.ticker.as_str(), e)))
    }
}

/// Fans a list of tickers out over independent tasks: fetch bars from the
/// price source, run the engine, collect reports.
pub struct Screener {
    source: Arc<dyn PriceSource>,
    engine: Arc<IndicatorEngine>,
    lookback_bars: usize,
    benchmark: Option<String>,
}

impl Screener {
    pub fn new(
        source: Arc<dyn PriceSource>,
        engine: IndicatorEngine,
        lookback_bars: usize,
    ) -> Self {
        Self {
            source,
            engine: Arc::new(engine),
            lookback_bars,
            benchmark: None,
        }
    }

    /// Compare every ticker against this index (e.g. "^OSEAX").
    pub fn with_benchmark(mut self, ticker: impl Into<String>) -> Self {
        self.benchmark = Some(ticker.into());
        self
    }

    /// Analyze a single ticker without a benchmark comparison.
    pub async fn screen_one(&self, ticker: &str) -> Result<TickerReport> {
        analyze_ticker(
            self.source.as_ref(),
            &self.engine,
            ticker,
            self.lookback_bars,
            None,
        )
        .await
    }

    /// Analyze every ticker concurrently. Outcomes keep the input order.
    pub async fn screen(&self, tickers: &[String]) -> ScreenResult {
        let benchmark = self.load_benchmark().await.map(Arc::new);

        let mut tasks = JoinSet::new();
        for (idx, ticker) in tickers.iter().enumerate() {
            let source = self.source.clone();
            let engine = self.engine.clone();
            let ticker = ticker.clone();
            let benchmark = benchmark.clone();
            let lookback = self.lookback_bars;
            tasks.spawn(async move {
                let result = analyze_ticker(
                    source.as_ref(),
                    &engine,
                    &ticker,
                    lookback,
                    benchmark.as_deref(),
                )
                .await;
                (idx, result)
            });
        }

        let mut slots: Vec<Option<Result<TickerReport>>> =
            std::iter::repeat_with(|| None).take(tickers.len()).collect();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((idx, result)) => slots[idx] = Some(result),
                Err(e) => warn!(error = %e, "Screening task did not complete"),
            }
        }

        let outcomes: Vec<TickerOutcome> = tickers
            .iter()
            .zip(slots)
            .map(|(ticker, slot)| {
                let result = slot.unwrap_or_else(|| {
                    Err(Error::Task(format!("analysis of '{ticker}' did not complete")))
                });
                if let Err(e) = &result {
                    warn!(ticker = %ticker, error = %e, "Ticker skipped");
                }
                TickerOutcome {
                    ticker: ticker.clone(),
                    result,
                }
            })
            .collect();

        let sentiment = Sentiment::from_signals(
            outcomes
                .iter()
                .filter_map(|o| o.result.as_ref().ok())
                .map(|r| r.analysis.signal),
        );

        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        info!(
            tickers = outcomes.len(),
            failed,
            sentiment = %sentiment,
            "Screening finished"
        );

        ScreenResult {
            outcomes,
            sentiment,
        }
    }

    async fn load_benchmark(&self) -> Option<PriceSeries> {
        let ticker = self.benchmark.as_deref()?;
        let loaded = self
            .source
            .fetch_bars(ticker, self.lookback_bars)
            .await
            .and_then(PriceSeries::new);
        match loaded {
            Ok(series) => {
                debug!(benchmark = %ticker, bars = series.len(), "Benchmark loaded");
                Some(series)
            }
            Err(e) => {
                warn!(
                    benchmark = %ticker,
                    error = %e,
                    "Benchmark unavailable, relative strength disabled"
                );
                None
            }
        }
    }
}

async fn analyze_ticker(
    source: &dyn PriceSource,
    engine: &IndicatorEngine,
    ticker: &str,
    lookback_bars: usize,
    benchmark: Option<&PriceSeries>,
) -> Result<TickerReport> {
    let bars = source.fetch_bars(ticker, lookback_bars).await?;
    debug!(ticker = %ticker, bars = bars.len(), "Bars fetched");

    let series = PriceSeries::new(bars)?;
    let analysis = engine.analyze(&series)?;

    Ok(TickerReport {
        ticker: ticker.to_string(),
        quote: QuoteSummary::from_series(&series),
        technical: TechnicalReport::from_analysis(&analysis),
        relative_strength: benchmark.and_then(|index| engine.relative_strength(&series, index)),
        analysis,
    })
}

/// Count of each signal across a screen, for overview tables.
pub fn signal_counts<'a, I>(reports: I) -> (usize, usize, usize)
where
    I: IntoIterator<Item = &'a TickerReport>,
{
    reports
        .into_iter()
        .fold((0, 0, 0), |(b, s, h), r| match r.analysis.signal {
            Signal::Buy => (b + 1, s, h),
            Signal::Sell => (b, s + 1, h),
            Signal::Hold => (b, s, h + 1),
        })
}
