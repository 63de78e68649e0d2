//! eco-trip — simulate New York → Boston trips that re-route as conditions change.
//!
//! Three candidate corridors are scored against a seeded simulated
//! environment every tick.  The initial choice is explained, each trip is
//! driven to arrival, and decisions can be written to CSV.
//!
//! ```text
//! RUST_LOG=debug eco-trip --trips 4 --output ./out
//! ```

mod routes;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use eco_core::{ConditionSnapshot, TripConfig, TripId};
use eco_cost::{CostConfig, CostModel, ScoredRoute, explain, label_roles, rank};
use eco_engine::{DecisionEvent, EngineBuilder, EngineConfig, SwitchPolicy};
use eco_env::{EnvironmentProvider, FallbackEnvironment, SimulatedEnvironment, SimulationProfile, weather_label};
use eco_output::{CsvWriter, OutputError, OutputResult, TripOutputObserver};
use eco_route::{CandidateSet, StaticRouter};
use eco_sim::{TracingObserver, TripObserver, TripSimulator, TripSummary, run_fleet};

use routes::{BOSTON, NEW_YORK, corridors, name_of};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "eco-trip")]
#[command(about = "Simulate eco-routed New York to Boston trips")]
struct Args {
    /// JSON file with `trip`, `engine`, `cost` and `environment` sections.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of independent trips; trip N uses seed + N.
    #[arg(long, default_value_t = 1)]
    trips: u32,
    /// Overrides `trip.seed`.
    #[arg(long)]
    seed: Option<u64>,
    /// Overrides `engine.switch_policy.margin`.
    #[arg(long)]
    margin: Option<f64>,
    /// Overrides `engine.refresh_interval_ticks`.
    #[arg(long)]
    refresh_every: Option<u64>,
    /// Directory for CSV output; one sub-directory per trip.
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Everything tunable, loadable from JSON.  Missing sections use defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    trip:        TripConfig,
    engine:      EngineConfig,
    cost:        CostConfig,
    environment: SimulationProfile,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            // Tuesday 2024-03-12, 07:30 UTC.
            trip:        TripConfig { start_unix_secs: 1_710_228_600, ..TripConfig::default() },
            engine:      EngineConfig { refresh_interval_ticks: 6, ..EngineConfig::default() },
            cost:        CostConfig::default(),
            environment: SimulationProfile::default(),
        }
    }
}

impl DemoConfig {
    fn load(args: &Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
            }
            None => DemoConfig::default(),
        };
        if let Some(seed) = args.seed {
            config.trip.seed = seed;
        }
        if let Some(margin) = args.margin {
            config.engine.switch_policy = SwitchPolicy::new(margin)?;
        }
        if let Some(every) = args.refresh_every {
            config.engine.refresh_interval_ticks = every;
        }
        Ok(config)
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs every decision and, when an output directory is set, writes CSV.
struct DemoObserver {
    tracing: TracingObserver,
    output:  Option<TripOutputObserver<CsvWriter>>,
    /// Output could not be opened; the trip still runs.
    setup_error: Option<OutputError>,
}

impl DemoObserver {
    fn new(trip: TripId, dir: Option<&Path>, config: &TripConfig) -> Self {
        let (output, setup_error) = match dir.map(|d| open_output(&d.join(format!("trip_{}", trip.get())), config)) {
            None => (None, None),
            Some(Ok(obs)) => (Some(obs), None),
            Some(Err(e)) => (None, Some(e)),
        };
        Self { tracing: TracingObserver, output, setup_error }
    }

    fn take_error(&mut self) -> Option<OutputError> {
        self.setup_error
            .take()
            .or_else(|| self.output.as_mut().and_then(TripOutputObserver::take_error))
    }
}

fn open_output(dir: &Path, config: &TripConfig) -> OutputResult<TripOutputObserver<CsvWriter>> {
    std::fs::create_dir_all(dir)?;
    Ok(TripOutputObserver::new(CsvWriter::new(dir)?, config))
}

impl TripObserver for DemoObserver {
    fn on_trip_start(&mut self, trip: TripId, candidates: &CandidateSet) {
        self.tracing.on_trip_start(trip, candidates);
    }

    fn on_decision(&mut self, event: &DecisionEvent) {
        self.tracing.on_decision(event);
        if let Some(output) = &mut self.output {
            output.on_decision(event);
        }
    }

    fn on_trip_end(&mut self, summary: &TripSummary) {
        self.tracing.on_trip_end(summary);
        if let Some(output) = &mut self.output {
            output.on_trip_end(summary);
        }
    }
}

// ── Reporting ─────────────────────────────────────────────────────────────────

/// Score every corridor at the departure point and print roles and reasons.
fn print_route_options<E: EnvironmentProvider>(
    env:        &E,
    model:      &CostModel,
    candidates: &CandidateSet,
    start:      i64,
) -> Result<()> {
    let snapshot: ConditionSnapshot = env.sample(candidates.origin(), start)?;
    let scored: Vec<ScoredRoute> = candidates
        .candidates()
        .iter()
        .enumerate()
        .map(|(i, r)| -> Result<ScoredRoute> { Ok(ScoredRoute::new(r, i, model.score(r, &snapshot)?)) })
        .collect::<Result<_>>()?;
    let ranked = rank(scored);

    let conditions = snapshot.weather_code().map(weather_label).unwrap_or("unknown");
    println!(
        "Departure conditions: {} traffic, {}{}",
        snapshot.effective_traffic().map(|t| t.as_str()).unwrap_or("unknown"),
        conditions,
        if snapshot.is_fallback() { " (fallback data)" } else { "" },
    );
    println!("Route options:");
    let roles = label_roles(&ranked);
    for s in &ranked {
        let role = roles
            .iter()
            .find(|(id, _)| *id == s.id)
            .map(|(_, role)| format!(" [{role}]"))
            .unwrap_or_default();
        println!(
            "  {:<28} {:>6.1} km  {:>5.1} L  {:>5.1} kg CO2  {:>4.0} min  cost {:.3}{}",
            name_of(s.id),
            s.distance_km,
            s.cost.fuel_liters,
            s.cost.co2_kg,
            s.cost.time_min,
            s.cost.total_cost,
            role,
        );
    }
    if let Some(best) = ranked.first() {
        println!("{}", explain(best, &ranked));
    }
    Ok(())
}

fn print_summary(summary: &TripSummary) {
    let history: Vec<String> = summary.route_history.iter().map(|&r| name_of(r)).collect();
    println!(
        "{}: {} after {} ticks ({}h{:02}m simulated), {} switch(es), {} degraded",
        summary.trip,
        summary.status,
        summary.ticks,
        summary.elapsed_secs / 3_600,
        summary.elapsed_secs % 3_600 / 60,
        summary.switches,
        summary.degraded_ticks,
    );
    println!("  route: {}", history.join(" -> "));
    if let Some(cost) = summary.final_cost {
        println!(
            "  final estimate: {:.1} L fuel, {:.1} kg CO2, ${:.2}, confidence {:.0}%",
            cost.fuel_liters,
            cost.co2_kg,
            cost.monetary_cost,
            cost.confidence * 100.0,
        );
    }
    if let Some(reason) = &summary.abort_reason {
        println!("  aborted: {reason}");
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = DemoConfig::load(&args)?;
    config.trip.validate()?;
    config.engine.validate()?;
    let model = CostModel::new(config.cost)?;

    let router = StaticRouter::new(corridors().into_iter().map(|(_, r)| r).collect());
    let candidates = Arc::new(CandidateSet::fetch(&router, NEW_YORK, BOSTON)?);
    info!(candidates = candidates.len(), trips = args.trips, seed = config.trip.seed, "eco-trip starting");

    let environment = |trip: u32| {
        FallbackEnvironment::new(SimulatedEnvironment::with_profile(
            config.trip.seed.wrapping_add(u64::from(trip)),
            config.environment.clone(),
        ))
    };
    print_route_options(&environment(0), &model, &candidates, config.trip.start_unix_secs)?;
    println!();

    let mut sims = Vec::with_capacity(args.trips as usize);
    for trip in 0..args.trips {
        let trip_config = TripConfig {
            seed: config.trip.seed.wrapping_add(u64::from(trip)),
            ..config.trip.clone()
        };
        let engine = EngineBuilder::new(TripId(trip), environment(trip), router.clone())
            .trip_config(trip_config)
            .engine_config(config.engine)
            .cost_model(model.clone())
            .candidates(Arc::clone(&candidates))
            .build()?;
        sims.push(TripSimulator::new(engine));
    }

    let output = args.output.as_deref();
    let results = run_fleet(sims, |sim| {
        DemoObserver::new(sim.engine().trip(), output, sim.engine().trip_config())
    });

    let mut failures = 0;
    for (result, mut observer) in results {
        if let Some(e) = observer.take_error() {
            eprintln!("output error: {e}");
        }
        match result {
            Ok(summary) => print_summary(&summary),
            Err(e) => {
                failures += 1;
                eprintln!("trip failed: {e}");
            }
        }
    }
    if let Some(dir) = output {
        println!("\nDecisions written under {}", dir.display());
    }
    anyhow::ensure!(failures == 0, "{failures} trip(s) failed to start");
    Ok(())
}
