// Framework bootstrap for the lander runtime.

use crate::domain::tuning::{ExhaustTuning, PlayerTuning, ViewTuning};
use crate::domain::{KeyBindings, WorldSnapshot};
use crate::frameworks::config::{self, FrameOutput};
use crate::interface_adapters::input::input_reader_task;
use crate::interface_adapters::render::{RenderSettings, render_task};
use crate::interface_adapters::sink::{JsonLinesSink, LogSink};
use crate::use_cases::game::world_task;
use crate::use_cases::{InputEvent, LoopSettings, SimSettings, Simulation};

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncBufRead;
use tokio::sync::{Notify, mpsc, watch};

/// Everything the runtime needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct RuntimeSettings {
    pub physics: LoopSettings,
    pub render_interval: Duration,
    pub frame_output: FrameOutput,
    pub seed: Option<u64>,
    pub bindings: KeyBindings,
    pub player: PlayerTuning,
    pub exhaust: ExhaustTuning,
    pub view: ViewTuning,
}

impl RuntimeSettings {
    pub fn from_env() -> Self {
        Self {
            physics: LoopSettings {
                tick_interval: config::physics_tick_interval(),
                stall_warn: config::stall_warn(),
            },
            render_interval: config::render_interval(),
            frame_output: config::frame_output(),
            seed: config::rng_seed(),
            bindings: config::key_bindings(),
            player: PlayerTuning::default(),
            exhaust: ExhaustTuning::default(),
            view: ViewTuning::default(),
        }
    }
}

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr; stdout carries frames when FRAME_OUTPUT=json.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Runs the physics loop, the render loop and the input reader until `shutdown` resolves.
///
/// Returns the final world snapshot.
pub async fn run<Rd, F>(input: Rd, settings: RuntimeSettings, shutdown: F) -> Result<WorldSnapshot>
where
    Rd: AsyncBufRead + Unpin + Send + 'static,
    F: Future<Output = ()>,
{
    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let sim = Simulation::new(
        SimSettings {
            player: settings.player,
            exhaust: settings.exhaust,
        },
        settings.bindings.clone(),
        rng,
    );

    // input_tx/rx: key transitions flow into the physics loop.
    let (input_tx, input_rx) = mpsc::channel::<InputEvent>(config::INPUT_CHANNEL_CAPACITY);
    // snapshot_tx/rx: the physics loop is the only writer; renderers read the latest.
    let (snapshot_tx, snapshot_rx) = watch::channel(sim.snapshot());

    let physics_shutdown = Arc::new(Notify::new());
    let render_shutdown = Arc::new(Notify::new());

    tracing::info!(
        seed = ?settings.seed,
        frame_output = ?settings.frame_output,
        "starting lander"
    );

    let physics = tokio::spawn(world_task(
        sim,
        input_rx,
        snapshot_tx,
        settings.physics,
        physics_shutdown.clone(),
    ));

    let render_settings = RenderSettings {
        view: settings.view,
        player: settings.player,
        exhaust: settings.exhaust,
    };
    let render = match settings.frame_output {
        FrameOutput::Json => Some(tokio::spawn(render_task(
            snapshot_rx,
            JsonLinesSink::new(std::io::stdout()),
            render_settings,
            settings.render_interval,
            render_shutdown.clone(),
        ))),
        FrameOutput::Log => Some(tokio::spawn(render_task(
            snapshot_rx,
            LogSink::new(config::LOG_SUMMARY_INTERVAL),
            render_settings,
            settings.render_interval,
            render_shutdown.clone(),
        ))),
        FrameOutput::None => None,
    };

    let reader = tokio::spawn(input_reader_task(input, input_tx));

    shutdown.await;
    tracing::info!("shutting down");

    if let Some(render) = render {
        render_shutdown.notify_one();
        render
            .await
            .map_err(|e| std::io::Error::other(format!("render loop failed: {e}")))?;
    }

    physics_shutdown.notify_one();
    let sim = physics
        .await
        .map_err(|e| std::io::Error::other(format!("physics loop failed: {e}")))?;
    reader.abort();

    Ok(sim.snapshot())
}

/// Entry point for the binary: environment config, stdin input, ctrl-c shutdown.
pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let settings = RuntimeSettings::from_env();
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    let last = run(input, settings, shutdown).await?;
    tracing::info!(
        tick = last.tick,
        simulated_ms = last.simulated_ms,
        x = last.position.x,
        y = last.position.y,
        "stopped"
    );
    Ok(())
}
