// src/bin/dealer_dev_cli.rs

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use poker_dealer::api::{apply_ui_action, build_round_view, primary_button_label, UiAction};
use poker_dealer::domain::phase::RoundPhase;
use poker_dealer::scene::{RecordingScene, TracingStatus};
use poker_dealer::{DealerConfig, RoundStateMachine};

/// Dev-CLI: прогоняет раунды раздачи на фиксированном такте и печатает стол.
#[derive(Parser, Debug)]
#[command(name = "dealer_dev_cli")]
struct Cli {
    /// TOML-конфиг (seed + тайминги).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed раздач (перекрывает конфиг).
    #[arg(long)]
    seed: Option<u64>,

    /// Сколько раундов сыграть.
    #[arg(long, default_value_t = 1)]
    rounds: u32,

    /// Частота кадров симуляции.
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Сфолдить после флопа вместо доигрывания до ривера.
    #[arg(long)]
    fold_after_flop: bool,

    /// Напечатать историю раунда в JSON.
    #[arg(long)]
    dump_history: bool,

    #[arg(long)]
    debug: bool,
}

/// Потолок кадров на одну фазу, чтобы не зависнуть на битом конфиге.
const MAX_FRAMES_PER_PHASE: usize = 10_000;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_filter = if cli.debug { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(cli.debug)
        .init();

    let mut config = match &cli.config {
        Some(path) => DealerConfig::load(path)
            .with_context(|| format!("loading dealer config '{}'", path.display()))?,
        None => DealerConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let scene = RecordingScene::new();
    let mut machine = RoundStateMachine::standard()
        .with_rules(config.choreography.clone())
        .with_scene(scene.clone())
        .with_status(TracingStatus);
    if let Some(seed) = config.rng_seed() {
        machine = machine.with_seed(seed);
    }

    let dt = 1.0 / cli.fps.max(1.0);

    for round in 1..=cli.rounds {
        println!();
        println!("================ ROUND {round} =================");

        loop {
            let phase = machine.phase();
            let action = if cli.fold_after_flop && phase == RoundPhase::Flop {
                UiAction::Fold
            } else {
                UiAction::Bet
            };
            println!("[CLI] [{}] нажимаем {:?}", primary_button_label(phase), action);

            let transition = apply_ui_action(&mut machine, action)
                .with_context(|| format!("dealing in phase {phase}"))?;
            let frames = machine.settle(dt, MAX_FRAMES_PER_PHASE);
            println!(
                "[CLI] {:?} | анимации закончились за {} кадров ({:.2} с)",
                transition,
                frames,
                frames as f32 * dt
            );
            print_table(&machine);

            if machine.phase() == RoundPhase::Idle {
                break;
            }
        }

        if cli.dump_history {
            let json = serde_json::to_string_pretty(machine.history())
                .context("serializing round history")?;
            println!("{json}");
        }
    }

    let log = scene.snapshot();
    println!();
    println!(
        "[CLI] сцена: добавлено {}, убрано {}, на столе {}",
        log.added.len(),
        log.removed.len(),
        log.live().len()
    );
    Ok(())
}

fn print_table(machine: &RoundStateMachine) {
    let view = build_round_view(machine);
    println!(
        "  round={} phase={} status=\"{}\" deck={}",
        view.round_id, view.phase, view.status, view.deck_remaining
    );
    for seat in &view.seats {
        if seat.cards.is_empty() {
            continue;
        }
        let cards: Vec<String> = seat
            .cards
            .iter()
            .map(|c| format!("{}{}", c.card, if c.face_up { "" } else { "(закрыта)" }))
            .collect();
        println!("  seat {}: {}", seat.seat, cards.join(" "));
    }
    if !view.board.is_empty() {
        let board: Vec<&str> = view.board.iter().map(|c| c.card.as_str()).collect();
        println!("  board: {}", board.join(" "));
    }
}
