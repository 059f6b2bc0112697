//! Session - a mounted game running on its own tokio task.
//!
//! The task owns the [`GameLoop`]. It wakes for whichever comes first: a
//! command, the next gravity deadline, or shutdown. Every wakeup runs to
//! completion before the next one is looked at, and the resulting snapshot is
//! published on a watch channel.

use std::time::Duration;

use anyhow::Context;
use crossterm::event::KeyEvent;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::core::{GameSnapshot, GameState};
use crate::input::{ButtonCommand, DirectionalButton, InputAdapter};
use crate::types::GameAction;

use crate::config::EngineConfig;
use crate::events::{EngineEvent, EventLog};
use crate::game_loop::GameLoop;

/// Commands buffered ahead of the game task before `send` starts dropping
const MAX_PENDING_COMMANDS: usize = 64;

/// Handle to a running game
#[derive(Debug)]
pub struct Session {
    seed: u32,
    input: InputAdapter,
    mounted_at: Instant,
    cmd_tx: mpsc::Sender<GameAction>,
    snapshot_rx: watch::Receiver<GameSnapshot>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<GameSnapshot>>,
}

impl Session {
    /// Start a fresh game. Must be called from inside a tokio runtime.
    pub fn mount(config: EngineConfig) -> Self {
        let seed = config.resolve_seed();
        let game = GameLoop::new(GameState::new(seed));
        let log = EventLog::from_path(config.log_path);

        let (cmd_tx, cmd_rx) = mpsc::channel::<GameAction>(MAX_PENDING_COMMANDS);
        let (snapshot_tx, snapshot_rx) = watch::channel(game.snapshot());
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        if let Some(log) = &log {
            log.record(EngineEvent::mounted(seed));
        }

        let task = tokio::spawn(run_game(game, cmd_rx, snapshot_tx, shutdown_rx, log));

        Self {
            seed,
            input: InputAdapter::with_throttle_ms(config.throttle_ms as u64),
            mounted_at: Instant::now(),
            cmd_tx,
            snapshot_rx,
            shutdown_tx: Some(shutdown_tx),
            task: Some(task),
        }
    }

    /// Seed the randomizer was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Queue a command through the input throttle. Returns false if it was
    /// throttled, the queue is full or the game task has stopped.
    pub fn send(&mut self, action: GameAction) -> bool {
        let now_ms = self.now_ms();
        self.input.accept(action, now_ms) && self.enqueue(action)
    }

    /// Map, throttle and queue a key press. Leave keys are the host's
    /// business and are ignored here.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let now_ms = self.now_ms();
        let game_over = self.snapshot_rx.borrow().game_over;
        match self.input.handle_key(key, now_ms, game_over) {
            Some(action) => self.enqueue(action),
            None => false,
        }
    }

    /// Map, throttle and queue an on-screen button. `Leave` is passed back
    /// for the host to act on.
    pub fn handle_button(&mut self, button: DirectionalButton) -> Option<ButtonCommand> {
        let now_ms = self.now_ms();
        match self.input.handle_button(button, now_ms)? {
            ButtonCommand::Game(action) => self
                .enqueue(action)
                .then_some(ButtonCommand::Game(action)),
            ButtonCommand::Leave => Some(ButtonCommand::Leave),
        }
    }

    fn enqueue(&self, action: GameAction) -> bool {
        self.cmd_tx.try_send(action).is_ok()
    }

    fn now_ms(&self) -> u64 {
        self.mounted_at.elapsed().as_millis() as u64
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        *self.snapshot_rx.borrow()
    }

    /// Receiver that is notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Stop the timer and release the channels. Returns the final snapshot.
    pub async fn unmount(mut self) -> anyhow::Result<GameSnapshot> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        let task = self
            .task
            .take()
            .context("session task already released")?;
        task.await.context("game task failed")
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run_game(
    mut game: GameLoop,
    mut cmd_rx: mpsc::Receiver<GameAction>,
    snapshot_tx: watch::Sender<GameSnapshot>,
    mut shutdown_rx: oneshot::Receiver<()>,
    log: Option<EventLog>,
) -> GameSnapshot {
    let mut last = Instant::now();
    let mut was_over = game.state().game_over();
    let mut episode_id = game.state().episode_id();

    loop {
        let deadline = game
            .remaining_ms()
            .map(|ms| last + Duration::from_millis(ms as u64));
        let tick = async move {
            match deadline {
                Some(at) => tokio::time::sleep_until(at).await,
                None => std::future::pending::<()>().await,
            }
        };

        let action = tokio::select! {
            biased;
            _ = &mut shutdown_rx => break,
            cmd = cmd_rx.recv() => match cmd {
                Some(action) => Some(action),
                None => break,
            },
            _ = tick => None,
        };

        // Only whole milliseconds are handed to the clock; the remainder
        // carries over to the next wakeup.
        let elapsed_ms = Instant::now().saturating_duration_since(last).as_millis() as u32;
        last += Duration::from_millis(elapsed_ms as u64);

        game.advance(elapsed_ms);
        if let Some(action) = action {
            game.apply(action);
        }

        let events: Vec<_> = game.drain_events().collect();
        let state = game.state();
        if let Some(log) = &log {
            for event in &events {
                log.record(EngineEvent::lock(event, state));
            }
            if state.episode_id() != episode_id {
                log.record(EngineEvent::restart(state));
            }
            if state.game_over() && !was_over {
                log.record(EngineEvent::game_over(state));
            }
        }
        was_over = state.game_over();
        episode_id = state.episode_id();

        let next = game.snapshot();
        snapshot_tx.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    if let Some(log) = &log {
        log.record(EngineEvent::unmounted(game.state()));
    }

    game.snapshot()
}
