use farmhand::api::{Action, ActionError, Event, Failure};
use farmhand::data::{DataError, Knowledge};
use farmhand::Game;
use log::{debug, error, info};
use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender, TryIter};
use std::sync::Arc;
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

pub use config::*;
pub use storage::*;

mod config;
mod storage;

#[derive(Debug, Clone, PartialEq)]
pub enum HostResponse {
    Events { events: Vec<Event> },
    ActionRejected { error: ActionError, failure: Failure },
}

#[derive(Debug)]
pub enum HostingError {
    Knowledge(DataError),
    KnowledgeFile(std::io::Error),
    Storage(StorageError),
    ThreadLost,
}

impl From<DataError> for HostingError {
    fn from(error: DataError) -> Self {
        Self::Knowledge(error)
    }
}

impl From<StorageError> for HostingError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

/// Runs the farm on its own thread at a fixed tick rate.
pub struct GameHostingThread {
    running: Arc<AtomicBool>,
    actions: Sender<Action>,
    responses: Receiver<HostResponse>,
    handle: Option<JoinHandle<()>>,
}

impl GameHostingThread {
    pub fn spawn(config: Configuration) -> Result<Self, HostingError> {
        let running = Arc::new(AtomicBool::new(true));
        let running_thread = running.clone();
        let (actions, actions_receiver) = channel::<Action>();
        let (responses_sender, responses) = channel::<HostResponse>();
        let (notify_started, started) = channel::<Result<(), HostingError>>();
        let handle = thread::spawn(move || {
            info!("Start game hosting thread");
            let (mut game, storage) = match setup(&config) {
                Ok(setup) => setup,
                Err(error) => {
                    let _ = notify_started.send(Err(error));
                    return;
                }
            };
            let _ = notify_started.send(Ok(()));
            let frame = Duration::from_secs_f32(config.frame());
            let autosave_interval = Duration::from_secs_f32(config.autosave_interval.max(0.0));
            let mut tick = Instant::now();
            let mut last_save = Instant::now();
            while running_thread.load(Ordering::Relaxed) {
                let frame_started = Instant::now();
                for action in actions_receiver.try_iter() {
                    let response = match game.perform_action(action) {
                        Ok(events) => HostResponse::Events { events },
                        Err(error) => {
                            debug!("Action rejected: {:?}", error);
                            HostResponse::ActionRejected {
                                failure: error.failure(),
                                error,
                            }
                        }
                    };
                    let _ = responses_sender.send(response);
                }

                let time = tick.elapsed().as_secs_f32();
                tick = Instant::now();
                let events = game.update(time);
                if !events.is_empty() {
                    let _ = responses_sender.send(HostResponse::Events { events });
                }

                if last_save.elapsed() >= autosave_interval {
                    last_save = Instant::now();
                    save(&game, &storage);
                }

                thread::sleep(frame.saturating_sub(frame_started.elapsed()));
            }
            save(&game, &storage);
            info!("Stop game hosting thread");
        });
        match started.recv() {
            Ok(Ok(())) => Ok(Self {
                running,
                actions,
                responses,
                handle: Some(handle),
            }),
            Ok(Err(error)) => Err(error),
            Err(_) => Err(HostingError::ThreadLost),
        }
    }

    pub fn perform(&self, action: Action) {
        if self.actions.send(action).is_err() {
            error!("Unable to perform action, hosting thread stopped");
        }
    }

    pub fn responses(&self) -> TryIter<HostResponse> {
        self.responses.try_iter()
    }

    pub fn wait_response(&self, timeout: Duration) -> Option<HostResponse> {
        self.responses.recv_timeout(timeout).ok()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
            && self
                .handle
                .as_ref()
                .map(|handle| !handle.is_finished())
                .unwrap_or(false)
    }

    pub fn terminate(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("Game hosting thread panicked");
            }
        }
    }
}

impl Drop for GameHostingThread {
    fn drop(&mut self) {
        self.terminate();
    }
}

fn setup(config: &Configuration) -> Result<(Game, Storage), HostingError> {
    let knowledge = match &config.knowledge {
        Some(path) => {
            info!("Load knowledge from {}", path);
            let json = fs::read_to_string(path).map_err(HostingError::KnowledgeFile)?;
            Knowledge::from_json(&json)?
        }
        None => Knowledge::default(),
    };
    let mut game = match config.seed {
        Some(seed) => Game::with_seed(knowledge, seed),
        None => Game::new(knowledge),
    };
    let storage = Storage::open(&config.database)?;
    match storage.load_latest() {
        Ok(Some(snapshot)) => game.restore(snapshot),
        Ok(None) => info!("No saved farm, starting a new one"),
        Err(error) => error!("Unable to load saved farm, starting a new one: {:?}", error),
    }
    Ok((game, storage))
}

fn save(game: &Game, storage: &Storage) {
    match storage.save(&game.snapshot()) {
        Ok(id) => debug!("Farm saved as {}", id),
        Err(error) => error!("Unable to save farm: {:?}", error),
    }
}
