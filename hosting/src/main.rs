use hosting::{Configuration, GameHostingThread, HostResponse};
use log::{debug, error, info};
use std::env;
use std::process;
use std::thread;
use std::time::{Duration, Instant};

fn main() {
    env_logger::init();
    let config = match env::args().nth(1) {
        Some(path) => match Configuration::from_file(&path) {
            Ok(config) => config,
            Err(error) => {
                error!("Unable to read configuration {}: {:?}", path, error);
                process::exit(1);
            }
        },
        None => Configuration::default(),
    };
    info!("Configuration: {:?}", config);

    let mut host = match GameHostingThread::spawn(config.clone()) {
        Ok(host) => host,
        Err(error) => {
            error!("Unable to start farm: {:?}", error);
            process::exit(1);
        }
    };
    let started = Instant::now();
    while host.is_running() {
        for response in host.responses() {
            match response {
                HostResponse::Events { events } => debug!("Events: {:?}", events),
                HostResponse::ActionRejected { error, failure } => {
                    info!("Action rejected ({:?}): {:?}", failure, error)
                }
            }
        }
        if let Some(duration) = config.duration {
            if started.elapsed().as_secs_f32() >= duration {
                break;
            }
        }
        thread::sleep(Duration::from_millis(100));
    }
    host.terminate();
    info!("Farm hosted for {:.1}s", started.elapsed().as_secs_f32());
}
