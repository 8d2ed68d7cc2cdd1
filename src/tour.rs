//! Background worker that cycles through the feature screenshots.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::selection::{FeatureChoice, SelectableOption};

/// Command messages sent to the tour worker.
#[derive(Debug, Clone, Copy)]
pub enum TourCommand {
    /// Stop the worker loop.
    Stop,
    /// Advance to the next feature immediately.
    Next,
}

/// Events emitted by the worker to inform the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourEvent {
    /// Control value the UI should feed to the feature selector.
    Select(SelectableOption),
}

/// Handle to a background tour thread.
#[derive(Debug)]
pub struct TourWorker {
    cmd_tx: Sender<TourCommand>,
    event_rx: Receiver<TourEvent>,
    join: Option<thread::JoinHandle<()>>,
}

impl TourWorker {
    /// Spawn a tour that starts after `current` and steps every `interval`.
    pub fn start(current: FeatureChoice, interval: Duration) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (evt_tx, evt_rx) = mpsc::channel();

        let handle = thread::spawn(move || run_worker(current, interval, cmd_rx, evt_tx));
        log::info!("tour started, interval {}s", interval.as_secs_f32());

        Self {
            cmd_tx,
            event_rx: evt_rx,
            join: Some(handle),
        }
    }

    /// Send a request to advance to the next feature.
    pub fn request_next(&self) {
        let _ = self.cmd_tx.send(TourCommand::Next);
    }

    /// Stop the worker thread without blocking the UI thread.
    pub fn stop(mut self) {
        let _ = self.cmd_tx.send(TourCommand::Stop);
        if let Some(join) = self.join.take() {
            thread::spawn(move || {
                let _ = join.join();
            });
        }
        log::info!("tour stopped");
    }

    /// Drain any pending events into the provided buffer.
    pub fn drain_events(&self, out: &mut Vec<TourEvent>) {
        while let Ok(evt) = self.event_rx.try_recv() {
            out.push(evt);
        }
    }
}

/// Main worker loop; exits on `Stop` or once the UI side hangs up.
fn run_worker(
    mut current: FeatureChoice,
    interval: Duration,
    cmd_rx: Receiver<TourCommand>,
    evt_tx: Sender<TourEvent>,
) {
    loop {
        match wait_or_command(&cmd_rx, interval) {
            Some(TourCommand::Stop) => break,
            Some(TourCommand::Next) | None => {}
        }
        current = current.next();
        if evt_tx.send(TourEvent::Select(current.value())).is_err() {
            break;
        }
    }
}

/// Block until the interval elapses or a command arrives.
fn wait_or_command(cmd_rx: &Receiver<TourCommand>, interval: Duration) -> Option<TourCommand> {
    let step = Duration::from_millis(100);
    let start = Instant::now();
    while start.elapsed() < interval {
        match cmd_rx.try_recv() {
            Ok(cmd) => return Some(cmd),
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => return Some(TourCommand::Stop),
        }
        let remaining = interval.saturating_sub(start.elapsed());
        thread::sleep(step.min(remaining));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wait_for_events(worker: &TourWorker, count: usize) -> Vec<TourEvent> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut events = Vec::new();
        while events.len() < count && Instant::now() < deadline {
            worker.drain_events(&mut events);
            thread::sleep(Duration::from_millis(5));
        }
        events
    }

    #[test]
    fn tour_cycles_in_order() {
        let worker = TourWorker::start(FeatureChoice::TableOfContents, Duration::from_millis(10));
        let events = wait_for_events(&worker, 4);
        worker.stop();

        assert!(events.len() >= 4);
        assert_eq!(
            &events[..4],
            &[
                TourEvent::Select(SelectableOption(1)),
                TourEvent::Select(SelectableOption(2)),
                TourEvent::Select(SelectableOption(3)),
                TourEvent::Select(SelectableOption(1)),
            ]
        );
    }

    #[test]
    fn next_skips_the_wait() {
        let worker = TourWorker::start(FeatureChoice::Bookmarks, Duration::from_secs(60));
        worker.request_next();
        let events = wait_for_events(&worker, 1);
        worker.stop();

        assert_eq!(events, vec![TourEvent::Select(SelectableOption(2))]);
    }

    #[test]
    fn stop_before_interval_emits_nothing() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (evt_tx, evt_rx) = mpsc::channel();
        cmd_tx.send(TourCommand::Stop).unwrap();
        run_worker(FeatureChoice::Bookmarks, Duration::from_secs(60), cmd_rx, evt_tx);
        assert!(evt_rx.try_recv().is_err());
    }
}
