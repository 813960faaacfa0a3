//! Board Actor: owns the item list and republishes balanced layouts.
//!
//! The board is the single owner of the current list and viewport width.
//! Every event that changes either triggers a full rebalance; the result is
//! published as a [`BoardSnapshot`] sharing the list through an `Arc`.
//! Published lists are never mutated: a later change copies the list if a
//! snapshot still holds it.

use super::messages::{BoardEvent, BoardSnapshot, Trigger};
use crate::error::{ConsoleError, Result};
use crate::layout::ColumnBalancer;
use crate::resource::Resource;
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TrySendError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Synchronous board state: list, width and balancer.
#[derive(Debug)]
pub struct Board<R: Resource> {
    balancer: ColumnBalancer<R>,
    items: Arc<Vec<R>>,
    width: f64,
    generation: u64,
}

impl<R: Resource> Board<R> {
    /// Create an empty board for the given viewport width.
    pub fn new(balancer: ColumnBalancer<R>, width: f64) -> Self {
        Self {
            balancer,
            items: Arc::new(Vec::new()),
            width,
            generation: 0,
        }
    }

    /// Current items in display order.
    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// Current viewport width.
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Number of recomputations since creation.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Balance the current list.
    pub fn snapshot(&self, trigger: Trigger) -> BoardSnapshot<R> {
        BoardSnapshot {
            items: Arc::clone(&self.items),
            masonry: self.balancer.plan(&self.items, self.width),
            trigger,
            generation: self.generation,
        }
    }

    /// Apply an event, returning a fresh snapshot if the layout changed.
    pub fn apply(&mut self, event: BoardEvent<R>) -> Option<BoardSnapshot<R>> {
        let trigger = match event {
            BoardEvent::Viewport { width } => {
                if width.to_bits() == self.width.to_bits() {
                    return None;
                }
                self.width = width;
                Trigger::VIEWPORT
            }
            BoardEvent::Replace(items) => {
                self.items = Arc::new(items);
                Trigger::ITEMS
            }
            BoardEvent::Prepend(item) => {
                Arc::make_mut(&mut self.items).insert(0, item);
                Trigger::ITEMS
            }
            BoardEvent::ShiftFront => {
                if self.items.is_empty() {
                    return None;
                }
                Arc::make_mut(&mut self.items).remove(0);
                Trigger::ITEMS
            }
            BoardEvent::Remove { index } => {
                if index >= self.items.len() {
                    warn!(index, len = self.items.len(), kind = R::KIND, "remove out of range");
                    return None;
                }
                Arc::make_mut(&mut self.items).remove(index);
                Trigger::ITEMS
            }
            BoardEvent::RemoveId { id } => {
                let Some(index) = self.items.iter().position(|item| item.id() == Some(id)) else {
                    debug!(id, kind = R::KIND, "remove of unknown id");
                    return None;
                };
                Arc::make_mut(&mut self.items).remove(index);
                Trigger::ITEMS
            }
            BoardEvent::Shutdown => return None,
        };

        self.generation += 1;
        Some(self.snapshot(trigger))
    }
}

/// How often the board thread checks its shutdown flag while idle.
const SHUTDOWN_POLL: Duration = Duration::from_millis(25);

/// Board actor running on its own thread.
pub struct BoardActor<R: Resource> {
    /// Handle to the board thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Event sender kept for cloning.
    events: Sender<BoardEvent<R>>,
    /// Snapshot receiver.
    snapshots: Receiver<BoardSnapshot<R>>,
}

impl<R: Resource> BoardActor<R> {
    /// Spawn the board thread.
    ///
    /// The initial (empty) layout is published immediately. When the
    /// snapshot queue is full the oldest snapshot is dropped so consumers
    /// always catch up to the newest layout. The thread stops once the
    /// actor is joined or dropped, even while senders are still alive.
    pub fn spawn(board: Board<R>, event_capacity: usize, snapshot_capacity: usize) -> Result<Self> {
        let (event_tx, event_rx) = bounded::<BoardEvent<R>>(event_capacity.max(1));
        let (snapshot_tx, snapshot_rx) = bounded::<BoardSnapshot<R>>(snapshot_capacity.max(1));
        let stale_rx = snapshot_rx.clone();
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name(format!("wingrade-board-{}", R::COLLECTION))
            .spawn(move || {
                Self::run_loop(board, &event_rx, &snapshot_tx, &stale_rx, &shutdown_clone);
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
            events: event_tx,
            snapshots: snapshot_rx,
        })
    }

    /// A sender for controllers and viewport sources.
    pub fn sender(&self) -> Sender<BoardEvent<R>> {
        self.events.clone()
    }

    /// Get a reference to the snapshot receiver.
    ///
    /// Use this with `select!` alongside other event sources.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<BoardSnapshot<R>> {
        &self.snapshots
    }

    /// Send an event to the board.
    pub fn send(&self, event: BoardEvent<R>) -> Result<()> {
        self.events.send(event).map_err(|_| ConsoleError::ChannelClosed)
    }

    /// Drain pending snapshots, keeping only the newest.
    pub fn latest(&self) -> Option<BoardSnapshot<R>> {
        self.snapshots.try_iter().last()
    }

    /// Signal the board thread to stop.
    ///
    /// Events still queued are discarded.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Process queued events, then stop and wait for the thread to finish.
    pub fn join(mut self) {
        if self.events.send(BoardEvent::Shutdown).is_err() {
            self.shutdown();
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main board loop.
    fn run_loop(
        mut board: Board<R>,
        events: &Receiver<BoardEvent<R>>,
        snapshots: &Sender<BoardSnapshot<R>>,
        stale: &Receiver<BoardSnapshot<R>>,
        shutdown: &AtomicBool,
    ) {
        Self::publish(snapshots, stale, board.snapshot(Trigger::all()));

        while !shutdown.load(Ordering::Relaxed) {
            let event = match events.recv_timeout(SHUTDOWN_POLL) {
                Ok(event) => event,
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => break,
            };
            if matches!(event, BoardEvent::Shutdown) {
                break;
            }
            let Some(snapshot) = board.apply(event) else {
                continue;
            };
            debug!(
                kind = R::KIND,
                generation = snapshot.generation,
                trigger = ?snapshot.trigger,
                columns = snapshot.column_count(),
                items = snapshot.items.len(),
                "layout recomputed"
            );
            Self::publish(snapshots, stale, snapshot);
        }
        trace!(kind = R::KIND, "board loop finished");
    }

    /// Publish a snapshot, evicting the oldest if the queue is full.
    fn publish(
        snapshots: &Sender<BoardSnapshot<R>>,
        stale: &Receiver<BoardSnapshot<R>>,
        snapshot: BoardSnapshot<R>,
    ) {
        if let Err(TrySendError::Full(snapshot)) = snapshots.try_send(snapshot) {
            let _ = stale.try_recv();
            // Single producer: the eviction above leaves a free slot.
            let _ = snapshots.try_send(snapshot);
        }
    }
}

impl<R: Resource> Drop for BoardActor<R> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
