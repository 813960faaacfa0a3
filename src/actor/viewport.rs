//! Viewport Actor: dedicated thread turning terminal resizes into width events.
//!
//! This actor polls crossterm for resize events and forwards each new
//! width to a board as [`BoardEvent::Viewport`]. Terminal columns are
//! converted to pixels with a fixed cell width so the same breakpoint
//! table serves browser and terminal hosts.

use super::messages::BoardEvent;
use crate::error::Result;
use crate::resource::Resource;
use crossbeam_channel::Sender;
use crossterm::event::{self, Event};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{trace, warn};

/// Viewport width in pixels for a terminal of `columns` cells.
#[inline]
pub fn terminal_width_px(columns: u16, cell_width_px: f64) -> f64 {
    f64::from(columns) * cell_width_px
}

/// Current terminal width in pixels.
pub fn current_width(cell_width_px: f64) -> Result<f64> {
    let (columns, _) = crossterm::terminal::size()?;
    Ok(terminal_width_px(columns, cell_width_px))
}

/// Viewport actor that polls terminal resize events.
pub struct ViewportActor {
    /// Handle to the polling thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl ViewportActor {
    /// Spawn the viewport thread.
    ///
    /// # Arguments
    ///
    /// * `sender` - Board event channel receiving width changes.
    /// * `cell_width_px` - Pixel width of one terminal cell.
    /// * `poll_timeout` - How long to wait for events before checking shutdown.
    pub fn spawn<R: Resource>(
        sender: Sender<BoardEvent<R>>,
        cell_width_px: f64,
        poll_timeout: Duration,
    ) -> Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("wingrade-viewport".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, cell_width_px, poll_timeout);
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the viewport thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the viewport thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main polling loop.
    fn run_loop<R: Resource>(
        sender: &Sender<BoardEvent<R>>,
        shutdown: &AtomicBool,
        cell_width_px: f64,
        poll_timeout: Duration,
    ) {
        while !shutdown.load(Ordering::Relaxed) {
            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        let Some(width) = Self::convert_event(&event, cell_width_px) else {
                            continue;
                        };
                        trace!(width, "viewport resized");
                        if sender.send(BoardEvent::Viewport { width }).is_err() {
                            // Board dropped, exit
                            break;
                        }
                    }
                    Err(err) => warn!(error = %err, "failed to read terminal event"),
                },
                Ok(false) => {}
                Err(err) => {
                    warn!(error = %err, "terminal poll failed");
                    thread::sleep(poll_timeout);
                }
            }
        }
    }

    /// Convert a crossterm event into a viewport width, if it is a resize.
    pub fn convert_event(event: &Event, cell_width_px: f64) -> Option<f64> {
        match event {
            Event::Resize(columns, _) => Some(terminal_width_px(*columns, cell_width_px)),
            _ => None,
        }
    }
}

impl Drop for ViewportActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::column_count_for_width;

    #[test]
    fn test_resize_converts_to_pixels() {
        let width = ViewportActor::convert_event(&Event::Resize(150, 40), 8.0);
        assert_eq!(width, Some(1200.0));
        assert_eq!(column_count_for_width(width.unwrap()), 8);
    }

    #[test]
    fn test_other_events_ignored() {
        assert_eq!(ViewportActor::convert_event(&Event::FocusGained, 8.0), None);
        assert_eq!(
            ViewportActor::convert_event(&Event::Paste("x".to_string()), 8.0),
            None
        );
    }

    #[test]
    fn test_narrow_terminal_two_columns() {
        assert_eq!(column_count_for_width(terminal_width_px(80, 8.0)), 2);
        assert_eq!(column_count_for_width(terminal_width_px(100, 8.0)), 4);
    }
}
