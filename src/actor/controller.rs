//! ResourceController: wires a resource service, the snackbar and a board.
//!
//! The controller is the only place that talks to both the backend and the
//! board. Backend failures never reach the board as errors: a failed load
//! becomes an empty list and a failed create rolls back its optimistic
//! card. Every failure is reported through the snackbar.

use super::messages::BoardEvent;
use crate::error::{ConsoleError, Result};
use crate::notify::Snackbar;
use crate::resource::{Account, Resource};
use crate::service::{ResourceService, Transport};
use crossbeam_channel::Sender;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Controller for one resource collection.
pub struct ResourceController<R: Resource, T: Transport> {
    service: ResourceService<R, T>,
    snackbar: Arc<dyn Snackbar>,
    board: Sender<BoardEvent<R>>,
}

impl<R: Resource, T: Transport> ResourceController<R, T> {
    /// Create a controller.
    pub fn new(
        service: ResourceService<R, T>,
        snackbar: Arc<dyn Snackbar>,
        board: Sender<BoardEvent<R>>,
    ) -> Self {
        Self {
            service,
            snackbar,
            board,
        }
    }

    /// The underlying service.
    pub const fn service(&self) -> &ResourceService<R, T> {
        &self.service
    }

    /// Fetch the collection and hand it to the board.
    ///
    /// On failure the board receives an empty list. Returns the number of
    /// records loaded; `Err` only if the board is gone.
    pub fn load(&self) -> Result<usize> {
        let items = match self.service.all() {
            Ok(items) => items,
            Err(err) => {
                self.snackbar.error(&err.user_message());
                Vec::new()
            }
        };
        let count = items.len();
        debug!(kind = R::KIND, count, "collection loaded");
        self.send(BoardEvent::Replace(items))?;
        Ok(count)
    }

    /// Create a record, showing it immediately and rolling back on failure.
    ///
    /// Returns the stored record, or `None` if the backend rejected it.
    pub fn create(&self, draft: &R::Draft, author: Option<&Account>) -> Result<Option<R>> {
        self.send(BoardEvent::Prepend(R::from_draft(draft, author)))?;

        match self.service.create(draft) {
            Ok(created) => {
                info!(kind = R::KIND, id = ?created.id(), "record created");
                self.snackbar.show(&format!("Success! {} created.", R::KIND));
                Ok(Some(created))
            }
            Err(err) => {
                self.send(BoardEvent::ShiftFront)?;
                self.snackbar.error(&err.user_message());
                Ok(None)
            }
        }
    }

    /// Fetch one record for editing.
    ///
    /// Without a signed-in viewer nothing is fetched.
    pub fn details(&self, id: u64, viewer: Option<&Account>) -> Option<R> {
        if viewer.is_none() {
            self.snackbar.error("You are not authorized to view this page.");
            return None;
        }
        match self.service.get(id) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(id, kind = R::KIND, error = %err, "details fetch failed");
                self.snackbar
                    .error(&format!("That {} does not exist.", R::TITLE));
                None
            }
        }
    }

    /// Save an edited record and reload the collection.
    pub fn update(&self, id: u64, record: &R) -> Result<Option<R>> {
        match self.service.update(id, record) {
            Ok(stored) => {
                self.snackbar
                    .show(&format!("{} has been updated.", R::TITLE));
                self.load()?;
                Ok(Some(stored))
            }
            Err(err) => {
                self.snackbar.error(&err.user_message());
                Ok(None)
            }
        }
    }

    /// Delete a record and drop its card from the board.
    ///
    /// The card is located by id when the event is applied, so list
    /// changes made while the delete was in flight do not shift it.
    pub fn remove(&self, id: u64) -> Result<bool> {
        match self.service.destroy(id) {
            Ok(()) => {
                self.send(BoardEvent::RemoveId { id })?;
                self.snackbar
                    .show(&format!("{} has been removed.", R::TITLE));
                Ok(true)
            }
            Err(err) => {
                self.snackbar.error(&err.user_message());
                Ok(false)
            }
        }
    }

    fn send(&self, event: BoardEvent<R>) -> Result<()> {
        self.board.send(event).map_err(|_| ConsoleError::ChannelClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{Notice, RecordingSnackbar};
    use crate::resource::{VCenter, Vdi, VdiDraft};
    use crate::service::MemoryTransport;
    use crossbeam_channel::{unbounded, Receiver};
    use serde_json::json;

    struct Fixture<R: Resource> {
        transport: Arc<MemoryTransport>,
        snackbar: Arc<RecordingSnackbar>,
        events: Receiver<BoardEvent<R>>,
        controller: ResourceController<R, Arc<MemoryTransport>>,
    }

    fn fixture<R: Resource>() -> Fixture<R> {
        let transport = Arc::new(MemoryTransport::new());
        let snackbar = Arc::new(RecordingSnackbar::new());
        let (tx, rx) = unbounded();
        let controller =
            ResourceController::new(ResourceService::new(transport.clone()), snackbar.clone(), tx);
        Fixture {
            transport,
            snackbar,
            events: rx,
            controller,
        }
    }

    fn draft(address: &str) -> VdiDraft {
        VdiDraft {
            address: address.to_string(),
            user: "admin".to_string(),
            password: "pw".to_string(),
            domain: "CORP".to_string(),
        }
    }

    #[test]
    fn test_load_replaces_board() {
        let f = fixture::<Vdi>();
        f.transport.seed(
            "/api/v1/vdis/",
            vec![json!({"id": 1, "address": "a"}), json!({"id": 2, "address": "b"})],
        );

        assert_eq!(f.controller.load().unwrap(), 2);
        match f.events.try_recv().unwrap() {
            BoardEvent::Replace(items) => assert_eq!(items.len(), 2),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(f.snackbar.notices().is_empty());
    }

    #[test]
    fn test_load_failure_substitutes_empty_list() {
        let f = fixture::<VCenter>();
        f.transport.fail_next(500, "database unavailable");

        assert_eq!(f.controller.load().unwrap(), 0);
        assert!(matches!(f.events.try_recv().unwrap(), BoardEvent::Replace(items) if items.is_empty()));
        assert_eq!(f.snackbar.notices(), vec![Notice::error("database unavailable")]);
    }

    #[test]
    fn test_create_success_keeps_optimistic_card() {
        let f = fixture::<Vdi>();
        let author = Account::named("alice");
        let created = f.controller.create(&draft("10.9.9.9"), Some(&author)).unwrap();

        assert_eq!(created.unwrap().id, Some(1));
        match f.events.try_recv().unwrap() {
            BoardEvent::Prepend(vdi) => assert_eq!(vdi.author_name(), Some("alice")),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(f.events.try_recv().is_err());
        assert_eq!(f.snackbar.notices(), vec![Notice::info("Success! VDI created.")]);
    }

    #[test]
    fn test_create_failure_rolls_back() {
        let f = fixture::<Vdi>();
        f.transport.fail_next(400, "address is required");

        assert!(f.controller.create(&draft(""), None).unwrap().is_none());
        assert!(matches!(f.events.try_recv().unwrap(), BoardEvent::Prepend(_)));
        assert!(matches!(f.events.try_recv().unwrap(), BoardEvent::ShiftFront));
        assert_eq!(f.snackbar.notices(), vec![Notice::error("address is required")]);
    }

    #[test]
    fn test_details_requires_viewer() {
        let f = fixture::<VCenter>();
        assert!(f.controller.details(1, None).is_none());
        assert!(f.transport.requests().is_empty());
        assert_eq!(
            f.snackbar.notices(),
            vec![Notice::error("You are not authorized to view this page.")]
        );
    }

    #[test]
    fn test_details_missing_record() {
        let f = fixture::<VCenter>();
        let viewer = Account::named("ops");
        assert!(f.controller.details(42, Some(&viewer)).is_none());
        assert_eq!(
            f.snackbar.notices(),
            vec![Notice::error("That Virtual Center does not exist.")]
        );
    }

    #[test]
    fn test_details_server_error_reads_as_missing() {
        let f = fixture::<Vdi>();
        f.transport
            .seed("/api/v1/vdis/", vec![json!({"id": 7, "address": "x"})]);
        f.transport.fail_next(500, "database unavailable");

        let viewer = Account::named("ops");
        assert!(f.controller.details(7, Some(&viewer)).is_none());
        assert_eq!(f.snackbar.notices(), vec![Notice::error("That VDI does not exist.")]);
    }

    #[test]
    fn test_update_reloads_collection() {
        let f = fixture::<VCenter>();
        f.transport.seed(
            "/api/v1/vcenters/",
            vec![json!({"id": 3, "address": "vc-old", "user": "root"})],
        );
        let viewer = Account::named("ops");
        let mut vcenter = f.controller.details(3, Some(&viewer)).unwrap();
        vcenter.address = "vc-new.corp.local".to_string();

        let stored = f.controller.update(3, &vcenter).unwrap().unwrap();
        assert_eq!(stored.address, "vc-new.corp.local");
        match f.events.try_recv().unwrap() {
            BoardEvent::Replace(items) => assert_eq!(items[0].address, "vc-new.corp.local"),
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(
            f.snackbar.notices(),
            vec![Notice::info("Virtual Center has been updated.")]
        );
    }

    #[test]
    fn test_remove_sends_board_event() {
        let f = fixture::<Vdi>();
        f.transport
            .seed("/api/v1/vdis/", vec![json!({"id": 5, "address": "x"})]);

        assert!(f.controller.remove(5).unwrap());
        assert!(matches!(f.events.try_recv().unwrap(), BoardEvent::RemoveId { id: 5 }));
        assert!(!f.controller.remove(5).unwrap());
        assert!(f.events.try_recv().is_err());
        assert_eq!(f.snackbar.notices().len(), 2);
    }

    #[test]
    fn test_closed_board_is_an_error() {
        let f = fixture::<Vdi>();
        drop(f.events);
        assert!(matches!(f.controller.load(), Err(ConsoleError::ChannelClosed)));
    }
}
