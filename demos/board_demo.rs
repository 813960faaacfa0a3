//! Board demo: load VDIs from an in-memory backend and watch the layout
//! follow list changes and viewport resizes.
//!
//! Run with `RUST_LOG=debug` to see the actor and service logs. Pass
//! `--terminal` to follow real terminal resizes until Ctrl+C.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tracing_subscriber::EnvFilter;
use wingrade::actor::current_width;
use wingrade::{
    Account, Board, BoardActor, BoardEvent, BoardSnapshot, ColumnBalancer, ConsoleConfig,
    MemoryTransport, ResourceController, ResourceService, TracingSnackbar, Vdi, VdiDraft,
    ViewportActor,
};

fn print_snapshot(snapshot: &BoardSnapshot<Vdi>) {
    println!(
        "generation {} ({:?}) width {}px -> {} columns",
        snapshot.generation,
        snapshot.trigger,
        snapshot.width(),
        snapshot.column_count()
    );
    for (index, column) in snapshot.columns().iter().enumerate() {
        let addresses: Vec<&str> = column.iter().map(|vdi| vdi.address.as_str()).collect();
        println!("  [{index}] {}", addresses.join(" | "));
    }
}

fn main() -> wingrade::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ConsoleConfig::default();
    let transport = Arc::new(MemoryTransport::new());
    transport.seed(
        "/api/v1/vdis/",
        vec![
            json!({"id": 1, "address": "10.0.0.12", "user": "admin", "domain": "CORP", "author": {"username": "jdoe"}}),
            json!({"id": 2, "address": "vdi-finance-01.corp.local", "user": "fin", "domain": "CORP"}),
            json!({"id": 3, "address": "desk7", "user": "ops", "domain": "LAB"}),
            json!({"id": 4, "address": "192.168.100.250", "user": "qa", "domain": "LAB"}),
            json!({"id": 5, "address": "win10-build.ci.corp.local", "user": "ci", "domain": "CORP"}),
        ],
    );

    let balancer = ColumnBalancer::<Vdi>::for_resources().with_breakpoints(config.breakpoints.clone());
    let board = BoardActor::spawn(
        Board::new(balancer, 700.0),
        config.event_capacity,
        config.snapshot_capacity,
    )?;
    let controller = ResourceController::new(
        ResourceService::with_api_root(transport.clone(), &config.api_root),
        Arc::new(TracingSnackbar),
        board.sender(),
    );

    controller.load()?;
    board.send(BoardEvent::Viewport { width: 1000.0 })?;
    controller.create(
        &VdiDraft {
            address: "new-desktop.corp.local".to_string(),
            user: "admin".to_string(),
            password: "secret".to_string(),
            domain: "CORP".to_string(),
        },
        Some(&Account::named("jdoe")),
    )?;
    transport.fail_next(400, "Duplicate address.");
    controller.create(
        &VdiDraft {
            address: "10.0.0.12".to_string(),
            user: "admin".to_string(),
            password: "secret".to_string(),
            domain: "CORP".to_string(),
        },
        None,
    )?;
    board.send(BoardEvent::Viewport { width: 1280.0 })?;

    while let Ok(snapshot) = board.receiver().recv_timeout(Duration::from_millis(200)) {
        print_snapshot(&snapshot);
    }

    if std::env::args().any(|arg| arg == "--terminal") {
        board.send(BoardEvent::Viewport {
            width: current_width(config.cell_width_px)?,
        })?;
        let viewport =
            ViewportActor::spawn(board.sender(), config.cell_width_px, config.input_poll_timeout())?;
        println!("Resize the terminal; Ctrl+C to quit.");
        while let Ok(snapshot) = board.receiver().recv() {
            print_snapshot(&snapshot);
        }
        viewport.join();
    }

    board.join();
    Ok(())
}
