//! Structured diagnostics for the browser console.
//!
//! Each event is serialized to a single JSON object so the devtools console
//! can be filtered by `event`. Off the browser the line goes to stderr.

use serde::Serialize;

/// A diagnostic event worth surfacing in the console.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ConsoleEvent {
    GameStarted {
        buildings: usize,
        ticks_per_sec: u32,
    },
    BuildingPurchased {
        building: &'static str,
        count: u32,
        price: u64,
        clicks_left: u64,
    },
    PurchaseRejected {
        building: &'static str,
        price: u64,
        clicks: u64,
    },
    /// A tap landed on the grid but on no registered target.
    ClickMissed { x: f64, y: f64, targets: usize },
}

impl ConsoleEvent {
    fn is_warning(&self) -> bool {
        matches!(self, ConsoleEvent::ClickMissed { .. })
    }
}

/// Serialize an event into the line written to the console.
pub fn to_line(event: &ConsoleEvent) -> String {
    match serde_json::to_string(event) {
        Ok(json) => json,
        Err(e) => format!("{{\"event\":\"unserializable\",\"error\":\"{}\"}}", e),
    }
}

/// Write an event to the console (`console.warn` for warnings).
#[cfg(target_arch = "wasm32")]
pub fn emit(event: &ConsoleEvent) {
    let line = to_line(event);
    if event.is_warning() {
        web_sys::console::warn_1(&line.into());
    } else {
        web_sys::console::log_1(&line.into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn emit(event: &ConsoleEvent) {
    let level = if event.is_warning() { "warn" } else { "log" };
    eprintln!("[{}] {}", level, to_line(event));
}
