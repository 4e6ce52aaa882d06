//! Semantic action IDs for Spectrum Clicker click targets.
//!
//! These IDs are registered during render and dispatched via `InputEvent::Click`.

pub const CLICK: u16 = 0;

// ── Building purchase (base + building index 0..6) ──────────────
pub const BUY_BUILDING_BASE: u16 = 100;
