//! Spectrum Clicker game logic — pure functions, fully testable.

use crate::console::{self, ConsoleEvent};

use super::state::{Building, BuildingKind, SpectrumState, PRODUCTION_INTERVAL_TICKS};

/// Total clicks per second produced by `buildings`.
pub fn production_rate(buildings: &[Building]) -> u64 {
    buildings
        .iter()
        .fold(0u64, |acc, b| acc.saturating_add(b.output()))
}

/// Advance the game by `delta_ticks` ticks (at 10 ticks/sec).
///
/// Each tick computes the production rate once and feeds it to both the
/// passive payout (every [`PRODUCTION_INTERVAL_TICKS`]) and the rate display.
pub fn tick(state: &mut SpectrumState, delta_ticks: u32) {
    for _ in 0..delta_ticks {
        step(state);
    }
}

fn step(state: &mut SpectrumState) {
    state.per_second = production_rate(&state.buildings);
    state.total_ticks += 1;
    state.anim_frame = state.anim_frame.wrapping_add(1);

    state.production_ticks += 1;
    if state.production_ticks >= PRODUCTION_INTERVAL_TICKS {
        state.production_ticks = 0;
        earn(state, state.per_second);
    }

    refresh(state);

    state.click_flash = state.click_flash.saturating_sub(1);
    state.purchase_flash = state.purchase_flash.saturating_sub(1);
}

fn earn(state: &mut SpectrumState, amount: u64) {
    state.clicks = state.clicks.saturating_add(amount);
    state.clicks_all_time = state.clicks_all_time.saturating_add(amount);
}

/// Recompute price, affordability and contribution for every building.
pub fn refresh(state: &mut SpectrumState) {
    let clicks = state.clicks;
    let total = state.per_second;
    for b in &mut state.buildings {
        b.refresh(clicks, total);
    }
}

/// Manual click: add one click.
pub fn click(state: &mut SpectrumState) {
    earn(state, 1);
    state.total_clicks += 1;
    state.click_flash = 3;
    refresh(state);
}

/// Try to buy one unit of `kind`. Returns true if successful.
///
/// Insufficient clicks leave the state untouched.
pub fn buy_building(state: &mut SpectrumState, kind: BuildingKind) -> bool {
    let idx = kind.index();
    let price = state.buildings[idx].price_at(state.buildings[idx].count);
    if state.clicks < price {
        console::emit(&ConsoleEvent::PurchaseRejected {
            building: kind.name(),
            price,
            clicks: state.clicks,
        });
        return false;
    }

    state.clicks -= price;
    state.buildings[idx].count += 1;
    state.per_second = production_rate(&state.buildings);
    state.purchase_flash = 5;
    refresh(state);

    let count = state.buildings[idx].count;
    state.add_log(&format!("{} を購入！ ({}台)", kind.name(), count), false);
    console::emit(&ConsoleEvent::BuildingPurchased {
        building: kind.name(),
        count,
        price,
        clicks_left: state.clicks,
    });
    true
}

/// Rate display text, e.g. `"128 per second"`.
pub fn per_second_label(per_second: u64) -> String {
    format!("{} per second", per_second)
}

/// Contribution display text: two decimals, `--` while undefined.
pub fn contribution_label(contribution: Option<f64>) -> String {
    match contribution {
        Some(pct) => format!("{:.2}%", pct),
        None => "--".to_string(),
    }
}

/// Format an integer with thousands separators.
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
