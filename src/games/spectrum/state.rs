//! Spectrum Clicker game state definitions.

use ratzilla::ratatui::style::Color;

/// Game ticks between two passive production payouts (1 second).
pub const PRODUCTION_INTERVAL_TICKS: u32 = 10;

/// Maximum number of retained log entries.
pub const LOG_CAPACITY: usize = 50;

/// The seven building colours, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildingKind {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Violet,
}

impl BuildingKind {
    /// All building kinds in display order.
    pub fn all() -> &'static [BuildingKind] {
        &[
            BuildingKind::Red,
            BuildingKind::Orange,
            BuildingKind::Yellow,
            BuildingKind::Green,
            BuildingKind::Blue,
            BuildingKind::Indigo,
            BuildingKind::Violet,
        ]
    }

    /// Position in [`BuildingKind::all`].
    pub fn index(&self) -> usize {
        match self {
            BuildingKind::Red => 0,
            BuildingKind::Orange => 1,
            BuildingKind::Yellow => 2,
            BuildingKind::Green => 3,
            BuildingKind::Blue => 4,
            BuildingKind::Indigo => 5,
            BuildingKind::Violet => 6,
        }
    }

    /// Look a kind up by its purchase key (`'1'`..=`'7'`).
    pub fn from_key(key: char) -> Option<BuildingKind> {
        let idx = key.to_digit(10)?.checked_sub(1)? as usize;
        BuildingKind::all().get(idx).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            BuildingKind::Red => "Red",
            BuildingKind::Orange => "Orange",
            BuildingKind::Yellow => "Yellow",
            BuildingKind::Green => "Green",
            BuildingKind::Blue => "Blue",
            BuildingKind::Indigo => "Indigo",
            BuildingKind::Violet => "Violet",
        }
    }

    /// Clicks per second produced by one unit.
    pub fn base_production(&self) -> u64 {
        1 << self.index()
    }

    /// Price of the first unit.
    pub fn initial_price(&self) -> u64 {
        1 << self.index()
    }

    /// Key to buy (1-7 mapped to building index).
    pub fn key(&self) -> char {
        match self {
            BuildingKind::Red => '1',
            BuildingKind::Orange => '2',
            BuildingKind::Yellow => '3',
            BuildingKind::Green => '4',
            BuildingKind::Blue => '5',
            BuildingKind::Indigo => '6',
            BuildingKind::Violet => '7',
        }
    }

    /// Terminal colour used for this building's row.
    pub fn color(&self) -> Color {
        match self {
            BuildingKind::Red => Color::Red,
            BuildingKind::Orange => Color::Rgb(255, 165, 0),
            BuildingKind::Yellow => Color::Yellow,
            BuildingKind::Green => Color::Green,
            BuildingKind::Blue => Color::Blue,
            BuildingKind::Indigo => Color::Rgb(75, 0, 130),
            BuildingKind::Violet => Color::Rgb(238, 130, 238),
        }
    }
}

/// A purchasable building and its derived display fields.
#[derive(Clone, Debug)]
pub struct Building {
    pub kind: BuildingKind,
    pub count: u32,
    /// Clicks per second per unit.
    pub production: u64,
    pub initial_price: u64,
    /// Price of the next unit. Always `price_at(count)` after a refresh.
    pub current_price: u64,
    /// Whether `current_price` fits in the available clicks.
    pub can_buy: bool,
    /// Stored but never applied to production.
    pub multiplier: u32,
    /// Share of total production in percent, two decimals.
    /// `None` while nothing is produced at all.
    pub contribution: Option<f64>,
}

impl Building {
    pub fn new(kind: BuildingKind) -> Self {
        Self {
            kind,
            count: 0,
            production: kind.base_production(),
            initial_price: kind.initial_price(),
            current_price: kind.initial_price(),
            can_buy: false,
            multiplier: 1,
            contribution: None,
        }
    }

    /// Price of the next unit when `count` units are already owned.
    pub fn price_at(&self, count: u32) -> u64 {
        if count == 0 {
            self.initial_price
        } else {
            self.initial_price.saturating_mul(count as u64 + 1)
        }
    }

    /// Clicks per second produced by all owned units.
    pub fn output(&self) -> u64 {
        (self.count as u64).saturating_mul(self.production)
    }

    pub fn update_can_buy(&mut self, clicks: u64) {
        self.can_buy = self.current_price <= clicks;
    }

    pub fn update_current_price(&mut self) {
        self.current_price = self.price_at(self.count);
    }

    pub fn update_contribution(&mut self, total_per_second: u64) {
        self.contribution = if total_per_second == 0 {
            None
        } else {
            let pct = self.output() as f64 / total_per_second as f64 * 100.0;
            Some((pct * 100.0).round() / 100.0)
        };
    }

    /// Recompute every derived field from `count` and the current clicks.
    pub fn refresh(&mut self, clicks: u64, total_per_second: u64) {
        self.update_current_price();
        self.update_can_buy(clicks);
        self.update_contribution(total_per_second);
    }
}

/// Log entry for the Spectrum game.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub text: String,
    pub is_important: bool,
}

/// Full state of a Spectrum Clicker game.
pub struct SpectrumState {
    /// Clicks available to spend.
    pub clicks: u64,
    /// Every click ever earned, manual and passive.
    pub clicks_all_time: u64,
    /// Manual clicks count.
    pub total_clicks: u64,
    pub buildings: Vec<Building>,
    /// Total production rate, recomputed once per tick.
    pub per_second: u64,
    pub total_ticks: u64,
    /// Ticks since the last passive payout.
    pub production_ticks: u32,
    pub log: Vec<LogEntry>,
    /// Animation frame counter (incremented every tick).
    pub anim_frame: u32,
    /// Ticks of visual feedback left after a manual click.
    pub click_flash: u32,
    /// Ticks of visual feedback left after a purchase.
    pub purchase_flash: u32,
}

impl SpectrumState {
    pub fn new() -> Self {
        let buildings = BuildingKind::all().iter().map(|k| Building::new(*k)).collect();

        Self {
            clicks: 0,
            clicks_all_time: 0,
            total_clicks: 0,
            buildings,
            per_second: 0,
            total_ticks: 0,
            production_ticks: 0,
            log: vec![LogEntry {
                text: "Spectrum Clicker へようこそ！".into(),
                is_important: true,
            }],
            anim_frame: 0,
            click_flash: 0,
            purchase_flash: 0,
        }
    }

    pub fn building(&self, kind: BuildingKind) -> &Building {
        &self.buildings[kind.index()]
    }

    pub fn add_log(&mut self, text: &str, is_important: bool) {
        self.log.push(LogEntry {
            text: text.to_string(),
            is_important,
        });
        if self.log.len() > LOG_CAPACITY {
            self.log.remove(0);
        }
    }
}

impl Default for SpectrumState {
    fn default() -> Self {
        Self::new()
    }
}
