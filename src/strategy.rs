//! Ready-made player strategies.

use crate::card::Card;
use crate::error::StrategyError;
use crate::hand::Hand;
use crate::player::{Strategy, TableView};

/// Flat bet used by the ready-made strategies.
pub const DEFAULT_BET: usize = 80;

/// Always splits, doubles and hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mug {
    bet: usize,
}

impl Mug {
    /// Creates a mug betting `bet` every round.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self { bet }
    }
}

impl Default for Mug {
    fn default() -> Self {
        Self::new(DEFAULT_BET)
    }
}

impl Strategy for Mug {
    fn name(&self) -> &str {
        "Mug"
    }

    fn bet(&self, _view: &TableView<'_>) -> Result<usize, StrategyError> {
        Ok(self.bet)
    }

    fn wants_to_split(&self, _hand: &Hand, _view: &TableView<'_>) -> Result<bool, StrategyError> {
        Ok(true)
    }

    fn wants_to_double_down(
        &self,
        _hand: &Hand,
        _view: &TableView<'_>,
    ) -> Result<bool, StrategyError> {
        Ok(true)
    }

    fn wants_to_hit(&self, _hand: &Hand, _view: &TableView<'_>) -> Result<bool, StrategyError> {
        Ok(true)
    }
}

/// Never splits, doubles or hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sticker {
    bet: usize,
}

impl Sticker {
    /// Creates a sticker betting `bet` every round.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self { bet }
    }
}

impl Default for Sticker {
    fn default() -> Self {
        Self::new(DEFAULT_BET)
    }
}

impl Strategy for Sticker {
    fn name(&self) -> &str {
        "Sticker"
    }

    fn bet(&self, _view: &TableView<'_>) -> Result<usize, StrategyError> {
        Ok(self.bet)
    }

    fn wants_to_split(&self, _hand: &Hand, _view: &TableView<'_>) -> Result<bool, StrategyError> {
        Ok(false)
    }

    fn wants_to_double_down(
        &self,
        _hand: &Hand,
        _view: &TableView<'_>,
    ) -> Result<bool, StrategyError> {
        Ok(false)
    }

    fn wants_to_hit(&self, _hand: &Hand, _view: &TableView<'_>) -> Result<bool, StrategyError> {
        Ok(false)
    }
}

/// Always splits, doubles on low totals and hits until a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Risker {
    bet: usize,
    hit_below: u8,
    double_below: u8,
}

impl Risker {
    /// Creates a risker betting `bet`, hitting below 19 and doubling below 12.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            bet,
            hit_below: 19,
            double_below: 12,
        }
    }

    /// Sets the totals below which the risker hits and doubles.
    #[must_use]
    pub const fn with_thresholds(mut self, hit_below: u8, double_below: u8) -> Self {
        self.hit_below = hit_below;
        self.double_below = double_below;
        self
    }
}

impl Default for Risker {
    fn default() -> Self {
        Self::new(DEFAULT_BET)
    }
}

impl Strategy for Risker {
    fn name(&self) -> &str {
        "Risker"
    }

    fn bet(&self, _view: &TableView<'_>) -> Result<usize, StrategyError> {
        Ok(self.bet)
    }

    fn wants_to_split(&self, _hand: &Hand, _view: &TableView<'_>) -> Result<bool, StrategyError> {
        Ok(true)
    }

    fn wants_to_double_down(
        &self,
        hand: &Hand,
        _view: &TableView<'_>,
    ) -> Result<bool, StrategyError> {
        Ok(hand.total() < self.double_below)
    }

    fn wants_to_hit(&self, hand: &Hand, _view: &TableView<'_>) -> Result<bool, StrategyError> {
        Ok(hand.total() < self.hit_below)
    }
}

/// Basic strategy for a multi-deck shoe where the dealer hits soft 17.
///
/// Decisions are keyed on the player's total, whether it is soft, the pair
/// value when splitting, and the dealer's up-card (ace = 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicStrategist {
    bet: usize,
}

impl BasicStrategist {
    /// Creates a basic strategist betting `bet` every round.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self { bet }
    }

    const fn split_pair(pair: u8, dealer: u8) -> bool {
        match pair {
            11 | 8 => true,
            9 => matches!(dealer, 2..=6 | 8 | 9),
            7 | 2 | 3 => matches!(dealer, 2..=7),
            6 => matches!(dealer, 2..=6),
            4 => matches!(dealer, 5 | 6),
            _ => false,
        }
    }

    const fn double(total: u8, soft: bool, dealer: u8) -> bool {
        if soft {
            match total {
                13 | 14 => matches!(dealer, 5 | 6),
                15 | 16 => matches!(dealer, 4..=6),
                17 => matches!(dealer, 3..=6),
                18 => matches!(dealer, 2..=6),
                19 => dealer == 6,
                _ => false,
            }
        } else {
            match total {
                11 => true,
                10 => matches!(dealer, 2..=9),
                9 => matches!(dealer, 3..=6),
                _ => false,
            }
        }
    }

    const fn hit(total: u8, soft: bool, dealer: u8) -> bool {
        if soft {
            match total {
                0..=17 => true,
                18 => matches!(dealer, 9..=11),
                _ => false,
            }
        } else {
            match total {
                0..=11 => true,
                12 => !matches!(dealer, 4..=6),
                13..=16 => !matches!(dealer, 2..=6),
                _ => false,
            }
        }
    }
}

impl Default for BasicStrategist {
    fn default() -> Self {
        Self::new(DEFAULT_BET)
    }
}

impl Strategy for BasicStrategist {
    fn name(&self) -> &str {
        "BasicStrategist"
    }

    fn bet(&self, _view: &TableView<'_>) -> Result<usize, StrategyError> {
        Ok(self.bet)
    }

    fn wants_to_split(&self, hand: &Hand, view: &TableView<'_>) -> Result<bool, StrategyError> {
        let pair = hand.cards().first().map_or(0, Card::value);
        Ok(Self::split_pair(pair, view.broadcast.dealer_upcard()))
    }

    fn wants_to_double_down(
        &self,
        hand: &Hand,
        view: &TableView<'_>,
    ) -> Result<bool, StrategyError> {
        Ok(Self::double(
            hand.total(),
            hand.is_soft(),
            view.broadcast.dealer_upcard(),
        ))
    }

    fn wants_to_hit(&self, hand: &Hand, view: &TableView<'_>) -> Result<bool, StrategyError> {
        Ok(Self::hit(
            hand.total(),
            hand.is_soft(),
            view.broadcast.dealer_upcard(),
        ))
    }
}

/// Plays basic strategy and scales its bet with the true count.
///
/// The bet is `max(trunc(true_count - 2), 0) * multiplier * base`, so the
/// counter sits out rounds until the count is in its favour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    play: BasicStrategist,
    base: usize,
    multiplier: usize,
}

impl Counter {
    /// Creates a counter with a base bet and a multiplier per true count.
    #[must_use]
    pub const fn new(base: usize, multiplier: usize) -> Self {
        Self {
            play: BasicStrategist::new(base),
            base,
            multiplier,
        }
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(DEFAULT_BET, 5)
    }
}

impl Strategy for Counter {
    fn name(&self) -> &str {
        "Counter"
    }

    fn bet(&self, view: &TableView<'_>) -> Result<usize, StrategyError> {
        let edge = (view.broadcast.true_count() - 2.0) as i64;
        let units = usize::try_from(edge.max(0)).unwrap_or(0);
        Ok(units.saturating_mul(self.multiplier).saturating_mul(self.base))
    }

    fn wants_to_split(&self, hand: &Hand, view: &TableView<'_>) -> Result<bool, StrategyError> {
        self.play.wants_to_split(hand, view)
    }

    fn wants_to_double_down(
        &self,
        hand: &Hand,
        view: &TableView<'_>,
    ) -> Result<bool, StrategyError> {
        self.play.wants_to_double_down(hand, view)
    }

    fn wants_to_hit(&self, hand: &Hand, view: &TableView<'_>) -> Result<bool, StrategyError> {
        self.play.wants_to_hit(hand, view)
    }
}
