//! Card types and deck utilities.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    const fn symbol(self) -> char {
        match self {
            Self::Hearts => 'h',
            Self::Diamonds => 'd',
            Self::Clubs => 'c',
            Self::Spades => 's',
        }
    }
}

/// Rank of an ace.
pub const ACE: u8 = 1;
/// Rank of a jack.
pub const JACK: u8 = 11;
/// Rank of a queen.
pub const QUEEN: u8 = 12;
/// Rank of a king.
pub const KING: u8 = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but count as zero towards a hand total.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Blackjack value of the card: aces count 11, faces count 10.
    ///
    /// Softening an ace down to 1 is a property of the hand, not the card.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self.rank {
            ACE => 11,
            2..=10 => self.rank,
            JACK..=KING => 10,
            _ => 0,
        }
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            ACE => write!(f, "A{}", self.suit.symbol()),
            JACK => write!(f, "J{}", self.suit.symbol()),
            QUEEN => write!(f, "Q{}", self.suit.symbol()),
            KING => write!(f, "K{}", self.suit.symbol()),
            rank => write!(f, "{rank}{}", self.suit.symbol()),
        }
    }
}

/// Iterates over one canonical 52-card deck, suit by suit.
pub fn deck() -> impl Iterator<Item = Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| (ACE..=KING).map(move |rank| Card::new(suit, rank)))
}
