//! Card types: suits, ranks, and the annotated card value object.

use core::cmp::Ordering;
use core::fmt;

use crate::error::CardError;

/// Card suit.
///
/// Suits carry no intrinsic ordering; which suit outranks which is decided
/// by the [`Ruleset`](crate::Ruleset) and only matters between manilhas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts (copas).
    Hearts,
    /// Diamonds (ouros).
    Diamonds,
    /// Clubs (paus).
    Clubs,
    /// Spades (espadas).
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    /// Returns the Portuguese suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Copas",
            Self::Diamonds => "Ouros",
            Self::Clubs => "Paus",
            Self::Spades => "Espadas",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank.
///
/// Truco is played with a 40-card deck: the 8s, 9s, and 10s are stripped, so
/// those ranks are simply unrepresentable. Conversions from the conventional
/// numbering (1 = Ace, 11 = Jack, 12 = Queen, 13 = King) go through
/// [`TryFrom<u8>`] and fail on the stripped numerals rather than coercing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ten playable ranks.
    pub const ALL: [Self; 10] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the conventional numeral for this rank
    /// (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
        }
    }

    /// Returns the Portuguese rank name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ás",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Jack => "Valete",
            Self::Queen => "Dama",
            Self::King => "Rei",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(numeral: u8) -> Result<Self, CardError> {
        match numeral {
            1 => Ok(Self::Ace),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            7 => Ok(Self::Seven),
            11 => Ok(Self::Jack),
            12 => Ok(Self::Queen),
            13 => Ok(Self::King),
            other => Err(CardError::InvalidRank(other)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card annotated with its strength for the current hand.
///
/// `suit` and `rank` are fixed at construction and never change. The
/// remaining fields are derived: a card has no fixed power outside a hand
/// context, and only deck building and trump derivation
/// ([`Ruleset::build_deck`](crate::Ruleset::build_deck),
/// [`Ruleset::derive_trump`](crate::Ruleset::derive_trump)) assign them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
    /// Whether this card is a manilha under the current derivation.
    is_trump: bool,
    /// Comparative power under the current derivation.
    trick_strength: u8,
    /// Trump rank this card's strength was last derived under.
    derived_trump: Option<Rank>,
}

impl Card {
    /// Creates a new card with no strength annotation.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            is_trump: false,
            trick_strength: 0,
            derived_trump: None,
        }
    }

    /// Returns whether this card is a manilha for the current hand.
    #[must_use]
    pub const fn is_trump(&self) -> bool {
        self.is_trump
    }

    /// Returns the card's comparative power for the current hand.
    ///
    /// Freshly constructed cards report 0 until deck building or trump
    /// derivation has assigned a strength.
    #[must_use]
    pub const fn trick_strength(&self) -> u8 {
        self.trick_strength
    }

    /// Returns the trump rank the strength fields were derived under, or
    /// `None` if no vira has been applied to this card yet.
    #[must_use]
    pub const fn derived_trump(&self) -> Option<Rank> {
        self.derived_trump
    }

    /// Rewrites the derived fields. Deck building and trump derivation are
    /// the only callers; nothing else may author a strength.
    pub(crate) const fn annotated(
        mut self,
        is_trump: bool,
        trick_strength: u8,
        derived_trump: Option<Rank>,
    ) -> Self {
        self.is_trump = is_trump;
        self.trick_strength = trick_strength;
        self.derived_trump = derived_trump;
        self
    }

    /// Compares the trick strength of two cards.
    ///
    /// A manilha beats any plain card; two manilhas are ordered by their
    /// suit-derived strength and never tie. Two plain cards of the same rank
    /// compare [`Ordering::Equal`] regardless of suit: the ruleset gives them
    /// no distinguishing strength, and callers decide how ties resolve
    /// ([`Trick::winner`](crate::Trick::winner) awards them to the earlier
    /// play).
    ///
    /// Both cards must carry the same derivation; comparing cards annotated
    /// under different viras is a caller error that this function cannot
    /// detect on its own (see
    /// [`TrickError::StaleDerivation`](crate::TrickError::StaleDerivation)).
    #[must_use]
    pub fn strength_cmp(&self, other: &Self) -> Ordering {
        match (self.is_trump, other.is_trump) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => self.trick_strength.cmp(&other.trick_strength),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} de {}", self.rank, self.suit)
    }
}
