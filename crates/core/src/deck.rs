//! Deck module - dealing and looking up cards
//!
//! A deck for N pairs holds 2N cards. The first N faces are each used twice,
//! the multiset is shuffled, and ids are assigned `0..2N` in shuffled order so
//! a card's id is also its position on the table.

use arrayvec::ArrayVec;

use crate::rng::DealRng;
use crate::types::{CardId, Difficulty, Symbol, MAX_CARDS};

/// A dealt card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: CardId,
    pub symbol: Symbol,
}

/// Ordered cards on the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: ArrayVec<Card, MAX_CARDS>,
}

impl Deck {
    /// Deck with no cards (no session).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Deal a shuffled deck for `difficulty`.
    pub fn deal(difficulty: Difficulty, rng: &mut DealRng) -> Self {
        let mut symbols: ArrayVec<Symbol, MAX_CARDS> = ArrayVec::new();
        for face in 0..difficulty.pairs() {
            symbols.push(Symbol(face as u8));
            symbols.push(Symbol(face as u8));
        }
        rng.shuffle(&mut symbols);

        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(id, symbol)| Card { id, symbol })
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    pub fn symbol(&self, id: CardId) -> Option<Symbol> {
        self.get(id).map(|c| c.symbol)
    }

    /// The other card carrying the same symbol as `id`.
    pub fn partner_of(&self, id: CardId) -> Option<CardId> {
        let symbol = self.symbol(id)?;
        self.cards
            .iter()
            .find(|c| c.id != id && c.symbol == symbol)
            .map(|c| c.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn symbol_counts(deck: &Deck) -> HashMap<Symbol, usize> {
        let mut counts = HashMap::new();
        for card in deck.cards() {
            *counts.entry(card.symbol).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_empty_deck() {
        let deck = Deck::empty();
        assert!(deck.is_empty());
        assert_eq!(deck.len(), 0);
        assert!(deck.get(0).is_none());
    }

    #[test]
    fn test_deal_sizes_per_difficulty() {
        let mut rng = DealRng::new(1);
        for difficulty in Difficulty::ALL {
            let deck = Deck::deal(difficulty, &mut rng);
            assert_eq!(deck.len(), difficulty.card_count());
        }
    }

    #[test]
    fn test_every_symbol_appears_twice() {
        let mut rng = DealRng::new(42);
        for difficulty in Difficulty::ALL {
            for _ in 0..20 {
                let deck = Deck::deal(difficulty, &mut rng);
                let counts = symbol_counts(&deck);
                assert_eq!(counts.len(), difficulty.pairs());
                assert!(counts.values().all(|&n| n == 2), "{:?}", counts);
            }
        }
    }

    #[test]
    fn test_uses_first_faces_only() {
        let mut rng = DealRng::new(3);
        let deck = Deck::deal(Difficulty::Easy, &mut rng);
        assert!(deck.cards().iter().all(|c| c.symbol.0 < 5));
    }

    #[test]
    fn test_ids_are_positions() {
        let mut rng = DealRng::new(5);
        let deck = Deck::deal(Difficulty::Hard, &mut rng);
        for (i, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.id, i);
        }
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = Deck::deal(Difficulty::Medium, &mut DealRng::new(77));
        let b = Deck::deal(Difficulty::Medium, &mut DealRng::new(77));
        assert_eq!(a, b);
    }

    #[test]
    fn test_deals_are_not_identity_ordered() {
        // Unshuffled order would be 0,0,1,1,2,2,...
        let mut rng = DealRng::new(11);
        let shuffled = (0..10).any(|_| {
            let deck = Deck::deal(Difficulty::Hard, &mut rng);
            deck.cards()
                .iter()
                .enumerate()
                .any(|(i, c)| c.symbol.0 as usize != i / 2)
        });
        assert!(shuffled);
    }

    #[test]
    fn test_partner_of() {
        let deck = Deck::deal(Difficulty::Easy, &mut DealRng::new(9));
        for card in deck.cards() {
            let partner = deck.partner_of(card.id).unwrap();
            assert_ne!(partner, card.id);
            assert_eq!(deck.symbol(partner), Some(card.symbol));
        }
        assert_eq!(deck.partner_of(99), None);
    }
}
