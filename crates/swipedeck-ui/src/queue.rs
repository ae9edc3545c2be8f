//! Ordered card queue. The front card is the interactive top of the stack.

use std::collections::{HashSet, VecDeque};

use crate::card::Card;
use crate::error::DeckError;

/// The deck, front first. Validated once at construction; afterwards the
/// only mutation is popping the front when a dismissal lands.
#[derive(Debug, Clone)]
pub struct CardQueue {
    cards: VecDeque<Card>,
}

impl CardQueue {
    /// Build a queue. Rejects duplicate ids and blank image keys; an
    /// empty deck is valid and renders as the terminal empty state.
    pub fn new(cards: Vec<Card>) -> Result<Self, DeckError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(card.id) {
                return Err(DeckError::PreconditionViolation {
                    detail: format!("duplicate card id {}", card.id),
                });
            }
            if card.image.is_blank() {
                return Err(DeckError::PreconditionViolation {
                    detail: format!("card {} has a blank image key", card.id),
                });
            }
        }
        Ok(Self {
            cards: cards.into(),
        })
    }

    pub fn peek_top(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Up to two cards in back-to-front stacking order: the card
    /// underneath first, the interactive top card last. Matches the
    /// order a painter wants.
    pub fn peek_top_two(&self) -> Vec<&Card> {
        self.cards.iter().take(2).rev().collect()
    }

    /// Remove and return the top card.
    ///
    /// An empty queue is a caller bug, but it comes back as a value so an
    /// event loop can log it and keep running.
    pub fn pop_front(&mut self) -> Result<Card, DeckError> {
        self.cards
            .pop_front()
            .ok_or_else(|| DeckError::PreconditionViolation {
                detail: "pop_front on an empty queue".to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
