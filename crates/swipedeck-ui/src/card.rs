//! Deck content types.

/// Stable identifier for a card. Unique within a deck.
pub type CardId = u64;

/// Opaque reference to an image asset.
///
/// The component never loads or decodes anything; the key only has to
/// mean something to the host's asset pipeline. A blank key is malformed
/// input and is rejected at deck construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    key: String,
}

impl ImageSource {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.key.trim().is_empty()
    }
}

/// One card of the deck. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub image: ImageSource,
    pub text: String,
}

impl Card {
    pub fn new(id: CardId, image: ImageSource, text: impl Into<String>) -> Self {
        Self {
            id,
            image,
            text: text.into(),
        }
    }
}
