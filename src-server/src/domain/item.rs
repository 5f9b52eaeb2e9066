//! Item Entity
//!
//! A single shopping-list entry and the flat list that holds them.

use rand::Rng;
use serde::{Deserialize, Serialize};
use super::entity::Entity;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_RANDOM_LEN: usize = 9;

/// A shopping-list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Opaque identifier, unique within the list
    pub id: String,
    /// Trimmed, non-empty text
    pub text: String,
    /// Checked off
    pub checked: bool,
    /// Milliseconds since the Unix epoch
    pub created_at: i64,
}

impl Item {
    /// Create a new unchecked item stamped with a fresh id and the current time.
    ///
    /// `text` is expected to be trimmed already.
    pub fn new(text: String) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id: generate_id(now),
            text,
            checked: false,
            created_at: now,
        }
    }

    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

impl Entity for Item {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Which items a clear request removes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearMode {
    Checked,
    All,
}

impl ClearMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClearMode::Checked => "checked",
            ClearMode::All => "all",
        }
    }

    /// Only the exact string "checked" selects `Checked`; anything else clears everything.
    pub fn from_request(mode: Option<&str>) -> Self {
        match mode {
            Some("checked") => ClearMode::Checked,
            _ => ClearMode::All,
        }
    }
}

/// The whole persisted state: items in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList(Vec<Item>);

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.0
    }

    pub fn into_items(self) -> Vec<Item> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, item: Item) {
        self.0.push(item);
    }

    /// Flip `checked` on the item with `id`, returning the updated copy.
    pub fn toggle(&mut self, id: &str) -> Option<Item> {
        let item = self.0.iter_mut().find(|item| item.id() == id)?;
        item.toggle();
        Some(item.clone())
    }

    pub fn clear(&mut self, mode: ClearMode) {
        match mode {
            ClearMode::Checked => self.0.retain(|item| !item.checked),
            ClearMode::All => self.0.clear(),
        }
    }
}

impl From<Vec<Item>> for ItemList {
    fn from(items: Vec<Item>) -> Self {
        Self(items)
    }
}

/// Base-36 millisecond timestamp followed by random base-36 characters.
fn generate_id(now_ms: i64) -> String {
    let mut id = to_base36(now_ms.max(0) as u64);
    let mut rng = rand::rng();
    for _ in 0..ID_RANDOM_LEN {
        let idx = rng.random_range(0..ID_ALPHABET.len());
        id.push(ID_ALPHABET[idx] as char);
    }
    id
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ID_ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
