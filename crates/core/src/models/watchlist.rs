use serde::{Deserialize, Serialize};

/// Bounded, ordered, deduplicated list of ticker symbols.
///
/// Most recent first. Equality of symbols is exact (no case folding here;
/// input normalization happens at the form boundary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watchlist {
    symbols: Vec<String>,
    capacity: usize,
}

impl Watchlist {
    pub fn new(capacity: usize) -> Self {
        Self {
            symbols: Vec::new(),
            capacity,
        }
    }

    /// Build from an arbitrary sequence, keeping the first occurrence of each
    /// symbol and truncating to `capacity`. Empty strings are dropped.
    pub fn from_symbols<I, S>(symbols: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new(capacity);
        for symbol in symbols {
            if list.symbols.len() >= capacity {
                break;
            }
            let symbol = symbol.into();
            if !symbol.is_empty() && !list.contains(&symbol) {
                list.symbols.push(symbol);
            }
        }
        list
    }

    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }

    /// Insert at the front. Returns the evicted oldest symbol, if any.
    /// Callers must check `contains` first; a duplicate is not inserted.
    pub fn push_front(&mut self, symbol: String) -> Option<String> {
        if self.contains(&symbol) {
            return None;
        }
        self.symbols.insert(0, symbol);
        if self.symbols.len() > self.capacity {
            self.symbols.pop()
        } else {
            None
        }
    }

    /// Remove every exact match. Returns how many entries were removed.
    pub fn remove_all(&mut self, symbol: &str) -> usize {
        let before = self.symbols.len();
        self.symbols.retain(|s| s != symbol);
        before - self.symbols.len()
    }

    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
