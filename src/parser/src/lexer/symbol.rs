//! Symbol tables - the operators and punctuation of a language.

use std::collections::HashSet;

/// The multi-character symbols a language uses.
///
/// Single characters which are punctuation or symbols are always tokens on
/// their own, so a table only needs to list the longer ones, though listing
/// single characters does no harm.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: HashSet<String>,
    /// The longest symbol, counted in [`char`]s.
    longest: usize,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, symbol: &str) {
        if symbol.is_empty() {
            return;
        }
        self.longest = self.longest.max(symbol.chars().count());
        self.symbols.insert(symbol.to_string());
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    /// The longest symbol in the table which `input` starts with.
    ///
    /// ```
    /// # use parser::lexer::SymbolTable;
    /// let table = SymbolTable::from_iter([">", ">>", ">>=", ">>>", ">>>="]);
    /// assert_eq!(table.longest_prefix(">>>= 2"), Some(">>>="));
    /// assert_eq!(table.longest_prefix(">>x"), Some(">>"));
    /// assert_eq!(table.longest_prefix("x"), None);
    /// ```
    pub fn longest_prefix<'t>(&self, input: &'t str) -> Option<&'t str> {
        let ends: Vec<usize> = input
            .char_indices()
            .skip(1)
            .map(|(i, _)| i)
            .chain(std::iter::once(input.len()))
            .take(self.longest)
            .collect();

        ends.into_iter()
            .rev()
            .map(|end| &input[..end])
            .find(|candidate| self.contains(candidate))
    }
}

impl<'a> FromIterator<&'a str> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = SymbolTable::new();
        for symbol in iter {
            table.add(symbol);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_matches_nothing() {
        assert_eq!(SymbolTable::default().longest_prefix(">>"), None);
        assert_eq!(SymbolTable::default().longest_prefix(""), None);
    }

    #[test]
    fn gaps_in_prefixes_are_fine() {
        // `.*` is in the table but `.` isn't.
        let table = SymbolTable::from_iter([".*", "..."]);
        assert_eq!(table.longest_prefix(".*;"), Some(".*"));
        assert_eq!(table.longest_prefix("...x"), Some("..."));
        assert_eq!(table.longest_prefix("..x"), None);
    }

    #[test]
    fn multibyte_input() {
        let table = SymbolTable::from_iter(["→"]);
        assert_eq!(table.longest_prefix("→→"), Some("→"));
    }
}
