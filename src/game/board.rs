//! Board of attempt rows

use crate::core::{Letter, LetterState};

/// One attempt: a fixed number of letter cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    letters: Vec<Letter>,
}

impl Row {
    fn new(width: usize) -> Self {
        Self {
            letters: vec![Letter::EMPTY; width],
        }
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of cells
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Whether every cell holds a letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.letters.iter().all(|l| !l.is_empty())
    }

    /// Whether nothing was typed past the revealed first letter
    #[must_use]
    pub fn is_empty_after_hint(&self) -> bool {
        self.letters.iter().skip(1).all(Letter::is_empty)
    }

    /// Cell characters concatenated, sentinels included
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(Letter::character).collect()
    }

    /// Column of the first unfilled cell
    pub(crate) fn first_empty(&self) -> Option<usize> {
        self.letters.iter().position(Letter::is_empty)
    }

    /// Column of the last filled cell, column 0 excluded
    pub(crate) fn last_erasable(&self) -> Option<usize> {
        self.letters
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .find(|(_, l)| !l.is_empty())
            .map(|(col, _)| col)
    }

    pub(crate) fn set(&mut self, col: usize, letter: Letter) {
        self.letters[col] = letter;
    }

    pub(crate) fn set_state(&mut self, col: usize, state: LetterState) {
        self.letters[col].set_state(state);
    }
}

/// Grid of rows, one per allowed attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Row>,
    width: usize,
}

impl Board {
    /// Empty board with `first_letter` revealed on the first row
    pub(crate) fn new(rows: usize, width: usize, first_letter: char) -> Self {
        let mut board = Self {
            rows: (0..rows).map(|_| Row::new(width)).collect(),
            width,
        };
        board.reveal_first_letter(0, first_letter);
        board
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> &mut Row {
        &mut self.rows[index]
    }

    pub(crate) fn reveal_first_letter(&mut self, index: usize, first_letter: char) {
        if let Some(row) = self.rows.get_mut(index)
            && !row.is_empty()
        {
            row.set(0, Letter::new(first_letter));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SENTINEL;

    #[test]
    fn new_board_reveals_only_first_cell() {
        let board = Board::new(6, 5, 't');
        assert_eq!(board.len(), 6);
        assert_eq!(board.width(), 5);
        assert_eq!(board.rows()[0].word(), "t....");
        for row in &board.rows()[1..] {
            assert_eq!(row.word(), ".....");
        }
    }

    #[test]
    fn row_completeness() {
        let mut board = Board::new(1, 3, 'a');
        let row = board.row_mut(0);
        assert!(!row.is_complete());
        assert!(row.is_empty_after_hint());
        row.set(1, Letter::new('b'));
        row.set(2, Letter::new('c'));
        assert!(row.is_complete());
        assert!(!row.is_empty_after_hint());
        assert_eq!(row.word(), "abc");
    }

    #[test]
    fn first_empty_and_last_erasable() {
        let mut board = Board::new(1, 5, 'm');
        let row = board.row_mut(0);
        assert_eq!(row.first_empty(), Some(1));
        assert_eq!(row.last_erasable(), None);

        row.set(1, Letter::new('e'));
        row.set(2, Letter::new('l'));
        assert_eq!(row.first_empty(), Some(3));
        assert_eq!(row.last_erasable(), Some(2));
    }

    #[test]
    fn last_erasable_never_returns_first_column() {
        let mut board = Board::new(1, 1, 'a');
        assert_eq!(board.row_mut(0).last_erasable(), None);
        assert_eq!(board.rows()[0].letters()[0].character(), 'a');
        assert_ne!(board.rows()[0].letters()[0].character(), SENTINEL);
    }

    #[test]
    fn reveal_first_letter_out_of_bounds_is_ignored() {
        let mut board = Board::new(2, 4, 'x');
        board.reveal_first_letter(5, 'x');
        board.reveal_first_letter(1, 'x');
        assert_eq!(board.rows()[1].word(), "x...");
    }

    #[test]
    fn set_state_updates_single_cell() {
        let mut board = Board::new(1, 2, 'o');
        board.row_mut(0).set_state(0, LetterState::WellPlaced);
        assert_eq!(board.rows()[0].letters()[0].state(), LetterState::WellPlaced);
        assert_eq!(board.rows()[0].letters()[1].state(), LetterState::Unknown);
    }

    #[test]
    fn snapshot_is_independent() {
        let mut board = Board::new(1, 3, 'a');
        let snapshot = board.clone();
        board.row_mut(0).set(1, Letter::new('z'));
        assert_eq!(snapshot.rows()[0].word(), "a..");
        assert_eq!(board.rows()[0].word(), "az.");
    }
}
