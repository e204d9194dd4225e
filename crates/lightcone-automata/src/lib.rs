//! Single-seed histories of Wolfram's elementary cellular automata.
//!
//! Starting from one live cell, an elementary automaton only ever
//! perturbs cells inside the seed's light cone, so `rows` generations
//! fit in a triangle of `2 * rows - 1` columns centered on the seed.
//! [`Automaton`] computes that triangle eagerly and exposes it as a
//! boolean matrix or a printable string.
//!
//! # Example
//!
//! ```
//! use lightcone_automata::Automaton;
//!
//! let ca = Automaton::new(5, 30).unwrap();
//! assert_eq!(ca.rows(), 5);
//! assert_eq!(ca.columns(), 9);
//! assert!(ca.get(0, 4));
//! println!("{}", ca.render(' ', '#'));
//! ```

use std::fmt;

use thiserror::Error;

/// Errors from automaton construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// The requested number of rows was zero.
    #[error("the number of rows must be positive")]
    ZeroRows,
}

/// Next-state lookup table for one of the 256 elementary rules.
///
/// Indexed by a 3-bit neighborhood pattern with bit 0 the left
/// neighbor, bit 1 the cell itself and bit 2 the right neighbor. The
/// Wolfram code numbers the same patterns big-endian (left neighbor in
/// the high bit), so decoding reverses each 3-bit index: the entry for
/// pattern `0b011` (left and center alive) comes from bit `0b110` of
/// the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTable {
    /// Wolfram code the table was decoded from.
    rule: u8,
    /// Next state per little-endian neighborhood pattern.
    table: [bool; 8],
}

impl RuleTable {
    /// Decodes a Wolfram code into its lookup table.
    pub fn decode(rule: u8) -> Self {
        let mut table = [false; 8];
        for (pattern, next) in table.iter_mut().enumerate() {
            let code_bit = reverse3(pattern);
            *next = (rule >> code_bit) & 1 == 1;
        }
        Self { rule, table }
    }

    /// Returns the Wolfram code.
    pub fn rule(&self) -> u8 {
        self.rule
    }

    /// Looks up the next state of a cell from its neighborhood.
    #[inline]
    pub fn next(&self, left: bool, center: bool, right: bool) -> bool {
        self.table[left as usize | (center as usize) << 1 | (right as usize) << 2]
    }

    /// Returns true if the rule is invariant under left-right mirroring
    /// of the neighborhood.
    pub fn is_symmetric(&self) -> bool {
        (0..8).all(|pattern| self.table[pattern] == self.table[reverse3(pattern)])
    }
}

/// Reverses the bits of a 3-bit pattern.
#[inline]
fn reverse3(pattern: usize) -> usize {
    (pattern & 0b001) << 2 | (pattern & 0b010) | (pattern & 0b100) >> 2
}

/// The single-seed history of an elementary cellular automaton.
///
/// The automaton starts from a lone live cell on an infinite lattice
/// and is simulated for `rows` generations. Horizontally only the
/// `2 * rows - 1` cells centered on the seed are kept, which is exactly
/// the region the seed can have reached by the last row. The whole
/// history is computed at construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    /// Wolfram code of the rule.
    rule: u8,
    /// Number of generations, including the seed row.
    rows: usize,
    /// Cells kept per row; always `2 * rows - 1`.
    columns: usize,
    /// History matrix; row 0 is the seed generation.
    matrix: Vec<Vec<bool>>,
}

impl Automaton {
    /// Computes the history of `rule` from a single seed.
    ///
    /// Fails if `rows` is zero.
    pub fn new(rows: usize, rule: u8) -> Result<Self, AutomatonError> {
        if rows == 0 {
            return Err(AutomatonError::ZeroRows);
        }
        let columns = 2 * rows - 1;
        let table = RuleTable::decode(rule);

        // An even rule maps pattern 000 to 0, so the background beyond
        // the light cone stays dead forever. An odd rule lights the
        // whole background up, and its influence on the window edges
        // has to be tracked past the visible columns.
        let matrix = if rule % 2 == 0 {
            evolve_even(rows, &table)
        } else {
            evolve_odd(rows, &table)
        };

        Ok(Self {
            rule,
            rows,
            columns,
            matrix,
        })
    }

    /// Returns the Wolfram code of the rule.
    pub fn rule(&self) -> u8 {
        self.rule
    }

    /// Number of rows in the history matrix.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the history matrix; always `2 * rows - 1`.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The history matrix. Row 0 is the seed generation.
    pub fn matrix(&self) -> &[Vec<bool>] {
        &self.matrix
    }

    /// Gets the state of a cell. Out-of-range reads are false.
    pub fn get(&self, row: usize, column: usize) -> bool {
        self.matrix
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .unwrap_or(false)
    }

    /// Returns the matrix flattened to a single row-major vector.
    pub fn flattened(&self) -> Vec<bool> {
        self.matrix
            .iter()
            .flat_map(|row| row.iter().copied())
            .collect()
    }

    /// Renders the matrix with the given substitute characters, one
    /// line per row, rows joined by newlines.
    ///
    /// ```
    /// use lightcone_automata::Automaton;
    ///
    /// let ca = Automaton::new(5, 30).unwrap();
    /// assert_eq!(
    ///     ca.render('0', '1'),
    ///     "000010000\n\
    ///      000111000\n\
    ///      001100100\n\
    ///      011011110\n\
    ///      110010001"
    /// );
    /// ```
    pub fn render(&self, zero: char, one: char) -> String {
        self.matrix
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&cell| if cell { one } else { zero })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render('0', '1'))
    }
}

/// Evolution for even rules, where the background stays 0.
///
/// Only cells inside the seed's light cone can ever flip, so row `i`
/// recomputes at most the window `i` cells either side of the center;
/// the rest of the row keeps its initialized zeros. On the last row the
/// cone touches the window edges, whose outer neighbor is missing from
/// the previous row; it is background there, so it reads as 0.
fn evolve_even(rows: usize, table: &RuleTable) -> Vec<Vec<bool>> {
    let columns = 2 * rows - 1;
    let mut matrix = Vec::with_capacity(rows);

    let mut seed = vec![false; columns];
    seed[rows - 1] = true;
    matrix.push(seed);

    for i in 1..rows {
        let last = &matrix[i - 1];
        let mut row = vec![false; columns];

        let lo = (rows - i - 1).max(1);
        let hi = (rows + i).max(columns - 1);
        for j in lo..hi {
            let right = if j + 1 < columns { last[j + 1] } else { false };
            row[j] = table.next(last[j - 1], last[j], right);
        }

        if i == rows - 1 {
            row[0] = table.next(false, last[0], last[1]);
            row[columns - 1] = table.next(last[columns - 2], last[columns - 1], false);
        }

        matrix.push(row);
    }

    matrix
}

/// Evolution for odd rules, where the background flips to 1.
///
/// Flips propagate in from the infinite sea of live background cells
/// one cell per step, so the visible window alone is not enough state.
/// Row `i` is computed on a buffer of the middle `4 * rows - 3 - 2 * i`
/// lattice cells, wide enough that the unknown cells beyond its ends
/// never influence the visible columns before the simulation stops. The
/// buffer shrinks by one cell per side each step and is replaced, not
/// accumulated; each row of the output is the centered `columns`-wide
/// slice of it.
fn evolve_odd(rows: usize, table: &RuleTable) -> Vec<Vec<bool>> {
    let columns = 2 * rows - 1;
    let mut matrix = Vec::with_capacity(rows);

    let mut buffer = vec![false; 4 * rows - 3];
    buffer[2 * rows - 2] = true;
    matrix.push(buffer[rows - 1..rows - 1 + columns].to_vec());

    for i in 1..rows {
        let width = 4 * rows - 3 - 2 * i;
        let mut next = vec![false; width];
        for (j, cell) in next.iter_mut().enumerate() {
            *cell = table.next(buffer[j], buffer[j + 1], buffer[j + 2]);
        }
        buffer = next;

        let offset = rows - 1 - i;
        matrix.push(buffer[offset..offset + columns].to_vec());
    }

    matrix
}
