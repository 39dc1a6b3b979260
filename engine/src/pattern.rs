//! Preset structures that can be stamped onto a grid.
//!
//! A `StructurePattern` is a small dense boolean matrix whose `(0, 0)` entry lands on the
//! anchor passed to `Grid::place_structure`. A `Catalog` is a named collection of them that
//! front-ends construct once and hand around.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern `{0}` has no cells")]
    Empty(String),
    #[error("pattern `{name}` row {row} has {found} cells, expected {expected}")]
    Ragged {
        name: String,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("pattern `{name}` has invalid character {ch:?} at row {row}, column {col}")]
    InvalidChar {
        name: String,
        ch: char,
        row: usize,
        col: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructurePattern {
    name: String,
    cells: Vec<Vec<bool>>,
}

impl StructurePattern {
    /// Build a pattern from a 0/1 matrix. Any non-zero entry is alive.
    pub fn from_matrix(name: &str, matrix: &[&[u8]]) -> Result<Self, PatternError> {
        let cells = matrix
            .iter()
            .map(|row| row.iter().map(|&value| value != 0).collect())
            .collect();
        Self::from_cells(name, cells)
    }

    /// Build a pattern from text rows. `O`, `#` and `*` are alive, `.` is dead.
    pub fn from_rows(name: &str, rows: &[&str]) -> Result<Self, PatternError> {
        let mut cells = Vec::with_capacity(rows.len());
        for (row, line) in rows.iter().enumerate() {
            let mut parsed = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                parsed.push(match ch {
                    'O' | '#' | '*' => true,
                    '.' => false,
                    _ => {
                        return Err(PatternError::InvalidChar {
                            name: name.to_string(),
                            ch,
                            row,
                            col,
                        })
                    }
                });
            }
            cells.push(parsed);
        }
        Self::from_cells(name, cells)
    }

    fn from_cells(name: &str, cells: Vec<Vec<bool>>) -> Result<Self, PatternError> {
        let width = match cells.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(PatternError::Empty(name.to_string())),
        };

        if let Some((row, found)) = cells
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(PatternError::Ragged {
                name: name.to_string(),
                row,
                expected: width,
                found,
            });
        }

        Ok(StructurePattern {
            name: name.to_string(),
            cells,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells[0].len()
    }

    /// Offsets `(i, j)` of every alive entry, row by row.
    pub fn alive_offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &alive)| alive)
                .map(move |(j, _)| (i, j))
        })
    }
}

/// Named presets available to a brush.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    patterns: Vec<StructurePattern>,
}

const BUILTIN: &[(&str, &[&str])] = &[
    ("cell", &["O"]),
    ("block", &["OO", "OO"]),
    ("beehive", &[".OO.", "O..O", ".OO."]),
    ("loaf", &[".OO.", "O..O", ".O.O", "..O."]),
    ("boat", &["OO.", "O.O", ".O."]),
    ("blinker", &["...", "OOO", "..."]),
    ("toad", &[".OOO", "OOO."]),
    ("beacon", &["OO..", "OO..", "..OO", "..OO"]),
    (
        "pulsar",
        &[
            "..OOO...OOO..",
            ".............",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            "..OOO...OOO..",
            ".............",
            "..OOO...OOO..",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            ".............",
            "..OOO...OOO..",
        ],
    ),
    ("glider", &[".O.", "..O", "OOO"]),
    ("lwss", &[".O..O", "O....", "O...O", ".OOOO"]),
    ("r-pentomino", &[".OO", "OO.", ".O."]),
    (
        "gosper-glider-gun",
        &[
            "........................O...........",
            "......................O.O...........",
            "............OO......OO............OO",
            "...........O...O....OO............OO",
            "OO........O.....O...OO..............",
            "OO........O...O.OO....O.O...........",
            "..........O.....O.......O...........",
            "...........O...O....................",
            "............OO......................",
        ],
    ),
];

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Still lifes, oscillators, spaceships and a gun.
    pub fn builtin() -> Self {
        let mut catalog = Catalog::new();
        for (name, rows) in BUILTIN {
            match StructurePattern::from_rows(name, rows) {
                Ok(pattern) => catalog.insert(pattern),
                Err(err) => log::error!("skipping builtin pattern: {err}"),
            }
        }
        catalog
    }

    /// Add a pattern, replacing any existing one with the same name.
    pub fn insert(&mut self, pattern: StructurePattern) {
        match self
            .patterns
            .iter_mut()
            .find(|existing| existing.name.eq_ignore_ascii_case(&pattern.name))
        {
            Some(existing) => *existing = pattern,
            None => self.patterns.push(pattern),
        }
    }

    pub fn get(&self, name: &str) -> Option<&StructurePattern> {
        self.patterns
            .iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(StructurePattern::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StructurePattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
