//! Matrix dimensions and the arithmetic operations that constrain them

/// Dimensions of a matrix as rows x cols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Whether `(row, col)` addresses a cell of this shape
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Number of cells, `None` if it does not fit in a usize
    pub const fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Shape of `self op other`, or `None` when the operands are incompatible
    pub const fn result_of(&self, operation: Operation, other: &Shape) -> Option<Shape> {
        match operation {
            Operation::Addition | Operation::Subtraction => {
                if self.rows == other.rows && self.cols == other.cols {
                    Some(*self)
                } else {
                    None
                }
            }
            Operation::Multiplication => {
                if self.cols == other.rows {
                    Some(Shape::new(self.rows, other.cols))
                } else {
                    None
                }
            }
        }
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

impl core::fmt::Display for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Binary matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
}

impl Operation {
    pub const ALL: [Operation; 3] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
    ];

    /// Lowercase name used in messages and result file names
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
