//! Dense port-to-port cost matrix.
//!
//! Entry `(i, j)` with `i < j` is the direct cost of moving from port `i` to
//! port `j`, or `None` when no direct move exists. The diagonal holds the
//! cost offset of stopping at a port and must always be finite. Cells below
//! the diagonal are kept only so a parsed matrix can be written back out;
//! [`CostMatrix::get`] never exposes them.

use crate::error::MatrixError;

/// Direct-move cost; `None` is "unreachable".
pub type Cell = Option<u64>;

/// An immutable N×N cost table stored in row-major order.
///
/// # Examples
///
/// ```
/// use trading_post::CostMatrix;
///
/// let m = CostMatrix::unreachable(3)
///     .with_cost(0, 1, 3)
///     .with_cost(1, 2, 4);
/// assert_eq!(m.size(), 3);
/// assert_eq!(m.get(0, 1), Some(3));
/// assert_eq!(m.get(0, 2), None);
/// assert_eq!(m.get(2, 1), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    cells: Vec<Cell>,
    size: usize,
}

impl CostMatrix {
    /// Builds a matrix from rows, validating shape and diagonal.
    ///
    /// Every row must have exactly as many cells as there are rows, and every
    /// diagonal cell must be finite.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(MatrixError::Ragged {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            if values[row].is_none() {
                return Err(MatrixError::UnreachableDiagonal { port: row });
            }
            cells.extend(values);
        }
        Ok(Self { cells, size })
    }

    /// A matrix of `size` ports with a zero diagonal and no forward moves.
    pub fn unreachable(size: usize) -> Self {
        let mut cells = vec![None; size * size];
        for port in 0..size {
            cells[port * size + port] = Some(0);
        }
        Self { cells, size }
    }

    /// Returns a copy with the forward move `origin -> destination` set to `cost`.
    ///
    /// # Panics
    /// Panics unless `origin < destination < size`.
    pub fn with_cost(mut self, origin: usize, destination: usize, cost: u64) -> Self {
        assert!(
            origin < destination && destination < self.size,
            "forward move {origin} -> {destination} out of range for {} ports",
            self.size
        );
        self.cells[origin * self.size + destination] = Some(cost);
        self
    }

    /// Number of ports N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Direct cost from `origin` to `destination`.
    ///
    /// Returns `None` for unreachable moves and for any backward move
    /// (`origin > destination`). `get(i, i)` is the stop offset of port `i`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, origin: usize, destination: usize) -> Cell {
        assert!(
            origin < self.size && destination < self.size,
            "port out of range"
        );
        if origin > destination {
            return None;
        }
        self.cells[origin * self.size + destination]
    }

    /// The leading `ports`×`ports` sub-matrix, i.e. the same route network cut
    /// off after port `ports - 1`.
    pub fn prefix(&self, ports: usize) -> Self {
        let ports = ports.min(self.size);
        let mut cells = Vec::with_capacity(ports * ports);
        for row in 0..ports {
            let start = row * self.size;
            cells.extend_from_slice(&self.cells[start..start + ports]);
        }
        Self { cells, size: ports }
    }

    /// Raw rows, including the ignored lower triangle.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size.max(1)).take(self.size)
    }
}
