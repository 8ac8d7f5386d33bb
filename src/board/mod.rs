//! Board geometry and sales statistics.
//!
//! ## Components
//!
//! - [`grid`]: Winning square lookup and index/coordinate mapping
//! - [`stats`]: Sold/available squares and revenue
//!
//! ## Example
//!
//! ```
//! use squares_calculator::board::{square_coordinates, winning_square};
//!
//! let home = [3, 1, 4, 0, 7, 9, 2, 5, 8, 6];
//! let away = [5, 8, 2, 9, 1, 0, 6, 3, 4, 7];
//!
//! let square = winning_square(21, 14, &home, &away).unwrap();
//! let coords = square_coordinates(square.winning_square_index as i64).unwrap();
//!
//! assert_eq!((coords.row, coords.col), (8, 1));
//! ```

pub mod grid;
pub mod stats;

pub use grid::{
    last_digit, square_coordinates, square_index, winning_square, SquareCoordinates,
    WinningSquare,
};
pub use stats::{board_stats, BoardStats};
