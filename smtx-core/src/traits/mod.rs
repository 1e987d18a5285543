//! Abstract interfaces shared by matrix implementations

pub mod element;

pub use element::MatrixElement;
