//! Deduplicating ingestion of shapes from the line format.
//!
//! Purpose
//! - Turn text records into an ordered `Vec<Shape>`, skipping exact
//!   coordinate duplicates within each kind.
//! - Keep construction behind the `ShapeFactory` capability so the reader
//!   never depends on concrete construction and tests can record calls.
//!
//! Code cross-refs: `crate::geom::Shape` (equality used for dedup),
//! `crate::query` (consumers of the collection).

pub mod factory;
pub mod reader;

pub use factory::{DefaultFactory, ShapeFactory};
pub use reader::{read_shapes, read_shapes_path, ReadError};
