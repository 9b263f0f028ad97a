//! Pure Game of Life logic for LifeGrid.
//!
//! This crate contains everything needed to build, encode, and evolve a
//! Game of Life board, independent of any renderer or runtime. Functions
//! take plain data and return results, so the whole crate is unit-testable
//! and usable from the headless harness or any future front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`codec`] | `'0'`/`'1'` string encoding, decoding, and validation errors |
//! | [`config`] | Run configuration and its validation |
//! | [`engine`] | B3/S23 transition on a bounded board |
//! | [`grid`] | Square boolean grid and its constructors |
//! | [`patterns`] | Named starting patterns (still lifes, oscillators, glider) |
//! | [`simulation`] | Generation driver with cycle detection |

pub mod codec;
pub mod config;
pub mod engine;
pub mod grid;
pub mod patterns;
pub mod simulation;

pub use codec::{decode, encode, ConversionError};
pub use engine::step;
pub use grid::Grid;
