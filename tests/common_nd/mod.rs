//! Tests for the dataset, norms and the neighbour engine.
mod neighbors_tests;
