//! Umlgate Core Types
//!
//! This crate provides the diagram model that the umlgate edge constraints
//! inspect. It includes:
//!
//! - **Geometry**: Points, sizes and rectangles in diagram space ([`geometry`] module)
//! - **Labels**: String-interned node labels ([`label::Label`])
//! - **Model**: Node, edge and diagram types with traversal queries ([`model`] module)

pub mod geometry;
pub mod label;
pub mod model;
