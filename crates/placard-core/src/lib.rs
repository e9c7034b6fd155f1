//! Placard Core Types and Definitions
//!
//! This crate provides the foundational types for Placard diagrams:
//!
//! - **Colors**: CSS color parsing and formatting ([`color::Color`])
//! - **Geometry**: Points, sizes, and bounds ([`geometry`] module)
//! - **Draw**: The [`draw::Drawable`] contract, render layers, and the
//!   primitive drawables every diagram is assembled from ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
