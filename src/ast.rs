//! # Relation Expression Language - Syntax Tree
//!
//! This module defines the tree produced when a relation expression is parsed.
//! A relation expression names which related entities to fetch together with a
//! query, e.g.
//!
//! ```text
//! children.[movies.actors.[pets, children], pets]
//! ```
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Segments produced by the lexer, classified as plain or array tokens
//! - **[node]** - Named tree nodes that make up a parsed expression
//!
//! ## Core Concepts
//!
//! ### Chains
//!
//! A dot separates a relation from the relations fetched through it:
//!
//! ```text
//! owner.pets.toys
//! ```
//!
//! ### Arrays
//!
//! Square brackets branch the tree. Each comma separated entry is itself a full
//! chain:
//!
//! ```text
//! owner.[pets.toys, address]
//! ```
//!
//! ### Reserved Names
//!
//! - `*` as the only root fetches every relation at every depth
//! - `^` as the only child of a relation makes that relation recurse into itself
//!
//! ```text
//! parent.^
//! ```
pub mod node;
pub mod tokens;

pub use node::{ALL_RECURSIVE, Node, RECURSION_MARKER};
pub use tokens::Token;
