//! Synta Core Types and Definitions
//!
//! This crate provides the foundational types for the Synta filename
//! specification language. It includes:
//!
//! - **Identifiers**: Validated lowercase names ([`identifier::Identifier`])
//! - **Definitions**: Documented, compiled regular expressions
//!   ([`definition::Definition`])
//! - **Templates**: The filename segment tree ([`template`] module)
//! - **Documents**: The parsed, validated file representation and the
//!   pruning pass ([`document`] module)

pub mod definition;
pub mod document;
pub mod identifier;
pub mod template;
