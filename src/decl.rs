//! Main module for decl library functionality

pub mod assembling;
pub mod config;
pub mod diagnostics;
pub mod formats;
pub mod indexing;
pub mod lexing;
pub mod model;
pub mod parsing;
pub mod verse;
