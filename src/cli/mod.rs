//! Terminal front end
//!
//! Translates typed coordinates into engine calls and renders boards and
//! outcomes. All game rules live in the library; nothing here decides a move.

pub mod commands;
pub mod output;
