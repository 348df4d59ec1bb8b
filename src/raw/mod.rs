//! Raw kernel ABI definitions.

#![allow(nonstandard_style)]

pub mod input;
pub mod uinput;
