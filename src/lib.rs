#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::cast_possible_truncation)] // 8/16-bit truncation is the point
#![doc = include_str!("../README.md")]

pub mod bus;
pub mod cpu;
pub mod machine;
pub mod opcode;
pub mod rom;
pub mod uart;
