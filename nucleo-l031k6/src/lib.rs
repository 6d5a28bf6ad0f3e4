#![cfg_attr(not(test), no_std)]
//! Board support shared by the NUCLEO-L031K6 demo programs.

pub mod board;
pub mod delay;
