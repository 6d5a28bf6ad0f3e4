#![cfg_attr(not(test), no_std)]
//! Board support shared by the NUCLEO-L452RE demo programs.

pub mod board;
pub mod pwm;
