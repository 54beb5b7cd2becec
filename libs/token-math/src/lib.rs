#![no_std]

pub mod amount_math;

pub use amount_math::*;
