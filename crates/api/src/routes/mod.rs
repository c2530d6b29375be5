//! Route handlers, one module per endpoint

pub mod index;
pub mod precipitation;
pub mod stations;
pub mod temps;
pub mod tobs;
