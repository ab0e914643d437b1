mod materializer;

pub use materializer::{MaterializeReport, Materializer};
