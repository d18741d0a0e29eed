mod bench;
pub mod cli;
mod families;
mod product;
mod record;
pub mod suite;

pub use bench::{ConfigSink, Generics, Library, TestBench, TestCase, TestConfig};
pub use families::{
    AvalonMatrix, AvalonParams, Family, InvalidDimension, WishboneMatrix, WishboneParams,
    ADR_WIDTH,
};
pub use record::{decode, ConfigRecord, ParamValue};
