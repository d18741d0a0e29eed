//! Protocol-family parameter matrices and their enumeration.
//!
//! Each bus family has a fixed set of dimensions. A matrix holds one ordered
//! candidate list per dimension; enumeration expands the full cross product
//! into typed parameter structs, one per test variant.

use std::fmt;

use crate::product::IndexProduct;
use crate::record::ConfigRecord;

/// Address width of the Wishbone benches. Injected into every record but
/// deliberately not a dimension.
// TODO remove fixed addr
pub const ADR_WIDTH: u64 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Wishbone,
    Avalon,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Wishbone => f.write_str("wishbone"),
            Family::Avalon => f.write_str("avalon"),
        }
    }
}

/// A dimension was declared with no candidate values. Enumeration refuses
/// to run at all rather than drop the dimension from the product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDimension {
    pub family: Family,
    pub dimension: &'static str,
}

impl fmt::Display for InvalidDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "empty candidate list for {} dimension `{}`",
            self.family, self.dimension
        )
    }
}

impl std::error::Error for InvalidDimension {}

macro_rules! check_dims {
    { @family $family:expr; @matrix $matrix:expr; $( $dim:ident ),+ $(,)? } => {
        $(
            if $matrix.$dim.is_empty() {
                return Err(InvalidDimension {
                    family: $family,
                    dimension: stringify!($dim),
                });
            }
        )+
    };
}

/// Candidate values for the Wishbone master/slave benches, one list per
/// dimension in product order (last declared varies fastest).
#[derive(Debug, Clone)]
pub struct WishboneMatrix {
    pub dat_width: Vec<u64>,
    pub num_cycles: Vec<u64>,
    pub strobe_prob: Vec<f64>,
    pub ack_prob: Vec<f64>,
    pub stall_prob: Vec<f64>,
}

/// One Wishbone test variant with every dimension chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WishboneParams {
    pub dat_width: u64,
    pub strobe_prob: f64,
    pub ack_prob: f64,
    pub stall_prob: f64,
    pub num_cycles: u64,
}

impl WishboneMatrix {
    /// Expand the full cross product in declaration order.
    pub fn enumerate(&self) -> Result<Vec<WishboneParams>, InvalidDimension> {
        check_dims! {
            @family Family::Wishbone;
            @matrix self;
            dat_width, num_cycles, strobe_prob, ack_prob, stall_prob,
        }
        let lens = [
            self.dat_width.len(),
            self.num_cycles.len(),
            self.strobe_prob.len(),
            self.ack_prob.len(),
            self.stall_prob.len(),
        ];
        let mut params = Vec::with_capacity(lens.iter().product());
        for idx in IndexProduct::new(&lens) {
            params.push(WishboneParams {
                dat_width: self.dat_width[idx[0]],
                num_cycles: self.num_cycles[idx[1]],
                strobe_prob: self.strobe_prob[idx[2]],
                ack_prob: self.ack_prob[idx[3]],
                stall_prob: self.stall_prob[idx[4]],
            });
        }
        Ok(params)
    }
}

impl WishboneParams {
    /// Field order here fixes the encoded name; do not reorder.
    pub fn record(&self) -> ConfigRecord {
        let mut rec = ConfigRecord::new();
        rec.push("dat_width", self.dat_width);
        rec.push("adr_width", ADR_WIDTH);
        rec.push("strobe_prob", self.strobe_prob);
        rec.push("ack_prob", self.ack_prob);
        rec.push("stall_prob", self.stall_prob);
        rec.push("num_cycles", self.num_cycles);
        rec
    }
}

/// Candidate values for the Avalon slave bench.
#[derive(Debug, Clone)]
pub struct AvalonMatrix {
    pub data_width: Vec<u64>,
    pub num_cycles: Vec<u64>,
    pub readdatavalid_prob: Vec<f64>,
    pub waitrequest_prob: Vec<f64>,
}

/// One Avalon test variant with every dimension chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvalonParams {
    pub data_width: u64,
    pub readdatavalid_prob: f64,
    pub waitrequest_prob: f64,
    pub num_cycles: u64,
}

impl AvalonMatrix {
    /// Expand the full cross product in declaration order.
    pub fn enumerate(&self) -> Result<Vec<AvalonParams>, InvalidDimension> {
        check_dims! {
            @family Family::Avalon;
            @matrix self;
            data_width, num_cycles, readdatavalid_prob, waitrequest_prob,
        }
        let lens = [
            self.data_width.len(),
            self.num_cycles.len(),
            self.readdatavalid_prob.len(),
            self.waitrequest_prob.len(),
        ];
        let mut params = Vec::with_capacity(lens.iter().product());
        for idx in IndexProduct::new(&lens) {
            params.push(AvalonParams {
                data_width: self.data_width[idx[0]],
                num_cycles: self.num_cycles[idx[1]],
                readdatavalid_prob: self.readdatavalid_prob[idx[2]],
                waitrequest_prob: self.waitrequest_prob[idx[3]],
            });
        }
        Ok(params)
    }
}

impl AvalonParams {
    /// Field order here fixes the encoded name; do not reorder.
    pub fn record(&self) -> ConfigRecord {
        let mut rec = ConfigRecord::new();
        rec.push("data_width", self.data_width);
        rec.push("readdatavalid_prob", self.readdatavalid_prob);
        rec.push("waitrequest_prob", self.waitrequest_prob);
        rec.push("num_cycles", self.num_cycles);
        rec
    }
}
