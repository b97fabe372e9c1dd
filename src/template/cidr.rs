// ABOUTME: CIDR host address calculation for the cidrhost template helper
// ABOUTME: Computes the Nth address inside an IPv4 or IPv6 network block

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use ipnet::IpNet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CidrError {
    #[error("Invalid CIDR expression '{cidr}': {source}")]
    InvalidCidr {
        cidr: String,
        #[source]
        source: ipnet::AddrParseError,
    },

    #[error("Prefix /{prefix} does not accommodate host index {index}")]
    HostOutOfRange { prefix: u8, index: i64 },
}

pub type Result<T> = std::result::Result<T, CidrError>;

/// Return the address at `index` within the network described by `cidr`.
///
/// Index 0 is the network address itself. Negative indices count back from
/// the last address of the block, so -1 is the broadcast address of an IPv4
/// network.
pub fn host(cidr: &str, index: i64) -> Result<IpAddr> {
    let network: IpNet = cidr
        .trim()
        .parse()
        .map_err(|source| CidrError::InvalidCidr {
            cidr: cidr.to_string(),
            source,
        })?;

    match network {
        IpNet::V4(net) => {
            let offset = resolve_offset(index, 32 - net.prefix_len() as u32, net.prefix_len())?;
            let base = u32::from(net.network());
            Ok(IpAddr::V4(Ipv4Addr::from(base + offset as u32)))
        }
        IpNet::V6(net) => {
            let offset = resolve_offset(index, 128 - net.prefix_len() as u32, net.prefix_len())?;
            let base = u128::from(net.network());
            Ok(IpAddr::V6(Ipv6Addr::from(base + offset)))
        }
    }
}

/// Translate a possibly-negative host index into an absolute offset within a
/// block of 2^host_bits addresses.
fn resolve_offset(index: i64, host_bits: u32, prefix: u8) -> Result<u128> {
    let out_of_range = CidrError::HostOutOfRange { prefix, index };

    // Last valid offset in the block. host_bits is at most 128, in which
    // case every u128 offset is valid.
    let max_offset = if host_bits >= 128 {
        u128::MAX
    } else {
        (1u128 << host_bits) - 1
    };

    if index >= 0 {
        let offset = index as u128;
        if offset > max_offset {
            return Err(out_of_range);
        }
        Ok(offset)
    } else {
        let back = index.unsigned_abs() as u128 - 1;
        if back > max_offset {
            return Err(out_of_range);
        }
        Ok(max_offset - back)
    }
}
