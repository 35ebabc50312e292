// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::{
    inetstack::protocols::layer2::ethernet2::EtherType2,
    runtime::{
        fail::Fail,
        network::types::MacAddress,
    },
};
use ::libc::{
    EBADMSG,
    ENOBUFS,
};
use ::std::fmt;

//======================================================================================================================
// Constants
//======================================================================================================================

pub const ETHERNET2_HEADER_SIZE: usize = 14;

//======================================================================================================================
// Structures
//======================================================================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ethernet2Header {
    // Bytes 0..6
    dst_addr: MacAddress,
    // Bytes 6..12
    src_addr: MacAddress,
    // Bytes 12..14
    ether_type: EtherType2,
}

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl Ethernet2Header {
    /// Creates a header for an Ethernet frame.
    pub fn new(dst_addr: MacAddress, src_addr: MacAddress, ether_type: EtherType2) -> Self {
        Self {
            dst_addr,
            src_addr,
            ether_type,
        }
    }

    /// Parses the Ethernet header at the front of `buf`, returning it along with the payload that follows.
    pub fn parse(buf: &[u8]) -> Result<(Self, &[u8]), Fail> {
        if buf.len() < ETHERNET2_HEADER_SIZE {
            let cause: String = format!(
                "frame too small (len={}, header_size={})",
                buf.len(),
                ETHERNET2_HEADER_SIZE
            );
            return Err(Fail::new(EBADMSG, &cause));
        }
        let (hdr_buf, payload): (&[u8], &[u8]) = buf.split_at(ETHERNET2_HEADER_SIZE);
        let dst_addr: MacAddress = MacAddress::from_bytes(&hdr_buf[0..6])?;
        let src_addr: MacAddress = MacAddress::from_bytes(&hdr_buf[6..12])?;
        let ether_type: EtherType2 = EtherType2::from(u16::from_be_bytes([hdr_buf[12], hdr_buf[13]]));

        Ok((
            Self {
                dst_addr,
                src_addr,
                ether_type,
            },
            payload,
        ))
    }

    /// Writes the target header into the first [ETHERNET2_HEADER_SIZE] bytes of `buf`.
    pub fn serialize(&self, buf: &mut [u8]) -> Result<(), Fail> {
        if buf.len() < ETHERNET2_HEADER_SIZE {
            let cause: String = format!(
                "not enough space for an Ethernet header (len={}, header_size={})",
                buf.len(),
                ETHERNET2_HEADER_SIZE
            );
            return Err(Fail::new(ENOBUFS, &cause));
        }
        buf[0..6].copy_from_slice(&self.dst_addr.octets());
        buf[6..12].copy_from_slice(&self.src_addr.octets());
        buf[12..14].copy_from_slice(&u16::from(self.ether_type).to_be_bytes());
        Ok(())
    }

    pub fn dst_addr(&self) -> MacAddress {
        self.dst_addr
    }

    pub fn src_addr(&self) -> MacAddress {
        self.src_addr
    }

    pub fn ether_type(&self) -> EtherType2 {
        self.ether_type
    }
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl fmt::Display for Ethernet2Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.src_addr, self.dst_addr, self.ether_type)
    }
}
