// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::runtime::fail::Fail;
use ::libc::EINVAL;
use ::std::{
    fmt,
    str::FromStr,
};

//======================================================================================================================
// Constants
//======================================================================================================================

/// Length of a MAC address in bytes.
pub const MAC_ADDRESS_SIZE: usize = 6;

//======================================================================================================================
// Structures
//======================================================================================================================

/// MAC Address
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct MacAddress(eui48::MacAddress);

//======================================================================================================================
// Associate Functions
//======================================================================================================================

impl MacAddress {
    pub const fn new(bytes: [u8; MAC_ADDRESS_SIZE]) -> Self {
        MacAddress(eui48::MacAddress::new(bytes))
    }

    /// Builds a [MacAddress] from the first six bytes of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Fail> {
        match bytes.get(..MAC_ADDRESS_SIZE).map(eui48::MacAddress::from_bytes) {
            Some(Ok(addr)) => Ok(Self(addr)),
            _ => Err(Fail::new(EINVAL, "not enough bytes for a MAC address")),
        }
    }

    /// Returns the array of bytes composing the target [MacAddress].
    pub fn octets(&self) -> [u8; MAC_ADDRESS_SIZE] {
        self.0.to_array()
    }

    /// The all-zeros address. It never identifies a station.
    pub fn nil() -> MacAddress {
        MacAddress(eui48::MacAddress::nil())
    }

    pub fn broadcast() -> MacAddress {
        MacAddress(eui48::MacAddress::broadcast())
    }

    pub fn is_nil(self) -> bool {
        self.0.is_nil()
    }

    pub fn is_broadcast(self) -> bool {
        self.0.is_broadcast()
    }

    pub fn is_multicast(self) -> bool {
        self.0.is_multicast()
    }

    /// Unicast addresses have the group bit cleared. Broadcast counts as multicast.
    pub fn is_unicast(self) -> bool {
        self.0.is_unicast()
    }

    pub fn to_canonical(self) -> String {
        self.0.to_canonical()
    }

    pub fn parse_canonical_str(canonical_macaddr_string: &str) -> Result<Self, Fail> {
        match eui48::MacAddress::parse_str(canonical_macaddr_string) {
            Ok(addr) => Ok(Self(addr)),
            Err(_) => Err(Fail::new(EINVAL, "failed to parse MAC Address")),
        }
    }
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.to_hex_string())
    }
}

impl fmt::Debug for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MacAddress({})", &self.to_canonical())
    }
}

impl FromStr for MacAddress {
    type Err = Fail;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MacAddress::parse_canonical_str(s)
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
