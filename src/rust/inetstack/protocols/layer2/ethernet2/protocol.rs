// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use ::std::fmt;

//======================================================================================================================
// Structures
//======================================================================================================================

/// EtherType of an Ethernet II frame. Values with no handler in this stack are kept as [EtherType2::Unknown].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EtherType2 {
    Arp,
    Ipv4,
    Ipv6,
    Unknown(u16),
}

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl EtherType2 {
    const ARP: u16 = 0x0806;
    const IPV4: u16 = 0x0800;
    const IPV6: u16 = 0x86dd;
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl From<u16> for EtherType2 {
    fn from(n: u16) -> Self {
        match n {
            Self::ARP => EtherType2::Arp,
            Self::IPV4 => EtherType2::Ipv4,
            Self::IPV6 => EtherType2::Ipv6,
            n => EtherType2::Unknown(n),
        }
    }
}

impl From<EtherType2> for u16 {
    fn from(ether_type: EtherType2) -> u16 {
        match ether_type {
            EtherType2::Arp => EtherType2::ARP,
            EtherType2::Ipv4 => EtherType2::IPV4,
            EtherType2::Ipv6 => EtherType2::IPV6,
            EtherType2::Unknown(n) => n,
        }
    }
}

impl fmt::Display for EtherType2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EtherType2::Arp => write!(f, "ARP"),
            EtherType2::Ipv4 => write!(f, "IPv4"),
            EtherType2::Ipv6 => write!(f, "IPv6"),
            EtherType2::Unknown(n) => write!(f, "{:#06x}", n),
        }
    }
}
