// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Exports
//======================================================================================================================

pub mod ethernet2;
pub use self::ethernet2::{
    EtherType2,
    Ethernet2Header,
    ETHERNET2_HEADER_SIZE,
};


//======================================================================================================================
// Imports
//======================================================================================================================

use crate::{
    inetstack::protocols::layer1::PhysicalLayer,
    runtime::{
        fail::Fail,
        network::types::MacAddress,
    },
};

//======================================================================================================================
// Structures
//======================================================================================================================

/// Ethernet II framing on top of a physical layer. Holds nothing besides the device handle, so the link address and
/// MTU are always those the device currently reports.
pub struct Ethernet2Endpoint {
    layer1_endpoint: Box<dyn PhysicalLayer>,
}

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl Ethernet2Endpoint {
    /// Attaches Ethernet II framing to `layer1_endpoint`.
    pub fn connect(layer1_endpoint: Box<dyn PhysicalLayer>) -> Self {
        info!("connected Ethernet interface (link_addr={})", layer1_endpoint.get_link_addr());
        Self { layer1_endpoint }
    }

    /// Detaches framing from the underlying device. The device itself is left running.
    pub fn disconnect(self) {
        info!("disconnected Ethernet interface (link_addr={})", self.get_link_addr());
    }

    /// Returns the link address of the local station.
    pub fn get_link_addr(&self) -> MacAddress {
        self.layer1_endpoint.get_link_addr()
    }

    /// Returns the largest payload a frame may carry. This excludes [ETHERNET2_HEADER_SIZE].
    pub fn get_mtu(&self) -> usize {
        self.layer1_endpoint.get_mtu()
    }

    /// Parses `frame` and hands its payload to the handler registered for its EtherType. Frames that do not parse,
    /// are unicast to another station, or carry an EtherType with no handler are dropped. At most one handler runs.
    pub fn input<A, I4, I6>(&self, arpv4: A, ipv4: I4, ipv6: I6, frame: &[u8])
    where
        A: FnOnce(&[u8]),
        I4: FnOnce(&[u8]),
        I6: FnOnce(&[u8]),
    {
        let (header, payload): (Ethernet2Header, &[u8]) = match Ethernet2Header::parse(frame) {
            Ok(result) => result,
            Err(e) => {
                debug!("input(): dropping malformed frame ({})", e);
                return;
            },
        };

        // Traffic for other stations is routine on a shared medium.
        if !self.is_of_interest(header.dst_addr()) {
            return;
        }

        match header.ether_type() {
            EtherType2::Arp => arpv4(payload),
            EtherType2::Ipv4 => ipv4(payload),
            EtherType2::Ipv6 => ipv6(payload),
            EtherType2::Unknown(_) => (),
        }
    }

    /// Builds and transmits a single frame. The payload region holds `size` bytes, or a full MTU when `size` is not
    /// given, and `fill` writes the payload into it and returns how many bytes it used. The frame's source address
    /// defaults to the local link address.
    pub fn write<F>(
        &mut self,
        src_addr: Option<MacAddress>,
        dst_addr: MacAddress,
        ether_type: EtherType2,
        size: Option<usize>,
        mut fill: F,
    ) -> Result<(), Fail>
    where
        F: FnMut(&mut [u8]) -> usize,
    {
        let mtu: usize = self.get_mtu();
        let size: usize = match size {
            Some(size) if size > mtu => {
                let e: Fail = Fail::exceeds_mtu(size, mtu);
                debug!("write(): {}", e);
                return Err(e);
            },
            Some(size) => size,
            None => mtu,
        };

        let src_addr: MacAddress = src_addr.unwrap_or_else(|| self.get_link_addr());
        let header: Ethernet2Header = Ethernet2Header::new(dst_addr, src_addr, ether_type);
        debug!("write(): {} (payload_size={})", header, size);

        let mut fill_frame = |buf: &mut [u8]| -> usize {
            if let Err(e) = header.serialize(buf) {
                error!("write(): failed to serialize Ethernet header ({})", e);
                return 0;
            }
            ETHERNET2_HEADER_SIZE.saturating_add(fill(&mut buf[ETHERNET2_HEADER_SIZE..]))
        };

        if let Err(e) = self
            .layer1_endpoint
            .write(ETHERNET2_HEADER_SIZE + size, &mut fill_frame)
        {
            match e.head_source() {
                Some(source) => warn!("write(): failed to transmit frame ({}, caused by {})", e, source),
                None => warn!("write(): failed to transmit frame ({})", e),
            }
            return Err(e);
        }
        Ok(())
    }

    /// Broadcast and multicast frames are always of interest. Unicast frames only when sent to the local station.
    fn is_of_interest(&self, dst_addr: MacAddress) -> bool {
        dst_addr == self.get_link_addr() || !dst_addr.is_unicast()
    }
}
