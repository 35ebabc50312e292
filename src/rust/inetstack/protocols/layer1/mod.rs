// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::runtime::{
    fail::Fail,
    network::types::MacAddress,
};

//======================================================================================================================
// Traits
//======================================================================================================================

/// API for the Physical Layer for any underlying hardware or virtual device that exposes a raw NIC interface. The
/// physical layer owns buffer allocation and transmission; the layers above only fill the buffers it hands out.
pub trait PhysicalLayer {
    /// Returns the link address of the station attached to the target device.
    fn get_link_addr(&self) -> MacAddress;

    /// Returns the MTU of the target device. This excludes the Ethernet header.
    fn get_mtu(&self) -> usize;

    /// Acquires a buffer of `size` bytes, lets `fill` write into it, and transmits as many bytes as `fill` reports
    /// having written.
    fn write(&mut self, size: usize, fill: &mut dyn FnMut(&mut [u8]) -> usize) -> Result<(), Fail>;

    /// Shuts down the target device.
    fn disconnect(&mut self) -> Result<(), Fail>;
}
