// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

pub mod logger;

pub use self::physical_layer::SharedTestPhysicalLayer;

use crate::runtime::network::types::MacAddress;

//==============================================================================
// Constants
//==============================================================================

pub const ALICE_MAC: MacAddress = MacAddress::new([0x12, 0x23, 0x45, 0x67, 0x89, 0xab]);
pub const BOB_MAC: MacAddress = MacAddress::new([0xaa, 0x89, 0x67, 0x45, 0x23, 0x12]);
pub const CARRIE_MAC: MacAddress = MacAddress::new([0xee, 0xcd, 0xab, 0x89, 0x67, 0x45]);
/// IPv6 all-nodes multicast group.
pub const ALL_NODES_MAC: MacAddress = MacAddress::new([0x33, 0x33, 0x00, 0x00, 0x00, 0x01]);
pub const TEST_MTU: usize = 1500;

//==============================================================================
// Standalone Functions
//==============================================================================

pub fn new_alice() -> SharedTestPhysicalLayer {
    SharedTestPhysicalLayer::new_test(ALICE_MAC, TEST_MTU)
}

pub fn new_bob() -> SharedTestPhysicalLayer {
    SharedTestPhysicalLayer::new_test(BOB_MAC, TEST_MTU)
}
