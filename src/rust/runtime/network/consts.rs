// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Constants
//======================================================================================================================

/// Default link MTU. Excludes the Ethernet header.
pub const DEFAULT_MTU: usize = 1500;

/// Smallest MTU accepted from configuration (RFC 791 minimum for IPv4).
pub const MIN_MTU: usize = 68;

/// Largest MTU accepted from configuration. Allows jumbo frames.
pub const MAX_MTU: usize = 9000;

/// Length of a received frame batch.
pub const RECEIVE_BATCH_SIZE: usize = 4;
