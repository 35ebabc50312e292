// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

mod macaddr;

//======================================================================================================================
// Exports
//======================================================================================================================

pub use self::macaddr::{
    MacAddress,
    MAC_ADDRESS_SIZE,
};
