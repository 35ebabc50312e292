// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

pub mod header;
pub mod protocol;


pub use self::{
    header::{
        Ethernet2Header,
        ETHERNET2_HEADER_SIZE,
    },
    protocol::EtherType2,
};
