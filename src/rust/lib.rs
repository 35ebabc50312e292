// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

#![cfg_attr(feature = "strict", deny(warnings))]
#![deny(clippy::all)]

#[macro_use]
extern crate log;

pub mod inetstack;
pub mod runtime;

pub use crate::{
    inetstack::protocols::{
        layer1::PhysicalLayer,
        layer2::{
            EtherType2,
            Ethernet2Endpoint,
            Ethernet2Header,
            ETHERNET2_HEADER_SIZE,
        },
    },
    runtime::{
        fail::Fail,
        network::{
            config::Config,
            loopback::SharedLoopbackLayer,
            types::MacAddress,
        },
    },
};

//======================================================================================================================
// Macros
//======================================================================================================================

/// Ensures that two expressions are equivalent or returns an [anyhow::Error] describing both.
#[macro_export]
macro_rules! ensure_eq {
    ($left:expr, $right:expr) => ({
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(*left_val == *right_val) {
                    ::anyhow::bail!(
                        "ensure failed: `(left == right)`\n  left: `{:?}`,\n right: `{:?}`",
                        left_val,
                        right_val
                    )
                }
            },
        }
    });
}
