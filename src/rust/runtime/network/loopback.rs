// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::{
    inetstack::protocols::{
        layer1::PhysicalLayer,
        layer2::ETHERNET2_HEADER_SIZE,
    },
    runtime::{
        fail::Fail,
        network::{
            config::Config,
            consts::RECEIVE_BATCH_SIZE,
            types::MacAddress,
        },
        SharedObject,
    },
};
use ::arrayvec::ArrayVec;
use ::libc::{
    EINVAL,
    ENOTCONN,
};
use ::std::{
    collections::VecDeque,
    ops::{
        Deref,
        DerefMut,
    },
};

//======================================================================================================================
// Structures
//======================================================================================================================

/// In-memory device that hands every transmitted frame back on receive.
pub struct LoopbackLayer {
    link_addr: MacAddress,
    mtu: usize,
    connected: bool,
    frames: VecDeque<Vec<u8>>,
}

#[derive(Clone)]
pub struct SharedLoopbackLayer(SharedObject<LoopbackLayer>);

//======================================================================================================================
// Associate Functions
//======================================================================================================================

impl SharedLoopbackLayer {
    pub fn new(link_addr: MacAddress, mtu: usize) -> Self {
        Self(SharedObject::new(LoopbackLayer {
            link_addr,
            mtu,
            connected: true,
            frames: VecDeque::new(),
        }))
    }

    /// Creates a loopback device with the link address and MTU found in `config`.
    pub fn from_config(config: &Config) -> Result<Self, Fail> {
        Ok(Self::new(config.local_link_addr()?, config.mtu()?))
    }

    /// Removes up to [RECEIVE_BATCH_SIZE] frames from the target device.
    pub fn receive(&mut self) -> ArrayVec<Vec<u8>, RECEIVE_BATCH_SIZE> {
        let mut batch: ArrayVec<Vec<u8>, RECEIVE_BATCH_SIZE> = ArrayVec::new();
        while !batch.is_full() {
            match self.frames.pop_front() {
                Some(frame) => batch.push(frame),
                None => break,
            }
        }
        batch
    }

    /// Returns the number of frames waiting to be received.
    pub fn pending(&self) -> usize {
        self.frames.len()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl PhysicalLayer for SharedLoopbackLayer {
    fn get_link_addr(&self) -> MacAddress {
        self.link_addr
    }

    fn get_mtu(&self) -> usize {
        self.mtu
    }

    fn write(&mut self, size: usize, fill: &mut dyn FnMut(&mut [u8]) -> usize) -> Result<(), Fail> {
        if !self.connected {
            return Err(Fail::new(ENOTCONN, "loopback device is disconnected"));
        }
        if size > self.mtu + ETHERNET2_HEADER_SIZE {
            let cause: String = format!("frame does not fit the device (size={}, mtu={})", size, self.mtu);
            return Err(Fail::new(EINVAL, &cause));
        }

        let mut frame: Vec<u8> = vec![0; size];
        let len: usize = fill(&mut frame);
        if len > size {
            let cause: String = format!("filled past the end of the buffer (len={}, size={})", len, size);
            return Err(Fail::new(EINVAL, &cause));
        }
        frame.truncate(len);
        trace!("write(): looping back frame (len={:?})", len);
        self.frames.push_back(frame);
        Ok(())
    }

    fn disconnect(&mut self) -> Result<(), Fail> {
        self.connected = false;
        self.frames.clear();
        Ok(())
    }
}

impl Deref for SharedLoopbackLayer {
    type Target = LoopbackLayer;

    fn deref(&self) -> &Self::Target {
        self.0.deref()
    }
}

impl DerefMut for SharedLoopbackLayer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0.deref_mut()
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
