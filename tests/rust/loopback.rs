// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//==============================================================================
// Imports
//==============================================================================

use ::anyhow::Result;
use ::ethif::{
    ensure_eq,
    runtime::logging,
    Config,
    EtherType2,
    Ethernet2Endpoint,
    MacAddress,
    PhysicalLayer,
    SharedLoopbackLayer,
    ETHERNET2_HEADER_SIZE,
};
use ::std::{
    cell::RefCell,
    env,
};

//==============================================================================
// Constants
//==============================================================================

const CONFIG: &str = "ethif:\n  local_link_addr: \"12:23:45:67:89:ab\"\n  mtu: 576\n";
const PEER_MAC: MacAddress = MacAddress::new([0xaa, 0x89, 0x67, 0x45, 0x23, 0x12]);

//==============================================================================
// Helpers
//==============================================================================

fn setup() -> Result<(SharedLoopbackLayer, Ethernet2Endpoint)> {
    logging::initialize();
    // Exported overrides would replace the values in CONFIG.
    env::remove_var("ETHIF_LOCAL_LINK_ADDR");
    env::remove_var("ETHIF_MTU");
    let device: SharedLoopbackLayer = SharedLoopbackLayer::from_config(&Config::from_yaml_str(CONFIG)?)?;
    let endpoint: Ethernet2Endpoint = Ethernet2Endpoint::connect(Box::new(device.clone()));
    Ok((device, endpoint))
}

fn send(endpoint: &mut Ethernet2Endpoint, dst_addr: MacAddress, ether_type: EtherType2, payload: &[u8]) -> Result<()> {
    if let Err(e) = endpoint.write(None, dst_addr, ether_type, Some(payload.len()), |buf: &mut [u8]| {
        buf[..payload.len()].copy_from_slice(payload);
        payload.len()
    }) {
        anyhow::bail!("write failed: {:?}", e);
    }
    Ok(())
}

//==============================================================================
// Tests
//==============================================================================

/// Frames written through the loopback device come back to the matching handler.
#[test]
fn loopback_round_trip() -> Result<()> {
    let (mut device, mut endpoint) = setup()?;
    ensure_eq!(endpoint.get_mtu(), 576);

    let link_addr: MacAddress = endpoint.get_link_addr();
    send(&mut endpoint, link_addr, EtherType2::Ipv4, b"to self")?;
    send(&mut endpoint, MacAddress::broadcast(), EtherType2::Arp, b"broadcast")?;
    send(&mut endpoint, PEER_MAC, EtherType2::Ipv6, b"to peer")?;

    let seen: RefCell<Vec<(&str, Vec<u8>)>> = RefCell::new(Vec::new());
    for frame in device.receive() {
        endpoint.input(
            |payload: &[u8]| seen.borrow_mut().push(("arp", payload.to_vec())),
            |payload: &[u8]| seen.borrow_mut().push(("ipv4", payload.to_vec())),
            |payload: &[u8]| seen.borrow_mut().push(("ipv6", payload.to_vec())),
            &frame,
        );
    }

    // The frame for the peer is dropped.
    ensure_eq!(
        seen.into_inner(),
        vec![("ipv4", b"to self".to_vec()), ("arp", b"broadcast".to_vec())]
    );
    Ok(())
}

/// Generic variable names in the environment do not leak into the link settings.
#[test]
fn loopback_ignores_bare_mtu_variable() -> Result<()> {
    env::set_var("MTU", "1280");
    let (_device, endpoint) = setup()?;
    ensure_eq!(endpoint.get_mtu(), 576);
    Ok(())
}

/// Oversized writes fail before anything is queued.
#[test]
fn loopback_enforces_mtu() -> Result<()> {
    let (device, mut endpoint) = setup()?;
    let result = endpoint.write(None, PEER_MAC, EtherType2::Ipv4, Some(577), |_: &mut [u8]| 0);
    match result {
        Err(e) if e.is_exceeds_mtu() => (),
        other => anyhow::bail!("expected ExceedsMtu, got {:?}", other),
    }
    ensure_eq!(device.pending(), 0);
    Ok(())
}

/// Device failures reach the caller unchanged.
#[test]
fn loopback_write_after_device_disconnect() -> Result<()> {
    let (mut device, mut endpoint) = setup()?;
    device.disconnect()?;
    match endpoint.write(None, PEER_MAC, EtherType2::Arp, Some(28), |_: &mut [u8]| 28) {
        Err(e) if e.errno == libc::ENOTCONN => (),
        other => anyhow::bail!("expected ENOTCONN, got {:?}", other),
    }
    endpoint.disconnect();
    Ok(())
}

/// A frame carries exactly the header plus the bytes the fill routine reported.
#[test]
fn loopback_partial_fill() -> Result<()> {
    let (mut device, mut endpoint) = setup()?;
    endpoint.write(None, PEER_MAC, EtherType2::Ipv4, None, |buf: &mut [u8]| {
        buf[..3].copy_from_slice(b"abc");
        3
    })?;
    let frames = device.receive();
    ensure_eq!(frames.len(), 1);
    ensure_eq!(frames[0].len(), ETHERNET2_HEADER_SIZE + 3);
    Ok(())
}
