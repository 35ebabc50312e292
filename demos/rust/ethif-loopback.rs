// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

#![cfg_attr(feature = "strict", deny(warnings))]
#![deny(clippy::all)]

//==============================================================================
// Imports
//==============================================================================

use ::anyhow::Result;
use ::clap::{
    Arg,
    ArgMatches,
    Command,
};
use ::ethif::{
    runtime::logging,
    Config,
    EtherType2,
    Ethernet2Endpoint,
    MacAddress,
    SharedLoopbackLayer,
};
use ::std::str::FromStr;

//==============================================================================
// Program Arguments
//==============================================================================

/// Program Arguments
#[derive(Debug)]
struct ProgramArguments {
    /// Path to a configuration file.
    config_path: Option<String>,
    /// Link address of the loopback device, when no configuration file is given.
    link_addr: MacAddress,
    /// MTU of the loopback device, when no configuration file is given.
    mtu: usize,
}

/// Associate functions for Program Arguments
impl ProgramArguments {
    /// Default link address.
    const DEFAULT_LINK_ADDR: &'static str = "12:23:45:67:89:ab";
    /// Default MTU.
    const DEFAULT_MTU: usize = 1500;

    /// Parses the program arguments from the command line interface.
    pub fn new(app_name: &'static str, app_author: &'static str, app_about: &'static str) -> Result<Self> {
        let matches: ArgMatches = Command::new(app_name)
            .author(app_author)
            .about(app_about)
            .arg(
                Arg::new("config")
                    .long("config")
                    .value_parser(clap::value_parser!(String))
                    .required(false)
                    .value_name("PATH")
                    .help("Reads link settings from a configuration file"),
            )
            .arg(
                Arg::new("link-addr")
                    .long("link-addr")
                    .value_parser(clap::value_parser!(String))
                    .required(false)
                    .value_name("MAC")
                    .help("Sets the link address"),
            )
            .arg(
                Arg::new("mtu")
                    .long("mtu")
                    .value_parser(clap::value_parser!(usize))
                    .required(false)
                    .value_name("BYTES")
                    .help("Sets the link MTU"),
            )
            .get_matches();

        // Default arguments.
        let mut args: ProgramArguments = ProgramArguments {
            config_path: matches.get_one::<String>("config").cloned(),
            link_addr: MacAddress::from_str(Self::DEFAULT_LINK_ADDR)?,
            mtu: Self::DEFAULT_MTU,
        };

        if let Some(addr) = matches.get_one::<String>("link-addr") {
            args.link_addr = MacAddress::from_str(addr)?;
        }
        if let Some(mtu) = matches.get_one::<usize>("mtu") {
            args.mtu = *mtu;
        }

        Ok(args)
    }

    /// Builds the loopback device described by the target program arguments.
    fn device(&self) -> Result<SharedLoopbackLayer> {
        match &self.config_path {
            Some(path) => Ok(SharedLoopbackLayer::from_config(&Config::new(path)?)?),
            None => Ok(SharedLoopbackLayer::new(self.link_addr, self.mtu)),
        }
    }
}

//==============================================================================
// Application
//==============================================================================

/// Application
struct Application {
    /// Device that frames are looped back through.
    device: SharedLoopbackLayer,
    /// Framing layer on top of the device.
    endpoint: Ethernet2Endpoint,
}

/// Associated Functions for the Application
impl Application {
    /// Instantiates the application.
    pub fn new(args: &ProgramArguments) -> Result<Self> {
        let device: SharedLoopbackLayer = args.device()?;
        let endpoint: Ethernet2Endpoint = Ethernet2Endpoint::connect(Box::new(device.clone()));
        println!("Link Address: {}, MTU: {}", endpoint.get_link_addr(), endpoint.get_mtu());
        Ok(Self { device, endpoint })
    }

    /// Sends a few frames and dispatches whatever comes back.
    pub fn run(&mut self) -> Result<()> {
        let link_addr: MacAddress = self.endpoint.get_link_addr();
        let frames: [(MacAddress, EtherType2, &[u8]); 4] = [
            (MacAddress::broadcast(), EtherType2::Arp, b"who-has"),
            (link_addr, EtherType2::Ipv4, b"ipv4 datagram"),
            (link_addr, EtherType2::Ipv6, b"ipv6 datagram"),
            (link_addr, EtherType2::Unknown(0x88cc), b"lldp"),
        ];
        for (dst_addr, ether_type, payload) in frames {
            if let Err(e) = self.endpoint.write(None, dst_addr, ether_type, Some(payload.len()), |buf: &mut [u8]| {
                buf[..payload.len()].copy_from_slice(payload);
                payload.len()
            }) {
                anyhow::bail!("failed to write frame: {:?}", e);
            }
        }

        // Oversized payloads never reach the device.
        let mtu: usize = self.endpoint.get_mtu();
        match self.endpoint.write(None, link_addr, EtherType2::Ipv4, Some(mtu + 1), |_: &mut [u8]| 0) {
            Err(e) => println!("oversized write rejected: {}", e),
            Ok(()) => anyhow::bail!("oversized write should fail"),
        }

        while self.device.pending() > 0 {
            for frame in self.device.receive() {
                self.endpoint.input(
                    |payload: &[u8]| println!("ARP: {} bytes", payload.len()),
                    |payload: &[u8]| println!("IPv4: {} bytes", payload.len()),
                    |payload: &[u8]| println!("IPv6: {} bytes", payload.len()),
                    &frame,
                );
            }
        }
        Ok(())
    }
}

//==============================================================================

/// Drives the application.
fn main() -> Result<()> {
    logging::initialize();

    let args: ProgramArguments = ProgramArguments::new(
        "ethif-loopback",
        "Microsoft Corporation",
        "Loops Ethernet frames through an in-memory device.",
    )?;

    let mut app: Application = Application::new(&args)?;
    app.run()?;
    app.endpoint.disconnect();
    Ok(())
}
