// src/config/host.rs
// DOCUMENTATION: Startup address reporting
// PURPOSE: Print reachable URLs, including the LAN address when bound to all interfaces

use std::net::{IpAddr, UdpSocket};

/// Best guess at this machine's LAN IPv4 address
/// Connecting a UDP socket sends nothing, it only asks the OS to pick a route
pub fn local_network_ip() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("192.0.2.1:80").ok()?;
    let ip = socket.local_addr().ok()?.ip();

    if ip.is_loopback() || ip.is_unspecified() {
        None
    } else {
        Some(ip)
    }
}

/// URLs worth printing for a server bound to `address:port`
pub fn reachable_urls(address: &str, port: u16, network_ip: Option<IpAddr>) -> Vec<(&'static str, String)> {
    match address {
        "0.0.0.0" => {
            let mut urls = vec![("Local", format!("http://localhost:{}", port))];
            if let Some(ip) = network_ip {
                urls.push(("Network", format!("http://{}:{}", ip, port)));
            }
            urls
        }
        "127.0.0.1" | "localhost" => vec![("Local", format!("http://localhost:{}", port))],
        other => vec![("Network", format!("http://{}:{}", other, port))],
    }
}

pub fn log_reachable_urls(address: &str, port: u16) {
    let network_ip = if address == "0.0.0.0" {
        local_network_ip()
    } else {
        None
    };

    for (label, url) in reachable_urls(address, port, network_ip) {
        log::info!("  - {}: {}", label, url);
    }
}
