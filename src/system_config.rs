// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf;
use tracing::warn;

use crate::resolver;
use crate::Result;

/// Nameservers assumed when the system does not provide any configuration.
pub const DEFAULT_NAMESERVERS: &[IpAddr] = &[IpAddr::V4(Ipv4Addr::LOCALHOST), IpAddr::V6(Ipv6Addr::LOCALHOST)];

/// Loads nameservers and resolver options from local system configuration.
///
/// Unix: Parses `/etc/resolv.conf`.
pub fn load_from_system_config() -> Result<(ResolverConfig, ResolverOpts)> {
    let config = system_conf::read_system_conf().map_err(|err| resolver::Error::ResolveError {
        reason: err.to_string(),
    })?;
    Ok(config)
}

/// Like `load_from_system_config`, but falls back to `DEFAULT_NAMESERVERS` with default options if the system
/// configuration cannot be loaded.
pub fn load_from_system_config_or_default() -> (ResolverConfig, ResolverOpts) {
    match load_from_system_config() {
        Ok(config) => config,
        Err(err) => {
            warn!(
                "Failed to load system resolver configuration, falling back to local nameservers: {}",
                err
            );
            default_config()
        }
    }
}

fn default_config() -> (ResolverConfig, ResolverOpts) {
    let name_servers = NameServerConfigGroup::from_ips_clear(DEFAULT_NAMESERVERS, 53, true);
    let config = ResolverConfig::from_parts(None, Vec::new(), name_servers);
    (config, ResolverOpts::default())
}
