// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Report generation
//!
//! A report consists of a header, one section per [`RecordType`] in [`RecordType::ALL`] order, and a footer. Every
//! section either lists its records or carries the error of the lookup it is based on; the A and AAAA sections share
//! one address lookup.

use std::fmt;
use std::io::Write;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use tracing::{debug, info};

use crate::resolver::{Error, Lookup, ResolverResult};
use crate::resources::{Name, RecordType, MX, TXT};
use crate::Result;

/// Results of all lookups for one domain name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    domain_name: String,
    ip_addrs: ResolverResult<Vec<IpAddr>>,
    cname: ResolverResult<Name>,
    mx: ResolverResult<Vec<MX>>,
    ns: ResolverResult<Vec<Name>>,
    txt: ResolverResult<Vec<TXT>>,
}

impl Report {
    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    /// Addresses with an IPv4 representation; IPv4-mapped IPv6 addresses are returned in their IPv4 form.
    pub fn ipv4_addrs(&self) -> std::result::Result<Vec<Ipv4Addr>, &Error> {
        self.ip_addrs
            .as_ref()
            .map(|ips| ips.iter().filter_map(ipv4_repr).collect())
    }

    /// Addresses without an IPv4 representation.
    pub fn ipv6_addrs(&self) -> std::result::Result<Vec<Ipv6Addr>, &Error> {
        self.ip_addrs.as_ref().map(|ips| {
            ips.iter()
                .filter(|ip| ipv4_repr(ip).is_none())
                .filter_map(|ip| match ip {
                    IpAddr::V6(ipv6) => Some(*ipv6),
                    IpAddr::V4(_) => None,
                })
                .collect()
        })
    }

    pub fn cname(&self) -> std::result::Result<&Name, &Error> {
        self.cname.as_ref()
    }

    pub fn mx(&self) -> std::result::Result<&[MX], &Error> {
        self.mx.as_deref()
    }

    pub fn ns(&self) -> std::result::Result<&[Name], &Error> {
        self.ns.as_deref()
    }

    pub fn txt(&self) -> std::result::Result<&[TXT], &Error> {
        self.txt.as_deref()
    }

    /// Writes the rendered report at once.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(self.to_string().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn fmt_section(&self, f: &mut fmt::Formatter, record_type: RecordType) -> fmt::Result {
        writeln!(f, "[+] {} Records:", record_type)?;
        match record_type {
            RecordType::A => fmt_entries(f, record_type, self.ipv4_addrs(), |f, ip| {
                writeln!(f, "  - IP Address: {}", ip)
            }),
            RecordType::AAAA => fmt_entries(f, record_type, self.ipv6_addrs(), |f, ip| {
                writeln!(f, "  - IPv6 Address: {}", ip)
            }),
            RecordType::CNAME => fmt_entries(f, record_type, self.cname().map(std::slice::from_ref), |f, name| {
                writeln!(f, "  - Canonical Name: {}", name.to_utf8())
            }),
            RecordType::MX => fmt_entries(f, record_type, self.mx(), |f, mx| {
                writeln!(
                    f,
                    "  - Mail Server: {}, Priority: {}",
                    mx.exchange().to_utf8(),
                    mx.preference()
                )
            }),
            RecordType::NS => fmt_entries(f, record_type, self.ns(), |f, ns| {
                writeln!(f, "  - Name Server: {}", ns.to_utf8())
            }),
            RecordType::TXT => fmt_entries(f, record_type, self.txt(), |f, txt| {
                writeln!(f, "  - {}", txt.as_string())
            }),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== DNS Lookup Results for Domain: {} ===", self.domain_name)?;
        for record_type in RecordType::ALL.iter() {
            writeln!(f)?;
            self.fmt_section(f, *record_type)?;
        }
        writeln!(f)?;
        writeln!(f, "=== End of Results ===")
    }
}

fn fmt_entries<T, I, F>(
    f: &mut fmt::Formatter,
    record_type: RecordType,
    entries: std::result::Result<I, &Error>,
    fmt_entry: F,
) -> fmt::Result
where
    I: IntoIterator<Item = T>,
    F: Fn(&mut fmt::Formatter, T) -> fmt::Result,
{
    match entries {
        Ok(entries) => {
            for entry in entries {
                fmt_entry(&mut *f, entry)?;
            }
            Ok(())
        }
        Err(err) => writeln!(f, "  [!] Error fetching {} records: {}", record_type, err),
    }
}

fn ipv4_repr(ip: &IpAddr) -> Option<Ipv4Addr> {
    match ip.to_canonical() {
        IpAddr::V4(ipv4) => Some(ipv4),
        IpAddr::V6(_) => None,
    }
}

/// Runs all lookups of a report one after another.
pub struct ReportGenerator<L> {
    lookup: L,
}

impl<L: Lookup> ReportGenerator<L> {
    pub fn new(lookup: L) -> ReportGenerator<L> {
        ReportGenerator { lookup }
    }

    /// Generates the report for `domain_name`.
    ///
    /// This never fails: the error of a failed lookup is kept in its section and the remaining lookups still run.
    pub async fn generate(&self, domain_name: &str) -> Report {
        let ip_addrs = self.lookup.lookup_ip(domain_name).await;
        log_result("address", &ip_addrs);
        let cname = self.lookup.lookup_cname(domain_name).await;
        log_result("CNAME", &cname);
        let mx = self.lookup.lookup_mx(domain_name).await;
        log_result("MX", &mx);
        let ns = self.lookup.lookup_ns(domain_name).await;
        log_result("NS", &ns);
        let txt = self.lookup.lookup_txt(domain_name).await;
        log_result("TXT", &txt);

        info!("Finished lookups for '{}'.", domain_name);

        Report {
            domain_name: domain_name.to_string(),
            ip_addrs,
            cname,
            mx,
            ns,
            txt,
        }
    }
}

fn log_result<T>(lookup: &str, result: &ResolverResult<T>) {
    if let Err(err) = result {
        debug!("{} lookup failed: {}", lookup, err);
    }
}
