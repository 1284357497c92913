// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::future::Future;
use std::net::IpAddr;
use std::str::FromStr;

use hickory_resolver::config::{LookupIpStrategy, ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::rr::RData;
use hickory_resolver::TokioResolver;
use tracing::debug;

pub use error::Error;

use crate::resources::{Name, RecordType, MX, TXT};
use crate::system_config;

pub mod error;

pub type ResolverResult<T> = std::result::Result<T, Error>;

/// The lookups a report is assembled from.
///
/// Every lookup is independent of the others; a failing lookup must not influence any other.
#[allow(async_fn_in_trait)]
pub trait Lookup {
    /// All addresses of `name`, regardless of family, in resolver order.
    async fn lookup_ip(&self, name: &str) -> ResolverResult<Vec<IpAddr>>;

    /// Canonical name of `name`, i.e., the end of its CNAME chain or `name` itself if it is not an alias.
    async fn lookup_cname(&self, name: &str) -> ResolverResult<Name>;

    /// Mail exchangers of `name` ordered by preference.
    async fn lookup_mx(&self, name: &str) -> ResolverResult<Vec<MX>>;

    async fn lookup_ns(&self, name: &str) -> ResolverResult<Vec<Name>>;

    async fn lookup_txt(&self, name: &str) -> ResolverResult<Vec<TXT>>;
}

/// Lookups against the system's configured nameservers.
pub struct Resolver {
    inner: TokioResolver,
}

impl Resolver {
    /// Creates a new Resolver.
    ///
    /// The IP lookup strategy is always set to query A and AAAA records at once, so a single address lookup serves
    /// both address sections of a report.
    pub fn new(config: ResolverConfig, mut opts: ResolverOpts) -> Self {
        opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
        debug!(
            "Creating resolver with {} nameservers, timeout={}s, attempts={}.",
            config.name_servers().len(),
            opts.timeout.as_secs(),
            opts.attempts
        );
        let inner = TokioResolver::builder_with_config(config, TokioConnectionProvider::default())
            .with_options(opts)
            .build();

        Resolver { inner }
    }

    /// Target of the CNAME record of `alias`, if `alias` has one.
    async fn cname_target(&self, alias: Name) -> ResolverResult<Option<Name>> {
        match self.inner.lookup(alias, RecordType::CNAME.into()).await {
            Ok(lookup) => Ok(lookup
                .iter()
                .filter_map(|rdata| match rdata {
                    RData::CNAME(cname) => Some(cname.0.clone()),
                    _ => None,
                })
                .last()),
            Err(err) => match Error::from(err) {
                // The name exists, but is not an alias
                Error::NoRecordsFound { .. } => Ok(None),
                err => Err(err),
            },
        }
    }

    /// Creates a `Resolver` from local system configuration.
    ///
    /// Unix: Parses `/etc/resolv.conf`. Falls back to nameservers on localhost if there is no usable configuration.
    pub fn from_system_config() -> Self {
        let (config, opts) = system_config::load_from_system_config_or_default();
        Resolver::new(config, opts)
    }
}

impl Lookup for Resolver {
    async fn lookup_ip(&self, name: &str) -> ResolverResult<Vec<IpAddr>> {
        debug!("Looking up addresses of '{}'.", name);
        let lookup = self.inner.lookup_ip(name).await?;
        Ok(lookup.iter().collect())
    }

    async fn lookup_cname(&self, name: &str) -> ResolverResult<Name> {
        debug!("Looking up canonical name of '{}'.", name);
        let name = Name::from_str(name).map_err(|e| Error::ResolveError { reason: e.to_string() })?;
        follow_cname_chain(name, move |alias| self.cname_target(alias)).await
    }

    async fn lookup_mx(&self, name: &str) -> ResolverResult<Vec<MX>> {
        debug!("Looking up MX records of '{}'.", name);
        let lookup = self.inner.mx_lookup(name).await?;
        Ok(mxs_by_preference(lookup.iter()))
    }

    async fn lookup_ns(&self, name: &str) -> ResolverResult<Vec<Name>> {
        debug!("Looking up NS records of '{}'.", name);
        let lookup = self.inner.ns_lookup(name).await?;
        Ok(lookup.iter().map(|ns| ns.0.clone()).collect())
    }

    async fn lookup_txt(&self, name: &str) -> ResolverResult<Vec<TXT>> {
        debug!("Looking up TXT records of '{}'.", name);
        let lookup = self.inner.txt_lookup(name).await?;
        Ok(lookup.iter().map(TXT::from).collect())
    }
}

/// Maximum number of CNAME records followed from the queried name.
pub const MAX_CNAME_HOPS: usize = 8;

/// Follows the CNAME chain starting at `name` until a name without CNAME record is reached.
///
/// `cname_target` yields the target of a name's CNAME record or `None` if it has none. A name that is not an alias is
/// its own canonical name. Chains longer than `MAX_CNAME_HOPS`, including loops, are errors.
async fn follow_cname_chain<F, Fut>(name: Name, mut cname_target: F) -> ResolverResult<Name>
where
    F: FnMut(Name) -> Fut,
    Fut: Future<Output = ResolverResult<Option<Name>>>,
{
    let mut canonical_name = name.clone();
    for _ in 0..=MAX_CNAME_HOPS {
        match cname_target(canonical_name.clone()).await? {
            Some(target) => {
                debug!("'{}' is an alias for '{}'.", canonical_name, target);
                canonical_name = target;
            }
            None => {
                canonical_name.set_fqdn(true);
                return Ok(canonical_name);
            }
        }
    }

    Err(Error::ResolveError {
        reason: format!("CNAME chain of '{}' exceeds {} hops", name, MAX_CNAME_HOPS),
    })
}

/// Mail exchangers ordered by preference; exchangers of equal preference keep their order.
fn mxs_by_preference<'a, I>(mxs: I) -> Vec<MX>
where
    I: IntoIterator<Item = &'a hickory_resolver::proto::rr::rdata::MX>,
{
    let mut mxs: Vec<_> = mxs.into_iter().map(MX::from).collect();
    mxs.sort_by_key(MX::preference);
    mxs
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::future;

    use spectral::prelude::*;

    use super::*;

    fn name(str: &str) -> Name {
        Name::from_str(str).unwrap()
    }

    async fn canonical_name(start: &str, aliases: &[(&str, &str)]) -> ResolverResult<Name> {
        let aliases: HashMap<Name, Name> = aliases
            .iter()
            .map(|(alias, target)| (name(alias), name(target)))
            .collect();
        follow_cname_chain(name(start), |mut alias| {
            alias.set_fqdn(true);
            future::ready(Ok(aliases.get(&alias).cloned()))
        })
        .await
    }

    #[tokio::test]
    async fn not_an_alias() {
        crate::utils::tests::logging::init();

        let res = canonical_name("www.example.com", &[]).await;

        assert_that(&res.map(|x| x.to_utf8())).is_ok().is_equal_to("www.example.com.".to_string());
    }

    #[tokio::test]
    async fn not_an_alias_keeps_root() {
        crate::utils::tests::logging::init();

        let res = canonical_name("www.example.com.", &[]).await;

        assert_that(&res.map(|x| x.to_utf8())).is_ok().is_equal_to("www.example.com.".to_string());
    }

    #[tokio::test]
    async fn multi_hop_chain_resolves_to_its_end() {
        crate::utils::tests::logging::init();
        let aliases = [
            ("a.example.com.", "b.example.net."),
            ("b.example.net.", "c.example.org."),
            ("c.example.org.", "d.example.org."),
        ];

        let res = canonical_name("a.example.com", &aliases).await;

        assert_that(&res.map(|x| x.to_utf8())).is_ok().is_equal_to("d.example.org.".to_string());
    }

    #[tokio::test]
    async fn longest_allowed_chain() {
        crate::utils::tests::logging::init();
        let names: Vec<String> = (0..=MAX_CNAME_HOPS).map(|i| format!("host{}.example.com.", i)).collect();
        let aliases: Vec<(&str, &str)> = names.windows(2).map(|x| (x[0].as_str(), x[1].as_str())).collect();

        let res = canonical_name(&names[0], &aliases).await;

        assert_that(&res.map(|x| x.to_utf8())).is_ok().is_equal_to(names[MAX_CNAME_HOPS].clone());
    }

    #[tokio::test]
    async fn cname_loop_fails() {
        crate::utils::tests::logging::init();
        let aliases = [("a.example.com.", "b.example.com."), ("b.example.com.", "a.example.com.")];

        let res = canonical_name("a.example.com.", &aliases).await;

        assert_that(&res).is_err();
    }

    #[tokio::test]
    async fn lookup_error_is_kept() {
        crate::utils::tests::logging::init();
        let err = Error::NonExistentDomain {
            reason: "no record found".to_string(),
        };

        let res = follow_cname_chain(name("a.example.com."), |_| future::ready(Err(err.clone()))).await;

        assert_that(&res).is_err().is_equal_to(&err);
    }

    #[test]
    fn mxs_sorted_by_preference_and_stable() {
        use hickory_resolver::proto::rr::rdata::MX as HickoryMX;

        crate::utils::tests::logging::init();
        let records = vec![
            HickoryMX::new(20, name("mx4.example.com.")),
            HickoryMX::new(10, name("mx2.example.com.")),
            HickoryMX::new(10, name("mx3.example.com.")),
            HickoryMX::new(5, name("mx1.example.com.")),
            HickoryMX::new(10, name("mx0.example.com.")),
        ];

        let mxs = mxs_by_preference(&records);

        assert_that(&mxs).is_equal_to(vec![
            MX::new(5, name("mx1.example.com.")),
            MX::new(10, name("mx2.example.com.")),
            MX::new(10, name("mx3.example.com.")),
            MX::new(10, name("mx0.example.com.")),
            MX::new(20, name("mx4.example.com.")),
        ]);
    }
}
