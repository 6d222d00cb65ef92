use std::net::IpAddr;
use std::sync::Arc;

use crate::probe::{FsProbe, LocalFs};

/// Hostnames that always resolve to the local machine.
const LOOPBACK_NAMES: &[&str] = &[
    "localhost",
    "localhost.localdomain",
    "ip6-localhost",
    "ip6-loopback",
];

/// Environment shared by every descriptor of a resolution: the filesystem
/// probe and the set of hosts treated as local.
#[derive(Debug, Clone)]
pub struct Context {
    probe: Arc<dyn FsProbe>,
    local_hosts: Vec<String>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Arc::new(LocalFs))
    }
}

impl Context {
    pub fn new(probe: Arc<dyn FsProbe>) -> Self {
        Self {
            probe,
            local_hosts: Vec::new(),
        }
    }

    /// Extra hostnames (beyond loopback) whose URLs count as locally available.
    pub fn with_local_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.local_hosts = hosts
            .into_iter()
            .map(|h| h.into().to_ascii_lowercase())
            .collect();
        self
    }

    pub fn probe(&self) -> &dyn FsProbe {
        self.probe.as_ref()
    }

    pub fn local_hosts(&self) -> &[String] {
        &self.local_hosts
    }

    /// Best-effort loopback check on a hostname; no DNS lookups.
    pub fn is_local_host(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        if LOOPBACK_NAMES.contains(&host.as_str()) || self.local_hosts.contains(&host) {
            return true;
        }
        let literal = host.trim_start_matches('[').trim_end_matches(']');
        literal
            .parse::<IpAddr>()
            .map(|ip| ip.is_loopback())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loopback_names_and_addresses() {
        let ctx = Context::default();
        assert!(ctx.is_local_host("localhost"));
        assert!(ctx.is_local_host("LOCALHOST."));
        assert!(ctx.is_local_host("127.0.0.1"));
        assert!(ctx.is_local_host("127.8.9.10"));
        assert!(ctx.is_local_host("::1"));
        assert!(ctx.is_local_host("[::1]"));
        assert!(!ctx.is_local_host("example.com"));
        assert!(!ctx.is_local_host("172.18.128.1"));
    }

    #[test]
    fn configured_hosts_are_local() {
        let ctx = Context::default().with_local_hosts(["NAS.lan"]);
        assert!(ctx.is_local_host("nas.lan"));
        assert_eq!(ctx.local_hosts(), ["nas.lan".to_string()]);
    }
}
