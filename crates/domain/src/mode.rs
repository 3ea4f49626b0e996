//! Local (no device) versus remote operation.

use std::net::IpAddr;

/// Whether status requests go to a real device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionMode {
    /// Served from a file or a loopback host; the device is not reachable.
    Local,
    /// Served by the device itself (or pointed at it).
    Remote,
}

impl ConnectionMode {
    /// Classify an origin by its scheme and host.
    ///
    /// The scheme may be given with or without its trailing colon
    /// (`window.location.protocol` yields `"file:"`).
    #[must_use]
    pub fn detect(scheme: &str, host: &str) -> Self {
        if scheme.trim_end_matches(':').eq_ignore_ascii_case("file") {
            return Self::Local;
        }
        if is_loopback_host(host) {
            Self::Local
        } else {
            Self::Remote
        }
    }

    #[must_use]
    pub fn is_local(self) -> bool {
        matches!(self, Self::Local)
    }
}

fn is_loopback_host(host: &str) -> bool {
    let host = host.trim_start_matches('[').trim_end_matches(']');
    if host.is_empty() || host.eq_ignore_ascii_case("localhost") {
        return true;
    }
    host.parse::<IpAddr>().is_ok_and(|ip| ip.is_loopback())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_detect_local_for_file_scheme() {
        assert_eq!(ConnectionMode::detect("file:", ""), ConnectionMode::Local);
        assert_eq!(ConnectionMode::detect("file", "whatever"), ConnectionMode::Local);
    }

    #[test]
    fn should_detect_local_for_loopback_hosts() {
        for host in ["localhost", "LOCALHOST", "127.0.0.1", "127.1.2.3", "::1", "[::1]"] {
            assert_eq!(
                ConnectionMode::detect("http:", host),
                ConnectionMode::Local,
                "host={host}"
            );
        }
    }

    #[test]
    fn should_detect_remote_for_device_address() {
        assert_eq!(
            ConnectionMode::detect("http:", "192.168.4.1"),
            ConnectionMode::Remote
        );
        assert_eq!(
            ConnectionMode::detect("http", "gmc.local"),
            ConnectionMode::Remote
        );
    }

    #[test]
    fn should_report_is_local() {
        assert!(ConnectionMode::Local.is_local());
        assert!(!ConnectionMode::Remote.is_local());
    }
}
