//! Facts about the running process and its host.
//!
//! The report is printed as JSON for `--report` and logged line by line
//! as text in debug mode.

use md5::{Digest, Md5};
use serde::Serialize;
use serde_json::Value;
use std::env;

use crate::config::Settings;

pub const ENCODING: &str = "utf-8";
pub const ENCODING_ERRORS_POLICY: &str = "ignore";

/// RFC 4122 name space for fully qualified domain names
const NAMESPACE_DNS: [u8; 16] = [
    0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
];

const CPU_PRESENT_PATH: &str = "/sys/devices/system/cpu/present";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Report {
    pub library_env: LibraryEnv,
    pub runtime_env: RuntimeEnv,
    pub os_env: OsEnv,
    pub os_cpu_resources: CpuResources,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LibraryEnv {
    pub debug_mode: bool,
    pub quiet_mode: bool,
    pub verbose_mode: bool,
    pub version: String,
    pub encoding: String,
    pub encoding_errors_policy: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuntimeEnv {
    pub package: String,
    pub exec_path: String,
    pub target_family: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct OsEnv {
    pub node_id: String,
    pub os: String,
    pub arch: String,
    pub family: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CpuResources {
    pub os_cpu_present: i64,
    pub os_cpu_available: i64,
}

/// Collect the report for the given settings
pub fn assess(settings: &Settings) -> Report {
    let exec_path = env::current_exe()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    let os_cpu_available = std::thread::available_parallelism()
        .map(|n| n.get() as i64)
        .unwrap_or(-1);

    let os_cpu_present = std::fs::read_to_string(CPU_PRESENT_PATH)
        .ok()
        .and_then(|list| count_cpu_list(&list))
        .map(|n| n as i64)
        .unwrap_or(os_cpu_available);

    Report {
        library_env: LibraryEnv {
            debug_mode: settings.debug,
            quiet_mode: settings.quiet,
            verbose_mode: settings.verbose,
            version: env!("CARGO_PKG_VERSION").to_string(),
            encoding: ENCODING.to_string(),
            encoding_errors_policy: ENCODING_ERRORS_POLICY.to_string(),
        },
        runtime_env: RuntimeEnv {
            package: env!("CARGO_PKG_NAME").to_string(),
            exec_path,
            target_family: env::consts::FAMILY.to_string(),
        },
        os_env: OsEnv {
            node_id: uuid3_dns(&host_name()),
            os: env::consts::OS.to_string(),
            arch: env::consts::ARCH.to_string(),
            family: env::consts::FAMILY.to_string(),
        },
        os_cpu_resources: CpuResources {
            os_cpu_present,
            os_cpu_available,
        },
    }
}

fn host_name() -> String {
    env::var("HOSTNAME")
        .ok()
        .filter(|h| !h.trim().is_empty())
        .or_else(|| {
            std::fs::read_to_string("/etc/hostname")
                .ok()
                .map(|h| h.trim().to_string())
                .filter(|h| !h.is_empty())
        })
        .unwrap_or_default()
}

/// Name based (MD5, version 3) UUID of `name` in the DNS name space
fn uuid3_dns(name: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(NAMESPACE_DNS);
    hasher.update(name.as_bytes());
    let mut bytes: [u8; 16] = hasher.finalize().into();

    bytes[6] = (bytes[6] & 0x0f) | 0x30;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    format!("{}-{}-{}-{}-{}", &hex[0..8], &hex[8..12], &hex[12..16], &hex[16..20], &hex[20..32])
}

/// Count the CPUs in a kernel CPU list such as `0-3,8,10-11`
fn count_cpu_list(list: &str) -> Option<usize> {
    let list = list.trim();
    if list.is_empty() {
        return None;
    }

    let mut count = 0;
    for part in list.split(',') {
        count += match part.split_once('-') {
            Some((first, last)) => {
                let first: usize = first.parse().ok()?;
                let last: usize = last.parse().ok()?;
                last.checked_sub(first)? + 1
            }
            None => {
                part.parse::<usize>().ok()?;
                1
            }
        };
    }
    Some(count)
}

impl Report {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// One line per section: `section: key=value, key=value`
    pub fn to_text(&self) -> serde_json::Result<String> {
        let value = serde_json::to_value(self)?;
        let mut lines = Vec::new();

        if let Value::Object(sections) = value {
            for (section, entries) in sections {
                let values: Vec<String> = match entries {
                    Value::Object(map) => map
                        .into_iter()
                        .map(|(k, v)| format!("{}={}", k, plain(&v)))
                        .collect(),
                    other => vec![plain(&other)],
                };
                lines.push(format!("{}: {}", section, values.join(", ")));
            }
        }

        Ok(lines.join("\n"))
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
