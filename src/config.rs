use crate::error::{BadEnvVarSnafu, ParseSocketAddrSnafu, PupilResult};
use dotenvy::var;
use snafu::ResultExt;
use std::net::SocketAddr;

pub const DEFAULT_SERVER_IP: &str = "127.0.0.1:3001";

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    server_ip: SocketAddr,
    api_base: String,
}

impl RuntimeConfiguration {
    pub fn new() -> PupilResult<Self> {
        let server_ip = optional_var("PUPIL_SERVER_IP")?
            .unwrap_or_else(|| DEFAULT_SERVER_IP.to_string());
        let server_ip: SocketAddr = server_ip
            .parse()
            .context(ParseSocketAddrSnafu { original: server_ip })?;

        let api_base = optional_var("PUPIL_API_BASE")?;

        Ok(Self::from_parts(server_ip, api_base))
    }

    ///`api_base` falls back to talking to ourselves
    pub fn from_parts(server_ip: SocketAddr, api_base: Option<String>) -> Self {
        let api_base = api_base
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("http://{server_ip}"));

        Self {
            server_ip,
            api_base,
        }
    }

    pub const fn server_ip(&self) -> SocketAddr {
        self.server_ip
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

fn optional_var(name: &'static str) -> PupilResult<Option<String>> {
    match var(name) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(source) => Err(source).context(BadEnvVarSnafu { name }),
    }
}
