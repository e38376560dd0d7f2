use std::{collections::HashMap, fs, path::Path, str::FromStr};

use alloy::signers::local::PrivateKeySigner;
use serde::Deserialize;
use url::Url;

/// Filename for the network manifest read by every script
pub const FILENAME: &str = "BuyItNow.toml";

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("missing BuyItNow.toml")]
    Missing,

    #[error("network {0} is not declared in the manifest")]
    UnknownNetwork(String),

    #[error("no accounts declared for the selected network")]
    NoAccounts,

    #[error("bad node url: {0}")]
    Url(#[from] url::ParseError),

    #[error("bad signing key: {0}")]
    Key(#[from] alloy::signers::local::LocalSignerError),
}

#[derive(Clone, Debug, Deserialize)]
pub struct Manifest {
    /// Compiler version the checked-in artifact was built with
    pub solidity: String,
    pub networks: HashMap<String, Network>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Network {
    pub url: String,
    /// Signing keys, with or without 0x prefix
    pub accounts: Vec<String>,
}

impl Manifest {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        if !path.as_ref().exists() {
            return Err(ManifestError::Missing);
        }

        let contents = fs::read_to_string(path)?;
        let manifest = toml::from_str(&contents)?;
        Ok(manifest)
    }

    pub fn network(&self, name: &str) -> Result<&Network, ManifestError> {
        self.networks
            .get(name)
            .ok_or_else(|| ManifestError::UnknownNetwork(name.to_owned()))
    }
}

impl Network {
    pub fn node_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.url)
    }

    /// Signer the scripts submit transactions with, the first configured account
    pub fn signer(&self) -> Result<PrivateKeySigner, ManifestError> {
        let key = self.accounts.first().ok_or(ManifestError::NoAccounts)?;
        let signer = PrivateKeySigner::from_str(key)?;
        Ok(signer)
    }

    pub fn signers(&self) -> Result<Vec<PrivateKeySigner>, ManifestError> {
        self.accounts
            .iter()
            .map(|key| PrivateKeySigner::from_str(key).map_err(ManifestError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static MANIFEST: &str = r#"
solidity = "0.8.15"

[networks.devnet]
url = "https://api.s0.ps.hmny.io"
accounts = ["423a6c9415c1c09490f25a1e62f9fb53e6ad2f7fdddf4a468c205738be8a9906"]

[networks.localhost]
url = "http://localhost:8545"
accounts = ["0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"]
"#;

    #[test]
    fn parses_named_networks() {
        let manifest: Manifest = toml::from_str(MANIFEST).unwrap();
        assert_eq!(manifest.solidity, "0.8.15");

        let devnet = manifest.network("devnet").unwrap();
        assert_eq!(
            devnet.node_url().unwrap().host_str(),
            Some("api.s0.ps.hmny.io")
        );
        assert_eq!(devnet.accounts.len(), 1);
    }

    #[test]
    fn loads_manifest_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILENAME);
        fs::write(&path, MANIFEST).unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert!(manifest.network("localhost").is_ok());
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let err = Manifest::load("does-not-exist/BuyItNow.toml").unwrap_err();
        assert!(matches!(err, ManifestError::Missing));
    }

    #[test]
    fn unknown_network_is_an_error() {
        let manifest: Manifest = toml::from_str(MANIFEST).unwrap();
        let err = manifest.network("mainnet").unwrap_err();
        assert!(matches!(err, ManifestError::UnknownNetwork(name) if name == "mainnet"));
    }

    #[test]
    fn signer_accepts_keys_with_and_without_prefix() {
        let manifest: Manifest = toml::from_str(MANIFEST).unwrap();
        let bare = manifest.network("devnet").unwrap().signer().unwrap();
        let prefixed = manifest.network("localhost").unwrap().signer().unwrap();
        assert_ne!(bare.address(), prefixed.address());

        let key = &manifest.network("devnet").unwrap().accounts[0];
        let same = PrivateKeySigner::from_str(&format!("0x{key}")).unwrap();
        assert_eq!(bare.address(), same.address());
    }

    #[test]
    fn empty_accounts_cannot_sign() {
        let network = Network {
            url: "http://localhost:8545".to_owned(),
            accounts: vec![],
        };
        assert!(matches!(
            network.signer().unwrap_err(),
            ManifestError::NoAccounts
        ));
    }
}
