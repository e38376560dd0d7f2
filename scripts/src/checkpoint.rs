use std::path::{Path, PathBuf};

use alloy::primitives::Address;
use anyhow::Result;
use tracing::info;

/// Record written by deploy and read back by approve and unapprove
pub const DEPLOYED_FILE: &str = "deployedAt.json";

pub struct Checkpointer {
    root_dir: PathBuf,
}

impl Checkpointer {
    pub fn new(root_dir: &Path) -> Self {
        Self {
            root_dir: root_dir.to_path_buf(),
        }
    }

    // File::create truncates, so a redeploy replaces the record in place.
    pub fn save_deployed(&self, address: Address) -> Result<()> {
        std::fs::create_dir_all(&self.root_dir)?;
        let path = self.root_dir.join(DEPLOYED_FILE);
        info!("Saving deployed contract to: {:#}", path.display());
        let file = std::fs::File::create(path)?;
        serde_json::to_writer(file, &address)?;
        Ok(())
    }

    pub fn load_deployed(&self) -> Result<Address> {
        let path = self.root_dir.join(DEPLOYED_FILE);
        info!("Loading deployed contract from: {:#}", path.display());
        let file = std::fs::File::open(path)?;
        let address = serde_json::from_reader(file)?;
        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_a_single_json_address_string() {
        let dir = tempfile::tempdir().unwrap();
        let checkpointer = Checkpointer::new(dir.path());
        let address = Address::repeat_byte(0x42);
        checkpointer.save_deployed(address).unwrap();

        let raw = std::fs::read_to_string(dir.path().join(DEPLOYED_FILE)).unwrap();
        assert!(raw.starts_with("\"0x"), "expected a JSON string, got {raw}");
        assert_eq!(checkpointer.load_deployed().unwrap(), address);
    }

    #[test]
    fn redeploy_overwrites_the_record() {
        let dir = tempfile::tempdir().unwrap();
        let checkpointer = Checkpointer::new(dir.path());
        checkpointer
            .save_deployed(Address::repeat_byte(0x01))
            .unwrap();
        checkpointer
            .save_deployed(Address::repeat_byte(0x02))
            .unwrap();

        assert_eq!(
            checkpointer.load_deployed().unwrap(),
            Address::repeat_byte(0x02)
        );
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn missing_record_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let checkpointer = Checkpointer::new(dir.path());
        assert!(checkpointer.load_deployed().is_err());
    }
}
