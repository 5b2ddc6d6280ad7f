//! # Key Pair Manager
//!
//! Holds the durable identity keypair of every agent hosted by this process.
//! Persistence is the caller's concern: keys come in and go out as PEM.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use zeroize::Zeroizing;

use crate::keys::{KeyPair, PublicKey};
use crate::vrf::{self, VrfProof};
use crate::CryptoError;

/// Thread-safe registry of agent keypairs.
#[derive(Debug, Default)]
pub struct KeyPairManager {
    keys: RwLock<HashMap<String, Arc<KeyPair>>>,
}

impl KeyPairManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the agent's keypair, generating one on first use.
    ///
    /// An existing identity is never replaced.
    pub fn generate_for(&self, agent_id: &str) -> Result<PublicKey, CryptoError> {
        if let Some(existing) = self.keys.read().get(agent_id) {
            return Ok(existing.public_key());
        }

        let generated = KeyPair::generate()?;
        let mut keys = self.keys.write();
        let keypair = keys
            .entry(agent_id.to_string())
            .or_insert_with(|| Arc::new(generated));
        tracing::debug!(agent_id, "Identity keypair ready");
        Ok(keypair.public_key())
    }

    /// Install a keypair restored from PKCS#8 PEM, replacing any held one.
    pub fn import_pem(&self, agent_id: &str, private_pem: &str) -> Result<PublicKey, CryptoError> {
        let keypair = KeyPair::from_pem(private_pem)?;
        let public_key = keypair.public_key();
        self.keys
            .write()
            .insert(agent_id.to_string(), Arc::new(keypair));
        Ok(public_key)
    }

    /// Keypair held for an agent.
    pub fn get(&self, agent_id: &str) -> Option<Arc<KeyPair>> {
        self.keys.read().get(agent_id).cloned()
    }

    /// Public key held for an agent.
    pub fn public_key(&self, agent_id: &str) -> Option<PublicKey> {
        self.keys.read().get(agent_id).map(|kp| kp.public_key())
    }

    /// SPKI PEM of an agent's public key.
    pub fn export_public_pem(&self, agent_id: &str) -> Result<String, CryptoError> {
        self.require(agent_id)?.public_key().to_pem()
    }

    /// PKCS#8 PEM of an agent's private key, for an external persistence layer.
    pub fn export_private_pem(&self, agent_id: &str) -> Result<Zeroizing<String>, CryptoError> {
        self.require(agent_id)?.to_pem()
    }

    /// VRF proof for a hosted agent under `seed`.
    pub fn prove(&self, agent_id: &str, seed: &str) -> Result<VrfProof, CryptoError> {
        let keypair = self.require(agent_id)?;
        Ok(vrf::prove(agent_id, seed, &keypair))
    }

    /// Forget an agent's keypair. Returns whether one was held.
    pub fn remove(&self, agent_id: &str) -> bool {
        self.keys.write().remove(agent_id).is_some()
    }

    /// Number of agents with a held keypair.
    pub fn len(&self) -> usize {
        self.keys.read().len()
    }

    /// Whether no keypairs are held.
    pub fn is_empty(&self) -> bool {
        self.keys.read().is_empty()
    }

    fn require(&self, agent_id: &str) -> Result<Arc<KeyPair>, CryptoError> {
        self.get(agent_id)
            .ok_or_else(|| CryptoError::UnknownAgent(agent_id.to_string()))
    }
}
