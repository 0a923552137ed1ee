// Token Registry - Metadata Store Collaborator
// Keyed by token id, written once at mint time. The registry treats the
// blob as opaque; callers resolve it through the single-token lookup.

use indexmap::IndexMap;

use super::types::{TokenId, TokenMetadata};

/// Abstract metadata store interface
pub trait MetadataStore {
    /// Fetch the metadata blob for a token id
    fn get(&self, token_id: &str) -> Option<TokenMetadata>;

    /// Store the metadata blob for a token id
    fn set(&mut self, token_id: &str, metadata: TokenMetadata);
}

/// In-memory metadata store
#[derive(Clone, Debug, Default)]
pub struct MemoryMetadataStore {
    entries: IndexMap<TokenId, TokenMetadata>,
}

impl MemoryMetadataStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetadataStore for MemoryMetadataStore {
    fn get(&self, token_id: &str) -> Option<TokenMetadata> {
        self.entries.get(token_id).cloned()
    }

    fn set(&mut self, token_id: &str, metadata: TokenMetadata) {
        self.entries.insert(token_id.to_string(), metadata);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let mut store = MemoryMetadataStore::new();
        assert_eq!(store.get("0"), None);

        let metadata = TokenMetadata {
            title: Some("Landscape #1".to_string()),
            media: Some("https://example.com/1.png".to_string()),
            ..Default::default()
        };
        store.set("0", metadata.clone());
        assert_eq!(store.get("0"), Some(metadata));
        assert_eq!(store.get("1"), None);
    }
}
