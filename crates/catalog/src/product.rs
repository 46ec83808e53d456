//! The catalog's product record.

use serde::{Deserialize, Serialize};

use storefront_core::ProductId;

/// A catalog entry. Immutable once constructed; there is no update path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    producer: String,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        producer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            producer: producer.into(),
        }
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn producer(&self) -> &str {
        &self.producer
    }

    /// `"<producer> - <name>"`, used when several products share a name.
    pub fn producer_label(&self) -> String {
        format!("{} - {}", self.producer, self.name)
    }
}
