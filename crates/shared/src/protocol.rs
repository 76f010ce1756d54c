use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Product, ProductId};

/// Wire form of one product as served by the remote catalog. Field names
/// follow the upstream document; the record id is carried as the enclosing
/// object key, not as a field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPayload {
    pub nome: String,
    pub descricao: String,
    pub preco: f64,
    #[serde(default)]
    pub imagens: Vec<String>,
}

/// The catalog endpoint returns a single JSON object mapping opaque record
/// ids to [`ProductPayload`]s. Deserializing into a `BTreeMap` pins record
/// iteration to ascending key order, which is this app's documented ordering
/// policy for the freshly loaded list.
pub type CatalogDocument = BTreeMap<String, ProductPayload>;

impl ProductPayload {
    pub fn into_product(self, id: impl Into<String>) -> Product {
        Product {
            id: ProductId(id.into()),
            name: self.nome,
            description: self.descricao,
            price: self.preco,
            images: self.imagens,
        }
    }
}

/// Flattens the keyed document into the ordered full list.
pub fn products_from_document(document: CatalogDocument) -> Vec<Product> {
    document
        .into_iter()
        .map(|(key, payload)| payload.into_product(key))
        .collect()
}
