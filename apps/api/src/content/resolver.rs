//! Content Resolver — read-with-fallback over the document store.
//!
//! Policy: the public site must never render an empty section. A read that
//! fails or comes back empty is answered with the fixed placeholder table
//! instead; real records and placeholders are never mixed. The branch is
//! written out explicitly so the fallback path stays visible.

use serde_json::Value;
use tracing::debug;

use crate::db::{DocumentStore, StoredDocument};

/// Lists `collection` from the store, falling back to `placeholder` on an
/// empty result or any store error. Store errors are absorbed here — the
/// caller always gets content.
pub async fn resolve_collection(
    store: &DocumentStore,
    collection: &str,
    placeholder: fn() -> Vec<Value>,
) -> Vec<Value> {
    match store.list_documents(collection).await {
        Ok(docs) if !docs.is_empty() => docs.into_iter().map(normalize_document).collect(),
        Ok(_) => placeholder(),
        Err(err) => {
            debug!(collection, error = %err, "store read failed; serving placeholder content");
            placeholder()
        }
    }
}

/// Renames the store's identifier onto a public `id` string field. Any
/// internal `_id` key a seeded record might carry is dropped so it never
/// leaks under its original name.
fn normalize_document(doc: StoredDocument) -> Value {
    let StoredDocument { id, mut data } = doc;
    if let Value::Object(map) = &mut data {
        map.remove("_id");
        map.insert("id".to_string(), Value::String(id.to_string()));
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::placeholders::placeholder_services;
    use crate::db::collections;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn test_normalize_adds_public_id() {
        let id = Uuid::new_v4();
        let doc = StoredDocument {
            id,
            data: json!({"name": "Gloss & Tone"}),
        };

        let value = normalize_document(doc);
        assert_eq!(value["id"], json!(id.to_string()));
        assert_eq!(value["name"], json!("Gloss & Tone"));
    }

    #[test]
    fn test_normalize_strips_internal_id_key() {
        let doc = StoredDocument {
            id: Uuid::new_v4(),
            data: json!({"_id": "internal-123", "name": "Gloss & Tone"}),
        };

        let value = normalize_document(doc);
        assert!(value.get("_id").is_none());
        assert!(value["id"].is_string());
    }

    #[tokio::test]
    async fn test_unavailable_store_yields_exact_placeholder_list() {
        let store = DocumentStore::unavailable();
        let resolved =
            resolve_collection(&store, collections::SERVICE, placeholder_services).await;
        assert_eq!(resolved, placeholder_services());
    }
}
