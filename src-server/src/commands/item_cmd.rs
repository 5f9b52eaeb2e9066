//! Store Gateway Operations
//!
//! List, add, toggle and clear. Each is one load of the list, an in-memory
//! change and, for mutations, one save. Two concurrent mutations can race and
//! the last save wins.

use serde::{Deserialize, Serialize};
use crate::domain::{ClearMode, DomainError, DomainResult, Item};
use crate::repository::ListStore;

// ========================
// Request / Response Bodies
// ========================

#[derive(Debug, Default, Deserialize)]
pub struct AddItemRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// `id` is kept loose: any falsy value is missing, any non-string never matches
#[derive(Debug, Default, Deserialize)]
pub struct ToggleItemRequest {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

/// `mode` is kept loose: anything other than the string "checked" clears all
#[derive(Debug, Default, Deserialize)]
pub struct ClearItemsRequest {
    #[serde(default)]
    pub mode: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearResponse {
    pub cleared: ClearMode,
}

// ========================
// Operations
// ========================

/// List all items
pub async fn list_items(store: &dyn ListStore) -> DomainResult<Vec<Item>> {
    Ok(store.load().await?.into_items())
}

/// Add an item with trimmed text
pub async fn add_item(store: &dyn ListStore, req: AddItemRequest) -> DomainResult<Item> {
    let text = req
        .text
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| DomainError::Validation("Item text is required".to_string()))?
        .to_string();

    let mut list = store.load().await?;
    let item = Item::new(text);
    list.push(item.clone());
    store.save(&list).await?;

    tracing::info!(id = %item.id, "item added");
    Ok(item)
}

/// Toggle item checked state
pub async fn toggle_item(store: &dyn ListStore, req: ToggleItemRequest) -> DomainResult<Item> {
    let id = req
        .id
        .filter(is_present)
        .ok_or_else(|| DomainError::Validation("Item ID is required".to_string()))?;

    let mut list = store.load().await?;
    let item = id
        .as_str()
        .and_then(|id| list.toggle(id))
        .ok_or_else(|| DomainError::NotFound("Item not found".to_string()))?;
    store.save(&list).await?;

    tracing::info!(id = %item.id, checked = item.checked, "item toggled");
    Ok(item)
}

/// `null`, `false`, `0` and `""` count as absent
fn is_present(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Clear checked items, or everything
pub async fn clear_items(store: &dyn ListStore, req: ClearItemsRequest) -> DomainResult<ClearResponse> {
    let mode = ClearMode::from_request(req.mode.as_ref().and_then(|m| m.as_str()));

    let mut list = match mode {
        ClearMode::Checked => store.load().await?,
        ClearMode::All => Default::default(),
    };
    list.clear(mode);
    store.save(&list).await?;

    tracing::info!(mode = mode.as_str(), remaining = list.len(), "items cleared");
    Ok(ClearResponse { cleared: mode })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::repository::{KvListStore, KvStore, MemoryKvStore};

    fn store() -> KvListStore<MemoryKvStore> {
        KvListStore::with_default_key(MemoryKvStore::new())
    }

    async fn add(store: &dyn ListStore, text: &str) -> Item {
        add_item(store, AddItemRequest { text: Some(text.to_string()) })
            .await
            .expect("add")
    }

    async fn toggle(store: &dyn ListStore, id: &str) -> DomainResult<Item> {
        toggle_item(store, ToggleItemRequest { id: Some(json!(id)) }).await
    }

    #[tokio::test]
    async fn test_list_empty_when_nothing_stored() {
        let store = store();
        assert!(list_items(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_trims_and_lists_one_new_item() {
        let store = store();
        let created = add(&store, "  Milk \n").await;
        assert_eq!(created.text, "Milk");
        assert!(!created.checked);

        let items = list_items(&store).await.unwrap();
        assert_eq!(items, vec![created]);
    }

    #[tokio::test]
    async fn test_add_rejects_blank_text_without_writing() {
        let store = store();
        for text in [None, Some(""), Some("   "), Some("\t\n")] {
            let err = add_item(&store, AddItemRequest { text: text.map(String::from) })
                .await
                .expect_err("blank text must fail");
            assert_eq!(err, DomainError::Validation("Item text is required".to_string()));
        }
        assert!(store.kv().get(store.key()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_original() {
        let store = store();
        let item = add(&store, "Bread").await;

        assert!(toggle(&store, &item.id).await.unwrap().checked);
        let back = toggle(&store, &item.id).await.unwrap();
        assert!(!back.checked);
        assert_eq!(list_items(&store).await.unwrap(), vec![item]);
    }

    #[tokio::test]
    async fn test_toggle_validation_and_not_found() {
        let store = store();
        add(&store, "Bread").await;
        let before = store.kv().get(store.key()).await.unwrap();

        let err = toggle_item(&store, ToggleItemRequest { id: None }).await.unwrap_err();
        assert_eq!(err, DomainError::Validation("Item ID is required".to_string()));

        for id in [json!(null), json!(""), json!(0), json!(false)] {
            let err = toggle_item(&store, ToggleItemRequest { id: Some(id) }).await.unwrap_err();
            assert_eq!(err, DomainError::Validation("Item ID is required".to_string()));
        }

        let err = toggle(&store, "nope").await.unwrap_err();
        assert_eq!(err, DomainError::NotFound("Item not found".to_string()));

        for id in [json!(5), json!(true), json!(["a"])] {
            let err = toggle_item(&store, ToggleItemRequest { id: Some(id) }).await.unwrap_err();
            assert_eq!(err, DomainError::NotFound("Item not found".to_string()));
        }

        assert_eq!(store.kv().get(store.key()).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_clear_checked_keeps_unchecked_in_order() {
        let store = store();
        let a = add(&store, "a").await;
        let b = add(&store, "b").await;
        let c = add(&store, "c").await;
        toggle(&store, &b.id).await.unwrap();

        let resp = clear_items(&store, ClearItemsRequest { mode: Some(json!("checked")) })
            .await
            .unwrap();
        assert_eq!(resp.cleared, ClearMode::Checked);
        assert_eq!(list_items(&store).await.unwrap(), vec![a, c]);
    }

    #[tokio::test]
    async fn test_clear_other_modes_empty_everything() {
        let store = store();
        for mode in [None, Some(serde_json::json!("all")), Some(serde_json::json!("bogus")), Some(serde_json::json!(1))] {
            add(&store, "x").await;
            let resp = clear_items(&store, ClearItemsRequest { mode }).await.unwrap();
            assert_eq!(resp.cleared, ClearMode::All);
            assert!(list_items(&store).await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_milk_eggs_scenario() {
        let store = store();
        let milk = add(&store, "Milk").await;
        let eggs = add(&store, "Eggs").await;
        toggle(&store, &milk.id).await.unwrap();

        let items = list_items(&store).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, milk.id);
        assert!(items[0].checked);
        assert_eq!(items[1].id, eggs.id);
        assert!(!items[1].checked);
    }
}
