//! Unit tests for the document-store boundary contracts
//!
//! The store trait is exercised through a BTreeMap-backed test implementation;
//! only the envelope semantics are under test, not persistence.

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;

use sql_print_explainer::document::{
    ApiResult, Document, DocumentStore, Page, PageParams, Status,
};

/// In-memory store used to exercise the boundary contract
#[derive(Default)]
struct InMemoryStore {
    documents: BTreeMap<i64, Document>,
    next_id: i64,
}

impl DocumentStore for InMemoryStore {
    fn save_or_update(&mut self, mut document: Document) -> ApiResult<()> {
        let id = match document.id {
            Some(id) => {
                if !self.documents.contains_key(&id) {
                    return ApiResult::failed(Status::SaveFailed);
                }
                id
            }
            None => {
                self.next_id += 1;
                self.next_id
            }
        };
        document.id = Some(id);
        self.documents.insert(id, document);
        ApiResult::succeed(Status::SaveSuccess, ())
    }

    fn list_documents(&self, params: &PageParams) -> Page<Document> {
        let skip = (params.current.saturating_sub(1) * params.size) as usize;
        let records: Vec<Document> = self
            .documents
            .values()
            .skip(skip)
            .take(params.size as usize)
            .cloned()
            .collect();
        Page {
            current: params.current,
            size: params.size,
            total: self.documents.len() as u64,
            records,
        }
    }

    fn delete_by_id(&mut self, id: i64) -> ApiResult<()> {
        match self.documents.remove(&id) {
            Some(_) => ApiResult::succeed(Status::DeleteSuccess, ()),
            None => ApiResult::failed(Status::DeleteFailed),
        }
    }

    fn modify_status(&mut self, id: i64) -> ApiResult<()> {
        match self.documents.get_mut(&id) {
            Some(document) => {
                document.enabled = !document.enabled;
                ApiResult::succeed(Status::ModifySuccess, ())
            }
            None => ApiResult::failed(Status::ModifyFailed),
        }
    }

    fn get_all_by_version(&self, version: &str) -> ApiResult<Vec<Document>> {
        let documents: Vec<Document> = self
            .documents
            .values()
            .filter(|d| d.version == version)
            .cloned()
            .collect();
        ApiResult::succeed(Status::Success, documents)
    }
}

fn sample_document(name: &str, version: &str) -> Document {
    Document {
        id: None,
        name: name.to_string(),
        category: "Reference".to_string(),
        doc_type: "Function".to_string(),
        subtype: "Built-in".to_string(),
        description: format!("{} reference entry", name),
        fill_value: format!("{}()", name),
        version: version.to_string(),
        like_num: 0,
        enabled: true,
        create_time: None,
        update_time: None,
    }
}

#[test]
fn test_save_assigns_id_and_succeeds() {
    let mut store = InMemoryStore::default();
    let result = store.save_or_update(sample_document("substr", "1.16"));

    assert!(result.is_success());
    assert_eq!(result.status(), Status::SaveSuccess);
    assert_eq!(result.status().code(), 0);
}

#[test]
fn test_update_of_unknown_id_is_a_failure_value() {
    let mut store = InMemoryStore::default();
    let mut document = sample_document("substr", "1.16");
    document.id = Some(42);

    let result = store.save_or_update(document);
    assert!(!result.is_success());
    assert_eq!(result.status(), Status::SaveFailed);
    assert_eq!(result.status().code(), 1);
    assert!(result.data().is_none());
}

#[test]
fn test_paged_listing() {
    let mut store = InMemoryStore::default();
    for i in 0..5 {
        store.save_or_update(sample_document(&format!("fn{}", i), "1.16"));
    }

    let page = store.list_documents(&PageParams { current: 2, size: 2 });
    assert_eq!(page.total, 5);
    assert_eq!(page.records.len(), 2);
    assert_eq!(page.records[0].name, "fn2");
    assert_eq!(page.records[1].name, "fn3");
}

#[test]
fn test_delete_by_id() {
    let mut store = InMemoryStore::default();
    store.save_or_update(sample_document("substr", "1.16"));

    assert_eq!(store.delete_by_id(1).status(), Status::DeleteSuccess);
    assert_eq!(store.delete_by_id(1).status(), Status::DeleteFailed);
}

#[test]
fn test_modify_status_toggles_enabled() {
    let mut store = InMemoryStore::default();
    store.save_or_update(sample_document("substr", "1.16"));

    assert!(store.modify_status(1).is_success());
    let page = store.list_documents(&PageParams { current: 1, size: 10 });
    assert!(!page.records[0].enabled);

    assert!(store.modify_status(1).is_success());
    let page = store.list_documents(&PageParams { current: 1, size: 10 });
    assert!(page.records[0].enabled);

    assert_eq!(store.modify_status(99).status(), Status::ModifyFailed);
}

#[test]
fn test_get_all_by_version_filters() {
    let mut store = InMemoryStore::default();
    store.save_or_update(sample_document("substr", "1.16"));
    store.save_or_update(sample_document("concat", "1.17"));
    store.save_or_update(sample_document("upper", "1.16"));

    let result = store.get_all_by_version("1.16");
    assert!(result.is_success());
    let names: Vec<&str> = result
        .data()
        .unwrap()
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(names, ["substr", "upper"]);
}

#[test]
fn test_status_messages() {
    assert_eq!(Status::SaveSuccess.message(), "Save successful");
    assert_eq!(Status::NotFound.code(), 1);
}
