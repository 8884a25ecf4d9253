use super::*;

// =============================================================
// LocalStorage outside the browser
// =============================================================

#[test]
#[cfg(not(feature = "csr"))]
fn local_storage_get_is_unavailable_natively() {
    let storage = LocalStorage;
    assert_eq!(storage.get("theme"), Err(StorageError::Unavailable));
}

#[test]
#[cfg(not(feature = "csr"))]
fn local_storage_set_is_unavailable_natively() {
    let mut storage = LocalStorage;
    assert_eq!(storage.set("theme", "dark"), Err(StorageError::Unavailable));
}

// =============================================================
// StorageError display
// =============================================================

#[test]
fn storage_error_messages_name_the_key() {
    let read = StorageError::Read { key: "theme".to_owned(), reason: "SecurityError".to_owned() };
    assert_eq!(read.to_string(), "storage read failed for key theme: SecurityError");

    let write = StorageError::Write { key: "theme".to_owned(), reason: "QuotaExceeded".to_owned() };
    assert_eq!(write.to_string(), "storage write failed for key theme: QuotaExceeded");

    assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
}
