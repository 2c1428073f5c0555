// tests/pdf_engine_tests.rs

mod common;

use common::write_sample_pdf;
use pdf_protector::{
    DocumentEngine, EngineError, ErrorClass, PdfEngine, ProtectionPolicy, protect_document,
};
use tempfile::tempdir;

#[test]
fn protected_output_opens_with_new_password() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("plain.pdf");
    let output = dir.path().join("locked.pdf");
    write_sample_pdf(&input);

    protect_document(&input, &output, "", "x", false).unwrap();

    let engine = PdfEngine::new();
    let doc = engine.open(&output, "x").unwrap();
    assert_eq!(doc.get_pages().len(), 1);
    engine.close(doc);
}

#[test]
fn protected_output_rejects_wrong_password() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("plain.pdf");
    let output = dir.path().join("locked.pdf");
    write_sample_pdf(&input);
    protect_document(&input, &output, "", "right", false).unwrap();

    let engine = PdfEngine::new();
    let err = engine.open(&output, "wrong").unwrap_err();
    assert!(matches!(err, EngineError::InvalidPassword(_)), "{err:?}");
    assert!(engine.open(&output, "right").is_ok());

    let again = dir.path().join("again.pdf");
    let err = protect_document(&output, &again, "wrong", "new", false).unwrap_err();
    assert_eq!(err.class(), ErrorClass::Password);
    assert!(!again.exists());
}

#[test]
fn protected_output_rejects_empty_password() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("plain.pdf");
    let output = dir.path().join("locked.pdf");
    write_sample_pdf(&input);
    protect_document(&input, &output, "", "x", false).unwrap();

    let err = PdfEngine::new().open(&output, "").unwrap_err();
    assert!(matches!(err, EngineError::InvalidPassword(_)), "{err:?}");
}

#[test]
fn empty_new_password_removes_protection() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("plain.pdf");
    let locked = dir.path().join("locked.pdf");
    let unlocked = dir.path().join("unlocked.pdf");
    let relocked = dir.path().join("relocked.pdf");
    write_sample_pdf(&input);

    protect_document(&input, &locked, "", "x", false).unwrap();
    protect_document(&locked, &unlocked, "x", "", false).unwrap();

    let engine = PdfEngine::new();
    let doc = engine.open(&unlocked, "").unwrap();
    assert_eq!(doc.get_pages().len(), 1);
    engine.close(doc);

    // An output that opens without a password can be protected again.
    protect_document(&unlocked, &relocked, "", "y", false).unwrap();
    assert!(engine.open(&relocked, "y").is_ok());
    assert!(matches!(
        engine.open(&relocked, ""),
        Err(EngineError::InvalidPassword(_))
    ));
}

#[test]
fn password_can_be_replaced() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("plain.pdf");
    let first = dir.path().join("first.pdf");
    let second = dir.path().join("second.pdf");
    write_sample_pdf(&input);

    protect_document(&input, &first, "", "old", false).unwrap();
    protect_document(&first, &second, "old", "new", false).unwrap();

    let engine = PdfEngine::new();
    assert!(engine.open(&second, "new").is_ok());
    assert!(matches!(
        engine.open(&second, "old"),
        Err(EngineError::InvalidPassword(_))
    ));
}

#[test]
fn missing_and_garbage_inputs_are_io_failures() {
    let dir = tempdir().unwrap();
    let engine = PdfEngine::new();

    let missing = engine.open(&dir.path().join("nope.pdf"), "").unwrap_err();
    assert!(matches!(missing, EngineError::Io(_)), "{missing:?}");

    let garbage = dir.path().join("garbage.pdf");
    std::fs::write(&garbage, b"this is not a pdf").unwrap();
    let err = protect_document(&garbage, &dir.path().join("out.pdf"), "", "x", false)
        .unwrap_err();
    assert_eq!(err.class(), ErrorClass::Io);
}

#[test]
fn non_aes_policies_are_unsupported() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("plain.pdf");
    write_sample_pdf(&input);

    let engine = PdfEngine::new();
    let mut doc = engine.open(&input, "").unwrap();
    let mut policy = ProtectionPolicy::for_user_password("x");
    policy.key_length = 128;
    let err = engine.protect(&mut doc, &policy).unwrap_err();
    assert!(matches!(err, EngineError::Unsupported(_)));
}
