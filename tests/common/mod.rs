#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};

use lopdf::{Document, Object, Stream, dictionary};
use pdf_protector::{DocumentEngine, EngineError, ProtectionPolicy};

const PASSWORD_PREFIX: &str = "PASSWORD:";

/// Plain-text stand-in for a protected document.
///
/// A file whose first line is `PASSWORD:<pw>` only opens with `<pw>`; a file
/// starting with `CORRUPT` fails to parse.
pub struct FakeDocument {
    pub body: String,
    pub password: Option<String>,
}

/// In-memory engine that records every call the batch processor makes.
#[derive(Default)]
pub struct FakeEngine {
    pub opened: RefCell<Vec<PathBuf>>,
    pub saved: RefCell<Vec<PathBuf>>,
    pub policies: RefCell<Vec<ProtectionPolicy>>,
    pub closed: Cell<usize>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.borrow().clone()
    }

    pub fn saved(&self) -> Vec<PathBuf> {
        self.saved.borrow().clone()
    }
}

impl DocumentEngine for FakeEngine {
    type Document = FakeDocument;

    fn open(&self, path: &Path, password: &str) -> Result<FakeDocument, EngineError> {
        self.opened.borrow_mut().push(path.to_path_buf());
        let content = fs::read_to_string(path)?;

        if content.starts_with("CORRUPT") {
            return Err(EngineError::Malformed("not a PDF".to_string()));
        }

        match content.strip_prefix(PASSWORD_PREFIX) {
            Some(rest) => {
                let (expected, body) = rest.split_once('\n').unwrap_or((rest, ""));
                if expected != password {
                    return Err(EngineError::InvalidPassword(
                        "Cannot decrypt PDF, the password is incorrect".to_string(),
                    ));
                }
                Ok(FakeDocument {
                    body: body.to_string(),
                    password: Some(expected.to_string()),
                })
            }
            None => Ok(FakeDocument {
                body: content,
                password: None,
            }),
        }
    }

    fn protect(
        &self,
        document: &mut FakeDocument,
        policy: &ProtectionPolicy,
    ) -> Result<(), EngineError> {
        self.policies.borrow_mut().push(policy.clone());
        document.password = Some(policy.user_password.clone());
        Ok(())
    }

    fn save(&self, document: &mut FakeDocument, path: &Path) -> Result<(), EngineError> {
        let password = document.password.as_deref().unwrap_or("");
        fs::write(path, format!("{PASSWORD_PREFIX}{password}\n{}", document.body))?;
        self.saved.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn close(&self, document: FakeDocument) {
        self.closed.set(self.closed.get() + 1);
        drop(document);
    }
}

pub fn write_plain(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

pub fn write_locked(dir: &Path, name: &str, password: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("{PASSWORD_PREFIX}{password}\n{body}")).unwrap();
    path
}

/// Write a minimal single-page PDF to `path`.
pub fn write_sample_pdf(path: &Path) {
    let mut doc = Document::with_version("1.7");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let content = Stream::new(dictionary! {}, b"BT /F1 24 Tf 72 700 Td (Hello) Tj ET".to_vec());
    let content_id = doc.add_object(content);

    let pages_id = doc.new_object_id();
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(pages_id),
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(612),
            Object::Integer(792),
        ],
        "Contents" => Object::Reference(content_id),
        "Resources" => dictionary! {
            "Font" => dictionary! { "F1" => Object::Reference(font_id) },
        },
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => Object::Integer(1),
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    doc.save(path).unwrap();
}
