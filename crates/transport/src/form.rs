//! `application/x-www-form-urlencoded` body builder with per-field encoding.
//!
//! The portal expects most values as plain ASCII but reads button captions and
//! dropdown labels as GBK. Each field records which encoding it needs; the body
//! is percent-encoded byte-wise after transcoding.

use std::borrow::Cow;

use portal::{PortalResult, TextCodec};
use url::form_urlencoded;

/// MIME type sent with every POST.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldValue {
    /// Sent as UTF-8.
    Text(String),
    /// Transcoded with the portal codec before percent-encoding.
    Legacy(String),
}

/// An ordered list of form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    fields: Vec<(&'static str, FieldValue)>,
}

impl FormBody {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field sent as UTF-8.
    pub fn text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, FieldValue::Text(value.into())));
        self
    }

    /// Appends a field transcoded into the portal's legacy encoding.
    pub fn legacy(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, FieldValue::Legacy(value.into())));
        self
    }

    /// Field names in submission order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    /// Serialises the form into a request body.
    ///
    /// # Errors
    ///
    /// Propagates the codec's error if a legacy value cannot be transcoded.
    pub fn encode(&self, codec: &dyn TextCodec) -> PortalResult<String> {
        let mut body = String::new();
        for (name, value) in &self.fields {
            let bytes: Cow<'_, [u8]> = match value {
                FieldValue::Text(text) => Cow::Borrowed(text.as_bytes()),
                FieldValue::Legacy(text) => Cow::Owned(codec.encode(text)?),
            };
            if !body.is_empty() {
                body.push('&');
            }
            body.extend(form_urlencoded::byte_serialize(name.as_bytes()));
            body.push('=');
            body.extend(form_urlencoded::byte_serialize(&bytes));
        }
        Ok(body)
    }
}
