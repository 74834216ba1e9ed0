//! Build prefilled webmail compose links.
//!
//! Mail is never sent by the site itself; it is handed off to the user's
//! webmail provider through a deep link carrying a prefilled subject and
//! body. The builders here are pure: they read a [`FormData`] snapshot and
//! produce a URL, nothing else.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::contact::FormData;

/// The fixed destination address of every compose link and clipboard copy.
pub const DESTINATION: &str = "yfranco@yjpublicidad.pe";

const SUBJECT_PREFIX: &str = "Cotización - YJ Publicidad";

const GMAIL_COMPOSE: &str = "https://mail.google.com/mail/?view=cm&fs=1";
const OUTLOOK_COMPOSE: &str = "https://outlook.office.com/mail/deeplink/compose";

/// Placeholder for form fields the user left empty.
const EMPTY_FIELD: &str = "-";

// The set of bytes `encodeURIComponent` escapes: everything except
// alphanumerics and `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() { EMPTY_FIELD } else { value }
}

/// Builds the mail subject for a quote request.
///
/// The sender's name is appended when present:
/// `Cotización - YJ Publicidad | Ana`.
#[must_use]
pub fn subject(data: &FormData) -> String {
    if data.nombre.is_empty() {
        SUBJECT_PREFIX.to_owned()
    } else {
        format!("{SUBJECT_PREFIX} | {}", data.nombre)
    }
}

/// Builds the mail body for a quote request.
///
/// Empty fields render as a placeholder dash so the recipient always sees
/// the full template.
#[must_use]
pub fn body(data: &FormData) -> String {
    [
        "Hola YJ Publicidad,",
        "",
        "Quisiera una cotización con los siguientes datos:",
        "",
        &format!("Nombre: {}", or_placeholder(&data.nombre)),
        &format!("Email: {}", or_placeholder(&data.email)),
        &format!("Teléfonos: {}", or_placeholder(&data.telefonos)),
        "",
        "Mensaje:",
        or_placeholder(&data.mensaje),
        "",
        "Enviado desde la web de YJ Publicidad.",
    ]
    .join("\n")
}

/// Builds the Gmail web-compose URL for the given form snapshot.
#[must_use]
pub fn gmail_url(to: &str, data: &FormData) -> String {
    format!(
        "{GMAIL_COMPOSE}&to={}&su={}&body={}",
        encode(to),
        encode(&subject(data)),
        encode(&body(data)),
    )
}

/// Builds the Outlook web-compose URL for the given form snapshot.
#[must_use]
pub fn outlook_url(to: &str, data: &FormData) -> String {
    format!(
        "{OUTLOOK_COMPOSE}?to={}&subject={}&body={}",
        encode(to),
        encode(&subject(data)),
        encode(&body(data)),
    )
}
