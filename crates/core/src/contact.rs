//! The contact page data model.

/// One of the two sub-views inside the contact container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Panel {
    /// The contact information sub-view.
    #[default]
    Contactos,
    /// The quote form sub-view.
    Cotizacion,
}

/// A snapshot of the quote form fields.
///
/// Hosts read the input controls at the moment a compose or copy action is
/// invoked and build a fresh snapshot; snapshots are never cached. All
/// fields are stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormData {
    /// The sender's name.
    pub nombre: String,
    /// The sender's email address.
    pub email: String,
    /// The sender's phone numbers.
    pub telefonos: String,
    /// The free-form message.
    pub mensaje: String,
}

impl FormData {
    /// Builds a snapshot from raw input values, trimming surrounding
    /// whitespace from each field.
    pub fn new(
        nombre: impl AsRef<str>,
        email: impl AsRef<str>,
        telefonos: impl AsRef<str>,
        mensaje: impl AsRef<str>,
    ) -> Self {
        Self {
            nombre: nombre.as_ref().trim().to_owned(),
            email: email.as_ref().trim().to_owned(),
            telefonos: telefonos.as_ref().trim().to_owned(),
            mensaje: mensaje.as_ref().trim().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FormData, Panel};

    #[test]
    fn test_default_panel_is_contactos() {
        assert_eq!(Panel::default(), Panel::Contactos);
    }

    #[test]
    fn test_form_data_trims_fields() {
        let data = FormData::new("  Ana ", "ana@example.com\n", "\t999 888 777", "  hola  ");

        assert_eq!(data.nombre, "Ana");
        assert_eq!(data.email, "ana@example.com");
        assert_eq!(data.telefonos, "999 888 777");
        assert_eq!(data.mensaje, "hola");
    }
}
