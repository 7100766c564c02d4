use crate::infrastructure::database::{DatabaseError, PreferenceStore};
use serde::{Deserialize, Serialize};

/// Preference key under which the selected language is persisted
pub const LANGUAGE_KEY: &str = "language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
    Es,
    Fr,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "pt" => Some(Language::Pt),
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }
}

/// Key -> string lookup bound to one active language.
///
/// Lookups fall back to Portuguese and then to the key itself, so a missing
/// translation shows up as the raw key instead of an empty label.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Restore the persisted language, defaulting to Portuguese
    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Result<Self, DatabaseError> {
        let language = store
            .get_preference(LANGUAGE_KEY)?
            .and_then(|value| value.as_str().and_then(Language::from_code))
            .unwrap_or_default();
        Ok(Self::new(language))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch language and persist the choice
    pub fn switch<S: PreferenceStore + ?Sized>(
        &mut self,
        language: Language,
        store: &S,
    ) -> Result<(), DatabaseError> {
        store.set_preference(LANGUAGE_KEY, &serde_json::json!(language.code()))?;
        tracing::info!(language = language.code(), "language switched");
        self.language = language;
        Ok(())
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        lookup(self.language, key)
            .or_else(|| lookup(Language::Pt, key))
            .unwrap_or(key)
    }
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    use Language::*;

    let text = match (language, key) {
        (Pt, "log.created") => "Criado",
        (En, "log.created") => "Created",
        (Es, "log.created") => "Creado",
        (Fr, "log.created") => "Créé",

        (Pt, "log.sent") => "Enviado",
        (En, "log.sent") => "Sent",
        (Es, "log.sent") => "Enviado",
        (Fr, "log.sent") => "Envoyé",

        (Pt, "log.viewed") => "Visualizado",
        (En, "log.viewed") => "Viewed",
        (Es, "log.viewed") => "Visto",
        (Fr, "log.viewed") => "Consulté",

        (Pt, "log.signed") => "Assinado",
        (En, "log.signed") => "Signed",
        (Es, "log.signed") => "Firmado",
        (Fr, "log.signed") => "Signé",

        (Pt, "log.completed") => "Concluído",
        (En, "log.completed") => "Completed",
        (Es, "log.completed") => "Completado",
        (Fr, "log.completed") => "Terminé",

        (Pt, "log.moved") => "Movido",
        (En, "log.moved") => "Moved",
        (Es, "log.moved") => "Movido",
        (Fr, "log.moved") => "Déplacé",

        (Pt, "log.renamed") => "Renomeado",
        (En, "log.renamed") => "Renamed",
        (Es, "log.renamed") => "Renombrado",
        (Fr, "log.renamed") => "Renommé",

        (Pt, "documents.all") => "Todos os documentos",
        (En, "documents.all") => "All documents",
        (Es, "documents.all") => "Todos los documentos",
        (Fr, "documents.all") => "Tous les documents",

        (Pt, "documents.delete_title") => "Excluir Documento",
        (En, "documents.delete_title") => "Delete Document",
        (Es, "documents.delete_title") => "Eliminar Documento",

        (Pt, "documents.delete_confirm") => "Tem certeza que deseja excluir este documento?",
        (En, "documents.delete_confirm") => "Are you sure you want to delete this document?",
        (Es, "documents.delete_confirm") => "¿Seguro que desea eliminar este documento?",

        (Pt, "documents.delete_folder_title") => "Excluir Pasta",
        (En, "documents.delete_folder_title") => "Delete Folder",
        (Es, "documents.delete_folder_title") => "Eliminar Carpeta",

        (Pt, "documents.delete_folder_confirm") => {
            "Tem certeza que deseja excluir esta pasta e todos os seus documentos?"
        }
        (En, "documents.delete_folder_confirm") => {
            "Are you sure you want to delete this folder and all its documents?"
        }

        (Pt, "send.select_doc") => "Selecione um documento para enviar.",
        (En, "send.select_doc") => "Select a document to send.",
        (Es, "send.select_doc") => "Seleccione un documento para enviar.",
        (Fr, "send.select_doc") => "Sélectionnez un document à envoyer.",

        (Pt, "send.success") => "E-mail foi enviado com sucesso!",
        (En, "send.success") => "E-mail sent successfully!",
        (Es, "send.success") => "¡Correo enviado con éxito!",
        (Fr, "send.success") => "E-mail envoyé avec succès !",

        (Pt, "auth.password_mismatch") => "As senhas não conferem.",
        (En, "auth.password_mismatch") => "Passwords do not match.",
        (Es, "auth.password_mismatch") => "Las contraseñas no coinciden.",
        (Fr, "auth.password_mismatch") => "Les mots de passe ne correspondent pas.",

        _ => return None,
    };

    Some(text)
}
