//! Localized UI strings
//!
//! The message table follows the encyclopedia language so that an `es`
//! search shows Spanish placeholders and errors.

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
    Fr,
    De,
}

/// Every user-facing string the widgets draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub input_title: &'static str,
    pub suggestions_title: &'static str,
    pub searching: &'static str,
    pub loading: &'static str,
    pub load_failed: &'static str,
    pub content_unavailable: &'static str,
    pub source: &'static str,
    pub back_hint: &'static str,
    pub link_copied: &'static str,
    pub copy_failed: &'static str,
    pub open_failed: &'static str,
    pub list_hint: &'static str,
    pub detail_hint: &'static str,
}

const EN: Messages = Messages {
    input_title: " Search Wikipedia ",
    suggestions_title: " Suggestions ",
    searching: "searching...",
    loading: "Loading...",
    load_failed: "Could not load the article.",
    content_unavailable: "Content not available.",
    source: "Source",
    back_hint: "[Back]",
    link_copied: "Link copied!",
    copy_failed: "Could not copy link",
    open_failed: "Could not open browser",
    list_hint: "↑/↓ move  Enter select  Esc clear  Ctrl+Y copy link  Ctrl+C quit",
    detail_hint: "↑/↓ scroll  Esc/Backspace back  Ctrl+Y copy link  Ctrl+C quit",
};

const ES: Messages = Messages {
    input_title: " Buscar en Wikipedia ",
    suggestions_title: " Sugerencias ",
    searching: "buscando...",
    loading: "Cargando...",
    load_failed: "No se pudo cargar el artículo.",
    content_unavailable: "Contenido no disponible.",
    source: "Fuente",
    back_hint: "[Volver]",
    link_copied: "¡Enlace copiado!",
    copy_failed: "No se pudo copiar el enlace",
    open_failed: "No se pudo abrir el navegador",
    list_hint: "↑/↓ mover  Enter elegir  Esc limpiar  Ctrl+Y copiar enlace  Ctrl+C salir",
    detail_hint: "↑/↓ desplazar  Esc/Retroceso volver  Ctrl+Y copiar enlace  Ctrl+C salir",
};

const FR: Messages = Messages {
    input_title: " Rechercher sur Wikipédia ",
    suggestions_title: " Suggestions ",
    searching: "recherche...",
    loading: "Chargement...",
    load_failed: "Impossible de charger l'article.",
    content_unavailable: "Contenu non disponible.",
    source: "Source",
    back_hint: "[Retour]",
    link_copied: "Lien copié !",
    copy_failed: "Impossible de copier le lien",
    open_failed: "Impossible d'ouvrir le navigateur",
    list_hint: "↑/↓ naviguer  Entrée choisir  Échap effacer  Ctrl+Y copier  Ctrl+C quitter",
    detail_hint: "↑/↓ défiler  Échap/Retour arrière  Ctrl+Y copier  Ctrl+C quitter",
};

const DE: Messages = Messages {
    input_title: " Wikipedia durchsuchen ",
    suggestions_title: " Vorschläge ",
    searching: "suche...",
    loading: "Wird geladen...",
    load_failed: "Artikel konnte nicht geladen werden.",
    content_unavailable: "Inhalt nicht verfügbar.",
    source: "Quelle",
    back_hint: "[Zurück]",
    link_copied: "Link kopiert!",
    copy_failed: "Link konnte nicht kopiert werden",
    open_failed: "Browser konnte nicht geöffnet werden",
    list_hint: "↑/↓ bewegen  Enter wählen  Esc leeren  Strg+Y Link kopieren  Strg+C beenden",
    detail_hint: "↑/↓ scrollen  Esc/Rücktaste zurück  Strg+Y Link kopieren  Strg+C beenden",
};

impl Locale {
    /// Pick a locale from a language code like `es` or `de-AT`; unknown codes fall back to English
    pub fn from_lang(lang: &str) -> Self {
        let primary = lang
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "es" => Locale::Es,
            "fr" => Locale::Fr,
            "de" => Locale::De,
            _ => Locale::En,
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::Es => &ES,
            Locale::Fr => &FR,
            Locale::De => &DE,
        }
    }
}
