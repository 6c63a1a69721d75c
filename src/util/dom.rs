//! Document bindings: root container class list and indicator text.
//!
//! The root container defaults to `<body>`; both elements are resolved once
//! when the surface is built and must already exist in the page.

use web_sys::{Document, Element};

use crate::theme::config::ICON_ID;
use crate::theme::{ThemeConfig, ThemeController, ThemeError, ThemeSurface};
use crate::util::local_storage::LocalStore;

/// Attribute on `<html>` that may carry a JSON `ThemeConfig`.
pub const CONFIG_ATTRIBUTE: &str = "data-theme-config";

/// Controller bound to the live page.
pub type PageThemeController = ThemeController<LocalStore, DomSurface>;

/// `ThemeSurface` over real DOM elements.
pub struct DomSurface {
    root: Element,
    icon: Element,
}

impl DomSurface {
    /// Resolve the root container named by `config` and the indicator.
    ///
    /// # Errors
    ///
    /// Returns `ThemeError::ElementMissing` when the document or either
    /// element is absent.
    pub fn resolve(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let doc = document()?;
        let root = match &config.root_id {
            Some(id) => doc
                .get_element_by_id(id)
                .ok_or_else(|| ThemeError::ElementMissing(id.clone()))?,
            None => doc
                .body()
                .map(Element::from)
                .ok_or_else(|| ThemeError::ElementMissing("body".to_owned()))?,
        };
        let icon = doc
            .get_element_by_id(ICON_ID)
            .ok_or_else(|| ThemeError::ElementMissing(ICON_ID.to_owned()))?;
        Ok(Self { root, icon })
    }
}

impl ThemeSurface for DomSurface {
    fn has_class(&self, class: &str) -> bool {
        self.root.class_list().contains(class)
    }

    fn add_class(&mut self, class: &str) -> Result<(), ThemeError> {
        self.root
            .class_list()
            .add_1(class)
            .map_err(|e| ThemeError::Dom(format!("add class {class}: {e:?}")))
    }

    fn remove_class(&mut self, class: &str) -> Result<(), ThemeError> {
        self.root
            .class_list()
            .remove_1(class)
            .map_err(|e| ThemeError::Dom(format!("remove class {class}: {e:?}")))
    }

    fn set_indicator(&mut self, glyph: &str) -> Result<(), ThemeError> {
        self.icon.set_text_content(Some(glyph));
        Ok(())
    }

    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
}

/// Read the page's `ThemeConfig` from `<html data-theme-config>`.
///
/// Falls back to defaults when the attribute is absent or malformed.
pub fn read_config() -> ThemeConfig {
    let raw = document()
        .ok()
        .and_then(|doc| doc.document_element())
        .and_then(|el| el.get_attribute(CONFIG_ATTRIBUTE));
    ThemeConfig::from_attribute(raw.as_deref())
}

/// Build and initialize the controller for the current page.
///
/// # Errors
///
/// Returns an error when storage is unavailable, an element is missing, or
/// the initial class update fails.
pub fn init_page() -> Result<PageThemeController, ThemeError> {
    let config = read_config();
    let surface = DomSurface::resolve(&config)?;
    let store = LocalStore::open()?;
    ThemeController::initialize(config, store, surface)
}

fn document() -> Result<Document, ThemeError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ThemeError::ElementMissing("document".to_owned()))
}
