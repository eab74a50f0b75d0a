//! Inline style declarations
//!
//! Backs the `style` attribute. Css text is parsed with lightningcss, so
//! values read back are in its serialized form; values set through
//! [`StyleDeclaration::set_property`] are kept verbatim.

use lightningcss::declaration::DeclarationBlock;
use lightningcss::properties::Property;
use lightningcss::stylesheet::{ParserOptions, PrinterOptions};

/// Ordered list of `property: value` declarations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
    declarations: Vec<(String, String)>,
}

impl StyleDeclaration {
    /// Create empty declaration block
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from css text such as `color: red; margin: 0`.
    ///
    /// Invalid declarations are dropped; the rest are kept in order.
    pub fn parse(css_text: &str) -> Self {
        let mut style = Self::new();
        if css_text.trim().is_empty() {
            return style;
        }

        let options = ParserOptions {
            error_recovery: true,
            ..ParserOptions::default()
        };
        let block = match DeclarationBlock::parse_string(css_text, options) {
            Ok(block) => block,
            Err(err) => {
                tracing::debug!("Discarding unparsable style {:?}: {:?}", css_text, err);
                return style;
            }
        };

        let normal = block.declarations.iter().map(|p| (p, false));
        let important = block.important_declarations.iter().map(|p| (p, true));
        for (property, is_important) in normal.chain(important) {
            if let Some((name, value)) = declaration_text(property, is_important) {
                style.set_property(&name, &value);
            }
        }
        style
    }

    /// Number of declarations
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Get a property value
    pub fn get_property(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set a property. An empty value removes it.
    pub fn set_property(&mut self, name: &str, value: &str) {
        if value.is_empty() {
            self.remove_property(name);
            return;
        }
        if let Some(slot) = self.declarations.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value.to_string();
            return;
        }
        self.declarations.push((name.to_string(), value.to_string()));
    }

    /// Remove a property, returning its previous value
    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        let pos = self.declarations.iter().position(|(n, _)| n == name)?;
        Some(self.declarations.remove(pos).1)
    }

    /// Iterate over declarations
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Serialize as css text
    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(n, v)| format!("{n}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn declaration_text(property: &Property<'_>, important: bool) -> Option<(String, String)> {
    let name = property.property_id().name().to_string();
    let value = match property.value_to_css_string(PrinterOptions::default()) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!("Skipping style property {}: {:?}", name, err);
            return None;
        }
    };
    if important {
        return Some((name, format!("{value} !important")));
    }
    Some((name, value))
}

impl std::fmt::Display for StyleDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.css_text())
    }
}
