//! The catalog of supported Gemini extraction models.
//!
//! The set is closed — three known variants — but call sites never match on
//! it directly: they go through [`GeminiModel::CATALOG`], `FromStr`, and the
//! accessor methods, so adding a fourth variant touches only this file.

use crate::error::ExtractError;
use serde_json::{json, Value};

/// A Gemini model selectable for extraction.
///
/// Declaration order is the catalog order shown to end users: cheapest
/// first, most capable last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GeminiModel {
    /// gemini-2.5-flash-lite — lowest cost, lowest fidelity.
    FlashLite,
    /// gemini-2.5-flash — the balanced default.
    #[default]
    Flash,
    /// gemini-2.5-pro — highest fidelity, slowest and most expensive.
    Pro,
}

/// Capability tier a model trades cost against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityTier {
    /// Cheapest; fine for short, cleanly formatted documents.
    Economy,
    /// The default trade-off between cost and fidelity.
    Balanced,
    /// Best on long documents with dense clause nesting.
    Premium,
}

impl GeminiModel {
    /// Every supported model, in stable catalog order.
    pub const CATALOG: &'static [GeminiModel] =
        &[GeminiModel::FlashLite, GeminiModel::Flash, GeminiModel::Pro];

    /// The Gemini API model identifier string.
    #[must_use]
    pub const fn model_id(&self) -> &'static str {
        match self {
            Self::FlashLite => "gemini-2.5-flash-lite",
            Self::Flash => "gemini-2.5-flash",
            Self::Pro => "gemini-2.5-pro",
        }
    }

    /// Human-readable name for selection UIs.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::FlashLite => "Gemini 2.5 Flash Lite",
            Self::Flash => "Gemini 2.5 Flash",
            Self::Pro => "Gemini 2.5 Pro",
        }
    }

    /// One-line description shown next to the model in selection UIs.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::FlashLite => "Fastest and cheapest; best for short, simple documents",
            Self::Flash => "Balanced speed and accuracy; recommended for most documents",
            Self::Pro => "Highest accuracy; best for long or densely structured documents",
        }
    }

    /// Capability tier of this model.
    #[must_use]
    pub const fn tier(&self) -> CapabilityTier {
        match self {
            Self::FlashLite => CapabilityTier::Economy,
            Self::Flash => CapabilityTier::Balanced,
            Self::Pro => CapabilityTier::Premium,
        }
    }

    /// Resolve an identifier to a model.
    ///
    /// Thin named wrapper over `FromStr`, kept for call sites that read
    /// better as `GeminiModel::resolve(user_input)?`.
    pub fn resolve(identifier: &str) -> Result<Self, ExtractError> {
        identifier.parse()
    }
}

impl std::fmt::Display for GeminiModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.model_id())
    }
}

impl std::str::FromStr for GeminiModel {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini-2.5-flash-lite" | "flash-lite" | "lite" => Ok(Self::FlashLite),
            "gemini-2.5-flash" | "flash" => Ok(Self::Flash),
            "gemini-2.5-pro" | "pro" => Ok(Self::Pro),
            _ => Err(ExtractError::InvalidModel {
                model: s.to_string(),
            }),
        }
    }
}

/// Render the catalog as the JSON shape selection surfaces consume:
/// `{"models": [{"value", "name", "description"}, ...]}`.
#[must_use]
pub fn catalog_json() -> Value {
    json!({
        "models": GeminiModel::CATALOG
            .iter()
            .map(|m| {
                json!({
                    "value": m.model_id(),
                    "name": m.display_name(),
                    "description": m.description(),
                })
            })
            .collect::<Vec<_>>()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_identifiers() {
        assert_eq!(
            GeminiModel::resolve("gemini-2.5-flash").unwrap(),
            GeminiModel::Flash
        );
        assert_eq!(
            GeminiModel::resolve("gemini-2.5-pro").unwrap(),
            GeminiModel::Pro
        );
        assert_eq!(
            GeminiModel::resolve("gemini-2.5-flash-lite").unwrap(),
            GeminiModel::FlashLite
        );
    }

    #[test]
    fn resolve_aliases_case_insensitive() {
        assert_eq!(GeminiModel::resolve("FLASH").unwrap(), GeminiModel::Flash);
        assert_eq!(GeminiModel::resolve("pro").unwrap(), GeminiModel::Pro);
        assert_eq!(
            GeminiModel::resolve("lite").unwrap(),
            GeminiModel::FlashLite
        );
    }

    #[test]
    fn resolve_unknown_fails() {
        let err = GeminiModel::resolve("not-a-model").unwrap_err();
        assert!(matches!(
            err,
            crate::error::ExtractError::InvalidModel { .. }
        ));
    }

    #[test]
    fn display_roundtrip() {
        for model in GeminiModel::CATALOG {
            let parsed: GeminiModel = model.model_id().parse().unwrap();
            assert_eq!(parsed, *model, "round-trip failed for {model}");
        }
    }

    #[test]
    fn default_is_mid_tier() {
        assert_eq!(GeminiModel::default(), GeminiModel::Flash);
        assert_eq!(GeminiModel::default().tier(), CapabilityTier::Balanced);
    }

    #[test]
    fn catalog_order_is_declaration_order() {
        let ids: Vec<&str> = GeminiModel::CATALOG.iter().map(|m| m.model_id()).collect();
        assert_eq!(
            ids,
            vec!["gemini-2.5-flash-lite", "gemini-2.5-flash", "gemini-2.5-pro"]
        );
    }

    #[test]
    fn catalog_json_shape() {
        let v = catalog_json();
        let models = v["models"].as_array().unwrap();
        assert_eq!(models.len(), 3);
        assert_eq!(models[1]["value"], "gemini-2.5-flash");
        assert!(models[1]["name"].is_string());
        assert!(models[1]["description"].is_string());
    }
}
