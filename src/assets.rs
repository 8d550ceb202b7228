//! Embedded assets for Aula-GUI
//!
//! Uses rust-embed to bundle icons at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let files = ComponentAssets::iter()
            .chain(Self::iter())
            .filter(|p| p.starts_with(path))
            .map(SharedString::from)
            .collect();

        Ok(files)
    }
}

/// Custom icon names for Aula-GUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomIconName {
    /// Single seat
    Seat,
    /// Capacity badge
    SeatGroup,
    /// Logged-in user
    UserRound,
}

impl CustomIconName {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            CustomIconName::Seat => "icons/seat.svg",
            CustomIconName::SeatGroup => "icons/seat-group.svg",
            CustomIconName::UserRound => "icons/user-round.svg",
        }
        .into()
    }
}

impl From<CustomIconName> for Icon {
    fn from(val: CustomIconName) -> Self {
        Icon::empty().path(val.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_icons_are_embedded() {
        for icon in [
            CustomIconName::Seat,
            CustomIconName::SeatGroup,
            CustomIconName::UserRound,
        ] {
            assert!(Assets::get(&icon.path()).is_some(), "{:?} missing", icon);
        }
    }
}
