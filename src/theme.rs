use serde::{Deserialize, Serialize};

#[derive(
    Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize, variant_count::VariantCount,
)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Demonic,
    #[default]
    Ocean,
    BlasphemyPopup,
    JjPopup,
}

impl Theme {
    pub const ALL: [Self; Self::VARIANT_COUNT] = [
        Self::Demonic,
        Self::Ocean,
        Self::BlasphemyPopup,
        Self::JjPopup,
    ];

    pub fn to_string(&self) -> &str {
        match self {
            Theme::Demonic => "Demonic",
            Theme::Ocean => "Ocean",
            Theme::BlasphemyPopup => "Blasphemy Popup",
            Theme::JjPopup => "JJ Popup",
        }
    }

    pub fn background_color(&self) -> egui::Color32 {
        match self {
            Theme::Ocean => egui::Color32::from_rgb(0, 50, 100),
            Theme::BlasphemyPopup | Theme::JjPopup => egui::Color32::from_rgb(20, 0, 0),
            Theme::Demonic => egui::Color32::from_rgb(10, 0, 0),
        }
    }

    /// text flashed by the popup themes
    pub fn popup_text(&self) -> Option<&'static str> {
        match self {
            Theme::BlasphemyPopup => Some("Blasphemy"),
            Theme::JjPopup => Some("JJ"),
            _ => None,
        }
    }

    pub fn is_popup(&self) -> bool {
        self.popup_text().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_themes_listed_once() {
        assert_eq!(Theme::ALL.len(), 4);
        for (index, theme) in Theme::ALL.iter().enumerate() {
            assert_eq!(Theme::ALL.iter().position(|t| t == theme), Some(index));
        }
    }

    #[test]
    fn starts_on_ocean() {
        assert_eq!(Theme::default(), Theme::Ocean);
        assert_eq!(Theme::ALL[0], Theme::Demonic);
    }

    #[test]
    fn popup_themes() {
        assert!(Theme::BlasphemyPopup.is_popup());
        assert!(Theme::JjPopup.is_popup());
        assert!(!Theme::Ocean.is_popup());
        assert!(!Theme::Demonic.is_popup());
        assert_eq!(Theme::JjPopup.popup_text(), Some("JJ"));
    }

    #[test]
    fn names_and_colors() {
        assert_eq!(Theme::BlasphemyPopup.to_string(), "Blasphemy Popup");
        assert_eq!(
            Theme::Ocean.background_color(),
            egui::Color32::from_rgb(0, 50, 100)
        );
        assert_eq!(
            Theme::JjPopup.background_color(),
            Theme::BlasphemyPopup.background_color()
        );
    }

    #[test]
    fn serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: Theme,
        }
        let wrapper: Wrapper = toml::from_str("theme = \"jj_popup\"").unwrap();
        assert_eq!(wrapper.theme, Theme::JjPopup);
        assert!(toml::from_str::<Wrapper>("theme = \"pastel\"").is_err());
    }
}
