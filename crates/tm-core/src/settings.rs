use std::str::FromStr;

use crate::mock::API_KEY_MASK;

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SettingsTab {
    #[default]
    Api,
    Ui,
    System,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 3] = [SettingsTab::Api, SettingsTab::Ui, SettingsTab::System];

    pub fn label(self) -> &'static str {
        match self {
            SettingsTab::Api => "API Settings",
            SettingsTab::Ui => "UI Settings",
            SettingsTab::System => "System",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SettingsTab::Api => "api",
            SettingsTab::Ui => "ui",
            SettingsTab::System => "system",
        }
    }

    /// DOM id of the panel this tab controls.
    pub fn panel_id(self) -> &'static str {
        match self {
            SettingsTab::Api => "settings-panel-api",
            SettingsTab::Ui => "settings-panel-ui",
            SettingsTab::System => "settings-panel-system",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown settings tab '{0}'")]
pub struct SettingsTabParseError(pub String);

impl FromStr for SettingsTab {
    type Err = SettingsTabParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingsTab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| SettingsTabParseError(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// API tab
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ApiSettings {
    pub openai_api_key: String,
    pub anthropic_api_key: String,
    pub default_model: String,
    /// Daily spend ceiling in USD.
    pub cost_limit: f64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            openai_api_key: API_KEY_MASK.to_string(),
            anthropic_api_key: API_KEY_MASK.to_string(),
            default_model: "gpt-4o-mini".to_string(),
            cost_limit: 10.0,
        }
    }
}

/// Parse the cost-limit input. `None` for anything that is not a finite,
/// non-negative number; the caller keeps the previous value in that case.
pub fn parse_cost_limit(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        // Normalise "-0".
        .map(f64::abs)
}

// ---------------------------------------------------------------------------
// UI tab
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeChoice {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeChoice {
    pub const ALL: [ThemeChoice; 3] = [ThemeChoice::Light, ThemeChoice::Dark, ThemeChoice::System];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeChoice::Light => "light",
            ThemeChoice::Dark => "dark",
            ThemeChoice::System => "system",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeChoice::Light => "Light",
            ThemeChoice::Dark => "Dark",
            ThemeChoice::System => "System",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme choice '{0}'")]
pub struct ThemeChoiceParseError(pub String);

impl FromStr for ThemeChoice {
    type Err = ThemeChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeChoice::ALL
            .into_iter()
            .find(|choice| choice.as_str() == s)
            .ok_or_else(|| ThemeChoiceParseError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiSettings {
    pub theme: ThemeChoice,
    pub animations_enabled: bool,
    pub compact_mode: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::System,
            animations_enabled: true,
            compact_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tab_is_api() {
        assert_eq!(SettingsTab::default(), SettingsTab::Api);
    }

    #[test]
    fn exactly_one_panel_per_selected_tab() {
        for selected in SettingsTab::ALL {
            let shown: Vec<_> = SettingsTab::ALL
                .into_iter()
                .filter(|tab| *tab == selected)
                .map(SettingsTab::panel_id)
                .collect();
            assert_eq!(shown, vec![selected.panel_id()]);
        }
    }

    #[test]
    fn tab_round_trips_through_str() {
        for tab in SettingsTab::ALL {
            assert_eq!(tab.as_str().parse::<SettingsTab>(), Ok(tab));
        }
        assert!("API".parse::<SettingsTab>().is_err());
    }

    #[test]
    fn api_defaults_match_seed() {
        let api = ApiSettings::default();
        assert_eq!(api.default_model, "gpt-4o-mini");
        assert_eq!(api.cost_limit, 10.0);
        assert_eq!(api.openai_api_key, API_KEY_MASK);
        assert_eq!(api.anthropic_api_key, API_KEY_MASK);
    }

    #[test]
    fn ui_defaults_match_seed() {
        let ui = UiSettings::default();
        assert_eq!(ui.theme, ThemeChoice::System);
        assert!(ui.animations_enabled);
        assert!(!ui.compact_mode);
    }

    #[test]
    fn cost_limit_parsing() {
        assert_eq!(parse_cost_limit("12.5"), Some(12.5));
        assert_eq!(parse_cost_limit(" 0 "), Some(0.0));
        assert_eq!(parse_cost_limit(""), None);
        assert_eq!(parse_cost_limit("abc"), None);
        assert_eq!(parse_cost_limit("-1"), None);
        assert_eq!(parse_cost_limit("-0").map(|v| v.to_string()), Some("0".to_string()));
        assert!(parse_cost_limit("-0").is_some_and(|v| v.is_sign_positive()));
        assert_eq!(parse_cost_limit("NaN"), None);
        assert_eq!(parse_cost_limit("inf"), None);
    }

    #[test]
    fn theme_choice_parse() {
        assert_eq!("system".parse::<ThemeChoice>(), Ok(ThemeChoice::System));
        assert_eq!(ThemeChoice::Dark.label(), "Dark");
        assert!("auto".parse::<ThemeChoice>().is_err());
    }
}
