//! Site configuration.
//!
//! The page behaviour shipped in two flavours ("classic" and "modern") that
//! differ only in thresholds, timings, labels and which effects are switched
//! on. [`SiteConfig::preset`] builds the defaults for a [`Variant`]; a page can
//! then embed a partial JSON document that is deep-merged over the preset.
//!
//! ```
//! use purcell::config::{SiteConfig, Variant};
//!
//! let cfg = SiteConfig::from_json(r#"{ "variant": "classic", "nav": { "header_offset": 72 } }"#).unwrap();
//! assert_eq!(cfg.variant, Variant::Classic);
//! assert_eq!(cfg.nav.header_offset, 72.0);
//! assert_eq!(cfg.nav.scrolled_threshold, 100.0);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Classic,
    #[default]
    Modern,
}

impl Variant {
    pub fn label(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Modern => "modern",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" | "script" => Some(Variant::Classic),
            "modern" | "script-new" => Some(Variant::Modern),
            _ => None,
        }
    }
}

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the schema.
    Json(serde_json::Error),
    /// `variant` names no known preset.
    InvalidVariant(String),
    /// A field parsed but holds an unusable value.
    InvalidValue { field: &'static str, reason: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Json(e) => write!(f, "config is not valid: {e}"),
            ConfigError::InvalidVariant(v) => write!(f, "unknown variant {v:?}"),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for {field}: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Sticky header compensation added to the scroll offset before matching sections.
    pub header_offset: f64,
    /// Class toggled on the nav link of the current section.
    pub active_class: String,
    /// Trailing debounce for the active-section tracker. `None` runs it on every scroll event.
    pub active_debounce_ms: Option<u32>,
    /// The navbar gets the `scrolled` class once the page scrolls strictly past this.
    pub scrolled_threshold: f64,
    /// Hide the navbar while scrolling down below this offset.
    pub hide_on_scroll_after: Option<f64>,
    /// `Some(offset)` scrolls to `section_top - offset`; `None` uses `scrollIntoView`.
    pub smooth_scroll_offset: Option<f64>,
    /// Spawn a gold burst from the mobile menu button when it is toggled.
    pub menu_burst: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterPacing {
    /// Fixed increments on a fixed interval, regardless of frame timing.
    FixedStep,
    /// Linear in elapsed time, sampled on animation frames.
    FrameTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    pub duration_ms: u32,
    pub pacing: CounterPacing,
    pub step_ms: u32,
    pub threshold: f64,
    pub root_margin: String,
    pub thousands_separator: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealRule {
    pub selector: String,
    pub class: String,
    pub threshold: f64,
    pub root_margin: String,
    /// Start matched elements transparent and shifted down. Service cards are exempt.
    #[serde(default)]
    pub prehide: bool,
    /// Extra class added to service cards when they reveal.
    #[serde(default)]
    pub card_class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaggerConfig {
    pub threshold: f64,
    pub step_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    pub rules: Vec<RevealRule>,
    /// Staggered card entrance and process-step timeline.
    pub stagger: Option<StaggerConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypingConfig {
    pub selector: String,
    pub start_delay_ms: u32,
    pub char_delay_ms: u32,
    pub caret_hold_ms: u32,
    pub caret: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorConfig {
    pub easing: f64,
    pub size_px: f64,
    pub hover_scale: f64,
    pub hover_selector: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbientConfig {
    pub spawn_interval_ms: u32,
    pub lifetime_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallaxConfig {
    pub selector: String,
    pub factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KonamiConfig {
    pub message: String,
    pub filter: String,
    pub duration_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectsConfig {
    pub seed: u64,
    pub typing: Option<TypingConfig>,
    pub cursor: Option<CursorConfig>,
    pub ambient_particles: Option<AmbientConfig>,
    pub parallax: Option<ParallaxConfig>,
    /// Sparkle particles rising from a hovered service card.
    pub card_sparkle: bool,
    /// Tilt, glow and particle floats on service card hover.
    pub card_hover: bool,
    pub konami: Option<KonamiConfig>,
    pub scroll_progress: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    pub form_selector: String,
    /// Element inside the submit button that holds its label. `None` uses the button itself.
    pub label_selector: Option<String>,
    pub sending_label: String,
    pub success_message: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Keep at most one notification on screen.
    pub single: bool,
    pub enter_delay_ms: u32,
    pub visible_ms: u32,
    pub exit_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingConfig {
    pub text: String,
    pub hide_after_ms: u32,
    pub fade_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub preload_styles: Vec<String>,
    pub service_worker: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub variant: Variant,
    pub log_level: String,
    pub nav: NavConfig,
    pub counters: CounterConfig,
    pub reveal: RevealConfig,
    pub effects: EffectsConfig,
    pub contact: ContactConfig,
    pub notifications: NotificationConfig,
    pub loading: Option<LoadingConfig>,
    pub resources: ResourceConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::preset(Variant::default())
    }
}

impl SiteConfig {
    pub fn preset(variant: Variant) -> Self {
        match variant {
            Variant::Classic => classic_preset(),
            Variant::Modern => modern_preset(),
        }
    }

    /// Parses a (possibly partial) JSON document and merges it over the preset
    /// named by its `variant` field.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let overrides: Value = serde_json::from_str(raw)?;
        let Value::Object(map) = &overrides else {
            return Err(ConfigError::InvalidValue {
                field: "config",
                reason: "expected a JSON object".to_string(),
            });
        };

        let variant = match map.get("variant") {
            None | Some(Value::Null) => Variant::default(),
            Some(Value::String(s)) => {
                Variant::parse(s).ok_or_else(|| ConfigError::InvalidVariant(s.clone()))?
            }
            Some(other) => return Err(ConfigError::InvalidVariant(other.to_string())),
        };

        let mut merged = serde_json::to_value(Self::preset(variant))?;
        let mut overrides = overrides;
        if let Value::Object(map) = &mut overrides {
            // Already resolved; the preset carries the canonical spelling.
            map.remove("variant");
        }
        merge_json(&mut merged, overrides);

        let cfg: Self = serde_json::from_value(merged)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::InvalidValue {
                field,
                reason: reason.into(),
            }
        }

        if self.max_level().is_none() {
            return Err(invalid("log_level", format!("unknown level {:?}", self.log_level)));
        }
        if !self.nav.header_offset.is_finite() {
            return Err(invalid("nav.header_offset", "must be finite"));
        }
        if !self.nav.scrolled_threshold.is_finite() {
            return Err(invalid("nav.scrolled_threshold", "must be finite"));
        }
        if self.nav.smooth_scroll_offset.is_some_and(|o| !o.is_finite()) {
            return Err(invalid("nav.smooth_scroll_offset", "must be finite"));
        }
        if !is_unit_interval(self.counters.threshold) {
            return Err(invalid("counters.threshold", "must lie in [0, 1]"));
        }
        if self.counters.step_ms == 0 {
            return Err(invalid("counters.step_ms", "must be positive"));
        }
        if self.reveal.rules.iter().any(|r| !is_unit_interval(r.threshold)) {
            return Err(invalid("reveal.rules.threshold", "must lie in [0, 1]"));
        }
        if let Some(stagger) = &self.reveal.stagger {
            if !is_unit_interval(stagger.threshold) {
                return Err(invalid("reveal.stagger.threshold", "must lie in [0, 1]"));
            }
        }
        if let Some(cursor) = &self.effects.cursor {
            if !(cursor.easing > 0.0 && cursor.easing <= 1.0) {
                return Err(invalid("effects.cursor.easing", "must lie in (0, 1]"));
            }
        }
        if let Some(ambient) = &self.effects.ambient_particles {
            if ambient.spawn_interval_ms == 0 {
                return Err(invalid("effects.ambient_particles.spawn_interval_ms", "must be positive"));
            }
        }
        if let Some(typing) = &self.effects.typing {
            if typing.char_delay_ms == 0 {
                return Err(invalid("effects.typing.char_delay_ms", "must be positive"));
            }
        }
        Ok(())
    }

    /// Maximum `tracing` level named by `log_level`.
    pub fn max_level(&self) -> Option<tracing::Level> {
        self.log_level.trim().parse().ok()
    }
}

fn is_unit_interval(v: f64) -> bool {
    (0.0..=1.0).contains(&v)
}

/// Recursively overlays `patch` onto `base`. Objects merge key by key; any
/// other value (arrays included) replaces the base value wholesale.
fn merge_json(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                let nested = value.is_object() && base.get(&key).is_some_and(Value::is_object);
                match base.get_mut(&key) {
                    Some(slot) if nested => merge_json(slot, value),
                    _ => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

const DEFAULT_SUCCESS_MESSAGE: &str =
    "Mensagem enviada com sucesso! Entraremos em contato em breve.";

fn classic_preset() -> SiteConfig {
    SiteConfig {
        variant: Variant::Classic,
        log_level: "info".to_string(),
        nav: NavConfig {
            header_offset: 100.0,
            active_class: "active".to_string(),
            active_debounce_ms: Some(10),
            scrolled_threshold: 100.0,
            hide_on_scroll_after: Some(200.0),
            smooth_scroll_offset: Some(80.0),
            menu_burst: false,
        },
        counters: CounterConfig {
            duration_ms: 2000,
            pacing: CounterPacing::FixedStep,
            step_ms: 16,
            threshold: 0.5,
            root_margin: "0px".to_string(),
            thousands_separator: ",".to_string(),
        },
        reveal: RevealConfig {
            rules: vec![RevealRule {
                selector: ".service-card, .stat-card, .process-step, .contact-info-card"
                    .to_string(),
                class: "animate-fade-in-up".to_string(),
                threshold: 0.1,
                root_margin: "0px 0px -50px 0px".to_string(),
                prehide: false,
                card_class: None,
            }],
            stagger: Some(StaggerConfig {
                threshold: 0.2,
                step_ms: 100,
            }),
        },
        effects: EffectsConfig {
            seed: 0x9A11_C3E1,
            typing: Some(TypingConfig {
                selector: "#home p".to_string(),
                start_delay_ms: 1000,
                char_delay_ms: 50,
                caret_hold_ms: 1000,
                caret: "2px solid #fbbf24".to_string(),
            }),
            cursor: Some(CursorConfig {
                easing: 0.1,
                size_px: 16.0,
                hover_scale: 2.0,
                hover_selector: "a, button, .service-card, .stat-card".to_string(),
            }),
            ambient_particles: Some(AmbientConfig {
                spawn_interval_ms: 2000,
                lifetime_ms: 5000,
            }),
            parallax: Some(ParallaxConfig {
                selector: "#home".to_string(),
                factor: 0.5,
            }),
            card_sparkle: true,
            card_hover: false,
            konami: Some(KonamiConfig {
                message: "🎉 Código Konami ativado! A Purcell agradece!".to_string(),
                filter: "hue-rotate(180deg)".to_string(),
                duration_ms: 5000,
            }),
            scroll_progress: false,
        },
        contact: ContactConfig {
            form_selector: ".contact-form".to_string(),
            label_selector: None,
            sending_label: "Enviando...".to_string(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            delay_ms: 2000,
        },
        notifications: NotificationConfig {
            single: false,
            enter_delay_ms: 100,
            visible_ms: 4000,
            exit_ms: 300,
        },
        loading: None,
        resources: ResourceConfig {
            preload_styles: vec![
                "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&family=Playfair+Display:wght@400;500;600;700&display=swap".to_string(),
                "https://unpkg.com/aos@2.3.1/dist/aos.css".to_string(),
            ],
            service_worker: Some("/sw.js".to_string()),
        },
    }
}

fn modern_preset() -> SiteConfig {
    SiteConfig {
        variant: Variant::Modern,
        log_level: "info".to_string(),
        nav: NavConfig {
            header_offset: 100.0,
            active_class: "active".to_string(),
            active_debounce_ms: None,
            scrolled_threshold: 80.0,
            hide_on_scroll_after: None,
            smooth_scroll_offset: None,
            menu_burst: true,
        },
        counters: CounterConfig {
            duration_ms: 2000,
            pacing: CounterPacing::FrameTime,
            step_ms: 16,
            threshold: 0.5,
            root_margin: "0px 0px -100px 0px".to_string(),
            thousands_separator: ",".to_string(),
        },
        reveal: RevealConfig {
            rules: vec![RevealRule {
                selector: ".service-card, .stat-item, .process-content-left, .process-content-right, .section-title, .section-subtitle".to_string(),
                class: "animate-fade-in".to_string(),
                threshold: 0.1,
                root_margin: "0px 0px -50px 0px".to_string(),
                prehide: true,
                card_class: Some("animate".to_string()),
            }],
            stagger: None,
        },
        effects: EffectsConfig {
            seed: 0x9A11_C3E1,
            typing: None,
            cursor: None,
            ambient_particles: None,
            parallax: None,
            card_sparkle: false,
            card_hover: true,
            konami: None,
            scroll_progress: true,
        },
        contact: ContactConfig {
            form_selector: ".contact-form".to_string(),
            label_selector: Some("span".to_string()),
            sending_label: "ENVIANDO...".to_string(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            delay_ms: 2000,
        },
        notifications: NotificationConfig {
            single: true,
            enter_delay_ms: 100,
            visible_ms: 4000,
            exit_ms: 500,
        },
        loading: Some(LoadingConfig {
            text: "A CARREGAR REFINARIA PURCELL".to_string(),
            hide_after_ms: 1500,
            fade_ms: 500,
        }),
        resources: ResourceConfig {
            preload_styles: Vec::new(),
            service_worker: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        for v in [Variant::Classic, Variant::Modern] {
            let cfg = SiteConfig::preset(v);
            assert!(cfg.validate().is_ok(), "{v:?}");
            assert_eq!(cfg.variant, v);
        }
    }

    #[test]
    fn empty_object_yields_modern_preset() {
        let cfg = SiteConfig::from_json("{}").unwrap();
        assert_eq!(cfg, SiteConfig::preset(Variant::Modern));
    }

    #[test]
    fn overrides_merge_into_nested_groups() {
        let raw = r#"{
            "variant": "classic",
            "counters": { "thousands_separator": "." },
            "effects": { "typing": null, "konami": { "duration_ms": 1000 } }
        }"#;
        let cfg = SiteConfig::from_json(raw).unwrap();
        assert_eq!(cfg.counters.thousands_separator, ".");
        assert_eq!(cfg.counters.duration_ms, 2000);
        assert!(cfg.effects.typing.is_none());
        let konami = cfg.effects.konami.unwrap();
        assert_eq!(konami.duration_ms, 1000);
        assert_eq!(konami.filter, "hue-rotate(180deg)");
    }

    #[test]
    fn option_groups_can_be_enabled_from_null_preset() {
        let raw = r#"{
            "effects": { "cursor": { "easing": 0.2, "size_px": 10, "hover_scale": 1.5, "hover_selector": "a" } }
        }"#;
        let cfg = SiteConfig::from_json(raw).unwrap();
        assert_eq!(cfg.effects.cursor.unwrap().easing, 0.2);
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "variant": "retro" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVariant(ref v) if v == "retro"));
        assert!(err.to_string().contains("retro"));
    }

    #[test]
    fn non_object_and_bad_json_are_rejected() {
        assert!(matches!(
            SiteConfig::from_json("[1, 2]"),
            Err(ConfigError::InvalidValue { field: "config", .. })
        ));
        assert!(matches!(SiteConfig::from_json("{"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn validation_catches_out_of_range_values() {
        let err = SiteConfig::from_json(r#"{ "counters": { "threshold": 1.5 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "counters.threshold",
                ..
            }
        ));

        let err = SiteConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "log_level", .. }));
    }

    #[test]
    fn variant_aliases_parse() {
        assert_eq!(Variant::parse(" Script-New "), Some(Variant::Modern));
        assert_eq!(Variant::parse("script"), Some(Variant::Classic));
        assert_eq!(Variant::parse("other"), None);
    }
}
