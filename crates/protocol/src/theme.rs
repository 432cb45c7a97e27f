use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    Surface,
    Border,

    TextPrimary,
    TextSecondary,
    TextMuted,

    Accent,
    AccentAlt,

    // Navigation bar
    NavBackground,
    NavBrand,
    NavActive,
    NavInactive,
    NavIndicator,

    // Cards (stats, features, projects, articles)
    CardBackground,
    CardBorder,
    CardTitle,

    // Skill gauges
    GaugeTrack,
    GaugeFill,

    // Tech / category tags
    TagBackground,
    TagText,

    // Contact form
    FieldBackground,
    FieldBorder,
    FieldFocused,
    FieldError,
    StatusSending,
    StatusSuccess,

    // Decoration
    ParticleDim,
    ParticleBright,
    SplashSpinner,
}
