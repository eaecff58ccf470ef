//! Story order domain types, submission validation, and status tracking.
//!
//! A client submits a loose [`CreateStoryOrder`] payload. [`CreateStoryOrder::validate`]
//! checks every field against its declared constraint, applies defaults for
//! omitted optional fields, and produces the fully-typed [`StoryOrder`] that
//! gets persisted. All offending fields are collected into a single
//! `Validation` error so a client can fix a bad submission in one round trip.
//!
//! Closed value sets are enums, so an accepted order cannot hold an
//! out-of-set value. `character_key` is deliberately NOT checked against the
//! character catalog.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Collection holding persisted story orders.
pub const ORDERS_COLLECTION: &str = "storyorder";

/// Collection holding per-order fulfillment status records.
pub const STATUSES_COLLECTION: &str = "orderstatus";

/// Oldest child age (inclusive) a story can be personalized for.
pub const MAX_CHILD_AGE: i64 = 14;

/// All valid story lengths, in words.
pub const VALID_WORD_COUNTS: &[u32] = &[500, 800, 1200, 2000];

// ---------------------------------------------------------------------------
// Closed value sets
// ---------------------------------------------------------------------------

/// Pricing tier labels. Serialized capitalized, exactly as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TierName {
    Spark,
    Glow,
    Shine,
    Supernova,
}

/// All valid tier labels.
pub const VALID_TIERS: &[&str] = &["Spark", "Glow", "Shine", "Supernova"];

impl TierName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spark => "Spark",
            Self::Glow => "Glow",
            Self::Shine => "Shine",
            Self::Supernova => "Supernova",
        }
    }

    /// Parse a tier label from a submission.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "Spark" => Ok(Self::Spark),
            "Glow" => Ok(Self::Glow),
            "Shine" => Ok(Self::Shine),
            "Supernova" => Ok(Self::Supernova),
            _ => Err(format!(
                "invalid tier '{s}', must be one of: {}",
                VALID_TIERS.join(", ")
            )),
        }
    }
}

/// Illustration rendering styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IllustrationStyle {
    #[default]
    StorybookClassic,
    Watercolor,
    Comic,
    PaperCut,
    DigitalPaint,
}

/// All valid illustration style strings.
pub const VALID_ILLUSTRATION_STYLES: &[&str] = &[
    "storybook-classic",
    "watercolor",
    "comic",
    "paper-cut",
    "digital-paint",
];

impl IllustrationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StorybookClassic => "storybook-classic",
            Self::Watercolor => "watercolor",
            Self::Comic => "comic",
            Self::PaperCut => "paper-cut",
            Self::DigitalPaint => "digital-paint",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "storybook-classic" => Ok(Self::StorybookClassic),
            "watercolor" => Ok(Self::Watercolor),
            "comic" => Ok(Self::Comic),
            "paper-cut" => Ok(Self::PaperCut),
            "digital-paint" => Ok(Self::DigitalPaint),
            _ => Err(format!(
                "invalid illustration_style '{s}', must be one of: {}",
                VALID_ILLUSTRATION_STYLES.join(", ")
            )),
        }
    }
}

/// Color palettes for illustrations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorPalette {
    #[default]
    Pastel,
    Vibrant,
    Earthy,
    Primary,
}

/// All valid color palette strings.
pub const VALID_COLOR_PALETTES: &[&str] = &["pastel", "vibrant", "earthy", "primary"];

impl ColorPalette {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pastel => "pastel",
            Self::Vibrant => "vibrant",
            Self::Earthy => "earthy",
            Self::Primary => "primary",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "pastel" => Ok(Self::Pastel),
            "vibrant" => Ok(Self::Vibrant),
            "earthy" => Ok(Self::Earthy),
            "primary" => Ok(Self::Primary),
            _ => Err(format!(
                "invalid color_palette '{s}', must be one of: {}",
                VALID_COLOR_PALETTES.join(", ")
            )),
        }
    }
}

/// Locales a story can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
    De,
    It,
}

/// All valid language codes.
pub const VALID_LANGUAGES: &[&str] = &["en", "es", "fr", "de", "it"];

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::It => "it",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            "fr" => Ok(Self::Fr),
            "de" => Ok(Self::De),
            "it" => Ok(Self::It),
            _ => Err(format!(
                "invalid language '{s}', must be one of: {}",
                VALID_LANGUAGES.join(", ")
            )),
        }
    }
}

/// Accessibility accommodations applied to the produced story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accessibility {
    DyslexiaFriendly,
    HighContrast,
    LargeText,
}

/// All valid accessibility option strings.
pub const VALID_ACCESSIBILITY: &[&str] = &["dyslexia-friendly", "high-contrast", "large-text"];

impl Accessibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DyslexiaFriendly => "dyslexia-friendly",
            Self::HighContrast => "high-contrast",
            Self::LargeText => "large-text",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "dyslexia-friendly" => Ok(Self::DyslexiaFriendly),
            "high-contrast" => Ok(Self::HighContrast),
            "large-text" => Ok(Self::LargeText),
            _ => Err(format!(
                "invalid accessibility option '{s}', must be one of: {}",
                VALID_ACCESSIBILITY.join(", ")
            )),
        }
    }
}

/// Formats the finished story can be delivered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryFormat {
    #[default]
    Pdf,
    Epub,
    Web,
}

/// All valid delivery format strings.
pub const VALID_DELIVERY_FORMATS: &[&str] = &["pdf", "epub", "web"];

impl DeliveryFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Epub => "epub",
            Self::Web => "web",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "pdf" => Ok(Self::Pdf),
            "epub" => Ok(Self::Epub),
            "web" => Ok(Self::Web),
            _ => Err(format!(
                "invalid delivery_format '{s}', must be one of: {}",
                VALID_DELIVERY_FORMATS.join(", ")
            )),
        }
    }
}

/// Fulfillment stages of an order, in the order they are reached.
///
/// This service only ever writes the initial `received` stage; the external
/// fulfillment process advances it from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStage {
    Received,
    Processing,
    Illustrating,
    Ready,
}

impl OrderStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Processing => "processing",
            Self::Illustrating => "illustrating",
            Self::Ready => "ready",
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A fully-validated story order, exactly as persisted.
///
/// Immutable once stored; there is no update path. Identified after
/// persistence by the storage layer's generated id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryOrder {
    pub parent_name: String,
    pub parent_email: String,
    pub child_name: String,
    pub child_age: u8,
    pub tier: TierName,
    /// References a catalog character's key; not validated against the catalog.
    pub character_key: String,
    pub adventure_theme: String,
    pub lesson_theme: String,
    pub word_count: u32,
    pub illustration_style: IllustrationStyle,
    pub color_palette: ColorPalette,
    pub dedication: Option<String>,
    pub languages: Vec<Language>,
    pub include_child_appearance: bool,
    pub child_traits: Vec<String>,
    pub accessibility: Vec<Accessibility>,
    pub delivery_format: DeliveryFormat,
    pub notes: Option<String>,
}

/// Fulfillment-progress record tracked per order.
///
/// Created alongside the order with stage `received`; mutated only by the
/// external fulfillment process, never deleted by this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatus {
    /// The order's generated record id, as a string.
    pub order_id: String,
    pub status: OrderStage,
    pub download_url: Option<String>,
    #[serde(default)]
    pub preview_images: Vec<String>,
}

impl OrderStatus {
    /// The initial status record written at order intake.
    pub fn received(order_id: String) -> Self {
        Self {
            order_id,
            status: OrderStage::Received,
            download_url: None,
            preview_images: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Submission + validation
// ---------------------------------------------------------------------------

/// Raw order submission as received from the client.
///
/// Enumerated fields arrive as plain strings/numbers so that every
/// out-of-set value can be reported with a field-level message instead of a
/// bare deserialization failure. Optional fields left out take the
/// documented defaults during validation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStoryOrder {
    pub parent_name: String,
    pub parent_email: String,
    pub child_name: String,
    pub child_age: i64,
    pub tier: String,
    pub character_key: String,
    pub adventure_theme: String,
    pub lesson_theme: String,
    pub word_count: u32,
    pub illustration_style: Option<String>,
    pub color_palette: Option<String>,
    pub dedication: Option<String>,
    pub languages: Option<Vec<String>>,
    pub include_child_appearance: Option<bool>,
    #[serde(default)]
    pub child_traits: Vec<String>,
    #[serde(default)]
    pub accessibility: Vec<String>,
    pub delivery_format: Option<String>,
    pub notes: Option<String>,
}

impl CreateStoryOrder {
    /// Validate the submission and produce the typed order.
    ///
    /// Every constraint violation is collected; the returned
    /// [`CoreError::Validation`] names all offending fields at once.
    pub fn validate(self) -> Result<StoryOrder, CoreError> {
        let mut problems: Vec<String> = Vec::new();

        if self.child_age < 0 || self.child_age > MAX_CHILD_AGE {
            problems.push(format!(
                "child_age must be between 0 and {MAX_CHILD_AGE}, got {}",
                self.child_age
            ));
        }

        if !VALID_WORD_COUNTS.contains(&self.word_count) {
            problems.push(format!(
                "word_count must be one of {}, got {}",
                VALID_WORD_COUNTS
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
                self.word_count
            ));
        }

        let tier = collect(TierName::parse(&self.tier), &mut problems);

        let illustration_style = match self.illustration_style.as_deref() {
            None => Some(IllustrationStyle::default()),
            Some(s) => collect(IllustrationStyle::parse(s), &mut problems),
        };

        let color_palette = match self.color_palette.as_deref() {
            None => Some(ColorPalette::default()),
            Some(s) => collect(ColorPalette::parse(s), &mut problems),
        };

        let delivery_format = match self.delivery_format.as_deref() {
            None => Some(DeliveryFormat::default()),
            Some(s) => collect(DeliveryFormat::parse(s), &mut problems),
        };

        let languages = match &self.languages {
            None => vec![Language::En],
            Some(codes) => codes
                .iter()
                .filter_map(|code| collect(Language::parse(code), &mut problems))
                .collect(),
        };

        let accessibility: Vec<Accessibility> = self
            .accessibility
            .iter()
            .filter_map(|s| collect(Accessibility::parse(s), &mut problems))
            .collect();

        match (tier, illustration_style, color_palette, delivery_format) {
            (Some(tier), Some(illustration_style), Some(color_palette), Some(delivery_format))
                if problems.is_empty() =>
            {
                Ok(StoryOrder {
                    parent_name: self.parent_name,
                    parent_email: self.parent_email,
                    child_name: self.child_name,
                    // Range-checked above; [0,14] always fits.
                    child_age: self.child_age as u8,
                    tier,
                    character_key: self.character_key,
                    adventure_theme: self.adventure_theme,
                    lesson_theme: self.lesson_theme,
                    word_count: self.word_count,
                    illustration_style,
                    color_palette,
                    dedication: self.dedication,
                    languages,
                    include_child_appearance: self.include_child_appearance.unwrap_or(true),
                    child_traits: self.child_traits,
                    accessibility,
                    delivery_format,
                    notes: self.notes,
                })
            }
            _ => Err(CoreError::Validation(problems.join("; "))),
        }
    }
}

/// Push a parse failure onto the problem list, keeping the success if any.
fn collect<T>(result: Result<T, String>, problems: &mut Vec<String>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            problems.push(message);
            None
        }
    }
}
