//! GUI-specific constants for layout and colors

/// Layout spacing
pub const PADDING: f32 = 10.0;
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;
pub const CARD_MARGIN: i8 = 14;
pub const CARD_ROUNDING: u8 = 8;

/// Below this width the top row stacks into one column
pub const TWO_COLUMN_MIN_WIDTH: f32 = 720.0;
/// Share of the top row given to the profile card
pub const PROFILE_COLUMN_SHARE: f32 = 1.0 / 3.0;

/// Profile card
pub const AVATAR_DIAMETER: f32 = 128.0;

/// Album
pub const SLIDE_HEIGHT: f32 = 220.0;
pub const NAV_BUTTON_SIZE: f32 = 32.0;
pub const INDICATOR_DIAMETER: f32 = 8.0;

/// Text sizes
pub const HEADER_TEXT_SIZE: f32 = 24.0;
pub const NAME_TEXT_SIZE: f32 = 24.0;
pub const SECTION_TITLE_SIZE: f32 = 20.0;

/// Colors
pub const PAGE_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);
pub const CARD_BACKGROUND: egui::Color32 = egui::Color32::WHITE;
pub const PLACEHOLDER_FILL: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);
pub const PLACEHOLDER_TEXT: egui::Color32 = egui::Color32::from_rgb(75, 85, 99);
pub const BODY_TEXT: egui::Color32 = egui::Color32::from_rgb(55, 65, 81);
pub const TITLE_TEXT: egui::Color32 = egui::Color32::from_rgb(17, 24, 39);
pub const INDICATOR_IDLE: egui::Color32 = egui::Color32::from_rgb(156, 163, 175);
