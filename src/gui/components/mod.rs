//! Page building blocks. Each component draws from read-only state and
//! reports what the user asked for; the app applies it afterwards.

pub mod expandable_section;
pub mod image_carousel;
pub mod info_list;
pub mod profile_card;

use eframe::egui;

use super::constants::{CARD_BACKGROUND, CARD_MARGIN, CARD_ROUNDING};

/// White rounded panel the page sections sit in
pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    egui::Frame::new()
        .fill(CARD_BACKGROUND)
        .corner_radius(CARD_ROUNDING)
        .inner_margin(egui::Margin::same(CARD_MARGIN))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
}
