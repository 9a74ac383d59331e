use eframe::egui;

use crate::gui::constants::*;
use crate::types::InfoEntry;

/// Bulleted `Label: value` rows in the given order
pub fn rows<'a>(ui: &mut egui::Ui, entries: impl IntoIterator<Item = &'a InfoEntry>) {
    for entry in entries {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label(egui::RichText::new("\u{2022}").color(BODY_TEXT));
            ui.label(
                egui::RichText::new(row_label(entry))
                    .strong()
                    .color(TITLE_TEXT),
            );
            ui.label(egui::RichText::new(&entry.value).color(BODY_TEXT));
        });
    }
}

pub fn paragraph(ui: &mut egui::Ui, text: &str) {
    ui.add(egui::Label::new(egui::RichText::new(text).color(BODY_TEXT)).wrap());
}

fn row_label(entry: &InfoEntry) -> String {
    format!("{}:", entry.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_label_appends_colon() {
        let entry = InfoEntry::new("Blood Group", "B+");
        assert_eq!(row_label(&entry), "Blood Group:");
    }
}
