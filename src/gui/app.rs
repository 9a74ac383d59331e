//! Portfolio window implemented with egui/eframe

use anyhow::{Result, anyhow};
use eframe::{CreationContext, NativeOptions, egui};
use tracing::info;

use super::components::{card, expandable_section, image_carousel, info_list, profile_card};
use super::constants::*;
use super::session::{FrameActions, Session};
use super::slides::SlideTextures;
use crate::config::{PortfolioConfig, ProfileRecord};
use crate::font;

struct PortfolioApp {
    profile: ProfileRecord,
    invocation: String,
    accent: egui::Color32,
    slides: SlideTextures,
    session: Session,
}

impl PortfolioApp {
    fn new(cc: &CreationContext<'_>, config: PortfolioConfig) -> Result<Self> {
        info!("Initializing portfolio window");

        font::install_script_font(&cc.egui_ctx, config.appearance.script_font.as_deref());
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let session = Session::new(&config.profile)?;
        let slides = SlideTextures::load(&cc.egui_ctx, &config.profile.slides);
        let [r, g, b] = config.appearance.accent_rgb();

        Ok(Self {
            invocation: config.appearance.invocation,
            accent: egui::Color32::from_rgb(r, g, b),
            slides,
            session,
            profile: config.profile,
        })
    }

    fn header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(&self.invocation)
                    .size(HEADER_TEXT_SIZE)
                    .strong()
                    .color(self.accent),
            );
        });
    }

    fn top_row(&self, ui: &mut egui::Ui, actions: &mut FrameActions, scroll_to_album: bool) {
        let width = ui.available_width();
        if width < TWO_COLUMN_MIN_WIDTH {
            self.profile_column(ui, actions);
            ui.add_space(SECTION_SPACING);
            self.about_and_album(ui, actions, scroll_to_album);
            return;
        }

        let gap = ui.spacing().item_spacing.x + SECTION_SPACING;
        let left = (width - gap) * PROFILE_COLUMN_SHARE;
        let right = width - gap - left;
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = gap;
            ui.allocate_ui_with_layout(
                egui::vec2(left, 0.0),
                egui::Layout::top_down(egui::Align::Min),
                |ui| self.profile_column(ui, actions),
            );
            ui.allocate_ui_with_layout(
                egui::vec2(right, 0.0),
                egui::Layout::top_down(egui::Align::Min),
                |ui| self.about_and_album(ui, actions, scroll_to_album),
            );
        });
    }

    fn profile_column(&self, ui: &mut egui::Ui, actions: &mut FrameActions) {
        if profile_card::ui(ui, &self.profile.name, self.accent)
            == profile_card::ProfileCardAction::ViewAlbum
        {
            actions.view_album = true;
        }
    }

    fn about_and_album(&self, ui: &mut egui::Ui, actions: &mut FrameActions, scroll_to_album: bool) {
        card(ui, |ui| {
            self.section_heading(ui, "About Me");
            info_list::paragraph(ui, &self.profile.about);
        });

        ui.add_space(SECTION_SPACING);

        let album = card(ui, |ui| {
            self.section_heading(ui, "Album");
            if let Some(command) = image_carousel::ui(
                ui,
                &self.session.carousel,
                &self.profile.slides,
                &self.slides,
                self.accent,
            ) {
                actions.carousel.push(command);
            }
        });

        if scroll_to_album {
            ui.scroll_to_rect(album.response.rect, Some(egui::Align::TOP));
        }
    }

    fn details(&self, ui: &mut egui::Ui, actions: &mut FrameActions) {
        let basic = &self.profile.basic_info;
        actions.toggle_basic_info =
            expandable_section::ui(ui, &self.session.basic_info, self.accent, |ui| {
                if basic.is_empty() {
                    ui.label(egui::RichText::new("(No details provided)").italics().weak());
                } else {
                    info_list::rows(ui, basic.iter());
                }
            });

        ui.add_space(SECTION_SPACING);

        let profile = &self.profile;
        actions.toggle_family_details =
            expandable_section::ui(ui, &self.session.family_details, self.accent, |ui| {
                info_list::rows(ui, profile.family_rows());
                if let Some(description) = profile.family_description() {
                    ui.add_space(ITEM_SPACING);
                    info_list::paragraph(ui, description);
                }
            });
    }

    fn section_heading(&self, ui: &mut egui::Ui, title: &str) {
        ui.label(
            egui::RichText::new(title)
                .size(SECTION_TITLE_SIZE)
                .strong()
                .color(self.accent),
        );
        ui.add_space(ITEM_SPACING);
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let scroll_to_album = self.session.take_album_request();
        let mut actions = FrameActions {
            carousel: image_carousel::keyboard_commands(ctx, &self.session.carousel),
            ..FrameActions::default()
        };

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(PAGE_BACKGROUND))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add_space(PADDING);
                        self.header(ui);
                        ui.add_space(SECTION_SPACING);
                        self.top_row(ui, &mut actions, scroll_to_album);
                        ui.add_space(SECTION_SPACING);
                        self.details(ui, &mut actions);
                        ui.add_space(PADDING);
                    });
            });

        if self.session.apply(actions) {
            ctx.request_repaint();
        }
    }
}

pub fn run_gui(config: PortfolioConfig) -> Result<()> {
    let title = config.window.title.clone();
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([f32::from(config.window.width), f32::from(config.window.height)])
            .with_min_inner_size([
                f32::from(crate::constants::validation::MIN_WINDOW_WIDTH),
                f32::from(crate::constants::validation::MIN_WINDOW_HEIGHT),
            ])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(PortfolioApp::new(cc, config)?))),
    )
    .map_err(|err| anyhow!("Failed to launch portfolio window: {err}"))
}
