//! Main GUI application module
//!
//! Hosts a [`TransferView`] in an eframe window and draws its rows with
//! an `egui_extras` table.

use crate::{
    client::TransferSource,
    config::Config,
    render::{TransferRow, CAPTION, COLUMNS},
    view::TransferView,
};
use anyhow::{anyhow, Result};
use eframe::{egui, egui::RichText, App, Frame, NativeOptions};
use egui_extras::{Column, TableBuilder};
use std::time::Duration;

use super::theme::{configure_style, AppTheme};

/// Repaint interval while a fetch is in flight
const FETCH_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct GuiApp<S: TransferSource> {
    view: TransferView<S>,
    endpoint: String,
    theme: AppTheme,
}

impl<S: TransferSource> GuiApp<S> {
    pub fn new(mut view: TransferView<S>, config: &Config, ctx: &egui::Context) -> Self {
        let theme = AppTheme::default();
        configure_style(ctx, &theme);

        view.on_mount();

        Self {
            view,
            endpoint: config.endpoint.to_string(),
            theme,
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if self.view.is_fetching() {
                ui.spinner();
                ui.label(RichText::new("Fetching transfers...").color(self.theme.text_secondary));
            } else if let Some(updated) = self.view.state().last_updated() {
                ui.label(
                    RichText::new(format!(
                        "{} transfers, updated {}",
                        self.view.transfers().len(),
                        updated.format("%H:%M:%S")
                    ))
                    .color(self.theme.text_secondary),
                );
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(&self.endpoint).small().color(self.theme.text_secondary));
            });
        });
    }

    fn render_table(&self, ui: &mut egui::Ui, rows: &[TransferRow]) {
        let row_height = self.theme.row_height;

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(60.0))
            .column(Column::remainder())
            .header(row_height, |mut header| {
                for label in COLUMNS {
                    header.col(|ui| {
                        ui.strong(label);
                    });
                }
            })
            .body(|body| {
                body.rows(row_height, rows.len(), |mut row| {
                    let transfer = &rows[row.index()];
                    row.col(|ui| {
                        ui.strong(&transfer.id);
                    });
                    row.col(|ui| {
                        ui.label(&transfer.asset);
                    });
                    row.col(|ui| {
                        ui.label(&transfer.amount);
                    });
                });
            });

        // egui tables have no footer section, mirror the header below the body
        ui.separator();
        ui.horizontal(|ui| {
            for label in COLUMNS {
                ui.strong(label);
                ui.add_space(self.theme.spacing_sm);
            }
        });
    }
}

impl<S: TransferSource> App for GuiApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.view.poll();
        if self.view.is_fetching() {
            ctx.request_repaint_after(FETCH_REPAINT_INTERVAL);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(CAPTION);
            ui.add_space(self.theme.spacing_xs);
            self.render_status(ui);
            ui.add_space(self.theme.spacing_sm);

            let rows = self.view.rows();
            self.theme.frame_panel().show(ui, |ui| {
                self.render_table(ui, &rows);
            });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.view.teardown();
    }
}

/// Open the transfer window for the endpoint in `config`.
pub fn launch(config: Config) -> Result<()> {
    let view = TransferView::with_config(config.clone())?;

    let app_creator = move |cc: &eframe::CreationContext<'_>| {
        Box::new(GuiApp::new(view, &config, &cc.egui_ctx)) as Box<dyn App>
    };

    let viewport = egui::ViewportBuilder::default().with_inner_size([720.0, 560.0]);
    let native_options = NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native("Transfers", native_options, Box::new(app_creator))
        .map_err(|e| anyhow!("Failed to start GUI: {}", e))
}
