//! App shell: filter row, sort selector, and the scrollable product list.

use std::collections::HashMap;
use std::time::Duration;

use catalog_core::query::SortKey;
use catalog_core::state::{reduce, CatalogAction, CatalogState};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{Product, ProductId};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiErrorCategory, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

const THUMBNAIL_SIZE: f32 = 64.0;

/// Decoded RGBA thumbnail produced by the backend worker.
pub struct ThumbnailImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

enum ThumbnailState {
    Loading,
    Ready {
        image: ThumbnailImage,
        texture: Option<egui::TextureHandle>,
    },
    Failed,
}

pub struct CatalogApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: CatalogState,
    /// Draft filter text; only committed to the reducer via the Filter
    /// button.
    filter_draft: String,
    status: String,
    thumbnails: HashMap<ProductId, ThumbnailState>,
}

impl CatalogApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            state: CatalogState::default(),
            filter_draft: String::new(),
            status: String::new(),
            thumbnails: HashMap::new(),
        };
        // The catalog loads exactly once, at mount. The only later trigger
        // is the user-driven Reload in the error banner.
        app.apply(CatalogAction::LoadStarted);
        dispatch_backend_command(&app.cmd_tx, BackendCommand::LoadCatalog, &mut app.status);
        app
    }

    fn apply(&mut self, action: CatalogAction) {
        self.state = reduce(&self.state, action);
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::LoadStarted => self.apply(CatalogAction::LoadStarted),
                UiEvent::CatalogLoaded(products) => {
                    self.thumbnails.clear();
                    self.apply(CatalogAction::LoadSucceeded(products));
                }
                UiEvent::ThumbnailLoaded { product_id, image } => {
                    self.thumbnails.insert(
                        product_id,
                        ThumbnailState::Ready {
                            image,
                            texture: None,
                        },
                    );
                }
                UiEvent::ThumbnailFailed { product_id, reason } => {
                    tracing::warn!(
                        product_id = product_id.as_str(),
                        "thumbnail fetch failed: {reason}"
                    );
                    self.thumbnails.insert(product_id, ThumbnailState::Failed);
                }
                UiEvent::Error(err) => {
                    if err.context() == UiErrorContext::LoadCatalog {
                        self.apply(CatalogAction::LoadFailed(err.message().to_string()));
                    }
                    self.status = format!("{}: {}", err_label(err.category()), err.message());
                }
            }
        }
    }

    fn show_filter_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("filter_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("Products");
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let input = egui::TextEdit::singleline(&mut self.filter_draft)
                    .hint_text("Filter by name or description...")
                    .desired_width(ui.available_width() - 72.0);
                ui.add(input);
                if ui.button("Filter").clicked() {
                    self.apply(CatalogAction::FilterCommitted(self.filter_draft.clone()));
                }
            });
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Sort");
                let mut selected = self.state.sort_key;
                egui::ComboBox::from_id_salt("sort_key")
                    .selected_text(selected.label())
                    .show_ui(ui, |ui| {
                        for key in SortKey::ALL {
                            ui.selectable_value(&mut selected, key, key.label());
                        }
                    });
                if selected != self.state.sort_key {
                    self.apply(CatalogAction::SortKeyChanged(selected));
                }
            });
            ui.add_space(6.0);
        });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        if self.status.is_empty() {
            return;
        }
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&self.status).small().weak());
                if ui.small_button("Clear").clicked() {
                    self.status.clear();
                }
            });
        });
    }

    fn show_product_list(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(message) = self.state.load_error.clone() {
                ui.horizontal_wrapped(|ui| {
                    ui.colored_label(
                        ui.visuals().error_fg_color,
                        format!("Couldn't load products: {message}"),
                    );
                    if ui.button("Reload").clicked() {
                        self.apply(CatalogAction::LoadStarted);
                        dispatch_backend_command(
                            &self.cmd_tx,
                            BackendCommand::LoadCatalog,
                            &mut self.status,
                        );
                    }
                    if ui.button("Dismiss").clicked() {
                        self.apply(CatalogAction::LoadErrorDismissed);
                    }
                });
                ui.separator();
            }

            if self.state.loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(48.0);
                    ui.add(egui::Spinner::new().size(32.0));
                    ui.add_space(8.0);
                    ui.label("Loading products...");
                });
                return;
            }

            if self.state.visible.is_empty() {
                if self.state.load_error.is_none() {
                    ui.add_space(24.0);
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new("No products to show.").weak());
                    });
                }
                return;
            }

            let visible = self.state.visible.clone();
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for product in &visible {
                        self.show_product_card(ui, product);
                        ui.add_space(4.0);
                    }
                });
        });
    }

    fn show_product_card(&mut self, ui: &mut egui::Ui, product: &Product) {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                self.show_thumbnail(ui, product);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&product.name).strong());
                    if !product.description.is_empty() {
                        ui.label(egui::RichText::new(&product.description).weak());
                    }
                    ui.label(egui::RichText::new(format_price(product.price)).strong());
                });
            });
        });
    }

    fn show_thumbnail(&mut self, ui: &mut egui::Ui, product: &Product) {
        let Some(url) = product.thumbnail_url() else {
            // Records may arrive without images.
            thumbnail_placeholder(ui);
            return;
        };

        let product_id = product.id.clone();
        if !self.thumbnails.contains_key(&product_id) {
            self.thumbnails
                .insert(product_id.clone(), ThumbnailState::Loading);
            dispatch_backend_command(
                &self.cmd_tx,
                BackendCommand::FetchThumbnail {
                    product_id: product_id.clone(),
                    url: url.to_string(),
                },
                &mut self.status,
            );
        }

        match self.thumbnails.get_mut(&product_id) {
            Some(ThumbnailState::Loading) => {
                ui.add_sized(
                    [THUMBNAIL_SIZE, THUMBNAIL_SIZE],
                    egui::Spinner::new().size(20.0),
                );
            }
            Some(ThumbnailState::Ready { image, texture }) => {
                if texture.is_none() {
                    let color = egui::ColorImage::from_rgba_unmultiplied(
                        [image.width, image.height],
                        &image.rgba,
                    );
                    *texture = Some(ui.ctx().load_texture(
                        format!("thumbnail-{}", product_id.as_str()),
                        color,
                        egui::TextureOptions::LINEAR,
                    ));
                }
                if let Some(texture) = texture {
                    ui.add(
                        egui::Image::new(&*texture)
                            .fit_to_exact_size(egui::vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE)),
                    );
                }
            }
            Some(ThumbnailState::Failed) | None => thumbnail_placeholder(ui),
        }
    }
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_filter_bar(ctx);
        self.show_status_bar(ctx);
        self.show_product_list(ctx);

        let waiting_on_backend = self.state.loading
            || self
                .thumbnails
                .values()
                .any(|thumbnail| matches!(thumbnail, ThumbnailState::Loading));
        if waiting_on_backend {
            ctx.request_repaint_after(Duration::from_millis(100));
        } else {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

fn thumbnail_placeholder(ui: &mut egui::Ui) {
    ui.add_sized(
        [THUMBNAIL_SIZE, THUMBNAIL_SIZE],
        egui::Label::new(egui::RichText::new("no image").small().weak()),
    );
}

fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Network",
        UiErrorCategory::RemoteStatus => "Server",
        UiErrorCategory::Malformed => "Data",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

fn format_price(price: f64) -> String {
    format!("R$ {price:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::UiError;
    use crossbeam_channel::{bounded, Receiver};

    fn app_with_events(events: Vec<UiEvent>) -> (CatalogApp, Receiver<BackendCommand>) {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (ui_tx, ui_rx) = bounded(16);
        for event in events {
            assert!(ui_tx.try_send(event).is_ok());
        }
        let mut app = CatalogApp::new(cmd_tx, ui_rx);
        app.process_ui_events();
        (app, cmd_rx)
    }

    fn sample_product(id: &str, name: &str, price: f64) -> Product {
        Product {
            id: ProductId(id.to_string()),
            name: name.to_string(),
            description: String::new(),
            price,
            images: Vec::new(),
        }
    }

    #[test]
    fn formats_prices_with_two_decimals() {
        assert_eq!(format_price(3.0), "R$ 3.00");
        assert_eq!(format_price(39.9), "R$ 39.90");
        assert_eq!(format_price(1250.5), "R$ 1250.50");
    }

    #[test]
    fn initial_mount_queues_exactly_one_catalog_load() {
        let (app, cmd_rx) = app_with_events(Vec::new());
        assert!(app.state.loading);
        assert!(matches!(
            cmd_rx.try_recv(),
            Ok(BackendCommand::LoadCatalog)
        ));
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn catalog_load_failure_sets_banner_and_status() {
        let (app, _cmd_rx) = app_with_events(vec![UiEvent::Error(UiError::from_message(
            UiErrorContext::LoadCatalog,
            "catalog endpoint returned 500 Internal Server Error",
        ))]);

        assert!(!app.state.loading);
        assert!(app
            .state
            .load_error
            .as_deref()
            .is_some_and(|message| message.contains("500")));
        assert!(app.status.starts_with("Server:"));
    }

    #[test]
    fn loaded_catalog_replaces_the_visible_list() {
        let (app, _cmd_rx) = app_with_events(vec![UiEvent::CatalogLoaded(vec![
            sample_product("p2", "Banana", 1.0),
            sample_product("p1", "Apple", 3.0),
        ])]);

        assert!(!app.state.loading);
        assert_eq!(app.state.visible.len(), 2);
        // Default sort key is name ascending.
        assert_eq!(app.state.visible[0].name, "Apple");
    }

    #[test]
    fn thumbnail_failure_does_not_disturb_catalog_state() {
        let (app, _cmd_rx) = app_with_events(vec![
            UiEvent::CatalogLoaded(vec![sample_product("p1", "Apple", 3.0)]),
            UiEvent::ThumbnailFailed {
                product_id: ProductId("p1".to_string()),
                reason: "catalog endpoint returned 404 Not Found".to_string(),
            },
        ]);

        assert_eq!(app.state.visible.len(), 1);
        assert!(app.state.load_error.is_none());
        assert!(matches!(
            app.thumbnails.get(&ProductId("p1".to_string())),
            Some(ThumbnailState::Failed)
        ));
    }
}
