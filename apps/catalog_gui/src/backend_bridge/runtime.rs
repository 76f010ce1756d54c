//! Backend worker: owns the tokio runtime and the catalog client.
//!
//! The UI thread never touches the network. Commands arrive over a bounded
//! channel, are served one at a time, and every outcome goes back to the UI
//! as a [`UiEvent`].

use std::thread;

use anyhow::Context as _;
use catalog_core::CatalogClient;
use crossbeam_channel::{Receiver, Sender};
use tracing::{error, info};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::ui::app::ThumbnailImage;

pub fn spawn_backend_thread(
    catalog_url: String,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = CatalogClient::new(catalog_url);
            info!(url = client.catalog_url(), "backend worker ready");

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LoadCatalog => {
                        let _ = ui_tx.try_send(UiEvent::LoadStarted);
                        match client.fetch_products().await {
                            Ok(products) => {
                                let _ = ui_tx.try_send(UiEvent::CatalogLoaded(products));
                            }
                            Err(err) => {
                                error!("catalog load failed: {err}");
                                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                    UiErrorContext::LoadCatalog,
                                    err.to_string(),
                                )));
                            }
                        }
                    }
                    BackendCommand::FetchThumbnail { product_id, url } => {
                        match client.fetch_image(&url).await {
                            Ok(bytes) => match decode_thumbnail(&bytes) {
                                Ok(image) => {
                                    let _ = ui_tx
                                        .try_send(UiEvent::ThumbnailLoaded { product_id, image });
                                }
                                Err(err) => {
                                    let _ = ui_tx.try_send(UiEvent::ThumbnailFailed {
                                        product_id,
                                        reason: format!("{err:#}"),
                                    });
                                }
                            },
                            Err(err) => {
                                let _ = ui_tx.try_send(UiEvent::ThumbnailFailed {
                                    product_id,
                                    reason: err.to_string(),
                                });
                            }
                        }
                    }
                }
            }
        });
    });
}

fn decode_thumbnail(bytes: &[u8]) -> anyhow::Result<ThumbnailImage> {
    let decoded = image::load_from_memory(bytes).context("unsupported image data")?;
    let rgba = decoded.to_rgba8();
    Ok(ThumbnailImage {
        width: rgba.width() as usize,
        height: rgba.height() as usize,
        rgba: rgba.into_raw(),
    })
}
