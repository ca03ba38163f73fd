//! App message handlers (export, locale, window events)

use crate::commands::Cmd;
use crate::export::{ExportTarget, EXPORT_FILE_NAME};
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages (export, locale, window events)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.resize(width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::Export(ExportTarget::Log) => {
            let text = model.editor.export_grid(&model.config.variable_name);
            let message = if warn_if_no_spawn(model) {
                model.tr("status.export_no_spawn")
            } else {
                model.tr("status.logged")
            };
            model.ui.flash(message);
            Some(Cmd::batch(vec![Cmd::LogExport { text }, Cmd::Redraw]))
        }

        AppMsg::Export(ExportTarget::File) => {
            if model.ui.is_exporting {
                tracing::debug!("Export already in flight, ignoring");
                return None;
            }
            let content = model.editor.export_grid(&model.config.variable_name);
            model.ui.is_exporting = true;
            let message = model.tr("status.exporting");
            model.ui.set_status(message);
            Some(Cmd::WriteExport {
                dir: model.config.resolved_export_dir(),
                file_name: EXPORT_FILE_NAME.to_string(),
                content,
            })
        }

        AppMsg::ExportCompleted(result) => {
            model.ui.is_exporting = false;
            let ready = model.tr("status.ready");
            model.ui.set_status(ready);
            let message = match result {
                Ok(artifact) => {
                    tracing::info!(
                        "Exported {} bytes to {}",
                        artifact.bytes,
                        artifact.path.display()
                    );
                    let exported = model.tr_with(
                        "status.exported",
                        &[("path", artifact.path.display().to_string())],
                    );
                    if warn_if_no_spawn(model) {
                        format!("{} ({})", exported, model.tr("status.no_spawn"))
                    } else {
                        exported
                    }
                }
                Err(e) => {
                    tracing::warn!("Export failed: {}", e);
                    model.tr_with("status.export_failed", &[("error", e)])
                }
            };
            model.ui.flash(message);
            Some(Cmd::Redraw)
        }

        AppMsg::SetLocale(code) => match model.locale.set_locale(&code) {
            Ok(()) => {
                model.config.locale = code.clone();
                model.saved_config.locale = code;
                let name = model.locale.locale_name(model.locale.current_locale());
                let message = model.tr_with("status.locale_changed", &[("name", name)]);
                model.ui.flash(message);
                Some(Cmd::batch(vec![
                    Cmd::SaveConfig(model.saved_config.clone()),
                    Cmd::Redraw,
                ]))
            }
            Err(e) => {
                tracing::warn!("{}", e);
                model.ui.flash(e.to_string());
                Some(Cmd::Redraw)
            }
        },

        AppMsg::CycleLocale => {
            let next = model.locale.next_locale()?;
            update_app(model, AppMsg::SetLocale(next))
        }

        AppMsg::Quit => Some(Cmd::Quit),
    }
}

/// Log a warning when the map has no free spawn cell
fn warn_if_no_spawn(model: &AppModel) -> bool {
    let missing = model.editor.grid().spawn_point().is_none();
    if missing {
        tracing::warn!(
            "Exporting a {}×{} map with no free spawn cell",
            model.editor.size(),
            model.editor.size()
        );
    }
    missing
}
