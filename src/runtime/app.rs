use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
#[cfg(debug_assertions)]
use winit::keyboard::{Key, NamedKey};
use winit::keyboard::ModifiersState;
use winit::window::{CursorIcon, Window};

use mazegrid::commands::Cmd;
use mazegrid::config::EditorConfig;
use mazegrid::export;
use mazegrid::keymap::{keystroke_from_winit, load_default_keymap, Command, Keymap};
use mazegrid::layout::HitTarget;
use mazegrid::messages::{AppMsg, Msg, UiMsg};
use mazegrid::model::AppModel;
use mazegrid::tracing::EXPORT_TARGET;
use mazegrid::update::update;

use super::input;
use crate::view::Renderer;

/// How often transient status messages are checked for expiry
const TICK_INTERVAL: Duration = Duration::from_millis(250);

pub struct App {
    model: AppModel,
    keymap: Keymap,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    last_tick: Instant,
    modifiers: ModifiersState,
    mouse_position: Option<(f64, f64)>,
    window_title: String,
    should_quit: bool,
}

impl App {
    /// `session` drives the editor; `saved` is what preference changes persist
    pub fn new(
        window_width: u32,
        window_height: u32,
        saved: EditorConfig,
        session: EditorConfig,
    ) -> Self {
        let keymap = Keymap::with_bindings(load_default_keymap());
        let model =
            AppModel::new(window_width, window_height, session).with_saved_config(saved);
        let window_title = model.window_title();

        tracing::debug!("Loaded {} keybindings", keymap.len());

        Self {
            model,
            keymap,
            renderer: None,
            window: None,
            context: None,
            last_tick: Instant::now(),
            modifiers: ModifiersState::empty(),
            mouse_position: None,
            window_title,
            should_quit: false,
        }
    }

    /// Dispatch a command through the update loop
    fn dispatch_command(&mut self, command: Command) -> Option<Cmd> {
        let mut result = None;
        for msg in command.to_msgs() {
            result = update(&mut self.model, msg).or(result);
        }
        result
    }

    fn init_renderer(&mut self, window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<()> {
        let renderer = Renderer::new(window, context, self.model.config.font_path.as_deref())?;

        self.model.set_char_width(renderer.char_width());
        self.model.set_line_height(renderer.line_height());

        self.renderer = Some(renderer);
        Ok(())
    }

    fn update_cursor_icon(&self, x: f64, y: f64) {
        let Some(window) = &self.window else { return };

        let icon = match input::target_at(&self.model, x, y) {
            Some(HitTarget::Button(_)) => CursorIcon::Pointer,
            Some(HitTarget::Cell { row, col }) if self.model.editor.is_editable(row, col) => {
                CursorIcon::Pointer
            }
            Some(HitTarget::Cell { .. }) => CursorIcon::NotAllowed,
            None => CursorIcon::Default,
        };
        window.set_cursor(icon);
    }

    /// Keep the window title in step with the grid size and locale
    fn sync_window_title(&mut self) {
        let title = self.model.window_title();
        if title != self.window_title {
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
            self.window_title = title;
        }
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => {
                update(&mut self.model, Msg::resize(size.width, size.height))
            }
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
                None
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return None;
                }

                #[cfg(debug_assertions)]
                if event.logical_key == Key::Named(NamedKey::F7) {
                    let dump = mazegrid::debug_dump::StateDump::from_model(&self.model);
                    match dump.save_to_file() {
                        Ok(path) => tracing::info!("State dumped to: {}", path.display()),
                        Err(e) => tracing::warn!("Failed to dump state: {}", e),
                    }
                    return None;
                }

                let bound = keystroke_from_winit(
                    &event.logical_key,
                    event.physical_key,
                    self.modifiers,
                )
                .and_then(|k| self.keymap.lookup(&k).map(|command| (k, command)));

                match bound {
                    Some((keystroke, command)) => {
                        tracing::debug!("Key {} -> {}", keystroke, command.display_name());
                        self.dispatch_command(command)
                    }
                    None => input::handle_key(&mut self.model, &event.logical_key),
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Some((position.x, position.y));
                self.update_cursor_icon(position.x, position.y);
                input::handle_mouse_move(&mut self.model, position.x, position.y)
            }
            WindowEvent::CursorLeft { .. } => {
                self.mouse_position = None;
                input::handle_mouse_leave(&mut self.model)
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    let (x, y) = self.mouse_position?;
                    let cmd = input::handle_mouse_press(&mut self.model, x, y);
                    self.update_cursor_icon(x, y);
                    cmd
                }
                ElementState::Released => input::handle_mouse_release(&mut self.model),
            },
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {:#}", e);
                }
                None
            }
            _ => None,
        }
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model)?;
        }
        Ok(())
    }

    fn tick(&mut self) -> Option<Cmd> {
        update(&mut self.model, Msg::Ui(UiMsg::Tick))
    }

    /// Perform the side effects of a command
    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::LogExport { text } => {
                tracing::info!(target: EXPORT_TARGET, "\n{}", text);
            }
            Cmd::WriteExport {
                dir,
                file_name,
                content,
            } => {
                if let Some(cmd) = run_export(&mut self.model, &dir, &file_name, &content) {
                    if cmd.needs_redraw() {
                        self.request_redraw();
                    }
                    self.process_cmd(cmd);
                }
            }
            Cmd::SaveConfig(config) => {
                if let Err(e) = config.save() {
                    tracing::warn!("Failed to save config: {}", e);
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
            Cmd::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Write the export file and feed its outcome straight back through `update`
fn run_export(
    model: &mut AppModel,
    dir: &Path,
    file_name: &str,
    content: &str,
) -> Option<Cmd> {
    let result = export::write_export(dir, file_name, content).map_err(|e| format!("{:#}", e));
    update(model, Msg::App(AppMsg::ExportCompleted(result)))
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.model.window_size;
        let window_attributes = Window::default_attributes()
            .with_title(self.window_title.clone())
            .with_inner_size(LogicalSize::new(width, height))
            .with_min_inner_size(LogicalSize::new(360, 320));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Rc::new(window),
            Err(e) => {
                tracing::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };
        let context = match Context::new(Rc::clone(&window)) {
            Ok(context) => context,
            Err(e) => {
                tracing::error!("Failed to create graphics context: {}", e);
                event_loop.exit();
                return;
            }
        };

        if let Err(e) = self.init_renderer(Rc::clone(&window), &context) {
            tracing::error!("Failed to initialize renderer: {:#}", e);
            event_loop.exit();
            return;
        }

        let size = window.inner_size();
        self.model.resize(size.width, size.height);
        self.window = Some(window);
        self.context = Some(context);
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        let is_ours = self.window.as_ref().is_some_and(|w| w.id() == window_id);
        if !is_ours {
            return;
        }

        if let Some(cmd) = self.handle_event(&event) {
            let needs_redraw = cmd.needs_redraw();
            self.process_cmd(cmd);
            self.sync_window_title();
            if needs_redraw {
                self.request_redraw();
            }
        }

        if self.should_quit {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now.duration_since(self.last_tick) >= TICK_INTERVAL {
            self.last_tick = now;
            if self.tick().is_some() {
                self.request_redraw();
            }
        }

        if self.should_quit {
            event_loop.exit();
            return;
        }

        // Wake up to expire transient status messages
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.last_tick + TICK_INTERVAL));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazegrid::export::ExportTarget;
    use mazegrid::model::SegmentId;

    fn model_exporting_to(dir: &Path) -> AppModel {
        let config = EditorConfig {
            default_size: 5,
            export_dir: Some(dir.to_path_buf()),
            ..Default::default()
        };
        AppModel::new(800, 600, config)
    }

    #[test]
    fn test_file_export_completes_before_returning() {
        let dir = tempfile::tempdir().unwrap();
        let mut model = model_exporting_to(dir.path());

        let Some(Cmd::WriteExport {
            dir: target,
            file_name,
            content,
        }) = update(&mut model, Msg::export(ExportTarget::File))
        else {
            panic!("expected a WriteExport command");
        };
        assert!(model.ui.is_exporting);

        let cmd = run_export(&mut model, &target, &file_name, &content);
        assert_eq!(cmd, Some(Cmd::Redraw));
        assert!(!model.ui.is_exporting);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("maze.py")).unwrap(),
            content
        );
        let message = model
            .ui
            .status_bar
            .get_segment(SegmentId::Message)
            .map(|s| s.content.display_text().to_string())
            .unwrap();
        assert!(message.ends_with("maze.py"), "{}", message);
    }

    #[test]
    fn test_failed_export_is_reported_in_the_model() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let mut model = model_exporting_to(&blocker);

        update(&mut model, Msg::export(ExportTarget::File));
        run_export(&mut model, &blocker, "maze.py", "game_map = []");

        assert!(!model.ui.is_exporting);
        let flashed = model.ui.transient_message.as_ref().map(|m| m.text.clone());
        assert!(flashed.is_some_and(|t| t.starts_with("Export failed")));
    }
}
