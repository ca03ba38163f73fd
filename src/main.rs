use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use mazegrid::cli::CliArgs;
use mazegrid::config::EditorConfig;

mod runtime;
mod view;

use runtime::App;

const WINDOW_WIDTH: u32 = 900;
const WINDOW_HEIGHT: u32 = 760;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let startup = args.into_config().map_err(|e| anyhow::anyhow!(e))?;

    mazegrid::tracing::init();

    let saved = EditorConfig::load();
    let session = startup.session_config(&saved);

    if startup.is_headless() {
        let stdout = std::io::stdout();
        startup.run_headless(&session, &mut stdout.lock())?;
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(WINDOW_WIDTH, WINDOW_HEIGHT, saved, session);

    event_loop.run_app(&mut app)?;

    Ok(())
}
