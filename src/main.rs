use anyhow::Result;

use load_monitor::ui::{run_ui, App};

fn main() -> Result<()> {
    let mut app = App::new();
    run_ui(&mut app)
}
