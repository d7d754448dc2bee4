use anyhow::Result;
use stocked_cli::app;

fn main() -> Result<()> {
    app::run()
}
