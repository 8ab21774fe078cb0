use anyhow::Result;
use std::env;

use dirindex::App;

fn main() -> Result<()> {
    let root = env::current_dir()?;

    App::new(root).run()
}
