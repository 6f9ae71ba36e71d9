//! Re-enumerate the monitor setup.

use screenspan_engine::{default_backend, DisplayRegistry};

use super::monitors::print_configuration;

pub fn run() -> anyhow::Result<()> {
    println!("*** BE AWARE: experimental - might not work ***");
    println!("Re-evaluation of the monitor setup has been requested");
    println!("... Monitor handles issued before this point keep stale geometry");

    let registry = DisplayRegistry::new(default_backend());
    registry.reset();

    print_configuration(&registry);
    Ok(())
}
