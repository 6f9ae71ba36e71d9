//! Show the current monitor configuration.

use screenspan_engine::{default_backend, DisplayRegistry};

pub fn run() -> anyhow::Result<()> {
    let registry = DisplayRegistry::new(default_backend());
    print_configuration(&registry);
    Ok(())
}

pub(crate) fn print_configuration(registry: &DisplayRegistry) {
    let count = registry.screen_count();
    println!("*** monitor configuration [ {count} Screen(s) ] ***");
    println!("*** Primary is Screen {}", registry.primary_id());
    for (id, info) in registry.monitor_infos().iter().enumerate() {
        let b = info.bounds;
        println!(
            "Screen {id}: S({id})[{},{} {}x{}] {} (scale {}x)",
            b.x, b.y, b.w, b.h, info.name, info.scale_factor
        );
    }
    let virtual_bounds = registry.virtual_bounds();
    println!(
        "Virtual desktop: [{},{} {}x{}]",
        virtual_bounds.x, virtual_bounds.y, virtual_bounds.w, virtual_bounds.h
    );
    println!("*** end monitor configuration ***");
}
