//! Check system capabilities.

use screenspan_engine::{default_backend, DisplayRegistry};
use screenspan_platform_desktop::{detect_display_server, is_capture_available, DisplayServer};

pub fn run() -> anyhow::Result<()> {
    println!("Screenspan System Check");
    println!("{}", "=".repeat(50));

    // Display server
    let ds = detect_display_server();
    match ds {
        DisplayServer::Wayland => println!("[OK] Display server: Wayland"),
        DisplayServer::X11 => println!("[OK] Display server: X11"),
        DisplayServer::Windows => println!("[OK] Display server: Windows"),
        DisplayServer::MacOS => println!("[OK] Display server: macOS"),
        DisplayServer::Unknown => println!("[WARN] Display server: Unknown"),
    }

    // Monitors
    let registry = DisplayRegistry::new(default_backend());
    let count = registry.screen_count();
    if count == 0 {
        println!("[WARN] Monitors detected: 0");
    } else {
        println!("[OK] Monitors detected: {count}");
    }
    for info in registry.monitor_infos() {
        let b = info.bounds;
        println!(
            "     {} [{},{} {}x{}] (scale: {}x) {}",
            info.name,
            b.x,
            b.y,
            b.w,
            b.h,
            info.scale_factor,
            if info.is_primary { "(primary)" } else { "" }
        );
    }

    // Capture primitive
    let capture_ok = is_capture_available();
    if capture_ok {
        println!("[OK] Screen capture primitive available");
    } else {
        println!("[WARN] Screen capture primitive unavailable");
    }

    println!();
    if count > 0 && capture_ok {
        println!("All required capabilities are available. Screenspan is ready.");
    } else {
        println!("Some required capabilities are missing. See above.");
    }

    Ok(())
}
