//! Programmatic capture to a PNG file.

use std::path::PathBuf;

use anyhow::Context;
use screenspan_engine::{default_backend, DisplayRegistry};
use screenspan_platform_core::Rect;

pub fn run(monitor: usize, rect: Option<String>, output: PathBuf) -> anyhow::Result<()> {
    let registry = DisplayRegistry::new(default_backend());
    let handle = registry
        .handle(monitor)
        .context("no monitors detected")?;

    let capture = match rect {
        Some(spec) => {
            let rect = parse_rect(&spec)?;
            handle.capture_rect(rect)?
        }
        None => handle.capture()?,
    };

    capture
        .image()
        .save(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    let rect = capture.rect();
    println!(
        "Captured S({})[{},{} {}x{}] -> {}",
        capture.monitor(),
        rect.x,
        rect.y,
        rect.w,
        rect.h,
        output.display()
    );
    Ok(())
}

/// Parse "X,Y,WxH" into a global rectangle.
fn parse_rect(spec: &str) -> anyhow::Result<Rect> {
    let parts: Vec<&str> = spec.split(',').collect();
    let [x, y, size] = parts.as_slice() else {
        anyhow::bail!("expected X,Y,WxH, got {spec:?}");
    };
    let (w, h) = size
        .split_once('x')
        .with_context(|| format!("expected WxH in {spec:?}"))?;

    Ok(Rect::new(
        x.trim().parse().context("bad X")?,
        y.trim().parse().context("bad Y")?,
        w.trim().parse().context("bad W")?,
        h.trim().parse().context("bad H")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_origins() {
        let rect = parse_rect("-1280,0,640x480").unwrap();
        assert_eq!(rect, Rect::new(-1280, 0, 640, 480));
    }

    #[test]
    fn rejects_malformed_specs() {
        assert!(parse_rect("10,20").is_err());
        assert!(parse_rect("10,20,640").is_err());
        assert!(parse_rect("a,b,cxd").is_err());
    }
}
