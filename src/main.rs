//! Headless host for the lattice widget: loads `lattice.toml`, runs one
//! measure/draw pass and logs the recorded display list.

use anyhow::{Context, Result};
use engine_core::{Command, Painter, PathCmd, Viewport};
use lattice_config::LatticeConfig;
use lattice_input::{LatticeInput, MeasureSpec, Widget, text_provider_from_config};

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let mut config = match std::env::args().nth(1) {
        Some(path) => LatticeConfig::load_from_file(&path)
            .with_context(|| format!("loading {path}"))?,
        None => LatticeConfig::load_or_default(),
    };
    config.merge_with_env();

    let provider = text_provider_from_config(&config.font)?;
    let mut input = LatticeInput::from_config(&config, provider)?;
    input.on_focus_changed(config.demo.focused);
    input.on_content_changed(&config.demo.text);

    let size = input.measure(
        MeasureSpec::from(config.demo.width),
        MeasureSpec::from(config.demo.height),
    );
    log::info!(
        "{} slots, scale {:.3}, size {}x{}",
        input.item_count(),
        input.scale(),
        size.width,
        size.height
    );

    let mut painter = Painter::begin_frame(Viewport {
        width: size.width,
        height: size.height,
    });
    input.draw(&mut painter, 0);
    let list = painter.finish();

    for command in &list.commands {
        match command {
            Command::DrawText { run, transform, .. } => {
                let [x, y] = transform.apply(run.pos);
                println!("text   {:?} at ({x}, {y}) size {}", run.text, run.size);
            }
            Command::StrokePath { path, stroke, color, transform, .. } => {
                let points: Vec<[f32; 2]> = path
                    .cmds
                    .iter()
                    .filter_map(|c| match c {
                        PathCmd::MoveTo(p) | PathCmd::LineTo(p) => Some(transform.apply(*p)),
                        PathCmd::Close => None,
                    })
                    .collect();
                println!("line   {points:?} width {} color #{:08x}", stroke.width, color.to_argb());
            }
            other => log::debug!("{other:?}"),
        }
    }
    Ok(())
}
