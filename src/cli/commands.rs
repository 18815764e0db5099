//! Shell command handlers.

use std::fs;
use std::path::Path;

use crate::chart::{MotionEvent, SvgCanvas};
use crate::cli::context::ShellContext;
use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::formatting::format_amount;
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::utils::build_info;

pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "help",
        "List commands, or show usage for one",
        "help [command]",
        cmd_help,
    ));
    registry.register(CommandEntry::new(
        "load",
        "Load the bundled dataset or a JSON file of transactions",
        "load [path]",
        cmd_load,
    ));
    registry.register(CommandEntry::new(
        "size",
        "Resize the host viewport and re-measure the chart",
        "size <width> <height>",
        cmd_size,
    ));
    registry.register(CommandEntry::new(
        "tap",
        "Tap the chart at view coordinates",
        "tap <x> <y>",
        cmd_tap,
    ));
    registry.register(CommandEntry::new(
        "render",
        "Draw the current chart to an SVG file",
        "render <file.svg>",
        cmd_render,
    ));
    registry.register(CommandEntry::new(
        "status",
        "Show selection, totals and the sector layout",
        "status",
        cmd_status,
    ));
    registry.register(CommandEntry::new(
        "rotate",
        "Recreate the view as a configuration change would",
        "rotate",
        cmd_rotate,
    ));
    registry.register(CommandEntry::new(
        "version",
        "Show build information",
        "version",
        cmd_version,
    ));
    registry.register(CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit));
    registry.register(CommandEntry::new("quit", "Leave the shell", "quit", cmd_exit));
}

fn expect_args(args: &[&str], range: std::ops::RangeInclusive<usize>, usage: &str) -> CommandResult {
    if range.contains(&args.len()) {
        Ok(())
    } else {
        Err(CommandError::InvalidArguments(format!("Usage: {usage}")))
    }
}

fn parse_number<T: std::str::FromStr>(raw: &str, what: &str) -> Result<T, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::InvalidArguments(format!("`{raw}` is not a valid {what}")))
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 0..=1, "help [command]")?;
    if let Some(name) = args.first() {
        let Some(entry) = context.registry.get(&name.to_lowercase()) else {
            context.suggest_command(name);
            return Ok(());
        };
        output::info(format!("{}: {}", entry.usage, entry.description));
        return Ok(());
    }
    output::section("Commands");
    for entry in context.registry.list() {
        output::info(format!("{:<24} {}", entry.usage, entry.description));
    }
    Ok(())
}

fn cmd_load(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 0..=1, "load [path]")?;
    let count = context.load_dataset(args.first().map(Path::new));
    output::success(format!(
        "Loaded {} transactions in {} categories.",
        count,
        context.view().categories().len()
    ));
    Ok(())
}

fn cmd_size(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 2..=2, "size <width> <height>")?;
    let width: i32 = parse_number(args[0], "width")?;
    let height: i32 = parse_number(args[1], "height")?;
    if width <= 0 || height <= 0 {
        return Err(CommandError::InvalidArguments(
            "Viewport dimensions must be positive".into(),
        ));
    }
    context.set_viewport(width, height);
    context.pump_frame();
    let frame = context.view().frame();
    output::success(format!(
        "Chart measured at {}x{} (radius {:.1}).",
        frame.width, frame.height, frame.radius
    ));
    Ok(())
}

fn cmd_tap(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 2..=2, "tap <x> <y>")?;
    let x: f32 = parse_number(args[0], "x coordinate")?;
    let y: f32 = parse_number(args[1], "y coordinate")?;
    let hit = context.view_mut().on_touch_event(MotionEvent::down(x, y));
    if hit {
        context.show_pending_details();
    } else {
        output::info(format!("No sector at ({x}, {y}); selection cleared."));
    }
    Ok(())
}

fn cmd_render(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 1..=1, "render <file.svg>")?;
    context.pump_frame();
    let frame = *context.view().frame();
    let mut canvas = SvgCanvas::new(frame.width, frame.height);
    context.view_mut().on_draw(&mut canvas);
    fs::write(args[0], canvas.finish())?;
    output::success(format!("Chart written to {}.", args[0]));
    Ok(())
}

fn cmd_status(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 0..=0, "status")?;
    let view = context.view();
    let currency = &context.config().currency_suffix;
    output::section("Chart");
    output::info(format!(
        "Total: {} in {} categories",
        format_amount(view.total(), currency),
        view.categories().len()
    ));
    match view.selected_category() {
        Some(category) => output::info(format!(
            "Selected: #{} {}",
            view.selected_index(),
            category.category
        )),
        None => output::info(format!("Selected: {}", view.selected_index())),
    }
    let sectors = view.sectors();
    if sectors.is_empty() {
        output::info("No sectors to draw.");
        return Ok(());
    }
    for sector in sectors {
        let Some(category) = view.categories().get(sector.index) else {
            continue;
        };
        output::info(format!(
            "{:>2}. {:<24} {:>14}  start {:>8.2}  sweep {:>7.2}",
            sector.index,
            category.category,
            format_amount(category.amount, currency),
            sector.start_angle,
            sector.sweep_angle
        ));
    }
    Ok(())
}

fn cmd_rotate(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 0..=0, "rotate")?;
    context.recreate_view();
    output::success(format!(
        "View recreated; selection {}.",
        context.view().selected_index()
    ));
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 0..=0, "version")?;
    output::info(build_info::current().summary());
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
