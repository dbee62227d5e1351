use crate::io::error::Error;
use crate::render::{DrawCommand, Drawing};
use std::io::Write;

pub fn write<W: Write>(mut writer: W, drawing: &Drawing) -> Result<(), Error> {
    let (w, h) = (drawing.width, drawing.height);

    writeln!(
        writer,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        num(w),
        num(h),
        num(w),
        num(h)
    )?;

    if let Some(background) = drawing.background {
        writeln!(
            writer,
            r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            num(w),
            num(h),
            background
        )?;
    }

    for command in &drawing.commands {
        match command {
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => writeln!(
                writer,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
                num(from[0]),
                num(from[1]),
                num(to[0]),
                num(to[1]),
                color,
                num(*width)
            )?,
            DrawCommand::Disc {
                center,
                radius,
                fill,
            } => writeln!(
                writer,
                r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                num(center[0]),
                num(center[1]),
                num(*radius),
                fill
            )?,
            DrawCommand::Text {
                center,
                text,
                color,
                font_size,
            } => writeln!(
                writer,
                r#"  <text x="{}" y="{}" font-family="sans-serif" font-size="{}" font-weight="bold" fill="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                num(center[0]),
                num(center[1]),
                num(*font_size),
                color,
                escape_xml(text)
            )?,
        }
    }

    writeln!(writer, "</svg>")?;
    writer.flush()?;
    Ok(())
}

/// Formats a coordinate with at most two decimals and no trailing zeros.
fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let s = format!("{rounded:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
