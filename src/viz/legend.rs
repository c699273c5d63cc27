//! Legend panel: the highest-volume countries with their colors and counts.

use crate::models::CountryStat;
use crate::palette;
use crate::viz::text::{estimate_text_width_px, truncate_to_width};
use crate::viz::util::{map_locale, to_rgb};
use anyhow::{Result, anyhow};
use num_format::ToFormattedString;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;

const FONT_PX: u32 = 12;
const ROW_H: i32 = 18;
const PAD: i32 = 10;
const SWATCH_R: i32 = 4;
const NAME_MAX_PX: u32 = 150;

/// Draw a compact legend panel in the lower-left corner of the canvas
/// (open ocean for the default projection).
pub fn draw_legend<DB>(
    root: &DrawingArea<DB, Shift>,
    entries: &[CountryStat],
    locale_tag: &str,
) -> Result<()>
where
    DB: DrawingBackend,
{
    if entries.is_empty() {
        return Ok(());
    }
    let locale = map_locale(locale_tag);
    let (_, canvas_h) = root.dim_in_pixel();

    let rows: Vec<(CountryStat, String)> = entries
        .iter()
        .map(|e| (e.clone(), e.request_count.to_formatted_string(locale)))
        .collect();

    let widest: u32 = rows
        .iter()
        .map(|(e, count)| {
            let name = truncate_to_width(&e.name, FONT_PX, NAME_MAX_PX);
            estimate_text_width_px(&format!("{} {} {}", e.code, name, count), FONT_PX)
        })
        .max()
        .unwrap_or(0);

    let panel_w = widest as i32 + 2 * PAD + 2 * SWATCH_R + 6;
    let panel_h = rows.len() as i32 * ROW_H + 2 * PAD;
    let x0 = PAD;
    let y0 = canvas_h as i32 - panel_h - PAD;

    root.draw(&Rectangle::new(
        [(x0, y0), (x0 + panel_w, y0 + panel_h)],
        WHITE.mix(0.85).filled(),
    ))
    .map_err(|e| anyhow!("{:?}", e))?;
    root.draw(&Rectangle::new(
        [(x0, y0), (x0 + panel_w, y0 + panel_h)],
        BLACK.mix(0.25),
    ))
    .map_err(|e| anyhow!("{:?}", e))?;

    for (i, (entry, count)) in rows.iter().enumerate() {
        let cy = y0 + PAD + i as i32 * ROW_H + ROW_H / 2;
        let color = palette::parse_hex(&entry.color)
            .map(to_rgb)
            .unwrap_or(RGBColor(0x9c, 0xa3, 0xaf));
        root.draw(&Circle::new(
            (x0 + PAD + SWATCH_R, cy),
            SWATCH_R,
            color.filled(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;

        let name = truncate_to_width(&entry.name, FONT_PX, NAME_MAX_PX);
        let label = format!("{}  {}  {}", entry.code, name, count);
        let style = TextStyle::from((FontFamily::SansSerif, FONT_PX)).color(&RGBColor(40, 40, 40));
        root.draw(&Text::new(
            label,
            (x0 + PAD + 2 * SWATCH_R + 6, cy - FONT_PX as i32 / 2),
            style,
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
    }

    Ok(())
}
