//! Text measurement for label layout.

/// Heuristic: estimate pixel width of text (Plotters has no built-in text
/// measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Truncate to fit `max_px` and add a single ellipsis if needed.
pub fn truncate_to_width(text: &str, font_px: u32, max_px: u32) -> String {
    let mut out = String::new();
    for ch in text.chars() {
        let next = format!("{out}{ch}");
        if estimate_text_width_px(&next, font_px) > max_px {
            if !out.is_empty() {
                if estimate_text_width_px(&(out.clone() + "…"), font_px) <= max_px {
                    out.push('…');
                } else if out.len() > 1 {
                    out.pop();
                    out.push('…');
                }
            }
            return out;
        }
        out = next;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_grows_with_length() {
        assert!(estimate_text_width_px("London", 12) > estimate_text_width_px("LHR", 12));
        assert_eq!(estimate_text_width_px("", 12), 0);
    }

    #[test]
    fn truncation_fits_the_width() {
        let t = truncate_to_width("United States of America", 12, 60);
        assert!(estimate_text_width_px(&t, 12) <= 60);
        assert!(t.ends_with('…'));
        assert_eq!(truncate_to_width("US", 12, 60), "US");
    }
}
