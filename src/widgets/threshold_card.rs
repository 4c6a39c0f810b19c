//! Labelled threshold readout

use egui::{Color32, Response, RichText, Ui};

/// A tinted card showing one threshold value, or a dash when there is no data
pub struct ThresholdCard<'a> {
    label: &'a str,
    value: Option<f64>,
    color: Color32,
    width: f32,
}

impl<'a> ThresholdCard<'a> {
    pub fn new(label: &'a str, value: Option<f64>, color: Color32) -> Self {
        Self {
            label,
            value,
            color,
            width: 72.0,
        }
    }

    /// Set the minimum card width
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        egui::Frame::group(ui.style())
            .fill(self.color.gamma_multiply(0.15))
            .stroke(egui::Stroke::new(1.0, self.color))
            .show(ui, |ui| {
                ui.set_min_width(self.width);
                ui.vertical(|ui| {
                    ui.label(RichText::new(self.label).strong().color(self.color));
                    ui.label(RichText::new(format_threshold(self.value)).size(20.0).strong());
                });
            })
            .response
    }
}

/// Text for a displayed threshold
pub fn format_threshold(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.0}", v),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_threshold() {
        assert_eq!(format_threshold(Some(144.0)), "144");
        assert_eq!(format_threshold(Some(-2.0)), "-2");
        assert_eq!(format_threshold(None), "—");
    }
}
