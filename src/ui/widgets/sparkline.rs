//! Series sparkline widget for inline history/prediction charts

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Block characters for different series values (8 levels)
const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// A sparkline widget showing a metric series over the month axis
///
/// Values are normalized against the min/max of the series itself. A marker
/// column highlights the current month, everything right of it being
/// prediction data.
pub struct SeriesSparkline<'a> {
    /// Series values, oldest first
    values: &'a [f64],
    /// Column to highlight as the current month
    marker: Option<usize>,
    /// Style for history columns
    style: Style,
    /// Style for the marker column
    marker_style: Style,
    /// Style for columns after the marker (predictions)
    prediction_style: Style,
}

impl<'a> SeriesSparkline<'a> {
    pub fn new(values: &'a [f64]) -> Self {
        Self {
            values,
            marker: None,
            style: Style::default().fg(Color::Cyan),
            marker_style: Style::default().fg(Color::Yellow),
            prediction_style: Style::default().fg(Color::DarkGray),
        }
    }

    /// Marks a column as the current month
    pub fn marker(mut self, index: usize) -> Self {
        self.marker = Some(index);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Maps a value to a block character, normalized over the series range
    fn value_to_block(&self, value: f64) -> char {
        let (min, max) = self
            .values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(*v), hi.max(*v))
            });

        // Flat or empty series renders mid-height
        if !min.is_finite() || (max - min).abs() < f64::EPSILON {
            return BLOCKS[3];
        }

        let normalized = ((value - min) / (max - min)).clamp(0.0, 1.0);
        let index = ((normalized * 7.0).round() as usize).min(7);
        BLOCKS[index]
    }
}

impl<'a> Widget for SeriesSparkline<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width as usize;

        for (i, value) in self.values.iter().take(width).enumerate() {
            let block = self.value_to_block(*value);
            let x = area.x + i as u16;
            let y = area.y;

            let style = match self.marker {
                Some(m) if i == m => self.marker_style,
                Some(m) if i > m => self.prediction_style,
                _ => self.style,
            };

            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(block).set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_to_block_minimum() {
        let values = [10.0, 20.0, 30.0];
        let sparkline = SeriesSparkline::new(&values);
        assert_eq!(sparkline.value_to_block(10.0), '▁');
    }

    #[test]
    fn test_value_to_block_maximum() {
        let values = [10.0, 20.0, 30.0];
        let sparkline = SeriesSparkline::new(&values);
        assert_eq!(sparkline.value_to_block(30.0), '█');
    }

    #[test]
    fn test_value_to_block_mid() {
        let values = [0.0, 100.0];
        let sparkline = SeriesSparkline::new(&values);
        let block = sparkline.value_to_block(50.0);
        assert!(BLOCKS.contains(&block));
        assert_ne!(block, '▁');
        assert_ne!(block, '█');
    }

    #[test]
    fn test_flat_series_renders_mid_height() {
        let values = [42.0, 42.0, 42.0];
        let sparkline = SeriesSparkline::new(&values);
        assert_eq!(sparkline.value_to_block(42.0), '▄');
    }

    #[test]
    fn test_empty_series_is_safe() {
        let sparkline = SeriesSparkline::new(&[]);
        assert!(BLOCKS.contains(&sparkline.value_to_block(0.0)));
    }

    #[test]
    fn test_sparkline_builder() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 3.0, 2.0, 1.0];
        let sparkline = SeriesSparkline::new(&values)
            .marker(3)
            .style(Style::default().fg(Color::Blue));

        assert_eq!(sparkline.values.len(), 7);
        assert_eq!(sparkline.marker, Some(3));
    }

    #[test]
    fn test_render_writes_blocks_into_buffer() {
        let values = [1.0, 5.0, 3.0];
        let sparkline = SeriesSparkline::new(&values).marker(1);
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);

        sparkline.render(area, &mut buf);

        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "▁");
        assert_eq!(buf.cell((1, 0)).unwrap().symbol(), "█");
        // Marker column carries the marker style
        assert_eq!(
            buf.cell((1, 0)).unwrap().style().fg,
            Some(Color::Yellow)
        );
    }
}
