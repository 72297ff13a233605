use crate::format::{
    escape, format_value, DefaultFormats, FieldFormatter, FormatFactory, FormatSpec, OutputFormat,
};
use crate::{ColorMode, Dimensions, Error, Palette, Table, VisParams};

use colorscale::{should_show_light_text, ColorScale, Darkness, Heatmap, Luminance};

/// The collaborators used while rendering.
#[derive(Copy, Clone)]
pub struct Services<'a> {
    pub scale: &'a dyn ColorScale,
    pub darkness: &'a dyn Darkness,
    pub formats: &'a dyn FormatFactory,
    pub output: OutputFormat,
}

impl Default for Services<'static> {
    fn default() -> Self {
        Self {
            scale: &Heatmap,
            darkness: &Luminance,
            formats: &DefaultFormats,
            output: OutputFormat::Text,
        }
    }
}

/// The table cell a metric filters on when selected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FilterTarget {
    pub column: usize,
    pub row: usize,
}

/// A metric ready to be displayed.
#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    /// The title, `None` if labels are hidden.
    pub label: Option<String>,
    /// The formatted value.
    pub value: String,
    /// Text color, only set when coloring labels.
    pub color: Option<String>,
    /// Background color, only set when coloring the background.
    pub bg_color: Option<String>,
    /// Whether the text should be light to stand out on `bg_color`.
    pub light_text: bool,
    pub row_index: usize,
    /// Set when the metric was split by a bucket column.
    pub filter: Option<FilterTarget>,
}

/// Turns a table into metrics, one per metric column and row, in that order.
///
/// This is a pure function of its arguments. Call it again whenever the
/// params or data change.
///
/// Cells that are not numbers render as a placeholder and are not colored.
/// Colors are only applied when there is more than one range. In percentage
/// mode values are rescaled onto the range domain; a domain with no width
/// renders every value as the placeholder.
pub fn render(
    params: &VisParams,
    dimensions: &Dimensions,
    table: &Table,
    services: &Services<'_>,
) -> Result<Vec<Metric>, Error> {
    for accessor in dimensions.accessors() {
        if accessor >= table.columns.len() {
            let columns = table.columns.len();
            log::warn!("dimension refers to column {accessor} but the table has {columns} columns");
            return Err(Error::MissingColumn { accessor, columns });
        }
    }

    let ranges = &params.ranges;
    let palette = Palette::new(
        ranges,
        params.percentage_mode,
        params.invert_colors,
        params.color_schema,
        services.scale,
    );

    let (min, max) = (ranges.min(), ranges.max());
    if params.percentage_mode && max == min {
        log::debug!("percentage mode with an empty domain ({min}..{max}), values are hidden");
    }

    let color_mode = if ranges.len() > 1 {
        params.color_mode
    } else {
        ColorMode::None
    };

    let bucket = dimensions
        .bucket()
        .map(|dimension| (dimension.accessor, services.formats.formatter(&dimension.format)));

    let mut metrics = Vec::with_capacity(dimensions.metrics().len() * table.rows.len());

    for dimension in dimensions.metrics() {
        let column = &table.columns[dimension.accessor];
        let formatter = if params.percentage_mode {
            services.formats.formatter(&FormatSpec::percent())
        } else {
            services.formats.formatter(&dimension.format)
        };

        for row_index in 0..table.rows.len() {
            let raw = table.cell(row_index, dimension.accessor).as_f64();

            let color = (!raw.is_nan()).then(|| palette.color_for(raw).to_owned());

            let value = if params.percentage_mode {
                rescale(raw, min, max)
            } else {
                raw
            };
            let value = format_value(value, &*formatter, services.output);

            // the title is assembled as text and escaped as a whole
            let label = params.show_labels.then(|| {
                let title = match &bucket {
                    Some((accessor, bucket_format)) => format!(
                        "{} - {}",
                        bucket_format.convert(table.cell(row_index, *accessor), OutputFormat::Text),
                        column.name
                    ),
                    None => column.name.clone(),
                };
                escape(&title, services.output)
            });

            let (color, bg_color, light_text) = match color_mode {
                ColorMode::None => (None, None, false),
                ColorMode::Labels => (color, None, false),
                ColorMode::Background => {
                    let light_text = color
                        .as_deref()
                        .map(|c| should_show_light_text(c, services.darkness))
                        .unwrap_or(false);
                    (None, color, light_text)
                }
            };

            let filter = bucket.as_ref().map(|(accessor, _)| FilterTarget {
                column: *accessor,
                row: row_index,
            });

            metrics.push(Metric {
                label,
                value,
                color,
                bg_color,
                light_text,
                row_index,
                filter,
            });
        }
    }

    Ok(metrics)
}

/// Rescale `value` onto `0.0..=1.0` across `min..max`, `NaN` if the span is
/// empty.
fn rescale(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return f64::NAN;
    }

    (value - min) / (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Column, Dimension, Range, Value};
    use colorscale::ColorSchema;
    use core::cell::Cell;

    fn table() -> Table {
        Table::new(vec![Column::new("col-0", "host"), Column::new("col-1", "Count")])
            .with_row(vec![Value::from("web-01"), Value::from(5.0)])
            .with_row(vec![Value::from("web-02"), Value::from(25.0)])
            .with_row(vec![Value::from("web-03"), Value::Null])
    }

    fn three_ranges() -> crate::params::Builder {
        VisParams::builder(vec![
            Range::new(0.0, 10.0),
            Range::new(10.0, 20.0),
            Range::new(20.0, 30.0),
        ])
        .unwrap()
    }

    fn metrics_only() -> Dimensions {
        Dimensions::MetricsOnly {
            metrics: vec![Dimension::new(1, FormatSpec::number())],
        }
    }

    fn with_bucket() -> Dimensions {
        Dimensions::MetricsAndBucket {
            metrics: vec![Dimension::new(1, FormatSpec::number())],
            bucket: Dimension::new(0, FormatSpec::String),
        }
    }

    #[test]
    fn plain() {
        let metrics = render(
            &VisParams::default(),
            &metrics_only(),
            &table(),
            &Services::default(),
        )
        .unwrap();

        assert_eq!(metrics.len(), 3);
        assert_eq!(
            metrics[0],
            Metric {
                label: Some("Count".to_owned()),
                value: "5".to_owned(),
                color: None,
                bg_color: None,
                light_text: false,
                row_index: 0,
                filter: None,
            }
        );
        assert_eq!(metrics[1].value, "25");
        assert_eq!(metrics[2].value, "-");
    }

    #[test]
    fn bucket_titles_and_filters() {
        let metrics = render(
            &VisParams::default(),
            &with_bucket(),
            &table(),
            &Services::default(),
        )
        .unwrap();

        let labels: Vec<_> = metrics.iter().map(|m| m.label.clone().unwrap()).collect();
        assert_eq!(labels, vec!["web-01 - Count", "web-02 - Count", "web-03 - Count"]);
        assert_eq!(metrics[1].filter, Some(FilterTarget { column: 0, row: 1 }));
    }

    #[test]
    fn hidden_labels() {
        let params = VisParams {
            show_labels: false,
            ..Default::default()
        };
        let metrics = render(&params, &with_bucket(), &table(), &Services::default()).unwrap();
        assert!(metrics.iter().all(|m| m.label.is_none()));
        assert!(metrics.iter().all(|m| m.filter.is_some()));
    }

    #[test]
    fn label_colors() {
        let params = three_ranges().color_mode(ColorMode::Labels).build();
        let metrics = render(&params, &metrics_only(), &table(), &Services::default()).unwrap();

        assert_eq!(metrics[0].color.as_deref(), Some("rgb(0,104,55)"));
        assert_eq!(metrics[1].color.as_deref(), Some("rgb(165,0,38)"));
        // not a number, not colored
        assert_eq!(metrics[2].color, None);
        assert!(metrics.iter().all(|m| m.bg_color.is_none() && !m.light_text));
    }

    #[test]
    fn background_colors() {
        let params = three_ranges()
            .color_mode(ColorMode::Background)
            .color_schema(ColorSchema::Greys)
            .build();
        let metrics = render(&params, &metrics_only(), &table(), &Services::default()).unwrap();

        assert_eq!(metrics[0].bg_color.as_deref(), Some("rgb(255,255,255)"));
        assert!(!metrics[0].light_text);
        assert_eq!(metrics[1].bg_color.as_deref(), Some("rgb(0,0,0)"));
        assert!(metrics[1].light_text);
        assert_eq!(metrics[2].bg_color, None);
        assert!(!metrics[2].light_text);
        assert!(metrics.iter().all(|m| m.color.is_none()));
    }

    #[test]
    fn inverted_colors() {
        let params = three_ranges()
            .color_mode(ColorMode::Labels)
            .invert_colors(true)
            .build();
        let metrics = render(&params, &metrics_only(), &table(), &Services::default()).unwrap();

        assert_eq!(metrics[0].color.as_deref(), Some("rgb(165,0,38)"));
        assert_eq!(metrics[1].color.as_deref(), Some("rgb(0,104,55)"));
    }

    #[test]
    fn single_range_is_not_colored() {
        let params = VisParams {
            color_mode: ColorMode::Background,
            ..Default::default()
        };
        let metrics = render(&params, &metrics_only(), &table(), &Services::default()).unwrap();
        assert!(metrics
            .iter()
            .all(|m| m.color.is_none() && m.bg_color.is_none() && !m.light_text));
    }

    #[test]
    fn percentage_mode() {
        let params = three_ranges().percentage_mode(true).build();
        let metrics = render(&params, &metrics_only(), &table(), &Services::default()).unwrap();

        let values: Vec<_> = metrics.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, vec!["16.67%", "83.33%", "-"]);
    }

    #[test]
    fn percentage_mode_empty_domain() {
        let params = VisParams::builder(vec![Range::new(10.0, 10.0)])
            .unwrap()
            .percentage_mode(true)
            .build();
        let metrics = render(&params, &metrics_only(), &table(), &Services::default()).unwrap();
        assert!(metrics.iter().all(|m| m.value == "-"));
    }

    #[test]
    fn missing_column() {
        let dimensions = Dimensions::MetricsAndBucket {
            metrics: vec![Dimension::new(1, FormatSpec::number())],
            bucket: Dimension::new(7, FormatSpec::String),
        };
        assert_eq!(
            render(&VisParams::default(), &dimensions, &table(), &Services::default()),
            Err(Error::MissingColumn {
                accessor: 7,
                columns: 2
            })
        );
    }

    #[test]
    fn metric_then_row_order() {
        let table = Table::new(vec![Column::new("a", "A"), Column::new("b", "B")])
            .with_row(vec![Value::from(1.0), Value::from(2.0)])
            .with_row(vec![Value::from(3.0), Value::from(4.0)]);
        let dimensions = Dimensions::MetricsOnly {
            metrics: vec![
                Dimension::new(1, FormatSpec::number()),
                Dimension::new(0, FormatSpec::number()),
            ],
        };

        let metrics =
            render(&VisParams::default(), &dimensions, &table, &Services::default()).unwrap();
        let rendered: Vec<_> = metrics
            .iter()
            .map(|m| (m.label.clone().unwrap(), m.value.clone(), m.row_index))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("B".to_owned(), "2".to_owned(), 0),
                ("B".to_owned(), "4".to_owned(), 1),
                ("A".to_owned(), "1".to_owned(), 0),
                ("A".to_owned(), "3".to_owned(), 1),
            ]
        );
    }

    struct Never {
        calls: Cell<usize>,
    }

    impl Darkness for Never {
        fn is_dark(&self, _r: u8, _g: u8, _b: u8) -> bool {
            self.calls.set(self.calls.get() + 1);
            false
        }
    }

    // hands out colors that are not in the rgb() form
    struct Named;

    impl ColorScale for Named {
        fn color_for_ratio(&self, ratio: f64, _schema: ColorSchema) -> String {
            if ratio < 0.5 {
                "green".to_owned()
            } else {
                "red".to_owned()
            }
        }
    }

    #[test]
    fn injected_collaborators() {
        let darkness = Never {
            calls: Cell::new(0),
        };
        let services = Services {
            scale: &Named,
            darkness: &darkness,
            ..Services::default()
        };
        let params = three_ranges().color_mode(ColorMode::Background).build();

        let metrics = render(&params, &metrics_only(), &table(), &services).unwrap();
        assert_eq!(metrics[0].bg_color.as_deref(), Some("green"));
        assert_eq!(metrics[1].bg_color.as_deref(), Some("red"));
        assert!(metrics.iter().all(|m| !m.light_text));
        assert_eq!(darkness.calls.get(), 0);
    }

    #[test]
    fn html_output() {
        let table = Table::new(vec![Column::new("a", "tag"), Column::new("b", "Count")])
            .with_row(vec![Value::from("<script>"), Value::from(1.0)]);
        let services = Services {
            output: OutputFormat::Html,
            ..Services::default()
        };
        let metrics = render(&VisParams::default(), &with_bucket(), &table, &services).unwrap();
        assert_eq!(metrics[0].label.as_deref(), Some("&lt;script&gt; - Count"));
    }

    #[test]
    fn html_output_escapes_column_names() {
        let table = Table::new(vec![Column::new("a", "tag"), Column::new("b", "<b>Count</b>")])
            .with_row(vec![Value::from("<x>"), Value::from(1.0)]);
        let services = Services {
            output: OutputFormat::Html,
            ..Services::default()
        };

        let metrics = render(&VisParams::default(), &with_bucket(), &table, &services).unwrap();
        assert_eq!(
            metrics[0].label.as_deref(),
            Some("&lt;x&gt; - &lt;b&gt;Count&lt;/b&gt;")
        );

        let metrics = render(&VisParams::default(), &metrics_only(), &table, &services).unwrap();
        assert_eq!(metrics[0].label.as_deref(), Some("&lt;b&gt;Count&lt;/b&gt;"));

        // text output leaves the title untouched
        let metrics =
            render(&VisParams::default(), &with_bucket(), &table, &Services::default()).unwrap();
        assert_eq!(metrics[0].label.as_deref(), Some("<x> - <b>Count</b>"));
    }
}
